//! Declarative route table.
//!
//! DESIGN
//! ======
//! The table is the single description of what the app can navigate to.
//! The shell resolves the current pathname against it and hands the match
//! to the guard; nothing else decides which page a path renders.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

/// Path of the login entry point that guarded routes redirect to.
pub const LOGIN_PATH: &str = "/login";

/// A top-level view of the app.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Page {
    Home,
    Login,
    Signup,
    Dashboard,
    Stocks,
    StockDetail,
    NotFound,
}

/// One entry in the route table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RouteDescriptor {
    /// Literal segments and `:name` captures, or `*` for the fallback.
    pub path: &'static str,
    pub page: Page,
    pub guarded: bool,
}

pub static ROUTES: &[RouteDescriptor] = &[
    RouteDescriptor { path: "/", page: Page::Home, guarded: false },
    RouteDescriptor { path: LOGIN_PATH, page: Page::Login, guarded: false },
    RouteDescriptor { path: "/signup", page: Page::Signup, guarded: false },
    RouteDescriptor { path: "/dashboard", page: Page::Dashboard, guarded: true },
    RouteDescriptor { path: "/stocks", page: Page::Stocks, guarded: true },
    RouteDescriptor { path: "/stocks/:symbol", page: Page::StockDetail, guarded: true },
];

/// Matched when nothing in [`ROUTES`] does.
pub static FALLBACK: RouteDescriptor = RouteDescriptor { path: "*", page: Page::NotFound, guarded: false };

/// Values captured from `:name` segments.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RouteParams(Vec<(&'static str, String)>);

impl RouteParams {
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.iter().find(|(k, _)| *k == name).map(|(_, v)| v.as_str())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Result of resolving a pathname.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RouteMatch {
    pub route: &'static RouteDescriptor,
    pub params: RouteParams,
}

/// Resolve a pathname against [`ROUTES`], falling back to [`FALLBACK`].
///
/// Query strings and fragments are ignored, as are empty segments
/// (so `/stocks/` and `//stocks` both match `/stocks`).
#[must_use]
pub fn resolve(pathname: &str) -> RouteMatch {
    let path = pathname.split(['?', '#']).next().unwrap_or_default();
    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

    ROUTES
        .iter()
        .find_map(|route| match_route(route, &segments).map(|params| RouteMatch { route, params }))
        .unwrap_or_else(|| RouteMatch { route: &FALLBACK, params: RouteParams::default() })
}

fn match_route(route: &'static RouteDescriptor, segments: &[&str]) -> Option<RouteParams> {
    let pattern: Vec<&'static str> = route.path.split('/').filter(|s| !s.is_empty()).collect();
    if pattern.len() != segments.len() {
        return None;
    }
    let mut params = Vec::new();
    for (want, got) in pattern.iter().copied().zip(segments.iter().copied()) {
        if let Some(name) = want.strip_prefix(':') {
            params.push((name, got.to_owned()));
        } else if want != got {
            return None;
        }
    }
    Some(RouteParams(params))
}

/// Path of the detail page for `symbol`.
#[must_use]
pub fn stock_detail_path(symbol: &str) -> String {
    format!("/stocks/{symbol}")
}
