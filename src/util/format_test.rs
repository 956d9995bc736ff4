use super::*;

#[test]
fn format_price_with_and_without_currency() {
    assert_eq!(format_price(189.5, "USD"), "189.50 USD");
    assert_eq!(format_price(3.0, ""), "3.00");
}

#[test]
fn format_change_always_signed() {
    assert_eq!(format_change(1.25, 0.66), "+1.25 (+0.66%)");
    assert_eq!(format_change(-1.25, -0.66), "-1.25 (-0.66%)");
}

#[test]
fn change_class_flat_counts_as_up() {
    assert_eq!(change_class(0.0), "quote--up");
    assert_eq!(change_class(-0.01), "quote--down");
}

#[test]
fn format_volume_uses_suffixes() {
    assert_eq!(format_volume(51_234_000.0), "51.2M");
    assert_eq!(format_volume(2_500_000_000.0), "2.5B");
    assert_eq!(format_volume(3_400.0), "3.4K");
    assert_eq!(format_volume(950.0), "950");
}
