use super::*;
use serde_json::json;

#[test]
fn parses_hex_rgb_and_rgba() {
    let c: Color = serde_json::from_value(json!("#2ea043")).unwrap();
    assert_eq!(c, Color::hex(0x2EA043));

    let c: Color = serde_json::from_value(json!("#0000ff80")).unwrap();
    assert_eq!(c, Color::rgb(0, 0, 255).with_alpha_u8(0x80));
}

#[test]
fn rejects_malformed_hex() {
    assert!(Color::parse_hex("#12345").is_err());
    assert!(Color::parse_hex("#zzzzzz").is_err());
    assert!(serde_json::from_value::<Color>(json!("red")).is_err());
}

#[test]
fn serializes_as_rgba_hex() {
    let c = Color::hex(0x58A6FF).with_alpha(0.2);
    assert_eq!(serde_json::to_value(c).unwrap(), json!("#58A6FF33"));
}

#[test]
fn with_alpha_clamps() {
    assert_eq!(Color::WHITE.with_alpha(2.0).a, 255);
    assert_eq!(Color::WHITE.with_alpha(-1.0).a, 0);
}
