use super::*;
use serde_json::json;

#[test]
fn parses_hex_rgb_and_rgba() {
    assert_eq!(Color::from_hex("#ff0000").unwrap(), Color::rgb(255, 0, 0));
    assert_eq!(Color::from_hex("0000FF80").unwrap(), Color::rgba(0, 0, 255, 0x80));
    assert_eq!(
        Color::from_hex("  #f0f0f0ff ").unwrap(),
        Color::rgba(0xF0, 0xF0, 0xF0, 0xFF)
    );
}

#[test]
fn rejects_malformed_hex() {
    assert!(Color::from_hex("#fff").is_err());
    assert!(Color::from_hex("#gg0000").is_err());
    assert!(Color::from_hex("").is_err());
    assert!(Color::from_hex("#ééé").is_err());
}

#[test]
fn serde_uses_hex_strings() {
    let c: Color = serde_json::from_value(json!("#CEDFE6")).unwrap();
    assert_eq!(serde_json::to_value(c).unwrap(), json!("#CEDFE6"));

    let c = Color::rgba(1, 2, 3, 4);
    assert_eq!(serde_json::to_value(c).unwrap(), json!("#01020304"));
    assert_eq!(c.rgb_hex(), "#010203");
}

#[test]
fn empty_palette_is_rejected() {
    assert!(Palette::new(vec![]).is_err());
    assert!(serde_json::from_value::<Palette>(json!([])).is_err());
    let err = Palette::from_hex::<&str>(&[]).unwrap_err();
    assert!(err.to_string().contains("at least one color"));
}

#[test]
fn builtin_palettes_match_sizes() {
    assert_eq!(Palette::pastel().len(), 6);
    assert_eq!(Palette::vivid().len(), 20);
    assert_eq!(Palette::default(), Palette::pastel());
}

#[test]
fn palette_get_wraps() {
    let p = Palette::from_hex(&["#000000", "#ffffff"]).unwrap();
    assert_eq!(p.get(0), Color::rgb(0, 0, 0));
    assert_eq!(p.get(3), Color::rgb(255, 255, 255));
}
