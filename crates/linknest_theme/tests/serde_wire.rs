//! Wire-format compatibility with the persisted JSON blobs.

use linknest_theme::{
    BlockShadow, BlockStyleOverrides, BlockVariant, ButtonStyle, ThemePatch, ThemeTokens,
};
use pretty_assertions::assert_eq;
use serde_json::json;

#[test]
fn theme_patch_reads_camel_case_keys() {
    let patch: ThemePatch = serde_json::from_value(json!({
        "colorPrimary": "#1A1A2E",
        "fontSizeBase": 18,
        "buttonStyle": "pill",
        "backgroundEffect": "gradient",
        "hideBranding": true
    }))
    .unwrap();
    assert_eq!(patch.color_primary.as_deref(), Some("#1A1A2E"));
    assert_eq!(patch.font_size_base, Some(18));
    assert_eq!(patch.button_style, Some(ButtonStyle::Pill));
    assert_eq!(patch.hide_branding, Some(true));
    assert_eq!(patch.color_background, None);
}

#[test]
fn theme_patch_serializes_only_populated_fields() {
    let patch = ThemePatch {
        color_accent: Some("#22D3EE".into()),
        ..Default::default()
    };
    let value = serde_json::to_value(&patch).unwrap();
    assert_eq!(value, json!({ "colorAccent": "#22D3EE" }));
}

#[test]
fn block_overrides_read_camel_case_keys() {
    let overrides: BlockStyleOverrides = serde_json::from_value(json!({
        "variant": "secondary",
        "bgColor": "#FF0000",
        "borderRadius": 12,
        "shadow": "sm"
    }))
    .unwrap();
    assert_eq!(overrides.variant, Some(BlockVariant::Secondary));
    assert_eq!(overrides.bg_color.as_deref(), Some("#FF0000"));
    assert_eq!(overrides.border_radius, Some(12));
    assert_eq!(overrides.shadow, Some(BlockShadow::Sm));
    assert!(!overrides.is_empty());
    assert!(overrides.has_custom_fields());
}

#[test]
fn empty_json_object_is_the_empty_overrides() {
    let overrides: BlockStyleOverrides = serde_json::from_value(json!({})).unwrap();
    assert!(overrides.is_empty());
    assert!(!overrides.has_custom_fields());
}

#[test]
fn variant_alone_is_not_a_custom_field() {
    let overrides: BlockStyleOverrides =
        serde_json::from_value(json!({ "variant": "primary" })).unwrap();
    assert!(!overrides.has_custom_fields());
}

#[test]
fn unknown_variants_are_rejected_at_the_boundary() {
    let result = serde_json::from_value::<BlockStyleOverrides>(json!({ "variant": "fancy" }));
    assert!(result.is_err());
}

#[test]
fn fractional_and_negative_radii_are_rejected_at_the_boundary() {
    for bad in [json!({ "borderRadius": 4.5 }), json!({ "borderRadius": -1 })] {
        assert!(serde_json::from_value::<BlockStyleOverrides>(bad).is_err());
    }
}

#[test]
fn unknown_button_styles_are_rejected_in_write_payloads() {
    // A bad style id must be surfaced to the editor, not rewritten.
    assert!(
        serde_json::from_value::<BlockStyleOverrides>(json!({ "buttonStyle": "sparkle" })).is_err()
    );
    assert!(serde_json::from_value::<ThemePatch>(json!({ "buttonStyle": "sparkle" })).is_err());
}

#[test]
fn unknown_button_styles_render_as_filled() {
    // Fail-soft on the read path only: legacy themes keep rendering.
    let mut value = serde_json::to_value(linknest_theme::Template::CleanSlate.default_theme())
        .unwrap();
    value["buttonStyle"] = json!("sparkle");
    let theme: ThemeTokens = serde_json::from_value(value).unwrap();
    assert_eq!(theme.button_style, ButtonStyle::Filled);
}

#[test]
fn theme_tokens_use_the_original_wire_names() {
    let theme = linknest_theme::Template::CoralReef.default_theme();
    let value = serde_json::to_value(&theme).unwrap();
    assert_eq!(value["colorBackground"], "#FFF5F0");
    assert_eq!(value["buttonStyle"], "pill");
    assert_eq!(value["shadow"], "sm");
    assert_eq!(value["backgroundEffect"], "gradient");
    assert_eq!(value["version"], 1);

    let back: ThemeTokens = serde_json::from_value(value).unwrap();
    assert_eq!(back, theme);
}
