use linknest_theme::style::prop;
use linknest_theme::{
    resolve_block_style, BlockShadow, BlockStyleOverrides, BlockVariant, ButtonStyle, StyleMap,
    Template,
};
use pretty_assertions::assert_eq;

fn theme() -> linknest_theme::ThemeTokens {
    Template::CleanSlate.default_theme()
}

#[test]
fn empty_overrides_resolve_to_an_exactly_empty_map() {
    let style = resolve_block_style(&theme(), &BlockStyleOverrides::default());
    assert_eq!(style, StyleMap::new());
}

#[test]
fn primary_variant_uses_surface_and_primary() {
    let theme = theme();
    let overrides = BlockStyleOverrides {
        variant: Some(BlockVariant::Primary),
        ..Default::default()
    };
    let style = resolve_block_style(&theme, &overrides);
    assert_eq!(style[prop::BACKGROUND_COLOR], theme.color_surface);
    assert_eq!(style[prop::COLOR], theme.color_primary);
}

#[test]
fn secondary_variant_tints_the_secondary_color() {
    let theme = theme();
    let overrides = BlockStyleOverrides {
        variant: Some(BlockVariant::Secondary),
        ..Default::default()
    };
    let style = resolve_block_style(&theme, &overrides);
    assert_eq!(
        style[prop::BACKGROUND_COLOR],
        format!("{}20", theme.color_secondary)
    );
    assert_eq!(style[prop::COLOR], theme.color_text);
}

#[test]
fn outline_variant_draws_a_border() {
    let theme = theme();
    let overrides = BlockStyleOverrides {
        variant: Some(BlockVariant::Outline),
        ..Default::default()
    };
    let style = resolve_block_style(&theme, &overrides);
    assert_eq!(style[prop::BACKGROUND_COLOR], "transparent");
    assert_eq!(style[prop::COLOR], theme.color_text);
    assert_eq!(style[prop::BORDER_WIDTH], "1px");
    assert_eq!(style[prop::BORDER_COLOR], theme.border_color);
    assert_eq!(style[prop::BORDER_STYLE], "solid");
}

#[test]
fn subtle_variant_uses_muted_text_and_a_faded_border() {
    let theme = theme();
    let overrides = BlockStyleOverrides {
        variant: Some(BlockVariant::Subtle),
        ..Default::default()
    };
    let style = resolve_block_style(&theme, &overrides);
    assert_eq!(style[prop::BACKGROUND_COLOR], theme.color_background);
    assert_eq!(style[prop::COLOR], theme.color_text_muted);
    assert_eq!(
        style[prop::BORDER_COLOR],
        format!("{}60", theme.border_color)
    );
}

#[test]
fn dark_background_auto_flips_text_to_white() {
    let overrides = BlockStyleOverrides {
        bg_color: Some("#000000".into()),
        ..Default::default()
    };
    let style = resolve_block_style(&theme(), &overrides);
    assert_eq!(style[prop::BACKGROUND_COLOR], "#000000");
    assert_eq!(style[prop::COLOR], "#FFFFFF");
}

#[test]
fn light_background_auto_flips_text_to_black() {
    let overrides = BlockStyleOverrides {
        bg_color: Some("#FFFFFF".into()),
        ..Default::default()
    };
    let style = resolve_block_style(&theme(), &overrides);
    assert_eq!(style[prop::COLOR], "#000000");
}

#[test]
fn explicit_text_color_suppresses_auto_contrast() {
    let overrides = BlockStyleOverrides {
        bg_color: Some("#000000".into()),
        text_color: Some("#FF0000".into()),
        ..Default::default()
    };
    let style = resolve_block_style(&theme(), &overrides);
    assert_eq!(style[prop::BACKGROUND_COLOR], "#000000");
    assert_eq!(style[prop::COLOR], "#FF0000");
}

#[test]
fn auto_contrast_overrides_variant_text() {
    // Variant seeds a text color; a bg-only override recomputes it.
    let overrides = BlockStyleOverrides {
        variant: Some(BlockVariant::Primary),
        bg_color: Some("#000000".into()),
        ..Default::default()
    };
    let style = resolve_block_style(&theme(), &overrides);
    assert_eq!(style[prop::COLOR], "#FFFFFF");
}

#[test]
fn border_radius_is_emitted_as_px() {
    let overrides = BlockStyleOverrides {
        border_radius: Some(16),
        ..Default::default()
    };
    let style = resolve_block_style(&theme(), &overrides);
    assert_eq!(style[prop::BORDER_RADIUS], "16px");
}

#[test]
fn shadow_override_maps_through_the_shadow_table() {
    let overrides = BlockStyleOverrides {
        shadow: Some(BlockShadow::Md),
        ..Default::default()
    };
    let style = resolve_block_style(&theme(), &overrides);
    assert!(style[prop::BOX_SHADOW].contains("rgba(0,0,0,0.15)"));
}

#[test]
fn shadow_none_resolves_to_none() {
    let overrides = BlockStyleOverrides {
        shadow: Some(BlockShadow::None),
        ..Default::default()
    };
    let style = resolve_block_style(&theme(), &overrides);
    assert_eq!(style[prop::BOX_SHADOW], "none");
}

#[test]
fn outline_button_style_produces_transparent_bg_and_border() {
    let theme = theme();
    let overrides = BlockStyleOverrides {
        button_style: Some(ButtonStyle::Outline),
        ..Default::default()
    };
    let style = resolve_block_style(&theme, &overrides);
    assert_eq!(style[prop::BACKGROUND_COLOR], "transparent");
    assert_eq!(style[prop::BORDER_WIDTH], "2px");
    assert_eq!(style[prop::BORDER_COLOR], theme.color_primary);
}

#[test]
fn neon_button_style_glows_with_the_accent_color() {
    let theme = theme();
    let overrides = BlockStyleOverrides {
        button_style: Some(ButtonStyle::Neon),
        ..Default::default()
    };
    let style = resolve_block_style(&theme, &overrides);
    assert_eq!(style[prop::BACKGROUND_COLOR], "transparent");
    assert_eq!(style[prop::COLOR], theme.color_accent);
    assert!(style[prop::BOX_SHADOW].contains(&theme.color_accent));
}

#[test]
fn pill_button_style_forces_the_block_radius() {
    let overrides = BlockStyleOverrides {
        button_style: Some(ButtonStyle::Pill),
        ..Default::default()
    };
    let style = resolve_block_style(&theme(), &overrides);
    assert_eq!(style[prop::BORDER_RADIUS], "999px");
}

#[test]
fn explicit_fields_win_over_button_style_output() {
    let overrides = BlockStyleOverrides {
        button_style: Some(ButtonStyle::Neon),
        bg_color: Some("#FF0000".into()),
        text_color: Some("#00FF00".into()),
        ..Default::default()
    };
    let style = resolve_block_style(&theme(), &overrides);
    assert_eq!(style[prop::BACKGROUND_COLOR], "#FF0000");
    assert_eq!(style[prop::COLOR], "#00FF00");
}

#[test]
fn button_style_stage_overwrites_the_variant_seed() {
    let theme = theme();
    let overrides = BlockStyleOverrides {
        variant: Some(BlockVariant::Subtle),
        button_style: Some(ButtonStyle::Neon),
        ..Default::default()
    };
    let style = resolve_block_style(&theme, &overrides);
    assert_eq!(style[prop::BACKGROUND_COLOR], "transparent");
    assert_eq!(style[prop::COLOR], theme.color_accent);
}

#[test]
fn explicit_radius_beats_pill_forced_radius() {
    let overrides = BlockStyleOverrides {
        button_style: Some(ButtonStyle::Pill),
        border_radius: Some(4),
        ..Default::default()
    };
    let style = resolve_block_style(&theme(), &overrides);
    assert_eq!(style[prop::BORDER_RADIUS], "4px");
}
