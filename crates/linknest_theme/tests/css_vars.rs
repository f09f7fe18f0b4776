use linknest_theme::{merge_theme, theme_css_vars, ButtonStyle, Template, ThemePatch};
use pretty_assertions::assert_eq;

#[test]
fn merging_an_empty_patch_is_an_identity() {
    for template in Template::all() {
        let base = template.default_theme();
        assert_eq!(merge_theme(&base, &ThemePatch::default()), base);
    }
}

#[test]
fn merge_is_right_biased_and_pins_the_version() {
    let base = Template::CleanSlate.default_theme();
    let patch = ThemePatch {
        color_primary: Some("#112233".into()),
        font_size_base: Some(18),
        ..Default::default()
    };
    let merged = merge_theme(&base, &patch);
    assert_eq!(merged.color_primary, "#112233");
    assert_eq!(merged.font_size_base, 18);
    assert_eq!(merged.color_surface, base.color_surface);
    assert_eq!(merged.version, 1);
}

#[test]
fn every_token_projects_to_a_variable() {
    let theme = Template::CleanSlate.default_theme();
    let vars = theme_css_vars(&theme);

    assert_eq!(vars["--ln-color-bg"], theme.color_background);
    assert_eq!(vars["--ln-color-surface"], theme.color_surface);
    assert_eq!(vars["--ln-color-primary"], theme.color_primary);
    assert_eq!(vars["--ln-color-secondary"], theme.color_secondary);
    assert_eq!(vars["--ln-color-text"], theme.color_text);
    assert_eq!(vars["--ln-color-text-muted"], theme.color_text_muted);
    assert_eq!(vars["--ln-color-accent"], theme.color_accent);
    assert_eq!(vars["--ln-font-heading"], theme.font_heading);
    assert_eq!(vars["--ln-font-size-base"], "16px");
    assert_eq!(vars["--ln-font-weight-heading"], "700");
    assert_eq!(vars["--ln-line-height-body"], "1.5");
    assert_eq!(vars["--ln-spacing-unit"], "8px");
    assert_eq!(vars["--ln-content-max-width"], "680px");
    assert_eq!(vars["--ln-block-gap"], "16px");
    assert_eq!(vars["--ln-page-px"], "20px");
    assert_eq!(vars["--ln-page-py"], "40px");
    assert_eq!(vars["--ln-border-radius"], "12px");
    assert_eq!(vars["--ln-border-width"], "0px");
    assert_eq!(vars["--ln-border-color"], theme.border_color);
    assert_eq!(vars["--ln-btn-px"], "24px");
    assert_eq!(vars["--ln-btn-py"], "14px");
}

#[test]
fn button_variables_reflect_the_resolved_style() {
    let theme = Template::CleanSlate.default_theme();
    let vars = theme_css_vars(&theme);
    assert_eq!(vars["--ln-btn-bg"], theme.color_surface);
    assert_eq!(vars["--ln-btn-text"], theme.color_primary);
    assert_eq!(vars["--ln-btn-border-w"], "0");
    assert_eq!(vars["--ln-btn-shadow"], "none");
    assert_eq!(vars["--ln-btn-backdrop"], "none");
}

#[test]
fn pill_override_wins_over_the_raw_button_radius_token() {
    // End to end: clean-slate page, user switches the button style to
    // pill. The projected radius must be the forced 999px even though
    // the unmodified buttonRadius token is 8.
    let base = Template::resolve("clean-slate").default_theme();
    assert_eq!(base.button_radius, 8);

    let patch = ThemePatch {
        button_style: Some(ButtonStyle::Pill),
        ..Default::default()
    };
    let merged = merge_theme(&base, &patch);
    let vars = theme_css_vars(&merged);
    assert_eq!(vars["--ln-btn-radius"], "999px");
}

#[test]
fn non_pill_themes_project_the_raw_button_radius() {
    let vars = theme_css_vars(&Template::CleanSlate.default_theme());
    assert_eq!(vars["--ln-btn-radius"], "8px");
}

#[test]
fn gradient_variable_is_emitted_only_for_gradient_effects() {
    let coral = Template::CoralReef.default_theme();
    let vars = theme_css_vars(&coral);
    assert_eq!(
        vars["--ln-bg-gradient"],
        coral.background_gradient.as_deref().unwrap()
    );

    let plain = Template::CleanSlate.default_theme();
    assert!(!theme_css_vars(&plain).contains_key("--ln-bg-gradient"));
}

#[test]
fn page_shadow_projects_through_the_shadow_table() {
    let vars = theme_css_vars(&Template::NeonGlow.default_theme());
    assert_eq!(vars["--ln-shadow"], "0 4px 14px rgba(0,0,0,0.15)");
}
