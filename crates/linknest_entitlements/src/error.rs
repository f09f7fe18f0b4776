//! Validation error taxonomy
//!
//! Shape errors carry a specific field-level message the UI surfaces
//! verbatim. Plan errors are deliberately coarse: a single upgrade
//! prompt per feature area, so free users are not told exactly which
//! field tripped the gate.

use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    // Shape errors
    #[error("Invalid background color format")]
    InvalidBackgroundColor,
    #[error("Invalid text color format")]
    InvalidTextColor,
    #[error("Border radius must be 0-32")]
    BorderRadiusOutOfRange,
    #[error("Invalid button style")]
    InvalidButtonStyle,

    // Plan errors
    #[error("Block style customization requires a Pro plan")]
    BlockStyleRequiresPro,
    #[error("Custom colors require a Pro plan. Choose a curated palette.")]
    CustomColorsRequirePro,
    #[error("Google Fonts require a Pro plan")]
    GoogleFontsRequirePro,
    #[error("This button style requires a Pro plan")]
    ButtonStyleRequiresPro,
    #[error("This template requires a Pro plan")]
    TemplateRequiresPro,
    #[error("Hiding the Linknest badge requires a Pro plan")]
    HideBrandingRequiresPro,
}
