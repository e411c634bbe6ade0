//! Ochre
//!
//! UI foundation for the mobile app: color model, WCAG contrast policy,
//! role configuration, responsive typography.
//!
//! # Example
//! ```rust,ignore
//! use ochre::{a11y, theme::Settings};
//!
//! let settings = Settings::from_preference(Some("learner"));
//! let report = a11y::check_contrast(settings.palette.text, settings.palette.surface);
//! assert!(report.aa);
//! ```

pub use ochre_color::{contrast_ratio, ColorError, Rgb, BLACK, WHITE};

#[cfg(feature = "a11y")]
pub use ochre_a11y as a11y;
#[cfg(feature = "theme")]
pub use ochre_theme as theme;
#[cfg(feature = "typography")]
pub use ochre_typography as typography;

/// Foundation version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
