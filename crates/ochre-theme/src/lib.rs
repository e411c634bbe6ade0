//! Ochre Theme
//!
//! Role-driven configuration for the UI foundation: each of the three
//! user roles selects a static bundle of gamification settings, mascot
//! prominence, copy tone, feature flags, and a semantic color palette.
//!
//! Configuration is const data selected at call sites. Preference
//! changes rebuild an immutable [`Settings`] snapshot; nothing here is
//! ambient or mutable at runtime.

pub mod palette;
pub mod role;

pub use palette::Palette;
pub use role::{
    CopyTone, FeatureFlags, Gamification, MascotProminence, Role, RoleConfig, UnknownRole,
};

/// Immutable settings snapshot, rebuilt whenever the stored role
/// preference changes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Settings {
    pub role: Role,
    pub config: &'static RoleConfig,
    pub palette: &'static Palette,
}

impl Settings {
    pub fn new(role: Role) -> Self {
        Self {
            role,
            config: role.config(),
            palette: Palette::for_role(role),
        }
    }

    /// Build from the stored preference string; unknown or missing
    /// values fall back to the default role.
    pub fn from_preference(preference: Option<&str>) -> Self {
        let role = preference
            .and_then(Role::parse)
            .unwrap_or_default();
        Self::new(role)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_from_preference() {
        assert_eq!(Settings::from_preference(Some("expert")).role, Role::Expert);
        assert_eq!(Settings::from_preference(Some("bogus")).role, Role::Explorer);
        assert_eq!(Settings::from_preference(None).role, Role::Explorer);
    }

    #[test]
    fn test_settings_snapshot_is_consistent() {
        let s = Settings::new(Role::Learner);
        assert_eq!(s.config, Role::Learner.config());
        assert_eq!(s.palette, Palette::for_role(Role::Learner));
    }
}
