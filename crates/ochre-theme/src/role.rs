//! Role configuration
//!
//! Three user roles, each mapping to a static nested config record.
//! The tables are plain consts so the selection logic stays pure and
//! testable without any provider machinery.

use serde::{Deserialize, Serialize};

/// User role, selected during onboarding and stored as a preference
/// string.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// New users: maximum guidance, playful surface.
    #[default]
    Explorer,
    /// Returning users building a habit.
    Learner,
    /// Power users: dense UI, minimal hand-holding.
    Expert,
}

/// Unknown role preference string
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown role: {0:?}")]
pub struct UnknownRole(pub String);

impl Role {
    pub const ALL: [Role; 3] = [Role::Explorer, Role::Learner, Role::Expert];

    /// Parse the stored preference string.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "explorer" => Some(Self::Explorer),
            "learner" => Some(Self::Learner),
            "expert" => Some(Self::Expert),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Explorer => "explorer",
            Self::Learner => "learner",
            Self::Expert => "expert",
        }
    }

    /// Static config bundle for this role.
    pub fn config(self) -> &'static RoleConfig {
        match self {
            Self::Explorer => &EXPLORER,
            Self::Learner => &LEARNER,
            Self::Expert => &EXPERT,
        }
    }
}

impl std::str::FromStr for Role {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| UnknownRole(s.to_string()))
    }
}

/// How visible the mascot is across screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MascotProminence {
    Prominent,
    Subtle,
    Hidden,
}

/// Voice used for interface copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CopyTone {
    Playful,
    Encouraging,
    Direct,
}

/// Gamification settings per role.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Gamification {
    pub points_multiplier: f32,
    pub streaks: bool,
    pub badges: bool,
    pub leaderboard: bool,
}

/// Coarse feature switches per role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureFlags {
    pub daily_goals: bool,
    pub hints: bool,
    pub advanced_stats: bool,
}

/// The full static config bundle for one role.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RoleConfig {
    pub gamification: Gamification,
    pub mascot: MascotProminence,
    pub tone: CopyTone,
    pub features: FeatureFlags,
}

static EXPLORER: RoleConfig = RoleConfig {
    gamification: Gamification {
        points_multiplier: 1.5,
        streaks: true,
        badges: true,
        leaderboard: false,
    },
    mascot: MascotProminence::Prominent,
    tone: CopyTone::Playful,
    features: FeatureFlags {
        daily_goals: true,
        hints: true,
        advanced_stats: false,
    },
};

static LEARNER: RoleConfig = RoleConfig {
    gamification: Gamification {
        points_multiplier: 1.0,
        streaks: true,
        badges: true,
        leaderboard: true,
    },
    mascot: MascotProminence::Subtle,
    tone: CopyTone::Encouraging,
    features: FeatureFlags {
        daily_goals: true,
        hints: true,
        advanced_stats: true,
    },
};

static EXPERT: RoleConfig = RoleConfig {
    gamification: Gamification {
        points_multiplier: 1.0,
        streaks: true,
        badges: false,
        leaderboard: true,
    },
    mascot: MascotProminence::Hidden,
    tone: CopyTone::Direct,
    features: FeatureFlags {
        daily_goals: false,
        hints: false,
        advanced_stats: true,
    },
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_role() {
        assert_eq!(Role::parse("explorer"), Some(Role::Explorer));
        assert_eq!(Role::parse("EXPERT"), Some(Role::Expert));
        assert_eq!(Role::parse("wizard"), None);
        assert_eq!("learner".parse::<Role>(), Ok(Role::Learner));
        assert!("".parse::<Role>().is_err());
    }

    #[test]
    fn test_round_trip_as_str() {
        for role in Role::ALL {
            assert_eq!(Role::parse(role.as_str()), Some(role));
        }
    }

    #[test]
    fn test_config_lookup_is_stable() {
        assert!(std::ptr::eq(Role::Expert.config(), Role::Expert.config()));
        assert_eq!(Role::Explorer.config().mascot, MascotProminence::Prominent);
        assert_eq!(Role::Expert.config().tone, CopyTone::Direct);
        assert!(!Role::Expert.config().features.hints);
    }

    #[test]
    fn test_serde_uses_preference_strings() {
        assert_eq!(serde_json::to_string(&Role::Learner).unwrap(), "\"learner\"");
        assert_eq!(
            serde_json::from_str::<Role>("\"expert\"").unwrap(),
            Role::Expert
        );
    }
}
