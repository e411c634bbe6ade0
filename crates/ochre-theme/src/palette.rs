//! Semantic palettes
//!
//! One palette per role. Neutrals are shared; the accent shifts with the
//! role's surface style. Every text/surface combination a screen can
//! produce is enumerated by [`Palette::contrast_pairs`] so the audit
//! tooling checks exactly what ships.

use ochre_color::Rgb;

use crate::role::Role;

/// Semantic color set consumed by the component layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Rgb,
    pub surface: Rgb,
    pub text: Rgb,
    pub text_muted: Rgb,
    pub accent: Rgb,
    pub on_accent: Rgb,
    pub success: Rgb,
    pub warning: Rgb,
    pub error: Rgb,
}

const NEUTRALS: Palette = Palette {
    background: Rgb::new(0xfa, 0xfa, 0xf7),
    surface: Rgb::new(0xff, 0xff, 0xff),
    text: Rgb::new(0x1f, 0x24, 0x2b),
    text_muted: Rgb::new(0x5c, 0x64, 0x70),
    accent: Rgb::new(0xb4, 0x54, 0x09),
    on_accent: Rgb::new(0xff, 0xff, 0xff),
    success: Rgb::new(0x1a, 0x7f, 0x37),
    warning: Rgb::new(0x9a, 0x66, 0x00),
    error: Rgb::new(0xc2, 0x26, 0x2e),
};

/// Explorer keeps the warm default accent.
static EXPLORER: Palette = NEUTRALS;

/// Learner: cooler accent, same neutrals.
static LEARNER: Palette = Palette {
    accent: Rgb::new(0x0b, 0x66, 0xc3),
    ..NEUTRALS
};

/// Expert: muted slate accent, darker text for dense screens.
static EXPERT: Palette = Palette {
    accent: Rgb::new(0x44, 0x4d, 0x77),
    text: Rgb::new(0x16, 0x1a, 0x20),
    ..NEUTRALS
};

impl Palette {
    pub fn for_role(role: Role) -> &'static Palette {
        match role {
            Role::Explorer => &EXPLORER,
            Role::Learner => &LEARNER,
            Role::Expert => &EXPERT,
        }
    }

    /// Every foreground/background combination screens may render, in a
    /// stable order for audit output.
    pub fn contrast_pairs(&self) -> Vec<(&'static str, Rgb, Rgb)> {
        vec![
            ("text/background", self.text, self.background),
            ("text/surface", self.text, self.surface),
            ("text-muted/background", self.text_muted, self.background),
            ("text-muted/surface", self.text_muted, self.surface),
            ("accent/background", self.accent, self.background),
            ("accent/surface", self.accent, self.surface),
            ("on-accent/accent", self.on_accent, self.accent),
            ("success/surface", self.success, self.surface),
            ("warning/surface", self.warning, self.surface),
            ("error/surface", self.error, self.surface),
        ]
    }
}
