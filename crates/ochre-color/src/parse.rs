//! Color string parsing
//!
//! Accepts exactly the formats the app's style layer emits: 3-digit hex,
//! 6-digit hex, and `rgb()`/`rgba()` functional notation. Named colors,
//! HSL, and 8-digit hex are rejected.

use crate::{ColorError, Rgb};

impl Rgb {
    /// Parse a color string.
    ///
    /// The leading `#` is optional for hex. 3-digit hex expands by
    /// doubling each nibble (`#abc` -> `#aabbcc`). For `rgba()` the
    /// alpha component is checked for well-formedness and discarded.
    /// Out-of-range channels are an error, not clamped.
    pub fn parse(input: &str) -> Result<Self, ColorError> {
        let s = input.trim();

        let lower = s.to_ascii_lowercase();
        if let Some(body) = lower
            .strip_prefix("rgba(")
            .or_else(|| lower.strip_prefix("rgb("))
        {
            let with_alpha = lower.starts_with("rgba(");
            return parse_functional(input, body, with_alpha);
        }

        parse_hex(input, s.strip_prefix('#').unwrap_or(s))
    }
}

impl std::str::FromStr for Rgb {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Rgb::parse(s)
    }
}

fn parse_hex(input: &str, digits: &str) -> Result<Rgb, ColorError> {
    let nibble = |ch: char| {
        ch.to_digit(16)
            .map(|n| n as u8)
            .ok_or_else(|| ColorError::InvalidComponent {
                input: input.to_string(),
                component: ch.to_string(),
            })
    };

    let chars: Vec<char> = digits.chars().collect();
    match chars.len() {
        3 => {
            let mut channels = [0u8; 3];
            for (slot, ch) in channels.iter_mut().zip(&chars) {
                let n = nibble(*ch)?;
                *slot = n << 4 | n;
            }
            Ok(Rgb::new(channels[0], channels[1], channels[2]))
        }
        6 => {
            let mut nibbles = [0u8; 6];
            for (slot, ch) in nibbles.iter_mut().zip(&chars) {
                *slot = nibble(*ch)?;
            }
            Ok(Rgb::new(
                nibbles[0] << 4 | nibbles[1],
                nibbles[2] << 4 | nibbles[3],
                nibbles[4] << 4 | nibbles[5],
            ))
        }
        _ => Err(ColorError::UnsupportedFormat(input.to_string())),
    }
}

fn parse_functional(input: &str, body: &str, with_alpha: bool) -> Result<Rgb, ColorError> {
    let body = body
        .strip_suffix(')')
        .ok_or_else(|| ColorError::UnsupportedFormat(input.to_string()))?;

    let parts: Vec<&str> = body.split(',').map(str::trim).collect();
    let expected = if with_alpha { 4 } else { 3 };
    if parts.len() != expected {
        return Err(ColorError::UnsupportedFormat(input.to_string()));
    }

    let mut channels = [0u8; 3];
    for (slot, part) in channels.iter_mut().zip(&parts) {
        *slot = part.parse().map_err(|_| ColorError::InvalidComponent {
            input: input.to_string(),
            component: part.to_string(),
        })?;
    }

    if with_alpha {
        // Alpha is validated but not carried; the contrast math is opaque.
        parts[3]
            .parse::<f64>()
            .map_err(|_| ColorError::InvalidComponent {
                input: input.to_string(),
                component: parts[3].to_string(),
            })?;
    }

    Ok(Rgb::new(channels[0], channels[1], channels[2]))
}
