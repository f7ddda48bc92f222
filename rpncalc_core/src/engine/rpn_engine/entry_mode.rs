// SPDX-License-Identifier: GPL-3.0
// entry_mode.rs - Copyright Phillip Potter, 2026, under GPLv3 only.

use rpncalc_utility::{exponent_entry_string, DisplayFormat};

/// The number of exponent digits the keypad accepts after EEX.
pub const EXPONENT_DIGITS: u32 = 2;

/// This enum models what the keypad is currently in the middle of typing. The
/// arc prefix is tracked separately, since it can be armed in any of these.
#[derive(Clone, Debug, PartialEq)]
pub enum EntryMode {

    /// Nothing typed since the last committed value.
    Idle,

    /// Digits are being appended to X. The text is exactly what the display shows.
    Entering {
        text: String,
    },

    /// Digits are being appended to the exponent after EEX.
    EnteringExponent {
        mantissa: f64,
        magnitude: u32,
        negative: bool,
        digits: u32,
    },
}

impl EntryMode {

    /// Creates the mode entered by pressing EEX with the given mantissa.
    pub fn exponent_of(mantissa: f64) -> Self {
        EntryMode::EnteringExponent {
            mantissa,
            magnitude: 0,
            negative: false,
            digits: 0,
        }
    }

    /// Returns true while a numeral is being typed into X.
    pub fn is_entering(&self) -> bool {
        matches!(self, EntryMode::Entering { .. })
    }

    /// Returns true while an exponent is being typed.
    pub fn is_entering_exponent(&self) -> bool {
        matches!(self, EntryMode::EnteringExponent { .. })
    }

    /// Renders the display for this mode, falling back to the X register when
    /// nothing is being typed.
    pub fn display_for(&self, x: f64) -> String {
        match self {
            EntryMode::Idle => x.to_display_string(),
            EntryMode::Entering { text } => text.clone(),
            EntryMode::EnteringExponent { mantissa, magnitude, negative, digits } => {
                let shown_magnitude = if *digits > 0 { Some(*magnitude) } else { None };
                exponent_entry_string(*mantissa, *negative, shown_magnitude)
            },
        }
    }
}

/// Returns the signed exponent held by an exponent buffer, clamped to `i32`.
pub fn signed_exponent(magnitude: u32, negative: bool) -> i32 {

    let magnitude = i32::try_from(magnitude).unwrap_or(i32::MAX);
    if negative { -magnitude } else { magnitude }
}

/// Computes `mantissa × 10^exponent` as the correctly rounded value of the decimal
/// text `<mantissa>e<exponent>`.
pub fn scale_by_exponent(mantissa: f64, exponent: i32) -> f64 {

    format!("{}e{}", mantissa, exponent)
        .parse::<f64>()
        .unwrap_or_else(|_| mantissa * 10_f64.powi(exponent))
}
