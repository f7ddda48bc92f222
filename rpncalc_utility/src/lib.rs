// SPDX-License-Identifier: GPL-3.0
// lib.rs - Copyright Phillip Potter, 2026, under GPLv3 only.

// This crate contains useful utility functions that can be used throughout the codebase,
// chiefly the rendering of register values into the text shown on the calculator display.

/// The number of characters the display can show for a plain decimal value.
pub const DISPLAY_WIDTH: usize = 10;

/// Values with a magnitude at or above this are shown in scientific notation.
const SCIENTIFIC_UPPER_BOUND: f64 = 1e10;

/// Non-zero values with a magnitude below this are shown in scientific notation.
const SCIENTIFIC_LOWER_BOUND: f64 = 1e-9;

/// Plain values with a magnitude below this use the short exponent form (`5e-9`),
/// since their decimal text would be nothing but zeros once cut to width.
const PLAIN_DECIMAL_LOWER_BOUND: f64 = 1e-6;

/// The number of fractional mantissa digits used in scientific notation.
const SCIENTIFIC_FRACTION_DIGITS: usize = 6;

/// Exists to allow us to define custom trait operations on `f64`.
type CustomFloat64 = f64;

/// This trait exists to allow us to render a register value in exactly the way the
/// calculator display would, without the caller needing to care about the rules.
pub trait DisplayFormat {

    /// This function should return the display text for the value. It must never
    /// panic, including for non-finite values.
    fn to_display_string(self) -> String;

    /// This function should return true if the value would be rendered in
    /// scientific notation.
    fn needs_scientific_notation(self) -> bool;
}

impl DisplayFormat for CustomFloat64 {

    /// Renders the value as display text:
    /// - zero (of either sign) is `0`.
    /// - non-finite values are `Infinity`, `-Infinity` or `NaN`.
    /// - very large or very small values use scientific notation.
    /// - values below `1e-6` use the short exponent form, mantissa truncated to fit.
    /// - everything else is the decimal text truncated (not rounded) to the display width.
    fn to_display_string(self) -> String {

        if self == 0.0 {
            return String::from("0");
        }

        if self.is_nan() {
            return String::from("NaN");
        }

        if self.is_infinite() {
            return if self.is_sign_positive() {
                String::from("Infinity")
            } else {
                String::from("-Infinity")
            };
        }

        if self.needs_scientific_notation() {
            scientific_string(self)
        } else if self.abs() < PLAIN_DECIMAL_LOWER_BOUND {
            short_exponent_string(self)
        } else {
            truncate_to_width(&self.to_string(), DISPLAY_WIDTH)
        }
    }

    /// Determines if the value falls outside the plain decimal range of the display.
    fn needs_scientific_notation(self) -> bool {

        let magnitude = self.abs();
        magnitude >= SCIENTIFIC_UPPER_BOUND || (magnitude > 0.0 && magnitude < SCIENTIFIC_LOWER_BOUND)
    }
}

/// Formats a finite value as `d.dddddde+N` / `d.dddddde-N`. Rust omits the sign of a
/// positive exponent, so we put it back to keep the layout fixed.
fn scientific_string(value: f64) -> String {

    let formatted = format!("{:.*e}", SCIENTIFIC_FRACTION_DIGITS, value);
    match formatted.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{}e+{}", mantissa, exponent)
        },
        _ => formatted,
    }
}

/// Formats a finite value in the shortest exponent form (`5e-9`, `1.234e-7`). When
/// that is too wide, the mantissa is truncated so the exponent always stays visible.
fn short_exponent_string(value: f64) -> String {

    let formatted = format!("{:e}", value);
    match formatted.split_once('e') {
        Some((mantissa, exponent)) => {
            let suffix = format!("e{}", exponent);
            let room = DISPLAY_WIDTH.saturating_sub(suffix.len());
            let mut mantissa = truncate_to_width(mantissa, room);
            if mantissa.ends_with('.') {
                mantissa.pop();
            }
            format!("{}{}", mantissa, suffix)
        },
        None => truncate_to_width(&formatted, DISPLAY_WIDTH),
    }
}

/// Cuts text down to at most `width` characters.
pub fn truncate_to_width(text: &str, width: usize) -> String {
    text.chars().take(width).collect()
}

/// Renders the live exponent-entry buffer as `<mantissa>e<exponent>`. The minus sign
/// is shown as soon as the exponent is negated, and the magnitude only once at least
/// one exponent digit has been typed.
pub fn exponent_entry_string(mantissa: f64, negative: bool, magnitude: Option<u32>) -> String {

    let sign = if negative { "-" } else { "" };
    match magnitude {
        Some(magnitude) => format!("{}e{}{}", mantissa.to_display_string(), sign, magnitude),
        None => format!("{}e{}", mantissa.to_display_string(), sign),
    }
}
