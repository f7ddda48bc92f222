// SPDX-License-Identifier: GPL-3.0
// engine_state.rs - Copyright Phillip Potter, 2026, under GPLv3 only.

use std::f64::consts::PI;

use log::{debug, trace, warn};
use rpncalc_utility::DISPLAY_WIDTH;

use super::entry_mode::{scale_by_exponent, signed_exponent, EntryMode, EXPONENT_DIGITS};
use crate::keys::{Key, Operation};
use crate::stack::RegisterStack;

/// This structure is the complete state of the calculator. Every key press maps
/// one EngineState to the next through `apply`, so no half-updated state is ever
/// observable.
#[derive(Clone, Debug, PartialEq)]
pub struct EngineState {

    // The X/Y/Z/T registers.
    pub stack: RegisterStack,

    // The single storage register, untouched by clear.
    pub memory: f64,

    // What is currently being typed.
    pub entry: EntryMode,

    // Set by arc, consumed by the next sin/cos/tan.
    pub inverse_armed: bool,
}

impl EngineState {

    /// Creates a new EngineState object with the correct power-on state.
    pub fn new() -> Self {
        EngineState {
            stack: RegisterStack::new(),
            memory: 0.0,
            entry: EntryMode::Idle,
            inverse_armed: false,
        }
    }

    /// Returns the text currently shown on the display.
    pub fn display(&self) -> String {
        self.entry.display_for(self.stack.x)
    }

    /// Returns the state that results from pressing the given key.
    ///
    /// # Panics
    ///
    /// Panics if handed a digit key outside `0..=9`. Digit keys are only ever
    /// built from the keypad, so this is a programmer error.
    pub fn apply(&self, key: Key) -> EngineState {

        trace!("key {} in {:?}", key, self.entry);

        match key {
            Key::Digit(digit) => self.digit(digit),
            Key::Pi => self.pi(),
            Key::Decimal => self.decimal(),
            Key::Enter => self.enter(),
            Key::Operation(operation) => self.operation(operation),
            Key::Clear => self.clear(),
            Key::Store => self.store(),
            Key::Recall => self.recall(),
        }
    }

    /// This function handles a digit key.
    fn digit(&self, digit: u8) -> EngineState {

        assert!(digit <= 9, "digit key out of range: {}", digit);

        let mut next = self.clone();
        match &self.entry {

            // Append to the exponent magnitude and rescale the mantissa, unless
            // both exponent digits are already in.
            EntryMode::EnteringExponent { digits, .. } if *digits >= EXPONENT_DIGITS => (),
            EntryMode::EnteringExponent { mantissa, magnitude, negative, digits } => {
                let magnitude = magnitude.saturating_mul(10).saturating_add(digit as u32);
                let exponent = signed_exponent(magnitude, *negative);
                next.stack.x = scale_by_exponent(*mantissa, exponent);
                next.entry = EntryMode::EnteringExponent {
                    mantissa: *mantissa,
                    magnitude,
                    negative: *negative,
                    digits: digits.saturating_add(1),
                };
            },

            // Append to the typed numeral, unless the display is full. A lone
            // zero is replaced rather than extended.
            EntryMode::Entering { text } => {
                let new_text = if text == "0" {
                    digit.to_string()
                } else {
                    format!("{}{}", text, digit)
                };

                if new_text.len() <= DISPLAY_WIDTH {
                    next.stack.x = new_text.parse::<f64>().unwrap_or(self.stack.x);
                    next.entry = EntryMode::Entering { text: new_text };
                }
            },

            // Start a new numeral over the top of X.
            EntryMode::Idle => {
                next.stack.x = digit as f64;
                next.entry = EntryMode::Entering { text: digit.to_string() };
            },
        }

        next
    }

    /// This function handles the π key, which behaves like a complete numeral.
    fn pi(&self) -> EngineState {

        let mut next = self.clone();
        next.stack = self.stack.with_x(PI);
        next.entry = EntryMode::Idle;
        next
    }

    /// This function handles the decimal point key.
    fn decimal(&self) -> EngineState {

        let mut next = self.clone();
        match &self.entry {
            EntryMode::Entering { text } => {
                if !text.contains('.') && text.len() < DISPLAY_WIDTH {
                    next.entry = EntryMode::Entering { text: format!("{}.", text) };
                }
            },
            EntryMode::Idle => {
                next.stack.x = 0.0;
                next.entry = EntryMode::Entering { text: String::from("0.") };
            },

            // Exponents are whole numbers.
            EntryMode::EnteringExponent { .. } => (),
        }

        next
    }

    /// This function handles the ENTER key, duplicating X into Y.
    fn enter(&self) -> EngineState {

        let mut next = self.clone();
        next.stack = self.stack.push(self.stack.x);
        next.entry = EntryMode::Idle;
        next
    }

    /// This function handles every key routed through the operation dispatcher.
    fn operation(&self, operation: Operation) -> EngineState {

        let mut next = self.clone();
        match operation {

            // Arc only arms the inverse prefix, nothing else changes.
            Operation::Arc => {
                next.inverse_armed = true;
                return next;
            },

            Operation::EnterExponent => {
                next.entry = EntryMode::exponent_of(self.stack.x);
                return next;
            },

            // CHS during exponent entry negates the exponent and stays in that mode.
            Operation::ChangeSign => {
                if let EntryMode::EnteringExponent { mantissa, magnitude, negative, digits } = &self.entry {
                    let negative = !*negative;
                    next.stack.x = scale_by_exponent(*mantissa, signed_exponent(*magnitude, negative));
                    next.entry = EntryMode::EnteringExponent {
                        mantissa: *mantissa,
                        magnitude: *magnitude,
                        negative,
                        digits: *digits,
                    };
                    return next;
                }
                next.stack = self.stack.with_x(-self.stack.x);
            },

            Operation::Swap => {
                next.stack = self.stack.swap_xy();
            },

            _ if operation.is_binary() => {
                let result = binary_result(operation, self.stack.y, self.stack.x);
                next.stack = self.stack.shift_down(result);
            },

            _ => {
                let inverse = self.inverse_armed && operation.is_trigonometric();
                if operation.is_trigonometric() {
                    next.inverse_armed = false;
                }
                next.stack = self.stack.with_x(unary_result(operation, self.stack.x, inverse));
            },
        }

        // An operation always terminates whatever was being typed.
        next.entry = EntryMode::Idle;

        debug!("{} -> x = {}", operation, next.stack.x);
        if !next.stack.x.is_finite() {
            warn!("{} produced a non-finite result: {}", operation, next.stack.x);
        }

        next
    }

    /// This function handles the clear key. Memory survives a clear.
    fn clear(&self) -> EngineState {
        EngineState {
            stack: RegisterStack::new(),
            memory: self.memory,
            entry: EntryMode::Idle,
            inverse_armed: false,
        }
    }

    /// This function copies X into memory without disturbing anything else.
    fn store(&self) -> EngineState {

        let mut next = self.clone();
        next.memory = self.stack.x;
        next
    }

    /// This function pushes the memory value like a literal.
    fn recall(&self) -> EngineState {

        let mut next = self.clone();
        next.stack = self.stack.push(self.memory);
        next.entry = EntryMode::Idle;
        next
    }
}

/// Computes `Y op X` for a binary operation. Domain errors follow IEEE-754.
fn binary_result(operation: Operation, y: f64, x: f64) -> f64 {
    match operation {
        Operation::Add => y + x,
        Operation::Subtract => y - x,
        Operation::Multiply => y * x,
        Operation::Divide => y / x,
        Operation::Power => y.powf(x),
        _ => unreachable!("{} is not a binary operation", operation),
    }
}

/// Computes a single-operand function of X. Trig functions use radians.
fn unary_result(operation: Operation, x: f64, inverse: bool) -> f64 {
    match (operation, inverse) {
        (Operation::Sin, false) => x.sin(),
        (Operation::Sin, true) => x.asin(),
        (Operation::Cos, false) => x.cos(),
        (Operation::Cos, true) => x.acos(),
        (Operation::Tan, false) => x.tan(),
        (Operation::Tan, true) => x.atan(),
        (Operation::SquareRoot, _) => x.sqrt(),
        (Operation::Reciprocal, _) => 1.0 / x,
        (Operation::Log, _) => x.log10(),
        (Operation::Ln, _) => x.ln(),
        (Operation::Exp, _) => x.exp(),
        _ => unreachable!("{} is not a unary operation", operation),
    }
}
