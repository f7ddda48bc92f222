// SPDX-License-Identifier: GPL-3.0
// rpn_engine.rs - Copyright Phillip Potter, 2026, under GPLv3 only.

use super::Engine;
use crate::keys::{Key, Operation};
use crate::stack::RegisterStack;
use engine_state::EngineState;

/// This module contains the data-entry mode of the keypad.
pub mod entry_mode;

/// This module contains the immutable engine state record and its reducer.
pub mod engine_state;

/// This structure owns the state of a single calculator. It is the only
/// mutable holder of an EngineState, replacing it wholesale on every press.
pub struct RpnEngine {
    state: EngineState,
}

/// Implementation functions for the RPN engine itself.
impl RpnEngine {

    /// Creates a new RpnEngine object with the correct power-on state.
    pub fn new() -> Self {
        RpnEngine {
            state: EngineState::new(),
        }
    }

    /// Gives read-only access to the full state, including the entry mode.
    pub fn state(&self) -> &EngineState {
        &self.state
    }
}

/// Implementation functions to be called from anything that understands what
/// an Engine object is.
impl Engine for RpnEngine {

    fn press_digit(&mut self, digit: u8) {
        self.press(Key::Digit(digit));
    }

    fn press_pi(&mut self) {
        self.press(Key::Pi);
    }

    fn press_decimal(&mut self) {
        self.press(Key::Decimal);
    }

    fn press_enter(&mut self) {
        self.press(Key::Enter);
    }

    fn press_operation(&mut self, operation: Operation) {
        self.press(Key::Operation(operation));
    }

    fn press_clear(&mut self) {
        self.press(Key::Clear);
    }

    fn press_store(&mut self) {
        self.press(Key::Store);
    }

    fn press_recall(&mut self) {
        self.press(Key::Recall);
    }

    /// Runs the key through the reducer and keeps the result.
    fn press(&mut self, key: Key) {
        self.state = self.state.apply(key);
    }

    fn display(&self) -> String {
        self.state.display()
    }

    fn stack(&self) -> RegisterStack {
        self.state.stack
    }

    fn memory(&self) -> f64 {
        self.state.memory
    }
}

#[cfg(test)]
mod tests;
