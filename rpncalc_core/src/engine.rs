// SPDX-License-Identifier: GPL-3.0
// engine.rs - Copyright Phillip Potter, 2026, under GPLv3 only.

use std::fmt;

use crate::keys::{Key, Operation};
use crate::stack::RegisterStack;

/// This module contains the default four-register RPN engine implementation.
/// There may be others in future.
pub mod rpn_engine;

/// This trait provides an implementation-opaque way of driving a calculator
/// engine from a keypad or any other front end. Every press is a complete
/// transition: the observable outputs are consistent as soon as it returns.
pub trait Engine {

    /// Implementations must append (or start) a numeral with this digit. Digits
    /// outside `0..=9` are a programmer error.
    fn press_digit(&mut self, digit: u8);

    /// Implementations must replace X with π.
    fn press_pi(&mut self);

    /// Implementations must add a decimal point to the numeral being typed.
    fn press_decimal(&mut self);

    /// Implementations must push X onto the stack.
    fn press_enter(&mut self);

    /// Implementations must carry out the given operation.
    fn press_operation(&mut self, operation: Operation);

    /// Implementations must zero the stack, leaving memory alone.
    fn press_clear(&mut self);

    /// Implementations must copy X into memory.
    fn press_store(&mut self);

    /// Implementations must push the memory value onto the stack.
    fn press_recall(&mut self);

    /// Implementations must route any key to the matching press function.
    fn press(&mut self, key: Key);

    /// Implementations must return the current display text.
    fn display(&self) -> String;

    /// Implementations must return a copy of the register stack.
    fn stack(&self) -> RegisterStack;

    /// Implementations must return the memory register value.
    fn memory(&self) -> f64;

    /// Implementations must return everything observable in one go.
    fn observe(&self) -> Observation {
        Observation {
            display: self.display(),
            stack: self.stack(),
            memory: self.memory(),
        }
    }
}

/// A snapshot of everything a front end is allowed to see after a key press.
#[derive(Clone, Debug, PartialEq)]
pub struct Observation {
    pub display: String,
    pub stack: RegisterStack,
    pub memory: f64,
}

impl fmt::Display for Observation {

    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.stack)?;
        writeln!(f, "M: {}", self.memory)?;
        write!(f, "[{:>12}]", self.display)
    }
}
