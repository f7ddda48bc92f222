// SPDX-License-Identifier: GPL-3.0
// stack.rs - Copyright Phillip Potter, 2026, under GPLv3 only.

use std::fmt;

/// The number of registers in the stack.
#[cfg(test)]
const STACK_DEPTH: usize = 4;

/// This structure models the operational stack of a classic four-register RPN
/// calculator. X is the bottom (displayed) register and T the top-most one.
/// There is no overflow error: anything pushed past T simply drops off the top.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RegisterStack {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub t: f64,
}

impl RegisterStack {

    /// Creates a new RegisterStack object with every register zeroed.
    pub fn new() -> Self {
        RegisterStack {
            x: 0.0,
            y: 0.0,
            z: 0.0,
            t: 0.0,
        }
    }

    /// Creates a RegisterStack from explicit register values.
    #[cfg(test)]
    pub(crate) fn from_registers(x: f64, y: f64, z: f64, t: f64) -> Self {
        RegisterStack { x, y, z, t }
    }

    /// Pushes a literal value, lifting every register up one level. The previous
    /// contents of T are lost, which is how the hardware behaves.
    pub fn push(&self, value: f64) -> Self {
        RegisterStack {
            x: value,
            y: self.x,
            z: self.y,
            t: self.z,
        }
    }

    /// Replaces X with the result of a binary operation and drops the stack by one
    /// level. T is refilled with zero rather than duplicated.
    pub fn shift_down(&self, result: f64) -> Self {
        RegisterStack {
            x: result,
            y: self.z,
            z: self.t,
            t: 0.0,
        }
    }

    /// Replaces X only, leaving Y/Z/T untouched.
    pub fn with_x(&self, value: f64) -> Self {
        RegisterStack {
            x: value,
            ..*self
        }
    }

    /// Exchanges X and Y.
    pub fn swap_xy(&self) -> Self {
        RegisterStack {
            x: self.y,
            y: self.x,
            ..*self
        }
    }

    /// Returns the registers bottom first, in X/Y/Z/T order.
    #[cfg(test)]
    pub(crate) fn to_array(&self) -> [f64; STACK_DEPTH] {
        [self.x, self.y, self.z, self.t]
    }
}

/// Prints the registers top first, the way they would be drawn above the display.
impl fmt::Display for RegisterStack {

    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "T: {}", self.t)?;
        writeln!(f, "Z: {}", self.z)?;
        writeln!(f, "Y: {}", self.y)?;
        write!(f, "X: {}", self.x)
    }
}
