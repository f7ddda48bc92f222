// SPDX-License-Identifier: GPL-3.0
// keys.rs - Copyright Phillip Potter, 2026, under GPLv3 only.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// This enum represents every function key that is routed through the operation
/// dispatcher, including the EEX, CHS and arc modifiers.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
    Power,
    SquareRoot,
    Reciprocal,
    Sin,
    Cos,
    Tan,
    Log,
    Ln,
    Exp,
    ChangeSign,
    Swap,
    EnterExponent,
    Arc,
}

/// This enum represents a single key press, which is the only kind of event the
/// engine ever receives.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Key {
    Digit(u8),
    Pi,
    Decimal,
    Enter,
    Operation(Operation),
    Clear,
    Store,
    Recall,
}

/// Errors produced when turning key tokens into keys.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum KeyParseError {
    #[error("unknown key token '{0}'")]
    UnknownKey(String),

    #[error("unknown operation '{0}'")]
    UnknownOperation(String),
}

/// Every operation, in keypad order.
#[cfg(test)]
pub(crate) const ALL_OPERATIONS: [Operation; 17] = [
    Operation::Power,
    Operation::Log,
    Operation::Ln,
    Operation::Exp,
    Operation::SquareRoot,
    Operation::Arc,
    Operation::Sin,
    Operation::Cos,
    Operation::Tan,
    Operation::Reciprocal,
    Operation::Swap,
    Operation::ChangeSign,
    Operation::EnterExponent,
    Operation::Subtract,
    Operation::Add,
    Operation::Multiply,
    Operation::Divide,
];

impl Operation {

    /// Returns the legend printed on the key.
    pub fn legend(&self) -> &'static str {
        match self {
            Operation::Add => "+",
            Operation::Subtract => "-",
            Operation::Multiply => "×",
            Operation::Divide => "÷",
            Operation::Power => "x^y",
            Operation::SquareRoot => "√x",
            Operation::Reciprocal => "1/x",
            Operation::Sin => "sin",
            Operation::Cos => "cos",
            Operation::Tan => "tan",
            Operation::Log => "log",
            Operation::Ln => "ln",
            Operation::Exp => "e^x",
            Operation::ChangeSign => "CHS",
            Operation::Swap => "x↔y",
            Operation::EnterExponent => "EEX",
            Operation::Arc => "arc",
        }
    }

    /// Returns true for the operations that consume Y and X and drop the stack.
    pub fn is_binary(&self) -> bool {
        matches!(
            self,
            Operation::Add
                | Operation::Subtract
                | Operation::Multiply
                | Operation::Divide
                | Operation::Power
        )
    }

    /// Returns true for the operations the arc prefix applies to.
    pub fn is_trigonometric(&self) -> bool {
        matches!(self, Operation::Sin | Operation::Cos | Operation::Tan)
    }
}

impl fmt::Display for Operation {

    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.legend())
    }
}

/// Accepts the keypad legends as well as plain ASCII spellings, case-insensitively.
impl FromStr for Operation {

    type Err = KeyParseError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {

        // Legends with non-ASCII symbols first, since lowercasing them is pointless.
        match token {
            "×" => return Ok(Operation::Multiply),
            "÷" => return Ok(Operation::Divide),
            "√x" | "√" => return Ok(Operation::SquareRoot),
            "x↔y" | "↔" => return Ok(Operation::Swap),
            _ => (),
        }

        match token.to_ascii_lowercase().as_str() {
            "+" => Ok(Operation::Add),
            "-" => Ok(Operation::Subtract),
            "*" => Ok(Operation::Multiply),
            "/" => Ok(Operation::Divide),
            "x^y" | "^" | "pow" => Ok(Operation::Power),
            "sqrt" => Ok(Operation::SquareRoot),
            "1/x" | "recip" => Ok(Operation::Reciprocal),
            "sin" => Ok(Operation::Sin),
            "cos" => Ok(Operation::Cos),
            "tan" => Ok(Operation::Tan),
            "log" => Ok(Operation::Log),
            "ln" => Ok(Operation::Ln),
            "e^x" | "exp" => Ok(Operation::Exp),
            "chs" => Ok(Operation::ChangeSign),
            "x<>y" | "swap" => Ok(Operation::Swap),
            "eex" => Ok(Operation::EnterExponent),
            "arc" => Ok(Operation::Arc),
            _ => Err(KeyParseError::UnknownOperation(token.to_string())),
        }
    }
}

impl fmt::Display for Key {

    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Digit(digit) => write!(f, "{}", digit),
            Key::Pi => f.write_str("π"),
            Key::Decimal => f.write_str("."),
            Key::Enter => f.write_str("ENTER"),
            Key::Operation(operation) => write!(f, "{}", operation),
            Key::Clear => f.write_str("CLR"),
            Key::Store => f.write_str("STO"),
            Key::Recall => f.write_str("RCL"),
        }
    }
}

impl FromStr for Key {

    type Err = KeyParseError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {

        let mut chars = token.chars();
        if let (Some(digit), None) = (chars.next(), chars.next()) {
            if let Some(value) = digit.to_digit(10) {
                return Ok(Key::Digit(value as u8));
            }
        }

        match token {
            "π" => return Ok(Key::Pi),
            "." => return Ok(Key::Decimal),
            _ => (),
        }

        match token.to_ascii_lowercase().as_str() {
            "pi" => Ok(Key::Pi),
            "enter" | "ent" => Ok(Key::Enter),
            "clr" | "clear" => Ok(Key::Clear),
            "sto" | "store" => Ok(Key::Store),
            "rcl" | "recall" => Ok(Key::Recall),
            _ => token
                .parse::<Operation>()
                .map(Key::Operation)
                .map_err(|_| KeyParseError::UnknownKey(token.to_string())),
        }
    }
}

/// Splits a line of whitespace-separated tokens into keys, stopping at the first
/// token that is not recognised.
pub fn parse_keys(line: &str) -> Result<Vec<Key>, KeyParseError> {
    line.split_whitespace().map(str::parse).collect()
}
