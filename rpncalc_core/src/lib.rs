// SPDX-License-Identifier: GPL-3.0
// lib.rs - Copyright Phillip Potter, 2026, under GPLv3 only.

// Crate-wide lines to disable specific lints:

// Components are built with explicit constructors that set up their initial
// state, so there will be no derived Default implementations unless needed.
#![allow(clippy::new_without_default)]

/// This module contains the four-level X/Y/Z/T register stack.
pub mod stack;

/// This module contains the closed vocabulary of keys the engine understands.
pub mod keys;

/// This module contains the calculator engine and its data-entry state machine.
pub mod engine;
