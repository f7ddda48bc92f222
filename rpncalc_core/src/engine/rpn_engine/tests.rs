// SPDX-License-Identifier: GPL-3.0
// tests.rs - Copyright Phillip Potter, 2026, under GPLv3 only.

use proptest::prelude::*;

use super::RpnEngine;
use crate::engine::Engine;
use crate::keys::{parse_keys, Operation};
use crate::stack::RegisterStack;

// Tests for the RPN engine, driven key by key as a keypad would.

/// Types a whole number one digit at a time.
fn type_number(engine: &mut RpnEngine, value: u32) {
    for digit in value.to_string().bytes() {
        engine.press_digit(digit - b'0');
    }
}

/// Runs a line of key tokens against a fresh engine.
fn run_keys(line: &str) -> RpnEngine {

    let mut engine = RpnEngine::new();
    for key in parse_keys(line).unwrap() {
        engine.press(key);
    }
    engine
}

#[test]
fn three_enter_four_plus_should_show_seven() {

    let engine = run_keys("3 ENTER 4 +");

    assert_eq!(engine.display(), "7");
    assert_eq!(engine.stack(), RegisterStack::from_registers(7.0, 0.0, 0.0, 0.0));
}

#[test]
fn division_by_zero_should_show_sentinel_and_keep_working() {

    let mut engine = run_keys("5 ENTER 0 ÷");

    assert_eq!(engine.display(), "Infinity");
    assert!(engine.stack().x.is_infinite());

    engine.press_digit(2);
    assert_eq!(engine.display(), "2");
    assert_eq!(engine.stack().x, 2.0);
}

#[test]
fn domain_errors_should_show_nan() {

    let engine = run_keys("1 CHS ln");
    assert_eq!(engine.display(), "NaN");

    let engine = run_keys("2 arc sin");
    assert_eq!(engine.display(), "NaN");

    let engine = run_keys("0 1/x");
    assert_eq!(engine.display(), "Infinity");

    let engine = run_keys("0 log");
    assert_eq!(engine.display(), "-Infinity");
}

#[test]
fn arc_sin_should_apply_once_only() {

    let mut engine = run_keys("1 arc");
    engine.press_operation(Operation::Sin);

    let half_pi = engine.stack().x;
    assert!((half_pi - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
    assert_eq!(engine.display(), "1.57079632");
    assert!(!engine.state().inverse_armed);

    // The prefix has been used up, so this is a plain sine of π/2.
    engine.press_operation(Operation::Sin);
    assert!((engine.stack().x - 1.0).abs() < 1e-12);
}

#[test]
fn eex_entry_should_build_scientific_value() {

    let mut engine = run_keys("5 EEX 1 2");

    assert_eq!(engine.display(), "5e12");
    assert_eq!(engine.stack().x, 5e12);

    engine.press_operation(Operation::ChangeSign);
    assert_eq!(engine.display(), "5e-12");
    assert_eq!(engine.stack().x, 5e-12);
    assert!(engine.state().entry.is_entering_exponent());
}

#[test]
fn committed_exponent_value_should_use_scientific_display() {

    let engine = run_keys("5 EEX 1 2 ENTER");

    assert_eq!(engine.display(), "5.000000e+12");
}

#[test]
fn small_committed_value_should_not_show_as_zero() {

    let engine = run_keys("5 EEX CHS 9 ENTER");

    assert_eq!(engine.stack().x, 5e-9);
    assert_eq!(engine.display(), "5e-9");
}

#[test]
fn small_quotient_should_keep_its_exponent_visible() {

    let engine = run_keys("1 ENTER 3 0 0 0 0 0 0 0 0 ÷");

    assert!(engine.stack().x > 0.0);
    assert_eq!(engine.display(), "3.33333e-9");
}

#[test]
fn press_pi_should_replace_x_without_lift() {

    let mut engine = run_keys("2 ENTER 7");
    engine.press_pi();

    assert_eq!(engine.stack(), RegisterStack::from_registers(std::f64::consts::PI, 2.0, 0.0, 0.0));
    assert_eq!(engine.display(), "3.14159265");
    assert!(!engine.state().entry.is_entering());
}

#[test]
fn operand_order_should_matter_for_subtract_and_divide() {

    assert_eq!(run_keys("9 ENTER 2 -").display(), "7");
    assert_eq!(run_keys("9 ENTER 2 ÷").display(), "4.5");
    assert_eq!(run_keys("2 ENTER 1 0 x^y").display(), "1024");
}

#[test]
fn digit_after_operation_should_overwrite_result() {

    let engine = run_keys("3 ENTER 4 + 5");

    assert_eq!(engine.stack(), RegisterStack::from_registers(5.0, 0.0, 0.0, 0.0));
}

#[test]
fn chained_calculation_should_keep_result_after_enter() {

    // (3 + 4) × 5
    let engine = run_keys("3 ENTER 4 + ENTER 5 ×");

    assert_eq!(engine.display(), "35");
    assert_eq!(engine.stack().y, 0.0);
}

#[test]
fn pushing_past_t_should_drop_oldest_value() {

    let engine = run_keys("1 ENTER 2 ENTER 3 ENTER 4 ENTER");

    assert_eq!(engine.stack(), RegisterStack::from_registers(4.0, 4.0, 3.0, 2.0));
}

#[test]
fn swap_should_update_display() {

    let engine = run_keys("3 ENTER 4 x↔y");

    assert_eq!(engine.display(), "3");
    assert_eq!(engine.stack().y, 4.0);
}

#[test]
fn pi_should_show_truncated_value() {

    let engine = run_keys("π");

    assert_eq!(engine.display(), "3.14159265");
    assert!(!engine.state().inverse_armed);
}

#[test]
fn clear_should_leave_memory_for_recall() {

    let mut engine = run_keys("6 STO ENTER 2 CLR");

    assert_eq!(engine.display(), "0");
    assert_eq!(engine.memory(), 6.0);

    engine.press_recall();
    assert_eq!(engine.display(), "6");
}

#[test]
fn observe_should_report_all_outputs() {

    let engine = run_keys("2 STO ENTER 3 ×");
    let observation = engine.observe();

    assert_eq!(observation.display, "6");
    assert_eq!(observation.stack.x, 6.0);
    assert_eq!(observation.memory, 2.0);
}

#[test]
#[should_panic]
fn out_of_range_digit_should_panic() {

    let mut engine = RpnEngine::new();
    engine.press_digit(11);
}

proptest! {

    #[test]
    fn addition_should_match_typed_operands(a in 0_u32..1_000_000, b in 0_u32..1_000_000) {

        let mut engine = RpnEngine::new();
        type_number(&mut engine, a);
        engine.press_enter();
        type_number(&mut engine, b);
        engine.press_operation(Operation::Add);

        prop_assert_eq!(engine.stack().x, a as f64 + b as f64);
        prop_assert_eq!(engine.stack().y, 0.0);
    }

    #[test]
    fn clear_should_be_idempotent(a in 0_u32..1_000_000, b in 0_u32..1_000_000) {

        let mut engine = RpnEngine::new();
        type_number(&mut engine, a);
        engine.press_enter();
        type_number(&mut engine, b);

        engine.press_clear();
        let once = engine.state().clone();
        engine.press_clear();

        prop_assert_eq!(engine.state(), &once);
        prop_assert_eq!(engine.stack(), RegisterStack::new());
        prop_assert_eq!(engine.display(), "0");
        prop_assert!(!engine.state().entry.is_entering());
    }

    #[test]
    fn store_clear_recall_should_restore_x(a in 0_u32..1_000_000, b in 0_u32..1_000_000) {

        let mut engine = RpnEngine::new();
        type_number(&mut engine, a);
        engine.press_enter();
        type_number(&mut engine, b);

        engine.press_store();
        engine.press_clear();
        engine.press_recall();

        prop_assert_eq!(engine.stack(), RegisterStack::from_registers(b as f64, 0.0, 0.0, 0.0));
    }

    #[test]
    fn swap_should_be_its_own_inverse(values in proptest::array::uniform4(0_u32..1_000)) {

        let mut engine = RpnEngine::new();
        for (index, value) in values.iter().enumerate() {
            if index > 0 {
                engine.press_enter();
            }
            type_number(&mut engine, *value);
        }

        let before = engine.stack();
        engine.press_operation(Operation::Swap);
        prop_assert_eq!(engine.stack().x, before.y);
        prop_assert_eq!(engine.stack().y, before.x);

        engine.press_operation(Operation::Swap);
        prop_assert_eq!(engine.stack(), before);
    }
}
