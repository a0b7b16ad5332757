// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 itsakeyfut
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Custom assertions for driver testing

use rv32_eval::core::driver::RunOutcome;
use rv32_eval::core::hart::Hart;
use rv32_eval::core::trap::{TrapCause, TrapRecorder};

/// Assert hart register has expected value
#[allow(dead_code)]
pub fn assert_hart_reg(hart: &Hart, name: &str, expected: u32) {
    let actual = hart.reg_by_name(name).expect("Unknown register");
    assert_eq!(
        actual, expected,
        "Register {} mismatch: expected 0x{:08X}, got 0x{:08X}",
        name, expected, actual
    );
}

/// Assert exactly one trap with `cause` was delivered, and nothing else
#[allow(dead_code)]
pub fn assert_single_trap(traps: &TrapRecorder, cause: TrapCause) {
    let causes: Vec<TrapCause> = traps.events().iter().map(|e| e.cause).collect();
    assert_eq!(
        causes,
        vec![cause],
        "Expected exactly one {} trap, got {:?}",
        cause,
        causes
    );
}

/// Assert no trap was delivered
#[allow(dead_code)]
pub fn assert_no_trap(traps: &TrapRecorder) {
    assert!(
        traps.events().is_empty(),
        "Expected no trap, got {:?}",
        traps.events()
    );
}

/// Assert a run ended with `expected` and its exit code
#[allow(dead_code)]
pub fn assert_outcome(actual: RunOutcome, expected: RunOutcome, exit_code: i32) {
    assert_eq!(actual, expected, "Outcome mismatch");
    assert_eq!(
        actual.exit_code(),
        exit_code,
        "Exit code mismatch for {:?}",
        actual
    );
}
