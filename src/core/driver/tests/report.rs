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

use super::super::*;
use crate::core::trap::TrapRecorder;

#[test]
fn test_fixture_report() {
    let report = Driver::default()
        .run_report(&mut TrapRecorder::new())
        .unwrap();

    assert_eq!(
        report.first,
        CallReport {
            a: 20,
            b: 10,
            selector: '+',
            result: 30,
        }
    );
    assert_eq!(report.second.result, -10);
    assert_eq!(report.first_unsigned, 30);
    assert_eq!(report.second_unsigned, 4294967286);
    assert_eq!(report.branch, Branch::ShiftLeft);
    assert_eq!(report.trap, None);
    assert_eq!(report.exit_code, 125_829_120);
    assert_eq!(report.outcome, RunOutcome::Returned(125_829_120));
}

#[test]
fn test_outcome_trap_and_exit_code() {
    assert_eq!(RunOutcome::Returned(42).trap(), None);
    assert_eq!(RunOutcome::Returned(42).exit_code(), 42);
    assert_eq!(
        RunOutcome::EnvironmentCall.trap(),
        Some(TrapCause::EnvironmentCall)
    );
    assert_eq!(RunOutcome::Breakpoint.trap(), Some(TrapCause::Breakpoint));
    assert_eq!(RunOutcome::Breakpoint.exit_code(), -1);
}

#[test]
fn test_exit_status_is_low_byte() {
    // 0x07800000
    assert_eq!(RunOutcome::Returned(125_829_120).exit_status(), 0);
    assert_eq!(RunOutcome::Returned(0x1234).exit_status(), 0x34);
    assert_eq!(RunOutcome::Returned(-2).exit_status(), 254);
    assert_eq!(RunOutcome::EnvironmentCall.exit_status(), 1);
    assert_eq!(RunOutcome::Breakpoint.exit_status(), 255);
}

#[test]
fn test_report_json() {
    let report = Driver::default()
        .run_report(&mut TrapRecorder::new())
        .unwrap();

    let json: serde_json::Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();

    assert_eq!(json["first"]["result"], 30);
    assert_eq!(json["second"]["selector"], "-");
    assert_eq!(json["second_unsigned"], 4294967286u32);
    assert_eq!(json["branch"], "shift_left");
    assert!(json["trap"].is_null());
    assert_eq!(json["outcome"]["kind"], "returned");
    assert_eq!(json["outcome"]["value"], 125_829_120);
    assert_eq!(json["exit_code"], 125_829_120);
}

#[test]
fn test_ecall_report_json_is_snake_case() {
    let mut driver = Driver::new(DriverConfig {
        first: Call::new(i32::MIN, 0, Selector::Add),
        second: Call::new(i32::MAX, 0, Selector::Add),
    });
    let report = driver.run_report(&mut TrapRecorder::new()).unwrap();

    let json: serde_json::Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();

    assert_eq!(json["branch"], "environment_call");
    assert_eq!(json["trap"], "environment_call");
    assert_eq!(json["outcome"]["kind"], "environment_call");
    assert_eq!(json["exit_code"], 1);
}

#[test]
fn test_returned_outcome_json_carries_value() {
    let json = serde_json::to_value(RunOutcome::Returned(16)).unwrap();
    assert_eq!(json["kind"], "returned");
    assert_eq!(json["value"], 16);
}
