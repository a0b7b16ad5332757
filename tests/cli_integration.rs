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


//! Runs of the `rv32-eval` binary

mod common;

use std::process::{Command, Output};

use common::fixtures::write_config;

fn rv32_eval(args: &[&str]) -> Output {
    rv32_eval_logged(args, "off")
}

fn rv32_eval_logged(args: &[&str], filter: &str) -> Output {
    Command::new(env!("CARGO_BIN_EXE_rv32-eval"))
        .args(args)
        .env("RUST_LOG", filter)
        .output()
        .expect("Failed to run rv32-eval")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn test_run_exit_status_is_low_byte_of_result() {
    // 125829120 = 0x07800000
    let output = rv32_eval(&["run"]);

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains("result = 125829120"));
}

#[test]
fn test_run_breakpoint_exits_255() {
    let file = write_config("[second]\na = 20\nb = 10\nselector = \"+\"\n");
    let path = file.path().to_str().expect("Temp path is not UTF-8");

    let output = rv32_eval(&["run", "--config", path, "--json"]);

    assert_eq!(output.status.code(), Some(255));
    let json: serde_json::Value =
        serde_json::from_str(&stdout(&output)).expect("Report is not JSON");
    assert_eq!(json["branch"], "breakpoint");
    assert_eq!(json["trap"], "breakpoint");
    assert_eq!(json["exit_code"], -1);
}

#[test]
fn test_run_logs_unreadable_config() {
    let output = rv32_eval_logged(&["run", "--config", "/nonexistent/rv32-eval.toml"], "error");

    assert!(!output.status.success());
    assert!(stdout(&output).is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Failed to load config"));
}

#[test]
fn test_eval_prints_decimal_and_hex() {
    let output = rv32_eval(&["eval", "10", "20", "-"]);

    assert!(output.status.success());
    assert_eq!(stdout(&output).trim(), "-10 (0xFFFFFFF6)");
}

#[test]
fn test_eval_rejects_multi_char_selector() {
    let output = rv32_eval(&["eval", "1", "2", "<<"]);

    assert!(!output.status.success());
    assert!(stdout(&output).is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("InvalidSelector"));
}
