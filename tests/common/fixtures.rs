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

//! Test fixtures for common test scenarios

use std::io::Write;

use rv32_eval::core::driver::{Call, Driver, DriverConfig};
use rv32_eval::core::evaluator::Selector;
use rv32_eval::core::trap::TrapRecorder;
use tempfile::NamedTempFile;

/// Driver with the literal fixture constants and an empty trap recorder
#[allow(dead_code)]
pub fn fixture_driver() -> (Driver, TrapRecorder) {
    (Driver::default(), TrapRecorder::new())
}

/// Driver for two calls given as `(a, b, selector)` tuples
#[allow(dead_code)]
pub fn driver_for(first: (i32, i32, char), second: (i32, i32, char)) -> Driver {
    let call = |(a, b, c): (i32, i32, char)| Call::new(a, b, Selector::from_char(c));
    Driver::new(DriverConfig {
        first: call(first),
        second: call(second),
    })
}

/// Write `contents` to a temporary `.toml` file
#[allow(dead_code)]
pub fn write_config(contents: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .prefix("rv32-eval-")
        .suffix(".toml")
        .tempfile()
        .expect("Failed to create temp config");
    file.write_all(contents.as_bytes())
        .expect("Failed to write temp config");
    file
}
