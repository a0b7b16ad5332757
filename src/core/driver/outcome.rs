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

use serde::Serialize;

use super::Call;
use crate::core::trap::TrapCause;

/// Result of the breakpoint branch
///
/// The fixture falls off the end of `main` after `ebreak` without a return
/// value; this fixed value stands in for it.
pub const BREAKPOINT_RESULT: i32 = -1;

/// How a run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum RunOutcome {
    /// Returned `evaluate(a, b, '<')`
    Returned(i32),
    /// Raised `ecall`, then returned `1`
    EnvironmentCall,
    /// Raised `ebreak`
    Breakpoint,
}

impl RunOutcome {
    /// Process-style result of the run
    pub fn exit_code(self) -> i32 {
        match self {
            RunOutcome::Returned(value) => value,
            RunOutcome::EnvironmentCall => 1,
            RunOutcome::Breakpoint => BREAKPOINT_RESULT,
        }
    }

    /// Process exit status of the run
    ///
    /// The low byte of [`RunOutcome::exit_code`], as a POSIX `exit` keeps it.
    pub fn exit_status(self) -> u8 {
        (self.exit_code() & 0xFF) as u8
    }

    /// Trap raised on the way out, if any
    pub fn trap(self) -> Option<TrapCause> {
        match self {
            RunOutcome::Returned(_) => None,
            RunOutcome::EnvironmentCall => Some(TrapCause::EnvironmentCall),
            RunOutcome::Breakpoint => Some(TrapCause::Breakpoint),
        }
    }
}

/// Branch taken after the unsigned comparison
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Branch {
    ShiftLeft,
    EnvironmentCall,
    Breakpoint,
}

/// One evaluator call and its result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CallReport {
    pub a: i32,
    pub b: i32,
    pub selector: char,
    pub result: i32,
}

impl CallReport {
    pub(super) fn new(call: Call, result: i32) -> Self {
        Self {
            a: call.a,
            b: call.b,
            selector: call.selector.as_char(),
            result,
        }
    }
}

/// Everything observed during one run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunReport {
    pub first: CallReport,
    pub second: CallReport,
    /// First result reinterpreted as `u32`
    pub first_unsigned: u32,
    /// Second result reinterpreted as `u32`
    pub second_unsigned: u32,
    pub branch: Branch,
    pub trap: Option<TrapCause>,
    pub exit_code: i32,
    pub outcome: RunOutcome,
}

impl RunReport {
    /// Pretty-printed JSON
    pub fn to_json(&self) -> crate::core::error::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
