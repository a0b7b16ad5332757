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

//! Integer calling convention
//!
//! Describes which registers carry arguments and results across a call,
//! and which ones a callee must preserve.

use super::registers::reg;

/// RV32 integer calling convention
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallingConvention {
    /// Convention name
    pub name: &'static str,
    /// Registers a callee may clobber
    pub caller_saved: &'static [u8],
    /// Registers a callee must preserve
    pub callee_saved: &'static [u8],
    /// Integer argument registers, in order
    pub int_arg_regs: &'static [u8],
    /// Integer return register (low word)
    pub int_return_reg: u8,
    /// Integer return register (high word)
    pub high_int_return_reg: u8,
    /// Global pointer
    pub global_pointer_reg: u8,
    /// Registers set up by the environment rather than by the caller
    pub implicitly_defined: &'static [u8],
}

const CALLER_SAVED: [u8; 16] = [
    reg::RA,
    reg::T0,
    reg::T1,
    reg::T2,
    reg::T3,
    reg::T4,
    reg::T5,
    reg::T6,
    reg::A0,
    reg::A1,
    reg::A2,
    reg::A3,
    reg::A4,
    reg::A5,
    reg::A6,
    reg::A7,
];

const CALLEE_SAVED: [u8; 13] = [
    reg::SP,
    reg::S0,
    reg::S1,
    reg::S2,
    reg::S3,
    reg::S4,
    reg::S5,
    reg::S6,
    reg::S7,
    reg::S8,
    reg::S9,
    reg::S10,
    reg::S11,
];

const INT_ARG_REGS: [u8; 8] = [
    reg::A0,
    reg::A1,
    reg::A2,
    reg::A3,
    reg::A4,
    reg::A5,
    reg::A6,
    reg::A7,
];

const IMPLICITLY_DEFINED: [u8; 2] = [reg::TP, reg::GP];

impl CallingConvention {
    /// Maximum number of integer arguments passed in registers
    pub fn max_int_args(&self) -> usize {
        self.int_arg_regs.len()
    }

    /// True if a callee may clobber `index`
    pub fn is_caller_saved(&self, index: u8) -> bool {
        self.caller_saved.contains(&index)
    }

    /// True if a callee must preserve `index`
    pub fn is_callee_saved(&self, index: u8) -> bool {
        self.callee_saved.contains(&index)
    }
}

impl Default for CallingConvention {
    fn default() -> Self {
        Self {
            name: "default",
            caller_saved: &CALLER_SAVED,
            callee_saved: &CALLEE_SAVED,
            int_arg_regs: &INT_ARG_REGS,
            int_return_reg: reg::A0,
            high_int_return_reg: reg::A1,
            global_pointer_reg: reg::GP,
            implicitly_defined: &IMPLICITLY_DEFINED,
        }
    }
}
