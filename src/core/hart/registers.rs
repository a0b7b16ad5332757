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

//! RV32 integer register names
//!
//! Registers can be addressed by raw index (`x0`..`x31`) or by their
//! ABI alias (`zero`, `ra`, `sp`, `a0`, ...). `fp` is accepted as an
//! alias of `s0`.

use crate::core::error::{EvalError, Result};

/// Number of integer registers
pub const REGISTER_COUNT: usize = 32;

/// ABI name of every integer register, indexed by register number
pub const ABI_NAMES: [&str; REGISTER_COUNT] = [
    "zero", "ra", "sp", "gp", "tp", "t0", "t1", "t2", //
    "s0", "s1", "a0", "a1", "a2", "a3", "a4", "a5", //
    "a6", "a7", "s2", "s3", "s4", "s5", "s6", "s7", //
    "s8", "s9", "s10", "s11", "t3", "t4", "t5", "t6",
];

/// Register numbers by ABI name
pub mod reg {
    pub const ZERO: u8 = 0;
    pub const RA: u8 = 1;
    pub const SP: u8 = 2;
    pub const GP: u8 = 3;
    pub const TP: u8 = 4;
    pub const T0: u8 = 5;
    pub const T1: u8 = 6;
    pub const T2: u8 = 7;
    pub const S0: u8 = 8;
    pub const S1: u8 = 9;
    pub const A0: u8 = 10;
    pub const A1: u8 = 11;
    pub const A2: u8 = 12;
    pub const A3: u8 = 13;
    pub const A4: u8 = 14;
    pub const A5: u8 = 15;
    pub const A6: u8 = 16;
    pub const A7: u8 = 17;
    pub const S2: u8 = 18;
    pub const S3: u8 = 19;
    pub const S4: u8 = 20;
    pub const S5: u8 = 21;
    pub const S6: u8 = 22;
    pub const S7: u8 = 23;
    pub const S8: u8 = 24;
    pub const S9: u8 = 25;
    pub const S10: u8 = 26;
    pub const S11: u8 = 27;
    pub const T3: u8 = 28;
    pub const T4: u8 = 29;
    pub const T5: u8 = 30;
    pub const T6: u8 = 31;
}

/// Look up a register number by name
///
/// # Arguments
///
/// * `name` - ABI name (`a0`), `fp`, or raw name (`x10`)
///
/// # Returns
///
/// - `Ok(index)` for a known register
/// - `Err(EvalError::UnknownRegister)` otherwise
///
/// # Example
/// ```
/// use rv32_eval::core::hart::registers::register_index;
///
/// assert_eq!(register_index("a0").unwrap(), 10);
/// assert_eq!(register_index("x10").unwrap(), 10);
/// assert_eq!(register_index("fp").unwrap(), 8);
/// assert!(register_index("x32").is_err());
/// ```
pub fn register_index(name: &str) -> Result<u8> {
    if name == "fp" {
        return Ok(reg::S0);
    }

    if let Some(pos) = ABI_NAMES.iter().position(|&abi| abi == name) {
        return Ok(pos as u8);
    }

    // Raw form: "x" followed by a decimal number without leading zeros
    if let Some(digits) = name.strip_prefix('x') {
        let canonical = !digits.is_empty() && (digits == "0" || !digits.starts_with('0'));
        if canonical {
            if let Ok(index) = digits.parse::<u8>() {
                if (index as usize) < REGISTER_COUNT {
                    return Ok(index);
                }
            }
        }
    }

    Err(EvalError::UnknownRegister(name.to_string()))
}

/// ABI name of register `index`
pub fn register_name(index: u8) -> Result<&'static str> {
    ABI_NAMES
        .get(index as usize)
        .copied()
        .ok_or(EvalError::InvalidRegister { index })
}
