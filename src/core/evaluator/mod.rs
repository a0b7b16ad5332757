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

//! Selector evaluator
//!
//! Computes one of four integer operations on a pair of `i32` operands,
//! chosen by a single selector character:
//!
//! | Selector | Operation                 | RV32 equivalent |
//! |----------|---------------------------|-----------------|
//! | `'+'`    | wrapping add              | `add`           |
//! | `'-'`    | wrapping subtract         | `sub`           |
//! | `'<'`    | shift left                | `sll`           |
//! | `'>'`    | logical shift right       | `srl`           |
//! | other    | [`SENTINEL`]              | -               |
//!
//! Evaluation is total: every input produces a value.

use std::fmt;
use std::str::FromStr;

use crate::core::error::{EvalError, Result};

mod arithmetic;
mod shift;
#[cfg(test)]
mod tests;

/// Result for any unrecognized selector
pub const SENTINEL: i32 = 0x13371337;

/// Operation discriminant
///
/// Selectors are byte-sized. Values outside the four recognized characters
/// are kept verbatim in [`Selector::Other`] so the conversion back to `u8`
/// is lossless.
///
/// # Example
/// ```
/// use rv32_eval::core::evaluator::Selector;
///
/// assert_eq!(Selector::from(b'+'), Selector::Add);
/// assert_eq!(Selector::from(b'?'), Selector::Other(b'?'));
/// assert_eq!(u8::from(Selector::ShiftRight), b'>');
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Selector {
    /// `'+'`
    Add,
    /// `'-'`
    Sub,
    /// `'<'`
    ShiftLeft,
    /// `'>'`
    ShiftRight,
    /// Any other byte
    Other(u8),
}

impl Selector {
    /// Build a selector from a `char`
    ///
    /// Only the low byte of the code point is kept, the same truncation a
    /// C `char` parameter performs. `'+'` is recognized, `'\u{12B}'` (low
    /// byte `0x2B`) is too.
    pub fn from_char(c: char) -> Self {
        Self::from((c as u32 & 0xFF) as u8)
    }

    /// Selector as a `char`
    pub fn as_char(self) -> char {
        char::from(u8::from(self))
    }

    /// True for the four recognized operations
    pub fn is_recognized(self) -> bool {
        !matches!(self, Selector::Other(_))
    }
}

impl From<u8> for Selector {
    fn from(byte: u8) -> Self {
        match byte {
            b'+' => Selector::Add,
            b'-' => Selector::Sub,
            b'<' => Selector::ShiftLeft,
            b'>' => Selector::ShiftRight,
            other => Selector::Other(other),
        }
    }
}

impl From<Selector> for u8 {
    fn from(selector: Selector) -> Self {
        match selector {
            Selector::Add => b'+',
            Selector::Sub => b'-',
            Selector::ShiftLeft => b'<',
            Selector::ShiftRight => b'>',
            Selector::Other(byte) => byte,
        }
    }
}

impl FromStr for Selector {
    type Err = EvalError;

    /// Parse a selector from text holding exactly one character
    fn from_str(s: &str) -> Result<Self> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Ok(Self::from_char(c)),
            _ => Err(EvalError::InvalidSelector(s.to_string())),
        }
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selector::Other(byte) if !byte.is_ascii_graphic() => write!(f, "0x{:02X}", byte),
            _ => write!(f, "{}", self.as_char()),
        }
    }
}

/// Evaluate `selector` over `a` and `b`
///
/// # Arguments
///
/// * `a` - First operand (value to be shifted for `'<'` / `'>'`)
/// * `b` - Second operand (shift amount for `'<'` / `'>'`, low 5 bits used)
/// * `selector` - Operation to perform
///
/// # Returns
///
/// The computed value, or [`SENTINEL`] for an unrecognized selector
///
/// # Example
/// ```
/// use rv32_eval::core::evaluator::{evaluate, Selector, SENTINEL};
///
/// assert_eq!(evaluate(20, 10, Selector::Add), 30);
/// assert_eq!(evaluate(10, 20, Selector::Sub), -10);
/// assert_eq!(evaluate(1, 33, Selector::ShiftLeft), 2);
/// assert_eq!(evaluate(-1, 28, Selector::ShiftRight), 0xF);
/// assert_eq!(evaluate(1, 2, Selector::Other(b'*')), SENTINEL);
/// ```
#[inline]
pub fn evaluate(a: i32, b: i32, selector: Selector) -> i32 {
    match selector {
        Selector::Add => arithmetic::add(a, b),
        Selector::Sub => arithmetic::sub(a, b),
        Selector::ShiftLeft => shift::sll(a, b),
        Selector::ShiftRight => shift::srl(a, b),
        Selector::Other(_) => SENTINEL,
    }
}

/// [`evaluate`] with a `char` selector
pub fn evaluate_char(a: i32, b: i32, c: char) -> i32 {
    evaluate(a, b, Selector::from_char(c))
}
