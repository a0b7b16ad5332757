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

// === Shift Operations ===

/// Mask applied to every shift amount (operand width is 32)
const SHAMT_MASK: u32 = 0x1F;

/// Shift amount taken from the lower 5 bits of `b`
#[inline(always)]
fn shamt(b: i32) -> u32 {
    (b as u32) & SHAMT_MASK
}

/// SLL: Shift Left Logical
///
/// Shifts `a` left by the amount in the lower 5 bits of `b`.
/// Negative or out-of-range amounts are reduced modulo 32.
///
/// Format: sll rd, rs1, rs2
/// Operation: rd = rs1 << (rs2 & 0x1F)
#[inline(always)]
pub(super) fn sll(a: i32, b: i32) -> i32 {
    ((a as u32) << shamt(b)) as i32
}

/// SRL: Shift Right Logical (zero-fill)
///
/// Shifts the raw bit pattern of `a` right, filling with zeros.
///
/// Format: srl rd, rs1, rs2
/// Operation: rd = rs1 >> (rs2 & 0x1F) (zero-fill)
#[inline(always)]
pub(super) fn srl(a: i32, b: i32) -> i32 {
    ((a as u32) >> shamt(b)) as i32
}
