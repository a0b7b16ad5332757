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

// === Arithmetic Operations ===

/// ADD: Add (no overflow trap)
///
/// Overflow wraps around (modulo 2^32), matching RV32 `add`.
///
/// Operation: result = a + b
#[inline(always)]
pub(super) fn add(a: i32, b: i32) -> i32 {
    a.wrapping_add(b)
}

/// SUB: Subtract (no overflow trap)
///
/// Overflow wraps around (modulo 2^32), matching RV32 `sub`.
///
/// Operation: result = a - b
#[inline(always)]
pub(super) fn sub(a: i32, b: i32) -> i32 {
    a.wrapping_sub(b)
}
