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

//! RV32 fixture kernel library
//!
//! This library implements the control and arithmetic kernel of a small
//! RV32I test program: a selector evaluator, the driver that calls it, and
//! hooks for the two trap instructions (`ecall`, `ebreak`) it raises.
//!
//! # Example
//!
//! ```
//! use rv32_eval::core::driver::{Driver, RunOutcome};
//! use rv32_eval::core::evaluator::{evaluate, Selector};
//! use rv32_eval::core::trap::TrapRecorder;
//!
//! assert_eq!(evaluate(20, 10, Selector::Add), 30);
//!
//! let mut traps = TrapRecorder::new();
//! let outcome = Driver::default().run(&mut traps).unwrap();
//! assert_eq!(outcome, RunOutcome::Returned(30 << 22));
//! assert!(traps.events().is_empty());
//! ```

pub mod core;
