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

//! Core components
//!
//! - Evaluator (selector over add, sub, shift left, shift right)
//! - Driver (fixture control flow)
//! - Hart (RV32 integer registers and calling convention)
//! - Trap delivery (`ecall` / `ebreak`)
//! - Configuration

pub mod config;
pub mod driver;
pub mod error;
pub mod evaluator;
pub mod hart;
pub mod trap;

// Re-export commonly used types
pub use config::Config;
pub use driver::{Driver, DriverConfig, RunOutcome};
pub use error::{EvalError, Result};
pub use evaluator::{evaluate, Selector, SENTINEL};
pub use hart::Hart;
pub use trap::{TrapCause, TrapHandler};
