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

//! Trap delivery
//!
//! `ecall` and `ebreak` cannot be executed portably, so they are modeled
//! as calls into a [`TrapHandler`] owned by the surrounding environment.
//! The hart is passed along so a handler can read the registers an
//! environment call conventionally uses (`a7` for the service number,
//! `a0` for the first argument).

use std::fmt;

use serde::Serialize;

use crate::core::hart::registers::reg;
use crate::core::hart::Hart;

/// Trap cause codes
///
/// These correspond to the RISC-V `mcause` exception codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
#[repr(u32)]
pub enum TrapCause {
    /// `ebreak` executed
    Breakpoint = 3,
    /// `ecall` executed from M-mode
    EnvironmentCall = 11,
}

impl TrapCause {
    /// `mcause` exception code
    pub fn code(self) -> u32 {
        self as u32
    }

    /// Instruction mnemonic that raises this trap
    pub fn mnemonic(self) -> &'static str {
        match self {
            TrapCause::Breakpoint => "ebreak",
            TrapCause::EnvironmentCall => "ecall",
        }
    }
}

impl fmt::Display for TrapCause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.mnemonic())
    }
}

/// Receiver of boundary effects
///
/// Implemented for any `FnMut(TrapCause, &Hart)` closure.
pub trait TrapHandler {
    /// Called once at the control point where the trap is raised
    fn on_trap(&mut self, cause: TrapCause, hart: &Hart);
}

impl<F> TrapHandler for F
where
    F: FnMut(TrapCause, &Hart),
{
    fn on_trap(&mut self, cause: TrapCause, hart: &Hart) {
        self(cause, hart)
    }
}

/// Handler that only logs
#[derive(Debug, Default, Clone, Copy)]
pub struct LoggingTrapHandler;

impl TrapHandler for LoggingTrapHandler {
    fn on_trap(&mut self, cause: TrapCause, hart: &Hart) {
        log::warn!(
            "TRAP: cause={:?} ({}), code={}, a0=0x{:08X}, a7=0x{:08X}",
            cause,
            cause.mnemonic(),
            cause.code(),
            hart.reg(reg::A0),
            hart.reg(reg::A7)
        );
        hart.dump_registers();
    }
}

/// One delivered trap
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TrapEvent {
    pub cause: TrapCause,
    /// `a0` at the trap point
    pub a0: u32,
    /// `a7` at the trap point
    pub a7: u32,
}

/// Handler that records every trap
///
/// # Example
/// ```
/// use rv32_eval::core::driver::{Call, Driver, DriverConfig};
/// use rv32_eval::core::evaluator::Selector;
/// use rv32_eval::core::trap::{TrapCause, TrapRecorder};
///
/// // 0x8000_0000 > 0x7FFF_FFFF unsigned: takes the ecall branch
/// let mut driver = Driver::new(DriverConfig {
///     first: Call::new(i32::MIN, 0, Selector::Add),
///     second: Call::new(i32::MAX, 0, Selector::Add),
/// });
///
/// let mut recorder = TrapRecorder::new();
/// driver.run(&mut recorder).unwrap();
/// assert_eq!(recorder.count(TrapCause::EnvironmentCall), 1);
/// ```
#[derive(Debug, Default, Clone)]
pub struct TrapRecorder {
    events: Vec<TrapEvent>,
}

impl TrapRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// All traps received, in order
    pub fn events(&self) -> &[TrapEvent] {
        &self.events
    }

    /// Number of traps received with `cause`
    pub fn count(&self, cause: TrapCause) -> usize {
        self.events.iter().filter(|e| e.cause == cause).count()
    }

    /// Discard recorded traps
    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl TrapHandler for TrapRecorder {
    fn on_trap(&mut self, cause: TrapCause, hart: &Hart) {
        log::debug!("Recording trap {}", cause);
        self.events.push(TrapEvent {
            cause,
            a0: hart.reg(reg::A0),
            a7: hart.reg(reg::A7),
        });
    }
}
