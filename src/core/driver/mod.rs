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

//! Fixture driver
//!
//! Evaluates two calls, compares their results as unsigned 32-bit values
//! and ends in one of three ways:
//!
//! 1. `a != b && (a as u32) < (b as u32)`: returns `evaluate(a, b, '<')`
//! 2. `a != b && (a as u32) > (b as u32)`: raises `ecall`, result `1`
//! 3. otherwise: raises `ebreak`, result [`BREAKPOINT_RESULT`]
//!
//! Each evaluation is performed as a call on a [`Hart`]: operands in
//! `a0`/`a1`, selector byte in `a2`, result in `a0`.

use log::{debug, info};

use crate::core::error::Result;
use crate::core::evaluator::{evaluate, Selector};
use crate::core::hart::{CallingConvention, Hart};
use crate::core::trap::{LoggingTrapHandler, TrapCause, TrapHandler};

mod outcome;
#[cfg(test)]
mod tests;

pub use outcome::{Branch, CallReport, RunOutcome, RunReport, BREAKPOINT_RESULT};

/// One evaluator call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Call {
    pub a: i32,
    pub b: i32,
    pub selector: Selector,
}

impl Call {
    pub fn new(a: i32, b: i32, selector: Selector) -> Self {
        Self { a, b, selector }
    }
}

/// Driver call constants
///
/// The default is the literal fixture: `(20, 10, '+')` then `(10, 20, '-')`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DriverConfig {
    pub first: Call,
    pub second: Call,
}

impl DriverConfig {
    /// Fixture's first call
    pub const FIRST: Call = Call {
        a: 20,
        b: 10,
        selector: Selector::Add,
    };

    /// Fixture's second call
    pub const SECOND: Call = Call {
        a: 10,
        b: 20,
        selector: Selector::Sub,
    };
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            first: Self::FIRST,
            second: Self::SECOND,
        }
    }
}

/// Fixture driver
///
/// # Example
/// ```
/// use rv32_eval::core::driver::{Driver, RunOutcome};
/// use rv32_eval::core::trap::TrapRecorder;
///
/// let mut driver = Driver::default();
/// let mut traps = TrapRecorder::new();
///
/// // 30 < 0xFFFF_FFF6 as unsigned, so the run shifts and returns
/// let outcome = driver.run(&mut traps).unwrap();
/// assert_eq!(outcome, RunOutcome::Returned(30 << 22));
/// assert_eq!(outcome.exit_code(), 125_829_120);
/// assert!(traps.events().is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct Driver {
    config: DriverConfig,
    cc: CallingConvention,
    hart: Hart,
}

impl Driver {
    /// Create a driver with the given call constants
    pub fn new(config: DriverConfig) -> Self {
        Self {
            config,
            cc: CallingConvention::default(),
            hart: Hart::new(),
        }
    }

    /// Use a different calling convention for evaluator calls
    ///
    /// The convention needs at least three argument registers, otherwise
    /// [`Driver::run`] fails with `EvalError::TooManyArguments`.
    pub fn with_calling_convention(mut self, cc: CallingConvention) -> Self {
        self.cc = cc;
        self
    }

    pub fn config(&self) -> &DriverConfig {
        &self.config
    }

    /// Register state after the last run
    pub fn hart(&self) -> &Hart {
        &self.hart
    }

    /// Run the fixture and return its outcome
    ///
    /// At most one trap is delivered to `handler`.
    ///
    /// # Errors
    ///
    /// Only if the calling convention cannot carry the three call arguments.
    pub fn run<H>(&mut self, handler: &mut H) -> Result<RunOutcome>
    where
        H: TrapHandler + ?Sized,
    {
        Ok(self.run_report(handler)?.outcome)
    }

    /// Run the fixture and return a full report
    pub fn run_report<H>(&mut self, handler: &mut H) -> Result<RunReport>
    where
        H: TrapHandler + ?Sized,
    {
        self.hart.reset();

        let first = self.invoke(self.config.first)?;
        let second = self.invoke(self.config.second)?;

        let (a, b) = (first.result, second.result);
        let (ua, ub) = (a as u32, b as u32);

        let (branch, outcome) = if a != b && ua < ub {
            let shifted = self.invoke(Call::new(a, b, Selector::ShiftLeft))?;
            (Branch::ShiftLeft, RunOutcome::Returned(shifted.result))
        } else if a != b && ua > ub {
            self.raise(handler, TrapCause::EnvironmentCall);
            (Branch::EnvironmentCall, RunOutcome::EnvironmentCall)
        } else {
            self.raise(handler, TrapCause::Breakpoint);
            (Branch::Breakpoint, RunOutcome::Breakpoint)
        };

        info!(
            "Run finished: a={} (0x{:08X}), b={} (0x{:08X}), branch={:?}, exit={}",
            a,
            ua,
            b,
            ub,
            branch,
            outcome.exit_code()
        );

        Ok(RunReport {
            first,
            second,
            first_unsigned: ua,
            second_unsigned: ub,
            branch,
            trap: outcome.trap(),
            exit_code: outcome.exit_code(),
            outcome,
        })
    }

    /// Evaluate `call` through the calling convention
    fn invoke(&mut self, call: Call) -> Result<CallReport> {
        let cc = &self.cc;
        let args = [
            call.a as u32,
            call.b as u32,
            u32::from(u8::from(call.selector)),
        ];

        let value = self.hart.call(cc, &args, |hart| {
            let a = hart.arg(cc, 0)? as i32;
            let b = hart.arg(cc, 1)? as i32;
            let selector = Selector::from(hart.arg(cc, 2)? as u8);
            hart.set_return(cc, evaluate(a, b, selector) as u32);
            Ok(())
        })? as i32;

        debug!(
            "evaluate({}, {}, '{}') = {} (0x{:08X})",
            call.a, call.b, call.selector, value, value as u32
        );

        Ok(CallReport::new(call, value))
    }

    fn raise<H>(&self, handler: &mut H, cause: TrapCause)
    where
        H: TrapHandler + ?Sized,
    {
        debug!("Raising {} (code {})", cause, cause.code());
        handler.on_trap(cause, &self.hart);
    }
}

impl Default for Driver {
    fn default() -> Self {
        Self::new(DriverConfig::default())
    }
}

/// Run the literal fixture with a logging trap handler
///
/// # Example
/// ```
/// use rv32_eval::core::driver::run_fixture;
///
/// assert_eq!(run_fixture().unwrap().exit_code(), 125_829_120);
/// ```
pub fn run_fixture() -> Result<RunOutcome> {
    Driver::default().run(&mut LoggingTrapHandler)
}
