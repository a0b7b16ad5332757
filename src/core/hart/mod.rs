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

use crate::core::error::{EvalError, Result};

mod abi;
pub mod registers;
#[cfg(test)]
mod tests;

// Re-exports
pub use abi::CallingConvention;
use registers::REGISTER_COUNT;

/// RV32 hart (integer register file only)
///
/// # Specifications
/// - Architecture: RV32I
/// - Registers: 32 x 32-bit integer registers
/// - x0 is hardwired to zero
///
/// # Example
/// ```
/// use rv32_eval::core::hart::Hart;
///
/// let mut hart = Hart::new();
/// hart.set_reg(10, 30);
/// assert_eq!(hart.reg(10), 30);
/// assert_eq!(hart.reg(0), 0); // x0 is always 0
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hart {
    /// Integer registers (x0-x31)
    ///
    /// x0 is hardwired to always return 0
    regs: [u32; REGISTER_COUNT],
}

impl Hart {
    /// Create a new hart with all registers cleared
    pub fn new() -> Self {
        Self {
            regs: [0u32; REGISTER_COUNT],
        }
    }

    /// Reset all registers to 0
    pub fn reset(&mut self) {
        self.regs = [0u32; REGISTER_COUNT];
    }

    /// Read from integer register
    ///
    /// # Arguments
    /// - `index`: Register number (0-31)
    ///
    /// # Returns
    /// Register value. x0 always returns 0.
    ///
    /// # Panics
    /// If `index` is 32 or above. Use [`Hart::try_reg`] for unchecked input.
    #[inline(always)]
    pub fn reg(&self, index: u8) -> u32 {
        if index == 0 {
            0
        } else {
            self.regs[index as usize]
        }
    }

    /// Write to integer register
    ///
    /// # Arguments
    /// - `index`: Register number (0-31)
    /// - `value`: Value to write
    ///
    /// # Note
    /// Writes to x0 are ignored (x0 is always 0).
    ///
    /// # Example
    /// ```
    /// use rv32_eval::core::hart::Hart;
    ///
    /// let mut hart = Hart::new();
    /// hart.set_reg(0, 0xDEADBEEF);
    /// assert_eq!(hart.reg(0), 0);
    /// ```
    #[inline(always)]
    pub fn set_reg(&mut self, index: u8, value: u32) {
        if index != 0 {
            self.regs[index as usize] = value;
        }
    }

    /// Checked register read
    pub fn try_reg(&self, index: u8) -> Result<u32> {
        if (index as usize) < REGISTER_COUNT {
            Ok(self.reg(index))
        } else {
            Err(EvalError::InvalidRegister { index })
        }
    }

    /// Read a register by ABI or raw name
    ///
    /// # Example
    /// ```
    /// use rv32_eval::core::hart::Hart;
    ///
    /// let mut hart = Hart::new();
    /// hart.set_reg_by_name("a7", 93).unwrap();
    /// assert_eq!(hart.reg_by_name("x17").unwrap(), 93);
    /// ```
    pub fn reg_by_name(&self, name: &str) -> Result<u32> {
        let index = registers::register_index(name)?;
        Ok(self.reg(index))
    }

    /// Write a register by ABI or raw name
    pub fn set_reg_by_name(&mut self, name: &str, value: u32) -> Result<()> {
        let index = registers::register_index(name)?;
        self.set_reg(index, value);
        Ok(())
    }

    /// Read the `n`-th integer argument under `cc`
    ///
    /// # Returns
    /// - `Ok(value)` for `n < cc.max_int_args()`
    /// - `Err(EvalError::TooManyArguments)` otherwise
    pub fn arg(&self, cc: &CallingConvention, n: usize) -> Result<u32> {
        cc.int_arg_regs
            .get(n)
            .map(|&index| self.reg(index))
            .ok_or(EvalError::TooManyArguments {
                count: n + 1,
                max: cc.max_int_args(),
            })
    }

    /// Write the return value under `cc`
    pub fn set_return(&mut self, cc: &CallingConvention, value: u32) {
        self.set_reg(cc.int_return_reg, value);
    }

    /// Perform a call through the calling convention
    ///
    /// Places `args` in the argument registers, runs `callee`, and reads the
    /// result back from the return register.
    ///
    /// # Arguments
    ///
    /// * `cc` - Calling convention to follow
    /// * `args` - Integer arguments (at most `cc.max_int_args()`)
    /// * `callee` - Body of the called function
    ///
    /// # Returns
    ///
    /// - `Ok(value)` read from the return register after the call
    /// - `Err(EvalError::TooManyArguments)` if `args` does not fit
    /// - Any error returned by `callee`
    ///
    /// # Example
    /// ```
    /// use rv32_eval::core::hart::{CallingConvention, Hart};
    ///
    /// let cc = CallingConvention::default();
    /// let mut hart = Hart::new();
    /// let sum = hart
    ///     .call(&cc, &[2, 3], |h| {
    ///         let a = h.arg(&cc, 0)?;
    ///         let b = h.arg(&cc, 1)?;
    ///         h.set_return(&cc, a + b);
    ///         Ok(())
    ///     })
    ///     .unwrap();
    /// assert_eq!(sum, 5);
    /// ```
    pub fn call<F>(&mut self, cc: &CallingConvention, args: &[u32], callee: F) -> Result<u32>
    where
        F: FnOnce(&mut Hart) -> Result<()>,
    {
        if args.len() > cc.max_int_args() {
            return Err(EvalError::TooManyArguments {
                count: args.len(),
                max: cc.max_int_args(),
            });
        }

        for (&index, &value) in cc.int_arg_regs.iter().zip(args) {
            self.set_reg(index, value);
        }

        callee(self)?;

        Ok(self.reg(cc.int_return_reg))
    }

    /// Log all registers at debug level, in rows of 4
    pub fn dump_registers(&self) {
        log::debug!("Hart registers:");
        for row in (0..REGISTER_COUNT as u8).step_by(4) {
            let line = (row..row + 4)
                .map(|i| {
                    format!(
                        "{:>4}: 0x{:08X}",
                        registers::ABI_NAMES[i as usize],
                        self.reg(i)
                    )
                })
                .collect::<Vec<_>>()
                .join("  ");
            log::debug!("{}", line);
        }
    }
}

impl Default for Hart {
    fn default() -> Self {
        Self::new()
    }
}
