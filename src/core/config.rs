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

//! TOML configuration
//!
//! ```toml
//! log_level = "debug"
//!
//! [first]
//! a = 20
//! b = 10
//! selector = "+"
//!
//! [second]
//! a = 10
//! b = 20
//! selector = "-"
//! ```
//!
//! Every key is optional. Missing keys fall back to the fixture constants.

use std::fs;
use std::path::Path;
use std::str::FromStr;

use log::LevelFilter;
use serde::Deserialize;

use crate::core::driver::{Call, DriverConfig};
use crate::core::error::{EvalError, Result};
use crate::core::evaluator::Selector;

/// One `[first]` / `[second]` section
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CallSection {
    pub a: Option<i32>,
    pub b: Option<i32>,
    pub selector: Option<String>,
}

impl CallSection {
    /// Fill missing keys from `fallback`
    fn resolve(&self, fallback: Call) -> Result<Call> {
        let selector = match &self.selector {
            Some(text) => text.parse::<Selector>()?,
            None => fallback.selector,
        };
        Ok(Call {
            a: self.a.unwrap_or(fallback.a),
            b: self.b.unwrap_or(fallback.b),
            selector,
        })
    }
}

/// Parsed configuration file
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Log filter (`off`, `error`, `warn`, `info`, `debug`, `trace`)
    pub log_level: Option<String>,
    #[serde(default)]
    pub first: CallSection,
    #[serde(default)]
    pub second: CallSection,
}

impl Config {
    /// Load configuration from a TOML file
    ///
    /// # Returns
    ///
    /// - `Ok(Config)` if the file was read and parsed
    /// - `Err(EvalError::Io)` if the file cannot be read
    /// - `Err(EvalError::Config)` if the contents are not valid
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        log::debug!("Loading config from {}", path.display());
        let text = fs::read_to_string(path)?;
        text.parse()
    }

    /// Driver call constants described by this configuration
    ///
    /// # Example
    /// ```
    /// use rv32_eval::core::config::Config;
    /// use rv32_eval::core::driver::DriverConfig;
    ///
    /// let config: Config = "[second]\nselector = \"+\"".parse().unwrap();
    /// let driver = config.driver_config().unwrap();
    /// assert_eq!(driver.first, DriverConfig::FIRST);
    /// assert_eq!(driver.second.a, 10);
    /// ```
    pub fn driver_config(&self) -> Result<DriverConfig> {
        Ok(DriverConfig {
            first: self.first.resolve(DriverConfig::FIRST)?,
            second: self.second.resolve(DriverConfig::SECOND)?,
        })
    }

    /// Parsed log filter, if one was given
    pub fn log_level(&self) -> Result<Option<LevelFilter>> {
        self.log_level
            .as_deref()
            .map(|level| {
                LevelFilter::from_str(level)
                    .map_err(|_| EvalError::InvalidLogLevel(level.to_string()))
            })
            .transpose()
    }
}

impl FromStr for Config {
    type Err = EvalError;

    fn from_str(s: &str) -> Result<Self> {
        Ok(toml::from_str(s)?)
    }
}
