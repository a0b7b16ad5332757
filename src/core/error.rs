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

/// Error types
use thiserror::Error;

/// Result type for fallible operations
pub type Result<T> = std::result::Result<T, EvalError>;

/// Main error type
///
/// The evaluator and driver themselves are total; these errors only come
/// from the edges (parsing user input, register lookups, configuration).
#[derive(Error, Debug)]
pub enum EvalError {
    #[error("Invalid selector {0:?}: expected exactly one character")]
    InvalidSelector(String),

    #[error("Invalid register index: {index} (valid range: 0-31)")]
    InvalidRegister { index: u8 },

    #[error("Unknown register name: {0}")]
    UnknownRegister(String),

    #[error("Too many call arguments: {count} (at most {max} argument registers)")]
    TooManyArguments { count: usize, max: usize },

    #[error("Invalid log level {0:?}: expected off, error, warn, info, debug or trace")]
    InvalidLogLevel(String),

    #[error("Config error: {0}")]
    Config(#[from] toml::de::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
