/*
 * SPDX-FileCopyrightText: Copyright (c) 2026 IONOS Cloud SE. All rights reserved.
 * SPDX-License-Identifier: Apache-2.0
 *
 * Licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License.
 * You may obtain a copy of the License at
 *
 * http://www.apache.org/licenses/LICENSE-2.0
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under the License is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 * See the License for the specific language governing permissions and
 * limitations under the License.
 */

//! Shared types for the `ionosctl` binary: the CLI error/result pair and
//! the output format flag. They live here so both the command modules and
//! the `Dispatch` derive can name them by one path.

use std::fmt;

use clap::ValueEnum;
use thiserror::Error;

use crate::error::ApiError;

pub type IonosCliResult<T> = Result<T, IonosCliError>;

#[derive(Debug, Error)]
pub enum IonosCliError {
    #[error("{0}")]
    GenericError(String),

    #[error("{kind} {id} not found")]
    NotFound { kind: &'static str, id: String },

    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("{0} is not implemented")]
    NotImplemented(String),

    #[error("request {id} failed: {message}")]
    RequestFailed { id: String, message: String },

    #[error("timed out after {0}s waiting on request completion")]
    WaitTimeout(u64),

    #[error("aborted")]
    Aborted,

    #[error("{0}")]
    Bulk(BulkError),

    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    JsonError(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Fmt(#[from] std::fmt::Error),
}

/// Per-item failures collected by bulk operations. Bulk commands keep
/// going after an item fails and report every failure at the end.
#[derive(Debug, Default)]
pub struct BulkError {
    failures: Vec<(String, String)>,
}

impl BulkError {
    pub fn push(&mut self, id: impl Into<String>, error: impl fmt::Display) {
        self.failures.push((id.into(), error.to_string()));
    }

    pub fn is_empty(&self) -> bool {
        self.failures.is_empty()
    }

    pub fn len(&self) -> usize {
        self.failures.len()
    }

    pub fn failures(&self) -> &[(String, String)] {
        &self.failures
    }

    /// Ok when nothing failed, otherwise the aggregate error.
    pub fn into_result(self) -> IonosCliResult<()> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(IonosCliError::Bulk(self))
        }
    }
}

impl fmt::Display for BulkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} operation(s) failed:", self.failures.len())?;
        for (id, message) in &self.failures {
            writeln!(f, "  {id}: {message}")?;
        }
        Ok(())
    }
}

#[derive(PartialEq, Eq, ValueEnum, Clone, Copy, Debug)]
#[clap(rename_all = "kebab_case")]
pub enum OutputFormat {
    AsciiTable,
    Json,
    Csv,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bulk_error_empty_is_ok() {
        let bulk = BulkError::default();
        assert!(bulk.into_result().is_ok());
    }

    #[test]
    fn bulk_error_reports_every_failure() {
        let mut bulk = BulkError::default();
        bulk.push("aaa", "boom");
        bulk.push("bbb", "kaboom");
        let err = bulk.into_result().expect_err("two failures");
        let text = err.to_string();
        assert!(text.contains("2 operation(s) failed"));
        assert!(text.contains("aaa: boom"));
        assert!(text.contains("bbb: kaboom"));
    }
}
