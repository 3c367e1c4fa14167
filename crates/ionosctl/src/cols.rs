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

//! `--cols` handling. Every resource declares the full set of table
//! columns it knows plus a default subset; a request for anything else
//! is an error naming the allowed set.

use ionoscloud::cli::{IonosCliError, IonosCliResult};

pub fn resolve_cols(
    requested: Option<&[String]>,
    allowed: &[&str],
    default_cols: &[&str],
) -> IonosCliResult<Vec<String>> {
    let Some(requested) = requested else {
        return Ok(default_cols.iter().map(|col| col.to_string()).collect());
    };

    let mut cols = Vec::with_capacity(requested.len());
    for col in requested {
        match allowed.iter().find(|known| known.eq_ignore_ascii_case(col)) {
            Some(known) => cols.push(known.to_string()),
            None => {
                return Err(IonosCliError::InvalidInput(format!(
                    "unknown column '{col}', expected one of: {}",
                    allowed.join(", ")
                )));
            }
        }
    }
    Ok(cols)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALLOWED: &[&str] = &["DatacenterId", "Name", "Location"];
    const DEFAULT: &[&str] = &["DatacenterId", "Name"];

    #[test]
    fn defaults_apply_when_nothing_requested() {
        let cols = resolve_cols(None, ALLOWED, DEFAULT).expect("defaults");
        assert_eq!(cols, vec!["DatacenterId", "Name"]);
    }

    #[test]
    fn requested_cols_are_matched_case_insensitively() {
        let requested = vec!["name".to_string(), "LOCATION".to_string()];
        let cols = resolve_cols(Some(&requested), ALLOWED, DEFAULT).expect("known cols");
        assert_eq!(cols, vec!["Name", "Location"]);
    }

    #[test]
    fn unknown_col_is_rejected_with_allowed_set() {
        let requested = vec!["Size".to_string()];
        let err = resolve_cols(Some(&requested), ALLOWED, DEFAULT).expect_err("unknown col");
        let text = err.to_string();
        assert!(text.contains("unknown column 'Size'"));
        assert!(text.contains("DatacenterId, Name, Location"));
    }
}
