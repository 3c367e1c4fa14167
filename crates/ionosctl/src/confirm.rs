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

use std::io::Write as _;

use ionoscloud::cli::{IonosCliError, IonosCliResult};

/// Ask before a destructive operation. `--force` skips the prompt; the
/// prompt goes to stderr so redirected output stays clean.
pub fn confirm(action: &str, force: bool) -> IonosCliResult<()> {
    if force {
        return Ok(());
    }

    eprint!("Warning: are you sure you want to {action} (y/N): ");
    std::io::stderr().flush()?;

    let mut answer = String::new();
    std::io::stdin().read_line(&mut answer)?;
    if accepted(&answer) {
        Ok(())
    } else {
        Err(IonosCliError::Aborted)
    }
}

fn accepted(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn yes_variants_are_accepted() {
        assert!(accepted("y\n"));
        assert!(accepted("Y\n"));
        assert!(accepted("yes\n"));
        assert!(accepted("  YES  \n"));
    }

    #[test]
    fn anything_else_is_rejected() {
        assert!(!accepted("\n"));
        assert!(!accepted("n\n"));
        assert!(!accepted("no\n"));
        assert!(!accepted("yep\n"));
    }
}
