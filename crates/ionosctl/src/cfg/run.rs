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

use ionoscloud::cli::IonosCliResult;

use crate::cfg::runtime::RuntimeContext;

// Run is implemented by every leaf command's argument struct: read the
// parsed flags, call the API, print the result.
pub(crate) trait Run {
    fn run(
        self,
        ctx: &mut RuntimeContext,
    ) -> impl std::future::Future<Output = IonosCliResult<()>>;
}
