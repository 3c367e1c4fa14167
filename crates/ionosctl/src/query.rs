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

//! Shared flags for collection endpoints. Filter and order-by keys are
//! checked against the per-resource allow-list before anything goes on
//! the wire, so typos fail fast with the allowed set in the message.

use clap::Args as ClapArgs;
use ionoscloud::cli::{IonosCliError, IonosCliResult};
use ionoscloud::ListParams;

#[derive(ClapArgs, Debug, Clone, Default)]
pub struct ListArgs {
    #[clap(long, value_delimiter = ',', value_name = "KEY=VALUE,...")]
    #[clap(help = "Filter results by property, e.g. --filters name=backend,location=us/las.")]
    pub filters: Option<Vec<String>>,

    #[clap(long, value_name = "KEY", help = "Order results by property.")]
    pub order_by: Option<String>,

    #[clap(long, value_name = "N", help = "Cap the number of returned results.")]
    pub max_results: Option<u32>,
}

impl ListArgs {
    /// Validate against the resource's allowed property keys and build
    /// the wire-level parameters.
    pub fn to_params(&self, allowed: &[&str], depth: u32) -> IonosCliResult<ListParams> {
        let mut params = ListParams::depth(depth);

        if let Some(filters) = &self.filters {
            for raw in filters {
                let Some((key, value)) = raw.split_once('=') else {
                    return Err(IonosCliError::InvalidInput(format!(
                        "filter '{raw}' must have the form KEY=VALUE"
                    )));
                };
                ensure_known_key("filter", key, allowed)?;
                params = params.with_filter(key, value);
            }
        }

        if let Some(order_by) = &self.order_by {
            ensure_known_key("order-by", order_by, allowed)?;
            params = params.with_order_by(order_by);
        }

        if let Some(max_results) = self.max_results {
            params = params.with_max_results(max_results);
        }

        Ok(params)
    }
}

fn ensure_known_key(what: &str, key: &str, allowed: &[&str]) -> IonosCliResult<()> {
    if allowed.contains(&key) {
        return Ok(());
    }
    Err(IonosCliError::InvalidInput(format!(
        "unknown {what} key '{key}', expected one of: {}",
        allowed.join(", ")
    )))
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALLOWED: &[&str] = &["name", "location"];

    fn args(filters: &[&str], order_by: Option<&str>) -> ListArgs {
        ListArgs {
            filters: if filters.is_empty() {
                None
            } else {
                Some(filters.iter().map(|f| f.to_string()).collect())
            },
            order_by: order_by.map(|o| o.to_string()),
            max_results: None,
        }
    }

    #[test]
    fn valid_filters_become_params() {
        let params = args(&["name=backend", "location=us/las"], None)
            .to_params(ALLOWED, 2)
            .expect("valid filters");
        let pairs = params.pairs();
        assert!(pairs.contains(&("filter.name".to_string(), "backend".to_string())));
        assert!(pairs.contains(&("filter.location".to_string(), "us/las".to_string())));
        assert!(pairs.contains(&("depth".to_string(), "2".to_string())));
    }

    #[test]
    fn unknown_filter_key_is_rejected() {
        let err = args(&["owner=me"], None)
            .to_params(ALLOWED, 1)
            .expect_err("unknown key");
        let text = err.to_string();
        assert!(text.contains("unknown filter key 'owner'"));
        assert!(text.contains("name, location"));
    }

    #[test]
    fn malformed_filter_is_rejected() {
        let err = args(&["justakey"], None)
            .to_params(ALLOWED, 1)
            .expect_err("missing =");
        assert!(err.to_string().contains("KEY=VALUE"));
    }

    #[test]
    fn unknown_order_by_key_is_rejected() {
        let err = args(&[], Some("size"))
            .to_params(ALLOWED, 1)
            .expect_err("unknown order-by");
        assert!(err.to_string().contains("unknown order-by key 'size'"));
    }

    #[test]
    fn value_may_contain_equals() {
        let params = args(&["name=a=b"], None)
            .to_params(ALLOWED, 1)
            .expect("split on first =");
        assert!(
            params
                .pairs()
                .contains(&("filter.name".to_string(), "a=b".to_string()))
        );
    }
}
