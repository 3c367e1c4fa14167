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

use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("invalid api url: {0}")]
    Url(#[from] url::ParseError),

    #[error("api responded {status}: {message}")]
    Api { status: u16, message: String },
}

impl ApiError {
    /// Build an [`ApiError::Api`] from a non-2xx response body. The API
    /// reports errors as `{"httpStatus": ..., "messages": [{"errorCode",
    /// "message"}]}`; anything that does not decode as that shape is kept
    /// verbatim.
    pub fn from_response(status: u16, body: &str) -> Self {
        let message = match serde_json::from_str::<ErrorBody>(body) {
            Ok(decoded) => {
                let messages: Vec<String> = decoded
                    .messages
                    .unwrap_or_default()
                    .into_iter()
                    .map(|m| match m.error_code {
                        Some(code) => format!("({code}) {}", m.message.unwrap_or_default()),
                        None => m.message.unwrap_or_default(),
                    })
                    .collect();
                messages.join("; ")
            }
            Err(_) => String::new(),
        };

        let message = if message.is_empty() {
            let trimmed = body.trim();
            if trimmed.is_empty() {
                "no error details provided".to_string()
            } else {
                trimmed.to_string()
            }
        } else {
            message
        };

        ApiError::Api { status, message }
    }

    /// HTTP status code of an API-level error, if this is one.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    messages: Option<Vec<ErrorMessage>>,
}

#[derive(Debug, Deserialize)]
struct ErrorMessage {
    #[serde(rename = "errorCode")]
    error_code: Option<String>,
    message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_structured_error_body() {
        let body = r#"{"httpStatus": 404, "messages": [{"errorCode": "309", "message": "Resource does not exist"}]}"#;
        let err = ApiError::from_response(404, body);
        match err {
            ApiError::Api { status, message } => {
                assert_eq!(status, 404);
                assert_eq!(message, "(309) Resource does not exist");
            }
            other => panic!("expected Api variant, got {other:?}"),
        }
    }

    #[test]
    fn joins_multiple_messages() {
        let body = r#"{"messages": [{"message": "first"}, {"message": "second"}]}"#;
        let err = ApiError::from_response(422, body);
        assert_eq!(
            err.to_string(),
            "api responded 422: first; second"
        );
    }

    #[test]
    fn falls_back_to_raw_body() {
        let err = ApiError::from_response(502, "Bad Gateway");
        assert_eq!(err.to_string(), "api responded 502: Bad Gateway");
    }

    #[test]
    fn empty_body_reports_placeholder() {
        let err = ApiError::from_response(500, "");
        assert_eq!(
            err.to_string(),
            "api responded 500: no error details provided"
        );
        assert!(!err.is_not_found());
        assert_eq!(err.status(), Some(500));
    }
}
