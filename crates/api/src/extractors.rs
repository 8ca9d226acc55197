// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Custom extractors for improved error handling
//!
//! This module provides custom extractors that offer better error messages
//! than the default Axum extractors, particularly for query string parsing
//! failures on the pagination parameters.

use axum::{
    extract::{FromRequestParts, Query, rejection::QueryRejection},
    http::request::Parts,
};
use serde::de::DeserializeOwned;

use crate::error::ServerError;

mod error_hints {
    pub const NON_NUMERIC: &str = "take and skip must be decimal integers";
    pub const OUT_OF_RANGE: &str = "take and skip must fit in a signed 64-bit integer";
    pub const MALFORMED_QUERY: &str = "query string is not valid percent-encoded form data";
}

/// Custom query extractor that provides detailed error messages for parsing failures
///
/// Wraps [`axum::extract::Query`] and converts its rejection into a
/// [`ServerError::Query`], so malformed pagination parameters surface as a
/// 400 JSON body instead of a bare plain-text response.
#[derive(Debug)]
pub struct QueryExtractor<T>(pub T);

impl<T, S> FromRequestParts<S> for QueryExtractor<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ServerError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Query::<T>::from_request_parts(parts, state).await {
            Ok(Query(value)) => Ok(Self(value)),
            Err(rejection) => {
                let query = parts.uri.query().unwrap_or_default();
                Err(ServerError::Query {
                    message: format!(
                        "failed to parse '{query}': {}",
                        query_error_hint(&rejection)
                    ),
                })
            }
        }
    }
}

/// Provides helpful hints for query string parsing errors
fn query_error_hint(rejection: &QueryRejection) -> String {
    let raw = rejection.to_string();

    if raw.contains("invalid digit") || raw.contains("invalid type") {
        error_hints::NON_NUMERIC.to_string()
    } else if raw.contains("out of range") || raw.contains("too large") {
        error_hints::OUT_OF_RANGE.to_string()
    } else if raw.contains("Failed to deserialize query string") {
        format!("{} ({raw})", error_hints::NON_NUMERIC)
    } else {
        format!("{} ({raw})", error_hints::MALFORMED_QUERY)
    }
}
