// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Pagination parameters module
//!
//! This module provides [`PageRequest`], a validated pagination parameter pair.
//! Construction normalizes raw client input so that catalogue generation is
//! total: negative values clamp to zero, the page size is capped, and the
//! offset is capped so that `skip + take` can never overflow.

use serde::{Deserialize, Deserializer};

/// Page size used when the client does not supply `take`.
pub const DEFAULT_PAGE_SIZE: u64 = 12;

/// Maximum number of records honored per request.
pub const MAX_PAGE_SIZE: u64 = 500;

/// Maximum offset into the synthetic id space.
///
/// Upper bound on the normalized offset: any `skip` at or below it keeps
/// `skip + take` representable in a `u64`, so generated id ranges are always
/// contiguous and ascending. Signed query input already tops out at
/// `i64::MAX`, below this bound, so `clamp_skip` only enforces the cap if
/// the raw input type ever widens.
pub const MAX_OFFSET: u64 = u64::MAX - MAX_PAGE_SIZE;

/// Validated pagination parameters for the hot catalogue
///
/// Raw `take`/`skip` query values are accepted as signed integers and
/// normalized at construction; a `PageRequest` always describes a
/// generatable page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    take: u64,
    skip: u64,
}

impl PageRequest {
    /// Create a new `PageRequest` from raw client values
    ///
    /// Negative values clamp to 0, `take` is capped at [`MAX_PAGE_SIZE`] and
    /// `skip` at [`MAX_OFFSET`]. Never fails: the permissive contract serves
    /// a nonsensical page as an empty or truncated one instead of rejecting.
    pub fn new(take: i64, skip: i64) -> Self {
        Self {
            take: clamp_take(take),
            skip: clamp_skip(skip),
        }
    }

    /// Number of records requested
    pub fn take(&self) -> u64 {
        self.take
    }

    /// Offset into the synthetic id space
    pub fn skip(&self) -> u64 {
        self.skip
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            take: DEFAULT_PAGE_SIZE,
            skip: 0,
        }
    }
}

fn clamp_take(take: i64) -> u64 {
    u64::try_from(take).unwrap_or(0).min(MAX_PAGE_SIZE)
}

fn clamp_skip(skip: i64) -> u64 {
    u64::try_from(skip).unwrap_or(0).min(MAX_OFFSET)
}

/// Raw query-string shape; normalization happens during construction
#[derive(Debug, Deserialize)]
struct RawPageRequest {
    take: Option<i64>,
    skip: Option<i64>,
}

impl<'de> Deserialize<'de> for PageRequest {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = RawPageRequest::deserialize(deserializer)?;
        Ok(Self {
            take: raw.take.map_or(DEFAULT_PAGE_SIZE, clamp_take),
            skip: raw.skip.map_or(0, clamp_skip),
        })
    }
}
