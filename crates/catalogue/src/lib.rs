// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Catalogue generation for the Neo launcher backend
//!
//! This crate implements the catalogue generator: given pagination parameters
//! it deterministically synthesizes placeholder game and developer records.
//! Generation is a pure function of the request parameters and the endpoint
//! constants — no stored state, no I/O, no failure modes.
//!
//! # Module Structure
//!
//! - [`page`]: Validated pagination parameters with normalizing construction
//! - [`records`]: Wire types for game and developer records plus their
//!   deterministic constructors
//! - [`generator`]: The catalogue operations and their response objects

pub mod generator;
pub mod page;
pub mod records;

pub use generator::{FeaturedGames, HotCatalogue, featured_games, hot_catalogue};
pub use page::{DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE, PageRequest};
pub use records::{DEVELOPER_COUNT, DeveloperRecord, FEATURED_COUNT, GameRecord};
