// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Catalogue record types
//!
//! Wire types for the synthetic game and developer records, together with
//! the per-endpoint constants and the deterministic constructors that derive
//! every field from a record's id.

use serde::Serialize;
use utoipa::ToSchema;

/// Number of developer records returned with every hot catalogue page.
pub const DEVELOPER_COUNT: u64 = 5;

/// Number of records in the featured games list.
pub const FEATURED_COUNT: u64 = 4;

// Endpoint constants
const CATALOGUE_RATING: f64 = 4.5;
const CATALOGUE_PRICE: f64 = 29.99;
const FEATURED_RATING: f64 = 4.8;
const FEATURED_PRICE: f64 = 39.99;
const RELEASE_DATE: &str = "2024-01-01";
const PLATFORMS: [&str; 2] = ["PC", "Steam"];
const CATALOGUE_GENRES: [&str; 2] = ["Action", "Adventure"];
const FEATURED_GENRES: [&str; 2] = ["RPG", "Strategy"];
const DEVELOPER_GAME_COUNT: u64 = 3;

/// Synthetic placeholder representation of a game listing
///
/// Every field is a pure function of `id` and the endpoint constants, so
/// repeated generation with the same parameters is byte-identical.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GameRecord {
    /// Position in the synthetic id space (1-based)
    #[schema(example = 1)]
    pub id: u64,
    /// Display title, templated from the id
    #[schema(example = "Game 1")]
    pub title: String,
    /// Short description, templated from the id
    pub description: String,
    /// Placeholder artwork URL, templated with the id
    pub image: String,
    /// Review rating, constant per endpoint
    #[schema(example = 4.5)]
    pub rating: f64,
    /// Listing price, constant per endpoint
    #[schema(example = 29.99)]
    pub price: f64,
    /// Developer name, templated from the id
    pub developer: String,
    /// Publisher name, templated from the id
    pub publisher: String,
    /// Release date, constant across all records
    #[schema(example = "2024-01-01")]
    pub release_date: String,
    /// Supported platforms, constant across all records
    pub platforms: Vec<String>,
    /// Genre tags, constant per endpoint
    pub genres: Vec<String>,
}

impl GameRecord {
    /// Build the hot catalogue record for the given id
    pub fn catalogue(id: u64) -> Self {
        Self {
            id,
            title: format!("Game {id}"),
            description: format!("Description for Game {id}"),
            image: format!("https://via.placeholder.com/300x200?text=Game+{id}"),
            rating: CATALOGUE_RATING,
            price: CATALOGUE_PRICE,
            developer: format!("Developer {id}"),
            publisher: format!("Publisher {id}"),
            release_date: RELEASE_DATE.to_string(),
            platforms: owned(&PLATFORMS),
            genres: owned(&CATALOGUE_GENRES),
        }
    }

    /// Build the featured games record for the given id
    pub fn featured(id: u64) -> Self {
        Self {
            id,
            title: format!("Featured Game {id}"),
            description: format!("Featured description {id}"),
            image: format!("https://via.placeholder.com/400x300?text=Featured+{id}"),
            rating: FEATURED_RATING,
            price: FEATURED_PRICE,
            developer: format!("Featured Developer {id}"),
            publisher: format!("Featured Publisher {id}"),
            release_date: RELEASE_DATE.to_string(),
            platforms: owned(&PLATFORMS),
            genres: owned(&FEATURED_GENRES),
        }
    }
}

/// Synthetic placeholder representation of a game developer/studio
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct DeveloperRecord {
    /// Developer id, always in `1..=DEVELOPER_COUNT`
    #[schema(example = 1)]
    pub id: u64,
    /// Display name, templated from the id
    #[schema(example = "Steam Developer 1")]
    pub name: String,
    /// Fixed game list, identical across all developer records
    pub games: Vec<String>,
}

impl DeveloperRecord {
    /// Build the steam developer record for the given id
    pub fn steam(id: u64) -> Self {
        Self {
            id,
            name: format!("Steam Developer {id}"),
            games: (1..=DEVELOPER_GAME_COUNT)
                .map(|j| format!("Game {j}"))
                .collect(),
        }
    }
}

fn owned(values: &[&str]) -> Vec<String> {
    values.iter().map(ToString::to_string).collect()
}
