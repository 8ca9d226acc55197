// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Catalogue operations
//!
//! The two generation operations and their response objects. Both are total
//! functions: a normalized [`PageRequest`] always yields a well-formed page
//! and the featured list is constant.

use serde::Serialize;
use utoipa::ToSchema;

use crate::{
    page::PageRequest,
    records::{DEVELOPER_COUNT, DeveloperRecord, FEATURED_COUNT, GameRecord},
};

/// Response object for the hot catalogue operation
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct HotCatalogue {
    /// Requested catalogue page, ids ascending and contiguous
    pub games: Vec<GameRecord>,
    /// Fixed developer list, independent of pagination
    #[serde(rename = "steamDevelopers")]
    pub steam_developers: Vec<DeveloperRecord>,
}

/// Response object for the featured games operation
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct FeaturedGames {
    /// Fixed featured list, ids `1..=4`
    pub featured: Vec<GameRecord>,
}

/// Produce the hot catalogue page for the given pagination parameters
///
/// Generates `take` records with ids `skip+1..=skip+take` using the catalogue
/// constants, plus the fixed five developer records. `PageRequest`
/// normalization guarantees the id range cannot overflow.
pub fn hot_catalogue(page: PageRequest) -> HotCatalogue {
    let games = (1..=page.take())
        .map(|offset| GameRecord::catalogue(page.skip() + offset))
        .collect();
    let steam_developers = (1..=DEVELOPER_COUNT).map(DeveloperRecord::steam).collect();

    HotCatalogue {
        games,
        steam_developers,
    }
}

/// Produce the fixed featured games list
pub fn featured_games() -> FeaturedGames {
    FeaturedGames {
        featured: (1..=FEATURED_COUNT).map(GameRecord::featured).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::MAX_PAGE_SIZE;

    #[test]
    fn page_has_contiguous_ascending_ids() {
        let page = hot_catalogue(PageRequest::new(10, 25));
        assert_eq!(page.games.len(), 10);
        let ids: Vec<u64> = page.games.iter().map(|game| game.id).collect();
        assert_eq!(ids, (26..=35).collect::<Vec<u64>>());
    }

    #[test]
    fn default_page_is_twelve_from_one() {
        let page = hot_catalogue(PageRequest::default());
        assert_eq!(page.games.len(), 12);
        assert_eq!(page.games[0].id, 1);
        assert_eq!(page.games[11].id, 12);
    }

    #[test]
    fn developers_are_independent_of_pagination() {
        for request in [
            PageRequest::default(),
            PageRequest::new(0, 0),
            PageRequest::new(2, 1000),
        ] {
            let page = hot_catalogue(request);
            assert_eq!(page.steam_developers.len(), 5);
            let ids: Vec<u64> = page.steam_developers.iter().map(|dev| dev.id).collect();
            assert_eq!(ids, [1, 2, 3, 4, 5]);
        }
    }

    #[test]
    fn zero_take_yields_empty_games() {
        let page = hot_catalogue(PageRequest::new(0, 3));
        assert!(page.games.is_empty());
        assert_eq!(page.steam_developers.len(), 5);
    }

    #[test]
    fn skip_two_take_three_scenario() {
        let page = hot_catalogue(PageRequest::new(2, 3));
        let titles: Vec<&str> = page.games.iter().map(|game| game.title.as_str()).collect();
        assert_eq!(titles, ["Game 4", "Game 5"]);
    }

    #[test]
    fn maximum_page_at_maximum_offset_does_not_overflow() {
        let page = hot_catalogue(PageRequest::new(i64::MAX, i64::MAX));
        assert_eq!(
            page.games.len(),
            usize::try_from(MAX_PAGE_SIZE).expect("small constant")
        );
        let first = page.games.first().expect("non-empty page").id;
        let last = page.games.last().expect("non-empty page").id;
        assert_eq!(last - first + 1, MAX_PAGE_SIZE);
        // Signed input clamps the offset to i64::MAX, so the highest
        // reachable id is i64::MAX + MAX_PAGE_SIZE.
        let max_offset = u64::try_from(i64::MAX).expect("fits");
        assert_eq!(first, max_offset + 1);
        assert_eq!(last, max_offset + MAX_PAGE_SIZE);
    }

    #[test]
    fn featured_list_is_fixed() {
        let featured = featured_games();
        assert_eq!(featured.featured.len(), 4);
        for (index, game) in featured.featured.iter().enumerate() {
            assert_eq!(game.id, index as u64 + 1);
            assert_eq!(game.rating, 4.8);
            assert_eq!(game.price, 39.99);
        }
        assert_eq!(featured.featured[0].title, "Featured Game 1");
    }

    #[test]
    fn generation_is_deterministic() {
        let request = PageRequest::new(7, 42);
        let first = serde_json::to_string(&hot_catalogue(request)).expect("serializable page");
        let second = serde_json::to_string(&hot_catalogue(request)).expect("serializable page");
        assert_eq!(first, second);

        let first = serde_json::to_string(&featured_games()).expect("serializable list");
        let second = serde_json::to_string(&featured_games()).expect("serializable list");
        assert_eq!(first, second);
    }

    #[test]
    fn hot_catalogue_field_names_on_the_wire() {
        let json = serde_json::to_value(hot_catalogue(PageRequest::new(1, 0)))
            .expect("serializable page");
        assert!(json.get("games").is_some());
        assert!(json.get("steamDevelopers").is_some());
    }
}
