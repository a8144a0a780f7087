//! Sample data for tests.
//!
//! Ids are deterministic (`Uuid::from_u128`) so snapshots stay stable.

use chrono::{DateTime, TimeZone, Utc};
use roamlog_types::{
    BlockType, EditorBlock, EditorBlockData, EditorContent, EditorLocation, Journal, JournalEntry,
    JournalMoment, JournalPhoto, JournalRecommendation, JournalTip, PlaceSummary, Rating,
    RecommendationCategory,
};
use uuid::Uuid;

pub fn fixed_id(n: u128) -> Uuid {
    Uuid::from_u128(n)
}

pub fn sample_date() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 4, 18, 9, 30, 0)
        .single()
        .unwrap_or_default()
}

pub fn sample_location() -> EditorLocation {
    EditorLocation::new(
        "W",
        23_456_789,
        "Time Out Market",
        "Time Out Market, Avenida 24 de Julho, Lisbon",
        38.7069,
        -9.1459,
    )
}

pub fn sample_place() -> PlaceSummary {
    PlaceSummary {
        id: fixed_id(0xAA),
        name: "Time Out Market".to_string(),
        display_name: Some("Time Out Market, Avenida 24 de Julho, Lisbon".to_string()),
        latitude: 38.7069,
        longitude: -9.1459,
        category: Some("food_court".to_string()),
    }
}

/// Draft with one block of every type, ids 1..=5, orders 0..=4
pub fn sample_content() -> EditorContent {
    let blocks = vec![
        EditorBlock::with_id(
            fixed_id(1),
            0,
            BlockType::Moment,
            Some(sample_location()),
            EditorBlockData::moment(
                Some(sample_date()),
                Some("Arrival".to_string()),
                Some("Landed at dawn and walked down to the river.".to_string()),
                Some("LIS".to_string()),
                None,
            ),
        ),
        EditorBlock::with_id(
            fixed_id(2),
            1,
            BlockType::Recommendation,
            Some(sample_location()),
            EditorBlockData::recommendation(
                "Time Out Market",
                RecommendationCategory::Eat,
                Some(Rating::A),
                Some(2),
                Some("Go before noon".to_string()),
                Some("https://images.example/market.jpg".to_string()),
            ),
        ),
        EditorBlock::with_id(
            fixed_id(3),
            2,
            BlockType::Photo,
            None,
            EditorBlockData::photo(
                Some("https://images.example/tram.jpg".to_string()),
                Some("Tram 28".to_string()),
                Some(-3.5),
            ),
        ),
        EditorBlock::with_id(
            fixed_id(4),
            3,
            BlockType::Tip,
            None,
            EditorBlockData::tip(
                Some("Transit".to_string()),
                Some("Load a Viva Viagem card".to_string()),
            ),
        ),
        EditorBlock::with_id(
            fixed_id(5),
            4,
            BlockType::Divider,
            None,
            EditorBlockData::divider(),
        ),
    ];

    EditorContent::from_blocks(blocks)
}

/// Draft of `n` untitled tips with fresh ids
pub fn tips(n: usize) -> EditorContent {
    let mut content = EditorContent::new();
    for i in 0..n {
        content.append(EditorBlock::new_tip(0, Some(format!("tip {}", i)), None));
    }
    content
}

pub fn sample_recommendation_entry() -> JournalEntry {
    let mut entry = JournalEntry::recommendation(
        fixed_id(20),
        1,
        JournalRecommendation {
            name: "Time Out Market".to_string(),
            category: RecommendationCategory::Eat,
            rating: Some(Rating::A),
            price_level: Some(2),
            note: Some("Go before noon".to_string()),
            image_url: Some("https://images.example/market.jpg".to_string()),
            place: Some(sample_place()),
        },
    );
    entry.save_count = 14;
    entry.is_saved = true;
    entry
}

/// Published journal with one entry of every type, deliberately out of order
pub fn sample_journal() -> Journal {
    let entries = vec![
        JournalEntry::divider(fixed_id(24), 4),
        sample_recommendation_entry(),
        JournalEntry::moment(
            fixed_id(21),
            0,
            JournalMoment {
                date: Some(sample_date()),
                title: Some("Arrival".to_string()),
                content: Some("Landed at dawn and walked down to the river.".to_string()),
                stamp_text: Some("LIS".to_string()),
                stamp_color: None,
                place: Some(sample_place()),
            },
        ),
        JournalEntry::photo(
            fixed_id(22),
            2,
            JournalPhoto {
                image_url: Some("https://images.example/tram.jpg".to_string()),
                caption: Some("Tram 28".to_string()),
                rotation: Some(-3.5),
            },
        ),
        JournalEntry::tip(
            fixed_id(23),
            3,
            JournalTip {
                title: Some("Transit".to_string()),
                content: "Load a Viva Viagem card".to_string(),
            },
        ),
    ];

    Journal {
        trip_id: fixed_id(100),
        title: Some("Lisbon in April".to_string()),
        theme_slug: Some("passport".to_string()),
        entries,
    }
}
