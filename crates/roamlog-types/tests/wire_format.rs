use roamlog_types::*;
use uuid::Uuid;

fn ramiro() -> EditorBlock {
    EditorBlock::with_id(
        Uuid::from_u128(2),
        0,
        BlockType::Recommendation,
        Some(EditorLocation::new(
            "W",
            123,
            "Cervejaria Ramiro",
            "Cervejaria Ramiro, Lisbon",
            38.75,
            -9.125,
        )),
        EditorBlockData::recommendation(
            "Cervejaria Ramiro",
            RecommendationCategory::Eat,
            Some(Rating::S),
            Some(3),
            Some("Order the prawns".to_string()),
            None,
        ),
    )
}

#[test]
fn test_save_draft_wire_shape() {
    let mut content = EditorContent::new();
    content.append(ramiro());

    let request = SaveDraftRequest::from(&content);

    insta::assert_json_snapshot!(request, @r###"
    {
      "blocks": [
        {
          "id": "00000000-0000-0000-0000-000000000002",
          "order": 0,
          "type": "Recommendation",
          "location": {
            "osmType": "W",
            "osmId": 123,
            "name": "Cervejaria Ramiro",
            "displayName": "Cervejaria Ramiro, Lisbon",
            "latitude": 38.75,
            "longitude": -9.125
          },
          "data": {
            "name": "Cervejaria Ramiro",
            "category": "eat",
            "rating": 0,
            "priceLevel": 3,
            "note": "Order the prawns"
          }
        }
      ]
    }
    "###);
}

#[test]
fn test_outgoing_blocks_carry_only_relevant_fields() {
    let mut tip = EditorBlock::new_tip(0, Some("Cash".to_string()), Some("Bring coins".to_string()));
    tip.data.name = Some("stray".to_string());
    tip.data.rotation = Some(12.0);
    tip.location = ramiro().location;

    let mut content = EditorContent::new();
    content.append(tip);
    let request = SaveDraftRequest::from(&content);
    let sent = &request.blocks[0];

    assert!(sent.location.is_none());
    assert_eq!(sent.data.title.as_deref(), Some("Cash"));
    assert_eq!(sent.data.content.as_deref(), Some("Bring coins"));
    assert!(sent.data.name.is_none());
    assert!(sent.data.rotation.is_none());

    // local draft keeps what the user typed
    assert_eq!(content.blocks()[0].data.name.as_deref(), Some("stray"));
}

#[test]
fn test_editor_response_is_normalized_on_load() {
    let json = r#"{
        "tripId": "00000000-0000-0000-0000-000000000064",
        "lastUpdatedAt": "2026-04-20T18:00:00Z",
        "blocks": [
            {"id": "00000000-0000-0000-0000-000000000003", "order": 7, "type": "Divider", "data": {}},
            {"id": "00000000-0000-0000-0000-000000000001", "order": 2, "type": "Tip", "data": {"title": "Go early"}}
        ]
    }"#;

    let response: EditorResponse = serde_json::from_str(json).unwrap();
    assert_eq!(response.trip_id, Uuid::from_u128(100));

    let content = response.into_content();
    assert!(content.is_contiguous());
    assert_eq!(
        content.block_ids(),
        vec![Uuid::from_u128(1), Uuid::from_u128(3)]
    );
    assert_eq!(content.blocks()[0].block_type, BlockType::Tip);
}

#[test]
fn test_unknown_rating_is_rejected() {
    let json = r#"{"name": "x", "category": "shop", "rating": 9}"#;
    assert!(serde_json::from_str::<EditorBlockData>(json).is_err());
}
