//! Cross-component flows: lookup results landing in the shared cache and
//! mutations updating both namespace projections.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::{json, Map, Value};

use card_sync::{
    CardCacheStore, CardDataSource, CardEntity, CardImageSource, CardLookupOrchestrator,
    CardMetadata, ImageSearchResponse, Namespace, QueryKey, SyncResult,
};

fn obj(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        other => panic!("expected JSON object, got {other:?}"),
    }
}

struct StubDataSource;

#[async_trait]
impl CardDataSource for StubDataSource {
    async fn fetch_card_data(&self, term: &str) -> SyncResult<CardMetadata> {
        Ok(CardMetadata {
            name: term.to_string(),
            set_name: Some("Shrine Visions".to_string()),
            rarity: Some("rare".to_string()),
            type_line: None,
            oracle_text: None,
        })
    }
}

struct StubImageSource;

#[async_trait]
impl CardImageSource for StubImageSource {
    async fn fetch_card_image(&self, _term: &str) -> SyncResult<ImageSearchResponse> {
        Ok(ImageSearchResponse::default())
    }
}

#[tokio::test]
async fn lookup_result_lands_in_the_catalog_namespace() {
    let _ = env_logger::builder().is_test(true).try_init();

    let store = Arc::new(CardCacheStore::new());
    let orch = CardLookupOrchestrator::new(Arc::new(StubDataSource), Arc::new(StubImageSource));

    orch.lookup("Fox Spirit").await;
    let state = orch.state();
    assert!(state.error.is_none());

    // The screen that ran the lookup writes the result into the catalog
    // slice; owned-card projections are not touched by this
    let card = state.data.unwrap();
    let entity = CardEntity::new("card-1")
        .with_field("name", json!(card.name))
        .with_field("set_name", json!(card.set_name));
    store.insert(QueryKey::card("card-1"), entity);

    assert!(store.get_card(&QueryKey::card("card-1"), "card-1").is_some());
    assert!(store.get(&QueryKey::user_cards()).is_none());
}

#[tokio::test]
async fn favoriting_a_card_takes_one_patch_per_namespace() {
    let store = Arc::new(CardCacheStore::new());
    let fox = CardEntity::new("x").with_field("name", json!("Fox Spirit"));
    store.insert(QueryKey::card("x"), fox.clone());
    store.populate(QueryKey::user_cards(), vec![fox]);

    let owned_rx = store.subscribe(&QueryKey::user_cards());
    let catalog_rx = store.subscribe(&QueryKey::card("x"));

    // Ownership metadata lives in the user-cards projection only; a
    // caller that wants both views updated must patch each namespace
    store.patch(Namespace::UserCards, "x", &obj(json!({ "isFavorited": true })));

    let owned = store.get_card(&QueryKey::user_cards(), "x").unwrap();
    assert_eq!(owned.fields["isFavorited"], json!(true));

    let catalog = store.get_card(&QueryKey::card("x"), "x").unwrap();
    assert!(!catalog.fields.contains_key("isFavorited"));

    assert!(owned_rx.has_changed().unwrap());
    assert!(!catalog_rx.has_changed().unwrap());

    // Second patch brings the catalog view up to date as well
    store.patch(Namespace::Card, "x", &obj(json!({ "isFavorited": true })));
    assert!(catalog_rx.has_changed().unwrap());
}

#[tokio::test]
async fn two_stores_are_fully_isolated() {
    let first = CardCacheStore::new();
    let second = CardCacheStore::new();

    first.insert(
        QueryKey::card("x"),
        CardEntity::new("x").with_field("name", json!("Fox Spirit")),
    );

    assert!(first.get(&QueryKey::card("x")).is_some());
    assert!(second.get(&QueryKey::card("x")).is_none());
}
