mod common;

use common::{doctor_strange, heat};
use moviefav::favorites::{
    FavoritesRepository, FavoritesStore, KeyValueFavoritesStore, StoredFavorites,
};
use moviefav::model::Movie;
use moviefav::storage::{FileKeyValueStore, KeyValueStore};
use std::sync::Arc;
use tempfile::TempDir;

fn file_kv(dir: &TempDir) -> Arc<dyn KeyValueStore> {
    Arc::new(FileKeyValueStore::new(dir.path()))
}

fn repository(kv: Arc<dyn KeyValueStore>) -> StoredFavorites {
    let store = KeyValueFavoritesStore::new(kv, KeyValueFavoritesStore::DEFAULT_KEY);
    StoredFavorites::new(Arc::new(store))
}

#[test]
fn test_toggle_is_idempotent_in_pairs() {
    let dir = TempDir::new().unwrap();
    let favorites = repository(file_kv(&dir));
    favorites.toggle_favorite(&heat());

    for movie in [heat(), doctor_strange(), Movie::new("Ronin", "1998")] {
        let before = favorites.is_favorite(&movie);
        favorites.toggle_favorite(&movie);
        assert_ne!(favorites.is_favorite(&movie), before);
        favorites.toggle_favorite(&movie);
        assert_eq!(favorites.is_favorite(&movie), before);
    }
}

#[test]
fn test_same_identity_never_duplicates() {
    let dir = TempDir::new().unwrap();
    let favorites = repository(file_kv(&dir));
    favorites.toggle_favorite(&doctor_strange());
    favorites.toggle_favorite(&heat());
    let count = favorites.favorites().len();

    // Same id, different title: already present, so this removes it.
    let renamed = Movie::new("Doctor Strange (2016)", "2016").with_id("tt1");
    assert!(favorites.is_favorite(&renamed));
    favorites.toggle_favorite(&renamed);
    favorites.toggle_favorite(&renamed);

    assert_eq!(favorites.favorites().len(), count);
}

#[test]
fn test_distinct_ids_sharing_title_are_distinct() {
    let dir = TempDir::new().unwrap();
    let favorites = repository(file_kv(&dir));
    let original = Movie::new("Heat", "1995").with_id("tt0113277");
    let remake = Movie::new("Heat", "1986").with_id("tt0091209");

    favorites.toggle_favorite(&original);

    assert!(favorites.is_favorite(&original));
    assert!(!favorites.is_favorite(&remake));
}

#[test]
fn test_favorites_survive_new_instance() {
    let dir = TempDir::new().unwrap();
    repository(file_kv(&dir)).toggle_favorite(&doctor_strange());

    let reopened = repository(file_kv(&dir));

    assert_eq!(reopened.favorites(), vec![doctor_strange()]);
}

#[test]
fn test_never_written_store_is_empty() {
    let dir = TempDir::new().unwrap();
    let store = KeyValueFavoritesStore::new(file_kv(&dir), "FAVORITE_MOVIES");

    assert!(store.load().is_empty());
}

#[test]
fn test_corrupt_blob_loads_empty() {
    let dir = TempDir::new().unwrap();
    let kv = file_kv(&dir);
    kv.set("FAVORITE_MOVIES", b"{not json").unwrap();

    let favorites = repository(kv);

    assert!(favorites.favorites().is_empty());
    assert!(!favorites.is_favorite(&heat()));
}

#[test]
fn test_corrupt_blob_is_replaced_on_toggle() {
    let dir = TempDir::new().unwrap();
    let kv = file_kv(&dir);
    kv.set("FAVORITE_MOVIES", b"[42]").unwrap();

    let favorites = repository(kv);
    favorites.toggle_favorite(&heat());

    assert_eq!(favorites.favorites(), vec![heat()]);
}

#[test]
fn test_legacy_title_payload_is_upgraded() {
    let dir = TempDir::new().unwrap();
    let kv = file_kv(&dir);
    kv.set("FAVORITE_MOVIES", br#"["Heat", "Ronin"]"#).unwrap();

    let favorites = repository(kv.clone());
    assert!(favorites.is_favorite(&Movie::new("Heat", "1995")));
    assert_eq!(favorites.favorites().len(), 2);

    favorites.toggle_favorite(&Movie::new("Ronin", "1998"));

    let raw = kv.get("FAVORITE_MOVIES").unwrap().unwrap();
    let stored: Vec<Movie> = serde_json::from_slice(&raw).unwrap();
    assert_eq!(stored, vec![Movie::new("Heat", "")]);
}

#[test]
fn test_clear_removes_blob() {
    let dir = TempDir::new().unwrap();
    let kv = file_kv(&dir);
    let favorites = repository(kv.clone());
    favorites.toggle_favorite(&heat());

    favorites.clear();

    assert!(favorites.favorites().is_empty());
    assert_eq!(kv.get("FAVORITE_MOVIES").unwrap(), None);
}

#[test]
fn test_toggle_round_trip_scenario() {
    let dir = TempDir::new().unwrap();
    let favorites = repository(file_kv(&dir));
    let movie = doctor_strange();

    assert!(!favorites.is_favorite(&movie));
    favorites.toggle_favorite(&movie);
    let saved = favorites.favorites();
    assert_eq!(saved.len(), 1);
    assert_eq!(saved[0].id.as_deref(), Some("tt1"));

    favorites.toggle_favorite(&movie);
    assert!(favorites.favorites().is_empty());
}

#[test]
fn test_legacy_title_matches_fetched_movie_without_duplicating() {
    let dir = TempDir::new().unwrap();
    let kv = file_kv(&dir);
    kv.set("FAVORITE_MOVIES", br#"["Heat"]"#).unwrap();
    let favorites = repository(kv.clone());
    let fetched = heat();

    assert!(favorites.is_favorite(&fetched));

    favorites.toggle_favorite(&fetched);
    assert!(!favorites.is_favorite(&fetched));
    assert!(favorites.favorites().is_empty());

    favorites.toggle_favorite(&fetched);
    let raw = kv.get("FAVORITE_MOVIES").unwrap().unwrap();
    let stored: Vec<Movie> = serde_json::from_slice(&raw).unwrap();
    assert_eq!(stored, vec![heat()]);
}
