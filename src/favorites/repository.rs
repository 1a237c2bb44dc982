use std::sync::Arc;

use parking_lot::Mutex;

use crate::favorites::FavoritesStore;
use crate::model::Movie;

/// Favorite membership, as the rest of the app sees it.
pub trait FavoritesRepository: Send + Sync {
    /// Remove `movie` if a record referring to it is stored, otherwise add
    /// it. Removal drops title-only records of the same film too.
    fn toggle_favorite(&self, movie: &Movie);

    /// Fresh read of the store every call.
    fn is_favorite(&self, movie: &Movie) -> bool;

    /// Full set, in the store's order.
    fn favorites(&self) -> Vec<Movie>;

    fn clear(&self);
}

/// [`FavoritesRepository`] over a [`FavoritesStore`].
///
/// Every mutation is load → modify → save of the whole set. Toggles on one
/// instance are serialized; two instances sharing a backing store are not
/// coordinated and the last writer wins.
pub struct StoredFavorites {
    store: Arc<dyn FavoritesStore>,
    write_lock: Mutex<()>,
}

impl StoredFavorites {
    pub fn new(store: Arc<dyn FavoritesStore>) -> Self {
        Self {
            store,
            write_lock: Mutex::new(()),
        }
    }
}

impl FavoritesRepository for StoredFavorites {
    fn toggle_favorite(&self, movie: &Movie) {
        let _guard = self.write_lock.lock();
        let mut list = self.store.load();

        let before = list.len();
        // Drops every record of the same film, which also heals duplicates
        // and title-only entries left behind by older payloads.
        list.retain(|existing| !existing.refers_to(movie));

        if list.len() < before {
            tracing::info!(title = %movie.title, "Removed from favorites");
        } else {
            list.push(movie.clone());
            tracing::info!(title = %movie.title, "Added to favorites");
        }

        self.store.save(&list);
    }

    fn is_favorite(&self, movie: &Movie) -> bool {
        self.store
            .load()
            .iter()
            .any(|existing| existing.refers_to(movie))
    }

    fn favorites(&self) -> Vec<Movie> {
        self.store.load()
    }

    fn clear(&self) {
        let _guard = self.write_lock.lock();
        self.store.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::favorites::InMemoryFavoritesStore;

    fn repo() -> StoredFavorites {
        StoredFavorites::new(Arc::new(InMemoryFavoritesStore::new()))
    }

    #[test]
    fn toggle_twice_restores_membership() {
        let repo = repo();
        let movie = Movie::new("Doctor Strange", "2016").with_id("tt1");

        assert!(!repo.is_favorite(&movie));
        repo.toggle_favorite(&movie);
        assert!(repo.is_favorite(&movie));
        repo.toggle_favorite(&movie);
        assert!(!repo.is_favorite(&movie));
        assert!(repo.favorites().is_empty());
    }

    #[test]
    fn same_key_different_fields_toggles_off() {
        let repo = repo();
        let original = Movie::new("Doctor Strange", "2016").with_id("tt1");
        let updated = Movie::new("Doctor Strange (4K)", "2016")
            .with_id("tt1")
            .with_runtime("115");

        repo.toggle_favorite(&original);
        assert!(repo.is_favorite(&updated));

        repo.toggle_favorite(&updated);
        assert!(repo.favorites().is_empty());
    }

    #[test]
    fn shared_title_with_distinct_ids_are_separate() {
        let repo = repo();
        let remake = Movie::new("Solaris", "2002").with_id("tt0307479");
        let original = Movie::new("Solaris", "1972").with_id("tt0069293");

        repo.toggle_favorite(&remake);
        repo.toggle_favorite(&original);

        assert_eq!(repo.favorites().len(), 2);
        assert!(repo.is_favorite(&remake));
        assert!(repo.is_favorite(&original));
    }

    #[test]
    fn title_only_record_matches_fetched_movie() {
        let store = Arc::new(InMemoryFavoritesStore::with_movies(vec![Movie::new("Heat", "")]));
        let repo = StoredFavorites::new(store);
        let fetched = Movie::new("Heat", "1995").with_id("tt0113277");

        assert!(repo.is_favorite(&fetched));
        repo.toggle_favorite(&fetched);
        assert!(repo.favorites().is_empty());

        repo.toggle_favorite(&fetched);
        assert_eq!(repo.favorites(), vec![fetched]);
    }

    #[test]
    fn toggle_heals_duplicates() {
        let heat = Movie::new("Heat", "1995");
        let store = Arc::new(InMemoryFavoritesStore::with_movies(vec![
            heat.clone(),
            Movie::new("Alien", "1979"),
            heat.clone(),
        ]));
        let repo = StoredFavorites::new(store);

        repo.toggle_favorite(&heat);

        assert_eq!(repo.favorites(), vec![Movie::new("Alien", "1979")]);
    }

    #[test]
    fn favorites_keep_store_order() {
        let repo = repo();
        let movies = [
            Movie::new("C", "3"),
            Movie::new("A", "1"),
            Movie::new("B", "2"),
        ];
        for movie in &movies {
            repo.toggle_favorite(movie);
        }

        assert_eq!(repo.favorites(), movies.to_vec());
    }

    #[test]
    fn clear_empties_the_set() {
        let repo = repo();
        repo.toggle_favorite(&Movie::new("Heat", "1995"));

        repo.clear();

        assert!(repo.favorites().is_empty());
    }
}
