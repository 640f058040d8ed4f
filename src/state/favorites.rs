/// The persisted favorites set
///
/// `Favorites` is the single owner of the favorites in the running app.
/// The grid and the modal both read through it. The backing store is the
/// source of truth: every toggle re-reads it, mutates, then writes the
/// whole set back.

use std::collections::HashSet;

use super::library::KeyValueStore;

/// Storage key holding the serialized favorites (a JSON array of ids)
pub const FAVORITES_KEY: &str = "gallery-favorites";

pub struct Favorites {
    store: Box<dyn KeyValueStore>,
    /// Last snapshot read from or written to the store, in insertion order
    ids: Vec<String>,
}

impl Favorites {
    /// Wrap a store and load the current set from it
    pub fn load(store: Box<dyn KeyValueStore>) -> Self {
        let mut favorites = Self {
            store,
            ids: Vec::new(),
        };
        favorites.refresh();
        favorites
    }

    /// Re-read the set from the store.
    /// A corrupt payload degrades to the empty set; a failed read keeps the
    /// last snapshot (empty on first load). Repeated ids collapse to one.
    pub fn refresh(&mut self) {
        let ids = match self.store.get(FAVORITES_KEY) {
            Ok(Some(raw)) => match serde_json::from_str::<Vec<String>>(&raw) {
                Ok(mut ids) => {
                    let mut seen = HashSet::new();
                    ids.retain(|id| seen.insert(id.clone()));
                    ids
                }
                Err(e) => {
                    tracing::warn!(error = %e, "⚠️  corrupt favorites payload, starting empty");
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(e) => {
                tracing::warn!(error = %e, "⚠️  could not read favorites");
                return;
            }
        };

        self.ids = ids;
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.iter().any(|fav| fav == id)
    }

    /// Flip `id` in the set and persist the full snapshot.
    /// Returns whether the item is a favorite afterwards.
    ///
    /// A failed write is logged and the in-memory change is kept.
    pub fn toggle(&mut self, id: &str) -> bool {
        self.refresh();

        let now_favorite = if self.contains(id) {
            self.ids.retain(|fav| fav != id);
            false
        } else {
            self.ids.push(id.to_string());
            true
        };

        match serde_json::to_string(&self.ids) {
            Ok(payload) => {
                if let Err(e) = self.store.set(FAVORITES_KEY, &payload) {
                    tracing::warn!(error = %e, id, "⚠️  could not persist favorites");
                }
            }
            Err(e) => tracing::warn!(error = %e, "⚠️  could not serialize favorites"),
        }

        tracing::debug!(id, favorite = now_favorite, "favorite toggled");
        now_favorite
    }

    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

impl std::fmt::Debug for Favorites {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Favorites")
            .field("ids", &self.ids)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{Error, Result};
    use crate::state::library::{Library, MemoryStore};
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Store that shares its backing map so a test can poke at it directly
    #[derive(Clone, Default)]
    struct SharedStore(Rc<RefCell<MemoryStore>>);

    impl KeyValueStore for SharedStore {
        fn get(&self, key: &str) -> Result<Option<String>> {
            self.0.borrow().get(key)
        }
        fn set(&mut self, key: &str, value: &str) -> Result<()> {
            self.0.borrow_mut().set(key, value)
        }
    }

    struct BrokenStore;

    impl KeyValueStore for BrokenStore {
        fn get(&self, _key: &str) -> Result<Option<String>> {
            Err(Error::Store("disk unplugged".into()))
        }
        fn set(&mut self, _key: &str, _value: &str) -> Result<()> {
            Err(Error::Store("quota exceeded".into()))
        }
    }

    #[test]
    fn test_toggle_off_persists_empty_set() {
        let shared = SharedStore::default();
        shared.0.borrow_mut().set(FAVORITES_KEY, "[\"1\"]").unwrap();

        let mut favorites = Favorites::load(Box::new(shared.clone()));
        assert!(favorites.contains("1"));

        assert!(!favorites.toggle("1"));
        assert!(favorites.is_empty());
        assert_eq!(shared.get(FAVORITES_KEY).unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn test_toggle_rereads_store_before_writing() {
        let shared = SharedStore::default();
        let mut favorites = Favorites::load(Box::new(shared.clone()));

        // Another writer stores a favorite behind our back
        shared.0.borrow_mut().set(FAVORITES_KEY, "[\"7\"]").unwrap();

        favorites.toggle("3");
        assert_eq!(favorites.ids(), ["7", "3"]);
        assert_eq!(
            shared.get(FAVORITES_KEY).unwrap().as_deref(),
            Some("[\"7\",\"3\"]")
        );
    }

    #[test]
    fn test_refresh_picks_up_other_writers() {
        let shared = SharedStore::default();
        let mut favorites = Favorites::load(Box::new(shared.clone()));
        assert!(favorites.is_empty());

        shared.0.borrow_mut().set(FAVORITES_KEY, "[\"2\"]").unwrap();
        favorites.refresh();
        assert!(favorites.contains("2"));
    }

    #[test]
    fn test_repeated_ids_are_one_favorite() {
        let shared = SharedStore::default();
        shared
            .0
            .borrow_mut()
            .set(FAVORITES_KEY, "[\"1\",\"2\",\"1\"]")
            .unwrap();

        let mut favorites = Favorites::load(Box::new(shared.clone()));
        assert_eq!(favorites.ids(), ["1", "2"]);

        assert!(!favorites.toggle("1"));
        assert!(!favorites.contains("1"));
        assert_eq!(shared.get(FAVORITES_KEY).unwrap().as_deref(), Some("[\"2\"]"));
    }

    #[test]
    fn test_corrupt_payload_loads_empty() {
        let mut store = MemoryStore::new();
        store.set(FAVORITES_KEY, "{not json").unwrap();
        let favorites = Favorites::load(Box::new(store));
        assert!(favorites.is_empty());
    }

    #[test]
    fn test_broken_store_degrades() {
        let mut favorites = Favorites::load(Box::new(BrokenStore));
        assert!(favorites.is_empty());

        // Write failure is swallowed, the toggle still shows up in memory
        assert!(favorites.toggle("5"));
        assert!(favorites.toggle("6"));
        assert_eq!(favorites.ids(), ["5", "6"]);
    }

    #[test]
    fn test_round_trip_through_library() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("favorites.db");

        {
            let mut favorites = Favorites::load(Box::new(Library::open(&path).unwrap()));
            favorites.toggle("1");
            favorites.toggle("2");
        }

        let favorites = Favorites::load(Box::new(Library::open(&path).unwrap()));
        assert_eq!(favorites.ids(), ["1", "2"]);
    }
}
