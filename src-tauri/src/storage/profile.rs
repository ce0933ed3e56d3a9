use super::KeyValueStore;
use crate::models::profile::Profile;

/// Store key of the serialized profile.
pub const PROFILE_KEY: &str = "gbsProfile";

/// Load the saved profile. Returns `None` if never saved or undecodable.
///
/// Only a JSON object counts as a profile; missing fields read as empty.
pub fn load(store: &dyn KeyValueStore) -> Option<Profile> {
    let blob = store.read_blob(PROFILE_KEY)?;
    let value = match serde_json::from_str::<serde_json::Value>(&blob) {
        Ok(value @ serde_json::Value::Object(_)) => value,
        Ok(other) => {
            log::warn!("Ignoring saved profile that is not an object: {}", other);
            return None;
        }
        Err(e) => {
            log::warn!("Ignoring undecodable saved profile: {}", e);
            return None;
        }
    };
    match serde_json::from_value(value) {
        Ok(profile) => Some(profile),
        Err(e) => {
            log::warn!("Ignoring undecodable saved profile: {}", e);
            None
        }
    }
}

/// Overwrite the saved profile.
pub fn save(store: &dyn KeyValueStore, profile: &Profile) -> crate::error::Result<()> {
    store.write_blob(PROFILE_KEY, serde_json::to_string(profile)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    #[test]
    fn never_saved_is_none() {
        assert!(load(&MemoryStore::new()).is_none());
    }

    #[test]
    fn array_blob_is_none() {
        let store = MemoryStore::new();
        store.write_blob(PROFILE_KEY, "[]".to_string()).unwrap();
        assert!(load(&store).is_none());
        store.write_blob(PROFILE_KEY, r#"["Ada"]"#.to_string()).unwrap();
        assert!(load(&store).is_none());
    }

    #[test]
    fn non_object_blobs_are_none() {
        let store = MemoryStore::new();
        for blob in ["{not json", "\"str\"", "42", "null"] {
            store.write_blob(PROFILE_KEY, blob.to_string()).unwrap();
            assert!(load(&store).is_none(), "blob {} should not load", blob);
        }
    }

    #[test]
    fn partial_object_loads_with_empty_fields() {
        let store = MemoryStore::new();
        store
            .write_blob(PROFILE_KEY, r#"{"name": "Ada"}"#.to_string())
            .unwrap();
        assert_eq!(
            load(&store),
            Some(Profile {
                name: "Ada".into(),
                ..Profile::default()
            })
        );
    }

    #[test]
    fn wrongly_typed_field_is_none() {
        let store = MemoryStore::new();
        store
            .write_blob(PROFILE_KEY, r#"{"name": 7}"#.to_string())
            .unwrap();
        assert!(load(&store).is_none());
    }

    #[test]
    fn save_overwrites_wholesale() {
        let store = MemoryStore::new();
        let first = Profile {
            name: "Ada".into(),
            email: "ada@example.com".into(),
            avatar: "data:image/png;base64,AAAA".into(),
        };
        save(&store, &first).unwrap();
        let second = Profile {
            name: "Grace".into(),
            email: "grace@example.com".into(),
            avatar: String::new(),
        };
        save(&store, &second).unwrap();
        assert_eq!(load(&store), Some(second));
    }

    #[test]
    fn blob_uses_avatar_key() {
        let store = MemoryStore::new();
        save(&store, &Profile::default()).unwrap();
        let blob = store.read_blob(PROFILE_KEY).unwrap();
        assert!(blob.contains("\"avatar\""), "blob: {}", blob);
    }
}
