use crate::core::errors::{Error, Result};
use crate::models::item::{Item, ROOT_ID};
use serde::de::{Deserialize, Deserializer, MapAccess, Visitor};
use std::collections::{BTreeMap, HashSet};
use std::fmt;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

mod mock;

/// Read-only lookup of folder contents by folder id.
pub trait FolderSource: Send + Sync {
    /// Items of `folder_id` in display order, or `None` if the id has no entry.
    fn children(&self, folder_id: &str) -> Option<&[Item]>;
}

/// In-memory folder table, built once and never mutated afterwards.
#[derive(Debug, Clone, Default)]
pub struct StaticStore {
    folders: BTreeMap<String, Vec<Item>>,
}

impl StaticStore {
    /// Builds a store from a folder table, checking it has a root and unique item ids.
    pub fn new(folders: BTreeMap<String, Vec<Item>>) -> Result<Self> {
        if !folders.contains_key(ROOT_ID) {
            return Err(Error::MissingRoot);
        }

        let mut seen = HashSet::new();
        for item in folders.values().flatten() {
            if !seen.insert(item.id.as_str()) {
                return Err(Error::DuplicateItemId(item.id.clone()));
            }
        }

        for item in folders.values().flatten().filter(|i| i.is_folder()) {
            if !folders.contains_key(&item.id) {
                debug!(folder = %item.id, name = %item.name, "folder has no contents entry");
            }
        }

        Ok(Self { folders })
    }

    /// The demo drive shipped with the app.
    pub fn mock() -> Self {
        Self {
            folders: mock::folders(),
        }
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        let FolderEntries(entries) = serde_json::from_str(json)?;
        let mut folders = BTreeMap::new();
        for (id, items) in entries {
            if folders.contains_key(&id) {
                return Err(Error::DuplicateFolderId(id));
            }
            folders.insert(id, items);
        }
        Self::new(folders)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)?;
        let store = Self::from_json_str(&text)?;
        info!(
            path = %path.display(),
            folders = store.folder_count(),
            "loaded drive store"
        );
        Ok(store)
    }

    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.folders)?)
    }

    pub fn folder_count(&self) -> usize {
        self.folders.len()
    }

    pub fn folder_ids(&self) -> impl Iterator<Item = &str> {
        self.folders.keys().map(String::as_str)
    }
}

/// Top-level folder entries in file order, repeated keys included.
struct FolderEntries(Vec<(String, Vec<Item>)>);

impl<'de> Deserialize<'de> for FolderEntries {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct EntriesVisitor;

        impl<'de> Visitor<'de> for EntriesVisitor {
            type Value = FolderEntries;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of folder ids to item lists")
            }

            fn visit_map<A>(self, mut map: A) -> std::result::Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some(entry) = map.next_entry::<String, Vec<Item>>()? {
                    entries.push(entry);
                }
                Ok(FolderEntries(entries))
            }
        }

        deserializer.deserialize_map(EntriesVisitor)
    }
}

impl FolderSource for StaticStore {
    fn children(&self, folder_id: &str) -> Option<&[Item]> {
        self.folders.get(folder_id).map(Vec::as_slice)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::item::ItemKind;

    fn names(store: &StaticStore, id: &str) -> Vec<String> {
        store
            .children(id)
            .unwrap_or_default()
            .iter()
            .map(|i| i.name.clone())
            .collect()
    }

    #[test]
    fn mock_root_order() {
        let store = StaticStore::mock();
        assert_eq!(
            names(&store, ROOT_ID),
            vec![
                "Documents",
                "Images",
                "Project Proposal.docx",
                "Budget.xlsx",
                "Logo.png"
            ]
        );
        assert_eq!(store.folder_count(), 4);
    }

    #[test]
    fn mock_ids_are_unique() {
        let store = StaticStore::mock();
        let table: BTreeMap<String, Vec<Item>> = store.folders.clone();
        assert!(StaticStore::new(table).is_ok());
    }

    #[test]
    fn absent_folder_has_no_entry() {
        let store = StaticStore::mock();
        assert!(store.children("file1").is_none());
        assert!(store.children("nope").is_none());
    }

    #[test]
    fn missing_root_is_rejected() {
        let err = StaticStore::from_json_str(r#"{"folder1": []}"#).unwrap_err();
        assert!(matches!(err, Error::MissingRoot));
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let mut folders = BTreeMap::new();
        folders.insert(
            ROOT_ID.to_string(),
            vec![Item::new("a", "A", ItemKind::Folder, "-", "Jan 1, 2024", false)],
        );
        folders.insert(
            "a".to_string(),
            vec![Item::new("a", "Again", ItemKind::Pdf, "1 MB", "Jan 2, 2024", false)],
        );
        match StaticStore::new(folders) {
            Err(Error::DuplicateItemId(id)) => assert_eq!(id, "a"),
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn repeated_folder_key_is_rejected() {
        let err = StaticStore::from_json_str(r#"{"root": [], "x": [], "root": []}"#).unwrap_err();
        assert!(matches!(err, Error::DuplicateFolderId(ref id) if id == "root"));
    }

    #[test]
    fn malformed_json_is_a_json_error() {
        assert!(matches!(
            StaticStore::from_json_str("{ not json"),
            Err(Error::Json(_))
        ));
    }

    #[test]
    fn json_export_reloads_identically() {
        let store = StaticStore::mock();
        let json = store.to_json_string().unwrap();
        let reloaded = StaticStore::from_json_str(&json).unwrap();
        for id in store.folder_ids() {
            assert_eq!(store.children(id), reloaded.children(id));
        }
    }
}
