use anyhow::Result;
use driveview::core::errors::Error;
use driveview::models::item::ItemKind;
use driveview::services::drive::DriveModel;
use driveview::services::listing::{IconGlyph, RowAction};
use driveview::services::store::{FolderSource, StaticStore};
use std::fs;
use std::sync::Arc;
use tempfile::tempdir;

const SMALL_DRIVE: &str = r#"{
  "root": [
    { "id": "music", "name": "Music", "type": "folder", "size": "-", "modified": "Jan 3, 2024", "shared": false },
    { "id": "notes", "name": "notes.txt", "type": "text", "size": "2 KB", "modified": "Jan 4, 2024", "shared": true }
  ],
  "music": [
    { "id": "cover", "name": "Cover.png", "type": "image", "size": "300 KB", "modified": "Jan 5, 2024", "shared": false }
  ]
}"#;

#[test]
fn test_load_store_from_file() -> Result<()> {
    let dir = tempdir()?;
    let path = dir.path().join("drive.json");
    fs::write(&path, SMALL_DRIVE)?;

    let store = StaticStore::load(&path)?;
    assert_eq!(store.folder_count(), 2);

    let mut model = DriveModel::new(Arc::new(store));
    let rows = model.rows();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[1].kind, ItemKind::Unknown);
    assert_eq!(rows[1].icon.glyph, IconGlyph::FileText);
    assert_eq!(rows[1].icon.color, None);
    assert_eq!(rows[1].action, RowAction::Inert);
    assert!(rows[1].shared);

    model.enter_folder("music", "Music")?;
    let rows = model.rows();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].name, "Cover.png");
    Ok(())
}

#[test]
fn test_missing_file_is_io_error() -> Result<()> {
    let dir = tempdir()?;
    let err = StaticStore::load(dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, Error::Io(_)));
    Ok(())
}

#[test]
fn test_store_without_root_is_rejected() -> Result<()> {
    let dir = tempdir()?;
    let path = dir.path().join("drive.json");
    fs::write(&path, r#"{ "music": [] }"#)?;
    assert!(matches!(StaticStore::load(&path), Err(Error::MissingRoot)));
    Ok(())
}

#[test]
fn test_dangling_folder_lists_empty() -> Result<()> {
    let store = StaticStore::from_json_str(
        r#"{ "root": [ { "id": "empty", "name": "Empty", "type": "folder", "size": "-", "modified": "Jan 1, 2024" } ] }"#,
    )?;
    assert!(store.children("empty").is_none());
    let mut model = DriveModel::new(Arc::new(store));
    model.enter_folder("empty", "Empty")?;
    assert!(model.rows().is_empty());
    Ok(())
}

#[test]
fn test_repeated_root_key_is_rejected() -> Result<()> {
    let dir = tempdir()?;
    let path = dir.path().join("drive.json");
    fs::write(
        &path,
        r#"{
  "root": [ { "id": "a", "name": "A.pdf", "type": "pdf", "size": "1 MB", "modified": "Jan 1, 2024", "shared": false } ],
  "root": [ { "id": "b", "name": "B.pdf", "type": "pdf", "size": "2 MB", "modified": "Jan 2, 2024", "shared": false } ]
}"#,
    )?;
    match StaticStore::load(&path) {
        Err(Error::DuplicateFolderId(id)) => assert_eq!(id, "root"),
        Err(other) => panic!("unexpected error: {other}"),
        Ok(_) => panic!("store with a repeated root key was accepted"),
    }
    Ok(())
}
