use serde::{Deserialize, Serialize};

/// Folder id the drive starts at.
pub const ROOT_ID: &str = "root";
/// Label of the root breadcrumb and sidebar entry.
pub const ROOT_NAME: &str = "My Drive";

/// A file or folder record in the drive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: ItemKind,
    pub size: String,
    pub modified: String,
    #[serde(default)]
    pub shared: bool,
}

impl Item {
    pub fn new(
        id: &str,
        name: &str,
        kind: ItemKind,
        size: &str,
        modified: &str,
        shared: bool,
    ) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            kind,
            size: size.to_string(),
            modified: modified.to_string(),
            shared,
        }
    }

    pub fn is_folder(&self) -> bool {
        self.kind == ItemKind::Folder
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    Folder,
    Document,
    Spreadsheet,
    Pdf,
    Image,
    /// Any type string the drive does not know about.
    #[serde(other)]
    Unknown,
}

/// One entry of the breadcrumb path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Crumb {
    pub id: String,
    pub name: String,
}

impl Crumb {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }

    pub fn root() -> Self {
        Self::new(ROOT_ID, ROOT_NAME)
    }
}
