use crate::models::item::{Item, ItemKind};
use crate::services::store::FolderSource;
use serde::Serialize;

/// Tailwind 500-series colours used for item icons.
pub mod palette {
    pub const YELLOW_500: u32 = 0xEAB308;
    pub const BLUE_500: u32 = 0x3B82F6;
    pub const GREEN_500: u32 = 0x22C55E;
    pub const RED_500: u32 = 0xEF4444;
    pub const PURPLE_500: u32 = 0xA855F7;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum IconGlyph {
    Folder,
    FileText,
    Image,
}

impl IconGlyph {
    pub fn asset_path(&self) -> &'static str {
        match self {
            IconGlyph::Folder => "icons/folder.svg",
            IconGlyph::FileText => "icons/file-text.svg",
            IconGlyph::Image => "icons/image.svg",
        }
    }
}

/// How an item's icon is drawn. `color: None` means the default foreground.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct IconSpec {
    pub glyph: IconGlyph,
    pub color: Option<u32>,
}

pub fn icon_for(kind: ItemKind) -> IconSpec {
    use palette::*;
    let (glyph, color) = match kind {
        ItemKind::Folder => (IconGlyph::Folder, Some(YELLOW_500)),
        ItemKind::Document => (IconGlyph::FileText, Some(BLUE_500)),
        ItemKind::Spreadsheet => (IconGlyph::FileText, Some(GREEN_500)),
        ItemKind::Pdf => (IconGlyph::FileText, Some(RED_500)),
        ItemKind::Image => (IconGlyph::Image, Some(PURPLE_500)),
        ItemKind::Unknown => (IconGlyph::FileText, None),
    };
    IconSpec { glyph, color }
}

/// What clicking a row's name does.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum RowAction {
    OpenFolder { id: String, name: String },
    /// Placeholder link with no behaviour.
    Inert,
}

/// Display model of one table row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListingRow {
    pub id: String,
    pub name: String,
    pub kind: ItemKind,
    pub icon: IconSpec,
    pub size: String,
    pub modified: String,
    pub shared: bool,
    pub action: RowAction,
}

impl From<&Item> for ListingRow {
    fn from(item: &Item) -> Self {
        let action = if item.is_folder() {
            RowAction::OpenFolder {
                id: item.id.clone(),
                name: item.name.clone(),
            }
        } else {
            RowAction::Inert
        };
        Self {
            id: item.id.clone(),
            name: item.name.clone(),
            kind: item.kind,
            icon: icon_for(item.kind),
            size: item.size.clone(),
            modified: item.modified.clone(),
            shared: item.shared,
            action,
        }
    }
}

impl ListingRow {
    pub fn shows_shared_badge(&self) -> bool {
        self.shared
    }
}

pub struct ListParams<'a> {
    pub folder_id: &'a str,
    pub limit: Option<usize>,
    pub cursor: Option<&'a str>,
}

impl<'a> ListParams<'a> {
    pub fn all(folder_id: &'a str) -> Self {
        Self {
            folder_id,
            limit: None,
            cursor: None,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ListResult {
    pub entries: Vec<ListingRow>,
    pub next_cursor: Option<String>,
}

/// Lists a folder in store order. Unknown folder ids produce an empty result.
pub fn list_folder(source: &dyn FolderSource, params: ListParams<'_>) -> ListResult {
    let Some(items) = source.children(params.folder_id) else {
        tracing::debug!(folder = params.folder_id, "no contents for folder");
        return ListResult::default();
    };

    let total = items.len();
    let offset = params
        .cursor
        .and_then(|s| s.parse::<usize>().ok())
        .unwrap_or(0)
        .min(total);
    let end = params
        .limit
        .map(|limit| offset.saturating_add(limit).min(total))
        .unwrap_or(total);

    let entries = items[offset..end].iter().map(ListingRow::from).collect();
    let next_cursor = if end < total {
        Some(end.to_string())
    } else {
        None
    };

    ListResult {
        entries,
        next_cursor,
    }
}
