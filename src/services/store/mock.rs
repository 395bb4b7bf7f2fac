use crate::models::item::{Item, ItemKind, ROOT_ID};
use std::collections::BTreeMap;

pub(super) fn folders() -> BTreeMap<String, Vec<Item>> {
    use ItemKind::*;

    let mut folders = BTreeMap::new();
    folders.insert(
        ROOT_ID.to_string(),
        vec![
            Item::new("folder1", "Documents", Folder, "-", "Apr 2, 2024", true),
            Item::new("folder2", "Images", Folder, "-", "Mar 28, 2024", false),
            Item::new("file1", "Project Proposal.docx", Document, "2.3 MB", "Apr 5, 2024", true),
            Item::new("file2", "Budget.xlsx", Spreadsheet, "1.8 MB", "Apr 1, 2024", false),
            Item::new("file3", "Logo.png", Image, "4.2 MB", "Mar 25, 2024", false),
        ],
    );
    folders.insert(
        "folder1".to_string(),
        vec![
            Item::new("file4", "Meeting Notes.docx", Document, "1.1 MB", "Apr 4, 2024", false),
            Item::new("file5", "Contract.pdf", Pdf, "3.5 MB", "Mar 30, 2024", true),
            Item::new("folder3", "Projects", Folder, "-", "Mar 15, 2024", false),
        ],
    );
    folders.insert(
        "folder2".to_string(),
        vec![
            Item::new("file6", "Vacation.jpg", Image, "5.7 MB", "Feb 20, 2024", false),
            Item::new("file7", "Team Photo.png", Image, "8.2 MB", "Mar 10, 2024", true),
        ],
    );
    folders.insert(
        "folder3".to_string(),
        vec![Item::new("file8", "Project Timeline.pdf", Pdf, "2.8 MB", "Mar 12, 2024", false)],
    );
    folders
}
