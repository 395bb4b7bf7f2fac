pub mod drive;
pub mod listing;
pub mod navigation;
pub mod store;
