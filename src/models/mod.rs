pub mod item;
pub mod storage;

pub use item::{Crumb, Item, ItemKind};
pub use storage::StorageUsage;
