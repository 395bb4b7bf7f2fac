use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("breadcrumb index {index} out of range (path has {len} entries)")]
    BreadcrumbOutOfRange { index: usize, len: usize },
    #[error("store has no \"root\" folder")]
    MissingRoot,
    #[error("folder id listed twice in store: {0}")]
    DuplicateFolderId(String),
    #[error("duplicate item id in store: {0}")]
    DuplicateItemId(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("other error: {0}")]
    Other(String),
}
