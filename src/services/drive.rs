use crate::core::errors::Result;
use crate::models::item::Crumb;
use crate::models::storage::StorageUsage;
use crate::services::listing::{list_folder, ListParams, ListingRow};
use crate::services::navigation::{NavAction, NavState};
use crate::services::store::FolderSource;
use std::sync::Arc;
use tracing::{debug, warn};

pub const UPLOAD_PLACEHOLDER: &str =
    "Upload functionality would open a file picker in a real application";

/// Toolkit-free state behind the drive page: an injected store plus the
/// current navigation state.
#[derive(Clone)]
pub struct DriveModel {
    source: Arc<dyn FolderSource>,
    nav: NavState,
    storage: StorageUsage,
}

impl DriveModel {
    pub fn new(source: Arc<dyn FolderSource>) -> Self {
        Self {
            source,
            nav: NavState::root(),
            storage: StorageUsage::fixed(),
        }
    }

    pub fn nav(&self) -> &NavState {
        &self.nav
    }

    pub fn current_folder(&self) -> &str {
        self.nav.current_folder()
    }

    pub fn breadcrumbs(&self) -> &[Crumb] {
        self.nav.breadcrumbs()
    }

    pub fn storage(&self) -> StorageUsage {
        self.storage
    }

    /// Rows of the current folder in store order.
    pub fn rows(&self) -> Vec<ListingRow> {
        list_folder(self.source.as_ref(), ListParams::all(self.current_folder())).entries
    }

    /// Applies `action`. On error the previous state is kept.
    pub fn dispatch(&mut self, action: NavAction) -> Result<()> {
        match self.nav.apply(&action) {
            Ok(next) => {
                debug!(
                    ?action,
                    folder = next.current_folder(),
                    depth = next.depth(),
                    "navigated"
                );
                if self.source.children(next.current_folder()).is_none() {
                    debug!(folder = next.current_folder(), "folder has no listing");
                }
                self.nav = next;
                Ok(())
            }
            Err(e) => {
                warn!(?action, "navigation rejected: {}", e);
                Err(e)
            }
        }
    }

    pub fn enter_folder(&mut self, id: &str, name: &str) -> Result<()> {
        self.dispatch(NavAction::EnterFolder {
            id: id.to_string(),
            name: name.to_string(),
        })
    }

    pub fn jump_to_breadcrumb(&mut self, index: usize) -> Result<()> {
        self.dispatch(NavAction::JumpToBreadcrumb(index))
    }

    pub fn reset_to_root(&mut self) -> Result<()> {
        self.dispatch(NavAction::ResetToRoot)
    }

    /// Message shown by the upload button. Nothing is read or stored.
    pub fn upload_placeholder(&self) -> &'static str {
        UPLOAD_PLACEHOLDER
    }
}
