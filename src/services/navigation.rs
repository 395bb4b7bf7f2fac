use crate::core::errors::{Error, Result};
use crate::models::item::Crumb;

/// A single navigation input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavAction {
    EnterFolder { id: String, name: String },
    JumpToBreadcrumb(usize),
    ResetToRoot,
}

/// Breadcrumb path from the root to the current folder.
///
/// The path is never empty and always starts at the root crumb. The current
/// folder is the id of the last crumb, so the two can never disagree.
/// Transitions return a new state and leave `self` untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavState {
    breadcrumbs: Vec<Crumb>,
}

impl Default for NavState {
    fn default() -> Self {
        Self::root()
    }
}

impl NavState {
    pub fn root() -> Self {
        Self {
            breadcrumbs: vec![Crumb::root()],
        }
    }

    pub fn current_folder(&self) -> &str {
        // The path always holds at least the root crumb.
        self.breadcrumbs
            .last()
            .map(|c| c.id.as_str())
            .unwrap_or(crate::models::item::ROOT_ID)
    }

    pub fn breadcrumbs(&self) -> &[Crumb] {
        &self.breadcrumbs
    }

    pub fn depth(&self) -> usize {
        self.breadcrumbs.len()
    }

    pub fn is_root(&self) -> bool {
        self.breadcrumbs.len() == 1
    }

    /// Appends `folder_id` to the path. The id is not checked against any store.
    pub fn enter_folder(&self, folder_id: &str, folder_name: &str) -> Self {
        let mut breadcrumbs = self.breadcrumbs.clone();
        breadcrumbs.push(Crumb::new(folder_id, folder_name));
        Self { breadcrumbs }
    }

    /// Truncates the path so that `index` becomes the last crumb.
    pub fn jump_to_breadcrumb(&self, index: usize) -> Result<Self> {
        let len = self.breadcrumbs.len();
        if index >= len {
            return Err(Error::BreadcrumbOutOfRange { index, len });
        }
        Ok(Self {
            breadcrumbs: self.breadcrumbs[..=index].to_vec(),
        })
    }

    pub fn reset_to_root(&self) -> Self {
        Self::root()
    }

    pub fn apply(&self, action: &NavAction) -> Result<Self> {
        match action {
            NavAction::EnterFolder { id, name } => Ok(self.enter_folder(id, name)),
            NavAction::JumpToBreadcrumb(index) => self.jump_to_breadcrumb(*index),
            NavAction::ResetToRoot => Ok(self.reset_to_root()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::item::{ROOT_ID, ROOT_NAME};

    #[test]
    fn initial_state_is_root() {
        let state = NavState::root();
        assert_eq!(state.current_folder(), ROOT_ID);
        assert_eq!(state.breadcrumbs(), &[Crumb::new(ROOT_ID, ROOT_NAME)]);
        assert!(state.is_root());
    }

    #[test]
    fn enter_appends_and_keeps_previous() {
        let root = NavState::root();
        let docs = root.enter_folder("folder1", "Documents");
        assert_eq!(docs.current_folder(), "folder1");
        assert_eq!(docs.depth(), 2);
        assert_eq!(docs.breadcrumbs()[1], Crumb::new("folder1", "Documents"));
        assert_eq!(root, NavState::root());
    }

    #[test]
    fn jump_truncates_inclusive() {
        let deep = NavState::root()
            .enter_folder("folder1", "Documents")
            .enter_folder("folder3", "Projects");
        let back = deep.jump_to_breadcrumb(1).unwrap();
        assert_eq!(back.current_folder(), "folder1");
        assert_eq!(back.depth(), 2);
        assert_eq!(deep.jump_to_breadcrumb(0).unwrap(), NavState::root());
    }

    #[test]
    fn jump_to_own_index_is_noop() {
        let docs = NavState::root().enter_folder("folder1", "Documents");
        let last = docs.depth() - 1;
        assert_eq!(docs.jump_to_breadcrumb(last).unwrap(), docs);
    }

    #[test]
    fn out_of_range_jump_is_rejected() {
        let docs = NavState::root().enter_folder("folder1", "Documents");
        match docs.jump_to_breadcrumb(2) {
            Err(Error::BreadcrumbOutOfRange { index, len }) => {
                assert_eq!(index, 2);
                assert_eq!(len, 2);
            }
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn apply_reduces_actions() {
        let state = NavState::root()
            .apply(&NavAction::EnterFolder {
                id: "folder2".into(),
                name: "Images".into(),
            })
            .unwrap();
        assert_eq!(state.current_folder(), "folder2");
        let reset = state.apply(&NavAction::ResetToRoot).unwrap();
        assert!(reset.is_root());
        assert!(state.apply(&NavAction::JumpToBreadcrumb(9)).is_err());
    }
}
