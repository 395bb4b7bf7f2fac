use crate::services::drive::DriveModel;
use crate::services::store::FolderSource;

use gpui::{Context, Entity, FocusHandle, Focusable, IntoElement, Render, Window};
use gpui_component::input::InputState;
use gpui_component::notification::Notification;
use gpui_component::ContextModal;
use std::sync::Arc;

pub mod view;

/// The "My Drive" page: header, sidebar and the current folder's table.
pub struct DrivePage {
    pub model: DriveModel,
    /// Backs the header search box, which is displayed but not wired to any filtering.
    pub search_input: Entity<InputState>,
    pub focus_handle: FocusHandle,
}

impl Focusable for DrivePage {
    fn focus_handle(&self, _cx: &gpui::App) -> FocusHandle {
        self.focus_handle.clone()
    }
}

impl DrivePage {
    pub fn new(
        source: Arc<dyn FolderSource>,
        search_input: Entity<InputState>,
        focus_handle: FocusHandle,
    ) -> Self {
        Self {
            model: DriveModel::new(source),
            search_input,
            focus_handle,
        }
    }

    fn enter_folder(&mut self, id: &str, name: &str, cx: &mut Context<Self>) {
        if self.model.enter_folder(id, name).is_ok() {
            cx.notify();
        }
    }

    fn jump_to_breadcrumb(&mut self, index: usize, cx: &mut Context<Self>) {
        // Rejected jumps are logged by the model and leave the view as is.
        if self.model.jump_to_breadcrumb(index).is_ok() {
            cx.notify();
        }
    }

    fn reset_to_root(&mut self, cx: &mut Context<Self>) {
        if self.model.reset_to_root().is_ok() {
            cx.notify();
        }
    }

    fn upload(&mut self, window: &mut Window, cx: &mut Context<Self>) {
        tracing::info!("upload requested");
        window.push_notification(Notification::info(self.model.upload_placeholder()), cx);
    }
}

impl Render for DrivePage {
    fn render(&mut self, window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        view::render(self, window, cx)
    }
}
