#![cfg(feature = "gui")]

use crate::core::config::DriveConfig;
use crate::pages::drive::DrivePage;
use crate::services::store::FolderSource;
use crate::ui::assets::DriveAssets;
use crate::ui::theme::theme;

use gpui::{
    div, prelude::*, px, rgb, size, App, Application, Bounds, Context, Entity, FocusHandle,
    Focusable, IntoElement, Render, Window, WindowBounds, WindowOptions,
};
use gpui_component::input::InputState;
use gpui_component::Root;
use std::sync::Arc;
use tracing::info;

pub struct DriveApp;

impl DriveApp {
    /// Opens the drive window and blocks until the application quits.
    pub fn run(config: DriveConfig, source: Arc<dyn FolderSource>) {
        Application::new()
            .with_assets(DriveAssets)
            .run(move |app: &mut App| {
                gpui_component::init(app);
                let bounds = Bounds::centered(None, size(px(config.width), px(config.height)), app);
                let window_options = WindowOptions {
                    window_bounds: Some(WindowBounds::Windowed(bounds)),
                    ..Default::default()
                };

                let opened = app.open_window(window_options, |window, cx| {
                    let search_input = cx.new(|cx| {
                        InputState::new(window, cx).placeholder("Search in Drive")
                    });
                    let drive = cx.new(|cx| {
                        DrivePage::new(source.clone(), search_input.clone(), cx.focus_handle())
                    });
                    let view = cx.new(|cx| RootView {
                        focus_handle: cx.focus_handle(),
                        drive,
                    });

                    cx.new(|cx| Root::new(view.into(), window, cx))
                });

                match opened {
                    Ok(_) => info!("drive window opened"),
                    Err(e) => {
                        tracing::error!("failed to open drive window: {}", e);
                        app.quit();
                    }
                }
            });
    }
}

pub struct RootView {
    focus_handle: FocusHandle,
    drive: Entity<DrivePage>,
}

impl Focusable for RootView {
    fn focus_handle(&self, _cx: &App) -> FocusHandle {
        self.focus_handle.clone()
    }
}

impl Render for RootView {
    fn render(&mut self, window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        div()
            .size_full()
            .flex()
            .flex_col()
            .bg(rgb(theme::BG))
            .relative()
            .track_focus(&self.focus_handle)
            .child(self.drive.clone())
            .children(Root::render_modal_layer(window, cx))
            .children(Root::render_notification_layer(window, cx))
    }
}
