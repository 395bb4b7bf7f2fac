use crate::pages::drive::DrivePage;
use crate::ui::theme::theme;
use gpui::*;
use gpui_component::Icon;

pub mod header;
pub mod listing;
pub mod sidebar;

pub(crate) mod icons {
    pub const HARD_DRIVE: &str = "icons/hard-drive.svg";
    pub const SEARCH: &str = "icons/search.svg";
    pub const UPLOAD: &str = "icons/upload.svg";
    pub const SHARE: &str = "icons/share.svg";
    pub const STAR: &str = "icons/star.svg";
    pub const TRASH: &str = "icons/trash.svg";
    pub const USERS: &str = "icons/users.svg";
}

pub fn render(
    page: &mut DrivePage,
    window: &mut Window,
    cx: &mut Context<DrivePage>,
) -> impl IntoElement {
    div()
        .size_full()
        .flex()
        .flex_col()
        .bg(rgb(theme::BG))
        .track_focus(&page.focus_handle)
        .child(header::render(page, window, cx))
        .child(
            div()
                .flex()
                .flex_row()
                .flex_grow()
                .min_h(px(0.0))
                .overflow_hidden()
                .child(
                    div()
                        .w(px(224.0))
                        .h_full()
                        .flex_shrink_0()
                        .border_r_1()
                        .border_color(rgb(theme::BORDER))
                        .child(sidebar::render(page, window, cx)),
                )
                .child(
                    div()
                        .flex_1()
                        .min_w(px(0.0))
                        .flex()
                        .flex_col()
                        .child(listing::render(page, window, cx)),
                ),
        )
}

pub(crate) fn svg_icon(path: &'static str) -> Icon {
    Icon::new(Icon::empty()).path(path)
}
