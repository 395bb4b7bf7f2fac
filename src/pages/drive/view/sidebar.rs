use super::{icons, svg_icon};
use crate::models::item::ROOT_NAME;
use crate::pages::drive::DrivePage;
use crate::ui::theme::theme;
use gpui::prelude::*;
use gpui::*;

pub fn render(
    page: &mut DrivePage,
    _window: &mut Window,
    cx: &mut Context<DrivePage>,
) -> impl IntoElement {
    let at_root = page.model.nav().is_root();

    div()
        .size_full()
        .flex()
        .flex_col()
        .p(px(16.0))
        .bg(rgb(theme::BG))
        .child(div().mb(px(24.0)).child(upload_button(cx)))
        .child(
            div()
                .flex()
                .flex_col()
                .gap_1()
                .child(
                    nav_link("nav-my-drive", icons::HARD_DRIVE, ROOT_NAME, at_root).on_click(
                        cx.listener(|this, _, _, cx| this.reset_to_root(cx)),
                    ),
                )
                .child(nav_link("nav-shared", icons::SHARE, "Shared with me", false))
                .child(nav_link("nav-starred", icons::STAR, "Starred", false))
                .child(nav_link("nav-trash", icons::TRASH, "Trash", false)),
        )
        .child(div().my(px(16.0)).h(px(1.0)).w_full().bg(rgb(theme::BORDER)))
        .child(storage_usage(page))
}

fn upload_button(cx: &mut Context<DrivePage>) -> impl IntoElement {
    div()
        .id("upload")
        .w_full()
        .h(px(36.0))
        .flex()
        .items_center()
        .justify_center()
        .gap_2()
        .rounded(px(6.0))
        .cursor_pointer()
        .bg(rgb(theme::PRIMARY))
        .hover(|style| style.bg(rgb(theme::PRIMARY_HOVER)))
        .text_sm()
        .text_color(rgb(theme::PRIMARY_FG))
        .on_click(cx.listener(|this, _, window, cx| this.upload(window, cx)))
        .child(svg_icon(icons::UPLOAD).size_4().text_color(rgb(theme::PRIMARY_FG)))
        .child("New Upload")
}

fn nav_link(
    id: &'static str,
    icon: &'static str,
    label: &'static str,
    active: bool,
) -> Stateful<Div> {
    div()
        .id(id)
        .w_full()
        .flex()
        .items_center()
        .gap_2()
        .px(px(12.0))
        .py(px(8.0))
        .rounded(px(6.0))
        .cursor_pointer()
        .when(active, |this| this.bg(rgb(theme::BG_HOVER)))
        .hover(|style| style.bg(rgb(theme::BG_HOVER)))
        .child(svg_icon(icon).size_4().text_color(rgb(theme::GRAY_600)))
        .child(div().text_sm().text_color(rgb(theme::FG)).child(label))
}

fn storage_usage(page: &DrivePage) -> impl IntoElement {
    let usage = page.model.storage();

    div()
        .flex()
        .flex_col()
        .text_sm()
        .text_color(rgb(theme::FG_SECONDARY))
        .child(
            div()
                .mb(px(8.0))
                .flex()
                .items_center()
                .gap_1()
                .child(div().size(px(8.0)).rounded_full().bg(rgb(theme::USAGE)))
                .child(usage.summary()),
        )
        .child(
            div()
                .h(px(8.0))
                .w_full()
                .rounded_full()
                .bg(rgb(theme::MUTED_BG))
                .child(
                    div()
                        .h_full()
                        .w(relative(usage.fill_fraction()))
                        .rounded_full()
                        .bg(rgb(theme::USAGE)),
                ),
        )
        .child(div().mt(px(4.0)).child(usage.detail()))
}
