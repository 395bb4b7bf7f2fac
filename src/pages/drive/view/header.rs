use super::{icons, svg_icon};
use crate::models::item::ROOT_NAME;
use crate::pages::drive::DrivePage;
use crate::ui::theme::theme;
use gpui::prelude::*;
use gpui::*;
use gpui_component::input::TextInput;

pub fn render(
    page: &mut DrivePage,
    _window: &mut Window,
    _cx: &mut Context<DrivePage>,
) -> impl IntoElement {
    div()
        .h(px(64.0))
        .flex()
        .items_center()
        .flex_shrink_0()
        .px(px(24.0))
        .border_b_1()
        .border_color(rgb(theme::BORDER))
        .bg(rgb(theme::BG))
        .child(
            div()
                .flex()
                .items_center()
                .gap_2()
                .text_xl()
                .font_weight(gpui::FontWeight::SEMIBOLD)
                .text_color(rgb(theme::FG))
                .child(svg_icon(icons::HARD_DRIVE).size_6())
                .child(ROOT_NAME),
        )
        .child(
            div()
                .ml_auto()
                .flex()
                .items_center()
                .gap_4()
                .child(
                    // Search box has no filtering wired to it.
                    div()
                        .w(px(256.0))
                        .flex()
                        .items_center()
                        .gap_2()
                        .child(
                            svg_icon(icons::SEARCH)
                                .size_4()
                                .text_color(rgb(theme::FG_SECONDARY)),
                        )
                        .child(div().flex_1().child(TextInput::new(&page.search_input))),
                )
                .child(avatar("JD")),
        )
}

fn avatar(initials: &'static str) -> impl IntoElement {
    div()
        .size(px(32.0))
        .flex()
        .items_center()
        .justify_center()
        .rounded_full()
        .bg(rgb(theme::MUTED_BG))
        .text_sm()
        .text_color(rgb(theme::FG))
        .child(initials)
}
