use super::{COL_MODIFIED_WIDTH, COL_NAME_WIDTH, COL_SHARED_WIDTH, COL_SIZE_WIDTH};
use crate::pages::drive::view::{icons, svg_icon};
use crate::pages::drive::DrivePage;
use crate::services::listing::{IconSpec, ListingRow, RowAction};
use crate::ui::theme::theme;
use gpui::prelude::*;
use gpui::*;

pub fn render(item: &ListingRow, ix: usize, cx: &mut Context<DrivePage>) -> impl IntoElement {
    let name_cell = div()
        .id(("row-name", ix))
        .flex()
        .items_center()
        .gap_2()
        .cursor_pointer()
        .child(item_icon(item.icon))
        .child(item.name.clone());

    let name_cell = match &item.action {
        RowAction::OpenFolder { id, name } => {
            let (id, name) = (id.clone(), name.clone());
            name_cell
                .hover(|style| style.bg(rgb(theme::BG_HOVER)))
                .on_click(cx.listener(move |this, _, _, cx| this.enter_folder(&id, &name, cx)))
        }
        // File links are placeholders.
        RowAction::Inert => name_cell.hover(|style| style.underline()),
    };

    div()
        .h(px(48.0))
        .flex()
        .items_center()
        .border_b_1()
        .border_color(rgb(theme::BORDER))
        .hover(|style| style.bg(rgb(theme::GRAY_50)))
        .text_sm()
        .text_color(rgb(theme::FG))
        .child(
            div()
                .w(px(COL_NAME_WIDTH))
                .flex_shrink_0()
                .font_weight(gpui::FontWeight::MEDIUM)
                .overflow_hidden()
                .whitespace_nowrap()
                .child(name_cell),
        )
        .child(div().w(px(COL_SIZE_WIDTH)).flex_shrink_0().child(item.size.clone()))
        .child(
            div()
                .w(px(COL_MODIFIED_WIDTH))
                .flex_shrink_0()
                .child(item.modified.clone()),
        )
        .child(
            div()
                .w(px(COL_SHARED_WIDTH))
                .flex_shrink_0()
                .when(item.shows_shared_badge(), |this| this.child(shared_badge())),
        )
}

fn item_icon(spec: IconSpec) -> impl IntoElement {
    let color = spec.color.unwrap_or(theme::FG);
    svg_icon(spec.glyph.asset_path()).size_5().text_color(rgb(color))
}

fn shared_badge() -> impl IntoElement {
    div()
        .flex()
        .items_center()
        .gap_1()
        .px(px(8.0))
        .py(px(2.0))
        .rounded_full()
        .border_1()
        .border_color(rgb(theme::BORDER))
        .text_xs()
        .font_weight(gpui::FontWeight::SEMIBOLD)
        .child(svg_icon(icons::USERS).size_3())
        .child("Shared")
}
