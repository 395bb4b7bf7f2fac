use crate::pages::drive::DrivePage;
use crate::ui::theme::theme;
use gpui::prelude::*;
use gpui::*;

pub mod row;

pub(crate) const COL_NAME_WIDTH: f32 = 400.0;
pub(crate) const COL_SIZE_WIDTH: f32 = 120.0;
pub(crate) const COL_MODIFIED_WIDTH: f32 = 160.0;
pub(crate) const COL_SHARED_WIDTH: f32 = 120.0;

pub fn render(
    page: &mut DrivePage,
    _window: &mut Window,
    cx: &mut Context<DrivePage>,
) -> AnyElement {
    let rows = page.model.rows();

    div()
        .id("drive-main")
        .size_full()
        .flex()
        .flex_col()
        .overflow_y_scroll()
        .p(px(24.0))
        .child(render_breadcrumbs(page, cx))
        .child(render_header_row())
        .children(
            rows.iter()
                .enumerate()
                .map(|(ix, item)| row::render(item, ix, cx).into_any_element()),
        )
        .into_any_element()
}

fn render_breadcrumbs(page: &DrivePage, cx: &mut Context<DrivePage>) -> impl IntoElement {
    let crumbs = page.model.breadcrumbs().to_vec();
    let mut trail = div().mb(px(16.0)).flex().items_center().gap_1();

    for (i, crumb) in crumbs.into_iter().enumerate() {
        if i > 0 {
            trail = trail.child(
                div()
                    .mx(px(4.0))
                    .text_sm()
                    .text_color(rgb(theme::FG_SECONDARY))
                    .child("/"),
            );
        }
        trail = trail.child(
            div()
                .id(("crumb", i))
                .cursor_pointer()
                .text_sm()
                .font_weight(gpui::FontWeight::MEDIUM)
                .text_color(rgb(theme::LINK))
                .hover(|style| style.underline())
                .on_click(cx.listener(move |this, _, _, cx| this.jump_to_breadcrumb(i, cx)))
                .child(crumb.name),
        );
    }

    trail
}

fn render_header_row() -> impl IntoElement {
    div()
        .h(px(40.0))
        .flex()
        .items_center()
        .border_b_1()
        .border_color(rgb(theme::BORDER))
        .text_sm()
        .font_weight(gpui::FontWeight::MEDIUM)
        .text_color(rgb(theme::FG_SECONDARY))
        .child(div().w(px(COL_NAME_WIDTH)).flex_shrink_0().child("Name"))
        .child(div().w(px(COL_SIZE_WIDTH)).flex_shrink_0().child("Size"))
        .child(div().w(px(COL_MODIFIED_WIDTH)).flex_shrink_0().child("Modified"))
        .child(div().w(px(COL_SHARED_WIDTH)).flex_shrink_0().child("Shared"))
}
