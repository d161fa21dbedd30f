//! 窄终端的顶部标签栏
//!
//! 指示器在此布局下隐藏，活动标签靠高亮区分。

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::model::{menu_label, App, ShellView};
use crate::view::theme::{colors, Styles};

/// 渲染标签栏
pub fn render(app: &App, frame: &mut Frame, area: Rect, view: &ShellView) {
    let c = colors();
    let mut spans: Vec<Span> = Vec::new();
    let mut x = area.x;

    for id in &view.menu_ids {
        let label = menu_label(id);
        let cell = format!(" {label} ");
        let width = u16::try_from(cell.width()).unwrap_or(0);
        if x.saturating_add(width) > area.x.saturating_add(area.width) {
            break;
        }
        app.shell.record_menu_area(id, x, area.y, width, 1);
        x = x.saturating_add(width);

        let is_active = view.active_menu.as_deref() == Some(id.as_str());
        let style = if is_active {
            Styles::selected()
        } else {
            Style::default().fg(c.muted)
        };
        spans.push(Span::styled(cell, style));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
