//! 状态栏组件
//!
//! 左侧显示辅助播报文本，中间是快捷键提示，右侧是临时提示消息。

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::model::{App, ShellView};
use crate::view::theme::{colors, Styles};

/// 渲染状态栏
pub fn render(app: &App, frame: &mut Frame, area: Rect, view: &ShellView) {
    let c = colors();
    let mut spans: Vec<Span> = Vec::new();

    if !view.live_region.is_empty() {
        spans.push(Span::styled(
            format!(" {} ", view.live_region),
            Style::default().fg(c.selected_fg).add_modifier(Modifier::ITALIC),
        ));
        spans.push(Span::raw("│ "));
    }
    spans.push(Span::styled("1-7", Styles::hint_key()));
    spans.push(Span::styled(" secciones │ ", Styles::hint_desc()));
    spans.push(Span::styled("↑↓", Styles::hint_key()));
    spans.push(Span::styled(" mover │ ", Styles::hint_desc()));
    spans.push(Span::styled("Esc", Styles::hint_key()));
    spans.push(Span::styled(" atrás │ ", Styles::hint_desc()));
    spans.push(Span::styled("Alt+Q", Styles::hint_key()));
    spans.push(Span::styled(" salir", Styles::hint_desc()));

    // 右侧：临时提示消息优先，否则显示当前片段。
    let right = match &app.status_message {
        Some(message) => Some((
            format!("{message} "),
            Style::default().fg(c.success).add_modifier(Modifier::BOLD),
        )),
        None => app
            .history
            .current_fragment()
            .map(|fragment| (format!("{fragment} "), Style::default().fg(c.selected_fg))),
    };
    if let Some((text, style)) = right {
        let used: usize = spans.iter().map(|s| s.content.width()).sum();
        let pad = usize::from(area.width)
            .saturating_sub(used)
            .saturating_sub(text.width());
        spans.push(Span::raw(" ".repeat(pad)));
        spans.push(Span::styled(text, style));
    }

    let bar = Paragraph::new(Line::from(spans)).style(Styles::statusbar());
    frame.render_widget(bar, area);
}
