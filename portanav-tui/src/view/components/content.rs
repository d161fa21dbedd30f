//! 内容面板组件

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::model::{section_body, App, ShellView};
use crate::view::theme::{colors, Styles};

/// 渲染当前活动面板的内容
pub fn render(app: &App, frame: &mut Frame, area: Rect, view: &ShellView) {
    let c = colors();

    // 过渡期间没有活动面板，保留空框。
    let Some(active) = view.active_panels.last() else {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(c.border));
        frame.render_widget(block, area);
        return;
    };

    let heading = app
        .router
        .registry()
        .get(active)
        .map_or("", |s| s.accessible_label.as_str());

    let mut heading_style = Styles::title();
    if view.focused_heading.as_deref() == Some(active.as_str()) {
        heading_style = heading_style.add_modifier(Modifier::REVERSED);
    }

    let block = Block::default()
        .title(format!(" {heading} "))
        .title_style(heading_style)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(c.border));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let lines: Vec<Line> = section_body(active)
        .iter()
        .map(|line| Line::from(*line))
        .collect();
    let body = Paragraph::new(lines)
        .style(Style::default().fg(c.fg))
        .wrap(Wrap { trim: false })
        .scroll((view.scroll_offset, 0));
    frame.render_widget(body, inner);
}
