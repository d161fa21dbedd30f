//! 左侧菜单面板组件
//!
//! 每帧渲染后把菜单项的布局位置写回 shell，
//! 指示器和鼠标命中都基于这些位置。

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::model::{menu_label, App, ShellView};
use crate::view::theme::{colors, Styles};

/// 渲染菜单面板
pub fn render(app: &App, frame: &mut Frame, area: Rect, view: &ShellView) {
    let c = colors();

    let block = Block::default()
        .title(" Navegación ")
        .title_style(Styles::title())
        .borders(Borders::ALL)
        .border_style(Style::default().fg(c.border));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    for (i, id) in view.menu_ids.iter().enumerate() {
        let Ok(row_index) = u16::try_from(i) else {
            break;
        };
        let row = inner.y.saturating_add(row_index);
        if row >= inner.y.saturating_add(inner.height) {
            break;
        }
        app.shell.record_menu_area(id, inner.x, row, inner.width, 1);

        let is_active = view.active_menu.as_deref() == Some(id.as_str());
        let is_focused = view.focused_menu.as_deref() == Some(id.as_str());
        let is_pressed = view.pressed_menu.as_deref() == Some(id.as_str());
        let has_indicator = !view.indicator_hidden && view.indicator_offset == row;

        let marker = if has_indicator { "▌" } else { " " };
        let mut style = if is_active {
            Styles::selected()
        } else {
            Style::default().fg(c.fg)
        };
        if is_focused {
            style = style.add_modifier(Modifier::UNDERLINED);
        }
        if is_pressed {
            style = style.add_modifier(Modifier::DIM);
        }

        let line = Line::from(vec![
            Span::styled(marker, Style::default().fg(c.highlight)),
            Span::styled(format!(" {} {}", i + 1, menu_label(id)), style),
        ]);
        let cell = Rect::new(inner.x, row, inner.width, 1);
        frame.render_widget(Paragraph::new(line), cell);
    }
}
