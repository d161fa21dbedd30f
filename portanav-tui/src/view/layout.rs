//! 主布局渲染

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::Paragraph,
    Frame,
};

use crate::model::App;

use super::components;
use super::theme::colors;

/// 渲染主布局
pub fn render(app: &App, frame: &mut Frame) {
    let size = frame.area();

    if app.loading {
        render_loader(frame, size);
        return;
    }

    let view = app.shell.view();

    // 三层布局：标题栏 + 主内容区 + 状态栏
    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // 标题栏
            Constraint::Min(1),    // 主内容区
            Constraint::Length(1), // 状态栏
        ])
        .split(size);

    let title_area = main_layout[0];
    let content_area = main_layout[1];
    let status_area = main_layout[2];

    render_title_bar(frame, title_area, &view.document_title);

    // 窄终端换用顶部标签布局，宽终端用左侧菜单布局。
    if size.width <= app.mobile_breakpoint {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1), Constraint::Min(1)])
            .split(content_area);
        components::tabs::render(app, frame, rows[0], &view);
        components::content::render(app, frame, rows[1], &view);
    } else {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(24), Constraint::Min(1)])
            .split(content_area);
        components::menu::render(app, frame, columns[0], &view);
        components::content::render(app, frame, columns[1], &view);
    }

    components::statusbar::render(app, frame, status_area, &view);
}

/// 渲染标题栏
fn render_title_bar(frame: &mut Frame, area: Rect, title: &str) {
    let c = colors();
    let bar = Paragraph::new(format!(" {title}"))
        .style(Style::default().bg(c.highlight).fg(c.selected_fg));
    frame.render_widget(bar, area);
}

/// 启动画面，500ms 后消失
fn render_loader(frame: &mut Frame, area: Rect) {
    let c = colors();
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(45),
            Constraint::Length(1),
            Constraint::Percentage(45),
        ])
        .split(area);

    let splash = Paragraph::new("Cargando portafolio…")
        .alignment(Alignment::Center)
        .style(Style::default().fg(c.muted));
    frame.render_widget(splash, rows[1]);
}
