//! 应用主循环
//!
//! 每轮循环：渲染 UI → 推进路由器的延迟任务 → 推进 UI 定时器 →
//! 轮询输入（100ms 超时）→ 分发消息并更新状态。
//!
//! 先渲染再推进路由器，菜单布局位置已写回 shell，
//! 指示器的偏移读取因此总是基于最新布局。

use std::time::{Duration, Instant};

use anyhow::Result;

use crate::event;
use crate::model::{App, UiTask, TOAST_VISIBLE};
use crate::update;
use crate::util::{sync_window_title, Term};
use crate::view;

/// 运行应用主循环
pub fn run(terminal: &mut Term, app: &mut App) -> Result<()> {
    loop {
        // 1. 渲染 UI
        terminal.draw(|frame| {
            view::render(app, frame);
        })?;

        // 2. 同步终端窗口标题
        let title = app.shell.view().document_title;
        if !title.is_empty() && app.last_window_title.as_deref() != Some(title.as_str()) {
            sync_window_title(terminal, &title)?;
            app.last_window_title = Some(title);
        }

        // 3. 检查是否应该退出
        if app.should_quit {
            break;
        }

        // 4. 推进延迟任务
        let now = Instant::now();
        app.router.pump(now);
        pump_ui_tasks(app, now);

        // 5. 轮询事件（100ms 超时）
        if let Some(event) = event::poll_event(Duration::from_millis(100))? {
            // 6. 处理事件，获取消息
            let msg = event::handle_event(event, app);

            // 7. 更新状态
            update::update(app, msg, Instant::now());
        }
    }

    Ok(())
}

fn pump_ui_tasks(app: &mut App, now: Instant) {
    for task in app.timers.take_due(now) {
        match task {
            UiTask::LoaderDone => {
                app.loading = false;
                app.set_status("Sitio mejorado");
                app.timers.schedule_after(now, TOAST_VISIBLE, UiTask::HideToast);
            }
            UiTask::HideToast => app.clear_status(),
        }
    }
}
