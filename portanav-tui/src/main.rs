//! Portanav TUI
//!
//! ## 架构
//!
//! 采用 Elm Architecture (TEA) 模式：
//! - **Model**: 应用状态 (`model/`)
//! - **Message**: 事件消息 (`message/`)
//! - **Update**: 状态更新 (`update/`)
//! - **View**: UI 渲染 (`view/`)
//! - **Event**: 输入处理 (`event/`)
//! - **Backend**: 本地服务 (`backend/`)
//!
//! 导航语义全部在 portanav-core 中，终端只是其一种呈现面。
//! 可选的命令行参数是启动片段，例如 `portanav-tui '#educacion'`
//! 直接落在教育版块上。

mod app;
mod backend;
mod event;
mod message;
mod model;
mod update;
mod util;
mod view;

use std::time::Instant;

use anyhow::Result;

use backend::{ConfigService, LocalConfigService};
use util::{init_terminal, restore_terminal};

fn main() -> Result<(), anyhow::Error> {
    // 1. 加载配置
    let config = match LocalConfigService::new().and_then(|s| s.load_config()) {
        Ok(config) => config,
        Err(err) => {
            log::warn!("config unavailable, using defaults: {err:#}");
            backend::AppConfig::default()
        }
    };
    view::theme::set_theme_by_name(&config.theme);

    // 2. 启动片段（可选）
    let initial_fragment = std::env::args().nth(1);

    // 3. 创建应用实例（在进入备用屏幕之前，失败时保持终端可用）
    let (width, _) = crossterm::terminal::size().unwrap_or((120, 40));
    let mut app = model::App::new(&config, initial_fragment, width, Instant::now())?;

    // 4. 初始化终端
    let mut terminal = init_terminal()?;

    // 5. 运行主循环
    let result = app::run(&mut terminal, &mut app);

    // 6. 恢复终端（无论成功失败都执行）
    restore_terminal(&mut terminal)?;

    // 7. 返回结果
    result
}
