//! 视图组件

pub mod content;
pub mod menu;
pub mod statusbar;
pub mod tabs;
