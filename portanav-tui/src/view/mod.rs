//! View rendering

pub mod components;
pub mod layout;
pub mod theme;

pub use layout::render;
