pub mod classify;
pub mod render;
