pub mod history;
pub mod navigate;
pub mod render;
pub mod search;
pub mod show;
