/// Generic text panel builders shared across console views.
pub mod panel;
/// Shared pagination engine and navigation controls.
pub mod pagination;
/// Pure parser helpers.
pub mod parse;
