pub mod colors;
mod header;
mod input;
mod layout;
mod summary;
mod tree_view;

pub use colors::ColorScheme;
pub use input::{handle_key, Command, ConfirmAction, InputMode};
pub use layout::render_ui;
