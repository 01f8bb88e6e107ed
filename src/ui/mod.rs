pub mod keys;
pub mod terminal;
pub mod theme;
pub mod view;

pub use keys::parse_key;
pub use terminal::TuiManager;
