pub mod components;
pub mod layouts;
pub mod links;
pub mod pages;

// Re-exports for convenience
pub use components::listing_card;
pub use layouts::desktop::desktop_layout;

pub const MAIN_CSS: &str = include_str!("../../static/main.css");
