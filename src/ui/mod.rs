pub mod menu;

// Re-export commonly used types
pub use menu::{Menu, MenuError, Selection};
