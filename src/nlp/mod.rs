pub mod conll;
pub mod invoker;
pub mod token;

// Re-export commonly used types
pub use conll::{DEFAULT_TRAILING_LINES, extract_table};
pub use invoker::DependencyParser;
pub use token::{PosTag, Token};
