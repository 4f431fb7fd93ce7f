pub mod blocks;
pub mod editing;
pub mod io;
pub mod parsing;

#[cfg(test)]
pub mod tests;

// Re-export key types for easier usage
pub use blocks::*;
pub use editing::*;
pub use parsing::{BlockOrder, ConvertOptions, convert, convert_markdown, looks_like_markdown};
