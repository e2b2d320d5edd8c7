//! Turns a prospect record into titled, colored display sections.

pub mod formatter;
pub mod renderer;
pub mod schema;
pub mod templates;
pub mod traits;

pub use formatter::*;
pub use renderer::*;
pub use schema::*;
pub use templates::*;
pub use traits::*;

#[cfg(test)]
mod tests;
