//! Token queue: the preview of upcoming tokens.

mod token_queue;

pub use token_queue::{TokenGenerator, TokenQueue};
