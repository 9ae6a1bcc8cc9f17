//! Value parsing, literal rendering, and declaration composition.

pub mod composer;
pub mod expression;
pub mod merger;
pub mod parser;
mod scanner;
pub mod serializer;

pub use composer::{append_export, compose, compose_declaration, compose_field_declaration};
pub use merger::{MergeOutcome, MergeTarget, merge};
pub use parser::parse_values;
pub use serializer::serialize;
