pub mod validation;

pub use validation::{derive_name_from_path, is_reserved_word, validate_identifier};
