//! CLI command implementations

pub mod inspect;
pub mod json_output;
pub mod render;
pub mod template;
pub mod validate;
