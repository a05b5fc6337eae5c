pub mod config;
pub mod error;
pub mod parse;
pub mod problem;
pub mod validate;
pub mod wasm;

pub use config::ValidationOptions;
pub use problem::{Problem, ProblemInfo, ProblemKind};
pub use validate::{check_node, check_pipeline, validate, validate_document, validate_with};
