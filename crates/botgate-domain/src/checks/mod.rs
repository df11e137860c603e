//! Individual publish rules. Each returns the first violation it finds.

pub mod endpoints;
pub mod keys;
pub mod manifest;
pub mod project_name;
pub mod utils;
