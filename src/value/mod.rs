pub mod json;
pub mod object;
pub mod types;

pub use object::*;
pub use types::*;
