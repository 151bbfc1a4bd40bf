pub mod definition;
pub mod fields;
pub mod template;

pub use definition::*;
pub use template::*;
