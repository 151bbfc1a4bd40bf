pub mod renderer;
pub mod traits;
pub mod classify;
pub mod escape;

pub use renderer::*;
pub use traits::*;
pub use classify::*;
pub use escape::*;
