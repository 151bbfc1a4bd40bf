//! # promptml
//!
//! Renders in-memory structured values — scalars, ordered containers, and
//! opaque objects — into an XML tag tree, handling self-referential and
//! mutually-referential graphs without recursing forever. On top of the
//! core renderer sits a fixed-shape prompt template assembled through
//! setters, plus a JSON definition format for building one from a file.

pub mod renderer;
pub mod template;
pub mod value;

pub use renderer::{Classification, RenderContext, ValueClassifier, XmlEscaper, XmlRenderer};
pub use template::{PromptDefinition, PromptTemplate, Struggle};
pub use value::{Container, ObjectId, ObjectRef, PromptObject, Renderable, Value};
