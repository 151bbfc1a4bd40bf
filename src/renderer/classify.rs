use crate::renderer::traits::RenderContext;
use crate::value::{Container, ObjectId, Renderable, Value};

/// How one value renders. Object capabilities are probed here exactly once,
/// in fixed precedence, and the probed view rides along so the renderer
/// never asks twice.
pub enum Classification<'a> {
    /// Text, numeric, boolean or null content.
    Scalar,
    /// A literal ordered container.
    Container(&'a Container),
    /// An object rendering as its own nested document.
    Nested {
        id: ObjectId,
        renderable: &'a dyn Renderable,
    },
    /// An object exposing an ordered container view of itself.
    ContainerView { id: ObjectId, container: Container },
    /// An object exposing a plain text representation.
    Text(String),
    /// No usable representation: capability-less objects, resource handles,
    /// and any object already on the current path.
    Opaque,
}

/// Pure classification of a value against a traversal context.
pub struct ValueClassifier;

impl ValueClassifier {
    pub fn classify<'a>(&self, value: &'a Value, context: &RenderContext) -> Classification<'a> {
        match value {
            Value::Container(container) => Classification::Container(container),
            Value::Object(object) => {
                let id = object.id();
                // An object already on the path is opaque no matter what it
                // could do; this check precedes every capability probe.
                if context.contains(id) {
                    return Classification::Opaque;
                }
                let inner = object.object();
                if let Some(renderable) = inner.as_renderable() {
                    return Classification::Nested { id, renderable };
                }
                if let Some(container) = inner.container_view() {
                    return Classification::ContainerView { id, container };
                }
                if let Some(text) = inner.text_view() {
                    return Classification::Text(text);
                }
                Classification::Opaque
            }
            _ => Classification::Scalar,
        }
    }
}
