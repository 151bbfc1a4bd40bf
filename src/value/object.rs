use std::fmt;
use std::fs::File;
use std::rc::Rc;

use crate::value::types::{Container, Value};

/// Contract for values that render as their own nested document: an
/// explicit, ordered list of (name, value) pairs in declaration order.
pub trait Renderable {
    fn fields(&self) -> Vec<(String, Value)>;
}

/// Capability surface of an opaque object.
///
/// The classifier probes these in fixed precedence: nested document, then
/// container view, then text. A type overriding none of them has no usable
/// representation and renders as an empty element.
pub trait PromptObject {
    /// The object renders as a nested sub-document.
    fn as_renderable(&self) -> Option<&dyn Renderable> {
        None
    }

    /// The object exposes an ordered container view of itself.
    fn container_view(&self) -> Option<Container> {
        None
    }

    /// The object exposes a plain text representation.
    fn text_view(&self) -> Option<String> {
        None
    }
}

/// Identity of a shared object handle: the address of its allocation.
/// Reference identity, never structural equality.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ObjectId(usize);

/// Shared handle to an opaque object. Clones of a handle keep its identity.
#[derive(Clone)]
pub struct ObjectRef {
    inner: Rc<dyn PromptObject>,
}

impl ObjectRef {
    pub fn new(object: impl PromptObject + 'static) -> Self {
        Self {
            inner: Rc::new(object),
        }
    }

    pub fn id(&self) -> ObjectId {
        ObjectId(Rc::as_ptr(&self.inner) as *const () as usize)
    }

    pub fn object(&self) -> &dyn PromptObject {
        self.inner.as_ref()
    }
}

impl<T: PromptObject + 'static> From<Rc<T>> for ObjectRef {
    fn from(inner: Rc<T>) -> Self {
        Self { inner }
    }
}

impl fmt::Debug for ObjectRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ObjectRef").field(&self.id()).finish()
    }
}

/// File handles have no usable representation; they render as empty
/// elements like any other opaque object.
impl PromptObject for File {}
