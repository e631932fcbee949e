//! Entity capability: a readable string identifier, nothing else.

use std::rc::Rc;
use std::sync::Arc;

/// Minimal entity contract.
///
/// Anything exposing a string id satisfies this; no other structure is
/// assumed, and implementors are never mutated by the helpers in this
/// crate. Uniqueness of ids is a caller-side convention and is not
/// checked here.
pub trait Identified {
    /// Returns the entity identifier.
    fn id(&self) -> &str;
}

impl<T: Identified + ?Sized> Identified for &T {
    fn id(&self) -> &str {
        (**self).id()
    }
}

impl<T: Identified + ?Sized> Identified for &mut T {
    fn id(&self) -> &str {
        (**self).id()
    }
}

impl<T: Identified + ?Sized> Identified for Box<T> {
    fn id(&self) -> &str {
        (**self).id()
    }
}

impl<T: Identified + ?Sized> Identified for Rc<T> {
    fn id(&self) -> &str {
        (**self).id()
    }
}

impl<T: Identified + ?Sized> Identified for Arc<T> {
    fn id(&self) -> &str {
        (**self).id()
    }
}
