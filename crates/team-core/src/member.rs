//! Identity-compared member handle

use serde::{Serialize, Serializer};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::Deref;
use std::sync::Arc;

/// Shared handle to a team member.
///
/// Equality and hashing follow the allocation, not the value: a clone of a
/// handle is the same member, two handles built with [`Member::new`] are
/// always different members even when their values compare equal.
///
/// # Examples
///
/// ```rust
/// use team_core::Member;
///
/// let a = Member::new("ranger");
/// let b = Member::new("ranger");
///
/// assert_eq!(a, a.clone());
/// assert_ne!(a, b);
/// ```
pub struct Member<T> {
    inner: Arc<T>,
}

impl<T> Member<T> {
    /// Wrap a value as a new, distinct member
    pub fn new(value: T) -> Self {
        Self {
            inner: Arc::new(value),
        }
    }

    /// Whether both handles refer to the same member
    pub fn same(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl<T> From<Arc<T>> for Member<T> {
    fn from(inner: Arc<T>) -> Self {
        Self { inner }
    }
}

impl<T> Clone for Member<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T> PartialEq for Member<T> {
    fn eq(&self, other: &Self) -> bool {
        self.same(other)
    }
}

impl<T> Eq for Member<T> {}

impl<T> Hash for Member<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::ptr::hash(Arc::as_ptr(&self.inner), state);
    }
}

impl<T> Deref for Member<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.inner
    }
}

impl<T> AsRef<T> for Member<T> {
    fn as_ref(&self) -> &T {
        &self.inner
    }
}

impl<T: fmt::Debug> fmt::Debug for Member<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&*self.inner, f)
    }
}

impl<T: fmt::Display> fmt::Display for Member<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&*self.inner, f)
    }
}

impl<T: Serialize> Serialize for Member<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.inner.serialize(serializer)
    }
}
