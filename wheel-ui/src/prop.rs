//! Callback props for component args.
//!
//! ## Usage
//!
//! Store change handlers and label formatters in `*Args` structs while keeping
//! the structs `Clone + PartialEq`.

use std::{fmt, sync::Arc};

/// Stable, comparable callback handle for `Fn(T) -> R`.
///
/// Compares by identity (`Arc::ptr_eq`), so two handles are equal only when
/// they were cloned from the same closure.
///
/// ```
/// use wheel_ui::CallbackWith;
///
/// let double = CallbackWith::new(|value: i32| value * 2);
/// let same = double.clone();
/// assert_eq!(double.call(21), 42);
/// assert_eq!(double, same);
/// assert_ne!(double, CallbackWith::new(|value: i32| value * 2));
/// ```
pub struct CallbackWith<T, R = ()> {
    inner: Arc<dyn Fn(T) -> R + Send + Sync>,
}

impl<T, R> CallbackWith<T, R> {
    /// Creates a callback handle from a closure.
    pub fn new<F>(handler: F) -> Self
    where
        F: Fn(T) -> R + Send + Sync + 'static,
    {
        Self {
            inner: Arc::new(handler),
        }
    }

    /// Invokes the callback.
    pub fn call(&self, value: T) -> R {
        (self.inner)(value)
    }
}

impl<T, R, F> From<F> for CallbackWith<T, R>
where
    F: Fn(T) -> R + Send + Sync + 'static,
{
    fn from(handler: F) -> Self {
        Self::new(handler)
    }
}

impl<T, R> Clone for CallbackWith<T, R> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T, R> PartialEq for CallbackWith<T, R> {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl<T, R> Eq for CallbackWith<T, R> {}

impl<T, R> fmt::Debug for CallbackWith<T, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CallbackWith").finish_non_exhaustive()
    }
}
