//! Non-owning delegate slot shared by every holder in the crate.
//!
//! A slot keeps a [`Weak`] handle to its delegate, so assigning a delegate
//! never keeps it alive. Once the last `Rc` owning the delegate is dropped the
//! slot behaves exactly as if it had been cleared.

use std::fmt;
use std::rc::{Rc, Weak};

use crate::utils::error::Result;

pub struct DelegateSlot<T: ?Sized> {
    target: Option<Weak<T>>,
}

impl<T: ?Sized> DelegateSlot<T> {
    pub fn new() -> Self {
        Self { target: None }
    }

    /// Replace the current delegate. `None` empties the slot.
    pub fn set(&mut self, delegate: Option<&Rc<T>>) {
        self.target = delegate.map(Rc::downgrade);
    }

    pub fn clear(&mut self) {
        self.target = None;
    }

    /// Live delegate, if one is assigned and still owned elsewhere.
    pub fn get(&self) -> Option<Rc<T>> {
        self.target.as_ref().and_then(Weak::upgrade)
    }

    pub fn is_set(&self) -> bool {
        self.target
            .as_ref()
            .is_some_and(|weak| weak.strong_count() > 0)
    }

    /// Call `f` on the delegate once. Returns `Ok(false)` without calling
    /// anything when the slot is empty; errors from `f` are returned as-is.
    pub fn notify<F>(&self, f: F) -> Result<bool>
    where
        F: FnOnce(&T) -> Result<()>,
    {
        match self.get() {
            Some(delegate) => {
                f(&*delegate)?;
                Ok(true)
            }
            None => {
                tracing::trace!("no delegate assigned, skipping notification");
                Ok(false)
            }
        }
    }

    /// Ask the delegate for a value. `None` when the slot is empty.
    pub fn query<R, F>(&self, f: F) -> Option<R>
    where
        F: FnOnce(&T) -> R,
    {
        self.get().map(|delegate| f(&*delegate))
    }
}

impl<T: ?Sized> Default for DelegateSlot<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ?Sized> fmt::Debug for DelegateSlot<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DelegateSlot")
            .field("is_set", &self.is_set())
            .finish()
    }
}
