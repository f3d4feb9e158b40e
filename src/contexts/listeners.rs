use std::cell::RefCell;
use std::fmt;
use std::ptr;
use std::rc::Rc;

use thiserror::Error;

/// Errors returned when registering or unregistering listeners.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ListenerError {
    #[error("listener is already registered")]
    AlreadyRegistered,
    #[error("listener is not registered")]
    NotRegistered,
}

/// Ordered set of listeners, compared by identity.
///
/// Notification follows registration order. The set may be changed from
/// inside a callback: a listener removed mid-cycle is skipped if the cycle
/// has not reached it yet, and a listener added mid-cycle waits for the next
/// cycle.
pub struct ListenerSet<L: ?Sized> {
    listeners: RefCell<Vec<Rc<L>>>,
}

impl<L: ?Sized> ListenerSet<L> {
    pub fn new() -> Self {
        Self {
            listeners: RefCell::new(Vec::new()),
        }
    }

    pub fn register(&self, listener: Rc<L>) -> Result<(), ListenerError> {
        if self.contains(&listener) {
            return Err(ListenerError::AlreadyRegistered);
        }
        self.listeners.borrow_mut().push(listener);
        Ok(())
    }

    pub fn unregister(&self, listener: &Rc<L>) -> Result<(), ListenerError> {
        let mut listeners = self.listeners.borrow_mut();
        let position = listeners
            .iter()
            .position(|registered| same_listener(registered, listener))
            .ok_or(ListenerError::NotRegistered)?;
        listeners.remove(position);
        Ok(())
    }

    pub fn contains(&self, listener: &Rc<L>) -> bool {
        self.listeners
            .borrow()
            .iter()
            .any(|registered| same_listener(registered, listener))
    }

    pub fn len(&self) -> usize {
        self.listeners.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.borrow().is_empty()
    }

    /// Invokes `callback` once per registered listener and returns how many
    /// listeners were reached.
    pub fn notify(&self, mut callback: impl FnMut(&L)) -> usize {
        // The borrow must not be held across callbacks, they may re-enter.
        let snapshot: Vec<Rc<L>> = self.listeners.borrow().clone();
        let mut notified = 0;
        for listener in snapshot {
            if !self.contains(&listener) {
                continue;
            }
            callback(&listener);
            notified += 1;
        }
        notified
    }
}

impl<L: ?Sized> Default for ListenerSet<L> {
    fn default() -> Self {
        Self::new()
    }
}

impl<L: ?Sized> fmt::Debug for ListenerSet<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListenerSet")
            .field("len", &self.len())
            .finish()
    }
}

// Data addresses only; vtable pointers are not stable across codegen units.
fn same_listener<L: ?Sized>(a: &Rc<L>, b: &Rc<L>) -> bool {
    ptr::addr_eq(Rc::as_ptr(a), Rc::as_ptr(b))
}
