use std::cell::RefCell;
use std::fmt;

/// Ordered record of the arguments a double received.
pub struct CallLog<A> {
    calls: RefCell<Vec<A>>,
}

impl<A: Clone> CallLog<A> {
    pub fn new() -> Self {
        Self {
            calls: RefCell::new(Vec::new()),
        }
    }

    pub fn record(&self, call: A) {
        self.calls.borrow_mut().push(call);
    }

    pub fn calls(&self) -> Vec<A> {
        self.calls.borrow().clone()
    }

    pub fn count(&self) -> usize {
        self.calls.borrow().len()
    }
}

impl<A: Clone> Default for CallLog<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A: fmt::Debug> fmt::Debug for CallLog<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.calls.borrow().iter()).finish()
    }
}
