//! Work the controller asks for while it holds the page borrowed.
//!
//! Browser callbacks need an `Rc` of the whole app, which the `Page`
//! implementation cannot reach. Requests are queued here and installed by the
//! app right after the controller returns.

use std::cell::RefCell;
use std::time::Duration;
use vitrine_kernel::page::{Observer, Timer};

#[derive(Debug, Clone, PartialEq)]
pub enum Request<N> {
    Observe(Observer, N),
    Unobserve(Observer, N),
    Frame,
    Timeout(Duration, Timer),
}

#[derive(Debug)]
pub struct Requests<N> {
    queue: RefCell<Vec<Request<N>>>,
}

impl<N> Default for Requests<N> {
    fn default() -> Self {
        Self { queue: RefCell::new(Vec::new()) }
    }
}

impl<N: PartialEq> Requests<N> {
    /// Queues `request`. A second frame request before the next drain is dropped.
    pub fn push(&self, request: Request<N>) {
        let mut queue = self.queue.borrow_mut();
        if matches!(request, Request::Frame) && queue.contains(&Request::Frame) {
            return;
        }
        queue.push(request);
    }

    /// Empties the queue, oldest first.
    pub fn drain(&self) -> Vec<Request<N>> {
        std::mem::take(&mut *self.queue.borrow_mut())
    }

    pub fn len(&self) -> usize {
        self.queue.borrow().len()
    }
}

/// Milliseconds for `setTimeout`, saturating at the largest delay browsers accept.
pub fn timeout_millis(delay: Duration) -> i32 {
    i32::try_from(delay.as_millis()).unwrap_or(i32::MAX)
}
