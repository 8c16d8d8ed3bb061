//! # Write Queue
//!
//! Every mutation is a read-modify-write of the whole collection, and the
//! store offers no locking. Two overlapping mutations would each read the same
//! snapshot and the second write would discard the first one's change.
//!
//! [`WriteQueue`] admits one operation at a time, in the order callers
//! arrived. Each caller draws a ticket; the operation runs when its ticket is
//! served, and serving advances when the operation finishes, even by panic.

use std::sync::{Condvar, Mutex, MutexGuard, PoisonError};

#[derive(Debug, Default)]
struct Tickets {
    next: u64,
    serving: u64,
}

#[derive(Debug, Default)]
pub struct WriteQueue {
    tickets: Mutex<Tickets>,
    turn: Condvar,
}

impl WriteQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run `op` once every earlier caller's operation has completed.
    pub fn run<T>(&self, op: impl FnOnce() -> T) -> T {
        let mut tickets = self.lock();
        let ticket = tickets.next;
        tickets.next += 1;
        while tickets.serving != ticket {
            tickets = self
                .turn
                .wait(tickets)
                .unwrap_or_else(PoisonError::into_inner);
        }
        drop(tickets);

        let _turn = Turn { queue: self };
        op()
    }

    /// Number of operations waiting or running.
    pub fn pending(&self) -> u64 {
        let tickets = self.lock();
        tickets.next - tickets.serving
    }

    fn lock(&self) -> MutexGuard<'_, Tickets> {
        self.tickets.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Hands the queue to the next ticket when dropped.
struct Turn<'a> {
    queue: &'a WriteQueue,
}

impl Drop for Turn<'_> {
    fn drop(&mut self) {
        self.queue.lock().serving += 1;
        self.queue.turn.notify_all();
    }
}
