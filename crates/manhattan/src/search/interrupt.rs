//! Cancellation points polled by both strategies.
//!
//! The search polls once per combination (exhaustive) and once per branch
//! expansion (branch-and-bound). A positive poll ends the call with the
//! solutions collected so far and `cancelled = true`.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

pub trait Interrupt {
    fn interrupted(&self) -> bool;
}

/// Never interrupts.
#[derive(Clone, Copy, Debug, Default)]
pub struct Never;

impl Interrupt for Never {
    #[inline]
    fn interrupted(&self) -> bool {
        false
    }
}

/// A flag owned by the caller, e.g. set from another thread or a UI handler.
impl Interrupt for AtomicBool {
    #[inline]
    fn interrupted(&self) -> bool {
        self.load(Ordering::Relaxed)
    }
}

impl<T: Interrupt + ?Sized> Interrupt for Arc<T> {
    #[inline]
    fn interrupted(&self) -> bool {
        (**self).interrupted()
    }
}

/// Wall-clock deadline.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Deadline(Instant);

impl Deadline {
    pub fn at(instant: Instant) -> Self {
        Self(instant)
    }

    pub fn after(budget: Duration) -> Self {
        Self(Instant::now() + budget)
    }
}

impl Interrupt for Deadline {
    #[inline]
    fn interrupted(&self) -> bool {
        Instant::now() >= self.0
    }
}
