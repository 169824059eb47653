//! Capacity limits (internal).
//!
//! Policy
//! - The universe is indexed into a single `u64`. Bit 63 is kept free so that
//!   `1 << N` and "all bits below N" never overflow; the cap is therefore 63.

/// Largest universe (input + candidates) a check or search accepts.
pub const MAX_POINTS: usize = 63;
