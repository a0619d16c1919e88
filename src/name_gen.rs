use once_cell::sync::Lazy;
use std::sync::atomic::{AtomicU32, Ordering};

use crate::global_consts::EXT_SEPARATOR;

const MAX_STRIDE: u32 = 1 << 30;

static GLOBAL: Lazy<NameCounter> = Lazy::new(NameCounter::new);

/// A source of distinct numeric name components.
///
/// Every call to [`next_value`](NameCounter::next_value) observes a different value, even when
/// made concurrently from several threads. The starting point is random, so two processes are
/// unlikely to walk the same sequence; actual uniqueness on disk is left to exclusive creation.
///
/// Most callers use the process-wide instance returned by [`global`](NameCounter::global). Tests
/// and isolated subsystems can own their own counter and hand it to a [`Builder`](crate::Builder).
#[derive(Debug)]
pub struct NameCounter {
    value: AtomicU32,
    /// Seeded counters keep their sequence and ignore [`reseed`](NameCounter::reseed).
    fixed: bool,
}

impl NameCounter {
    /// Creates a counter starting at a random value.
    #[must_use]
    pub fn new() -> Self {
        Self {
            value: AtomicU32::new(rand::random()),
            fixed: false,
        }
    }

    /// Creates a counter starting at `seed`. Its sequence is never reseeded, so the names it
    /// produces are predictable.
    #[must_use]
    pub const fn with_seed(seed: u32) -> Self {
        Self {
            value: AtomicU32::new(seed),
            fixed: true,
        }
    }

    /// Returns the counter shared by the whole process.
    pub fn global() -> &'static Self {
        &GLOBAL
    }

    /// Advances the counter and returns the value it held. Wraps on overflow.
    pub fn next_value(&self) -> u32 {
        self.value.fetch_add(1, Ordering::Relaxed)
    }

    /// Jumps the counter forward by a random stride, skipping a crowded run of names.
    ///
    /// The jump is an increment, so values already handed out are not revisited until the counter
    /// wraps. Does nothing on a counter made with [`with_seed`](NameCounter::with_seed).
    pub fn reseed(&self) {
        if !self.fixed {
            self.value
                .fetch_add(rand::random_range(1..=MAX_STRIDE), Ordering::Relaxed);
        }
    }

    /// Produces the next candidate name: `prefix`, the counter in decimal, then the extension.
    ///
    /// A non-empty `suffix` is joined as a file extension, so `"tmp"` and `".tmp"` both end the
    /// name with `.tmp`. An empty suffix adds nothing.
    pub fn next_name(&self, prefix: &str, suffix: &str) -> String {
        join_name(prefix, self.next_value(), suffix)
    }
}

impl Default for NameCounter {
    fn default() -> Self {
        Self::new()
    }
}

fn join_name(prefix: &str, value: u32, suffix: &str) -> String {
    if suffix.is_empty() || suffix.starts_with(EXT_SEPARATOR) {
        format!("{prefix}{value}{suffix}")
    } else {
        format!("{prefix}{value}{EXT_SEPARATOR}{suffix}")
    }
}
