/// Upper bound on candidate names tried by a single create call.
pub const NUM_RETRY: usize = 10_000;

/// Consecutive collisions after which the name counter is reseeded.
pub(crate) const RESEED_AFTER: usize = 10;

/// Separator inserted before an extension that lacks one.
pub(crate) const EXT_SEPARATOR: char = '.';
