/// A timestamp or duration in milliseconds. Wraps around after roughly 49.7 days.
pub type Millis = u32;

/// A monotonic millisecond counter.
pub trait Clock {
    /// Returns the current time. Successive readings never decrease, modulo wraparound.
    fn now_ms(&self) -> Millis;
}

impl<C> Clock for &C
where
    C: Clock + ?Sized,
{
    fn now_ms(&self) -> Millis {
        (**self).now_ms()
    }
}

/// Time elapsed from `since` to `now`, correct across a single counter wraparound.
pub fn elapsed(since: Millis, now: Millis) -> Millis {
    now.wrapping_sub(since)
}
