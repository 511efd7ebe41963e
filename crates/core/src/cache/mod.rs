//! Process-local, time-windowed memoisation of upstream responses.

mod clock;
mod ttl_cache;

pub use clock::{Clock, ManualClock, SystemClock};
pub use ttl_cache::{CacheEntry, TtlCache};
