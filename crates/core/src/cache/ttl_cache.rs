use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use log::debug;
use tokio::sync::{Mutex, RwLock};

use super::clock::{Clock, SystemClock};

/// A cached payload and the instant it was fetched.
#[derive(Debug)]
pub struct CacheEntry<T> {
    pub payload: Arc<T>,
    pub fetched_at: DateTime<Utc>,
}

impl<T> Clone for CacheEntry<T> {
    fn clone(&self) -> Self {
        Self {
            payload: Arc::clone(&self.payload),
            fetched_at: self.fetched_at,
        }
    }
}

/// Keyed cache whose entries expire `ttl` after they were stored.
///
/// An entry is fresh while `now - fetched_at < ttl`. Expired entries are never
/// served and are overwritten by the next successful fetch. A failed fetch
/// leaves the previous entry untouched.
///
/// Concurrent misses for the same key are coalesced in [`TtlCache::get_or_refresh`]:
/// only the first caller reaches upstream, the rest wait and read its result.
pub struct TtlCache<T> {
    ttl: Duration,
    clock: Arc<dyn Clock>,
    entries: RwLock<HashMap<String, CacheEntry<T>>>,
    inflight: Mutex<HashMap<String, Arc<Mutex<()>>>>,
}

impl<T: Send + Sync> TtlCache<T> {
    pub fn new(ttl: Duration) -> Self {
        Self::with_clock(ttl, Arc::new(SystemClock))
    }

    pub fn with_clock(ttl: Duration, clock: Arc<dyn Clock>) -> Self {
        Self {
            ttl,
            clock,
            entries: RwLock::new(HashMap::new()),
            inflight: Mutex::new(HashMap::new()),
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Returns the entry for `key` if it is still fresh.
    pub async fn get(&self, key: &str) -> Option<CacheEntry<T>> {
        let now = self.clock.now();
        let entries = self.entries.read().await;
        entries
            .get(key)
            .filter(|entry| now - entry.fetched_at < self.ttl)
            .cloned()
    }

    /// Stores `payload` under `key`, stamped with the current time.
    pub async fn put(&self, key: &str, payload: T) -> CacheEntry<T> {
        let entry = CacheEntry {
            payload: Arc::new(payload),
            fetched_at: self.clock.now(),
        };
        self.entries
            .write()
            .await
            .insert(key.to_string(), entry.clone());
        entry
    }

    /// Serves `key` from cache, or runs `fetch` and stores its result.
    pub async fn get_or_refresh<F, Fut, E>(&self, key: &str, fetch: F) -> Result<CacheEntry<T>, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, E>>,
    {
        if let Some(entry) = self.get(key).await {
            debug!("Cache hit for '{}'", key);
            return Ok(entry);
        }

        let gate = {
            let mut inflight = self.inflight.lock().await;
            Arc::clone(inflight.entry(key.to_string()).or_default())
        };
        let _guard = gate.lock().await;

        // Another caller may have refreshed while we waited on the gate.
        if let Some(entry) = self.get(key).await {
            debug!("Cache filled by concurrent refresh for '{}'", key);
            return Ok(entry);
        }

        debug!("Cache miss for '{}', fetching", key);
        let payload = fetch().await?;
        Ok(self.put(key, payload).await)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::ManualClock;
    use chrono::TimeZone;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn fixture(ttl_secs: i64) -> (Arc<ManualClock>, TtlCache<Vec<u32>>) {
        let clock = Arc::new(ManualClock::new(
            Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
        ));
        let cache = TtlCache::with_clock(Duration::seconds(ttl_secs), clock.clone());
        (clock, cache)
    }

    #[tokio::test]
    async fn test_entry_fresh_until_ttl_elapses() {
        let (clock, cache) = fixture(30);
        let calls = AtomicUsize::new(0);
        let counter = &calls;
        let fetch = move || async move {
            counter.fetch_add(1, Ordering::SeqCst);
            Ok::<_, String>(vec![1, 2, 3])
        };

        let first = cache.get_or_refresh("crypto", fetch).await.unwrap();
        clock.advance(Duration::seconds(29));
        let second = cache.get_or_refresh("crypto", fetch).await.unwrap();

        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert!(Arc::ptr_eq(&first.payload, &second.payload));
        assert_eq!(first.fetched_at, second.fetched_at);

        clock.advance(Duration::seconds(2));
        let third = cache.get_or_refresh("crypto", fetch).await.unwrap();
        assert_eq!(calls.load(Ordering::SeqCst), 2);
        assert!(!Arc::ptr_eq(&first.payload, &third.payload));
    }

    #[tokio::test]
    async fn test_exact_ttl_boundary_is_stale() {
        let (clock, cache) = fixture(30);
        cache.put("news", vec![7]).await;
        clock.advance(Duration::seconds(30));
        assert!(cache.get("news").await.is_none());
    }

    #[tokio::test]
    async fn test_keys_are_independent() {
        let (_clock, cache) = fixture(30);
        cache.put("crypto", vec![1]).await;
        assert!(cache.get("stocks").await.is_none());
        assert_eq!(*cache.get("crypto").await.unwrap().payload, vec![1]);
    }

    #[tokio::test]
    async fn test_failed_fetch_is_not_cached() {
        let (clock, cache) = fixture(30);
        cache.put("crypto", vec![1]).await;
        clock.advance(Duration::seconds(31));

        let err = cache
            .get_or_refresh("crypto", || async { Err::<Vec<u32>, _>("upstream down") })
            .await
            .unwrap_err();
        assert_eq!(err, "upstream down");
        // Stale data is never served, even after a failed refresh.
        assert!(cache.get("crypto").await.is_none());

        let refreshed = cache
            .get_or_refresh("crypto", || async { Ok::<_, &str>(vec![2]) })
            .await
            .unwrap();
        assert_eq!(*refreshed.payload, vec![2]);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_misses_fetch_once() {
        let (_clock, cache) = fixture(30);
        let cache = Arc::new(cache);
        let calls = Arc::new(AtomicUsize::new(0));

        let mut handles = Vec::new();
        for _ in 0..8 {
            let cache = cache.clone();
            let calls = calls.clone();
            handles.push(tokio::spawn(async move {
                cache
                    .get_or_refresh("stocks", || async {
                        calls.fetch_add(1, Ordering::SeqCst);
                        tokio::time::sleep(std::time::Duration::from_millis(50)).await;
                        Ok::<_, String>(vec![42])
                    })
                    .await
                    .unwrap()
            }));
        }

        let mut results = Vec::new();
        for handle in handles {
            results.push(handle.await.unwrap());
        }

        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert!(results
            .windows(2)
            .all(|pair| Arc::ptr_eq(&pair[0].payload, &pair[1].payload)));
    }
}
