//! Cache Entry Module
//!
//! Defines the structure for individual cache entries with deadline support.

use std::time::{SystemTime, UNIX_EPOCH};

// == Cache Entry ==
/// A single cache entry pairing an opaque value with its expiry deadline.
///
/// Entries are immutable once constructed; overwriting a key stores a fresh
/// entry with a fresh deadline, which is what keeps a stale expiry from ever
/// outliving a newer value.
#[derive(Debug, Clone)]
pub struct CacheEntry<V> {
    /// The stored value
    pub value: V,
    /// Creation timestamp (Unix milliseconds)
    pub created_at: u64,
    /// Expiry deadline (Unix milliseconds), None = never expires by time
    pub deadline: Option<u64>,
}

impl<V> CacheEntry<V> {
    // == Constructor ==
    /// Creates a new cache entry with an optional TTL.
    ///
    /// # Arguments
    /// * `value` - The value to store
    /// * `ttl_seconds` - Optional TTL in seconds; None means the entry only
    ///   leaves the cache through capacity pressure or explicit removal
    pub fn new(value: V, ttl_seconds: Option<u64>) -> Self {
        let now = current_timestamp_ms();
        let deadline = ttl_seconds.map(|ttl| now + ttl * 1000);

        Self {
            value,
            created_at: now,
            deadline,
        }
    }

    // == Is Expired ==
    /// Checks whether the entry's deadline has passed.
    ///
    /// Boundary condition: an entry is expired when the current time is
    /// greater than or equal to the deadline, so the instant the TTL has
    /// fully elapsed the entry reads as absent.
    pub fn is_expired(&self) -> bool {
        match self.deadline {
            Some(deadline) => current_timestamp_ms() >= deadline,
            None => false,
        }
    }

    // == Time To Live ==
    /// Returns remaining TTL in milliseconds, or None if no deadline is set.
    ///
    /// Saturates at 0 once the deadline has passed.
    pub fn ttl_remaining_ms(&self) -> Option<u64> {
        self.deadline.map(|deadline| {
            let now = current_timestamp_ms();
            deadline.saturating_sub(now)
        })
    }

    /// Returns remaining TTL in whole seconds, or None if no deadline is set.
    pub fn ttl_remaining(&self) -> Option<u64> {
        self.ttl_remaining_ms().map(|ms| ms / 1000)
    }
}

// == Utility Functions ==
/// Returns current Unix timestamp in milliseconds.
pub fn current_timestamp_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("Time went backwards")
        .as_millis() as u64
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use std::thread::sleep;
    use std::time::Duration;

    #[test]
    fn test_entry_creation_no_deadline() {
        let entry = CacheEntry::new("test_value".to_string(), None);

        assert_eq!(entry.value, "test_value");
        assert!(entry.deadline.is_none());
        assert!(!entry.is_expired());
    }

    #[test]
    fn test_entry_creation_with_ttl() {
        let entry = CacheEntry::new("test_value".to_string(), Some(60));

        assert_eq!(entry.value, "test_value");
        assert!(entry.deadline.is_some());
        assert!(!entry.is_expired());
    }

    #[test]
    fn test_entry_expiration() {
        let entry = CacheEntry::new("test_value".to_string(), Some(1));

        assert!(!entry.is_expired());

        // Wait for the deadline to pass
        sleep(Duration::from_millis(1100));

        assert!(entry.is_expired());
    }

    #[test]
    fn test_ttl_remaining_seconds() {
        let entry = CacheEntry::new("test_value".to_string(), Some(10));

        let remaining = entry.ttl_remaining().unwrap();
        assert!(remaining <= 10);
        assert!(remaining >= 9);
    }

    #[test]
    fn test_ttl_remaining_no_deadline() {
        let entry = CacheEntry::new(42u32, None);

        assert!(entry.ttl_remaining().is_none());
        assert!(entry.ttl_remaining_ms().is_none());
    }

    #[test]
    fn test_ttl_remaining_expired_saturates_at_zero() {
        let now = current_timestamp_ms();
        let entry = CacheEntry {
            value: "test".to_string(),
            created_at: now,
            deadline: Some(now.saturating_sub(5000)),
        };

        assert_eq!(entry.ttl_remaining_ms().unwrap(), 0);
        assert_eq!(entry.ttl_remaining().unwrap(), 0);
    }

    #[test]
    fn test_expiration_boundary_condition() {
        let now = current_timestamp_ms();
        let entry = CacheEntry {
            value: "test".to_string(),
            created_at: now,
            deadline: Some(now), // Deadline exactly at creation time
        };

        // Entry is expired once current time >= deadline
        assert!(entry.is_expired(), "Entry should be expired at boundary");
    }
}
