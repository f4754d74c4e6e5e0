//! Set Entry Module
//!
//! Defines the structure for individual set entries.

use std::time::{SystemTime, UNIX_EPOCH};

// == Set Entry ==
/// Represents a single set entry with its value and metadata.
#[derive(Debug, Clone)]
pub struct SetEntry {
    /// The stored value (strictly positive)
    pub value: u64,
    /// Creation timestamp (Unix milliseconds)
    pub created_at: u64,
    /// Last update timestamp (Unix milliseconds)
    pub updated_at: u64,
}

impl SetEntry {
    // == Constructor ==
    /// Creates a new set entry with the given value.
    ///
    /// # Arguments
    /// * `value` - The value to store (callers enforce strict positivity)
    pub fn new(value: u64) -> Self {
        let now = current_timestamp_ms();

        Self {
            value,
            created_at: now,
            updated_at: now,
        }
    }

    // == Set Value ==
    /// Replaces the stored value in place and refreshes the update timestamp.
    pub fn set_value(&mut self, value: u64) {
        self.value = value;
        self.updated_at = current_timestamp_ms();
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

    #[test]
    fn test_entry_creation() {
        let entry = SetEntry::new(42);

        assert_eq!(entry.value, 42);
        assert_eq!(entry.created_at, entry.updated_at);
    }

    #[test]
    fn test_entry_set_value() {
        let mut entry = SetEntry::new(42);
        let created = entry.created_at;

        entry.set_value(7);

        assert_eq!(entry.value, 7);
        assert_eq!(entry.created_at, created);
        assert!(entry.updated_at >= created);
    }
}
