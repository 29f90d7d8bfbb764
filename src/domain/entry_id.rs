//! Numeric entry identifier with monotonic generation and serde support.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::atomic::{AtomicI64, Ordering};

/// Last id handed out by [`EntryId::new`]; fresh ids are bumped past it so
/// two entries created in the same millisecond still get distinct ids.
static LAST_ISSUED: AtomicI64 = AtomicI64::new(0);

/// A unique identifier for entries based on a millisecond timestamp.
///
/// Ids are plain decimal numbers (e.g. `1706012345678`) used verbatim as the
/// `## <id>` heading of an entry section. Within one process they are
/// strictly increasing, so sorting ids gives creation order.
///
/// # Examples
///
/// ```
/// use zinc::domain::EntryId;
///
/// let id = EntryId::new();
/// let again: EntryId = id.to_string().parse().unwrap();
/// assert_eq!(id, again);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EntryId(i64);

impl EntryId {
    /// Creates a new id from the current time, strictly greater than any id
    /// previously issued by this process.
    pub fn new() -> Self {
        let now = Utc::now().timestamp_millis();
        loop {
            let last = LAST_ISSUED.load(Ordering::Relaxed);
            let next = now.max(last + 1);
            if LAST_ISSUED
                .compare_exchange(last, next, Ordering::Relaxed, Ordering::Relaxed)
                .is_ok()
            {
                return Self(next);
            }
        }
    }

    /// Creates an id from a specific millisecond timestamp (useful for
    /// fixtures and benchmarks).
    pub fn from_millis(millis: i64) -> Self {
        Self(millis)
    }

    /// Returns the creation time this id encodes, when it is a plausible
    /// timestamp. Hand-written ids (e.g. `## 1000`) fall outside the epoch
    /// range chrono accepts and yield `None`.
    pub fn timestamp(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp_millis(self.0)
    }

    /// The raw numeric value.
    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl Default for EntryId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EntryId({})", self.0)
    }
}

/// Error returned when parsing an invalid entry id string.
#[derive(Debug, Clone)]
pub struct ParseEntryIdError {
    value: String,
    reason: String,
}

impl ParseEntryIdError {
    /// Returns the invalid value that caused this error.
    pub fn invalid_value(&self) -> &str {
        &self.value
    }
}

impl fmt::Display for ParseEntryIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid entry id '{}': {}", self.value, self.reason)
    }
}

impl std::error::Error for ParseEntryIdError {}

impl FromStr for EntryId {
    type Err = ParseEntryIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<i64>()
            .map(EntryId)
            .map_err(|e| ParseEntryIdError {
                value: s.to_string(),
                reason: e.to_string(),
            })
    }
}

impl Serialize for EntryId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0.to_string())
    }
}

impl<'de> Deserialize<'de> for EntryId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
