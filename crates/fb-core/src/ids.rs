//! Time-based integer ids that never repeat within a store.

use chrono::Utc;

use crate::error::{ForumError, Result};

/// Hands out `max(now_millis, last + 1)`.
///
/// Millisecond timestamps alone collide when two records are created in the
/// same tick; the floor keeps every id strictly greater than the previous one.
#[derive(Debug, Clone, Default)]
pub struct IdGenerator {
    last: i64,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts above every id already in use (e.g. ids found in loaded state).
    pub fn seeded<I>(existing: I) -> Self
    where
        I: IntoIterator<Item = i64>,
    {
        let mut generator = Self::new();
        for id in existing {
            generator.observe(id);
        }
        generator
    }

    /// Records an id allocated elsewhere so it is never handed out again.
    pub fn observe(&mut self, id: i64) {
        self.last = self.last.max(id);
    }

    pub fn next_id(&mut self) -> Result<i64> {
        self.next_at(Utc::now().timestamp_millis())
    }

    /// Allocation against an explicit clock reading.
    ///
    /// Fails once `i64::MAX` has been handed out or observed; the generator
    /// is left unchanged.
    pub fn next_at(&mut self, now_millis: i64) -> Result<i64> {
        let floor = self
            .last
            .checked_add(1)
            .ok_or_else(|| ForumError::Storage("id space exhausted".into()))?;
        let id = now_millis.max(floor);
        self.last = id;
        Ok(id)
    }
}
