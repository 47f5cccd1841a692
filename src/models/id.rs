use chrono::{DateTime, Local};

/// Ids are the last ten digits of the creation time in milliseconds.
const ID_MODULUS: u64 = 10_000_000_000;

/// Issues workout ids that never repeat within a process, even when two
/// workouts are created in the same millisecond.
#[derive(Debug, Default, Clone)]
pub struct IdGenerator {
    last: u64,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take an already issued id into account (e.g. one loaded from storage).
    /// Ids that are not numeric are ignored.
    pub fn observe(&mut self, id: &str) {
        if let Ok(n) = id.parse::<u64>() {
            self.last = self.last.max(n);
        }
    }

    pub fn next_id(&mut self, now: DateTime<Local>) -> String {
        let candidate = now.timestamp_millis().unsigned_abs() % ID_MODULUS;
        let n = if candidate > self.last {
            candidate
        } else {
            self.last + 1
        };
        self.last = n;
        format!("{n:010}")
    }
}
