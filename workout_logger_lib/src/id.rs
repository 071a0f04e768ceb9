use chrono::{DateTime, TimeZone};

use crate::workout::WorkoutId;

/// Hands out timestamp derived workout ids.
/// Two submissions within the same millisecond still get distinct ids.
#[derive(Debug, Default)]
pub struct IdGenerator {
    last: Option<i64>,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next<Tz: TimeZone>(&mut self, now: &DateTime<Tz>) -> WorkoutId {
        let millis = now.timestamp_millis();
        let id = match self.last {
            Some(last) if millis <= last => last + 1,
            _ => millis,
        };

        self.last = Some(id);
        WorkoutId(id)
    }
}
