//! Remembers which game the bot last saw, so a transport can mark the start
//! of a new game in its logs.

use std::sync::{Mutex, MutexGuard};

#[derive(Debug, Default)]
pub struct GameTracker {
    last: Mutex<Option<String>>,
}

impl GameTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `game_id` and report whether it differs from the previous one.
    /// The very first observation always counts as new.
    pub fn observe(&self, game_id: &str) -> bool {
        let mut last = self.lock();
        if last.as_deref() == Some(game_id) {
            return false;
        }
        *last = Some(game_id.to_string());
        true
    }

    pub fn last_seen(&self) -> Option<String> {
        self.lock().clone()
    }

    // A panic while holding the lock cannot leave an Option<String> half-written.
    fn lock(&self) -> MutexGuard<'_, Option<String>> {
        self.last.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
