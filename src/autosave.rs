//! Debounced Autosave Policy
//!
//! The meeting minutes editor commits its buffer after an idle gap since
//! the last keystroke. The timer lives in the component (gloo-timers);
//! this module is the pure part: what is pending, whether a commit is
//! due at all, and how a confirmed or failed commit moves the baseline.

/// Idle gap after the last keystroke before a commit fires.
pub const AUTOSAVE_IDLE_MS: u32 = 1_000;

/// Edit buffer tracked against the last value the store confirmed.
#[derive(Clone, Debug, Default)]
pub struct AutosavePolicy {
    buffer: String,
    last_saved: String,
}

impl AutosavePolicy {
    /// Start from the value loaded out of the store.
    pub fn new(initial: impl Into<String>) -> Self {
        let initial = initial.into();
        Self {
            buffer: initial.clone(),
            last_saved: initial,
        }
    }

    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    /// A keystroke: replaces the buffer and supersedes any pending commit.
    pub fn edit(&mut self, text: impl Into<String>) {
        self.buffer = text.into();
    }

    pub fn is_dirty(&self) -> bool {
        self.buffer != self.last_saved
    }

    /// What the due timer should commit, if anything.
    ///
    /// Returns `None` when the buffer matches the last confirmed value;
    /// an unchanged buffer is never written back to the store.
    pub fn pending_commit(&self) -> Option<String> {
        if self.is_dirty() {
            Some(self.buffer.clone())
        } else {
            None
        }
    }

    /// The store confirmed this value.
    ///
    /// The baseline moves to what was actually committed; keystrokes made
    /// while the request was in flight keep the policy dirty.
    pub fn confirm(&mut self, committed: impl Into<String>) {
        self.last_saved = committed.into();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unchanged_buffer_skips_the_commit() {
        let policy = AutosavePolicy::new("agenda notes");
        assert!(!policy.is_dirty());
        assert_eq!(policy.pending_commit(), None);
    }

    #[test]
    fn edit_makes_a_commit_pending() {
        let mut policy = AutosavePolicy::new("");
        policy.edit("Decisions: book the lawn");
        assert_eq!(policy.pending_commit().as_deref(), Some("Decisions: book the lawn"));
    }

    #[test]
    fn each_keystroke_supersedes_the_previous_pending_value() {
        let mut policy = AutosavePolicy::new("");
        policy.edit("Dec");
        policy.edit("Decisions");
        assert_eq!(policy.pending_commit().as_deref(), Some("Decisions"));
    }

    #[test]
    fn confirm_clears_dirtiness_for_the_committed_value() {
        let mut policy = AutosavePolicy::new("");
        policy.edit("Decisions");
        let committed = policy.pending_commit().unwrap();
        policy.confirm(committed);
        assert!(!policy.is_dirty());
        assert_eq!(policy.pending_commit(), None);
    }

    #[test]
    fn typing_during_an_in_flight_commit_stays_dirty() {
        let mut policy = AutosavePolicy::new("");
        policy.edit("Decisions");
        let committed = policy.pending_commit().unwrap();
        // More typing before the response lands
        policy.edit("Decisions and actions");
        policy.confirm(committed);
        assert!(policy.is_dirty());
        assert_eq!(policy.pending_commit().as_deref(), Some("Decisions and actions"));
    }

    #[test]
    fn failed_commit_leaves_the_policy_dirty_for_retry() {
        let mut policy = AutosavePolicy::new("old");
        policy.edit("new");
        let _ = policy.pending_commit().unwrap();
        // No confirm on failure: the rescheduled timer commits the same buffer
        assert!(policy.is_dirty());
        assert_eq!(policy.pending_commit().as_deref(), Some("new"));
    }

    #[test]
    fn reverting_to_the_saved_text_cancels_the_commit() {
        let mut policy = AutosavePolicy::new("minutes");
        policy.edit("minutes draft");
        policy.edit("minutes");
        assert_eq!(policy.pending_commit(), None);
    }
}
