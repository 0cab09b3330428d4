//! Board State Core
//!
//! Reducer-style state for the drag-reorder status boards (tasks and
//! content pipeline). A drop is applied to local state synchronously;
//! when the column changed, the caller gets back a [`StatusChange`] to
//! persist and MUST reconcile with a fresh `list()` if that persist
//! fails, so local state never silently diverges from the store.
//!
//! Rapid drags on the same record can race in flight (requests are not
//! serialized per id); reload-on-failure bounds the damage.

use crate::models::{BoardStatus, ContentIdea, ContentStatus, Task, TaskStatus};

/// A record that lives on a status board.
pub trait BoardRecord: Clone {
    type Status: BoardStatus;

    fn id(&self) -> &str;
    fn status(&self) -> Self::Status;
    fn set_status(&mut self, status: Self::Status);
}

impl BoardRecord for Task {
    type Status = TaskStatus;

    fn id(&self) -> &str {
        &self.id
    }

    fn status(&self) -> TaskStatus {
        self.status
    }

    fn set_status(&mut self, status: TaskStatus) {
        self.status = status;
    }
}

impl BoardRecord for ContentIdea {
    type Status = ContentStatus;

    fn id(&self) -> &str {
        &self.id
    }

    fn status(&self) -> ContentStatus {
        self.status
    }

    fn set_status(&mut self, status: ContentStatus) {
        self.status = status;
    }
}

/// A user-initiated drop: which card left which slot for which slot.
#[derive(Clone, Debug, PartialEq)]
pub struct Move<S> {
    pub record_id: String,
    pub source_status: S,
    pub source_index: usize,
    pub destination_status: S,
    pub destination_index: usize,
}

/// The status update the caller must persist after a cross-column move.
#[derive(Clone, Debug, PartialEq)]
pub struct StatusChange<S> {
    pub record_id: String,
    pub new_status: S,
}

/// What a drop did to local state.
#[derive(Clone, Debug, PartialEq)]
pub enum MoveOutcome<S> {
    /// Dropped onto its own slot, or the record is unknown; state untouched.
    NoOp,
    /// Same column, different index: display shuffle only, nothing to persist.
    LocalOnly,
    /// Column changed: status rewritten optimistically, persist this.
    Moved(StatusChange<S>),
}

/// Client-side collection of records for one board.
///
/// Owned exclusively by the component displaying it; siblings get fresh
/// data from their own loads, never a shared handle to this.
#[derive(Clone, Debug)]
pub struct BoardState<R> {
    records: Vec<R>,
}

impl<R> Default for BoardState<R> {
    fn default() -> Self {
        Self { records: Vec::new() }
    }
}

impl<R: BoardRecord> BoardState<R> {
    pub fn new(records: Vec<R>) -> Self {
        debug_assert!(unique_ids(&records), "duplicate record id in board state");
        Self { records }
    }

    pub fn records(&self) -> &[R] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Wholesale replacement: initial load and failure reconciliation.
    pub fn set_records(&mut self, records: Vec<R>) {
        debug_assert!(unique_ids(&records), "duplicate record id in board state");
        self.records = records;
    }

    /// Append a freshly created record (backend already assigned its id).
    pub fn push(&mut self, record: R) {
        debug_assert!(
            !self.records.iter().any(|r| r.id() == record.id()),
            "duplicate record id in board state"
        );
        self.records.push(record);
    }

    /// Replace the record with the same id; ignored if it is gone.
    pub fn replace(&mut self, record: R) {
        if let Some(existing) = self.records.iter_mut().find(|r| r.id() == record.id()) {
            *existing = record;
        }
    }

    pub fn remove(&mut self, id: &str) {
        self.records.retain(|r| r.id() != id);
    }

    /// Records of one column, in insertion order.
    pub fn column_records(&self, status: R::Status) -> Vec<R> {
        self.records
            .iter()
            .filter(|r| r.status() == status)
            .cloned()
            .collect()
    }

    pub fn column_len(&self, status: R::Status) -> usize {
        self.records.iter().filter(|r| r.status() == status).count()
    }

    /// Apply a drop to local state.
    ///
    /// Cross-column moves rewrite the record's status in place before any
    /// network confirmation; the returned [`StatusChange`] is the caller's
    /// obligation to persist.
    pub fn apply_move(&mut self, mv: &Move<R::Status>) -> MoveOutcome<R::Status> {
        // Idempotent drop onto the same slot
        if mv.destination_status == mv.source_status && mv.destination_index == mv.source_index {
            return MoveOutcome::NoOp;
        }

        let Some(record) = self.records.iter_mut().find(|r| r.id() == mv.record_id) else {
            return MoveOutcome::NoOp;
        };

        if mv.destination_status == mv.source_status {
            // Within-column position is display order only; nothing persisted.
            return MoveOutcome::LocalOnly;
        }

        record.set_status(mv.destination_status);
        MoveOutcome::Moved(StatusChange {
            record_id: mv.record_id.clone(),
            new_status: mv.destination_status,
        })
    }
}

fn unique_ids<R: BoardRecord>(records: &[R]) -> bool {
    records
        .iter()
        .all(|r| records.iter().filter(|o| o.id() == r.id()).count() == 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{TaskCategory, TaskPriority};

    fn make_task(id: &str, status: TaskStatus) -> Task {
        Task {
            id: id.to_string(),
            event_id: "e1".to_string(),
            title: format!("Task {}", id),
            description: None,
            status,
            priority: TaskPriority::Medium,
            category: TaskCategory::General,
            assigned_to: None,
            due_date: None,
            created_at: "2025-01-01T00:00:00Z".to_string(),
        }
    }

    fn mv(
        id: &str,
        source: TaskStatus,
        source_index: usize,
        dest: TaskStatus,
        dest_index: usize,
    ) -> Move<TaskStatus> {
        Move {
            record_id: id.to_string(),
            source_status: source,
            source_index,
            destination_status: dest,
            destination_index: dest_index,
        }
    }

    #[test]
    fn cross_column_move_is_applied_before_any_confirmation() {
        let mut board = BoardState::new(vec![
            make_task("t1", TaskStatus::Todo),
            make_task("t2", TaskStatus::Todo),
        ]);

        let outcome = board.apply_move(&mv("t1", TaskStatus::Todo, 0, TaskStatus::InProgress, 0));

        // The persistence call for t1 with the new status, exactly once
        assert_eq!(
            outcome,
            MoveOutcome::Moved(StatusChange {
                record_id: "t1".to_string(),
                new_status: TaskStatus::InProgress,
            })
        );
        // State became [t1 in_progress, t2 todo], insertion order kept
        assert_eq!(board.records()[0].id, "t1");
        assert_eq!(board.records()[0].status, TaskStatus::InProgress);
        assert_eq!(board.records()[1].id, "t2");
        assert_eq!(board.records()[1].status, TaskStatus::Todo);
    }

    #[test]
    fn drop_onto_own_slot_leaves_state_untouched() {
        let records = vec![make_task("t1", TaskStatus::Todo), make_task("t2", TaskStatus::Todo)];
        let mut board = BoardState::new(records.clone());

        let outcome = board.apply_move(&mv("t1", TaskStatus::Todo, 0, TaskStatus::Todo, 0));

        assert_eq!(outcome, MoveOutcome::NoOp);
        assert_eq!(board.records(), records.as_slice());
    }

    #[test]
    fn same_column_different_index_persists_nothing() {
        let mut board = BoardState::new(vec![
            make_task("t1", TaskStatus::Todo),
            make_task("t2", TaskStatus::Todo),
        ]);

        let outcome = board.apply_move(&mv("t1", TaskStatus::Todo, 0, TaskStatus::Todo, 1));

        assert_eq!(outcome, MoveOutcome::LocalOnly);
        assert!(board.records().iter().all(|t| t.status == TaskStatus::Todo));
    }

    #[test]
    fn unknown_record_id_is_a_noop() {
        let mut board = BoardState::new(vec![make_task("t1", TaskStatus::Todo)]);

        let outcome = board.apply_move(&mv("ghost", TaskStatus::Todo, 0, TaskStatus::Completed, 0));

        assert_eq!(outcome, MoveOutcome::NoOp);
        assert_eq!(board.records()[0].status, TaskStatus::Todo);
    }

    #[test]
    fn failed_persist_reconciles_to_the_authoritative_list() {
        let authoritative = vec![
            make_task("t1", TaskStatus::Todo),
            make_task("t2", TaskStatus::Todo),
        ];
        let mut board = BoardState::new(authoritative.clone());

        // Optimistic move, then the simulated persist fails
        let outcome = board.apply_move(&mv("t1", TaskStatus::Todo, 0, TaskStatus::Completed, 0));
        assert!(matches!(outcome, MoveOutcome::Moved(_)));
        assert_eq!(board.records()[0].status, TaskStatus::Completed);

        // Reconcile by full reload: no leftover optimistic value
        board.set_records(authoritative.clone());
        assert_eq!(board.records(), authoritative.as_slice());
    }

    #[test]
    fn column_records_keep_insertion_order() {
        let board = BoardState::new(vec![
            make_task("t1", TaskStatus::Todo),
            make_task("t2", TaskStatus::InProgress),
            make_task("t3", TaskStatus::Todo),
        ]);

        let todo = board.column_records(TaskStatus::Todo);
        assert_eq!(todo.iter().map(|t| t.id.as_str()).collect::<Vec<_>>(), vec!["t1", "t3"]);
        assert_eq!(board.column_len(TaskStatus::InProgress), 1);
        assert_eq!(board.column_len(TaskStatus::Completed), 0);
    }

    #[test]
    fn created_records_append_and_updates_replace_by_id() {
        let mut board = BoardState::new(vec![make_task("t1", TaskStatus::Todo)]);

        board.push(make_task("t2", TaskStatus::InProgress));
        assert_eq!(board.len(), 2);

        let mut edited = make_task("t1", TaskStatus::Todo);
        edited.title = "Repainted banners".to_string();
        board.replace(edited);
        assert_eq!(board.records()[0].title, "Repainted banners");

        board.remove("t2");
        assert_eq!(board.len(), 1);
        assert_eq!(board.records()[0].id, "t1");
    }

    #[test]
    fn records_stay_in_exactly_one_column() {
        let mut board = BoardState::new(vec![
            make_task("t1", TaskStatus::Todo),
            make_task("t2", TaskStatus::InProgress),
        ]);

        board.apply_move(&mv("t2", TaskStatus::InProgress, 0, TaskStatus::Completed, 0));

        let total: usize = TaskStatus::COLUMNS
            .iter()
            .map(|s| board.column_len(*s))
            .sum();
        assert_eq!(total, board.len());
    }
}
