pub mod budget_form;
pub mod budget_tracker;
pub mod bug_form;
pub mod bugs_page;
pub mod content_board;
pub mod content_form;
pub mod dashboard;
pub mod event_detail;
pub mod event_form;
pub mod events_page;
pub mod form;
pub mod inventory_form;
pub mod inventory_list;
pub mod kanban_board;
pub mod meeting_detail;
pub mod meeting_form;
pub mod meetings_page;
pub mod minutes_editor;
pub mod status_badge;
pub mod task_form;
pub mod tasks_page;
pub mod team_page;
pub mod toast;

pub use budget_form::BudgetFormDialog;
pub use budget_tracker::BudgetTracker;
pub use bug_form::BugFormDialog;
pub use bugs_page::BugsPage;
pub use content_board::ContentBoard;
pub use content_form::ContentFormDialog;
pub use dashboard::DashboardPage;
pub use event_detail::EventDetailPage;
pub use event_form::EventFormDialog;
pub use events_page::EventsPage;
pub use form::RowDelete;
pub use inventory_form::InventoryFormDialog;
pub use inventory_list::InventoryList;
pub use kanban_board::TaskBoard;
pub use meeting_detail::MeetingDetailPage;
pub use meeting_form::MeetingFormDialog;
pub use meetings_page::MeetingsPage;
pub use minutes_editor::MinutesEditor;
pub use status_badge::StatusBadge;
pub use task_form::TaskFormDialog;
pub use tasks_page::TasksPage;
pub use team_page::TeamPage;
pub use toast::ToastHost;
