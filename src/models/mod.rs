// Data Models
pub mod entry_set;
pub mod file_entry;
pub mod focus;
pub mod preview;
pub mod selection;

pub use entry_set::FileEntrySet;
pub use file_entry::FileEntry;
pub use focus::Focus;
pub use preview::PreviewContent;
pub use selection::SelectionCursor;
