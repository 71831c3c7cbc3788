// UI Components
pub mod command_bar;
pub mod file_list;
pub mod preview;
pub mod status_bar;
pub mod warning;

pub use command_bar::{CommandBar, CommandItem};
pub use file_list::FileListPanel;
pub use preview::PreviewPanel;
pub use status_bar::StatusBar;
pub use warning::WarningScreen;
