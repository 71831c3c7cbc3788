// UI Layer
pub mod components;
pub mod layout;
pub mod renderer;
pub mod theme;

pub use layout::{LayoutManager, LayoutMode, PanelRatio};
pub use theme::Theme;

pub use components::{
    CommandBar, CommandItem, FileListPanel, PreviewPanel, StatusBar, WarningScreen,
};
