// Renderer - 앱 상태를 프레임에 그림
//
// 상태 변경 없이 App에서 읽기만 합니다 (레이아웃 재계산 제외).

use crate::app::App;
use crate::core::actions::generate_command_bar_items;
use crate::models::Focus;
use crate::ui::{
    CommandBar, FileListPanel, LayoutMode, PreviewPanel, StatusBar, WarningScreen,
};
use crate::utils::formatter::format_file_size;
use ratatui::Frame;

/// 전체 화면 렌더링
pub fn render(frame: &mut Frame<'_>, app: &mut App) {
    let size = frame.area();
    app.layout.update(size);

    match app.layout.mode() {
        LayoutMode::TooSmall => {
            let (width, height) = app.layout.terminal_size();
            let warning = WarningScreen::new()
                .current_size(width, height)
                .theme(app.theme());
            frame.render_widget(warning, app.layout.areas().warning);
        }
        LayoutMode::Split => render_main_ui(frame, app),
    }
}

fn render_main_ui(frame: &mut Frame<'_>, app: &App) {
    let areas = app.layout.areas().clone();
    let theme = app.theme();
    let focus = app.focus();
    let selected_label = app.selected_label();

    let list = FileListPanel::new(app.labels())
        .selected(app.selected_position())
        .focused(focus == Focus::List)
        .theme(theme);
    frame.render_widget(list, areas.list_panel);

    let preview = PreviewPanel::new(app.preview())
        .label(selected_label.as_deref())
        .focused(focus == Focus::Preview)
        .theme(theme);
    frame.render_widget(preview, areas.preview_panel);

    let size = app.preview().loaded_size().map(format_file_size);
    let source = app.source().to_string();
    let status_bar = StatusBar::new()
        .cursor(app.current_index(), app.entries().len())
        .label(selected_label.as_deref())
        .size(size.as_deref())
        .source(&source)
        .theme(theme);
    frame.render_widget(status_bar, areas.status_bar);

    let command_bar = CommandBar::new(generate_command_bar_items()).theme(theme);
    frame.render_widget(command_bar, areas.command_bar);
}
