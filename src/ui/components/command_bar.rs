// Command bar component - 하단 힌트 바 컴포넌트
//
// 액션 레지스트리에서 만든 키/레이블 쌍 표시

use crate::ui::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

/// 커맨드 항목
#[derive(Debug, Clone)]
pub struct CommandItem {
    /// 단축키 (j/↓, Tab, ...)
    pub key: String,
    /// 레이블 (Down, Pane, ...)
    pub label: String,
}

impl CommandItem {
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
        }
    }
}

/// 커맨드 바 컴포넌트
pub struct CommandBar {
    commands: Vec<CommandItem>,
    key_fg_color: Color,
    label_fg_color: Color,
}

impl CommandBar {
    pub fn new(commands: Vec<CommandItem>) -> Self {
        Self {
            commands,
            key_fg_color: Color::Green,
            label_fg_color: Color::Reset,
        }
    }

    /// 테마 적용
    pub fn theme(mut self, theme: &Theme) -> Self {
        self.key_fg_color = theme.hint.to_color();
        self
    }
}

impl Widget for CommandBar {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let key_style = Style::default()
            .fg(self.key_fg_color)
            .add_modifier(Modifier::BOLD);
        let label_style = Style::default().fg(self.label_fg_color);

        let mut spans = vec![Span::raw(" ")];
        for (i, cmd) in self.commands.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw("  "));
            }
            spans.push(Span::styled(cmd.key.clone(), key_style));
            spans.push(Span::styled(":", label_style));
            spans.push(Span::styled(cmd.label.clone(), label_style));
        }

        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}
