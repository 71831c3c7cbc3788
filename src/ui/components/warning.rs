// Warning screen component - 경고 화면 컴포넌트
//
// 터미널이 너무 작을 때 패널 대신 표시

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

use crate::ui::layout::{MIN_HEIGHT, MIN_WIDTH};
use crate::ui::Theme;

/// 경고 화면 컴포넌트
pub struct WarningScreen {
    /// 현재 터미널 크기
    current_size: (u16, u16),
    warning_color: Color,
    error_color: Color,
    success_color: Color,
}

impl Default for WarningScreen {
    fn default() -> Self {
        Self {
            current_size: (0, 0),
            warning_color: Color::Yellow,
            error_color: Color::Red,
            success_color: Color::Green,
        }
    }
}

impl WarningScreen {
    pub fn new() -> Self {
        Self::default()
    }

    /// 현재 터미널 크기 설정
    pub fn current_size(mut self, width: u16, height: u16) -> Self {
        self.current_size = (width, height);
        self
    }

    /// 테마 적용
    pub fn theme(mut self, theme: &Theme) -> Self {
        self.warning_color = theme.warning.to_color();
        self.error_color = theme.error.to_color();
        self.success_color = theme.focus_border.to_color();
        self
    }
}

impl Widget for WarningScreen {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let bold = |color: Color| Style::default().fg(color).add_modifier(Modifier::BOLD);

        let lines = vec![
            Line::from(Span::styled("Terminal Too Small", bold(self.warning_color))),
            Line::from(""),
            Line::from(vec![
                Span::raw("Current: "),
                Span::styled(
                    format!("{}x{}", self.current_size.0, self.current_size.1),
                    bold(self.error_color),
                ),
            ]),
            Line::from(vec![
                Span::raw("Required: "),
                Span::styled(
                    format!("{}x{}", MIN_WIDTH, MIN_HEIGHT),
                    bold(self.success_color),
                ),
            ]),
        ];

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.warning_color));

        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: false })
            .block(block)
            .render(area, buf);
    }
}
