// Preview component - 미리보기 패널
//
// 선택된 파일 내용 또는 로드 에러 표시

use crate::models::PreviewContent;
use crate::ui::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

/// 미리보기 패널 컴포넌트
pub struct PreviewPanel<'a> {
    content: &'a PreviewContent,
    /// 선택된 파일 레이블 (제목에 표시)
    label: Option<&'a str>,
    focused: bool,
    focus_border_color: Color,
    default_border_color: Color,
    error_color: Color,
}

impl<'a> PreviewPanel<'a> {
    pub fn new(content: &'a PreviewContent) -> Self {
        Self {
            content,
            label: None,
            focused: false,
            focus_border_color: Color::Green,
            default_border_color: Color::White,
            error_color: Color::Red,
        }
    }

    pub fn label(mut self, label: Option<&'a str>) -> Self {
        self.label = label;
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// 테마 적용
    pub fn theme(mut self, theme: &Theme) -> Self {
        self.focus_border_color = theme.focus_border.to_color();
        self.default_border_color = theme.default_border.to_color();
        self.error_color = theme.error.to_color();
        self
    }

    fn title(&self) -> String {
        match self.label {
            Some(label) => format!(" Preview: {} ", label),
            None => " Preview ".to_string(),
        }
    }
}

impl Widget for PreviewPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_color = if self.focused {
            self.focus_border_color
        } else {
            self.default_border_color
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color))
            .title(Span::styled(
                self.title(),
                Style::default().add_modifier(Modifier::BOLD),
            ));

        let text_style = if self.content.is_error() {
            Style::default().fg(self.error_color)
        } else {
            Style::default()
        };

        Paragraph::new(self.content.text())
            .style(text_style)
            .wrap(Wrap { trim: false })
            .block(block)
            .render(area, buf);
    }
}
