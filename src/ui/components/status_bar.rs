// Status bar component - 상태바 컴포넌트
//
// 커서 위치, 선택 파일, 로드 크기, 입력 출처 표시

use crate::ui::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

/// 상태바 컴포넌트
pub struct StatusBar<'a> {
    /// 커서 위치 (1부터)
    position: Option<usize>,
    /// 전체 엔트리 수
    total: usize,
    /// 선택된 파일 레이블
    label: Option<&'a str>,
    /// 로드된 크기 (포맷된 문자열)
    size: Option<&'a str>,
    /// 입력 출처 (stdin / 디렉토리)
    source: &'a str,
    muted_color: Color,
}

impl<'a> Default for StatusBar<'a> {
    fn default() -> Self {
        Self {
            position: None,
            total: 0,
            label: None,
            size: None,
            source: "",
            muted_color: Color::DarkGray,
        }
    }
}

impl<'a> StatusBar<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// 커서 위치 설정 (0부터 시작하는 인덱스)
    pub fn cursor(mut self, index: Option<usize>, total: usize) -> Self {
        self.position = index.map(|i| i + 1);
        self.total = total;
        self
    }

    pub fn label(mut self, label: Option<&'a str>) -> Self {
        self.label = label;
        self
    }

    pub fn size(mut self, size: Option<&'a str>) -> Self {
        self.size = size;
        self
    }

    pub fn source(mut self, source: &'a str) -> Self {
        self.source = source;
        self
    }

    /// 테마 적용
    pub fn theme(mut self, theme: &Theme) -> Self {
        self.muted_color = theme.muted.to_color();
        self
    }

    fn position_text(&self) -> String {
        match self.position {
            Some(position) => format!("{}/{}", position, self.total),
            None => format!("-/{}", self.total),
        }
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let fg = Style::default();
        let muted = Style::default().fg(self.muted_color);

        let mut spans = vec![Span::styled(format!(" {} ", self.position_text()), fg)];
        if let Some(label) = self.label {
            spans.push(Span::styled(label, fg));
        }
        if let Some(size) = self.size {
            spans.push(Span::styled(format!(" ({})", size), muted));
        }
        spans.push(Span::styled(format!("  [{}]", self.source), muted));

        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_text() {
        assert_eq!(StatusBar::new().cursor(Some(0), 3).position_text(), "1/3");
        assert_eq!(StatusBar::new().cursor(None, 0).position_text(), "-/0");
    }

    #[test]
    fn test_render_status_line() {
        let area = Rect::new(0, 0, 60, 1);
        let mut buf = Buffer::empty(area);

        StatusBar::new()
            .cursor(Some(1), 2)
            .label(Some("b.txt"))
            .size(Some("12 B"))
            .source("stdin")
            .render(area, &mut buf);

        let text: String = buf.content.iter().map(|cell| cell.symbol()).collect();
        assert!(text.starts_with(" 2/2 b.txt (12 B)  [stdin]"));
    }

    #[test]
    fn test_label_keeps_terminal_color_and_extras_use_muted() {
        let area = Rect::new(0, 0, 60, 1);
        let mut buf = Buffer::empty(area);
        let theme = Theme::default();

        StatusBar::new()
            .cursor(Some(0), 1)
            .label(Some("a.txt"))
            .size(Some("3 B"))
            .source("stdin")
            .theme(&theme)
            .render(area, &mut buf);

        // " 1/1 a.txt (3 B)"
        assert_eq!(buf.content[5].symbol(), "a");
        assert_eq!(buf.content[5].fg, Color::Reset);
        assert_eq!(buf.content[11].symbol(), "(");
        assert_eq!(buf.content[11].fg, theme.muted.to_color());
    }
}
