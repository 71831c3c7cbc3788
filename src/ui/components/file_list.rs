// File list component - 파일 목록 패널
//
// 사용법 힌트, 레이블 목록, 커서 하이라이트, 포커스 테두리 렌더링

use crate::ui::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Widget},
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// 목록 상단 사용법 힌트
pub const USAGE_HINTS: [&str; 2] = [
    "Press (q) to exit.",
    "Use (j) and (k) or the arrows to select file.",
];

/// 파일 목록 패널 컴포넌트
pub struct FileListPanel<'a> {
    /// 표시할 레이블 (표시 대상만, 순서 유지)
    labels: &'a [String],
    /// 하이라이트 위치 (labels 기준)
    selected: Option<usize>,
    /// 포커스 여부
    focused: bool,
    focus_border_color: Color,
    default_border_color: Color,
    hint_color: Color,
    selected_fg_color: Color,
    selected_bg_color: Color,
    muted_color: Color,
}

impl<'a> FileListPanel<'a> {
    pub fn new(labels: &'a [String]) -> Self {
        Self {
            labels,
            selected: None,
            focused: false,
            focus_border_color: Color::Green,
            default_border_color: Color::White,
            hint_color: Color::Green,
            selected_fg_color: Color::Black,
            selected_bg_color: Color::Green,
            muted_color: Color::DarkGray,
        }
    }

    pub fn selected(mut self, selected: Option<usize>) -> Self {
        self.selected = selected;
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
        self.hint_color = theme.hint.to_color();
        self.selected_fg_color = theme.selected_fg.to_color();
        self.selected_bg_color = theme.selected_bg.to_color();
        self.muted_color = theme.muted.to_color();
        self
    }

    fn border_color(&self) -> Color {
        if self.focused {
            self.focus_border_color
        } else {
            self.default_border_color
        }
    }

    /// 커서가 항상 보이도록 스크롤 오프셋 계산
    fn scroll_offset(selected: Option<usize>, visible_rows: usize) -> usize {
        match selected {
            Some(index) if visible_rows > 0 && index >= visible_rows => index + 1 - visible_rows,
            _ => 0,
        }
    }

    /// 이름을 최대 너비로 잘라냄 (확장자 보존)
    ///
    /// 중간 생략 방식: "very_long_fi....txt"
    /// 확장자가 없거나 너무 길면 끝에서 자름
    fn truncate_label(label: &str, max_width: usize) -> String {
        if label.width() <= max_width {
            return label.to_string();
        }

        let ellipsis = "...";
        let ellipsis_width = 3;
        if max_width <= ellipsis_width {
            return ".".repeat(max_width);
        }

        let (stem, ext) = match label.rfind('.') {
            Some(dot_pos) if dot_pos > 0 && !label[dot_pos..].contains('/') => {
                (&label[..dot_pos], &label[dot_pos..])
            }
            _ => (label, ""),
        };

        if ext.is_empty() || ellipsis_width + ext.width() >= max_width {
            return Self::take_width(label, max_width - ellipsis_width) + ellipsis;
        }

        let available_stem_width = max_width - ellipsis_width - ext.width();
        Self::take_width(stem, available_stem_width) + ellipsis + ext
    }

    fn take_width(text: &str, max_width: usize) -> String {
        let mut taken = String::new();
        let mut current_width = 0;
        for ch in text.chars() {
            let ch_width = ch.width().unwrap_or(1);
            if current_width + ch_width > max_width {
                break;
            }
            taken.push(ch);
            current_width += ch_width;
        }
        taken
    }
}

impl Widget for FileListPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.border_color()))
            .title(Span::styled(
                " Files ",
                Style::default().add_modifier(Modifier::BOLD),
            ));

        let inner = block.inner(area);
        block.render(area, buf);

        let mut y: u16 = 0;
        for hint in USAGE_HINTS {
            if y >= inner.height {
                return;
            }
            let line = Line::from(Span::styled(hint, Style::default().fg(self.hint_color)));
            buf.set_line(inner.x, inner.y + y, &line, inner.width);
            y += 1;
        }

        let rows = (inner.height - y) as usize;
        if rows == 0 {
            return;
        }

        if self.labels.is_empty() {
            let empty = Line::from(Span::styled(
                "(No files)",
                Style::default().fg(self.muted_color),
            ));
            buf.set_line(inner.x, inner.y + y, &empty, inner.width);
            return;
        }

        let offset = Self::scroll_offset(self.selected, rows);
        let max_width = inner.width as usize;
        for (i, label) in self.labels.iter().enumerate().skip(offset).take(rows) {
            let text = Self::truncate_label(label, max_width);
            let row_y = inner.y + y;
            if Some(i) == self.selected {
                let style = Style::default()
                    .fg(self.selected_fg_color)
                    .bg(self.selected_bg_color);
                buf.set_style(Rect::new(inner.x, row_y, inner.width, 1), style);
                buf.set_line(inner.x, row_y, &Line::from(Span::styled(text, style)), inner.width);
            } else {
                buf.set_line(inner.x, row_y, &Line::from(text), inner.width);
            }
            y += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn buffer_lines(buf: &Buffer) -> Vec<String> {
        let width = buf.area.width as usize;
        buf.content
            .chunks(width)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect())
            .collect()
    }

    #[test]
    fn test_truncate_label() {
        assert_eq!(FileListPanel::truncate_label("test.txt", 20), "test.txt");

        let long_name = "very_long_filename_that_should_be_truncated.txt";
        let truncated = FileListPanel::truncate_label(long_name, 20);
        assert!(truncated.contains("..."));
        assert!(truncated.ends_with(".txt"));
        assert!(truncated.width() <= 20);

        let no_ext = FileListPanel::truncate_label("abcdefghijklmnop", 10);
        assert_eq!(no_ext, "abcdefg...");
    }

    #[test]
    fn test_scroll_offset_keeps_cursor_visible() {
        assert_eq!(FileListPanel::scroll_offset(None, 5), 0);
        assert_eq!(FileListPanel::scroll_offset(Some(4), 5), 0);
        assert_eq!(FileListPanel::scroll_offset(Some(5), 5), 1);
        assert_eq!(FileListPanel::scroll_offset(Some(9), 5), 5);
    }

    #[test]
    fn test_render_hints_and_labels() {
        let labels = vec!["a.txt".to_string(), "b.txt".to_string()];
        let area = Rect::new(0, 0, 50, 8);
        let mut buf = Buffer::empty(area);

        FileListPanel::new(&labels)
            .selected(Some(1))
            .focused(true)
            .render(area, &mut buf);

        let lines = buffer_lines(&buf);
        assert!(lines[0].contains("Files"));
        assert!(lines[1].contains("Press (q) to exit."));
        assert!(lines[3].contains("a.txt"));
        assert!(lines[4].contains("b.txt"));
        assert_eq!(buf.content[4 * 50 + 1].bg, Color::Green);
        assert_eq!(buf.content[0].fg, Color::Green);
    }

    #[test]
    fn test_render_unfocused_border() {
        let labels: Vec<String> = Vec::new();
        let area = Rect::new(0, 0, 50, 8);
        let mut buf = Buffer::empty(area);

        FileListPanel::new(&labels).render(area, &mut buf);

        assert_eq!(buf.content[0].fg, Color::White);
        assert!(buffer_lines(&buf)[3].contains("(No files)"));
    }
}
