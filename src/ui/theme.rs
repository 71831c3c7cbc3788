use ratatui::style::Color;
use serde::{Deserialize, Serialize};

/// 색상 테마
///
/// 설정 파일의 `[theme]` 섹션에서 로드되며, 빠진 항목은 기본값을 사용합니다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Theme {
    // 패널 테두리
    pub focus_border: ColorDef,
    pub default_border: ColorDef,

    // 목록
    pub hint: ColorDef,
    pub selected_fg: ColorDef,
    pub selected_bg: ColorDef,

    // 강조
    pub error: ColorDef,
    pub warning: ColorDef,
    pub muted: ColorDef,
}

impl Default for Theme {
    fn default() -> Self {
        Theme {
            focus_border: "green".into(),
            default_border: "white".into(),
            hint: "green".into(),
            selected_fg: "black".into(),
            selected_bg: "green".into(),
            error: "red".into(),
            warning: "yellow".into(),
            muted: "darkgray".into(),
        }
    }
}

/// 색상 정의
///
/// Hex 문자열("#1e1e1e") 또는 색상 이름("Red")을 지원합니다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColorDef(String);

impl ColorDef {
    /// ratatui의 Color로 변환 (알 수 없는 값은 Reset)
    pub fn to_color(&self) -> Color {
        if self.0.starts_with('#') {
            parse_hex_color(&self.0)
        } else {
            parse_named_color(&self.0)
        }
    }

    /// 해석 가능한 색상인지 확인
    pub fn is_valid(&self) -> bool {
        self.0.eq_ignore_ascii_case("reset") || self.to_color() != Color::Reset
    }
}

impl From<&str> for ColorDef {
    fn from(s: &str) -> Self {
        ColorDef(s.to_string())
    }
}

/// Hex 색상 문자열을 Color로 파싱
fn parse_hex_color(hex: &str) -> Color {
    let hex = hex.trim_start_matches('#');

    if hex.len() != 6 || !hex.is_ascii() {
        return Color::Reset;
    }

    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16);
    match (channel(0..2), channel(2..4), channel(4..6)) {
        (Ok(r), Ok(g), Ok(b)) => Color::Rgb(r, g, b),
        _ => Color::Reset,
    }
}

/// 색상 이름을 Color로 파싱
fn parse_named_color(name: &str) -> Color {
    match name.to_lowercase().as_str() {
        "black" => Color::Black,
        "red" => Color::Red,
        "green" => Color::Green,
        "yellow" => Color::Yellow,
        "blue" => Color::Blue,
        "magenta" => Color::Magenta,
        "cyan" => Color::Cyan,
        "gray" | "grey" => Color::Gray,
        "darkgray" | "darkgrey" => Color::DarkGray,
        "lightred" => Color::LightRed,
        "lightgreen" => Color::LightGreen,
        "lightyellow" => Color::LightYellow,
        "lightblue" => Color::LightBlue,
        "lightmagenta" => Color::LightMagenta,
        "lightcyan" => Color::LightCyan,
        "white" => Color::White,
        _ => Color::Reset,
    }
}

impl Theme {
    /// 해석할 수 없는 색상 항목 이름 목록
    pub fn invalid_fields(&self) -> Vec<&'static str> {
        [
            ("focus_border", &self.focus_border),
            ("default_border", &self.default_border),
            ("hint", &self.hint),
            ("selected_fg", &self.selected_fg),
            ("selected_bg", &self.selected_bg),
            ("error", &self.error),
            ("warning", &self.warning),
            ("muted", &self.muted),
        ]
        .into_iter()
        .filter(|(_, color)| !color.is_valid())
        .map(|(name, _)| name)
        .collect()
    }
}
