// Layout system - 목록/미리보기 2분할 레이아웃
//
// - 40x10 이상: 목록 | 미리보기 + 상태바 + 힌트 바
// - 그보다 작으면: 경고 메시지 표시

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// 최소 터미널 크기 상수
pub const MIN_WIDTH: u16 = 40;
pub const MIN_HEIGHT: u16 = 10;

/// 레이아웃 모드
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutMode {
    /// 목록 + 미리보기
    Split,
    /// 경고 모드 (터미널이 너무 작음)
    TooSmall,
}

/// 패널 비율 설정 (목록 : 미리보기)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelRatio {
    pub list: u16,
    pub preview: u16,
}

impl Default for PanelRatio {
    fn default() -> Self {
        Self {
            list: 1,
            preview: 2,
        }
    }
}

impl PanelRatio {
    pub fn new(list: u16, preview: u16) -> Self {
        Self { list, preview }
    }

    fn constraints(self) -> [Constraint; 2] {
        let total = u32::from(self.list) + u32::from(self.preview);
        [
            Constraint::Ratio(u32::from(self.list), total),
            Constraint::Ratio(u32::from(self.preview), total),
        ]
    }
}

/// 레이아웃 영역
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LayoutAreas {
    /// 파일 목록 패널
    pub list_panel: Rect,
    /// 미리보기 패널
    pub preview_panel: Rect,
    /// 상태바 영역
    pub status_bar: Rect,
    /// 하단 힌트 바 영역
    pub command_bar: Rect,
    /// 경고 메시지 영역 (TooSmall 모드에서 사용)
    pub warning: Rect,
}

/// 레이아웃 매니저
#[derive(Debug)]
pub struct LayoutManager {
    mode: LayoutMode,
    ratio: PanelRatio,
    terminal_size: (u16, u16),
    areas: LayoutAreas,
}

impl Default for LayoutManager {
    fn default() -> Self {
        Self::new(PanelRatio::default())
    }
}

impl LayoutManager {
    pub fn new(ratio: PanelRatio) -> Self {
        Self {
            mode: LayoutMode::Split,
            ratio,
            terminal_size: (0, 0),
            areas: LayoutAreas::default(),
        }
    }

    /// 터미널 크기에 따라 레이아웃 모드 결정
    fn determine_mode(width: u16, height: u16) -> LayoutMode {
        if width < MIN_WIDTH || height < MIN_HEIGHT {
            LayoutMode::TooSmall
        } else {
            LayoutMode::Split
        }
    }

    /// 터미널 크기 업데이트 및 레이아웃 재계산
    pub fn update(&mut self, area: Rect) {
        self.terminal_size = (area.width, area.height);
        self.mode = Self::determine_mode(area.width, area.height);
        self.areas = match self.mode {
            LayoutMode::TooSmall => LayoutAreas {
                warning: area,
                ..Default::default()
            },
            LayoutMode::Split => self.calculate_split_areas(area),
        };
    }

    fn calculate_split_areas(&self, area: Rect) -> LayoutAreas {
        // 패널 | 상태바 | 힌트 바
        let vertical_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(3),
                Constraint::Length(1),
                Constraint::Length(1),
            ])
            .split(area);

        let panel_chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(self.ratio.constraints())
            .split(vertical_chunks[0]);

        LayoutAreas {
            list_panel: panel_chunks[0],
            preview_panel: panel_chunks[1],
            status_bar: vertical_chunks[1],
            command_bar: vertical_chunks[2],
            warning: Rect::default(),
        }
    }

    pub fn mode(&self) -> LayoutMode {
        self.mode
    }

    pub fn areas(&self) -> &LayoutAreas {
        &self.areas
    }

    pub fn terminal_size(&self) -> (u16, u16) {
        self.terminal_size
    }
}
