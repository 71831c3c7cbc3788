use crate::core::actions::find_action;
use crate::models::{FileEntrySet, Focus, PreviewContent, SelectionCursor};
use crate::system::{ContentLoader, Resolved, Source};
use crate::ui::{LayoutManager, Theme};
use crossterm::event::{KeyCode, KeyModifiers};

mod navigation;
pub mod settings;


pub use settings::Settings;

/// 키 처리 결과
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyOutcome {
    /// false면 렌더러 쪽으로 그대로 넘어감
    pub consumed: bool,
}

impl KeyOutcome {
    pub const CONSUMED: KeyOutcome = KeyOutcome { consumed: true };
    pub const IGNORED: KeyOutcome = KeyOutcome { consumed: false };
}

/// 애플리케이션 상태 + 입력 컨트롤러
///
/// 커서, 포커스, 미리보기를 모두 소유하며 이벤트 루프 스레드에서만 변경됩니다.
pub struct App {
    /// 종료 플래그
    should_quit: bool,
    /// 다음 루프에서 다시 그려야 하는지
    redraw_requested: bool,
    /// 입력 출처
    source: Source,
    /// 파일 목록 (생성 후 불변)
    entries: FileEntrySet,
    /// 표시용 레이블 캐시
    labels: Vec<String>,
    cursor: SelectionCursor,
    focus: Focus,
    preview: PreviewContent,
    loader: ContentLoader,
    pub layout: LayoutManager,
    theme: Theme,
}

impl App {
    /// 해석된 파일 목록으로 앱 생성
    ///
    /// 첫 번째 파일(있다면)을 바로 로드합니다.
    pub fn new(resolved: Resolved, settings: Settings) -> Self {
        let Resolved { source, entries } = resolved;
        let mut app = Self {
            should_quit: false,
            redraw_requested: true,
            source,
            labels: entries.visible_labels(),
            cursor: SelectionCursor::new(entries.len()),
            entries,
            focus: Focus::default(),
            preview: PreviewContent::Loading,
            loader: ContentLoader::new(),
            layout: LayoutManager::new(settings.layout.panel_ratio()),
            theme: settings.theme,
        };
        app.reload_preview();
        app
    }

    /// 키 입력 처리
    pub fn handle_key(&mut self, modifiers: KeyModifiers, code: KeyCode) -> KeyOutcome {
        match find_action(modifiers, code) {
            Some(action) => self.execute_action(action),
            None => KeyOutcome::IGNORED,
        }
    }

    /// 종료
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_redraw(&mut self) {
        self.redraw_requested = true;
    }

    /// 다시 그리기 요청을 꺼내고 초기화
    pub fn take_redraw_request(&mut self) -> bool {
        std::mem::take(&mut self.redraw_requested)
    }

    pub fn source(&self) -> &Source {
        &self.source
    }

    pub fn entries(&self) -> &FileEntrySet {
        &self.entries
    }

    /// 목록 패널에 표시할 레이블
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn current_index(&self) -> Option<usize> {
        self.cursor.current_index()
    }

    /// 커서 위치를 표시 목록 기준으로 변환
    pub fn selected_position(&self) -> Option<usize> {
        self.current_index()
            .and_then(|index| self.entries.visible_position(index))
    }

    /// 선택된 파일 레이블
    pub fn selected_label(&self) -> Option<String> {
        let index = self.current_index()?;
        self.entries.at(index).ok().map(|entry| entry.label())
    }

    pub fn focus(&self) -> Focus {
        self.focus.current()
    }

    pub fn preview(&self) -> &PreviewContent {
        &self.preview
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }
}
