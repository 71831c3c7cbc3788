use super::*;
use crate::core::actions::Action;
use log::{debug, error};

impl App {
    /// 액션 실행
    ///
    /// 방향 이동은 목록 패널에 포커스가 있을 때만 받습니다.
    pub fn execute_action(&mut self, action: Action) -> KeyOutcome {
        if let Some(def) = action.def() {
            debug!("{} ({})", def.label, def.id);
        }

        match action {
            Action::Quit => {
                self.quit();
                KeyOutcome::CONSUMED
            }
            Action::MoveDown | Action::MoveUp if !self.focus.is_list() => KeyOutcome::IGNORED,
            Action::MoveDown => {
                self.cursor.move_down();
                self.after_navigation();
                KeyOutcome::CONSUMED
            }
            Action::MoveUp => {
                self.cursor.move_up();
                self.after_navigation();
                KeyOutcome::CONSUMED
            }
            Action::SwitchFocus => {
                // 포커스만 바꾸고 선택은 건드리지 않음
                self.focus.toggle();
                self.request_redraw();
                KeyOutcome::CONSUMED
            }
        }
    }

    fn after_navigation(&mut self) {
        self.reload_preview();
        self.request_redraw();
    }

    /// 현재 선택된 파일을 다시 읽어 미리보기 갱신
    ///
    /// 읽기 실패는 미리보기 패널에 에러 문자열로 표시합니다.
    pub(super) fn reload_preview(&mut self) {
        let Some(index) = self.cursor.current_index() else {
            self.preview = PreviewContent::Empty;
            return;
        };

        let loaded = self
            .entries
            .at(index)
            .and_then(|entry| self.loader.load(entry.path()));

        self.preview = match loaded {
            Ok(text) => PreviewContent::Text(text),
            Err(err) => {
                error!("{}", err);
                PreviewContent::Error(err.to_string())
            }
        };
    }
}
