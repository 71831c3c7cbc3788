//! 액션 시스템
//!
//! 키 바인딩과 하단 힌트 바 항목이 모두 이 모듈의 레지스트리를 참조합니다.

use crate::ui::components::command_bar::CommandItem;
use crossterm::event::{KeyCode, KeyModifiers};
use std::sync::LazyLock;

/// 모든 가능한 액션의 열거
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    MoveUp,
    MoveDown,
    SwitchFocus,
    Quit,
}

/// 하단 힌트 바 표시 정보
pub struct CommandBarEntry {
    pub key: &'static str,
    pub label: &'static str,
    /// 낮을수록 앞에 표시
    pub priority: u8,
}

/// 액션 메타데이터
pub struct ActionDef {
    pub action: Action,
    pub id: &'static str,
    pub label: &'static str,
    pub command_bar: Option<CommandBarEntry>,
}

/// 키 바인딩 정의
pub struct KeyBinding {
    pub code: KeyCode,
    pub modifiers: Option<KeyModifiers>, // None = any modifier
    pub action: Action,
}

/// 모든 액션 메타데이터
pub static ACTION_DEFS: &[ActionDef] = &[
    ActionDef {
        action: Action::MoveUp,
        id: "move_up",
        label: "Move up",
        command_bar: Some(CommandBarEntry {
            key: "k/↑",
            label: "Up",
            priority: 20,
        }),
    },
    ActionDef {
        action: Action::MoveDown,
        id: "move_down",
        label: "Move down",
        command_bar: Some(CommandBarEntry {
            key: "j/↓",
            label: "Down",
            priority: 10,
        }),
    },
    ActionDef {
        action: Action::SwitchFocus,
        id: "switch_focus",
        label: "Switch pane",
        command_bar: Some(CommandBarEntry {
            key: "Tab",
            label: "Pane",
            priority: 30,
        }),
    },
    ActionDef {
        action: Action::Quit,
        id: "quit",
        label: "Quit",
        command_bar: Some(CommandBarEntry {
            key: "q",
            label: "Quit",
            priority: 90,
        }),
    },
];

fn build_key_bindings() -> Vec<KeyBinding> {
    vec![
        KeyBinding {
            code: KeyCode::Char('q'),
            modifiers: Some(KeyModifiers::NONE),
            action: Action::Quit,
        },
        KeyBinding {
            code: KeyCode::Char('c'),
            modifiers: Some(KeyModifiers::CONTROL),
            action: Action::Quit,
        },
        KeyBinding {
            code: KeyCode::Char('j'),
            modifiers: Some(KeyModifiers::NONE),
            action: Action::MoveDown,
        },
        KeyBinding {
            code: KeyCode::Down,
            modifiers: None,
            action: Action::MoveDown,
        },
        KeyBinding {
            code: KeyCode::Char('k'),
            modifiers: Some(KeyModifiers::NONE),
            action: Action::MoveUp,
        },
        KeyBinding {
            code: KeyCode::Up,
            modifiers: None,
            action: Action::MoveUp,
        },
        KeyBinding {
            code: KeyCode::Tab,
            modifiers: None,
            action: Action::SwitchFocus,
        },
    ]
}

static KEY_BINDINGS: LazyLock<Vec<KeyBinding>> = LazyLock::new(build_key_bindings);

/// 키 바인딩 목록 조회 (1회 초기화 후 재사용)
pub fn key_bindings() -> &'static [KeyBinding] {
    KEY_BINDINGS.as_slice()
}

/// 키 입력으로 액션 조회
pub fn find_action(modifiers: KeyModifiers, code: KeyCode) -> Option<Action> {
    key_bindings()
        .iter()
        .find(|binding| {
            let mod_matches = match binding.modifiers {
                None => true,
                Some(required) => modifiers == required,
            };
            binding.code == code && mod_matches
        })
        .map(|binding| binding.action)
}

impl Action {
    /// 액션 메타데이터 조회
    pub fn def(self) -> Option<&'static ActionDef> {
        ACTION_DEFS.iter().find(|d| d.action == self)
    }
}

/// 힌트 바 항목 생성 (priority 순 정렬)
pub fn generate_command_bar_items() -> Vec<CommandItem> {
    let mut entries: Vec<&CommandBarEntry> = ACTION_DEFS
        .iter()
        .filter_map(|def| def.command_bar.as_ref())
        .collect();
    entries.sort_by_key(|entry| entry.priority);
    entries
        .into_iter()
        .map(|entry| CommandItem::new(entry.key, entry.label))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_action_navigation() {
        assert_eq!(
            find_action(KeyModifiers::NONE, KeyCode::Char('j')),
            Some(Action::MoveDown)
        );
        assert_eq!(
            find_action(KeyModifiers::NONE, KeyCode::Char('k')),
            Some(Action::MoveUp)
        );
        assert_eq!(
            find_action(KeyModifiers::NONE, KeyCode::Down),
            Some(Action::MoveDown)
        );
        assert_eq!(
            find_action(KeyModifiers::NONE, KeyCode::Up),
            Some(Action::MoveUp)
        );
    }

    #[test]
    fn test_find_action_quit() {
        assert_eq!(
            find_action(KeyModifiers::NONE, KeyCode::Char('q')),
            Some(Action::Quit)
        );
        assert_eq!(
            find_action(KeyModifiers::CONTROL, KeyCode::Char('c')),
            Some(Action::Quit)
        );
        // 수식키 없는 'c'는 바인딩 없음
        assert_eq!(find_action(KeyModifiers::NONE, KeyCode::Char('c')), None);
    }

    #[test]
    fn test_find_action_any_modifier() {
        assert_eq!(
            find_action(KeyModifiers::NONE, KeyCode::Tab),
            Some(Action::SwitchFocus)
        );
        assert_eq!(
            find_action(KeyModifiers::SHIFT, KeyCode::Tab),
            Some(Action::SwitchFocus)
        );
    }

    #[test]
    fn test_unbound_keys() {
        assert_eq!(find_action(KeyModifiers::NONE, KeyCode::Char('x')), None);
        assert_eq!(find_action(KeyModifiers::NONE, KeyCode::Enter), None);
        assert_eq!(find_action(KeyModifiers::CONTROL, KeyCode::Char('j')), None);
    }

    #[test]
    fn test_every_action_has_def() {
        for action in [
            Action::MoveUp,
            Action::MoveDown,
            Action::SwitchFocus,
            Action::Quit,
        ] {
            assert!(action.def().is_some(), "{action:?}");
        }
    }

    #[test]
    fn test_generate_command_bar_items() {
        let items = generate_command_bar_items();
        assert_eq!(items.len(), 4);
        assert_eq!(items[0].label, "Down");
        assert_eq!(items.last().unwrap().key, "q");
    }
}
