/// 포커스 상태
///
/// 방향키 입력을 받는 패널. 목록과 미리보기 두 가지뿐입니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    List,
    Preview,
}

impl Focus {
    /// 포커스 전환
    pub fn toggle(&mut self) {
        *self = match self {
            Focus::List => Focus::Preview,
            Focus::Preview => Focus::List,
        };
    }

    pub fn current(self) -> Focus {
        self
    }

    /// 목록 패널에 포커스가 있는지 확인
    pub fn is_list(self) -> bool {
        self == Focus::List
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_list() {
        assert_eq!(Focus::default(), Focus::List);
        assert!(Focus::default().is_list());
    }

    #[test]
    fn test_toggle_always_changes_state() {
        let mut focus = Focus::List;

        focus.toggle();
        assert_eq!(focus.current(), Focus::Preview);

        focus.toggle();
        assert_eq!(focus.current(), Focus::List);
    }
}
