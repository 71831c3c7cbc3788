#[cfg(test)]
use crate::utils::error::{PeekError, Result};

/// 선택 커서
///
/// 엔트리 집합 안에서 현재 하이라이트된 인덱스를 추적합니다.
/// 양 끝에서 반대쪽으로 순환합니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionCursor {
    current: usize,
    len: usize,
}

impl SelectionCursor {
    /// `len`개 항목에 대한 커서 생성 (인덱스 0에서 시작)
    pub fn new(len: usize) -> Self {
        Self { current: 0, len }
    }

    /// 현재 인덱스. 항목이 없으면 None
    pub fn current_index(&self) -> Option<usize> {
        (self.len > 0).then_some(self.current)
    }

    /// 아래로 이동 (마지막이면 처음으로)
    pub fn move_down(&mut self) {
        if self.len == 0 {
            return;
        }
        if self.current + 1 >= self.len {
            self.current = 0;
        } else {
            self.current += 1;
        }
        self.check_invariant();
    }

    /// 위로 이동 (처음이면 마지막으로)
    pub fn move_up(&mut self) {
        if self.len == 0 {
            return;
        }
        if self.current == 0 {
            self.current = self.len - 1;
        } else {
            self.current -= 1;
        }
        self.check_invariant();
    }

    /// 인덱스 직접 설정
    #[cfg(test)]
    pub fn set_index(&mut self, index: usize) -> Result<()> {
        if index >= self.len {
            return Err(PeekError::OutOfRange {
                index,
                len: self.len,
            });
        }
        self.current = index;
        self.check_invariant();
        Ok(())
    }

    fn check_invariant(&self) {
        debug_assert!(
            self.len == 0 || self.current < self.len,
            "cursor {} escaped [0, {})",
            self.current,
            self.len
        );
    }
}
