use crate::models::file_entry::FileEntry;
use crate::utils::error::{PeekError, Result};

/// 파일 엔트리 집합
///
/// 해석기가 만든 순서를 그대로 유지하며, 생성 이후에는 변경되지 않습니다.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileEntrySet {
    entries: Vec<FileEntry>,
}

impl FileEntrySet {
    pub fn new(entries: Vec<FileEntry>) -> Self {
        Self { entries }
    }

    /// 엔트리 개수
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// 인덱스로 엔트리 조회
    ///
    /// 범위를 벗어나면 `OutOfRange` 에러. 값을 보정하지 않습니다.
    pub fn at(&self, index: usize) -> Result<&FileEntry> {
        self.entries.get(index).ok_or(PeekError::OutOfRange {
            index,
            len: self.entries.len(),
        })
    }

    pub fn iter(&self) -> impl Iterator<Item = &FileEntry> {
        self.entries.iter()
    }

    /// 표시 대상 엔트리의 레이블 목록 (순서 유지)
    pub fn visible_labels(&self) -> Vec<String> {
        self.iter()
            .filter(|entry| entry.visible)
            .map(FileEntry::label)
            .collect()
    }

    /// 엔트리 인덱스를 표시 목록상의 위치로 변환
    ///
    /// 숨김 엔트리이거나 범위를 벗어나면 None.
    pub fn visible_position(&self, index: usize) -> Option<usize> {
        if !self.entries.get(index)?.visible {
            return None;
        }
        Some(self.entries[..index].iter().filter(|e| e.visible).count())
    }
}

impl From<Vec<FileEntry>> for FileEntrySet {
    fn from(entries: Vec<FileEntry>) -> Self {
        Self::new(entries)
    }
}
