use crate::models::file_entry::FileEntry;
use crate::utils::error::{PeekError, Result};
use log::warn;
use std::fs::{self, Metadata};
use std::path::{Path, PathBuf};

/// 경로 종류 (링크를 따라가지 않은 lstat 기준)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    /// 미리보기 가능한 파일
    File,
    /// 디렉토리
    Directory,
    /// 심볼릭 링크 (대상이 일반 파일이어도 제외)
    Symlink,
    /// stat 실패 (디렉토리로 간주해 제외)
    Unresolvable,
}

impl EntryKind {
    /// 목록에서 제외되는 종류인지 확인
    pub fn is_excluded(self) -> bool {
        !matches!(self, EntryKind::File)
    }
}

/// 파일 시스템 모듈
#[derive(Debug, Default, Clone, Copy)]
pub struct FileSystem;

impl FileSystem {
    /// 새 파일 시스템 인스턴스 생성
    pub fn new() -> Self {
        Self
    }

    /// 경로 분류
    ///
    /// stat에 실패한 경로는 경고를 남기고 `Unresolvable`로 분류합니다.
    pub fn classify(&self, path: &Path) -> EntryKind {
        match fs::symlink_metadata(path) {
            Ok(metadata) => Self::kind_of(&metadata),
            Err(err) => {
                warn!(
                    "Error checking if path is directory: '{}': {}",
                    path.display(),
                    err
                );
                EntryKind::Unresolvable
            }
        }
    }

    fn kind_of(metadata: &Metadata) -> EntryKind {
        // 1. 심볼릭 링크 확인 (lstat이므로 링크 자체)
        if metadata.file_type().is_symlink() {
            return EntryKind::Symlink;
        }

        // 2. 디렉토리 확인
        if metadata.is_dir() {
            return EntryKind::Directory;
        }

        EntryKind::File
    }

    /// 디렉토리 읽기 (비재귀)
    ///
    /// 디렉토리와 심볼릭 링크를 제외한 파일 엔트리를 이름순으로 반환합니다.
    /// 디렉토리 자체를 읽지 못하면 에러, 개별 엔트리 실패는 스킵합니다.
    pub fn read_directory(&self, path: &Path) -> Result<Vec<FileEntry>> {
        let read_dir = fs::read_dir(path).map_err(|source| PeekError::ReadDirectory {
            path: path.to_path_buf(),
            source,
        })?;

        let mut names = Vec::new();
        for entry in read_dir {
            match entry {
                Ok(entry) => names.push(entry.file_name()),
                Err(err) => warn!("Skipping unreadable entry in '{}': {}", path.display(), err),
            }
        }
        names.sort();

        let entries = names
            .into_iter()
            .map(|name| Self::entry_path(path, name.as_ref()))
            .filter(|entry_path| !self.classify(entry_path).is_excluded())
            .map(FileEntry::new)
            .collect();

        Ok(entries)
    }

    /// 현재 디렉토리(".")를 읽을 때는 파일 이름만 사용
    fn entry_path(dir: &Path, name: &Path) -> PathBuf {
        if dir == Path::new(".") {
            name.to_path_buf()
        } else {
            dir.join(name)
        }
    }
}
