use crate::utils::error::{PeekError, Result};
use std::fs;
use std::path::Path;

/// 콘텐츠 로더
///
/// 매 호출마다 파일 전체를 동기적으로 다시 읽습니다. 캐시 없음.
#[derive(Debug, Default, Clone, Copy)]
pub struct ContentLoader;

impl ContentLoader {
    pub fn new() -> Self {
        Self
    }

    /// 파일 내용을 텍스트로 읽기
    ///
    /// 읽기 실패는 `ReadFile`, UTF-8이 아닌 내용은 `NotText`.
    pub fn load(&self, path: &Path) -> Result<String> {
        let bytes = fs::read(path).map_err(|source| PeekError::ReadFile {
            path: path.to_path_buf(),
            source,
        })?;

        String::from_utf8(bytes).map_err(|_| PeekError::NotText {
            path: path.to_path_buf(),
        })
    }
}
