use std::path::{Path, PathBuf};

/// 파일 엔트리
///
/// 목록에 표시되고 미리보기 대상이 되는 단일 파일.
/// 디렉토리와 심볼릭 링크는 해석 단계에서 제외되므로 여기에 들어오지 않습니다.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    /// 파일 경로 (스캔 결과 또는 파이프로 받은 문자열 그대로)
    pub path: PathBuf,
    /// 표시 여부 (향후 필터링용, 생성 후 변경하지 않음)
    pub visible: bool,
}

impl FileEntry {
    /// 새 파일 엔트리 생성 (기본 표시 상태)
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            visible: true,
        }
    }

    /// 경로 반환
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// 목록 표시용 레이블
    pub fn label(&self) -> String {
        self.path.to_string_lossy().into_owned()
    }
}
