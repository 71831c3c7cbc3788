/// 미리보기 내용
///
/// 선택이 바뀔 때마다 다시 계산되는 파생 상태입니다.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PreviewContent {
    /// 표시할 파일 없음
    #[default]
    Empty,
    /// 로드 전 (동기 로드에서는 첫 프레임 전에 교체됨)
    Loading,
    /// 파일 내용
    Text(String),
    /// 로드 실패 메시지
    Error(String),
}

impl PreviewContent {
    pub const LOADING_TEXT: &'static str = "Loading...";

    /// 미리보기 패널에 표시할 문자열
    pub fn text(&self) -> &str {
        match self {
            PreviewContent::Empty => "",
            PreviewContent::Loading => Self::LOADING_TEXT,
            PreviewContent::Text(text) | PreviewContent::Error(text) => text,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, PreviewContent::Error(_))
    }

    /// 로드된 내용의 바이트 크기
    pub fn loaded_size(&self) -> Option<u64> {
        match self {
            PreviewContent::Text(text) => Some(text.len() as u64),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preview_text() {
        assert_eq!(PreviewContent::Empty.text(), "");
        assert_eq!(PreviewContent::Loading.text(), "Loading...");
        assert_eq!(PreviewContent::Text("hello".into()).text(), "hello");
        assert_eq!(PreviewContent::Error("boom".into()).text(), "boom");
    }

    #[test]
    fn test_loaded_size_only_for_text() {
        assert_eq!(PreviewContent::Text("abc".into()).loaded_size(), Some(3));
        assert_eq!(PreviewContent::Error("abc".into()).loaded_size(), None);
        assert!(PreviewContent::Error("x".into()).is_error());
    }
}
