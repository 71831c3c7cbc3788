use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PeekError {
    /// 시작 디렉토리를 읽을 수 없음 (치명적)
    #[error("Cannot read directory '{}': {source}", path.display())]
    ReadDirectory {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// 파이프 입력 스트림을 읽을 수 없음 (치명적)
    #[error("Cannot read piped input: {0}")]
    ReadInput(#[source] std::io::Error),

    #[error("Error reading path '{}': {source}", path.display())]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("'{}' is not a text file", path.display())]
    NotText { path: PathBuf },

    #[error("Index {index} out of range (len {len})")]
    OutOfRange { index: usize, len: usize },

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, PeekError>;
