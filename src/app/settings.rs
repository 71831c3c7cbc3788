use crate::ui::{PanelRatio, Theme};
use crate::utils::error::{PeekError, Result};
use log::debug;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// 설정 파일 경로를 덮어쓰는 환경 변수
pub const CONFIG_FILE_ENV: &str = "PEEK_CONFIG_FILE";

/// 레이아웃 설정
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutSettings {
    pub list_ratio: u16,
    pub preview_ratio: u16,
}

impl Default for LayoutSettings {
    fn default() -> Self {
        let ratio = PanelRatio::default();
        Self {
            list_ratio: ratio.list,
            preview_ratio: ratio.preview,
        }
    }
}

impl LayoutSettings {
    pub fn panel_ratio(&self) -> PanelRatio {
        PanelRatio::new(self.list_ratio, self.preview_ratio)
    }
}

/// 사용자 설정 (TOML)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub theme: Theme,
    pub layout: LayoutSettings,
}

impl Settings {
    /// 기본 위치에서 설정 로드
    ///
    /// 파일이 없으면 기본값, 읽기/파싱/검증 실패는 에러입니다.
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    fn config_path() -> Option<PathBuf> {
        if let Ok(custom) = env::var(CONFIG_FILE_ENV) {
            let trimmed = custom.trim();
            if !trimmed.is_empty() {
                return Some(PathBuf::from(trimmed));
            }
        }
        dirs::config_dir().map(|dir| dir.join("peek").join("config.toml"))
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                debug!("No config at '{}', using defaults", path.display());
                return Ok(Self::default());
            }
            Err(err) => {
                return Err(PeekError::Config(format!(
                    "cannot read '{}': {}",
                    path.display(),
                    err
                )))
            }
        };

        let settings = Self::parse(&content)
            .map_err(|msg| PeekError::Config(format!("'{}': {}", path.display(), msg)))?;
        debug!("Loaded config from '{}'", path.display());
        Ok(settings)
    }

    fn parse(content: &str) -> std::result::Result<Self, String> {
        let settings: Settings = toml::from_str(content).map_err(|e| e.to_string())?;

        if settings.layout.list_ratio == 0 || settings.layout.preview_ratio == 0 {
            return Err("layout ratios must be greater than zero".to_string());
        }

        let invalid = settings.theme.invalid_fields();
        if !invalid.is_empty() {
            return Err(format!("unknown color in theme: {}", invalid.join(", ")));
        }

        Ok(settings)
    }
}
