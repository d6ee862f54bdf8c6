use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

/// 기본 설정 파일 이름. 작업 디렉터리 기준이다.
pub const CONFIG_FILE: &str = "config.toml";

/// 애플리케이션 설정을 표현한다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 언어 코드(auto/en/ko)
    pub language: String,
    /// 언어팩 TOML 디렉터리
    pub language_pack_dir: Option<String>,
    /// 사용자 참조 데이터 TOML. 없으면 내장 계수표를 쓴다.
    pub reference_data_path: Option<String>,
    /// 화면에 처음 선택되는 재료
    pub default_material: String,
    /// 화면에 처음 선택되는 에너지원
    pub default_energy: String,
    /// 내보내는 보고서 파일 이름
    pub report_file_name: String,
    /// GUI 창 투명도(0.3~1.0)
    pub window_alpha: f32,
    /// GUI 사용자 폰트 경로(.ttf/.ttc)
    pub custom_font_path: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: "auto".into(),
            language_pack_dir: None,
            reference_data_path: None,
            default_material: "ammonia".into(),
            default_energy: "natural_gas".into(),
            report_file_name: crate::report::REPORT_FILE_NAME.into(),
            window_alpha: 1.0,
            custom_font_path: None,
        }
    }
}

/// 설정 로드/저장 시 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// 파일 입출력 오류
    #[error("config I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML 역직렬화 오류
    #[error("config parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// TOML 직렬화 오류
    #[error("config serialize error: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// config.toml을 로드하거나 없으면 기본 설정을 생성한다.
pub fn load_or_default() -> Result<Config, ConfigError> {
    load_or_create(CONFIG_FILE)
}

/// 지정 경로의 설정을 로드한다. 파일이 없으면 기본값을 저장한 뒤 돌려준다.
pub fn load_or_create(path: impl AsRef<Path>) -> Result<Config, ConfigError> {
    let path = path.as_ref();
    if path.exists() {
        let content = fs::read_to_string(path)?;
        let cfg: Config = toml::from_str(&content)?;
        debug!(path = %path.display(), "config loaded");
        Ok(cfg)
    } else {
        let cfg = Config::default();
        save_config(&cfg, path)?;
        info!(path = %path.display(), "default config created");
        Ok(cfg)
    }
}

fn save_config(cfg: &Config, path: &Path) -> Result<(), ConfigError> {
    let content = toml::to_string_pretty(cfg)?;
    fs::write(path, content)?;
    Ok(())
}

impl Config {
    /// 설정을 config.toml에 저장한다.
    pub fn save(&self) -> Result<(), ConfigError> {
        save_config(self, Path::new(CONFIG_FILE))
    }

    pub fn save_to(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        save_config(self, path.as_ref())
    }

    /// 보고서 파일 이름이 비어 있으면 기본 이름을 쓴다.
    pub fn report_path_in(&self, dir: impl AsRef<Path>) -> PathBuf {
        let name = if self.report_file_name.trim().is_empty() {
            crate::report::REPORT_FILE_NAME
        } else {
            self.report_file_name.trim()
        };
        dir.as_ref().join(name)
    }
}
