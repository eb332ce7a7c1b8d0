use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::sensor::{default_packages, SensorPackage};

/// 기본 설정 파일 경로
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// 패키지 처리 중 오류가 났을 때의 동작.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorPolicy {
    /// 첫 오류에서 처리를 중단한다.
    #[default]
    Abort,
    /// 오류가 난 패키지만 건너뛰고 계속한다.
    Skip,
}

/// 애플리케이션 설정을 표현한다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 언어 코드(en/ko/ru, auto = 시스템 로케일)
    pub language: String,
    /// tracing 필터 (예: warn, debug, fitness_tracker=trace)
    pub log_level: String,
    pub on_error: ErrorPolicy,
    /// 명령줄에 패키지가 없을 때 처리할 목록
    pub packages: Vec<SensorPackage>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: "en".to_string(),
            log_level: "warn".to_string(),
            on_error: ErrorPolicy::Abort,
            packages: default_packages(),
        }
    }
}

/// 설정 로드/저장 시 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("config parse failed: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("config serialization failed: {0}")]
    Serialize(#[from] toml::ser::Error),
    /// 덮어쓰기 없이 기본 설정을 쓰려 했으나 파일이 이미 있음
    #[error("{} already exists (use --force to overwrite)", .0.display())]
    AlreadyExists(PathBuf),
}

impl Config {
    /// TOML 문자열에서 설정을 읽는다. 빠진 항목은 기본값으로 채운다.
    pub fn from_toml(src: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(src)?)
    }

    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// 설정을 파일에 저장한다.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        fs::write(path, self.to_toml()?)?;
        Ok(())
    }
}

/// 설정 파일을 로드하거나 없으면 기본 설정을 돌려준다.
pub fn load_or_default(path: &Path) -> Result<Config, ConfigError> {
    if path.exists() {
        let content = fs::read_to_string(path)?;
        Config::from_toml(&content)
    } else {
        Ok(Config::default())
    }
}

/// 기본 설정을 파일로 쓴다. `force`가 아니면 기존 파일을 덮어쓰지 않는다.
pub fn write_default(path: &Path, force: bool) -> Result<Config, ConfigError> {
    if path.exists() && !force {
        return Err(ConfigError::AlreadyExists(path.to_path_buf()));
    }
    let cfg = Config::default();
    cfg.save(path)?;
    Ok(cfg)
}
