//! 설정 관리.
//!
//! 애플리케이션 설정을 정의하고 로드합니다.
//! 로드 순서: 기본값 → 설정 파일(선택) → `JOURNAL__` 환경 변수.

use serde::{Deserialize, Serialize};
use std::path::Path;

/// 애플리케이션 설정.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    /// 저널 문서가 저장되는 디렉터리
    pub data_dir: String,
    /// 로깅 설정
    pub logging: LoggingConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_dir: ".fxjournal".to_string(),
            logging: LoggingConfig::default(),
        }
    }
}

/// 로깅 설정.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    /// 로그 레벨
    pub level: String,
    /// 로그 형식 (pretty, json, compact)
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}

impl AppConfig {
    /// 파일과 환경 변수에서 설정을 로드합니다.
    pub fn load<P: AsRef<Path>>(path: Option<P>) -> Result<Self, config::ConfigError> {
        let mut builder = config::Config::builder()
            // 기본값으로 시작
            .set_default("data_dir", ".fxjournal")?
            .set_default("logging.level", "info")?
            .set_default("logging.format", "pretty")?;

        // 파일에서 로드 (없으면 무시)
        if let Some(path) = path {
            builder = builder.add_source(config::File::from(path.as_ref()).required(false));
        }

        // 환경 변수로 오버라이드
        builder = builder.add_source(
            config::Environment::with_prefix("JOURNAL")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder.build()?;
        config.try_deserialize()
    }

    /// 기본 경로에서 설정을 로드합니다.
    pub fn load_default() -> Result<Self, config::ConfigError> {
        Self::load(Some("fxjournal.toml"))
    }
}
