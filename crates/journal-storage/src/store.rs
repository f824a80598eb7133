//! 키-값 문서 저장소.
//!
//! 데이터 디렉터리 안에 저장 키마다 `<key>.json` 문서 하나를 둡니다.
//! 쓰기는 임시 파일에 기록 후 원자적 rename으로 교체하므로,
//! 실패한 쓰기가 이전 문서를 훼손하지 않습니다.

use journal_core::{Goals, Settings, TradeRecord};
use serde::{de::DeserializeOwned, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use uuid::Uuid;

use crate::error::{StorageError, StorageResult};

/// 거래 컬렉션 저장 키.
pub const TRADES_KEY: &str = "forex_trades";
/// 설정 저장 키.
pub const SETTINGS_KEY: &str = "forex_settings";
/// 목표 저장 키.
pub const GOALS_KEY: &str = "forex_goals";

/// 저널 문서 저장소.
#[derive(Debug, Clone)]
pub struct JournalStore {
    dir: PathBuf,
}

impl JournalStore {
    /// 데이터 디렉터리를 열거나 생성합니다.
    pub fn open(dir: impl Into<PathBuf>) -> StorageResult<Self> {
        let dir = dir.into();

        fs::create_dir_all(&dir).map_err(|source| StorageError::Io {
            key: dir.display().to_string(),
            source,
        })?;

        Ok(Self { dir })
    }

    /// 데이터 디렉터리 경로를 반환합니다.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// 거래 컬렉션을 로드합니다. 키 부재 시 빈 목록입니다.
    pub fn load_trades(&self) -> StorageResult<Vec<TradeRecord>> {
        Ok(self.load_document(TRADES_KEY)?.unwrap_or_default())
    }

    /// 거래 컬렉션을 통째로 저장합니다.
    pub fn save_trades(&self, trades: &[TradeRecord]) -> StorageResult<()> {
        self.save_document(TRADES_KEY, &trades)
    }

    /// 설정을 로드합니다. 키 부재 시 문서화된 기본값입니다.
    pub fn load_settings(&self) -> StorageResult<Settings> {
        Ok(self.load_document(SETTINGS_KEY)?.unwrap_or_default())
    }

    /// 설정을 통째로 저장합니다.
    pub fn save_settings(&self, settings: &Settings) -> StorageResult<()> {
        self.save_document(SETTINGS_KEY, settings)
    }

    /// 목표를 로드합니다. 키 부재 시 전부 0입니다.
    pub fn load_goals(&self) -> StorageResult<Goals> {
        Ok(self.load_document(GOALS_KEY)?.unwrap_or_default())
    }

    /// 목표를 통째로 저장합니다.
    pub fn save_goals(&self, goals: &Goals) -> StorageResult<()> {
        self.save_document(GOALS_KEY, goals)
    }

    /// 거래를 추가하고 컬렉션을 다시 저장합니다.
    pub fn append_trade(&self, record: TradeRecord) -> StorageResult<Vec<TradeRecord>> {
        let mut trades = self.load_trades()?;
        trades.push(record);
        self.save_trades(&trades)?;
        Ok(trades)
    }

    /// ID로 거래를 삭제하고 컬렉션을 다시 저장합니다.
    ///
    /// # Returns
    ///
    /// 해당 ID의 거래가 존재해서 삭제되었으면 `true`.
    pub fn delete_trade(&self, id: Uuid) -> StorageResult<bool> {
        let mut trades = self.load_trades()?;
        let before = trades.len();
        trades.retain(|t| t.id != id);

        if trades.len() == before {
            return Ok(false);
        }

        self.save_trades(&trades)?;
        Ok(true)
    }

    /// 손상 시 경고를 남기고 빈 목록으로 강등하는 로드.
    ///
    /// 엔진이 저장소 실패를 직접 관측하지 않도록 하는 경계용입니다.
    pub fn load_trades_or_default(&self) -> Vec<TradeRecord> {
        self.load_trades().unwrap_or_else(|err| {
            warn!(error = %err, "거래 문서 로드 실패, 빈 목록으로 대체");
            Vec::new()
        })
    }

    /// 손상 시 경고를 남기고 기본 설정으로 강등하는 로드.
    pub fn load_settings_or_default(&self) -> Settings {
        self.load_settings().unwrap_or_else(|err| {
            warn!(error = %err, "설정 문서 로드 실패, 기본값으로 대체");
            Settings::default()
        })
    }

    /// 손상 시 경고를 남기고 전부 0인 목표로 강등하는 로드.
    pub fn load_goals_or_default(&self) -> Goals {
        self.load_goals().unwrap_or_else(|err| {
            warn!(error = %err, "목표 문서 로드 실패, 기본값으로 대체");
            Goals::default()
        })
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }

    fn load_document<T: DeserializeOwned>(&self, key: &str) -> StorageResult<Option<T>> {
        let path = self.path_for(key);

        let raw = match fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                debug!(key, "저장 문서 없음, 기본값 사용");
                return Ok(None);
            }
            Err(source) => {
                return Err(StorageError::Io {
                    key: key.to_string(),
                    source,
                })
            }
        };

        let value = serde_json::from_str(&raw).map_err(|source| StorageError::Corrupt {
            key: key.to_string(),
            source,
        })?;

        Ok(Some(value))
    }

    fn save_document<T: Serialize>(&self, key: &str, value: &T) -> StorageResult<()> {
        let json = serde_json::to_string_pretty(value).map_err(|source| StorageError::Corrupt {
            key: key.to_string(),
            source,
        })?;

        let path = self.path_for(key);
        let tmp_path = self.dir.join(format!("{}.json.tmp", key));

        fs::write(&tmp_path, json).map_err(|source| StorageError::Io {
            key: key.to_string(),
            source,
        })?;

        fs::rename(&tmp_path, &path).map_err(|source| StorageError::Io {
            key: key.to_string(),
            source,
        })?;

        debug!(key, "저장 문서 교체 완료");
        Ok(())
    }
}
