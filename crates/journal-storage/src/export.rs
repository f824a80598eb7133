//! 전체 상태 내보내기.
//!
//! 거래 + 설정 + 목표 + 내보내기 시각을 단일 JSON 문서로 직렬화합니다.
//! 내보내기는 단방향이며 가져오기/복원 경로는 없습니다.

use chrono::{DateTime, Utc};
use journal_core::{Goals, Settings, TradeRecord};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::{StorageError, StorageResult};
use crate::store::JournalStore;

/// 내보내기 문서.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportDocument {
    /// 거래 컬렉션 전체
    pub trades: Vec<TradeRecord>,
    /// 사용자 설정
    pub settings: Settings,
    /// 기간별 목표
    pub goals: Goals,
    /// 내보내기 시각 (호출자가 명시적으로 제공)
    pub exported_at: DateTime<Utc>,
}

impl ExportDocument {
    /// 문서를 JSON 문자열로 직렬화합니다.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

impl JournalStore {
    /// 저장된 전체 상태를 내보내기 문서로 조립합니다.
    pub fn export(&self, exported_at: DateTime<Utc>) -> StorageResult<ExportDocument> {
        Ok(ExportDocument {
            trades: self.load_trades()?,
            settings: self.load_settings()?,
            goals: self.load_goals()?,
            exported_at,
        })
    }

    /// 내보내기 문서를 파일로 기록합니다.
    pub fn write_export(
        &self,
        path: impl AsRef<Path>,
        exported_at: DateTime<Utc>,
    ) -> StorageResult<ExportDocument> {
        let document = self.export(exported_at)?;

        let json = document.to_json().map_err(|source| StorageError::Corrupt {
            key: "export".to_string(),
            source,
        })?;

        fs::write(path.as_ref(), json).map_err(|source| StorageError::Io {
            key: "export".to_string(),
            source,
        })?;

        Ok(document)
    }
}
