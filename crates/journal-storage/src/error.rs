//! 저장소 에러 타입.

use thiserror::Error;

/// 저장소 작업 에러.
///
/// 키 부재는 에러가 아닙니다 (로드 함수가 기본값을 반환).
/// `Corrupt`는 문서가 존재하지만 해석할 수 없는 경우로,
/// 부재와 구별되는 복구 가능한 신호입니다.
#[derive(Debug, Error)]
pub enum StorageError {
    /// 입출력 실패
    #[error("입출력 에러 ({key}): {source}")]
    Io {
        /// 저장 키
        key: String,
        #[source]
        source: std::io::Error,
    },

    /// 문서가 존재하지만 해석 불가
    #[error("손상된 문서 ({key}): {source}")]
    Corrupt {
        /// 저장 키
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

impl StorageError {
    /// 손상 에러인지 확인합니다.
    pub fn is_corrupt(&self) -> bool {
        matches!(self, StorageError::Corrupt { .. })
    }
}

/// 저장소 작업을 위한 Result 타입.
pub type StorageResult<T> = Result<T, StorageError>;
