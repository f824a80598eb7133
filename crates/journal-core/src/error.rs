//! 매매일지의 에러 타입.
//!
//! 이 시스템의 에러는 세 부류입니다: 입력 검증 오류(필드별, 복구 가능),
//! 저장소 오류(경계에서 기본값으로 강등), 계산 경계 사례(에러가 아니라
//! 정의된 기본값으로 해소). 어떤 에러도 치명적이지 않습니다.

use thiserror::Error;

use crate::domain::ValidationErrors;

/// 핵심 저널 에러.
#[derive(Debug, Error)]
pub enum JournalError {
    /// 입력 검증 실패 (필드별 메시지 포함)
    #[error("입력 검증 실패: {0}")]
    Validation(#[from] ValidationErrors),

    /// 저장소 에러
    #[error("저장소 에러: {0}")]
    Storage(String),

    /// 직렬화 에러
    #[error("직렬화 에러: {0}")]
    Serialization(String),

    /// 잘못된 입력
    #[error("잘못된 입력: {0}")]
    InvalidInput(String),

    /// 찾을 수 없음
    #[error("찾을 수 없음: {0}")]
    NotFound(String),

    /// 입출력 에러
    #[error("입출력 에러: {0}")]
    Io(#[from] std::io::Error),
}

/// 저널 작업을 위한 Result 타입.
pub type JournalResult<T> = Result<T, JournalError>;

impl JournalError {
    /// 사용자 수정으로 복구 가능한 에러인지 확인합니다.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            JournalError::Validation(_) | JournalError::InvalidInput(_)
        )
    }
}

impl From<serde_json::Error> for JournalError {
    fn from(err: serde_json::Error) -> Self {
        JournalError::Serialization(err.to_string())
    }
}
