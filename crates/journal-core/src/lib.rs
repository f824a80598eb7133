//! # Journal Core
//!
//! FX 매매일지의 핵심 도메인 모델 및 타입을 제공합니다.
//!
//! 이 크레이트는 저널 시스템 전반에서 사용되는 기본 타입을 제공합니다:
//! - 거래 기록 및 손익 파생 계산
//! - 입력 검증 (필드별 오류 수집)
//! - 설정 및 기간별 목표 집계
//! - 기간 키워드 정의
//! - 설정 관리
//! - 로깅 인프라

pub mod config;
pub mod domain;
pub mod error;
pub mod logging;
pub mod types;

pub use config::*;
pub use domain::*;
pub use error::*;
pub use logging::*;
pub use types::*;
