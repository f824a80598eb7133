//! 저널 문서 저장소.
//!
//! 브라우저 로컬 스토리지에 해당하는 키-값 영속 계층입니다.
//! 저장 키 하나당 JSON 문서 하나이며, 컬렉션은 생성/삭제 후마다
//! 통째로 교체됩니다.
//!
//! 로드 계약: 키 부재는 기본값(빈 목록, 문서화된 기본 설정)으로
//! 해소되고, 손상된 문서는 복구 가능한 에러로 구분됩니다.
//! 호출자는 "아직 데이터 없음"과 "손상됨"을 구별할 수 있습니다.

pub mod error;
pub mod export;
pub mod store;

pub use error::*;
pub use export::*;
pub use store::*;
