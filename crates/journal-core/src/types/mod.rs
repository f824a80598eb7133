//! 공통 타입.

pub mod decimal;

pub use decimal::*;
