//! CLI 하위 명령 구현.

pub mod export;
pub mod goal;
pub mod stats;
pub mod trade;

pub use export::*;
pub use goal::*;
pub use stats::*;
pub use trade::*;
