//! 물/증기 물성 오라클 모음.

pub mod if97;

pub use if97::If97;
