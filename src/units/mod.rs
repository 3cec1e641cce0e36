//! CLI 입력용 압력/온도 단위 변환.

use thiserror::Error;

pub mod pressure;
pub mod temperature;

pub use pressure::{to_pa, PressureUnit};
pub use temperature::{to_kelvin, TemperatureUnit};

/// 알 수 없는 단위 문자열.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("알 수 없는 단위: {0}")]
pub struct UnknownUnit(pub String);
