//! 물성 오라클 인터페이스.
//!
//! 유효한 (p, T)에 대해 밀도, 압축성 계수, cp, cv를 돌려주는 순수 함수 묶음이다.
//! 입력 단위는 항상 Pa, K 이며 출력은 SI(kg/m³, s²/m², J/(kg·K))이다.

use crate::eos::limits::Limits;
use crate::error::EosResult;

/// (p, T) → 물성 변환을 담당하는 외부 계산기.
///
/// 여러 스레드에서 동시에 조회할 수 있도록 `Send + Sync`를 요구한다.
pub trait PropertyOracle: Send + Sync {
    /// 밀도 [kg/m³]
    fn density(&self, p: f64, t: f64) -> EosResult<f64>;

    /// 등온 압축성 계수 (∂ρ/∂p)_T [s²/m²]
    fn compressibility_coefficient(&self, p: f64, t: f64) -> EosResult<f64>;

    /// 정압비열 [J/(kg·K)]
    fn cp(&self, p: f64, t: f64) -> EosResult<f64>;

    /// 정적비열 [J/(kg·K)]
    fn cv(&self, p: f64, t: f64) -> EosResult<f64>;

    /// 온도 경계가 없는 상태방정식이 사용할 기본 온도 범위.
    ///
    /// `None`이면 온도를 그대로 전달한다.
    fn default_temperature_limits(&self) -> Option<Limits> {
        None
    }
}
