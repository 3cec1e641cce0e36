//! IAPWS-IF97 계산을 seuif97 크레이트로 위임한 물성 오라클.
//! 입력: 압력(Pa, 절대), 온도(K)
//! 출력: SI 단위(kg/m³, s²/m², J/(kg·K))

use seuif97::{pt, OCP, OCV, OD, OKT};

use crate::eos::limits::Limits;
use crate::error::{EosError, EosResult};
use crate::oracle::PropertyOracle;

const PA_PER_MPA: f64 = 1.0e6;
const KELVIN_OFFSET: f64 = 273.15;

/// IF97 영역 1~3 및 영역 2 고온부를 포함하는 기본 온도 범위 [K].
pub const T_MIN_K: f64 = 273.15;
pub const T_MAX_K: f64 = 1073.15;

/// seuif97 기반 IF97 오라클. 기본은 자동 영역 판정이다.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct If97 {
    region: Option<i32>,
}

impl If97 {
    /// 영역을 자동 판정하는 오라클.
    pub fn auto() -> Self {
        Self { region: None }
    }

    /// 특정 영역(1, 2, 3, 5) 식을 강제로 사용하는 오라클.
    pub fn in_region(region: i32) -> EosResult<Self> {
        match region {
            1 | 2 | 3 | 5 => Ok(Self {
                region: Some(region),
            }),
            _ => Err(EosError::InvalidRegion(region)),
        }
    }

    fn eval(&self, property: &'static str, o_id: i32, p: f64, t: f64) -> EosResult<f64> {
        let p_mpa = p / PA_PER_MPA;
        let t_c = t - KELVIN_OFFSET;
        let value = match self.region {
            Some(region) => pt(p_mpa, t_c, (o_id, region)),
            None => pt(p_mpa, t_c, o_id),
        };
        if !value.is_finite() {
            return Err(EosError::Oracle { property, p, t });
        }
        Ok(value)
    }
}

impl PropertyOracle for If97 {
    fn density(&self, p: f64, t: f64) -> EosResult<f64> {
        self.eval("density", OD, p, t)
    }

    fn compressibility_coefficient(&self, p: f64, t: f64) -> EosResult<f64> {
        // ρ·κ_T, κ_T 는 1/MPa 로 반환된다.
        let rho = self.density(p, t)?;
        let kappa_t = self.eval("isothermal compressibility", OKT, p, t)?;
        Ok(rho * kappa_t / PA_PER_MPA)
    }

    fn cp(&self, p: f64, t: f64) -> EosResult<f64> {
        Ok(self.eval("cp", OCP, p, t)? * 1000.0)
    }

    fn cv(&self, p: f64, t: f64) -> EosResult<f64> {
        Ok(self.eval("cv", OCV, p, t)? * 1000.0)
    }

    fn default_temperature_limits(&self) -> Option<Limits> {
        Limits::new("temperature", T_MIN_K, T_MAX_K).ok()
    }
}
