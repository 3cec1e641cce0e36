//! 유효 영역으로 입력을 제한한 뒤 물성을 조회하는 상태방정식.

use tracing::debug;

use crate::eos::limits::{Envelope, EvaluationPoint, Limits};
use crate::error::EosResult;
use crate::oracle::PropertyOracle;
use crate::specie::{Specie, Species};
use crate::steam::If97;

/// 화학종 하나와 유효 영역, 물성 오라클을 묶은 값.
///
/// 모든 조회는 (p, T)를 영역 안으로 끌어온 뒤 오라클에 전달한다.
/// 영역은 생성 후 바뀌지 않는다.
#[derive(Debug, Clone)]
pub struct BoundedEos<S = Specie, O = If97> {
    pub(crate) specie: S,
    pub(crate) envelope: Envelope,
    pub(crate) oracle: O,
}

/// 한 점에서 계산한 물성 묶음.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EosProperties {
    pub point: EvaluationPoint,
    /// 밀도 [kg/m³]
    pub density: f64,
    /// (∂ρ/∂p)_T [s²/m²]
    pub compressibility_coefficient: f64,
    /// 압축인자 Z [-]
    pub compressibility_factor: f64,
    /// cp - cv [J/(kg·K)]
    pub heat_capacity_difference: f64,
}

impl<S: Species, O: PropertyOracle + Default> BoundedEos<S, O> {
    /// 압력·온도 경계를 모두 가진 상태방정식.
    pub fn new(specie: S, temperature: Limits, pressure: Limits) -> Self {
        Self::with_oracle(specie, Envelope::new(pressure, temperature), O::default())
    }

    /// 압력 경계만 가진 상태방정식. 온도는 오라클 기본 범위를 따른다.
    pub fn pressure_bounded(specie: S, pressure: Limits) -> Self {
        Self::with_oracle(specie, Envelope::pressure_only(pressure), O::default())
    }
}

impl<S: Species, O: PropertyOracle> BoundedEos<S, O> {
    pub fn with_oracle(specie: S, envelope: Envelope, oracle: O) -> Self {
        Self {
            specie,
            envelope,
            oracle,
        }
    }

    pub fn specie(&self) -> &S {
        &self.specie
    }

    pub fn envelope(&self) -> &Envelope {
        &self.envelope
    }

    pub fn oracle(&self) -> &O {
        &self.oracle
    }

    pub fn name(&self) -> &str {
        self.specie.name()
    }

    pub fn n_moles(&self) -> f64 {
        self.specie.n_moles()
    }

    pub fn r_specific(&self) -> f64 {
        self.specie.r_specific()
    }

    /// 경계와 화학종을 그대로 복사하되 화학종 이름만 바꾼다.
    pub fn renamed(&self, name: &str) -> EosResult<Self>
    where
        O: Clone,
    {
        Ok(Self {
            specie: self.specie.renamed(name)?,
            envelope: self.envelope,
            oracle: self.oracle.clone(),
        })
    }

    /// 화학종만 복사한다. 경계는 생성 시 값 그대로 유지된다.
    pub fn assign(&mut self, other: &Self) {
        self.specie = other.specie.clone();
    }

    /// 실제로 오라클에 전달될 (p, T).
    pub fn evaluation_point(&self, p: f64, t: f64) -> EosResult<EvaluationPoint> {
        let point = self
            .envelope
            .clip(p, t, self.oracle.default_temperature_limits())?;
        if point.clipped {
            debug!(
                specie = self.specie.name(),
                p,
                t,
                p_clipped = point.p,
                t_clipped = point.t,
                "입력이 유효 영역 밖이라 경계로 제한함"
            );
        }
        Ok(point)
    }

    /// 밀도 [kg/m³]
    pub fn density(&self, p: f64, t: f64) -> EosResult<f64> {
        let pt = self.evaluation_point(p, t)?;
        self.oracle.density(pt.p, pt.t)
    }

    /// 등온 압축성 계수 [s²/m²]. 오라클 값을 그대로 반환한다.
    pub fn compressibility_coefficient(&self, p: f64, t: f64) -> EosResult<f64> {
        let pt = self.evaluation_point(p, t)?;
        self.oracle.compressibility_coefficient(pt.p, pt.t)
    }

    /// 압축인자 Z = p / (ρ R T), 제한된 (p, T) 기준.
    pub fn compressibility_factor(&self, p: f64, t: f64) -> EosResult<f64> {
        let pt = self.evaluation_point(p, t)?;
        let rho = self.oracle.density(pt.p, pt.t)?;
        Ok(pt.p / (rho * self.specie.r_specific() * pt.t))
    }

    /// cp - cv [J/(kg·K)]
    pub fn heat_capacity_difference(&self, p: f64, t: f64) -> EosResult<f64> {
        let pt = self.evaluation_point(p, t)?;
        Ok(self.oracle.cp(pt.p, pt.t)? - self.oracle.cv(pt.p, pt.t)?)
    }

    /// 네 가지 물성을 한 번에 계산한다.
    pub fn properties(&self, p: f64, t: f64) -> EosResult<EosProperties> {
        let point = self.evaluation_point(p, t)?;
        let density = self.oracle.density(point.p, point.t)?;
        Ok(EosProperties {
            point,
            density,
            compressibility_coefficient: self
                .oracle
                .compressibility_coefficient(point.p, point.t)?,
            compressibility_factor: point.p / (density * self.specie.r_specific() * point.t),
            heat_capacity_difference: self.oracle.cp(point.p, point.t)?
                - self.oracle.cv(point.p, point.t)?,
        })
    }
}

/// 오라클은 순수 함수이므로 화학종과 영역만 비교한다.
impl<S: PartialEq, O> PartialEq for BoundedEos<S, O> {
    fn eq(&self, other: &Self) -> bool {
        self.specie == other.specie && self.envelope == other.envelope
    }
}
