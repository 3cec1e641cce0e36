//! 테스트용 결정론적 오라클과 헬퍼.
#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use steam_eos::{BoundedEos, EosResult, Limits, PropertyOracle, Specie};

pub const R_GAS: f64 = 461.5;
const B: f64 = 1.0e-8;

/// 간단한 비이상 기체: ρ = p / (R T) · (1 + B p).
/// 호출된 (p, T)를 모두 기록한다.
#[derive(Debug, Clone, Default)]
pub struct RecordingOracle {
    calls: Arc<Mutex<Vec<(f64, f64)>>>,
}

impl RecordingOracle {
    pub fn calls(&self) -> Vec<(f64, f64)> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, p: f64, t: f64) {
        self.calls.lock().unwrap().push((p, t));
    }

    /// 기록 없이 직접 계산한 밀도.
    pub fn direct_density(p: f64, t: f64) -> f64 {
        p / (R_GAS * t) * (1.0 + B * p)
    }

    pub fn direct_cp(_p: f64, t: f64) -> f64 {
        2000.0 + t
    }

    pub fn direct_cv(p: f64, _t: f64) -> f64 {
        1500.0 + p * 1.0e-6
    }
}

impl PropertyOracle for RecordingOracle {
    fn density(&self, p: f64, t: f64) -> EosResult<f64> {
        self.record(p, t);
        Ok(Self::direct_density(p, t))
    }

    fn compressibility_coefficient(&self, p: f64, t: f64) -> EosResult<f64> {
        self.record(p, t);
        Ok((1.0 + 2.0 * B * p) / (R_GAS * t))
    }

    fn cp(&self, p: f64, t: f64) -> EosResult<f64> {
        self.record(p, t);
        Ok(Self::direct_cp(p, t))
    }

    fn cv(&self, p: f64, t: f64) -> EosResult<f64> {
        self.record(p, t);
        Ok(Self::direct_cv(p, t))
    }
}

pub const P_MIN: f64 = 1.0e5;
pub const P_MAX: f64 = 2.2e7;
pub const T_MIN: f64 = 273.15;
pub const T_MAX: f64 = 1073.15;

pub fn water(n_moles: f64) -> Specie {
    Specie::new("water", n_moles, 18.015).unwrap()
}

pub fn pressure_limits() -> Limits {
    Limits::new("pressure", P_MIN, P_MAX).unwrap()
}

pub fn temperature_limits() -> Limits {
    Limits::new("temperature", T_MIN, T_MAX).unwrap()
}

pub fn recording_eos(n_moles: f64) -> BoundedEos<Specie, RecordingOracle> {
    BoundedEos::new(water(n_moles), temperature_limits(), pressure_limits())
}
