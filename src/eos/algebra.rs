//! 몰분율 기반 상태방정식 합성 연산.
//!
//! 화학종은 `Species` 구현체의 합/차/배율 규칙으로 결합하고, 유효 영역은
//! 두 피연산자 영역의 교집합을 사용한다. 제자리 연산은 영역을 바꾸지 않는다.

use tracing::trace;

use crate::eos::bounded::BoundedEos;
use crate::error::{EosError, EosResult};
use crate::oracle::PropertyOracle;
use crate::specie::Species;

/// 두 양의 몰분율 (f1, f2).
pub fn mole_fractions(n1: f64, n2: f64) -> EosResult<(f64, f64)> {
    let total = n1 + n2;
    if total == 0.0 || !total.is_finite() {
        return Err(EosError::DegenerateMixture);
    }
    Ok((n1 / total, n2 / total))
}

fn trace_fractions(op: &'static str, n1: f64, n2: f64) {
    // 진단용으로만 기록하며 결과 계산에는 쓰지 않는다.
    if let Ok((f1, f2)) = mole_fractions(n1, n2) {
        trace!(op, f1, f2, "몰분율");
    }
}

impl<S: Species, O: PropertyOracle + Clone> BoundedEos<S, O> {
    /// `self + other`. 영역이 겹치지 않으면 실패한다.
    pub fn add(&self, other: &Self) -> EosResult<Self> {
        let envelope = self.envelope.intersect(&other.envelope)?;
        trace_fractions("add", self.n_moles(), other.n_moles());
        Ok(Self::with_oracle(
            self.specie.clone() + other.specie.clone(),
            envelope,
            self.oracle.clone(),
        ))
    }

    /// `self - other`.
    pub fn subtract(&self, other: &Self) -> EosResult<Self> {
        let envelope = self.envelope.intersect(&other.envelope)?;
        trace_fractions("subtract", self.n_moles(), other.n_moles());
        Ok(Self::with_oracle(
            self.specie.clone() - other.specie.clone(),
            envelope,
            self.oracle.clone(),
        ))
    }

    /// `s * self`. 영역은 그대로다.
    pub fn scale(&self, s: f64) -> Self {
        Self::with_oracle(self.specie.clone() * s, self.envelope, self.oracle.clone())
    }

    /// 반응/수지 계산에서 쓰는 균형 연산: `other - self`.
    pub fn combine_equal(&self, other: &Self) -> EosResult<Self> {
        other.subtract(self)
    }

    pub fn accumulate(&mut self, other: &Self) {
        trace_fractions("accumulate", self.n_moles(), other.n_moles());
        self.specie += other.specie.clone();
    }

    pub fn deplete(&mut self, other: &Self) {
        trace_fractions("deplete", self.n_moles(), other.n_moles());
        self.specie -= other.specie.clone();
    }

    pub fn rescale(&mut self, s: f64) {
        self.specie *= s;
    }
}
