use crate::error::{EosError, EosResult};

/// 닫힌 구간 [min, max].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Limits {
    min: f64,
    max: f64,
}

impl Limits {
    /// `what`은 오류 메시지에 쓰이는 물리량 이름이다.
    pub fn new(what: &'static str, min: f64, max: f64) -> EosResult<Self> {
        if !min.is_finite() || !max.is_finite() || min > max {
            return Err(EosError::InvalidLimits { what, min, max });
        }
        Ok(Self { min, max })
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    /// 범위 밖의 값을 가장 가까운 경계로 끌어온다.
    pub fn clamp(&self, value: f64) -> f64 {
        value.clamp(self.min, self.max)
    }

    pub fn contains(&self, value: f64) -> bool {
        (self.min..=self.max).contains(&value)
    }

    /// 교집합. 겹치지 않으면 `None`.
    pub fn intersect(&self, other: &Limits) -> Option<Limits> {
        let min = self.min.max(other.min);
        let max = self.max.min(other.max);
        (min <= max).then_some(Limits { min, max })
    }
}

/// 유효 영역 [pMin,pMax] × [TMin,TMax].
///
/// 온도 경계가 없으면(`temperature == None`) 압력만 제한하는 축소형이다.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Envelope {
    pressure: Limits,
    temperature: Option<Limits>,
}

/// 경계 처리 후 실제로 오라클에 전달되는 점.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EvaluationPoint {
    pub p: f64,
    pub t: f64,
    /// 입력이 경계로 끌려왔는지 여부
    pub clipped: bool,
}

impl Envelope {
    pub fn new(pressure: Limits, temperature: Limits) -> Self {
        Self {
            pressure,
            temperature: Some(temperature),
        }
    }

    pub fn pressure_only(pressure: Limits) -> Self {
        Self {
            pressure,
            temperature: None,
        }
    }

    pub fn pressure(&self) -> Limits {
        self.pressure
    }

    pub fn temperature(&self) -> Option<Limits> {
        self.temperature
    }

    pub fn has_temperature_bound(&self) -> bool {
        self.temperature.is_some()
    }

    /// (p, T)를 영역 안으로 끌어온다.
    ///
    /// 온도 경계가 없으면 `fallback`(오라클 기본 범위)을 쓰고, 그것도 없으면 T를 그대로 둔다.
    /// 입력이 유한하지 않으면 오류를 반환한다.
    pub fn clip(&self, p: f64, t: f64, fallback: Option<Limits>) -> EosResult<EvaluationPoint> {
        if !p.is_finite() {
            return Err(EosError::NonFiniteInput {
                what: "pressure",
                value: p,
            });
        }
        if !t.is_finite() {
            return Err(EosError::NonFiniteInput {
                what: "temperature",
                value: t,
            });
        }
        let pc = self.pressure.clamp(p);
        let tc = match self.temperature.or(fallback) {
            Some(limits) => limits.clamp(t),
            None => t,
        };
        Ok(EvaluationPoint {
            p: pc,
            t: tc,
            clipped: pc != p || tc != t,
        })
    }

    /// 두 영역의 교집합. 온도 경계가 없는 쪽은 무제한으로 취급한다.
    pub fn intersect(&self, other: &Envelope) -> EosResult<Envelope> {
        let pressure = self
            .pressure
            .intersect(&other.pressure)
            .ok_or(EosError::DisjointEnvelopes)?;
        let temperature = match (self.temperature, other.temperature) {
            (Some(a), Some(b)) => Some(a.intersect(&b).ok_or(EosError::DisjointEnvelopes)?),
            (a, b) => a.or(b),
        };
        Ok(Envelope {
            pressure,
            temperature,
        })
    }
}
