//! 화학종(몰수, 분자량) 추상화와 그 대수.

use std::fmt;
use std::ops::{Add, AddAssign, Mul, MulAssign, Sub, SubAssign};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{EosError, EosResult};

/// 일반 기체상수 [J/(kmol·K)].
pub const RR: f64 = 8_314.462_1;

/// 몰수 합/차가 0에 가까울 때 대신 쓰는 최소값.
pub const SMALL: f64 = 1.0e-15;

/// 상태방정식이 요구하는 화학종 인터페이스.
///
/// 합/차/배율 연산은 구현체 고유의 몰 가중 규칙을 따른다.
pub trait Species:
    Clone
    + fmt::Debug
    + PartialEq
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<f64, Output = Self>
    + AddAssign
    + SubAssign
    + MulAssign<f64>
{
    fn name(&self) -> &str;

    /// 이름만 바꾼 복사본을 만든다. 이름은 공백 없는 단일 토큰이어야 한다.
    fn renamed(&self, name: &str) -> EosResult<Self>;

    fn n_moles(&self) -> f64;

    /// 비기체상수 [J/(kg·K)]
    fn r_specific(&self) -> f64;
}

/// 이름, 몰수, 분자량[kg/kmol]으로 정의되는 화학종.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Specie {
    pub name: String,
    pub n_moles: f64,
    pub mol_weight: f64,
}

impl Specie {
    /// 분자량은 양수, 몰수는 유한해야 한다.
    pub fn new(name: impl Into<String>, n_moles: f64, mol_weight: f64) -> EosResult<Self> {
        let sp = Self {
            name: name.into(),
            n_moles,
            mol_weight,
        };
        sp.validate()?;
        Ok(sp)
    }

    /// 물(H₂O) 1 kmol.
    pub fn water() -> Self {
        Self {
            name: "water".to_string(),
            n_moles: 1.0,
            mol_weight: 18.015,
        }
    }

    pub fn validate(&self) -> EosResult<()> {
        validate_name(&self.name)?;
        if !self.n_moles.is_finite() {
            return Err(EosError::InvalidSpecie(format!(
                "{}: 몰수가 유한하지 않음 ({})",
                self.name, self.n_moles
            )));
        }
        if !self.mol_weight.is_finite() || self.mol_weight <= 0.0 {
            return Err(EosError::InvalidSpecie(format!(
                "{}: 분자량은 양수여야 함 ({})",
                self.name, self.mol_weight
            )));
        }
        Ok(())
    }

    /// 몰 가중 합. 이름은 왼쪽 피연산자를 따른다.
    fn sum(&self, other: &Specie) -> Specie {
        let n = (self.n_moles + other.n_moles).max(SMALL);
        let w = self.n_moles / n * self.mol_weight + other.n_moles / n * other.mol_weight;
        self.combined(n, w)
    }

    fn difference(&self, other: &Specie) -> Specie {
        let mut d = self.n_moles - other.n_moles;
        if d.abs() < SMALL {
            d = SMALL;
        }
        let w = self.n_moles / d * self.mol_weight - other.n_moles / d * other.mol_weight;
        self.combined(d, w)
    }

    /// 혼합 분자량이 양의 유한값이 아니면(몰수 0끼리의 합, 같은 양의 차 등)
    /// 왼쪽 피연산자의 분자량을 유지한다.
    fn combined(&self, n_moles: f64, mol_weight: f64) -> Specie {
        let mol_weight = if mol_weight.is_finite() && mol_weight > 0.0 {
            mol_weight
        } else {
            self.mol_weight
        };
        Specie {
            name: self.name.clone(),
            n_moles,
            mol_weight,
        }
    }
}

fn validate_name(name: &str) -> EosResult<()> {
    if name.is_empty() || name.chars().any(char::is_whitespace) {
        return Err(EosError::InvalidSpecie(format!(
            "이름은 비어 있지 않은 단일 토큰이어야 함: {name:?}"
        )));
    }
    Ok(())
}

impl Species for Specie {
    fn name(&self) -> &str {
        &self.name
    }

    fn renamed(&self, name: &str) -> EosResult<Self> {
        validate_name(name)?;
        Ok(Specie {
            name: name.to_string(),
            ..self.clone()
        })
    }

    fn n_moles(&self) -> f64 {
        self.n_moles
    }

    fn r_specific(&self) -> f64 {
        RR / self.mol_weight
    }
}

impl Add for Specie {
    type Output = Specie;

    fn add(self, rhs: Specie) -> Specie {
        self.sum(&rhs)
    }
}

impl Sub for Specie {
    type Output = Specie;

    fn sub(self, rhs: Specie) -> Specie {
        self.difference(&rhs)
    }
}

impl Mul<f64> for Specie {
    type Output = Specie;

    fn mul(mut self, s: f64) -> Specie {
        self.n_moles *= s;
        self
    }
}

impl AddAssign for Specie {
    fn add_assign(&mut self, rhs: Specie) {
        *self = self.sum(&rhs);
    }
}

impl SubAssign for Specie {
    fn sub_assign(&mut self, rhs: Specie) {
        *self = self.difference(&rhs);
    }
}

impl MulAssign<f64> for Specie {
    fn mul_assign(&mut self, s: f64) {
        self.n_moles *= s;
    }
}

/// `name nMoles molWeight` 형식으로 쓴다.
impl fmt::Display for Specie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.name, self.n_moles, self.mol_weight)
    }
}

impl FromStr for Specie {
    type Err = EosError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tokens: Vec<&str> = s.split_whitespace().collect();
        match tokens.as_slice() {
            [name, n, w] => Specie::new(
                *name,
                parse_scalar("nMoles", n)?,
                parse_scalar("molWeight", w)?,
            ),
            _ => Err(EosError::Parse(format!(
                "화학종은 토큰 3개(name nMoles molWeight)가 필요함, {}개 입력됨",
                tokens.len()
            ))),
        }
    }
}

pub(crate) fn parse_scalar(what: &str, token: &str) -> EosResult<f64> {
    token
        .parse::<f64>()
        .map_err(|e| EosError::Parse(format!("{what} 값 {token:?}: {e}")))
}
