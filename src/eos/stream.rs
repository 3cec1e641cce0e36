//! 토큰 스트림 입출력.
//!
//! 형식: `name nMoles molWeight [TMax TMin] pMax pMin`
//! 온도 경계가 없는 축소형은 토큰 5개, 전체형은 7개다.

use std::fmt;
use std::str::FromStr;

use crate::eos::bounded::BoundedEos;
use crate::eos::limits::{Envelope, Limits};
use crate::error::{EosError, EosResult};
use crate::oracle::PropertyOracle;
use crate::specie::{parse_scalar, Specie};

impl<O: PropertyOracle + Default> FromStr for BoundedEos<Specie, O> {
    type Err = EosError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tokens: Vec<&str> = s.split_whitespace().collect();
        let (specie_tokens, bound_tokens) = match tokens.len() {
            5 | 7 => tokens.split_at(3),
            n => {
                return Err(EosError::Parse(format!(
                    "토큰 5개 또는 7개가 필요함, {n}개 입력됨"
                )))
            }
        };
        let specie: Specie = specie_tokens.join(" ").parse()?;
        let envelope = parse_envelope(bound_tokens)?;
        Ok(BoundedEos::with_oracle(specie, envelope, O::default()))
    }
}

fn parse_envelope(tokens: &[&str]) -> EosResult<Envelope> {
    match tokens {
        [t_max, t_min, p_max, p_min] => {
            let temperature = Limits::new(
                "temperature",
                parse_scalar("TMin", t_min)?,
                parse_scalar("TMax", t_max)?,
            )?;
            let pressure = Limits::new(
                "pressure",
                parse_scalar("pMin", p_min)?,
                parse_scalar("pMax", p_max)?,
            )?;
            Ok(Envelope::new(pressure, temperature))
        }
        [p_max, p_min] => {
            let pressure = Limits::new(
                "pressure",
                parse_scalar("pMin", p_min)?,
                parse_scalar("pMax", p_max)?,
            )?;
            Ok(Envelope::pressure_only(pressure))
        }
        _ => Err(EosError::Parse(format!(
            "경계 토큰 수가 맞지 않음: {}",
            tokens.len()
        ))),
    }
}

/// `FromStr`과 같은 형식으로 쓴다. `{}`는 f64를 손실 없이 출력하므로 다시 읽으면 같은 값이 된다.
impl<O> fmt::Display for BoundedEos<Specie, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.specie)?;
        if let Some(t) = self.envelope.temperature() {
            write!(f, " {} {}", t.max(), t.min())?;
        }
        let p = self.envelope.pressure();
        write!(f, " {} {}", p.max(), p.min())
    }
}
