use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

use crate::eos::{BoundedEos, Envelope, Limits};
use crate::error::EosError;
use crate::oracle::PropertyOracle;
use crate::specie::Specie;

/// 상태방정식 경계 설정. 키 이름은 `TMax`, `TMin`, `pMax`, `pMin`이다.
///
/// `TMax`/`TMin`은 둘 다 있거나 둘 다 없어야 하며, 없으면 압력만 제한한다.
/// 기본값은 없다. 압력 경계가 빠지면 로드가 실패한다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BoundsConfig {
    #[serde(rename = "TMax", default, skip_serializing_if = "Option::is_none")]
    pub t_max: Option<f64>,
    #[serde(rename = "TMin", default, skip_serializing_if = "Option::is_none")]
    pub t_min: Option<f64>,
    #[serde(rename = "pMax")]
    pub p_max: f64,
    #[serde(rename = "pMin")]
    pub p_min: f64,
}

/// 상태방정식 하나를 정의하는 설정 레코드.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EosConfig {
    pub specie: Specie,
    pub equation_of_state: BoundsConfig,
}

/// 설정 로드/저장 시 발생 가능한 오류를 표현한다.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// 파일 입출력 오류
    #[error("파일 입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    /// TOML 역직렬화 오류
    #[error("설정 파싱 오류: {0}")]
    Parse(#[from] toml::de::Error),
    /// TOML 직렬화 오류
    #[error("설정 직렬화 오류: {0}")]
    Serialize(#[from] toml::ser::Error),
    /// 온도 경계가 한쪽만 주어짐
    #[error("TMax와 TMin은 함께 지정해야 함 (누락: {0})")]
    PartialTemperatureBound(&'static str),
    /// 값 검증 오류
    #[error(transparent)]
    Eos(#[from] EosError),
}

impl EosConfig {
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// 설정을 파일로 저장한다.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        fs::write(path, self.to_toml_string()?)?;
        Ok(())
    }

    /// 경계와 화학종을 검증해 유효 영역을 만든다.
    pub fn envelope(&self) -> Result<Envelope, ConfigError> {
        let b = &self.equation_of_state;
        let pressure = Limits::new("pressure", b.p_min, b.p_max)?;
        match (b.t_min, b.t_max) {
            (Some(t_min), Some(t_max)) => Ok(Envelope::new(
                pressure,
                Limits::new("temperature", t_min, t_max)?,
            )),
            (None, None) => Ok(Envelope::pressure_only(pressure)),
            (Some(_), None) => Err(ConfigError::PartialTemperatureBound("TMax")),
            (None, Some(_)) => Err(ConfigError::PartialTemperatureBound("TMin")),
        }
    }

    pub fn to_eos<O>(&self) -> Result<BoundedEos<Specie, O>, ConfigError>
    where
        O: PropertyOracle + Default,
    {
        self.specie.validate()?;
        let envelope = self.envelope()?;
        Ok(BoundedEos::with_oracle(
            self.specie.clone(),
            envelope,
            O::default(),
        ))
    }

    pub fn from_eos<O: PropertyOracle>(eos: &BoundedEos<Specie, O>) -> Self {
        let envelope = eos.envelope();
        let temperature = envelope.temperature();
        Self {
            specie: eos.specie().clone(),
            equation_of_state: BoundsConfig {
                t_max: temperature.map(|t| t.max()),
                t_min: temperature.map(|t| t.min()),
                p_max: envelope.pressure().max(),
                p_min: envelope.pressure().min(),
            },
        }
    }
}

/// 설정 파일을 읽는다. 파일이 없으면 실패한다.
pub fn load(path: impl AsRef<Path>) -> Result<EosConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    EosConfig::from_toml_str(&content)
}
