//! CLI 하위 명령 처리. 출력은 호출자가 넘긴 `Write`로 보낸다.

use std::io::Write;
use std::path::Path;

use thiserror::Error;
use tracing::info;

use crate::config::{self, ConfigError, EosConfig};
use crate::eos::{BoundedEos, EosProperties};
use crate::error::EosError;
use crate::specie::Specie;
use crate::steam::If97;

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Error, Debug)]
pub enum AppError {
    /// 출력 오류
    #[error("입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    /// 설정 로드 오류
    #[error("설정 오류: {0}")]
    Config(#[from] ConfigError),
    /// 상태방정식 계산 오류
    #[error("계산 오류: {0}")]
    Eos(#[from] EosError),
    /// 잘못된 명령 인자
    #[error("잘못된 인자: {0}")]
    InvalidArg(&'static str),
}

pub type WaterEos = BoundedEos<Specie, If97>;

/// 설정 파일을 읽어 IF97 상태방정식을 만든다.
pub fn load_eos(path: &Path) -> Result<WaterEos, AppError> {
    let cfg = config::load(path)?;
    let eos = cfg.to_eos()?;
    info!(path = %path.display(), specie = eos.name(), "상태방정식 로드");
    Ok(eos)
}

/// 한 점의 물성을 출력한다.
pub fn props(eos: &WaterEos, p: f64, t: f64, out: &mut impl Write) -> Result<(), AppError> {
    let props = eos.properties(p, t)?;
    write_props(&props, out)?;
    if props.point.clipped {
        writeln!(
            out,
            "참고: 입력 (p={p} Pa, T={t} K)이 유효 영역 밖이라 경계값으로 계산함"
        )?;
    }
    Ok(())
}

fn write_props(props: &EosProperties, out: &mut impl Write) -> std::io::Result<()> {
    writeln!(out, "p    = {:.6e} Pa", props.point.p)?;
    writeln!(out, "T    = {:.3} K", props.point.t)?;
    writeln!(out, "rho  = {:.6} kg/m3", props.density)?;
    writeln!(out, "psi  = {:.6e} s2/m2", props.compressibility_coefficient)?;
    writeln!(out, "Z    = {:.6}", props.compressibility_factor)?;
    writeln!(out, "cp-cv= {:.4} J/(kg K)", props.heat_capacity_difference)
}

/// 고정 온도에서 압력을 등간격으로 바꿔가며 표를 출력한다. 경계로 제한된 행은 `*`로 표시한다.
pub fn sweep(
    eos: &WaterEos,
    t: f64,
    p_from: f64,
    p_to: f64,
    steps: usize,
    out: &mut impl Write,
) -> Result<(), AppError> {
    if steps < 2 {
        return Err(AppError::InvalidArg("steps는 2 이상이어야 함"));
    }
    writeln!(
        out,
        "{:>14} {:>12} {:>14} {:>10} {:>12}",
        "p[Pa]", "rho", "psi", "Z", "cp-cv"
    )?;
    for i in 0..steps {
        let p = p_from + (p_to - p_from) * i as f64 / (steps - 1) as f64;
        let props = eos.properties(p, t)?;
        let mark = if props.point.clipped { "*" } else { "" };
        writeln!(
            out,
            "{:>14.6e} {:>12.4} {:>14.6e} {:>10.6} {:>12.4}{mark}",
            p,
            props.density,
            props.compressibility_coefficient,
            props.compressibility_factor,
            props.heat_capacity_difference,
        )?;
    }
    Ok(())
}

/// 설정을 검증하고 토큰 스트림 형식으로 다시 출력한다.
pub fn check(eos: &WaterEos, out: &mut impl Write) -> Result<(), AppError> {
    writeln!(out, "{eos}")?;
    let env = eos.envelope();
    match env.temperature() {
        Some(t) => writeln!(out, "T: [{}, {}] K", t.min(), t.max())?,
        None => writeln!(out, "T: 경계 없음 (오라클 기본 범위 사용)")?,
    }
    writeln!(out, "p: [{}, {}] Pa", env.pressure().min(), env.pressure().max())?;
    Ok(())
}

/// 여러 상태방정식을 차례로 더한 결과를 TOML로 출력한다.
pub fn mix(eoses: &[WaterEos], out: &mut impl Write) -> Result<(), AppError> {
    let (first, rest) = eoses
        .split_first()
        .ok_or(AppError::InvalidArg("설정 파일이 하나 이상 필요함"))?;
    let mut total = first.clone();
    for eos in rest {
        total = total.add(eos)?;
    }
    write!(out, "{}", EosConfig::from_eos(&total).to_toml_string()?)?;
    Ok(())
}
