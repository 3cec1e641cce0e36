use std::str::FromStr;

use super::UnknownUnit;

/// 절대압 단위. 내부 기준은 항상 Pa(abs)이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PressureUnit {
    Pascal,
    KiloPascal,
    MegaPascal,
    Bar,
    Psi,
    Atm,
}

const PA_PER_BAR: f64 = 100_000.0;
const PA_PER_ATM: f64 = 101_325.0;
const PA_PER_PSI: f64 = 6_894.757;

/// 주어진 압력을 Pa 로 변환한다.
pub fn to_pa(value: f64, unit: PressureUnit) -> f64 {
    match unit {
        PressureUnit::Pascal => value,
        PressureUnit::KiloPascal => value * 1.0e3,
        PressureUnit::MegaPascal => value * 1.0e6,
        PressureUnit::Bar => value * PA_PER_BAR,
        PressureUnit::Psi => value * PA_PER_PSI,
        PressureUnit::Atm => value * PA_PER_ATM,
    }
}

impl FromStr for PressureUnit {
    type Err = UnknownUnit;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pa" | "pascal" => Ok(PressureUnit::Pascal),
            "kpa" | "kilopascal" => Ok(PressureUnit::KiloPascal),
            "mpa" | "megapascal" => Ok(PressureUnit::MegaPascal),
            "bar" | "bara" => Ok(PressureUnit::Bar),
            "psi" | "psia" => Ok(PressureUnit::Psi),
            "atm" => Ok(PressureUnit::Atm),
            _ => Err(UnknownUnit(s.to_string())),
        }
    }
}
