//! IAPWS-IF97 물/증기 상태방정식. 입력 (p, T)를 유효 영역으로 제한한 뒤 물성을 계산하고,
//! 몰 기준으로 여러 상태방정식을 합성한다. CLI 외에 다른 계산기에서도 쓸 수 있도록 라이브러리로 분리한다.

pub mod app;
pub mod config;
pub mod eos;
pub mod error;
pub mod oracle;
pub mod specie;
pub mod steam;
pub mod units;

pub use eos::{BoundedEos, EosProperties, Envelope, EvaluationPoint, Limits};
pub use error::{EosError, EosResult};
pub use oracle::PropertyOracle;
pub use specie::{Specie, Species};
pub use steam::If97;
