//! 유효 영역 제한 상태방정식과 그 합성 연산.

pub mod algebra;
pub mod bounded;
pub mod limits;
pub mod stream;

pub use algebra::mole_fractions;
pub use bounded::{BoundedEos, EosProperties};
pub use limits::{Envelope, EvaluationPoint, Limits};
