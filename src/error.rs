use thiserror::Error;

/// 상태방정식 계산 결과 타입.
pub type EosResult<T> = Result<T, EosError>;

/// 상태방정식 구성/계산 중 발생 가능한 오류.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EosError {
    /// 하한이 상한보다 크거나 유한하지 않은 경계
    #[error("{what} 범위가 잘못됨: min={min}, max={max}")]
    InvalidLimits {
        what: &'static str,
        min: f64,
        max: f64,
    },

    /// NaN/무한대 입력
    #[error("{what} 입력이 유한하지 않음: {value}")]
    NonFiniteInput { what: &'static str, value: f64 },

    /// 화학종 정의 오류
    #[error("화학종 정의 오류: {0}")]
    InvalidSpecie(String),

    /// 지원하지 않는 IF97 영역 번호
    #[error("IF97 영역은 1, 2, 3, 5 중 하나여야 함: {0}")]
    InvalidRegion(i32),

    /// 두 유효 영역이 겹치지 않음
    #[error("유효 영역이 겹치지 않아 합성할 수 없음")]
    DisjointEnvelopes,

    /// 전체 몰수가 0이라 몰분율을 정의할 수 없음
    #[error("전체 몰수가 0이라 몰분율을 계산할 수 없음")]
    DegenerateMixture,

    /// 물성 오라클 계산 실패(유효 범위 밖이거나 수렴 실패)
    #[error("{property} 계산 실패: p={p} Pa, T={t} K")]
    Oracle {
        property: &'static str,
        p: f64,
        t: f64,
    },

    /// 토큰 스트림 파싱 오류
    #[error("파싱 오류: {0}")]
    Parse(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_mentions_context() {
        let err = EosError::InvalidLimits {
            what: "pressure",
            min: 2.0,
            max: 1.0,
        };
        assert!(err.to_string().contains("pressure"));

        let err = EosError::Oracle {
            property: "density",
            p: 1.0e5,
            t: 300.0,
        };
        assert!(err.to_string().contains("density"));
    }
}
