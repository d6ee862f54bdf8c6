use std::fmt;

use thiserror::Error;

/// 조회에 실패한 식별자의 종류.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentifierKind {
    Material,
    Energy,
}

impl fmt::Display for IdentifierKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IdentifierKind::Material => write!(f, "material"),
            IdentifierKind::Energy => write!(f, "energy source"),
        }
    }
}

/// LCA 계산 중 발생 가능한 오류. 모두 호출자 입력 문제다.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LcaError {
    /// 참조 테이블에 없는 재료/에너지원 키
    #[error("unknown {kind}: {id}")]
    UnknownIdentifier { kind: IdentifierKind, id: String },
    /// 0~10000 범위를 벗어나거나 유한하지 않은 수량
    #[error("{field} must be within 0..={max}, got {value}", max = crate::lca::MAX_AMOUNT)]
    OutOfRangeAmount { field: &'static str, value: f64 },
    /// 참조 테이블 자체가 불변식을 어김
    #[error("invalid reference data: {0}")]
    InvalidReferenceData(String),
}
