//! LCA 핵심 계산: 계수 조회 → 가중합 → 점수 구간화 → 전환 제안.

pub mod advisor;
pub mod calculator;
pub mod category;
pub mod error;
pub mod reference_data;
pub mod score;

pub use advisor::{Suggestion, SuggestionAdvisor, SuggestionPolicy, DEFAULT_CAVEAT};
pub use calculator::{
    CalculationReport, CalculationRequest, ImpactCalculator, ImpactLevel, ImpactResult, MAX_AMOUNT,
};
pub use category::{ImpactCategory, ImpactVector};
pub use error::{IdentifierKind, LcaError};
pub use reference_data::{EnergyProfile, MaterialProfile, ReferenceData, ReferenceDataError};
pub use score::{bucketize, ScoreBand};
