use serde::{Deserialize, Serialize};
use tracing::debug;

use super::score::{self, ScoreBand};

/// 제안 문구에 붙는 고정 안내문. 데이터에서 계산한 수치가 아니다.
pub const DEFAULT_CAVEAT: &str = "Switching could reduce your CO2 emissions by up to 90%.";

/// 에너지원별 대체 후보 목록.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlternativeSet {
    pub energy: String,
    pub options: Vec<String>,
}

/// 재생에너지 전환 제안 규칙.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SuggestionPolicy {
    /// 에너지 기여분 점수화 구간표
    pub energy_band: Vec<ScoreBand>,
    /// 이 점수 미만이면 제안하지 않는다
    pub min_energy_score: u8,
    /// 이미 청정한 에너지원
    pub clean_sources: Vec<String>,
    pub alternatives: Vec<AlternativeSet>,
    /// 매핑에 없는 에너지원에 쓰는 기본 후보
    pub default_alternatives: Vec<String>,
    pub caveat: String,
}

impl Default for SuggestionPolicy {
    fn default() -> Self {
        let set = |energy: &str, options: &[&str]| AlternativeSet {
            energy: energy.to_string(),
            options: options.iter().map(|s| s.to_string()).collect(),
        };
        Self {
            energy_band: score::ENERGY_SUGGESTION_BANDS.to_vec(),
            min_energy_score: 5,
            clean_sources: vec!["renewables".into(), "solar".into(), "wind".into()],
            alternatives: vec![
                set("coal", &["solar", "wind", "hydropower"]),
                set("natural_gas", &["biogas", "solar thermal"]),
                set("grid_electricity", &["solar PV", "wind"]),
                set("diesel", &["biodiesel", "electric"]),
            ],
            default_alternatives: vec!["solar".into(), "wind".into(), "geothermal".into()],
            caveat: DEFAULT_CAVEAT.to_string(),
        }
    }
}

/// 전환 제안 결과.
#[derive(Debug, Clone, PartialEq)]
pub struct Suggestion {
    pub energy_type: String,
    pub energy_score: u8,
    pub alternatives: Vec<String>,
    pub caveat: String,
}

/// 에너지원 자체 기여분으로 재생에너지 전환 여부를 판단한다.
#[derive(Debug, Clone, Copy)]
pub struct SuggestionAdvisor<'a> {
    policy: &'a SuggestionPolicy,
}

impl<'a> SuggestionAdvisor<'a> {
    pub fn new(policy: &'a SuggestionPolicy) -> Self {
        Self { policy }
    }

    /// 에너지원의 CO2 + 산성화 기여분 합을 별도 구간표로 점수화한다.
    pub fn energy_score(&self, energy_contribution: f64) -> u8 {
        score::bucketize(energy_contribution, &self.policy.energy_band)
    }

    pub fn is_clean_source(&self, energy_type: &str) -> bool {
        self.policy
            .clean_sources
            .iter()
            .any(|s| s.eq_ignore_ascii_case(energy_type))
    }

    /// 점수가 낮거나 이미 청정 에너지원이면 `None`.
    pub fn advise(&self, energy_type: &str, energy_contribution: f64) -> Option<Suggestion> {
        let energy_score = self.energy_score(energy_contribution);
        if energy_score < self.policy.min_energy_score || self.is_clean_source(energy_type) {
            debug!(energy_type, energy_score, "no renewable suggestion");
            return None;
        }
        let alternatives = self
            .policy
            .alternatives
            .iter()
            .find(|a| a.energy.eq_ignore_ascii_case(energy_type))
            .map(|a| a.options.clone())
            .unwrap_or_else(|| self.policy.default_alternatives.clone());
        debug!(energy_type, energy_score, ?alternatives, "renewable suggestion");
        Some(Suggestion {
            energy_type: energy_type.to_string(),
            energy_score,
            alternatives,
            caveat: self.policy.caveat.clone(),
        })
    }
}
