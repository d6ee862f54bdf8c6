use std::fmt;

use tracing::info;

use super::advisor::{Suggestion, SuggestionAdvisor};
use super::category::ImpactCategory;
use super::error::LcaError;
use super::reference_data::ReferenceData;
use super::score;

/// 허용되는 재료/에너지 수량의 상한.
pub const MAX_AMOUNT: f64 = 10_000.0;

/// 사용자 입력. 재료는 kg, 에너지는 kWh 기준이다.
#[derive(Debug, Clone, PartialEq)]
pub struct CalculationRequest {
    pub material: String,
    pub material_amount: f64,
    pub energy_type: String,
    pub energy_amount: f64,
}

impl CalculationRequest {
    pub fn new(
        material: impl Into<String>,
        material_amount: f64,
        energy_type: impl Into<String>,
        energy_amount: f64,
    ) -> Self {
        Self {
            material: material.into(),
            material_amount,
            energy_type: energy_type.into(),
            energy_amount,
        }
    }
}

/// 범주 하나의 계산 결과.
#[derive(Debug, Clone, PartialEq)]
pub struct ImpactResult {
    pub category: ImpactCategory,
    pub material_contribution: f64,
    pub energy_contribution: f64,
    pub total: f64,
    /// 1~10
    pub score: u8,
    pub unit: &'static str,
}

/// 평균 점수에 따른 종합 영향 수준.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImpactLevel {
    Low,
    Moderate,
    High,
}

impl ImpactLevel {
    /// 3 이하 LOW, 7 이하 MODERATE, 그 외 HIGH.
    pub fn from_average(average_score: f64) -> Self {
        if average_score <= 3.0 {
            ImpactLevel::Low
        } else if average_score <= 7.0 {
            ImpactLevel::Moderate
        } else {
            ImpactLevel::High
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ImpactLevel::Low => "LOW",
            ImpactLevel::Moderate => "MODERATE",
            ImpactLevel::High => "HIGH",
        }
    }
}

impl fmt::Display for ImpactLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 계산 한 번의 결과 전체. 표시/내보내기 후 폐기한다.
#[derive(Debug, Clone, PartialEq)]
pub struct CalculationReport {
    pub request: CalculationRequest,
    /// `ImpactCategory::ALL` 순서
    pub results: Vec<ImpactResult>,
    /// 반올림하지 않은 평균 점수
    pub average_score: f64,
    pub impact_level: ImpactLevel,
    /// 에너지원 기여분 점수(1~10)
    pub energy_score: u8,
    pub suggestion: Option<Suggestion>,
}

impl CalculationReport {
    pub fn result(&self, category: ImpactCategory) -> Option<&ImpactResult> {
        self.results.iter().find(|r| r.category == category)
    }

    /// 제안 판단에 쓰는 값: CO2와 산성화 범주의 에너지 기여분 합.
    pub fn energy_suggestion_input(&self) -> f64 {
        [ImpactCategory::Co2, ImpactCategory::Acidification]
            .into_iter()
            .filter_map(|c| self.result(c))
            .map(|r| r.energy_contribution)
            .sum()
    }
}

/// 수량과 계수를 곱해 범주별 영향과 점수를 계산한다.
#[derive(Debug, Clone, Copy)]
pub struct ImpactCalculator<'a> {
    data: &'a ReferenceData,
}

impl<'a> ImpactCalculator<'a> {
    pub fn new(data: &'a ReferenceData) -> Self {
        Self { data }
    }

    /// 요청을 검증한 뒤 네 범주를 모두 계산한다. 실패하면 부분 결과 없이 오류를 돌려준다.
    pub fn compute(&self, request: &CalculationRequest) -> Result<CalculationReport, LcaError> {
        check_amount("material_amount", request.material_amount)?;
        check_amount("energy_amount", request.energy_amount)?;
        let material = self.data.lookup_material(&request.material)?;
        let energy = self.data.lookup_energy(&request.energy_type)?;

        let results: Vec<ImpactResult> = ImpactCategory::ALL
            .into_iter()
            .map(|category| {
                let material_contribution =
                    request.material_amount * material.coefficients.get(category);
                let energy_contribution = request.energy_amount * energy.coefficients.get(category);
                let total = material_contribution + energy_contribution;
                ImpactResult {
                    category,
                    material_contribution,
                    energy_contribution,
                    total,
                    score: score::bucketize(total, self.data.score_bands.get(category)),
                    unit: category.unit(),
                }
            })
            .collect();

        let average_score =
            results.iter().map(|r| f64::from(r.score)).sum::<f64>() / results.len() as f64;
        let impact_level = ImpactLevel::from_average(average_score);

        let mut report = CalculationReport {
            request: CalculationRequest {
                material: material.id.clone(),
                energy_type: energy.id.clone(),
                ..request.clone()
            },
            results,
            average_score,
            impact_level,
            energy_score: 0,
            suggestion: None,
        };
        let advisor = SuggestionAdvisor::new(&self.data.suggestions);
        let energy_input = report.energy_suggestion_input();
        report.energy_score = advisor.energy_score(energy_input);
        report.suggestion = advisor.advise(&energy.id, energy_input);

        info!(
            material = %report.request.material,
            energy = %report.request.energy_type,
            average_score = report.average_score,
            level = %report.impact_level,
            "lca calculated"
        );
        Ok(report)
    }
}

/// 수량은 유한하고 0~10000 범위여야 한다. 범위를 벗어나면 보정하지 않고 거부한다.
fn check_amount(field: &'static str, value: f64) -> Result<(), LcaError> {
    if value.is_finite() && (0.0..=MAX_AMOUNT).contains(&value) {
        Ok(())
    } else {
        Err(LcaError::OutOfRangeAmount { field, value })
    }
}
