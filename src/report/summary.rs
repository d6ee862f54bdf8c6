use crate::i18n::{keys, Translator};
use crate::lca::{CalculationReport, ImpactCategory, ImpactLevel, ImpactResult, Suggestion};

use super::{format_amount, intensity_indicator, title_case};

/// 범주 하나의 표시 블록.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryBlock {
    pub category: ImpactCategory,
    pub heading: String,
    /// 재료 기여, 에너지 기여, 합계 (소수 둘째 자리)
    pub figures: Vec<String>,
    pub score: u8,
    pub score_line: String,
    pub indicator: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OverallBlock {
    pub average_line: String,
    pub level: ImpactLevel,
    pub level_line: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SuggestionBlock {
    pub heading: String,
    pub energy_score_line: String,
    /// 첫 글자를 대문자로 바꾼 대체 에너지원
    pub alternatives: Vec<String>,
    pub consider_line: String,
    pub caveat: String,
}

/// 화면/문서가 공통으로 쓰는 표현 모델. 수치 문자열은 여기서 한 번만 만든다.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportView {
    pub title: String,
    pub input_heading: String,
    pub input_lines: Vec<String>,
    pub results_heading: String,
    pub categories: Vec<CategoryBlock>,
    pub overall_heading: String,
    pub overall: OverallBlock,
    pub suggestion: Option<SuggestionBlock>,
    pub scoring_guide: String,
}

/// 계산 결과를 표현 모델로 바꾼다.
pub fn render(report: &CalculationReport, tr: &Translator) -> ReportView {
    let request = &report.request;
    let input_lines = vec![
        tr.tf(
            keys::REPORT_MATERIAL_LINE,
            &[
                ("material", request.material.clone()),
                ("amount", format_amount(request.material_amount)),
            ],
        ),
        tr.tf(
            keys::REPORT_ENERGY_LINE,
            &[
                ("energy", request.energy_type.clone()),
                ("amount", format_amount(request.energy_amount)),
            ],
        ),
    ];

    let overall = OverallBlock {
        average_line: tr.tf(
            keys::REPORT_AVERAGE,
            &[("score", format!("{:.1}", report.average_score))],
        ),
        level: report.impact_level,
        level_line: tr.tf(
            keys::REPORT_LEVEL,
            &[("level", report.impact_level.as_str().to_string())],
        ),
    };

    ReportView {
        title: tr.t(keys::REPORT_TITLE).to_string(),
        input_heading: tr.t(keys::REPORT_INPUT_SUMMARY).to_string(),
        input_lines,
        results_heading: tr.t(keys::REPORT_RESULTS).to_string(),
        categories: report.results.iter().map(|r| category_block(r, tr)).collect(),
        overall_heading: tr.t(keys::REPORT_OVERALL).to_string(),
        overall,
        suggestion: report.suggestion.as_ref().map(|s| suggestion_block(s, tr)),
        scoring_guide: tr.t(keys::REPORT_SCORING_GUIDE).to_string(),
    }
}

fn category_label(category: ImpactCategory, tr: &Translator) -> &str {
    let key = match category {
        ImpactCategory::Co2 => keys::CATEGORY_CO2,
        ImpactCategory::Water => keys::CATEGORY_WATER,
        ImpactCategory::Energy => keys::CATEGORY_ENERGY,
        ImpactCategory::Acidification => keys::CATEGORY_ACIDIFICATION,
    };
    tr.t(key)
}

fn category_block(result: &ImpactResult, tr: &Translator) -> CategoryBlock {
    let figure = |key: &str, value: f64| {
        tr.tf(
            key,
            &[("value", format!("{value:.2}")), ("unit", result.unit.to_string())],
        )
    };
    CategoryBlock {
        category: result.category,
        heading: tr.tf(
            keys::REPORT_CATEGORY_HEADING,
            &[("category", category_label(result.category, tr).to_string())],
        ),
        figures: vec![
            figure(keys::REPORT_FROM_MATERIAL, result.material_contribution),
            figure(keys::REPORT_FROM_ENERGY, result.energy_contribution),
            figure(keys::REPORT_TOTAL, result.total),
        ],
        score: result.score,
        score_line: tr.tf(keys::REPORT_SCORE, &[("score", result.score.to_string())]),
        indicator: intensity_indicator(result.score),
    }
}

fn suggestion_block(suggestion: &Suggestion, tr: &Translator) -> SuggestionBlock {
    let alternatives: Vec<String> = suggestion.alternatives.iter().map(|a| title_case(a)).collect();
    SuggestionBlock {
        heading: tr.t(keys::REPORT_SUGGESTION).to_string(),
        energy_score_line: tr.tf(
            keys::REPORT_ENERGY_SCORE,
            &[("score", suggestion.energy_score.to_string())],
        ),
        consider_line: tr.tf(keys::REPORT_CONSIDER, &[("options", alternatives.join(", "))]),
        alternatives,
        caveat: suggestion.caveat.clone(),
    }
}

impl ReportView {
    /// CLI 출력용 평문.
    pub fn to_text(&self) -> String {
        let mut out = Vec::new();
        out.push(format!("=== {} ===", self.title));
        out.push(self.input_heading.clone());
        out.extend(self.input_lines.iter().map(|l| format!("  {l}")));
        out.push(String::new());
        out.push(self.results_heading.clone());
        for block in &self.categories {
            out.push(format!("  {}", block.heading));
            out.extend(block.figures.iter().map(|l| format!("    - {l}")));
            out.push(format!("    - {} {}", block.score_line, block.indicator));
        }
        out.push(String::new());
        out.push(self.overall_heading.clone());
        out.push(format!("  {}", self.overall.average_line));
        out.push(format!("  {}", self.overall.level_line));
        if let Some(s) = &self.suggestion {
            out.push(String::new());
            out.push(s.heading.clone());
            out.push(format!("  {}", s.energy_score_line));
            out.push(format!("  {}", s.consider_line));
            out.push(format!("  {}", s.caveat));
        }
        out.push(String::new());
        out.push(self.scoring_guide.clone());
        out.join("\n")
    }
}
