//! 계산 결과를 화면용 요약과 PDF 문서로 만든다.

pub mod document;
pub mod summary;

pub use document::{
    document_lines, paginate, render_document, render_document_now, DocLine, DocumentExport,
    ExportError, LineStyle,
};
pub use summary::{render, CategoryBlock, OverallBlock, ReportView, SuggestionBlock};

/// 내려받기 파일 이름.
pub const REPORT_FILE_NAME: &str = "lca_report.pdf";
/// 내보내는 문서의 MIME 타입.
pub const REPORT_MIME_TYPE: &str = "application/pdf";

/// 공백으로 나눈 단어마다 첫 글자만 대문자로 바꾼다. 나머지 글자는 그대로 둔다.
pub fn title_case(text: &str) -> String {
    text.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// `natural_gas` → `Natural Gas`
pub fn display_name(id: &str) -> String {
    title_case(&id.replace('_', " "))
}

/// 입력 수량 표기. 정수값은 소수 한 자리(10.0), 그 외는 입력 그대로 쓴다.
pub fn format_amount(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.1}")
    } else {
        format!("{value}")
    }
}

/// 점수만큼 채운 별과 나머지 빈 별.
pub fn intensity_indicator(score: u8) -> String {
    let filled = usize::from(score.min(10));
    format!("{}{}", "★".repeat(filled), "☆".repeat(10 - filled))
}
