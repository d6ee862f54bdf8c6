//! PDF 보고서 내보내기.
//!
//! PDF 내장 폰트(Helvetica)는 WinAnsi 문자만 표시하므로 문서는 항상 영문 문자열로 만든다.
//! 수치 문자열은 화면 요약과 같은 `ReportView`에서 가져온다.

use std::fs;
use std::path::Path;

use chrono::{Local, NaiveDateTime};
use printpdf::{BuiltinFont, Mm, PdfDocument};
use thiserror::Error;
use tracing::info;

use crate::i18n::{keys, Translator};
use crate::lca::CalculationReport;

use super::summary::{render, ReportView};
use super::{REPORT_FILE_NAME, REPORT_MIME_TYPE};

/// A4 세로
pub const PAGE_WIDTH_MM: f32 = 210.0;
pub const PAGE_HEIGHT_MM: f32 = 297.0;
pub const MARGIN_MM: f32 = 20.0;
/// 한 줄에 넣을 최대 글자 수. 넘치면 단어 단위로 줄바꿈한다.
const WRAP_CHARS: usize = 80;

/// 문서 줄 스타일.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineStyle {
    Title,
    Heading,
    Body,
    /// 빈 줄
    Gap,
}

impl LineStyle {
    pub fn font_size(self) -> f32 {
        match self {
            LineStyle::Title => 16.0,
            LineStyle::Heading => 13.0,
            LineStyle::Body | LineStyle::Gap => 11.0,
        }
    }

    /// 줄이 차지하는 세로 높이 [mm]. 제안이 있는 보통 보고서가 A4 한 장에 들어가는 값이다.
    pub fn height_mm(self) -> f32 {
        match self {
            LineStyle::Title => 10.0,
            LineStyle::Heading => 8.0,
            LineStyle::Body => 6.0,
            LineStyle::Gap => 3.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DocLine {
    pub style: LineStyle,
    pub text: String,
}

impl DocLine {
    pub fn new(style: LineStyle, text: impl Into<String>) -> Self {
        Self {
            style,
            text: text.into(),
        }
    }

    pub fn gap() -> Self {
        Self::new(LineStyle::Gap, "")
    }
}

/// 내보낸 문서. 클라이언트에 넘길 파일 이름과 MIME 타입을 함께 담는다.
#[derive(Debug, Clone)]
pub struct DocumentExport {
    pub file_name: String,
    pub mime_type: &'static str,
    pub page_count: usize,
    pub bytes: Vec<u8>,
}

impl DocumentExport {
    pub fn write_to(&self, path: impl AsRef<Path>) -> Result<(), ExportError> {
        fs::write(path, &self.bytes)?;
        Ok(())
    }
}

/// 문서 내보내기 중 발생 가능한 오류.
#[derive(Debug, Error)]
pub enum ExportError {
    /// PDF 생성 실패
    #[error("PDF rendering failed: {0}")]
    Pdf(String),
    /// 파일 쓰기 실패
    #[error("report I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// 제목, 생성 일시, 입력 요약, 범주별 결과, 종합 평가, 제안 순으로 문서 줄을 만든다.
pub fn document_lines(view: &ReportView, generated_on: &str) -> Vec<DocLine> {
    let mut lines = vec![
        DocLine::new(LineStyle::Title, view.title.clone()),
        DocLine::new(LineStyle::Body, generated_on),
        DocLine::gap(),
        DocLine::new(LineStyle::Heading, view.input_heading.clone()),
    ];
    lines.extend(view.input_lines.iter().map(|l| DocLine::new(LineStyle::Body, l.clone())));
    lines.push(DocLine::gap());

    lines.push(DocLine::new(LineStyle::Heading, view.results_heading.clone()));
    for block in &view.categories {
        lines.push(DocLine::new(LineStyle::Body, block.heading.clone()));
        for figure in &block.figures {
            lines.push(DocLine::new(LineStyle::Body, format!("  - {figure}")));
        }
        lines.push(DocLine::new(LineStyle::Body, format!("  - {}", block.score_line)));
    }
    lines.push(DocLine::gap());

    lines.push(DocLine::new(LineStyle::Heading, view.overall_heading.clone()));
    lines.push(DocLine::new(LineStyle::Body, view.overall.average_line.clone()));
    lines.push(DocLine::new(LineStyle::Body, view.overall.level_line.clone()));

    if let Some(s) = &view.suggestion {
        lines.push(DocLine::gap());
        lines.push(DocLine::new(LineStyle::Heading, s.heading.clone()));
        lines.push(DocLine::new(LineStyle::Body, s.energy_score_line.clone()));
        for text in [&s.consider_line, &s.caveat] {
            lines.extend(wrap(text, WRAP_CHARS).into_iter().map(|l| DocLine::new(LineStyle::Body, l)));
        }
    }
    lines.push(DocLine::gap());
    lines.push(DocLine::new(LineStyle::Body, view.scoring_guide.clone()));
    lines
}

/// 쓸 수 있는 높이를 넘지 않도록 줄을 페이지로 나눈다. 빈 페이지는 만들지 않는다.
///
/// 제목/소제목은 바로 다음 줄과 같은 페이지에 둔다.
pub fn paginate(lines: &[DocLine], usable_height_mm: f32) -> Vec<Vec<DocLine>> {
    let mut pages: Vec<Vec<DocLine>> = Vec::new();
    let mut current: Vec<DocLine> = Vec::new();
    let mut used = 0.0_f32;
    for (i, line) in lines.iter().enumerate() {
        let h = line.style.height_mm();
        let needed = match (line.style, lines.get(i + 1)) {
            (LineStyle::Title | LineStyle::Heading, Some(next)) if next.style != LineStyle::Gap => {
                h + next.style.height_mm()
            }
            _ => h,
        };
        if used + needed > usable_height_mm && !current.is_empty() {
            pages.push(std::mem::take(&mut current));
            used = 0.0;
        }
        // 페이지 첫머리의 빈 줄은 버린다
        if current.is_empty() && line.style == LineStyle::Gap {
            continue;
        }
        used += h;
        current.push(line.clone());
    }
    if !current.is_empty() {
        pages.push(current);
    }
    pages
}

fn wrap(text: &str, max_chars: usize) -> Vec<String> {
    let mut out = Vec::new();
    let mut line = String::new();
    for word in text.split_whitespace() {
        if !line.is_empty() && line.chars().count() + 1 + word.chars().count() > max_chars {
            out.push(std::mem::take(&mut line));
        }
        if !line.is_empty() {
            line.push(' ');
        }
        line.push_str(word);
    }
    if !line.is_empty() {
        out.push(line);
    }
    out
}

/// 현재 시각을 생성 일시로 써서 문서를 만든다.
pub fn render_document_now(report: &CalculationReport) -> Result<DocumentExport, ExportError> {
    render_document(report, Local::now().naive_local())
}

/// 계산 결과를 A4 PDF 바이트로 만든다.
pub fn render_document(
    report: &CalculationReport,
    generated_at: NaiveDateTime,
) -> Result<DocumentExport, ExportError> {
    let tr = Translator::default();
    let view = render(report, &tr);
    let generated_on = tr.tf(
        keys::REPORT_GENERATED_ON,
        &[("time", generated_at.format("%Y-%m-%d %H:%M").to_string())],
    );
    let lines = document_lines(&view, &generated_on);
    let pages = paginate(&lines, PAGE_HEIGHT_MM - 2.0 * MARGIN_MM);

    let (doc, first_page, first_layer) = PdfDocument::new(
        view.title.as_str(),
        Mm(PAGE_WIDTH_MM),
        Mm(PAGE_HEIGHT_MM),
        "Page 1",
    );
    let regular = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(|e| ExportError::Pdf(e.to_string()))?;
    let bold = doc
        .add_builtin_font(BuiltinFont::HelveticaBold)
        .map_err(|e| ExportError::Pdf(e.to_string()))?;

    let mut canvases = vec![doc.get_page(first_page).get_layer(first_layer)];
    for n in 2..=pages.len() {
        let (page, layer) = doc.add_page(Mm(PAGE_WIDTH_MM), Mm(PAGE_HEIGHT_MM), format!("Page {n}"));
        canvases.push(doc.get_page(page).get_layer(layer));
    }

    for (canvas, page_lines) in canvases.iter().zip(&pages) {
        let mut y = PAGE_HEIGHT_MM - MARGIN_MM;
        for line in page_lines {
            y -= line.style.height_mm();
            if line.style == LineStyle::Gap {
                continue;
            }
            let font = match line.style {
                LineStyle::Title | LineStyle::Heading => &bold,
                _ => &regular,
            };
            canvas.use_text(line.text.as_str(), line.style.font_size(), Mm(MARGIN_MM), Mm(y), font);
        }
    }

    let bytes = doc
        .save_to_bytes()
        .map_err(|e| ExportError::Pdf(e.to_string()))?;
    info!(pages = pages.len(), bytes = bytes.len(), "pdf report rendered");
    Ok(DocumentExport {
        file_name: REPORT_FILE_NAME.to_string(),
        mime_type: REPORT_MIME_TYPE,
        page_count: pages.len(),
        bytes,
    })
}
