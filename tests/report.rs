use chrono::NaiveDate;
use lca_impact_calculator::i18n::Translator;
use lca_impact_calculator::lca::{CalculationReport, CalculationRequest, ImpactCalculator, ReferenceData};
use lca_impact_calculator::report::{
    self, display_name, document_lines, format_amount, intensity_indicator, paginate,
    render_document, title_case, DocLine, LineStyle, REPORT_FILE_NAME, REPORT_MIME_TYPE,
};

fn sample(material: &str, m: f64, energy: &str, e: f64) -> CalculationReport {
    let data = ReferenceData::builtin();
    ImpactCalculator::new(&data)
        .compute(&CalculationRequest::new(material, m, energy, e))
        .unwrap()
}

#[test]
fn text_view_lists_inputs_figures_and_assessment() {
    let view = report::render(&sample("ammonia", 10.0, "natural_gas", 100.0), &Translator::new("en"));

    assert_eq!(view.title, "LCA Environmental Impact Report");
    assert_eq!(
        view.input_lines,
        [
            "Material: ammonia | Amount: 10.0 kg",
            "Energy Source: natural_gas | Amount: 100.0 kWh"
        ]
    );

    let co2 = &view.categories[0];
    assert_eq!(co2.heading, "CO2 Impact");
    assert_eq!(
        co2.figures,
        [
            "From material: 23.80 kg CO2-eq",
            "From energy: 49.00 kg CO2-eq",
            "Total: 72.80 kg CO2-eq"
        ]
    );
    assert_eq!(co2.score_line, "Score: 7/10");
    assert_eq!(co2.indicator, "★★★★★★★☆☆☆");

    let acid = &view.categories[3];
    assert_eq!(acid.figures[2], "Total: 0.25 kg SO2-eq");

    assert_eq!(view.overall.average_line, "Average Impact Score: 5.5/10");
    assert_eq!(view.overall.level_line, "Impact Level: MODERATE");

    let s = view.suggestion.as_ref().expect("suggestion block");
    assert_eq!(s.energy_score_line, "Current energy impact score: 9/10");
    assert_eq!(s.alternatives, ["Biogas", "Solar Thermal"]);
    assert_eq!(s.consider_line, "Consider switching to: Biogas, Solar Thermal");
    assert_eq!(s.caveat, "Switching could reduce your CO2 emissions by up to 90%.");

    let text = view.to_text();
    assert!(text.starts_with("=== LCA Environmental Impact Report ==="));
    assert!(text.contains("Total: 740.00 MJ"));
    assert!(text.contains("Scoring Guide: 1-3 (Low) | 4-7 (Medium) | 8-10 (High)"));
}

#[test]
fn no_suggestion_block_for_clean_energy() {
    let view = report::render(&sample("ethylene", 1.0, "wind", 1.0), &Translator::new("en"));
    assert!(view.suggestion.is_none());
    assert!(!view.to_text().contains("Renewable Energy Suggestions"));
}

#[test]
fn korean_view_keeps_the_same_figures() {
    let report = sample("ammonia", 10.0, "natural_gas", 100.0);
    let en = report::render(&report, &Translator::new("en"));
    let ko = report::render(&report, &Translator::new("ko"));
    assert_ne!(en.title, ko.title);
    for (a, b) in en.categories.iter().zip(&ko.categories) {
        assert_eq!(a.score, b.score);
        assert_eq!(a.indicator, b.indicator);
        for (fa, fb) in a.figures.iter().zip(&b.figures) {
            let tail = fa.split(": ").nth(1).unwrap();
            assert!(fb.contains(tail), "{fb} should contain {tail}");
        }
    }
}

#[test]
fn name_formatting() {
    assert_eq!(title_case("solar thermal"), "Solar Thermal");
    assert_eq!(title_case("solar PV"), "Solar PV");
    assert_eq!(display_name("grid_electricity"), "Grid Electricity");
    assert_eq!(format_amount(10.0), "10.0");
    assert_eq!(format_amount(2.5), "2.5");
    assert_eq!(format_amount(0.0), "0.0");
    assert_eq!(intensity_indicator(1), "★☆☆☆☆☆☆☆☆☆");
    assert_eq!(intensity_indicator(10), "★★★★★★★★★★");
}

#[test]
fn document_lines_share_view_strings() {
    let view = report::render(&sample("hydrogen", 50.0, "coal", 20.0), &Translator::default());
    let lines = document_lines(&view, "Generated on: 2024-05-01 09:30");
    let texts: Vec<&str> = lines.iter().map(|l| l.text.as_str()).collect();

    assert_eq!(lines[0].style, LineStyle::Title);
    assert_eq!(texts[1], "Generated on: 2024-05-01 09:30");
    for block in &view.categories {
        assert!(texts.contains(&block.heading.as_str()));
        for figure in &block.figures {
            assert!(texts.contains(&format!("  - {figure}").as_str()), "missing {figure}");
        }
    }
    assert!(texts.contains(&view.overall.level_line.as_str()));
    assert_eq!(*texts.last().unwrap(), view.scoring_guide);
}

#[test]
fn pdf_export_metadata() {
    let generated = NaiveDate::from_ymd_opt(2024, 5, 1)
        .unwrap()
        .and_hms_opt(9, 30, 0)
        .unwrap();
    let doc = render_document(&sample("ammonia", 10.0, "natural_gas", 100.0), generated).unwrap();
    assert!(doc.bytes.starts_with(b"%PDF"));
    assert_eq!(doc.file_name, REPORT_FILE_NAME);
    assert_eq!(doc.mime_type, REPORT_MIME_TYPE);
    assert_eq!(doc.page_count, 1);

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(&doc.file_name);
    doc.write_to(&path).unwrap();
    assert_eq!(std::fs::read(&path).unwrap(), doc.bytes);
}

#[test]
fn long_documents_flow_onto_new_pages() {
    let body = LineStyle::Body.height_mm();
    let mut lines: Vec<DocLine> = (0..40)
        .map(|i| DocLine::new(LineStyle::Body, format!("line {i}")))
        .collect();
    let pages = paginate(&lines, body * 32.0 + 1.0);
    assert_eq!(pages.len(), 2);
    assert_eq!(pages[0].len(), 32);
    assert_eq!(pages[1].len(), 8);

    // 페이지 첫머리의 빈 줄은 남지 않는다
    lines.truncate(32);
    lines.push(DocLine::gap());
    lines.push(DocLine::new(LineStyle::Body, "tail"));
    let pages = paginate(&lines, body * 32.0);
    assert_eq!(pages.len(), 2);
    assert_eq!(pages[1], vec![DocLine::new(LineStyle::Body, "tail")]);
}

#[test]
fn heading_moves_with_its_first_line() {
    let body = LineStyle::Body.height_mm();
    let heading = LineStyle::Heading.height_mm();
    let lines = vec![
        DocLine::new(LineStyle::Body, "a"),
        DocLine::new(LineStyle::Body, "b"),
        DocLine::new(LineStyle::Heading, "Overall Assessment:"),
        DocLine::new(LineStyle::Body, "Average Impact Score: 5.5/10"),
    ];
    let pages = paginate(&lines, body * 2.0 + heading + body / 2.0);
    assert_eq!(pages.len(), 2);
    assert_eq!(pages[0].len(), 2);
    assert_eq!(pages[1][0].style, LineStyle::Heading);
    assert_eq!(pages[1][1].text, "Average Impact Score: 5.5/10");
}

#[test]
fn long_suggestion_spills_onto_second_page() {
    let mut data = ReferenceData::builtin();
    data.suggestions.caveat = "Check supplier data and local grid mix before switching. ".repeat(40);
    data.suggestions.alternatives.clear();
    data.suggestions.default_alternatives = (1..=40).map(|i| format!("option {i}")).collect();
    let report = ImpactCalculator::new(&data)
        .compute(&CalculationRequest::new("ammonia", 10.0, "natural_gas", 100.0))
        .unwrap();
    assert!(report.suggestion.is_some());

    let generated = NaiveDate::from_ymd_opt(2024, 5, 1)
        .unwrap()
        .and_hms_opt(9, 30, 0)
        .unwrap();
    let doc = render_document(&report, generated).unwrap();
    assert!(doc.bytes.starts_with(b"%PDF"));
    assert_eq!(doc.page_count, 2);

    let view = report::render(&report, &Translator::default());
    let lines = document_lines(&view, "Generated on: 2024-05-01 09:30");
    let pages = paginate(&lines, 297.0 - 2.0 * 20.0);
    assert_eq!(pages.len(), doc.page_count);
    assert_eq!(pages[1].last().unwrap().text, view.scoring_guide);
}
