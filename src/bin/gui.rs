#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

//! eframe/egui 기반 데스크톱 GUI 진입점.

use eframe::{egui, App, Frame};
use image::GenericImageView;
use rfd::FileDialog;
use std::{env, fs, path::Path};
use lca_impact_calculator::{
    config, i18n,
    lca::{
        CalculationReport, CalculationRequest, ImpactCalculator, ImpactLevel, ReferenceData, MAX_AMOUNT,
    },
    logging,
    report::{self, display_name, ReportView},
};
use tracing::{error, info};

fn main() -> Result<(), eframe::Error> {
    logging::init("info");

    // CLI 언어 옵션 처리: --lang xx 또는 --lang=xx (xx: auto/en/ko)
    let mut cli_lang: Option<String> = None;
    let args: Vec<String> = env::args().collect();
    let mut i = 1;
    while i < args.len() {
        let a = &args[i];
        if let Some(val) = a.strip_prefix("--lang=") {
            cli_lang = Some(val.to_string());
        } else if (a == "--lang" || a == "-L") && i + 1 < args.len() {
            cli_lang = Some(args[i + 1].clone());
            i += 1;
        }
        i += 1;
    }

    let mut viewport = egui::ViewportBuilder::default()
        .with_inner_size(egui::vec2(760.0, 820.0))
        .with_transparent(true);
    if let Some(icon) = load_app_icon() {
        viewport = viewport.with_icon(icon);
    }
    let options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };
    let mut app_cfg = config::load_or_default().unwrap_or_else(|e| {
        error!("config load failed, using defaults: {e}");
        config::Config::default()
    });
    if let Some(lang_cli) = cli_lang {
        app_cfg.language = i18n::resolve_language(&lang_cli, Some(app_cfg.language.as_str()));
    }
    eframe::run_native(
        "LCA Impact Calculator",
        options,
        Box::new(move |cc| {
            if let Some(path) = app_cfg.custom_font_path.as_deref() {
                if let Err(e) = load_custom_font(&cc.egui_ctx, path) {
                    error!("Font error: {e}");
                }
            }
            Box::new(GuiApp::new(app_cfg.clone()))
        }),
    )
}

fn load_app_icon() -> Option<egui::IconData> {
    let search = ["icon.png", "assets/icon.png", "../assets/icon.png"];
    let path = search.iter().find(|p| Path::new(*p).exists())?;
    let bytes = fs::read(path).ok()?;
    let img = image::load_from_memory(&bytes).ok()?;
    let rgba = img.to_rgba8();
    let (w, h) = img.dimensions();
    Some(egui::IconData {
        rgba: rgba.into_raw(),
        width: w,
        height: h,
    })
}

/// 사용자가 선택한 경로의 폰트를 egui에 등록한다. 한글 표시에 필요하다.
fn load_custom_font(ctx: &egui::Context, path: &str) -> Result<(), String> {
    let p = Path::new(path);
    if !p.exists() {
        return Err(format!("Font file not found: {path}"));
    }
    let bytes = fs::read(p).map_err(|e| format!("Failed to read font file: {e}"))?;
    let mut fonts = egui::FontDefinitions::default();
    fonts
        .font_data
        .insert("user_font".to_string(), egui::FontData::from_owned(bytes));
    for family in [egui::FontFamily::Proportional, egui::FontFamily::Monospace] {
        fonts
            .families
            .entry(family)
            .or_default()
            .insert(0, "user_font".to_string());
    }
    ctx.set_fonts(fonts);
    Ok(())
}

fn label_with_tip(ui: &mut egui::Ui, text: &str, tip: &str) -> egui::Response {
    ui.label(text).on_hover_text(tip)
}

/// 영향 수준에 맞춘 색상.
fn level_color(level: ImpactLevel) -> egui::Color32 {
    match level {
        ImpactLevel::Low => egui::Color32::from_rgb(46, 160, 67),
        ImpactLevel::Moderate => egui::Color32::from_rgb(210, 153, 34),
        ImpactLevel::High => egui::Color32::from_rgb(218, 54, 51),
    }
}

/// 목록에 없는 기본 선택값이면 첫 항목으로 바꾼다.
fn pick_default(ids: &[String], wanted: &str) -> String {
    ids.iter()
        .find(|id| id.as_str() == wanted)
        .or_else(|| ids.first())
        .cloned()
        .unwrap_or_default()
}

struct GuiApp {
    config: config::Config,
    tr: i18n::Translator,
    data: ReferenceData,
    material_ids: Vec<String>,
    energy_ids: Vec<String>,
    // 입력
    material: String,
    material_amount: f64,
    energy_type: String,
    energy_amount: f64,
    // 결과
    report: Option<CalculationReport>,
    view: Option<ReportView>,
    status: Option<String>,
    // 설정
    lang_input: String,
    window_alpha: f32,
    show_settings_modal: bool,
    show_help_modal: bool,
}

impl GuiApp {
    fn new(config: config::Config) -> Self {
        let data = ReferenceData::load_or_builtin(config.reference_data_path.as_deref())
            .unwrap_or_else(|e| {
                error!("reference data load failed, using built-in tables: {e}");
                ReferenceData::builtin()
            });
        let resolved = i18n::resolve_language(&config.language, None);
        let tr = i18n::Translator::new_with_pack(&resolved, config.language_pack_dir.as_deref());
        let material_ids: Vec<String> = data.material_ids().map(str::to_string).collect();
        let energy_ids: Vec<String> = data.energy_ids().map(str::to_string).collect();
        Self {
            material: pick_default(&material_ids, &config.default_material),
            energy_type: pick_default(&energy_ids, &config.default_energy),
            material_ids,
            energy_ids,
            material_amount: 0.0,
            energy_amount: 0.0,
            report: None,
            view: None,
            status: None,
            lang_input: config.language.clone(),
            window_alpha: config.window_alpha.clamp(0.3, 1.0),
            show_settings_modal: false,
            show_help_modal: false,
            tr,
            data,
            config,
        }
    }

    fn txt(&self, key: &str, default: &str) -> String {
        self.tr.lookup(key).unwrap_or_else(|| default.to_string())
    }

    /// "Calculate" 버튼을 눌렀을 때만 계산한다.
    fn calculate(&mut self) {
        let request = CalculationRequest::new(
            self.material.clone(),
            self.material_amount,
            self.energy_type.clone(),
            self.energy_amount,
        );
        match ImpactCalculator::new(&self.data).compute(&request) {
            Ok(result) => {
                self.view = Some(report::render(&result, &self.tr));
                self.report = Some(result);
                self.status = None;
            }
            Err(e) => {
                self.report = None;
                self.view = None;
                self.status = Some(format!("{}: {e}", self.tr.t(i18n::keys::ERROR_PREFIX)));
            }
        }
    }

    fn save_pdf(&mut self) {
        let Some(result) = self.report.as_ref() else {
            return;
        };
        let doc = match report::render_document_now(result) {
            Ok(doc) => doc,
            Err(e) => {
                self.status = Some(format!("{}: {e}", self.tr.t(i18n::keys::ERROR_PREFIX)));
                return;
            }
        };
        let file_name = self
            .config
            .report_path_in(".")
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or(doc.file_name.clone());
        let Some(path) = FileDialog::new()
            .add_filter("PDF", &["pdf"])
            .set_file_name(file_name.as_str())
            .save_file()
        else {
            return;
        };
        self.status = Some(match doc.write_to(&path) {
            Ok(()) => {
                info!(path = %path.display(), "pdf report written");
                self.tr
                    .tf(i18n::keys::CALC_PDF_SAVED, &[("path", path.display().to_string())])
            }
            Err(e) => format!("{}: {e}", self.tr.t(i18n::keys::ERROR_PREFIX)),
        });
    }

    fn ui_form(&mut self, ui: &mut egui::Ui) {
        let material_label = self.txt("gui.form.material", "Select material");
        let material_amount_label = self.txt("gui.form.material_amount", "Amount of material used (kg)");
        let energy_label = self.txt("gui.form.energy", "Select energy source");
        let energy_amount_label = self.txt("gui.form.energy_amount", "Amount of energy used (kWh)");
        let range_tip = self.txt("gui.form.range_tip", "0 ~ 10000");

        egui::Frame::group(ui.style()).show(ui, |ui| {
            egui::Grid::new("lca_form")
                .num_columns(2)
                .spacing([12.0, 8.0])
                .show(ui, |ui| {
                    ui.label(material_label.as_str());
                    egui::ComboBox::from_id_source("material_choice")
                        .selected_text(display_name(&self.material))
                        .show_ui(ui, |ui| {
                            for id in &self.material_ids {
                                ui.selectable_value(&mut self.material, id.clone(), display_name(id));
                            }
                        });
                    ui.end_row();

                    label_with_tip(ui, &material_amount_label, &range_tip);
                    ui.add(
                        egui::DragValue::new(&mut self.material_amount)
                            .clamp_range(0.0..=MAX_AMOUNT)
                            .speed(1.0),
                    );
                    ui.end_row();

                    ui.label(energy_label.as_str());
                    egui::ComboBox::from_id_source("energy_choice")
                        .selected_text(display_name(&self.energy_type))
                        .show_ui(ui, |ui| {
                            for id in &self.energy_ids {
                                ui.selectable_value(&mut self.energy_type, id.clone(), display_name(id));
                            }
                        });
                    ui.end_row();

                    label_with_tip(ui, &energy_amount_label, &range_tip);
                    ui.add(
                        egui::DragValue::new(&mut self.energy_amount)
                            .clamp_range(0.0..=MAX_AMOUNT)
                            .speed(1.0),
                    );
                    ui.end_row();
                });
        });
        ui.add_space(8.0);
        ui.horizontal(|ui| {
            if ui.button(self.txt("gui.form.calculate", "Calculate LCA")).clicked() {
                self.calculate();
            }
            let can_save = self.report.is_some();
            if ui
                .add_enabled(can_save, egui::Button::new(self.txt("gui.form.save_pdf", "Download PDF Report")))
                .clicked()
            {
                self.save_pdf();
            }
        });
        if let Some(msg) = &self.status {
            ui.label(msg.as_str());
        }
    }

    fn ui_results(&self, ui: &mut egui::Ui) {
        let Some(view) = &self.view else {
            return;
        };
        ui.separator();
        ui.heading(view.results_heading.as_str());
        for line in &view.input_lines {
            ui.label(line.as_str());
        }
        ui.add_space(6.0);
        for block in &view.categories {
            egui::Frame::group(ui.style()).show(ui, |ui| {
                ui.strong(block.heading.as_str());
                for figure in &block.figures {
                    ui.label(format!("- {figure}"));
                }
                ui.label(format!("- {} {}", block.score_line, block.indicator));
            });
        }
        ui.add_space(6.0);
        ui.heading(view.overall_heading.as_str());
        ui.label(view.overall.average_line.as_str());
        ui.colored_label(level_color(view.overall.level), view.overall.level_line.as_str());
        if let Some(s) = &view.suggestion {
            ui.add_space(6.0);
            ui.heading(s.heading.as_str());
            ui.label(s.energy_score_line.as_str());
            for alt in &s.alternatives {
                ui.label(format!("- {alt}"));
            }
            ui.label(egui::RichText::new(s.caveat.as_str()).italics());
        }
        ui.add_space(6.0);
        ui.small(view.scoring_guide.as_str());
    }
}

impl App for GuiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        // 투명도 적용
        let mut style = (*ctx.style()).clone();
        style.visuals.window_fill = style.visuals.window_fill.linear_multiply(self.window_alpha);
        style.visuals.panel_fill = style.visuals.panel_fill.linear_multiply(self.window_alpha);
        ctx.set_style(style);

        // 상단 바
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading(self.txt("gui.nav.app_title", "LCA Calculator for Chemical Processes"));
                ui.separator();
                if ui.button(self.txt("gui.settings.title", "Settings")).clicked() {
                    self.show_settings_modal = true;
                }
                if ui.button(self.txt("gui.about.title", "Help / About")).clicked() {
                    self.show_help_modal = true;
                }
            });
        });

        // 설정 모달
        if self.show_settings_modal {
            let mut open = true;
            let title = self.txt("gui.settings.title", "Settings");
            egui::Window::new(title)
                .collapsible(false)
                .resizable(true)
                .open(&mut open)
                .show(ctx, |ui| {
                    ui.label(self.txt("gui.settings.lang", "Language"));
                    egui::ComboBox::from_id_source("lang_choice")
                        .selected_text(self.lang_input.as_str())
                        .show_ui(ui, |ui| {
                            ui.selectable_value(&mut self.lang_input, "auto".into(), "System");
                            ui.selectable_value(&mut self.lang_input, "en".into(), "English");
                            ui.selectable_value(&mut self.lang_input, "ko".into(), "한국어");
                        });
                    ui.separator();
                    ui.label(self.txt("gui.settings.alpha", "Window transparency"));
                    ui.add(egui::Slider::new(&mut self.window_alpha, 0.3..=1.0).text("alpha"));
                    ui.separator();
                    if ui.button(self.txt("gui.settings.save", "Save settings")).clicked() {
                        self.config.language = self.lang_input.clone();
                        self.config.window_alpha = self.window_alpha;
                        // 즉시 번역기 반영
                        let resolved = i18n::resolve_language(&self.config.language, None);
                        self.tr = i18n::Translator::new_with_pack(
                            &resolved,
                            self.config.language_pack_dir.as_deref(),
                        );
                        if let Some(result) = &self.report {
                            self.view = Some(report::render(result, &self.tr));
                        }
                        self.status = Some(match self.config.save() {
                            Ok(()) => self.tr.t(i18n::keys::SETTINGS_SAVED).to_string(),
                            Err(e) => format!("{}: {e}", self.tr.t(i18n::keys::ERROR_PREFIX)),
                        });
                    }
                });
            self.show_settings_modal = open;
        }

        // 도움말 모달
        if self.show_help_modal {
            let mut open = true;
            egui::Window::new(self.txt("gui.about.title", "Help / About"))
                .collapsible(false)
                .open(&mut open)
                .show(ctx, |ui| {
                    ui.label(self.txt(
                        "gui.about.app",
                        "Simplified LCA score from one material and one energy source.",
                    ));
                    ui.label(self.txt(
                        "gui.about.disclaimer",
                        "Coefficients are illustrative constants, not certified LCA data.",
                    ));
                    ui.label(self.txt(
                        "gui.about.units",
                        "Units: material in kg, energy in kWh.",
                    ));
                });
            self.show_help_modal = open;
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false; 2])
                .show(ui, |ui| {
                    self.ui_form(ui);
                    self.ui_results(ui);
                });
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pick_default_falls_back_to_first_entry() {
        let ids = vec!["ethylene".to_string(), "ammonia".to_string()];
        assert_eq!(pick_default(&ids, "ammonia"), "ammonia");
        assert_eq!(pick_default(&ids, "graphene"), "ethylene");
        assert_eq!(pick_default(&[], "ammonia"), "");
    }

    #[test]
    fn level_colors_differ() {
        assert_ne!(level_color(ImpactLevel::Low), level_color(ImpactLevel::High));
        assert_ne!(level_color(ImpactLevel::Moderate), level_color(ImpactLevel::High));
    }
}
