use std::io::{self, Write};

use crate::app::AppError;
use crate::config::Config;
use crate::i18n::{keys, Translator};
use crate::lca::{CalculationRequest, ImpactCalculator, ReferenceData, MAX_AMOUNT};
use crate::report::{self, display_name};

/// 메인 메뉴 선택지를 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Calculate,
    ReferenceData,
    Settings,
    Exit,
}

/// 메인 메뉴를 표시하고 선택값을 반환한다.
pub fn main_menu(tr: &Translator) -> Result<MenuChoice, AppError> {
    println!("{}", tr.t(keys::MAIN_MENU_TITLE));
    println!("{}", tr.t(keys::MAIN_MENU_CALCULATE));
    println!("{}", tr.t(keys::MAIN_MENU_REFERENCE));
    println!("{}", tr.t(keys::MAIN_MENU_SETTINGS));
    println!("{}", tr.t(keys::MAIN_MENU_EXIT));
    loop {
        let sel = read_line(tr.t(keys::PROMPT_MENU_SELECT))?;
        match sel.trim() {
            "1" => return Ok(MenuChoice::Calculate),
            "2" => return Ok(MenuChoice::ReferenceData),
            "3" => return Ok(MenuChoice::Settings),
            "0" => return Ok(MenuChoice::Exit),
            _ => println!("{}", tr.t(keys::INVALID_SELECTION_RETRY)),
        }
    }
}

/// LCA 계산 메뉴를 처리한다. 선택지는 참조 테이블 키로 제한하고 수량은 범위 안에서만 받는다.
pub fn handle_calculate(tr: &Translator, cfg: &Config, data: &ReferenceData) -> Result<(), AppError> {
    println!("{}", tr.t(keys::CALC_HEADING));
    let materials: Vec<&str> = data.material_ids().collect();
    let energies: Vec<&str> = data.energy_ids().collect();

    let material = select_id(tr, tr.t(keys::CALC_PROMPT_MATERIAL), &materials, &cfg.default_material)?;
    let material_amount = read_amount(tr, tr.t(keys::CALC_PROMPT_MATERIAL_AMOUNT))?;
    let energy_type = select_id(tr, tr.t(keys::CALC_PROMPT_ENERGY), &energies, &cfg.default_energy)?;
    let energy_amount = read_amount(tr, tr.t(keys::CALC_PROMPT_ENERGY_AMOUNT))?;

    let request = CalculationRequest::new(material, material_amount, energy_type, energy_amount);
    let result = ImpactCalculator::new(data).compute(&request)?;
    println!("\n{}", report::render(&result, tr).to_text());

    let path = read_line(tr.t(keys::CALC_PROMPT_PDF_PATH))?;
    let path = path.trim();
    if !path.is_empty() {
        let doc = report::render_document_now(&result)?;
        doc.write_to(path)?;
        println!("{}", tr.tf(keys::CALC_PDF_SAVED, &[("path", path.to_string())]));
    }
    Ok(())
}

/// 참조 데이터 메뉴: 재료/에너지원과 계수를 출력한다.
pub fn handle_reference_data(tr: &Translator, data: &ReferenceData) {
    println!("{}", tr.t(keys::REFERENCE_HEADING));
    println!("{}", reference_listing(tr, data));
}

/// 재료/에너지원 목록을 표 형태 문자열로 만든다.
pub fn reference_listing(tr: &Translator, data: &ReferenceData) -> String {
    let mut out = Vec::new();
    out.push(format!("{} [per kg]  (CO2, water, energy, acidification)", tr.t(keys::REFERENCE_MATERIALS)));
    for m in &data.materials {
        let c = m.coefficients;
        out.push(format!(
            "  {:<18} {:>8} {:>8} {:>8} {:>8}",
            m.id, c.co2, c.water, c.energy, c.acidification
        ));
    }
    out.push(format!("{} [per kWh]", tr.t(keys::REFERENCE_ENERGY_SOURCES)));
    for e in &data.energy_sources {
        let c = e.coefficients;
        out.push(format!(
            "  {:<18} {:>8} {:>8} {:>8} {:>8}",
            e.id, c.co2, c.water, c.energy, c.acidification
        ));
    }
    out.join("\n")
}

/// 설정 메뉴를 처리한다. 변경이 있으면 true.
pub fn handle_settings(tr: &Translator, cfg: &mut Config) -> Result<bool, AppError> {
    println!("{}", tr.t(keys::SETTINGS_HEADING));
    println!("{}", tr.tf(keys::SETTINGS_CURRENT_LANGUAGE, &[("lang", cfg.language.clone())]));
    let sel = read_line(tr.t(keys::SETTINGS_PROMPT_LANGUAGE))?;
    let sel = sel.trim().to_lowercase();
    match sel.as_str() {
        "" => Ok(false),
        "auto" | "en" | "ko" => {
            cfg.language = sel;
            Ok(true)
        }
        _ => {
            println!("{}", tr.t(keys::INVALID_SELECTION_RETRY));
            Ok(false)
        }
    }
}

/// 번호 또는 키로 항목을 고른다. 엔터만 누르면 기본값(목록에 있을 때)을 쓴다.
fn select_id(tr: &Translator, prompt: &str, ids: &[&str], default: &str) -> Result<String, AppError> {
    for (i, id) in ids.iter().enumerate() {
        let mark = if *id == default { "*" } else { " " };
        println!("{mark}{}) {} ({id})", i + 1, display_name(id));
    }
    loop {
        let sel = read_line(prompt)?;
        if let Some(id) = resolve_selection(sel.trim(), ids, default) {
            return Ok(id.to_string());
        }
        println!("{}", tr.t(keys::INVALID_SELECTION_RETRY));
    }
}

/// 입력 문자열을 목록 항목으로 해석한다.
pub fn resolve_selection<'a>(input: &str, ids: &[&'a str], default: &str) -> Option<&'a str> {
    if input.is_empty() {
        return ids.iter().copied().find(|id| *id == default);
    }
    if let Ok(n) = input.parse::<usize>() {
        return n.checked_sub(1).and_then(|i| ids.get(i)).copied();
    }
    ids.iter().copied().find(|id| id.eq_ignore_ascii_case(input))
}

fn read_amount(tr: &Translator, prompt: &str) -> Result<f64, AppError> {
    loop {
        let v = read_f64(tr, prompt)?;
        if (0.0..=MAX_AMOUNT).contains(&v) {
            return Ok(v);
        }
        println!("{}", tr.tf(keys::CALC_AMOUNT_RANGE, &[("max", MAX_AMOUNT.to_string())]));
    }
}

fn read_line(prompt: &str) -> Result<String, AppError> {
    print!("{prompt}");
    io::stdout().flush()?;
    let mut buf = String::new();
    // 입력이 닫히면 메뉴가 무한히 돌지 않도록 오류로 끝낸다
    if io::stdin().read_line(&mut buf)? == 0 {
        return Err(io::Error::from(io::ErrorKind::UnexpectedEof).into());
    }
    Ok(buf)
}

fn read_f64(tr: &Translator, prompt: &str) -> Result<f64, AppError> {
    loop {
        let s = read_line(prompt)?;
        match s.trim().parse::<f64>() {
            Ok(v) => return Ok(v),
            Err(_) => println!("{}", tr.t(keys::ERROR_INVALID_NUMBER)),
        }
    }
}
