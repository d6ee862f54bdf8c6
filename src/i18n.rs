use std::collections::HashMap;
use std::fs;
use std::path::Path;
use sys_locale::get_locale;

/// 문자열 키를 모아두는 네임스페이스.
pub mod keys {
    pub const ERROR_PREFIX: &str = "general.error_prefix";
    pub const APP_EXIT: &str = "general.app_exit";

    pub const MAIN_MENU_TITLE: &str = "main_menu.title";
    pub const MAIN_MENU_CALCULATE: &str = "main_menu.calculate";
    pub const MAIN_MENU_REFERENCE: &str = "main_menu.reference";
    pub const MAIN_MENU_SETTINGS: &str = "main_menu.settings";
    pub const MAIN_MENU_EXIT: &str = "main_menu.exit";
    pub const PROMPT_MENU_SELECT: &str = "prompt.menu_select";
    pub const INVALID_SELECTION_RETRY: &str = "error.invalid_selection_retry";
    pub const ERROR_INVALID_NUMBER: &str = "error.invalid_number";

    pub const CALC_HEADING: &str = "calc.heading";
    pub const CALC_PROMPT_MATERIAL: &str = "calc.prompt_material";
    pub const CALC_PROMPT_MATERIAL_AMOUNT: &str = "calc.prompt_material_amount";
    pub const CALC_PROMPT_ENERGY: &str = "calc.prompt_energy";
    pub const CALC_PROMPT_ENERGY_AMOUNT: &str = "calc.prompt_energy_amount";
    pub const CALC_AMOUNT_RANGE: &str = "calc.amount_range";
    pub const CALC_PROMPT_PDF_PATH: &str = "calc.prompt_pdf_path";
    pub const CALC_PDF_SAVED: &str = "calc.pdf_saved";

    pub const REFERENCE_HEADING: &str = "reference.heading";
    pub const REFERENCE_MATERIALS: &str = "reference.materials";
    pub const REFERENCE_ENERGY_SOURCES: &str = "reference.energy_sources";

    pub const SETTINGS_HEADING: &str = "settings.heading";
    pub const SETTINGS_CURRENT_LANGUAGE: &str = "settings.current_language";
    pub const SETTINGS_PROMPT_LANGUAGE: &str = "settings.prompt_language";
    pub const SETTINGS_SAVED: &str = "settings.saved";

    pub const REPORT_TITLE: &str = "report.title";
    pub const REPORT_GENERATED_ON: &str = "report.generated_on";
    pub const REPORT_INPUT_SUMMARY: &str = "report.input_summary";
    pub const REPORT_MATERIAL_LINE: &str = "report.material_line";
    pub const REPORT_ENERGY_LINE: &str = "report.energy_line";
    pub const REPORT_RESULTS: &str = "report.results";
    pub const REPORT_CATEGORY_HEADING: &str = "report.category_heading";
    pub const REPORT_FROM_MATERIAL: &str = "report.from_material";
    pub const REPORT_FROM_ENERGY: &str = "report.from_energy";
    pub const REPORT_TOTAL: &str = "report.total";
    pub const REPORT_SCORE: &str = "report.score";
    pub const REPORT_OVERALL: &str = "report.overall";
    pub const REPORT_AVERAGE: &str = "report.average";
    pub const REPORT_LEVEL: &str = "report.level";
    pub const REPORT_SUGGESTION: &str = "report.suggestion";
    pub const REPORT_ENERGY_SCORE: &str = "report.energy_score";
    pub const REPORT_CONSIDER: &str = "report.consider";
    pub const REPORT_SCORING_GUIDE: &str = "report.scoring_guide";

    pub const CATEGORY_CO2: &str = "category.co2";
    pub const CATEGORY_WATER: &str = "category.water";
    pub const CATEGORY_ENERGY: &str = "category.energy";
    pub const CATEGORY_ACIDIFICATION: &str = "category.acidification";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Ko,
    En,
}

impl Language {
    fn from_code(code: &str) -> Self {
        let c = code.to_lowercase();
        if c.starts_with("ko") {
            Language::Ko
        } else {
            Language::En
        }
    }
}

/// 런타임 언어 번들을 제공한다.
#[derive(Debug, Clone)]
pub struct Translator {
    lang: Language,
    overrides: Option<HashMap<String, String>>,
}

impl Default for Translator {
    fn default() -> Self {
        Self::new("en")
    }
}

impl Translator {
    /// 언어 코드(ko/en)에 따라 번역기를 생성한다. 알 수 없는 코드는 en으로 폴백한다.
    pub fn new(lang_code: &str) -> Self {
        Self {
            lang: Language::from_code(lang_code),
            overrides: None,
        }
    }

    /// 언어 코드 + 언어팩 디렉터리(locales/ 등)를 받아서 번역기를 생성한다.
    /// 디렉터리가 없거나 파일이 없으면 내장 문자열만 사용한다.
    pub fn new_with_pack(lang_code: &str, pack_dir: Option<&str>) -> Self {
        let overrides = pack_dir
            .and_then(|dir| load_overrides(dir, lang_code))
            .or_else(|| load_overrides("locales", lang_code));
        Self {
            lang: Language::from_code(lang_code),
            overrides,
        }
    }

    pub fn language(&self) -> Language {
        self.lang
    }

    /// 키를 조회해 문자열을 반환한다. 언어팩에 없으면 None.
    pub fn lookup(&self, key: &str) -> Option<String> {
        self.overrides.as_ref().and_then(|m| m.get(key).cloned())
    }

    /// 번역을 가져온다. 언어팩 → 내장 문자열 순이며 한국어 번역이 없으면 영어로 폴백한다.
    pub fn t(&self, key: &str) -> &str {
        if let Some(v) = self.overrides.as_ref().and_then(|m| m.get(key)) {
            return v;
        }
        match self.lang {
            Language::Ko => ko(key).unwrap_or_else(|| en(key)),
            Language::En => en(key),
        }
    }

    /// `{name}` 자리표시자를 채운 번역을 돌려준다.
    pub fn tf(&self, key: &str, vars: &[(&str, String)]) -> String {
        fill_template(self.t(key), vars)
    }
}

/// 템플릿의 `{key}`를 값으로 치환한다.
pub fn fill_template(template: &str, vars: &[(&str, String)]) -> String {
    let mut out = template.to_string();
    for (k, v) in vars {
        out = out.replace(&format!("{{{k}}}"), v);
    }
    out
}

/// CLI 플래그/설정/시스템 순으로 언어 코드를 결정한다.
pub fn resolve_language(cli_arg: &str, config_lang: Option<&str>) -> String {
    normalize_lang(cli_arg)
        .or_else(|| config_lang.and_then(normalize_lang))
        .or_else(detect_system_language)
        .unwrap_or_else(|| "en".to_string())
}

fn normalize_lang(code: &str) -> Option<String> {
    let c = code.trim().to_lowercase();
    match c.as_str() {
        "auto" | "" => None,
        other if other.starts_with("ko") => Some("ko".into()),
        other if other.starts_with("en") => Some("en".into()),
        _ => None,
    }
}

fn normalize_locale_string(loc: &str) -> Option<String> {
    let lang = loc
        .split(['.', '_', '-'])
        .next()
        .unwrap_or_default()
        .to_lowercase();
    match lang.as_str() {
        "ko" => Some("ko".into()),
        "en" => Some("en".into()),
        _ => None,
    }
}

/// 시스템 로케일에서 언어를 추정한다.
pub fn detect_system_language() -> Option<String> {
    if let Some(code) = get_locale().as_deref().and_then(normalize_locale_string) {
        return Some(code);
    }
    ["LC_ALL", "LANG"]
        .into_iter()
        .filter_map(|var| std::env::var(var).ok())
        .find_map(|v| normalize_locale_string(&v))
}

/// TOML 기반 언어팩을 로드한다. 중첩 테이블은 점으로 이은 키로 펼친다.
fn load_overrides(dir: &str, lang: &str) -> Option<HashMap<String, String>> {
    let try_load = |code: &str| -> Option<HashMap<String, String>> {
        let path = Path::new(dir).join(format!("{code}.toml"));
        let content = fs::read_to_string(path).ok()?;
        parse_toml_to_map(&content)
    };

    // 1) full code (e.g., en-us)
    if let Some(map) = try_load(lang) {
        return Some(map);
    }
    // 2) base code (e.g., en)
    if let Some((base, _)) = lang.split_once(['-', '_']) {
        if let Some(map) = try_load(base) {
            return Some(map);
        }
    }
    None
}

/// 언어팩 문자열을 평탄화된 키 맵으로 바꾼다. 문자열이 하나도 없으면 None.
pub fn parse_toml_to_map(src: &str) -> Option<HashMap<String, String>> {
    let value: toml::Value = toml::from_str(src).ok()?;
    let table = value.as_table()?;
    let mut map = HashMap::new();

    fn walk(prefix: &str, val: &toml::Value, out: &mut HashMap<String, String>) {
        match val {
            toml::Value::String(s) => {
                out.insert(prefix.to_string(), s.to_string());
            }
            toml::Value::Table(t) => {
                for (k, v) in t {
                    walk(&format!("{prefix}.{k}"), v, out);
                }
            }
            _ => {}
        }
    }

    for (k, v) in table {
        walk(k, v, &mut map);
    }

    if map.is_empty() {
        None
    } else {
        Some(map)
    }
}

fn ko(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        ERROR_PREFIX => "오류",
        APP_EXIT => "프로그램을 종료합니다.",
        MAIN_MENU_TITLE => "\n=== LCA 환경영향 계산기 ===",
        MAIN_MENU_CALCULATE => "1) LCA 계산",
        MAIN_MENU_REFERENCE => "2) 참조 데이터",
        MAIN_MENU_SETTINGS => "3) 설정",
        MAIN_MENU_EXIT => "0) 종료",
        PROMPT_MENU_SELECT => "메뉴 선택: ",
        INVALID_SELECTION_RETRY => "잘못된 입력입니다. 다시 선택하세요.",
        ERROR_INVALID_NUMBER => "숫자를 입력하세요.",
        CALC_HEADING => "\n-- LCA 계산 --",
        CALC_PROMPT_MATERIAL => "재료 선택: ",
        CALC_PROMPT_MATERIAL_AMOUNT => "재료 사용량 [kg]: ",
        CALC_PROMPT_ENERGY => "에너지원 선택: ",
        CALC_PROMPT_ENERGY_AMOUNT => "에너지 사용량 [kWh]: ",
        CALC_AMOUNT_RANGE => "수량은 0 ~ {max} 범위여야 합니다.",
        CALC_PROMPT_PDF_PATH => "PDF 보고서 저장 경로(건너뛰려면 엔터): ",
        CALC_PDF_SAVED => "PDF 보고서를 저장했습니다: {path}",
        REFERENCE_HEADING => "\n-- 참조 데이터 --",
        REFERENCE_MATERIALS => "재료",
        REFERENCE_ENERGY_SOURCES => "에너지원",
        SETTINGS_HEADING => "\n-- 설정 --",
        SETTINGS_CURRENT_LANGUAGE => "현재 언어: {lang}",
        SETTINGS_PROMPT_LANGUAGE => "언어 코드(auto/en/ko, 취소하려면 엔터): ",
        SETTINGS_SAVED => "설정을 저장했습니다.",
        REPORT_TITLE => "LCA 환경영향 보고서",
        REPORT_GENERATED_ON => "생성 일시: {time}",
        REPORT_INPUT_SUMMARY => "입력 요약",
        REPORT_MATERIAL_LINE => "재료: {material} | 사용량: {amount} kg",
        REPORT_ENERGY_LINE => "에너지원: {energy} | 사용량: {amount} kWh",
        REPORT_RESULTS => "영향 결과",
        REPORT_CATEGORY_HEADING => "{category} 영향",
        REPORT_FROM_MATERIAL => "재료 기여: {value} {unit}",
        REPORT_FROM_ENERGY => "에너지 기여: {value} {unit}",
        REPORT_TOTAL => "합계: {value} {unit}",
        REPORT_SCORE => "점수: {score}/10",
        REPORT_OVERALL => "종합 평가",
        REPORT_AVERAGE => "평균 영향 점수: {score}/10",
        REPORT_LEVEL => "영향 수준: {level}",
        REPORT_SUGGESTION => "재생에너지 전환 제안",
        REPORT_ENERGY_SCORE => "현재 에너지 영향 점수: {score}/10",
        REPORT_CONSIDER => "다음 에너지원으로 전환을 고려하세요: {options}",
        REPORT_SCORING_GUIDE => "점수 기준: 1-3 (낮음) | 4-7 (중간) | 8-10 (높음)",
        CATEGORY_CO2 => "CO2",
        CATEGORY_WATER => "용수",
        CATEGORY_ENERGY => "에너지",
        CATEGORY_ACIDIFICATION => "산성화",
        _ => return None,
    })
}

fn en(key: &str) -> &'static str {
    use keys::*;
    match key {
        ERROR_PREFIX => "Error",
        APP_EXIT => "Exiting application.",
        MAIN_MENU_TITLE => "\n=== LCA Impact Calculator ===",
        MAIN_MENU_CALCULATE => "1) Calculate LCA",
        MAIN_MENU_REFERENCE => "2) Reference data",
        MAIN_MENU_SETTINGS => "3) Settings",
        MAIN_MENU_EXIT => "0) Exit",
        PROMPT_MENU_SELECT => "Select menu: ",
        INVALID_SELECTION_RETRY => "Invalid input. Please try again.",
        ERROR_INVALID_NUMBER => "Please enter a number.",
        CALC_HEADING => "\n-- LCA Calculation --",
        CALC_PROMPT_MATERIAL => "Select material: ",
        CALC_PROMPT_MATERIAL_AMOUNT => "Amount of material used [kg]: ",
        CALC_PROMPT_ENERGY => "Select energy source: ",
        CALC_PROMPT_ENERGY_AMOUNT => "Amount of energy used [kWh]: ",
        CALC_AMOUNT_RANGE => "Amount must be within 0 ~ {max}.",
        CALC_PROMPT_PDF_PATH => "Save PDF report to (press Enter to skip): ",
        CALC_PDF_SAVED => "PDF report saved: {path}",
        REFERENCE_HEADING => "\n-- Reference Data --",
        REFERENCE_MATERIALS => "Materials",
        REFERENCE_ENERGY_SOURCES => "Energy sources",
        SETTINGS_HEADING => "\n-- Settings --",
        SETTINGS_CURRENT_LANGUAGE => "Current language: {lang}",
        SETTINGS_PROMPT_LANGUAGE => "Language code (auto/en/ko, Enter to cancel): ",
        SETTINGS_SAVED => "Settings saved.",
        REPORT_TITLE => "LCA Environmental Impact Report",
        REPORT_GENERATED_ON => "Generated on: {time}",
        REPORT_INPUT_SUMMARY => "Input Summary:",
        REPORT_MATERIAL_LINE => "Material: {material} | Amount: {amount} kg",
        REPORT_ENERGY_LINE => "Energy Source: {energy} | Amount: {amount} kWh",
        REPORT_RESULTS => "Impact Results:",
        REPORT_CATEGORY_HEADING => "{category} Impact",
        REPORT_FROM_MATERIAL => "From material: {value} {unit}",
        REPORT_FROM_ENERGY => "From energy: {value} {unit}",
        REPORT_TOTAL => "Total: {value} {unit}",
        REPORT_SCORE => "Score: {score}/10",
        REPORT_OVERALL => "Overall Assessment:",
        REPORT_AVERAGE => "Average Impact Score: {score}/10",
        REPORT_LEVEL => "Impact Level: {level}",
        REPORT_SUGGESTION => "Renewable Energy Suggestions:",
        REPORT_ENERGY_SCORE => "Current energy impact score: {score}/10",
        REPORT_CONSIDER => "Consider switching to: {options}",
        REPORT_SCORING_GUIDE => "Scoring Guide: 1-3 (Low) | 4-7 (Medium) | 8-10 (High)",
        CATEGORY_CO2 => "CO2",
        CATEGORY_WATER => "Water",
        CATEGORY_ENERGY => "Energy",
        CATEGORY_ACIDIFICATION => "Acidification",
        _ => "",
    }
}
