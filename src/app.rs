use thiserror::Error;

use crate::config::{Config, ConfigError};
use crate::i18n::{self, Translator};
use crate::lca::{LcaError, ReferenceData, ReferenceDataError};
use crate::report::ExportError;
use crate::ui_cli;
use crate::ui_cli::MenuChoice;

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum AppError {
    /// 파일 입출력 오류
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// 설정 저장/로드 오류
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// 참조 데이터 로드 오류
    #[error(transparent)]
    Reference(#[from] ReferenceDataError),
    /// 계산 입력 오류
    #[error(transparent)]
    Lca(#[from] LcaError),
    /// 보고서 내보내기 오류
    #[error(transparent)]
    Export(#[from] ExportError),
}

/// 설정과 CLI 플래그로 번역기를 만든다.
pub fn translator_for(config: &Config, cli_lang: Option<&str>) -> Translator {
    let lang = i18n::resolve_language(cli_lang.unwrap_or("auto"), Some(config.language.as_str()));
    Translator::new_with_pack(&lang, config.language_pack_dir.as_deref())
}

/// CLI 애플리케이션의 메인 루프를 실행한다.
pub fn run(config: &mut Config, tr: Translator, data: &ReferenceData) -> Result<(), AppError> {
    let mut tr = tr;
    loop {
        match ui_cli::main_menu(&tr)? {
            MenuChoice::Calculate => ui_cli::handle_calculate(&tr, config, data)?,
            MenuChoice::ReferenceData => ui_cli::handle_reference_data(&tr, data),
            MenuChoice::Settings => {
                if ui_cli::handle_settings(&tr, config)? {
                    config.save()?;
                    tr = translator_for(config, None);
                    println!("{}", tr.t(i18n::keys::SETTINGS_SAVED));
                }
            }
            MenuChoice::Exit => {
                println!("{}", tr.t(i18n::keys::APP_EXIT));
                break;
            }
        }
    }
    Ok(())
}
