use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use lca_impact_calculator::{
    app::{self, AppError},
    config,
    i18n::keys,
    lca::{CalculationRequest, ImpactCalculator, ReferenceData},
    logging, report, ui_cli,
};
use tracing::info;

/// 화학 공정의 단순 LCA 영향 점수 계산기 (CLI).
#[derive(Debug, Parser)]
#[command(name = "lca_impact_calculator_cli", version, about)]
struct Cli {
    /// 설정 파일 경로
    #[arg(long, default_value = config::CONFIG_FILE)]
    config: PathBuf,
    /// 언어 코드 (auto/en/ko)
    #[arg(long, short = 'L')]
    lang: Option<String>,
    /// 재료 키 (예: ammonia)
    #[arg(long, requires_all = ["material_amount", "energy", "energy_amount"])]
    material: Option<String>,
    /// 재료 사용량 [kg]
    #[arg(long, requires_all = ["material", "energy", "energy_amount"])]
    material_amount: Option<f64>,
    /// 에너지원 키 (예: natural_gas)
    #[arg(long, requires_all = ["material", "material_amount", "energy_amount"])]
    energy: Option<String>,
    /// 에너지 사용량 [kWh]
    #[arg(long, requires_all = ["material", "material_amount", "energy"])]
    energy_amount: Option<f64>,
    /// PDF 보고서를 저장할 경로 (단발 계산에서만)
    #[arg(long, requires = "material")]
    pdf: Option<PathBuf>,
    /// 참조 데이터 목록만 출력
    #[arg(long)]
    list: bool,
}

/// 프로그램의 엔트리 포인트. 설정을 로드한 뒤 CLI 애플리케이션을 실행한다.
fn main() -> ExitCode {
    logging::init("warn");
    let cli = Cli::parse();
    match try_run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err((prefix, err)) => {
            eprintln!("{prefix}: {err}");
            ExitCode::FAILURE
        }
    }
}

fn try_run(cli: Cli) -> Result<(), (String, AppError)> {
    let mut cfg = config::load_or_create(&cli.config)
        .map_err(|e| ("Error".to_string(), AppError::from(e)))?;
    let tr = app::translator_for(&cfg, cli.lang.as_deref());
    let prefix = tr.t(keys::ERROR_PREFIX).to_string();
    let fail = |e: AppError| (prefix.clone(), e);

    let data = ReferenceData::load_or_builtin(cfg.reference_data_path.as_deref())
        .map_err(|e| fail(e.into()))?;

    if cli.list {
        println!("{}", ui_cli::reference_listing(&tr, &data));
        return Ok(());
    }

    match (cli.material, cli.material_amount, cli.energy, cli.energy_amount) {
        (Some(material), Some(material_amount), Some(energy), Some(energy_amount)) => {
            let request = CalculationRequest::new(material, material_amount, energy, energy_amount);
            let result = ImpactCalculator::new(&data)
                .compute(&request)
                .map_err(|e| fail(e.into()))?;
            println!("{}", report::render(&result, &tr).to_text());
            if let Some(path) = cli.pdf {
                let doc = report::render_document_now(&result).map_err(|e| fail(e.into()))?;
                doc.write_to(&path).map_err(|e| fail(e.into()))?;
                info!(path = %path.display(), "pdf report written");
                println!(
                    "{}",
                    tr.tf(keys::CALC_PDF_SAVED, &[("path", path.display().to_string())])
                );
            }
            Ok(())
        }
        _ => app::run(&mut cfg, tr.clone(), &data).map_err(fail),
    }
}
