//! 핵심 계산 로직을 라이브러리로 분리하여 CLI와 GUI가 같은 계산/보고서 코드를 쓴다.

pub mod app;
pub mod config;
pub mod i18n;
pub mod lca;
pub mod logging;
pub mod report;
pub mod ui_cli;
