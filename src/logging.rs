use tracing_subscriber::EnvFilter;

/// stderr로 출력하는 tracing 구독자를 설치한다. `RUST_LOG`가 있으면 그 값을 우선한다.
///
/// 이미 설치돼 있으면 조용히 넘어간다.
pub fn init(default_directive: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
