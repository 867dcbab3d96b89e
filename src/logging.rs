use tracing_subscriber::EnvFilter;

/// ログ出力を初期化する
///
/// `RUST_LOG` があればそれを使い、なければ `--verbose` で debug、通常は warn。
pub fn init(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
