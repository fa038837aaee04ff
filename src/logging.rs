use log::LevelFilter;

/// Initialize logging for the command line.
///
/// `verbose` lowers the default level to `Debug`; an explicit `RUST_LOG`
/// always takes precedence.
pub fn init_logger(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };

    let mut builder = env_logger::Builder::new();
    builder
        .filter(None, level)
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false);

    if let Ok(spec) = std::env::var("RUST_LOG") {
        builder.parse_filters(&spec);
    }

    // a second call (e.g. from tests) keeps the first logger
    let _ = builder.try_init();
    log::debug!("Logger initialized at {level:?} level");
}
