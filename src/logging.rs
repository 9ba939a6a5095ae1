//! Logger setup for host applications.

/// Installs `env_logger` as the global logger.
///
/// `filter` uses the `env_logger` syntax (e.g. `"prism_ngin=debug"`); without
/// it `RUST_LOG` is honoured and the level defaults to `info`. Calling this
/// after a logger is installed only prints a warning.
pub fn init_logging(filter: Option<&str>) {
    let mut builder = env_logger::Builder::new();
    match filter {
        Some(filter) => {
            builder.parse_filters(filter);
        }
        None => match std::env::var("RUST_LOG") {
            Ok(filter) => {
                builder.parse_filters(&filter);
            }
            Err(_) => {
                builder.filter_level(log::LevelFilter::Info);
            }
        },
    }
    if let Err(e) = builder.try_init() {
        println!("Warning: Could not initialize logger: {}", e);
    }
}
