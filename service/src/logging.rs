use crate::config::Config;
use log::LevelFilter;
use simplelog::{self, ConfigBuilder};

/// HTTP stack modules that are silenced unless running at Trace level.
/// Every open event stream makes hyper and tower log per chunk, which drowns
/// out the service's own output.
const FILTERED_MODULES: &[&str] = &["hyper", "h2", "tower", "tower_http", "axum"];

pub struct Logger {}

impl Logger {
    /// Initializes the global terminal logger from the configured level filter.
    pub fn init_logger(config: &Config) {
        let log_config = Self::build_log_config(config.log_level_filter);

        if let Err(e) = simplelog::TermLogger::init(
            Self::convert_level_filter(config.log_level_filter),
            log_config,
            simplelog::TerminalMode::Mixed,
            simplelog::ColorChoice::Auto,
        ) {
            eprintln!("Failed to start simplelog: {e}");
        }
    }

    fn convert_level_filter(level: LevelFilter) -> simplelog::LevelFilter {
        match level {
            LevelFilter::Off => simplelog::LevelFilter::Off,
            LevelFilter::Error => simplelog::LevelFilter::Error,
            LevelFilter::Warn => simplelog::LevelFilter::Warn,
            LevelFilter::Info => simplelog::LevelFilter::Info,
            LevelFilter::Debug => simplelog::LevelFilter::Debug,
            LevelFilter::Trace => simplelog::LevelFilter::Trace,
        }
    }

    /// Dependency output is only wanted when tracing.
    fn filters_http_stack(level: LevelFilter) -> bool {
        level != LevelFilter::Trace
    }

    fn build_log_config(level: LevelFilter) -> simplelog::Config {
        let mut builder = ConfigBuilder::new();
        builder.set_time_format_rfc3339();

        if Self::filters_http_stack(level) {
            for module in FILTERED_MODULES {
                builder.add_filter_ignore_str(module);
            }
        }

        builder.build()
    }
}
