use ink_gallery::app::App;
use ink_gallery::config::{self, Config};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    // Settings errors are reported once logging is up
    let (mut config, config_error) = match config::load() {
        Ok(config) => (config, None),
        Err(e) => (Config::default(), Some(e)),
    };

    let catalog: Result<Option<PathBuf>, _> = args.opt_value_from_str("--catalog");
    let data_dir: Result<Option<PathBuf>, _> = args.opt_value_from_str("--data-dir");

    init_logging(&config.log_level);

    if let Some(e) = config_error {
        tracing::warn!(error = %e, "⚠️  invalid settings file, using defaults");
    }
    match catalog {
        Ok(Some(path)) => config.catalog_path = Some(path),
        Ok(None) => {}
        Err(e) => tracing::warn!(error = %e, "ignoring --catalog"),
    }
    match data_dir {
        Ok(Some(path)) => config.data_dir = Some(path),
        Ok(None) => {}
        Err(e) => tracing::warn!(error = %e, "ignoring --data-dir"),
    }

    iced::application("InkAI Studio", App::update, App::view)
        .subscription(App::subscription)
        .theme(App::theme)
        .window_size((1280.0, 860.0))
        .centered()
        .run_with(move || App::new(config))
}

/// `RUST_LOG` wins over the configured level
fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new(config::DEFAULT_LOG_LEVEL));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}
