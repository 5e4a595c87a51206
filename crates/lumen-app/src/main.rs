mod app_state;
mod cli;

use std::path::PathBuf;

use lumen_common::IsolationMode;
use lumen_config::LumenConfig;
use tracing_subscriber::filter::Directive;
use tracing_subscriber::EnvFilter;
use winit::event_loop::EventLoop;

const DEFAULT_LOG_DIRECTIVE: &str = "lumen=info";

fn load_config(path: Option<&PathBuf>) -> lumen_common::Result<LumenConfig> {
    let config = match path {
        Some(p) => lumen_config::load_config_from(p)?,
        None => lumen_config::load_config()?,
    };
    Ok(config)
}

fn init_tracing(directive: &str) {
    let directive: Result<Directive, _> = directive
        .parse()
        .or_else(|_| DEFAULT_LOG_DIRECTIVE.parse());
    let filter = match directive {
        Ok(d) => EnvFilter::from_default_env().add_directive(d),
        Err(_) => EnvFilter::from_default_env(),
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn main() {
    let args = cli::parse();

    // Config is read first so `[logging] level` can pick the filter.
    let loaded = load_config(args.config.as_ref());
    let file_directive = loaded.as_ref().ok().map(|c| c.logging.level.directive());
    let log_directive = args
        .log_level
        .as_deref()
        .or(file_directive)
        .unwrap_or(DEFAULT_LOG_DIRECTIVE);
    init_tracing(log_directive);

    tracing::info!("Lumen v{} starting...", env!("CARGO_PKG_VERSION"));

    // The loader's own logs ran before the subscriber existed.
    match lumen_config::toml_loader::config_source(args.config.as_deref()) {
        Some(path) if loaded.is_ok() => tracing::info!("Loaded config from {}", path.display()),
        Some(path) => tracing::info!("Config file: {}", path.display()),
        None => tracing::info!("No config file found, using defaults"),
    }
    let config = loaded.unwrap_or_else(|e| {
        tracing::warn!("Config load failed, using defaults: {e}");
        LumenConfig::default()
    });

    if config.bridge.isolation == IsolationMode::Shared {
        tracing::warn!(
            "bridge.isolation = \"shared\": the page also gets a raw IPC sender; \
             use \"isolated\" unless a legacy page needs it"
        );
    }

    let assets_dir = args
        .assets
        .clone()
        .unwrap_or_else(|| PathBuf::from(&config.page.assets_dir));

    #[cfg(target_os = "linux")]
    if let Err(e) = gtk::init() {
        tracing::warn!("GTK init failed: {e}");
    }

    let registry = lumen_platform::KeybindRegistry::from_config(&config.keybinds);
    tracing::info!("Keybind registry loaded ({} bindings)", registry.len());

    let event_loop = match EventLoop::new() {
        Ok(el) => el,
        Err(e) => {
            tracing::error!("Failed to create event loop: {e}");
            std::process::exit(1);
        }
    };
    let mut app = app_state::ShellApp::new(config, registry, assets_dir);

    tracing::info!("Entering event loop");
    if let Err(e) = event_loop.run_app(&mut app) {
        tracing::error!("Event loop error: {e}");
    }
    tracing::info!("Shutdown complete");
}
