use std::io::stdout;
use std::sync::Arc;

use clap::Parser;
use color_eyre::eyre::Result;
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use moskva::application::{IconResolver, SlideDeck};
use moskva::infrastructure::config::LoadedConfig;
use moskva::infrastructure::{
    AppConfig, CliArgs, ConfigOrigin, GlyphCatalog, StorageManager, moscow_catalog,
};
use moskva::presentation::App;
use moskva::presentation::commands::CommandRegistry;
use moskva::presentation::theme::Theme;
use moskva::presentation::ui::DeckScreenState;

fn init_logging(config: &AppConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.to_string()));

    if let Some(log_path) = config.effective_log_path() {
        if let Some(parent) = log_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)?;

        let file_layer = fmt::layer()
            .with_writer(file)
            .with_ansi(false)
            .with_target(true)
            .with_thread_ids(false);

        tracing_subscriber::registry()
            .with(filter)
            .with(file_layer)
            .init();

        info!(path = %log_path.display(), "Logging initialized");
    } else {
        tracing_subscriber::registry().with(filter).init();
    }

    Ok(())
}

fn load_config() -> Result<(AppConfig, ConfigOrigin)> {
    let args = CliArgs::parse();
    let storage = StorageManager::new()?;
    let LoadedConfig { mut config, origin } = storage.load_config(args.config.as_deref())?;
    config.merge_with_args(args);
    Ok((config, origin))
}

fn create_app(config: &AppConfig) -> Result<App> {
    let catalog = Arc::new(moscow_catalog()?);
    let icons = IconResolver::new(Arc::new(GlyphCatalog::new()));
    let theme = Theme::from_config(&config.theme);

    let screen = DeckScreenState::new(SlideDeck::new(catalog), icons, theme)
        .with_animations(config.ui.enable_animations)
        .with_key_hints(config.ui.show_key_hints);
    let registry = CommandRegistry::with_overrides(&config.keybindings);

    Ok(App::new(screen, registry).with_mouse(config.mouse))
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let (config, origin) = load_config()?;
    init_logging(&config)?;
    origin.report();

    info!(version = moskva::VERSION, "Starting {}", moskva::NAME);

    let app = create_app(&config)?;

    let mut terminal = ratatui::init();
    if config.mouse {
        execute!(stdout(), EnableMouseCapture)?;
    }

    let result = app.run(&mut terminal).await;

    if config.mouse {
        execute!(stdout(), DisableMouseCapture)?;
    }
    ratatui::restore();

    result
}
