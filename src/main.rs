mod api;
mod app;
mod catalog;
mod cli;
mod event;
mod format;
mod help;
mod keys;
mod layout;
mod logging;
mod proxy;
mod settings;
mod theme;
mod time;
mod tui;
mod views;

#[cfg(test)]
mod test_utils;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use ratatui::Frame;
use tracing::{info, warn};

use api::{DEFAULT_PROXY_URL, FilterState, TrendingClient};
use app::App;
use cli::{Cli, Commands, ServeArgs};
use event::{Event, EventHandler};
use proxy::ProxyConfig;
use settings::Settings;
use theme::{
    ResolvedTheme, ThemeVariant, all_themes, by_name, default_for_variant, detect_terminal_theme,
};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Serve(args)) => run_server(args).await,
        Some(Commands::Themes) => {
            for theme in all_themes() {
                println!("{:<16} {:?}", theme.name, theme.variant);
            }
            Ok(())
        }
        None => run_tui(cli).await,
    }
}

async fn run_server(args: ServeArgs) -> Result<()> {
    logging::init_server()?;
    let config = ProxyConfig::new(args.api_key, args.upstream, args.bind)?;
    proxy::serve(config).await
}

fn resolve_theme(cli: &Cli, settings: &Settings) -> Result<ResolvedTheme> {
    // Priority: CLI --theme > settings file > default for the terminal background
    if let Some(name) = cli.theme.as_ref().or(settings.theme.as_ref()) {
        let theme = by_name(name).with_context(|| {
            format!("Theme '{name}' not found. Use 'trending themes' to see available themes.")
        })?;
        return Ok(theme.into());
    }

    let variant = if cli.dark {
        ThemeVariant::Dark
    } else if cli.light {
        ThemeVariant::Light
    } else {
        detect_terminal_theme()
    };
    Ok(default_for_variant(variant))
}

/// Priority for each filter field and the proxy URL: CLI flag > settings file > default.
fn resolve_filter(cli: &Cli, settings: &Settings) -> FilterState {
    let region = cli
        .region
        .clone()
        .or_else(|| settings.region.clone())
        .unwrap_or_default()
        .to_uppercase();
    let category = cli.category.clone().or_else(|| settings.category.clone());
    FilterState::new(region, category)
}

fn resolve_proxy_url(cli: &Cli, settings: &Settings) -> String {
    cli.proxy
        .clone()
        .or_else(|| settings.proxy_url.clone())
        .unwrap_or_else(|| DEFAULT_PROXY_URL.to_string())
}

async fn run_tui(cli: Cli) -> Result<()> {
    let config_dir: Option<PathBuf> = settings::config_dir(cli.config_dir.as_ref());
    let settings = config_dir
        .as_ref()
        .map(|dir| {
            let path = settings::settings_path(dir);
            Settings::load(&path).unwrap_or_else(|e| {
                eprintln!("Warning: {}", e);
                Settings::default()
            })
        })
        .unwrap_or_default();

    let log_dir = config_dir.as_deref().map(settings::log_dir);
    let _log_guard = match &log_dir {
        Some(dir) => Some(logging::init_tui(dir, cli.verbose)?),
        None => None,
    };

    let resolved_theme = resolve_theme(&cli, &settings)?;
    let filter = resolve_filter(&cli, &settings);
    let client = TrendingClient::new(resolve_proxy_url(&cli, &settings))?;
    info!(proxy = client.base_url(), ?filter, "starting trending view");

    let mut terminal = tui::init()?;
    let mut app = App::new(resolved_theme, client, filter, config_dir);
    let mut events = EventHandler::new(100);

    app.load_videos();

    let result = event_loop(&mut terminal, &mut app, &mut events).await;
    tui::restore()?;

    if let Err(e) = app.persist_filters() {
        warn!(error = %e, "failed to save filters");
        eprintln!("Warning: {}", e);
    }
    if cli.verbose
        && let Some(dir) = &log_dir
    {
        eprintln!("Logs written to {}", dir.display());
    }
    result
}

async fn event_loop(
    terminal: &mut tui::Tui,
    app: &mut App,
    events: &mut EventHandler,
) -> Result<()> {
    loop {
        terminal.draw(|frame| render(app, frame))?;

        // Poll async results (non-blocking)
        while let Ok(result) = app.result_rx.try_recv() {
            app.handle_async_result(result);
        }

        if app.should_quit {
            return Ok(());
        }

        match events.next().await? {
            Event::Key(key) => {
                if let Some(msg) = keys::handle_key(key, app) {
                    app.update(msg);
                }
            }
            Event::Tick | Event::Resize => {}
        }
    }
}

fn render(app: &App, frame: &mut Frame) {
    use ratatui::layout::{Constraint, Layout};

    let area = frame.area();

    let (main_area, debug_area) = if app.debug.visible {
        let chunks = Layout::vertical([
            Constraint::Min(0),     // Main content
            Constraint::Length(10), // Debug pane
        ])
        .split(area);
        (chunks[0], Some(chunks[1]))
    } else {
        (area, None)
    };

    views::trending::render(frame, app, main_area);

    if let Some(debug_area) = debug_area {
        views::debug::render(frame, app, debug_area);
    }

    views::help_overlay::render(frame, app, area);
    views::picker::render(frame, app, area);
}
