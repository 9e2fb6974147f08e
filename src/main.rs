use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{Event, EventStream, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::{io, sync::Arc, time::Duration};
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use spotify_kiosk::app::cli::Args;
use spotify_kiosk::app::config::{AppConfig, UserConfig, AUTH_ENV_VAR};
use spotify_kiosk::app::events::AppEvent;
use spotify_kiosk::app::surface::ChannelSurface;
use spotify_kiosk::app::{App, ArtworkState};
use spotify_kiosk::artwork::ArtworkFetcher;
use spotify_kiosk::controller::{ControllerConfig, NowPlayingController};
use spotify_kiosk::{logging, theme, ui, HttpApi};

type Tui = Terminal<CrosstermBackend<io::Stdout>>;

/// Everything that only exists once the account is linked
struct Linked {
    controller: Arc<NowPlayingController>,
    artwork: Arc<ArtworkFetcher>,
}

#[tokio::main]
async fn main() -> Result<()> {
    human_panic::setup_panic!();
    let args = Args::parse();

    if args.generate_config {
        print!("{}", AppConfig::default_toml()?);
        return Ok(());
    }

    let _log_guard = match logging::init() {
        Ok(guard) => Some(guard),
        Err(e) => {
            eprintln!("Logging disabled: {}", e);
            None
        }
    };

    let config_path = args.config.clone().unwrap_or_else(AppConfig::get_config_path);
    let mut config = AppConfig::load_from(&config_path)?;
    if let Some(base_url) = args.base_url {
        config.base_url = base_url;
    }
    if let Some(ms) = args.poll_interval_ms {
        config.poll_interval_ms = ms;
    }

    let env_authorized = std::env::var(AUTH_ENV_VAR).ok();
    let authorized =
        config.resolve_authorized(args.authorized.as_deref(), env_authorized.as_deref());
    info!(base_url = %config.base_url, authorized, "Starting");

    let theme = theme::load_theme(&AppConfig::get_theme_path());
    let mut app = App::new(authorized, config.keys.clone(), config.volume_delta(), theme);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;

    let result = run(&mut terminal, &mut app, &config).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(ref e) = result {
        warn!(error = %e, "Exited with error");
    }
    info!("Bye");
    result
}

fn start_linked(config: &UserConfig, tx: &mpsc::Sender<AppEvent>) -> Result<Linked> {
    // One HTTP client for API calls and artwork
    let client = HttpApi::build_client(config.request_timeout())?;
    let api = Arc::new(HttpApi::new(
        client.clone(),
        &config.base_url,
        config.endpoints.clone(),
    ));
    let surface = Arc::new(ChannelSurface::new(tx.clone()));
    let controller = Arc::new(NowPlayingController::new(
        api,
        surface,
        ControllerConfig {
            poll_interval: config.poll_interval(),
            strict_ordering: config.strict_ordering,
        },
    ));

    tokio::spawn(Arc::clone(&controller).run_polling());

    // Redraw tick so the progress bar moves between polls
    let tx_tick = tx.clone();
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(Duration::from_millis(250));
        loop {
            interval.tick().await;
            if tx_tick.send(AppEvent::Tick).await.is_err() {
                break;
            }
        }
    });

    Ok(Linked {
        controller,
        artwork: Arc::new(ArtworkFetcher::new(client)),
    })
}

async fn run(terminal: &mut Tui, app: &mut App, config: &UserConfig) -> Result<()> {
    let (tx, mut rx) = mpsc::channel(100);

    // Input Event Task
    let tx_input = tx.clone();
    tokio::spawn(async move {
        let mut reader = EventStream::new();
        while let Some(Ok(event)) = reader.next().await {
            if tx_input.send(AppEvent::Input(event)).await.is_err() {
                break;
            }
        }
    });

    let linked = if app.authorized {
        Some(start_linked(config, &tx)?)
    } else {
        info!("Account not linked, staying idle");
        None
    };

    while app.is_running {
        terminal.draw(|f| ui::ui(f, app))?;

        let Some(event) = rx.recv().await else {
            break;
        };

        match event {
            AppEvent::Input(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                if let (Some(command), Some(linked)) = (app.handle_key(key), &linked) {
                    debug!(?command, "Key press");
                    linked.controller.spawn_command(command);
                }
            }
            AppEvent::Input(_) => {}
            AppEvent::Render(slots) => {
                if let (Some(url), Some(linked)) = (app.apply_render(slots), &linked) {
                    let fetcher = Arc::clone(&linked.artwork);
                    let tx_art = tx.clone();
                    tokio::spawn(async move {
                        let state = match fetcher.fetch_image(&url).await {
                            Ok(img) => ArtworkState::Loaded(img),
                            Err(e) => {
                                warn!(%url, error = %e, "Artwork download failed");
                                ArtworkState::Failed
                            }
                        };
                        let _ = tx_art.send(AppEvent::ArtworkUpdate(url, state)).await;
                    });
                }
            }
            AppEvent::Helper(message) => app.apply_helper(message),
            AppEvent::ArtworkUpdate(url, state) => app.apply_artwork(&url, state),
            AppEvent::Tick => {}
        }
    }

    Ok(())
}
