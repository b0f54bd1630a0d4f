/// Whale Tracker terminal dashboard
///
/// Shows the latest whale trades for a selected cryptocurrency, the
/// server's volume statistics and the top market movers.
use std::{
    error::Error,
    fs::OpenOptions,
    io::{self, Stdout},
    path::Path,
    sync::{Arc, Mutex},
    time::{Duration, Instant},
};

use chrono::Utc;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing::{debug, error, info};
use whale_tracker_api::WhaleApiClient;
use whale_tracker_tui::{
    Command, DashboardConfig, DashboardController, DashboardView, command_for_key,
    render_dashboard,
};

type Tui = Terminal<CrosstermBackend<Stdout>>;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let config = DashboardConfig::from_env()?;
    init_logging(&config.log_file)?;

    let client = WhaleApiClient::new(&config.api)?;
    info!(
        "Whale tracker starting against {} (timeout {:?})",
        client.base_url(),
        config.api.timeout
    );

    // Setup panic hook to restore terminal on crash
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, &config, Arc::new(client)).await;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    match &result {
        Ok(()) => info!("Whale tracker exited"),
        Err(e) => error!("Whale tracker exited with error: {}", e),
    }
    result
}

async fn run(
    terminal: &mut Tui,
    config: &DashboardConfig,
    client: Arc<WhaleApiClient>,
) -> Result<(), Box<dyn Error>> {
    let mut controller = DashboardController::new(client.clone(), config.controller_settings());
    controller.start();

    let mut theme = config.theme;
    let mut dirty = true;
    let mut last_render = Instant::now();
    let render_interval = Duration::from_secs(1);

    loop {
        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    if let Some(command) = command_for_key(key.code) {
                        match command {
                            Command::Quit => break,
                            Command::SelectNext => {
                                controller.select_next();
                            }
                            Command::SelectPrevious => {
                                controller.select_previous();
                            }
                            Command::SelectIndex(index) => {
                                if let Err(e) = controller.select_index(index) {
                                    debug!("Ignoring key: {}", e);
                                }
                            }
                            Command::Refresh => {
                                controller.refresh();
                            }
                            Command::CycleTheme => {
                                theme = theme.next();
                                info!("Switched theme to {}", theme);
                            }
                        }
                        dirty = true;
                    }
                }
            }
        }

        dirty |= controller.drain();

        // Redraw on change, and once a second so relative ages stay current
        if dirty || last_render.elapsed() >= render_interval {
            let state = controller.state();
            let view = DashboardView::build(state, Utc::now()).with_quick_start(
                client
                    .whale_trades_url(state.selected.id, config.trade_limit)
                    .as_str(),
                client.docs_url().as_str(),
            );
            let palette = theme.theme();
            terminal.draw(|f| render_dashboard(f, &view, &palette))?;
            dirty = false;
            last_render = Instant::now();
        }
    }

    Ok(())
}

/// Log to a file; stdout is owned by the alternate screen
fn init_logging(path: &Path) -> Result<(), Box<dyn Error>> {
    let file = OpenOptions::new().create(true).append(true).open(path)?;

    tracing_subscriber::fmt()
        // Filter messages based on the INFO level
        .with_env_filter(
            tracing_subscriber::filter::EnvFilter::builder()
                .with_default_directive(tracing_subscriber::filter::LevelFilter::INFO.into())
                .from_env_lossy(),
        )
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .compact()
        .init();

    Ok(())
}
