use anyhow::Context;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use karir::{
    api::GeminiClient,
    app::{App, AppScreen},
    config::{get_config, initialize_config},
    key_handlers,
    logging,
    store::ChatStore,
    ui,
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::{io, sync::Arc, time::Duration};
use tokio::sync::Mutex;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    initialize_config().context("could not initialize configuration")?;
    let _logger = logging::init().context("could not start logging")?;

    let config = get_config();
    if config.api_key.is_empty() {
        anyhow::bail!(
            "GEMINI_API_KEY is not set; export it or add it to ~/.config/karir/config.json"
        );
    }

    let store = ChatStore::new(&config.chats_path);
    let client = GeminiClient::from_config();
    let app = App::new(store, client).context("could not load chat history")?;
    let app = Arc::new(Mutex::new(app));

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, app).await;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: Arc<Mutex<App>>,
) -> anyhow::Result<()> {
    loop {
        {
            let mut guard = app.lock().await;
            guard.tick();
            if guard.screen == AppScreen::Quit {
                return Ok(());
            }
            terminal.draw(|f| ui::draw(f, &mut guard))?;
        }

        if event::poll(Duration::from_millis(33))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    let mut guard = app.lock().await;
                    key_handlers::handle_key(key, &mut guard, &app);
                }
            }
        }
    }
}
