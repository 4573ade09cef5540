mod app;
mod args;
mod config;
mod error;
mod event;
mod github;
mod identity;
mod logging;
mod showcase;
#[cfg(test)]
mod test_utils;
mod ui;

use app::App;
use args::{Cli, Command};
use clap::Parser;
use config::Config;
use crossterm::{
    event::{Event, EventStream, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use error::{Result, ShowcaseError};
use event::AppEvent;
use futures::StreamExt;
use github::client::GitHubClient;
use identity::credential::GoogleCredential;
use identity::http::{GoogleIdentity, HttpTokenSink};
use identity::IdentitySession;
use showcase::page::LOAD_ERROR;
use showcase::{site, Showcase};
use tokio::sync::mpsc;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    let config = Config::load(&cli.overrides());

    let outcome = match cli.command {
        Command::Render { .. } => {
            logging::init(&config.log_level);
            render(&config).await
        }
        Command::Browse => match start_file_logging(&config) {
            Ok(()) => browse(&config).await,
            Err(e) => Err(e),
        },
        Command::Identity {
            ref id_token,
            sign_out,
            ..
        } => {
            logging::init(&config.log_level);
            identity(&config, id_token, sign_out).await
        }
        Command::Config => print_config(&config),
    };

    if let Err(e) = outcome {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn start_file_logging(config: &Config) -> Result<()> {
    let path = config::config_dir().join("showcase").join("showcase.log");
    logging::init_file(&config.log_level, &path)
}

async fn render(config: &Config) -> Result<()> {
    let client = GitHubClient::new(config)?;
    match Showcase::load(&client).await {
        Ok(loaded) => {
            let pages = site::write_site(&config.output_dir, &loaded)?;
            println!(
                "wrote {} pages for @{} to {}",
                pages.len(),
                client.username(),
                config.output_dir.display()
            );
            Ok(())
        }
        Err(e) => {
            tracing::error!(error = %e, "load failed");
            let path = site::write_error_page(&config.output_dir, LOAD_ERROR)?;
            tracing::info!(path = %path.display(), "wrote error page");
            Err(e)
        }
    }
}

fn spawn_load(client: GitHubClient, tx: mpsc::UnboundedSender<AppEvent>) {
    tokio::spawn(async move {
        let result = Showcase::load(&client).await.map_err(|e| e.to_string());
        let rate_limit = client.rate_limit().await;
        let _ = tx.send(AppEvent::Loaded { result, rate_limit });
    });
}

async fn browse(config: &Config) -> Result<()> {
    let client = GitHubClient::new(config)?;
    let mut app = App::new(client.username());

    // Restore the terminal before the default hook prints the panic.
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(std::io::stdout(), LeaveAlternateScreen);
        default_hook(info);
    }));

    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = ratatui::backend::CrosstermBackend::new(stdout);
    let mut terminal = ratatui::Terminal::new(backend)?;

    let (tx, mut rx) = mpsc::unbounded_channel::<AppEvent>();
    spawn_load(client.clone(), tx.clone());

    let input_tx = tx.clone();
    tokio::spawn(async move {
        let mut reader = EventStream::new();
        while let Some(Ok(event)) = reader.next().await {
            let app_event = match event {
                Event::Key(key) if key.kind == KeyEventKind::Press => Some(AppEvent::Key(key)),
                Event::Resize(_, _) => Some(AppEvent::Resize),
                _ => None,
            };
            if let Some(e) = app_event {
                if input_tx.send(e).is_err() {
                    break;
                }
            }
        }
    });

    loop {
        terminal.draw(|f| app.render(f))?;

        let first = match rx.recv().await {
            Some(e) => e,
            None => break,
        };
        app.handle_event(first);
        while let Ok(pending) = rx.try_recv() {
            app.handle_event(pending);
        }

        if app.take_reload() {
            tracing::info!("reloading");
            spawn_load(client.clone(), tx.clone());
        }
        if app.should_quit {
            break;
        }
    }

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    Ok(())
}

async fn identity(config: &Config, id_token: &str, sign_out: bool) -> Result<()> {
    let credential = GoogleCredential::parse(id_token)?;
    let sink = HttpTokenSink::new(config.token_endpoint.as_deref())?;

    let mut session = IdentitySession::default();
    session.sign_in(&credential);

    let body = session.submit_token(&sink).await?;
    println!("{body}");

    if sign_out {
        let provider = GoogleIdentity::new(&config.revoke_endpoint)?;
        session.sign_out(&provider).await?;
        println!("signed out");
    }
    Ok(())
}

fn print_config(config: &Config) -> Result<()> {
    let toml = config
        .to_redacted_toml()
        .map_err(|e| ShowcaseError::Config(e.to_string()))?;
    print!("{toml}");
    Ok(())
}
