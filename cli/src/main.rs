use clap::{Parser, Subcommand};
use client::board::QuoteBoard;
use client::net::api::{ApiError, HttpQuoteApi};

#[cfg(test)]
#[path = "main_test.rs"]
mod main_test;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error("nothing to submit; quote text is blank")]
    BlankQuote,
    #[error("health check failed: {0}")]
    Unhealthy(String),
}

#[derive(Parser, Debug)]
#[command(name = "quoteboard", about = "Wiz Khalubernetes quote board CLI")]
struct Cli {
    #[arg(long, env = "QUOTEBOARD_BASE_URL", default_value = "http://127.0.0.1:3000")]
    base_url: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
enum Command {
    /// Load the board and print it.
    Show,
    /// Post a quote, then print the board.
    Submit { text: String },
    /// Delete a quote by id, then print the board.
    Delete { id: i64 },
    /// Check `/healthz`.
    Ping,
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let cli = Cli::parse();
    let api = HttpQuoteApi::new(&cli.base_url)?;
    tracing::debug!(base_url = api.base_url(), command = ?cli.command, "running");

    match cli.command {
        Command::Ping => run_ping(&api).await,
        command => {
            let page = run_board(api, command).await?;
            print!("{page}");
            Ok(())
        }
    }
}

async fn run_ping(api: &HttpQuoteApi) -> Result<(), CliError> {
    let health = api.health().await?;
    if health.status != "UP" {
        return Err(CliError::Unhealthy(health.status));
    }
    println!("ok");
    Ok(())
}

/// Load the board, apply one action, and return the rendered page.
async fn run_board<A: client::net::api::QuoteApi>(api: A, command: Command) -> Result<String, CliError> {
    let mut board = QuoteBoard::new(api);
    board.load().await;

    match command {
        Command::Show | Command::Ping => {}
        Command::Submit { text } => {
            board.set_input(text);
            if !board.state().can_submit() {
                return Err(CliError::BlankQuote);
            }
            board.submit().await;
        }
        Command::Delete { id } => board.delete(id).await,
    }

    Ok(board.render())
}
