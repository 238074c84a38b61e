use std::sync::Mutex;

use client::net::api::{ApiError, QuoteApi};
use client::view::{NO_QUOTES, NODE_INFO_UNAVAILABLE};
use wire::{DbStatus, NewQuote, NodeInfo, Quote, QuoteReply};

use super::*;

/// Backend holding an in-memory list; info endpoints are down.
#[derive(Default)]
struct ListOnlyApi {
    quotes: Mutex<Vec<Quote>>,
}

impl ListOnlyApi {
    fn with(quotes: &[(i64, &str)]) -> Self {
        let quotes = quotes
            .iter()
            .map(|(id, text)| Quote {
                id: *id,
                quote: (*text).to_owned(),
                timestamp: "2025-01-01T00:00:00Z".to_owned(),
                ip: "127.0.0.1".to_owned(),
                quote_number: *id,
            })
            .collect();
        Self { quotes: Mutex::new(quotes) }
    }
}

fn down() -> ApiError {
    ApiError::Status { status: 503, path: "/api/nodeinfo".to_owned() }
}

#[async_trait::async_trait]
impl QuoteApi for ListOnlyApi {
    async fn create_quote(&self, body: &NewQuote) -> Result<QuoteReply, ApiError> {
        let mut quotes = self.quotes.lock().unwrap();
        let next = quotes.iter().map(|q| q.id).max().unwrap_or(0) + 1;
        let quote = Quote {
            id: next,
            quote: body.quote.clone(),
            timestamp: "2025-01-02T00:00:00Z".to_owned(),
            ip: "127.0.0.1".to_owned(),
            quote_number: next,
        };
        quotes.push(quote.clone());
        Ok(QuoteReply::Quote(quote))
    }

    async fn latest_quote(&self) -> Result<Option<QuoteReply>, ApiError> {
        Ok(self.quotes.lock().unwrap().last().cloned().map(QuoteReply::Quote))
    }

    async fn list_quotes(&self) -> Result<Vec<Quote>, ApiError> {
        Ok(self.quotes.lock().unwrap().clone())
    }

    async fn delete_quote(&self, id: i64) -> Result<(), ApiError> {
        self.quotes.lock().unwrap().retain(|q| q.id != id);
        Ok(())
    }

    async fn node_info(&self) -> Result<NodeInfo, ApiError> {
        Err(down())
    }

    async fn db_status(&self) -> Result<DbStatus, ApiError> {
        Err(down())
    }
}

#[test]
fn parses_commands() {
    let cli = Cli::try_parse_from(["quoteboard", "submit", "Work hard, play hard"]).unwrap();
    assert_eq!(cli.command, Command::Submit { text: "Work hard, play hard".to_owned() });

    let cli = Cli::try_parse_from(["quoteboard", "--base-url", "http://node:8080", "delete", "4"]).unwrap();
    assert_eq!(cli.base_url, "http://node:8080");
    assert_eq!(cli.command, Command::Delete { id: 4 });

    assert!(Cli::try_parse_from(["quoteboard", "delete", "four"]).is_err());
}

#[tokio::test]
async fn show_renders_loaded_board() {
    let page = run_board(ListOnlyApi::with(&[(1, "first")]), Command::Show).await.unwrap();
    assert!(page.contains("[x id=1] first"));
    assert!(page.contains("Quote #: 1"));
    assert!(page.contains(NODE_INFO_UNAVAILABLE));
}

#[tokio::test]
async fn submit_shows_new_quote() {
    let command = Command::Submit { text: "Taking over".to_owned() };
    let page = run_board(ListOnlyApi::with(&[]), command).await.unwrap();
    assert!(page.contains("\"Taking over\""));
    assert!(page.contains("Quote #: 1"));
}

#[tokio::test]
async fn submit_blank_is_refused() {
    let command = Command::Submit { text: "   ".to_owned() };
    let err = run_board(ListOnlyApi::with(&[]), command).await.unwrap_err();
    assert!(matches!(err, CliError::BlankQuote));
}

#[tokio::test]
async fn delete_drops_entry_from_page() {
    let page = run_board(ListOnlyApi::with(&[(1, "only")]), Command::Delete { id: 1 }).await.unwrap();
    assert!(!page.contains("[x id=1]"));
    assert!(page.contains(NO_QUOTES));
}
