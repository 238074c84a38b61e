//! Plain-text rendering of the quote board page.
//!
//! The page reads top to bottom the same way the browser layout does: title,
//! input row, error banner, quote panel, then the node/application footer
//! with DB status, every stored quote, and node info.

#[cfg(test)]
#[path = "view_test.rs"]
mod view_test;

use wire::{DbStatus, NodeInfo, Quote};

use crate::state::quotes::QuoteBoardState;

pub const TITLE: &str = "Wiz Khalubernetes";
pub const INPUT_PLACEHOLDER: &str = "Enter your favorite Wiz Khalifa quote";
pub const FIRST_QUOTE_PLACEHOLDER: &str = "Drop your first quote!";
pub const NO_QUOTES: &str = "No quotes found.";
pub const NODE_INFO_UNAVAILABLE: &str = "Unable to load node info. Backend or database may be unavailable.";

const RULE: &str = "----------------------------------------";

#[must_use]
pub fn render_page(state: &QuoteBoardState) -> String {
    let mut lines = vec![TITLE.to_owned(), "=".repeat(TITLE.len()), String::new()];

    lines.push(input_row(state));
    if let Some(banner) = state.banner() {
        lines.push(format!("! {banner}"));
    }

    lines.push(String::new());
    if let Some(quote) = state.display_panel() {
        lines.extend(quote_panel(quote));
    } else if state.shows_placeholder() {
        lines.push(FIRST_QUOTE_PLACEHOLDER.to_owned());
    }

    lines.push(String::new());
    lines.push(RULE.to_owned());
    lines.push("Node/Application Info".to_owned());
    if let Some(status) = &state.db_status {
        lines.extend(db_status_lines(status));
    }

    lines.push(String::new());
    lines.push("All Quotes".to_owned());
    if state.quotes.is_empty() {
        lines.push(format!("  {NO_QUOTES}"));
    } else {
        for quote in &state.quotes {
            lines.extend(quote_entry(quote));
        }
    }

    lines.push(String::new());
    match &state.node_info {
        Some(info) => lines.extend(node_info_lines(info)),
        None => lines.push(NODE_INFO_UNAVAILABLE.to_owned()),
    }

    let mut page = lines.join("\n");
    page.push('\n');
    page
}

fn input_row(state: &QuoteBoardState) -> String {
    let shown = if state.input.is_empty() { format!("({INPUT_PLACEHOLDER})") } else { format!("\"{}\"", state.input) };
    let disabled = if state.can_submit() { "" } else { " (disabled)" };
    format!("> {shown}  [{}]{disabled}", state.submit_label())
}

fn quote_panel(quote: &Quote) -> Vec<String> {
    vec![
        "Latest Quote".to_owned(),
        format!("  \"{}\"", quote.quote),
        format!("  Timestamp: {}", quote.timestamp),
        format!("  IP: {}", quote.ip),
        format!("  Quote #: {}", quote.quote_number),
    ]
}

fn db_status_lines(status: &DbStatus) -> Vec<String> {
    let connected = if status.is_connected() { "Connected" } else { "Not Connected" };
    vec![
        format!("DB Status: {connected} ({}) {}", status.kind, status.message),
        format!("Connected DB: {}", status.kind),
    ]
}

fn quote_entry(quote: &Quote) -> Vec<String> {
    vec![
        format!("  [x id={}] {}", quote.id, quote.quote),
        format!("      #{} | {}", quote.quote_number, quote.timestamp),
        format!("      IP: {}", quote.ip),
    ]
}

fn node_info_lines(info: &NodeInfo) -> Vec<String> {
    vec![
        format!("Hostname: {}", info.hostname),
        format!("App: {}", info.app),
        format!("OS: {} {} ({})", info.os_name, info.os_version, info.os_arch),
        format!("Available Processors: {}", info.available_processors),
        format!("Max Memory: {} MB", info.max_memory_mb),
        format!("Total Memory: {} MB", info.total_memory_mb),
        format!("Free Memory: {} MB", info.free_memory_mb),
        format!("Timestamp: {}", info.timestamp),
    ]
}
