// src/config.rs
use crate::domain::RecomputePolicy;
use chrono::Duration;
use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;

/// One week.
pub const MAX_SESSION_TTL_MINUTES: i64 = 7 * 24 * 60;

/// Apartment listings browser.
#[derive(Debug, Clone, Parser)]
#[command(name = "listings-browser", version, about)]
pub struct Config {
    /// Address to listen on
    #[arg(long, env = "LISTINGS_ADDR", default_value = "127.0.0.1:3000")]
    pub addr: SocketAddr,

    /// Number of worker threads
    #[arg(long, env = "LISTINGS_WORKERS", default_value_t = 8)]
    pub workers: usize,

    /// JSON dataset to serve instead of the bundled one
    #[arg(long, env = "LISTINGS_DATA")]
    pub data: Option<PathBuf>,

    /// Search term shown to a fresh session
    #[arg(long, env = "LISTINGS_INITIAL_SEARCH", default_value = "")]
    pub initial_search: String,

    /// Pause in typing before results refresh (0 = every keystroke)
    #[arg(long, env = "LISTINGS_SEARCH_DEBOUNCE_MS", default_value_t = 0)]
    pub search_debounce_ms: u64,

    /// Idle minutes before a session's saved search is forgotten
    #[arg(
        long,
        env = "LISTINGS_SESSION_TTL_MINUTES",
        default_value_t = 30,
        value_parser = clap::value_parser!(i64).range(1..=MAX_SESSION_TTL_MINUTES)
    )]
    pub session_ttl_minutes: i64,
}

impl Config {
    pub fn view_settings(&self) -> ViewSettings {
        ViewSettings {
            initial_search: self.initial_search.clone(),
            recompute: RecomputePolicy::from_millis(self.search_debounce_ms),
        }
    }

    pub fn session_ttl(&self) -> Duration {
        Duration::minutes(self.session_ttl_minutes)
    }
}

/// Settings the list and detail views are rendered with.
#[derive(Debug, Clone, Default)]
pub struct ViewSettings {
    pub initial_search: String,
    pub recompute: RecomputePolicy,
}
