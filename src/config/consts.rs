// src/config/consts.rs

// Net config
pub const SITE_ORIGIN: &str = "https://www.epbf.com";
pub const DRAW_URL_PREFIX: &str = "https://www.epbf.com/tournaments/eurotour/id/";
pub const DRAW_URL_SUFFIX: &str = "/draw-results/";
pub const USER_AGENT: &str = "draw_scrape/0.3";
pub const REQUEST_TIMEOUT_SECS: u64 = 15;

// Player identity: profile links look like /player/show/{id}/<slug>
pub const PLAYER_LINK_PREFIX: &str = "/player/show/";

// Extraction
pub const WALKOVER: &str = "walkover";
pub const WINNER_MARK: &str = "**";
pub const FLAG_EXTENSIONS: [&str; 6] = [".png", ".gif", ".jpg", ".jpeg", ".svg", ".webp"];

// Service
pub const DEFAULT_PORT: u16 = 3000;

/// Draw-results page URL for a tournament id.
pub fn draw_url(tournament_id: &str) -> String {
    join!(DRAW_URL_PREFIX, tournament_id.trim(), DRAW_URL_SUFFIX)
}

/// Substring that marks a profile link for `player_id`.
pub fn player_link_token(player_id: &str) -> String {
    join!(PLAYER_LINK_PREFIX, player_id.trim(), "/")
}
