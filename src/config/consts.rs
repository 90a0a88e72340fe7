// src/config/consts.rs

// Net config
pub const BASE_URL: &str = "https://es.soccerwiki.org/";
pub const USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";
pub const PAGE_TIMEOUT_SECS: u64 = 30;
pub const PROFILE_TIMEOUT_SECS: u64 = 15;

// Export
pub const DEFAULT_OUT_DIR: &str = "out";
pub const CLUBS_FILE: &str = "clubes.json";
pub const ROSTER_FILE_PREFIX: &str = "plantel";
pub const PLAYER_FILE_PREFIX: &str = "jugador";

// Concurrency
pub const WORKERS: usize = 4;
pub const REQUEST_PAUSE_MS: u64 = 75; // be polite
pub const JITTER_MS: u64 = 50; // extra 0..50 ms
