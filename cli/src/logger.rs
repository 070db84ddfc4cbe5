use std::sync::OnceLock;

use chrono::Local;

static VERBOSE: OnceLock<bool> = OnceLock::new();

pub fn init(verbose: bool) {
    let _ = VERBOSE.set(verbose);
}

pub fn log(message: &str) {
    if VERBOSE.get().copied().unwrap_or(false) {
        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S");
        eprintln!("[{}] {}", timestamp, message);
    }
}

macro_rules! game_log {
    ($($arg:tt)*) => {
        crate::logger::log(&format!($($arg)*))
    };
}
pub(crate) use game_log;
