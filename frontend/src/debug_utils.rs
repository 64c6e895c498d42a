// Console logging helpers.
//
// Output goes to the browser console through zoon's println!/eprintln!.

use crate::config::AppConfig;

/// Diagnostic logging - prints only in debug configurations
pub fn debug_log(config: &AppConfig, message: &str) {
    if config.debug {
        zoon::println!("[DEBUG] {}", message);
    }
}

/// Critical logging - always prints (errors and fatal startup problems)
pub fn debug_critical(message: &str) {
    zoon::eprintln!("[CRITICAL] {}", message);
}
