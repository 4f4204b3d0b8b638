//! Auth command: manage the stored Gemini API key

use crate::config::{validate_api_key, Config};
use crate::error::{AbsurdaError, Result};
use crate::storage::CredentialStore;
use colored::Colorize;

/// Store, show, or clear the API key
pub fn run_auth(config: &Config, key: Option<String>, show: bool, clear: bool) -> Result<()> {
    let store = CredentialStore::open(config.history.data_dir.as_deref())?;

    if show {
        match store.get() {
            Some(key) => println!("{}", mask(&key)),
            None => println!("{}", "Geen API key opgeslagen.".yellow()),
        }
        return Ok(());
    }

    if clear {
        store.clear()?;
        println!("{}", "API key verwijderd.".green());
        return Ok(());
    }

    match key {
        Some(key) => {
            if !validate_api_key(&key) {
                return Err(AbsurdaError::Config(
                    "Dat ziet er niet uit als een Gemini API key (begint met AIza, langer dan 30 tekens)"
                        .to_string(),
                )
                .into());
            }
            store.save(&key)?;
            println!("{}", "API key opgeslagen.".green());
        }
        None => {
            // Status report: where would a key come from right now?
            if config.provider.api_key.is_some() {
                println!("API key: {} (config)", "aanwezig".green());
            } else if store.has() {
                println!("API key: {} (opgeslagen)", "aanwezig".green());
            } else if std::env::var("GEMINI_API_KEY").is_ok() {
                println!("API key: {} (GEMINI_API_KEY)", "aanwezig".green());
            } else {
                println!("API key: {}", "ontbreekt".red());
                println!(
                    "Sla een key op met {} of zet {}.",
                    "absurda auth <key>".cyan(),
                    "GEMINI_API_KEY".cyan()
                );
            }
        }
    }

    Ok(())
}

/// Mask a key for display, keeping just enough to recognize it
///
/// Counts characters, not bytes: a hand-edited credential file may hold
/// arbitrary UTF-8.
fn mask(key: &str) -> String {
    let chars: Vec<char> = key.chars().collect();
    if chars.len() <= 12 {
        return "*".repeat(chars.len());
    }
    let head: String = chars[..8].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{}...{}", head, tail)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn test_config(dir: &std::path::Path) -> Config {
        let mut config = Config::default();
        config.history.data_dir = Some(dir.to_path_buf());
        config
    }

    #[test]
    fn test_mask_keeps_prefix_and_suffix() {
        assert_eq!(
            mask("AIzaSyA1234567890abcdefghijklmnopqrstu"),
            "AIzaSyA1...rstu"
        );
        assert_eq!(mask("kort"), "****");
    }

    #[test]
    fn test_mask_handles_multibyte_keys() {
        // A multi-byte char straddling the eighth byte must not panic.
        assert_eq!(
            mask("AIzaSyAé1234567890abcdefghijklmnopqrstu"),
            "AIzaSyAé...rstu"
        );
        assert_eq!(mask("héél kört"), "*********");
    }

    #[test]
    #[serial]
    fn test_auth_stores_and_clears_key() {
        let dir = tempfile::tempdir().expect("tempdir");
        std::env::remove_var("ABSURDA_DATA_DIR");
        let config = test_config(dir.path());

        run_auth(
            &config,
            Some("AIzaSyA1234567890abcdefghijklmnopqrstu".to_string()),
            false,
            false,
        )
        .unwrap();

        let store = CredentialStore::at(dir.path());
        assert!(store.has());

        run_auth(&config, None, false, true).unwrap();
        assert!(!store.has());
    }

    #[test]
    #[serial]
    fn test_auth_rejects_malformed_key() {
        let dir = tempfile::tempdir().expect("tempdir");
        std::env::remove_var("ABSURDA_DATA_DIR");
        let config = test_config(dir.path());

        let err = run_auth(&config, Some("niet-een-key".to_string()), false, false).unwrap_err();
        assert!(err.to_string().contains("Gemini API key"));
        assert!(!CredentialStore::at(dir.path()).has());
    }
}
