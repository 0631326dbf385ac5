use covo_bot::config::Config;
use std::env;
use std::path::PathBuf;
use std::sync::Mutex;

// Mutex to ensure config tests run sequentially to avoid environment variable conflicts
static CONFIG_TEST_MUTEX: Mutex<()> = Mutex::new(());

const VARS: [&str; 6] = [
    "TELEGRAM_BOT_TOKEN",
    "HTTP_PORT",
    "CONTENT_DIR",
    "CONTENT_REQUIRED",
    "OPERATOR_IDS",
    "TURN_TIMEOUT_MINUTES",
];

fn clear_env() {
    for var in VARS {
        env::remove_var(var);
    }
}

#[test]
fn test_config_from_env_with_all_vars() {
    let _guard = CONFIG_TEST_MUTEX.lock().unwrap();
    clear_env();

    env::set_var("TELEGRAM_BOT_TOKEN", "test_token_123");
    env::set_var("HTTP_PORT", "8080");
    env::set_var("CONTENT_DIR", "/srv/prompts");
    env::set_var("CONTENT_REQUIRED", "false");
    env::set_var("OPERATOR_IDS", "11, 22");
    env::set_var("TURN_TIMEOUT_MINUTES", "5");

    let config = Config::from_env().unwrap();

    assert_eq!(config.telegram_bot_token, "test_token_123");
    assert_eq!(config.http_port, 8080);
    assert_eq!(config.content_dir, PathBuf::from("/srv/prompts"));
    assert!(!config.content_required);
    assert_eq!(config.operator_ids, vec![11, 22]);
    assert_eq!(config.turn_timeout_minutes, 5);

    clear_env();
}

#[test]
fn test_config_from_env_with_defaults() {
    let _guard = CONFIG_TEST_MUTEX.lock().unwrap();
    clear_env();

    // Only set required token, let others use defaults
    env::set_var("TELEGRAM_BOT_TOKEN", "required_token");

    let config = Config::from_env().unwrap();

    assert_eq!(config.telegram_bot_token, "required_token");
    assert_eq!(config.http_port, 3000);
    assert_eq!(config.content_dir, PathBuf::from("./content"));
    assert!(config.content_required);
    assert!(config.operator_ids.is_empty());
    assert_eq!(config.turn_timeout_minutes, 0);

    clear_env();
}

#[test]
fn test_config_missing_required_token() {
    let _guard = CONFIG_TEST_MUTEX.lock().unwrap();
    clear_env();

    let result = Config::from_env();
    assert!(result.is_err());

    let error_msg = result.unwrap_err().to_string();
    assert!(error_msg.contains("TELEGRAM_BOT_TOKEN must be set"));

    // A blank token is as good as none
    env::set_var("TELEGRAM_BOT_TOKEN", "   ");
    assert!(Config::from_env().is_err());

    clear_env();
}

#[test]
fn test_config_invalid_port() {
    let _guard = CONFIG_TEST_MUTEX.lock().unwrap();
    clear_env();

    env::set_var("TELEGRAM_BOT_TOKEN", "test_token");
    env::set_var("HTTP_PORT", "invalid_port");

    let error_msg = Config::from_env().unwrap_err().to_string();
    assert!(error_msg.contains("Invalid HTTP_PORT"));

    env::set_var("HTTP_PORT", "-1");
    assert!(Config::from_env().is_err());

    env::set_var("HTTP_PORT", "  65535  ");
    assert_eq!(Config::from_env().unwrap().http_port, 65535);

    clear_env();
}

#[test]
fn test_config_content_required_flag() {
    let _guard = CONFIG_TEST_MUTEX.lock().unwrap();
    clear_env();

    env::set_var("TELEGRAM_BOT_TOKEN", "test_token");

    env::set_var("CONTENT_REQUIRED", "no");
    assert!(!Config::from_env().unwrap().content_required);

    env::set_var("CONTENT_REQUIRED", "TRUE");
    assert!(Config::from_env().unwrap().content_required);

    env::set_var("CONTENT_REQUIRED", "sometimes");
    let error_msg = Config::from_env().unwrap_err().to_string();
    assert!(error_msg.contains("Invalid CONTENT_REQUIRED"));

    clear_env();
}

#[test]
fn test_config_invalid_operator_ids() {
    let _guard = CONFIG_TEST_MUTEX.lock().unwrap();
    clear_env();

    env::set_var("TELEGRAM_BOT_TOKEN", "test_token");
    env::set_var("OPERATOR_IDS", "42,@admin");

    let error_msg = Config::from_env().unwrap_err().to_string();
    assert!(error_msg.contains("Invalid OPERATOR_IDS entry '@admin'"));

    clear_env();
}

#[test]
fn test_config_invalid_turn_timeout() {
    let _guard = CONFIG_TEST_MUTEX.lock().unwrap();
    clear_env();

    env::set_var("TELEGRAM_BOT_TOKEN", "test_token");
    env::set_var("TURN_TIMEOUT_MINUTES", "ten");

    let error_msg = Config::from_env().unwrap_err().to_string();
    assert!(error_msg.contains("Invalid TURN_TIMEOUT_MINUTES"));

    clear_env();
}

#[test]
fn test_config_turn_timeout_out_of_range() {
    let _guard = CONFIG_TEST_MUTEX.lock().unwrap();
    clear_env();

    env::set_var("TELEGRAM_BOT_TOKEN", "test_token");

    // Parses as u64 but is too long for a chrono duration
    env::set_var("TURN_TIMEOUT_MINUTES", "200000000000000");
    let error_msg = Config::from_env().unwrap_err().to_string();
    assert!(error_msg.contains("Invalid TURN_TIMEOUT_MINUTES"));

    env::set_var("TURN_TIMEOUT_MINUTES", "18446744073709551615");
    assert!(Config::from_env().is_err());

    // A week is fine
    env::set_var("TURN_TIMEOUT_MINUTES", "10080");
    assert_eq!(Config::from_env().unwrap().turn_timeout_minutes, 10080);

    clear_env();
}

#[test]
fn test_config_empty_content_dir_uses_default() {
    let _guard = CONFIG_TEST_MUTEX.lock().unwrap();
    clear_env();

    env::set_var("TELEGRAM_BOT_TOKEN", "valid_token");
    env::set_var("CONTENT_DIR", "");

    let config = Config::from_env().unwrap();
    assert_eq!(config.content_dir, PathBuf::from("./content"));

    clear_env();
}
