use std::sync::{Mutex, MutexGuard};

use utils::app_config::*;

// The configuration is process-global; serialize the tests that touch it.
static LOCK: Mutex<()> = Mutex::new(());

pub fn initialize() -> MutexGuard<'static, ()> {
    let guard = LOCK.lock().unwrap_or_else(|poison| poison.into_inner());

    // Reset to original test configuration
    let config_contents = include_str!("resources/test_config.toml");
    AppConfig::init(Some(config_contents)).unwrap();

    guard
}

#[test]
fn fetch_config() {
    let _guard = initialize();

    // Fetch an instance of Config
    let config = AppConfig::fetch().unwrap();

    assert_eq!(config.log.level, "info");
    assert_eq!(config.scale.bindir, "/usr/lpp/mmfs/bin");
    assert_eq!(config.runtime.dryrun, false);
}

#[test]
fn verify_get() {
    let _guard = initialize();

    assert_eq!(AppConfig::get::<String>("log.level").unwrap(), "info");
    assert_eq!(
        AppConfig::get::<String>("scale.bindir").unwrap(),
        "/usr/lpp/mmfs/bin"
    );
    assert_eq!(AppConfig::get::<bool>("runtime.dryrun").unwrap(), false);
}

#[test]
fn verify_set() {
    let _guard = initialize();

    AppConfig::set("log.level", "debug").unwrap();
    AppConfig::set("scale.bindir", "/opt/mmfs/bin").unwrap();
    AppConfig::set("runtime.dryrun", "true").unwrap();

    // Fetch a new instance of Config
    let config = AppConfig::fetch().unwrap();

    // Check the values were modified
    assert_eq!(config.log.level, "debug");
    assert_eq!(config.scale.bindir, "/opt/mmfs/bin");
    assert_eq!(config.runtime.dryrun, true);
}

#[test]
fn test_nested_configuration_access() {
    let _guard = initialize();

    let log_config = AppConfig::get::<LogConfig>("log").unwrap();
    assert_eq!(log_config.level, "info");

    let scale_config = AppConfig::get::<ScaleConfig>("scale").unwrap();
    assert_eq!(scale_config.bindir, "/usr/lpp/mmfs/bin");

    let runtime_config = AppConfig::get::<RuntimeConfig>("runtime").unwrap();
    assert_eq!(runtime_config.dryrun, false);
}
