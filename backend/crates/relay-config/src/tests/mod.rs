
use std::env;

use tempfile::TempDir;

/// Every variable `Config::load` reads, besides the config dir itself
const OVERRIDE_VARS: [&str; 11] = [
    "RELAY_SERVER_HOST",
    "API_PORT",
    "JWT_SECRET",
    "RELAY_BCRYPT_COST",
    "TWILIO_ACCOUNT_SID",
    "TWILIO_AUTH_TOKEN",
    "TWILIO_FROM",
    "TWILIO_API_BASE_URL",
    "RELAY_LOG_LEVEL",
    "RELAY_LOG_COLORED",
    "RELAY_LOG_FILE",
];

/// RAII guard for environment variables - automatically restores on drop
pub(crate) struct EnvGuard {
    key: &'static str,
    original: Option<String>,
}

impl EnvGuard {
    pub(crate) fn set(key: &'static str, value: &str) -> Self {
        unsafe {
            let original = env::var(key).ok();
            env::set_var(key, value);
            Self { key, original }
        }
    }

    pub(crate) fn remove(key: &'static str) -> Self {
        unsafe {
            let original = env::var(key).ok();
            env::remove_var(key);
            Self { key, original }
        }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        unsafe {
            match &self.original {
                Some(val) => env::set_var(self.key, val),
                None => env::remove_var(self.key),
            }
        }
    }
}

/// Isolated environment for a config test.
///
/// Points RELAY_CONFIG_DIR at a fresh temp directory and clears every
/// override variable for the lifetime of the value.
pub(crate) struct TestEnv {
    pub(crate) dir: TempDir,
    _config_dir: EnvGuard,
    _cleared: Vec<EnvGuard>,
}

impl TestEnv {
    pub(crate) fn write_config(&self, contents: &str) {
        std::fs::write(self.dir.path().join("config.toml"), contents).unwrap();
    }
}

pub(crate) fn setup_config_dir() -> TestEnv {
    let dir = TempDir::new().unwrap();
    let config_dir = EnvGuard::set("RELAY_CONFIG_DIR", dir.path().to_str().unwrap());
    let cleared = OVERRIDE_VARS.into_iter().map(EnvGuard::remove).collect();

    TestEnv {
        dir,
        _config_dir: config_dir,
        _cleared: cleared,
    }
}
