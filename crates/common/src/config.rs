use once_cell::sync::OnceCell;

/// Network used when `--network` is not given.
pub const DEFAULT_NETWORK: &str = "hardhat";

static CONFIG: OnceCell<GlobalConfig> = OnceCell::new();

pub fn init_global_config(config: GlobalConfig) {
    CONFIG.set(config).unwrap();
}

/// Returns the process-wide config. Falls back to defaults when the CLI
/// did not initialize it (library use and tests).
pub fn global_config() -> &'static GlobalConfig {
    CONFIG.get_or_init(GlobalConfig::default)
}

#[derive(Debug, Clone)]
pub struct GlobalConfig {
    pub verbose: bool,
    pub network: String,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            verbose: false,
            network: DEFAULT_NETWORK.to_owned(),
        }
    }
}
