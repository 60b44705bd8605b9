//! Settings loaded from the project configuration file.
/// Config file loader
mod loader;
/// Configuration manager
mod manager;
/// Configuration types and settings
mod types;

pub use loader::CONFIG_FILE_NAME;
pub use manager::ConfigManager;
pub use types::{
    ConfigError,
    DictionaryFilesConfig,
    ElementBinding,
    I18nSettings,
    ObserverConfig,
    TRANSLATABLE_ATTRIBUTES,
    ValidationError,
};
