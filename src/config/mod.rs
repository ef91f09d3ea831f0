//! Configuration and path management

pub mod paths;
pub mod settings;

pub use paths::SpendPaths;
pub use settings::Settings;
