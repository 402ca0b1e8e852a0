//! Tool configuration loaded from JSON files.

pub mod edge;

pub use edge::{load_config, parse_config, EdgeOutputConfig, EdgeToolConfig};
