//! # Core Module
//!
//! Shared configuration types used by the engine loop and the demo binary.

pub mod config;

pub use config::{
    ApplicationConfig,
    EngineConfig,
    WindowConfig,
    SceneConfig,
    ControlsConfig,
    Config,
    ConfigError,
};
