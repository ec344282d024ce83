//! Cross-module scenarios driven through the engine and its public API

mod demo_scenario;
