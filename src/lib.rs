pub mod banner;
pub mod commands;
pub mod config;
pub mod console;
pub mod consts;
pub mod events;
pub mod gateway;
pub mod logging;
pub mod prompts;
pub mod protocol;
pub mod reviewer;
pub mod spinner;
