pub mod cli;
pub mod clipboard;
pub mod resolve;
pub mod services;
