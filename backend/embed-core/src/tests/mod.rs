mod config;
mod error;
mod host;
mod protocol;
mod session;
