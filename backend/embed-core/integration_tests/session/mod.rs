mod filtering;
mod handshake;
mod lifecycle;
mod ui_events;
