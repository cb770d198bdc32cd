//! Database layer for mdpad

mod connection;
mod migrations;

pub use connection::Database;
