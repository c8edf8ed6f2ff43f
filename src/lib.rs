pub mod app;
pub mod catalog;
pub mod cli;
pub mod command;
pub mod config;
pub mod deck;
pub mod error;
pub mod event;
pub mod input;
pub mod logging;
pub mod motion;
pub mod route;
pub mod ui;
