//! # Connect Four
//!
//! A two-player Connect Four game. The rules live in a self-contained engine
//! that owns one game and answers drop requests with explicit results; a
//! terminal UI built with Ratatui plays any number of games side by side.
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: board, players, engine
//! - [`ui`] — Terminal UI: boards, column selector, outcome messages
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod config;
pub mod error;
pub mod game;
pub mod ui;
