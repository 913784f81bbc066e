//! Terminal UI: any number of independent boards, each with its own column
//! selector and message line.

mod app;
pub mod board_widget;
mod game_view;

pub use app::App;
