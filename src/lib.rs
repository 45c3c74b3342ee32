//! A terminal quiz that asks for the value of `x` in randomly generated linear equations.

pub mod config;
pub mod error;
pub mod game;
pub mod quiz;
pub mod ui;
