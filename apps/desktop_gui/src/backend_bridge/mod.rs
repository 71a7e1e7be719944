//! Bridge between the egui thread and the async worker that talks HTTP.

pub mod commands;
pub mod runtime;
