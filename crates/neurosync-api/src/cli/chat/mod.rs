//! Interactive terminal chat against a running relay.
//!
//! The loop keeps the conversation in memory, sends the whole history on each
//! turn, and rolls back a turn the relay could not answer. Entry point:
//! `loop_runner::run_chat_loop`.

pub mod banner;
pub mod commands;
pub mod history;
pub mod input;
pub mod loop_runner;
