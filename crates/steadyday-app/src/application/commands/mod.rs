pub mod command_handler;
pub mod consistency_commands;
pub mod focus_commands;
pub mod handlers;
pub mod mood_commands;
pub mod personality_commands;

pub use command_handler::{Command, CommandHandler};
