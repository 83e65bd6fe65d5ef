pub mod prompts;
pub mod tui;
