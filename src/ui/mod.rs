pub mod output;
pub mod prompts;
