mod openai;
mod types;

pub use openai::OpenAiCompletionClient;
pub use types::{CompletionSettings, DEFAULT_MAX_TOKENS, DEFAULT_MODEL, DEFAULT_TEMPERATURE};
