pub mod provider;
pub mod openai;
pub mod prompts;
pub mod parser;
#[cfg(test)]
pub(crate) mod stub_server;

pub use provider::CompletionProvider;
pub use openai::OpenAiProvider;
pub use prompts::build_prompt;
pub use parser::parse_classification;
