mod openai_summarizer;

pub use openai_summarizer::OpenAiSummarizer;
