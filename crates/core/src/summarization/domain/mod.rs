pub mod normalizer;
pub mod sentence;
pub mod sentence_splitter;
pub mod summarizer;
pub mod word_extractor;
