pub mod anagram;
pub mod engine;
pub mod normalize;
pub mod search;
pub mod types;
