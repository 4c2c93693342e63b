pub mod audio;
pub mod bootstrap;
pub mod llm;
pub mod observability;
pub mod search;
pub mod storage;
