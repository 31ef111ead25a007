pub mod common;
pub mod erb;
pub mod export;
pub mod matching;
pub mod notes;
pub mod report;
