pub mod config;
pub mod data_loading;
pub mod error;
pub mod models;
pub mod normalizer;
pub mod output;
pub mod stopwords;
pub mod tokenization;
