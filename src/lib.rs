pub mod config;
pub mod download;
pub mod errors;
pub mod fetch;
pub mod nasa;
pub mod scanner;
pub mod spacex;
pub mod uploader;
