pub mod config;
pub mod coordinator;
pub mod favorites;
pub mod fetch;
pub mod mood;
pub mod platform;
pub mod results;
pub mod track;
