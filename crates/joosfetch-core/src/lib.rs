pub mod catalog;
pub mod config;
pub mod extract;
pub mod fetch;
pub mod logging;
pub mod runner;
pub mod storage;
pub mod url_model;
