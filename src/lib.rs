pub mod client;
pub mod config;
pub mod dom;
pub mod errors;
pub mod handlers;
pub mod i18n;
pub mod models;
pub mod routes;
pub mod state;
pub mod storage;
pub mod store;
