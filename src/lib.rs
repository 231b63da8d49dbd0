pub mod components;
pub mod config;
pub mod error;
pub mod export;
pub mod links;
pub mod models;
pub mod navigation;
pub mod routes;
pub mod routing;
pub mod theme;
