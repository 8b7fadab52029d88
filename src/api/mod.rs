// HTTP API over the catalog engine

pub mod handlers;
pub mod models;
pub mod routes;
