pub mod access;
pub mod auth;
pub mod dataset;
pub mod models;
pub mod routes;
