//! REST API over PostgreSQL for companies and the jobs they post.
//!
//! The `sql` module turns sparse request data into parameterized `SET` and
//! `WHERE` fragments; everything else is axum/sqlx plumbing around it.

pub mod auth;
pub mod companies;
pub mod config;
pub mod db;
pub mod errors;
pub mod jobs;
pub mod models;
pub mod routes;
pub mod sql;
pub mod state;
