//! coop-server — Egg supply and sales backend
//!
//! REST service managing users, roles, suppliers, egg types, eggs, orders,
//! bills, payments and reports, with JWT authentication and monthly
//! sales aggregates. HTTP layer in [`api`], business rules in [`service`],
//! storage in [`db`].

pub mod api;
pub mod auth;
pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod service;
pub mod state;
pub mod util;
