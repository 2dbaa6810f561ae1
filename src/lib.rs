//! Candidate Tracker Backend Library
//!
//! Exports the core modules for the candidate tracker API server:
//! authentication, the account directory, candidate records, and the
//! HTTP surface around them.

pub mod auth;
pub mod candidates;
pub mod config;
pub mod directory;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod state;
