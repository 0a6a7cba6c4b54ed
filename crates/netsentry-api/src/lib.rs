//! netsentry-api: pull-based REST client for the dashboard backend.
//! Historical statistics, blocklist, whitelist, and activity search.
//! Independent of the live stream; calls never block it.

pub mod client;
pub mod types;

pub use client::{ApiClient, ApiError};
