// src/lib.rs
//! Data-access layer for a job board backed by a remote relational store.
//!
//! Recruiters post jobs, each optionally carrying a skills assessment of
//! questions and multiple-choice answers; candidates bookmark jobs and
//! apply. The store is reached over HTTP one round trip per operation,
//! with the caller's authorization token forwarded untouched.

pub mod api;
pub mod client;
pub mod config;
pub mod error;
pub mod query;
pub mod store;
pub mod types;
pub mod workflow;

pub use client::StoreClient;
pub use config::StoreConfig;
pub use error::StoreError;
pub use query::JobFilter;
pub use store::JobBoardStore;
