//! Common test utilities and fixtures for integration tests.
//!
//! # Modules
//!
//! - `fixtures`: server response fixtures and mock-server setup
//! - `log_capture`: in-memory tracing capture for log assertions
//! - `logger`: structured test logging infrastructure

#![allow(dead_code)]

pub mod fixtures;
pub mod log_capture;
pub mod logger;
