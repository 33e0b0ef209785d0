//! Users API Library
//!
//! This library provides a CRUD HTTP service for user records, including
//! domain logic, the user service, interchangeable repositories, and the
//! HTTP adapter.

pub mod api;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod server;
pub mod services;
