//! Tablerest - JSON documents over PostgreSQL tables
//!
//! Each table holds an `id` uuid column and a `data` json column. Tables
//! are created on first write and documents are exposed over a small REST
//! API.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
