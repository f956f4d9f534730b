//! Pilyeon - Ideal-Type Survey
//!
//! This crate serves an eight-question binary-choice survey over HTTP,
//! keeps each visitor's in-progress answers in a session store, and maps
//! the finished answer set to one of three fixed result profiles.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
