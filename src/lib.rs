//! Deterministic weekly timetable synthesis for a class section and its teachers.

pub mod config;
pub mod data;
pub mod error;
pub mod generator;
pub mod hash;
pub mod policy;
pub mod server;
