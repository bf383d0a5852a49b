#![allow(dead_code)]

pub mod config;
pub mod fake_say;
pub mod server;
