//! Shared test utilities

#![allow(dead_code)]

pub mod proxy;

pub use proxy::*;
