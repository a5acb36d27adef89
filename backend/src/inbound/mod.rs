//! Inbound adapters translating external requests into generator calls.
//!
//! HTTP handlers live under [`http`].

pub mod http;
