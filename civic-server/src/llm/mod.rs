//! LLM Module
//!
//! Stateless forwarder to the hosted inference API. No conversation
//! state is kept server-side; each request carries its full prompt.

pub mod client;

pub use client::{LlmClient, resolve_model};
