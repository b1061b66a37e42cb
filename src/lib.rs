//! Chat-style video assistant: a thin HTTP relay over the YouTube Data API
//! plus the client-side conversation state machine that drives it.

#![deny(unsafe_code)]
#![deny(missing_docs)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

/// Client-side chat session and relay transport.
pub mod chat;
/// Video search service and provider client.
pub mod search;
/// HTTP server and API routes.
pub mod server;
/// Entry helpers to start the relay server.
pub mod startup;
