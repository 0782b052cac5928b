// Resource fetching and hydration module.
// Wraps the HTTP/file client and the per-slot hydration protocol.

pub mod client;
pub mod loader;

pub use client::Fetcher;
pub use loader::{FetchRequest, HydrationEvent, collect_requests, render};
