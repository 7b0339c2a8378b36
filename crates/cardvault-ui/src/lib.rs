#![forbid(unsafe_code)]
#![deny(
    unused_imports,
    unused_must_use,
    unreachable_pub,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
#![warn(dead_code, clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions)]
//! Cardvault status toggle: enable/disable controls for API keys and
//! redemption cards on server-rendered admin pages.
//!
//! The DOM-free pieces (`core`, `flows`, `i18n`) build and test natively; the
//! browser bindings and the [`run_app`] entry point exist only on `wasm32`.

pub mod core;
pub mod flows;
pub mod i18n;

#[cfg(target_arch = "wasm32")]
mod app;
#[cfg(target_arch = "wasm32")]
mod dom;
#[cfg(target_arch = "wasm32")]
mod feedback;
#[cfg(target_arch = "wasm32")]
mod services;
#[cfg(target_arch = "wasm32")]
mod telemetry;

#[cfg(target_arch = "wasm32")]
pub use app::{detach, run_app};
