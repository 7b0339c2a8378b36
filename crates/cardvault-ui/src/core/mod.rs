//! Core, DOM-free primitives and helpers for the status toggle component.
pub mod batch;
pub mod config;
pub mod csrf;
pub mod error;
pub mod feedback;
pub mod markup;
pub mod presentation;
pub mod routes;
pub mod target;
