//! MedGraph Dashboard
//!
//! Frontend for a medical knowledge explorer built with Leptos (WASM).
//!
//! # Features
//!
//! - Disease directory backed by Wikidata
//! - Medical adviser chat
//! - Hospital lookup by country
//! - Drug-disease relation graph
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. It talks to the MedGraph REST API over HTTP and mounts onto
//! a single anchor element in the hosting document.

mod api;
mod app;
mod boot;
mod components;
mod pages;
mod routes;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // One-shot startup: resolve the anchor and mount the app. A missing
    // anchor means the page cannot initialize at all.
    if let Err(err) = boot::create_application(boot::DEFAULT_ANCHOR_ID) {
        web_sys::console::error_1(&format!("medgraph-ui failed to start: {err}").into());
        panic!("medgraph-ui failed to start: {err}");
    }
}
