//! Dairycart Admin Dashboard
//!
//! Admin front-end for the Dairycart commerce platform, built with Leptos (WASM).
//!
//! # Features
//!
//! - Dashboard overview
//! - Product listing laid out as a grid of five-wide rows
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. It talks to the Dairycart REST API via HTTP and renders all
//! views client-side; the server only provides the page shell.

use leptos::*;
use wasm_bindgen::JsCast;

mod api;
mod app;
mod components;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // The page shell served by the admin server provides a single #app anchor
    let anchor = document()
        .get_element_by_id("app")
        .expect("#app mount point not found")
        .unchecked_into::<web_sys::HtmlElement>();

    mount_to(anchor, || view! { <app::App /> });
}
