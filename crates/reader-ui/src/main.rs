#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
//! Binary entry for the article reader page; mounts the Yew app on wasm32.

#[cfg(target_arch = "wasm32")]
fn main() {
    reader_ui::run_app();
}

/// Explains how to serve the panel, since it only runs inside a browser.
#[cfg(not(target_arch = "wasm32"))]
const NATIVE_HINT: &str = "reader-ui renders the article settings panel in the browser. \
Serve it with `trunk serve` from crates/reader-ui, or build with \
`cargo build --target wasm32-unknown-unknown`.\n";

#[cfg(not(target_arch = "wasm32"))]
fn main() -> Result<(), std::io::Error> {
    use std::io::Write;

    std::io::stderr().lock().write_all(NATIVE_HINT.as_bytes())
}
