// Library root
// -----------
// The binary (`main.rs`) parses flags, then hands a `Config` and an HTTP
// transport to the sync runner.
//
// Module responsibilities:
// - `config`: command line / environment input and the URLs derived from it.
// - `api`: the HTTP helper (JSON and multipart requests, Basic auth).
// - `types`: attachment records decoded from the list endpoint.
// - `sync`: list, delete matching, upload.
// - `error`: error types for all of the above.
pub mod api;
pub mod config;
pub mod error;
pub mod sync;
pub mod types;
