// handlers/mod.rs - Two-tier handler layout
//
// Pages (navigation requests, evaluated by the access gate) and
// API endpoints under /api (excluded from the gate, called by page forms).
pub mod api; // /api/* - form endpoints backed by the remote blog backend
pub mod health;
pub mod pages; // /, /login, /copyright, /editor - page descriptors

pub use health::health;
