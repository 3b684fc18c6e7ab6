//! HTTP surface of the analysis engine.
//!
//! `POST /api/analyze` accepts `{ "text": "..." }` and answers with an
//! [`AnalysisResult`](crate::extraction::AnalysisResult) or with
//! `{ "error": "..." }` and status 400 or 500. `GET /health` reports liveness.

pub mod request;
pub mod response;
pub mod server;

pub use request::{AnalyzeRequest, ErrorBody};
pub use response::JsonUtf8;
pub use server::{AppState, router, serve};
