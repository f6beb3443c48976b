//! The two analysis modes: résumé-vs-job analysis and career coaching.
//!
//! Each mode runs the same pipeline on submit: extract text from the upload,
//! build its prompt, send one generation request, parse the response into a
//! typed result, store it in the session slot. Any failure halts the
//! pipeline and is rendered inline on the Input form.

pub mod handlers;
pub mod models;
pub mod parser;
pub mod prompts;
