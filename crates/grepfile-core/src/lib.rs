//! # GrepFile Core
//!
//! Runtime-free logic for GrepFile: the streamed message model, the
//! newline-delimited JSON frame decoder, the message classifier, the
//! settle-once query session, and the query error taxonomy.
//!
//! This crate contains no tokio, reqwest, or filesystem I/O. The root
//! `grepfile` crate feeds transport bytes through these pieces.

pub mod classify;
pub mod error;
pub mod frame;
pub mod models;
pub mod session;
