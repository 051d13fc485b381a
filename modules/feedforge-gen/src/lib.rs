//! Procedural generator for the media-literacy quiz dataset.
//!
//! Produces a fixed-size batch of synthetic social posts — half attributed to
//! genuine accounts and labeled `Verified`, half deceptive and labeled
//! `Misinformation` — and writes them as one JSON array for the quiz
//! front-end to consume.

pub mod assemble;
pub mod catalog;
pub mod content;
