//! Learning Style - 8-bit learning style diagnostic
//!
//! Twelve Likert-scale questions across four MBTI-style axes are scored into
//! a four-letter code, which selects a learning profile with study tips.
//! Results can be exported as plain text or JSON.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
