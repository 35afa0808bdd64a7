//! # Vote Widget Shared
//! This crate defines shared data structures and types used across the vote
//! widget ecosystem. It includes common definitions for vote choices, vote
//! records, write submissions, widget state, and toast severities.
pub mod types;
