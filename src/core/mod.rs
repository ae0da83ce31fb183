//! Core decoding primitives
//!
//! This module contains the building blocks shared by the namespace
//! strategies:
//! - Name: packed-name splitting, SIMD-accelerated via memchr

pub mod name;
