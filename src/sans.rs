//! Pure decoding of raw history blocks.
//!
//! This module is free of input concerns: callers obtain a raw block by
//! whatever means suit them and receive a structured entry in return. See
//! [`crate::avec`] for implementations covering common input patterns.
//!
//! # Record Layout
//!
//! Every history record occupies exactly sixteen bytes. The outer positions
//! are fixed; bytes six through nine change meaning with the terminal type
//! recorded in byte zero:
//!
//! | Bytes | Content |
//! |---|---|
//! | 0 | Terminal type |
//! | 1 | Transaction type |
//! | 2–3 | Unused |
//! | 4–5 | Date, packed big-endian (year/month/day in 7/4/5 bits) |
//! | 6–9 | Terminal-dependent: entry and exit station codes, or a bus line and stop, or a time of day and shop code |
//! | 10–11 | Balance, halves exchanged |
//! | 12–15 | Record counter, big-endian; the low byte is a region code |
//!
//! The layout is imposed by the card hardware and must be matched
//! byte-for-byte; it is not configurable.

pub mod code;
pub mod record;
pub mod stamp;

pub use record::decode;
