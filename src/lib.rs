#![no_std]

//! An efficient decoder for the journey histories stored on FeliCa-family
//! transit cards.
//!
//! A card keeps its most recent transactions in a rolling ring of fixed
//! sixteen-byte records. Turnstile unpacks each record into a structured
//! history entry, leaving hardware access and presentation to its callers.
//!
//! Most users should begin with the functions in the [`avec`] module. These
//! are suited to decoding entries from cards, dump files, and data slices.
//! For applications working with single blocks, the [`sans`] module exposes
//! the underlying record decoder directly.
//!
//! ## Cargo Features
//!
//! The following crate feature flags are available:
//!
//! - `std`: enable reader-based decoder (default).

pub mod avec;
pub mod sans;
