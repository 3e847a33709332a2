//! Reader-based decoder implementation.
//!
//! _Requires Cargo feature `std`._

use std::io::{ErrorKind, Read};

use thiserror::Error;

use crate::sans::record::{self, BLOCK_LEN, RawBlock};

use super::FromEntries;

extern crate std;

/// Errors occurring while decoding from a reader.
#[derive(Debug, Error)]
pub enum Error {
    /// An error from the supplied reader.
    #[error(transparent)]
    Io(#[from] std::io::Error),
    /// Unexpectedly reached the end of the document inside a block.
    #[error("Unexpectedly reached the end of the document.")]
    EndOfDocument,
}

/// Decode entries from a reader of a history dump, publishing to a receiver.
///
/// Reading ends at a clean end of input on a block boundary; an end of
/// input inside a block is an error.
///
/// This method is also re-exported as `turnstile::avec::decode_reader`.
///
/// _Requires Cargo feature `std`._
pub fn decode(r: &mut impl Read, o: &mut impl FromEntries) -> Result<(), Error> {
    while let Some(block) = take(r)? {
        o.add_entry(record::unpack(block));
    }

    Ok(())
}

/// Take one block from a reader, or `None` at a clean end of input.
fn take(r: &mut impl Read) -> Result<Option<RawBlock>, Error> {
    let mut buf = [0; BLOCK_LEN];
    let mut n = 0;

    while n < BLOCK_LEN {
        match r.read(&mut buf[n..]) {
            Ok(0) if n == 0 => return Ok(None),
            Ok(0) => Err(Error::EndOfDocument)?,
            Ok(k) => n += k,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => Err(e)?,
        }
    }

    Ok(Some(buf))
}
