//! Slice-based decoder implementation.

use thiserror::Error;

use crate::sans::record::{self, BLOCK_LEN};

use super::FromEntries;

/// Errors occurring while decoding from a slice.
#[derive(Debug, Error)]
pub enum Error {
    /// Unexpectedly reached the end of the slice.
    #[error("Unexpectedly reached the end of the slice.")]
    EndOfSlice,
}

/// Decode entries from a slice of history blocks, publishing to a receiver.
///
/// The slice must hold whole blocks; a trailing partial block is rejected
/// before any entry is published.
///
/// This method is also re-exported as `turnstile::avec::decode_slice`.
pub fn decode(r: &[u8], o: &mut impl FromEntries) -> Result<(), Error> {
    if r.len() % BLOCK_LEN != 0 {
        Err(Error::EndOfSlice)?;
    }

    for block in r.chunks_exact(BLOCK_LEN) {
        o.add_entry(record::unpack(block.try_into().unwrap()));
    }

    Ok(())
}
