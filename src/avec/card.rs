//! Card-backed decoder implementation.

use crate::sans::record::{self, RawBlock};

use super::FromEntries;

/// The service code selecting the journey history blocks of a transit card.
pub const HISTORY_SERVICE: u16 = 0x090F;

/// Access to the data blocks of a card.
///
/// Implementations wrap a hardware access library: polling for a card,
/// issuing the unencrypted read command, and releasing the device are their
/// concern. The decoder drives this interface strictly sequentially, one
/// block at a time.
pub trait BlockSource {
    /// An error surfaced by the underlying hardware access.
    type Error;

    /// Read the block at a sequential index within a service, or `None`
    /// once the card reports no further blocks.
    ///
    /// A returned block is always complete. A source that cannot supply all
    /// sixteen bytes of a block must report exhaustion or an error, never a
    /// short read.
    fn read_block(&mut self, service: u16, index: u8) -> Result<Option<RawBlock>, Self::Error>;
}

/// Decode the history entries of a card, publishing to a receiver.
///
/// Blocks are requested by ascending index until the source reports
/// exhaustion, yielding entries from the most recent transaction backward.
///
/// This method is also re-exported as `turnstile::avec::decode_card`.
pub fn decode<S: BlockSource>(s: &mut S, o: &mut impl FromEntries) -> Result<(), S::Error> {
    for index in 0..=u8::MAX {
        match s.read_block(HISTORY_SERVICE, index)? {
            Some(block) => o.add_entry(record::unpack(block)),
            None => break,
        }
    }

    Ok(())
}
