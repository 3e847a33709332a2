//! Decoding of single history records.

use thiserror::Error;
use zerocopy::FromBytes;

use super::{
    code::{TerminalType, TransactionType},
    stamp::{Date, Time},
};

/// The length in bytes of a raw history block.
pub const BLOCK_LEN: usize = 16;

/// A raw history block, as read from the card.
pub type RawBlock = [u8; BLOCK_LEN];

/// An error decoding a history block.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// Block of a length other than [`BLOCK_LEN`].
    #[error("Incorrect block length ({0}).")]
    InvalidLength(usize),
}

/// A decoded journey history entry.
///
/// The layout-dependent fields live in [`Trip`]; the accessor methods read
/// them uniformly across layouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HistoryEntry {
    /// The kind of device that wrote the record.
    pub terminal: TerminalType,
    /// The nature of the transaction.
    pub transaction: TransactionType,
    /// The calendar date of the transaction.
    pub date: Date,
    /// The layout-dependent journey fields.
    pub trip: Trip,
    /// The balance remaining after the transaction, in card currency units.
    pub balance: u16,
    /// The rolling record counter maintained by the card.
    pub sequence: u32,
    /// The operational region of the writing terminal.
    pub region: u8,
}

/// The journey fields of a history entry, keyed by the terminal family that
/// wrote it.
///
/// A field missing from a variant was never recorded for that family; a
/// zero in a present field is a legitimate code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trip {
    /// Rail travel through entry and exit gates.
    Rail {
        entry_line: u8,
        entry_station: u8,
        exit_line: u8,
        exit_station: u8,
    },
    /// Bus travel recorded by an on-vehicle terminal.
    Bus {
        entry_line: u16,
        entry_station: u16,
    },
    /// A purchase at a shop or vending machine, stamped with a time of day.
    Purchase {
        time: Time,
        entry_line: u8,
        entry_station: u8,
    },
}

impl HistoryEntry {
    /// The time of day, stamped by shop and vending machine terminals only.
    pub fn time(&self) -> Option<Time> {
        match self.trip {
            Trip::Purchase { time, .. } => Some(time),
            _ => None,
        }
    }

    /// The line code of the entry station, bus line, or shop.
    pub fn entry_line(&self) -> u16 {
        match self.trip {
            Trip::Rail { entry_line, .. } => entry_line.into(),
            Trip::Bus { entry_line, .. } => entry_line,
            Trip::Purchase { entry_line, .. } => entry_line.into(),
        }
    }

    /// The station code of the entry station, bus stop, or shop.
    pub fn entry_station(&self) -> u16 {
        match self.trip {
            Trip::Rail { entry_station, .. } => entry_station.into(),
            Trip::Bus { entry_station, .. } => entry_station,
            Trip::Purchase { entry_station, .. } => entry_station.into(),
        }
    }

    /// The line code of the exit station, recorded for rail travel only.
    pub fn exit_line(&self) -> Option<u8> {
        match self.trip {
            Trip::Rail { exit_line, .. } => Some(exit_line),
            _ => None,
        }
    }

    /// The station code of the exit station, recorded for rail travel only.
    pub fn exit_station(&self) -> Option<u8> {
        match self.trip {
            Trip::Rail { exit_station, .. } => Some(exit_station),
            _ => None,
        }
    }
}

/// Decode a history entry from a raw block, validating its length.
///
/// Unrecognized terminal and transaction codes are not errors; the hardware
/// may emit codes not yet catalogued, and these decode into the enums'
/// `Unknown` variants.
pub fn decode(r: &[u8]) -> Result<HistoryEntry, DecodeError> {
    let block: RawBlock = r
        .try_into()
        .map_err(|_| DecodeError::InvalidLength(r.len()))?;

    Ok(unpack(block))
}

/// Decode a history entry from a block of the exact length.
pub fn unpack(r: RawBlock) -> HistoryEntry {
    #[repr(C, packed)]
    #[derive(FromBytes)]
    struct RawEntry {
        terminal: u8,
        transaction: u8,
        _unused: [u8; 2],
        date: [u8; 2],
        lead: [u8; 2],
        trail: [u8; 2],
        balance: [u8; 2],
        counter: [u8; 4],
    }

    let RawEntry {
        terminal,
        transaction,
        date,
        lead,
        trail,
        balance,
        counter,
        ..
    } = zerocopy::transmute!(r);

    let terminal = TerminalType::from_code(terminal);
    let transaction = TransactionType::from_code(transaction);

    let date = Date::unpack(date);

    let trip = match terminal {
        TerminalType::Retail | TerminalType::VendingMachine => Trip::Purchase {
            time: Time::unpack(lead),
            entry_line: trail[0],
            entry_station: trail[1],
        },
        TerminalType::Vehicle => Trip::Bus {
            entry_line: u16::from_be_bytes(lead),
            entry_station: u16::from_be_bytes(trail),
        },
        _ => Trip::Rail {
            entry_line: lead[0],
            entry_station: lead[1],
            exit_line: trail[0],
            exit_station: trail[1],
        },
    };

    // The balance halves are stored exchanged relative to every other
    // multi-byte field in the record.
    let balance = u16::from_be_bytes(balance).swap_bytes();

    let counter = u32::from_be_bytes(counter);
    let region = (counter & 0xFF) as u8;
    let sequence = counter >> 8;

    HistoryEntry {
        terminal,
        transaction,
        date,
        trip,
        balance,
        sequence,
        region,
    }
}
