#![cfg(feature = "std")]

use std::{convert::Infallible, path::Path};

use csv::ReaderBuilder;

use turnstile::avec::{FromEntries, card::BlockSource};
use turnstile::sans::record::{BLOCK_LEN, HistoryEntry, RawBlock};

#[test]
fn decode_slice_commuter_day() {
    const PATH: &str = "fixtures/commuter-day.bin";
    let data = std::fs::read(PATH).unwrap();
    let mut validator = Validator::new(PATH);
    turnstile::avec::decode_slice(&data, &mut validator).unwrap();
    validator.finish();
}

#[test]
fn decode_slice_topup_errands() {
    const PATH: &str = "fixtures/topup-errands.bin";
    let data = std::fs::read(PATH).unwrap();
    let mut validator = Validator::new(PATH);
    turnstile::avec::decode_slice(&data, &mut validator).unwrap();
    validator.finish();
}

#[test]
fn decode_reader_commuter_day() {
    const PATH: &str = "fixtures/commuter-day.bin";
    let mut file = std::fs::File::open(PATH).unwrap();
    let mut validator = Validator::new(PATH);
    turnstile::avec::decode_reader(&mut file, &mut validator).unwrap();
    validator.finish();
}

#[test]
fn decode_reader_topup_errands() {
    const PATH: &str = "fixtures/topup-errands.bin";
    let mut file = std::fs::File::open(PATH).unwrap();
    let mut validator = Validator::new(PATH);
    turnstile::avec::decode_reader(&mut file, &mut validator).unwrap();
    validator.finish();
}

#[test]
fn decode_card_commuter_day() {
    const PATH: &str = "fixtures/commuter-day.bin";
    let mut card = Dump::new(PATH);
    let mut validator = Validator::new(PATH);
    turnstile::avec::decode_card(&mut card, &mut validator).unwrap();
    validator.finish();
}

#[test]
fn decode_card_topup_errands() {
    const PATH: &str = "fixtures/topup-errands.bin";
    let mut card = Dump::new(PATH);
    let mut validator = Validator::new(PATH);
    turnstile::avec::decode_card(&mut card, &mut validator).unwrap();
    validator.finish();
}

/// A block source replaying a captured dump as if read from a card.
struct Dump(Vec<RawBlock>);

impl Dump {
    fn new(path: impl AsRef<Path>) -> Self {
        let data = std::fs::read(path).unwrap();

        Self(
            data.chunks_exact(BLOCK_LEN)
                .map(|r| r.try_into().unwrap())
                .collect(),
        )
    }
}

impl BlockSource for Dump {
    type Error = Infallible;

    fn read_block(&mut self, service: u16, index: u8) -> Result<Option<RawBlock>, Infallible> {
        assert_eq!(service, turnstile::avec::card::HISTORY_SERVICE);
        Ok(self.0.get(index as usize).copied())
    }
}

/// A receiver checking each published entry against a row of expected
/// values stored beside the dump.
struct Validator(Vec<Vec<String>>);

impl Validator {
    fn new(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().with_extension("csv");

        let mut reader = ReaderBuilder::new()
            .flexible(true)
            .has_headers(false)
            .from_path(path)
            .unwrap();

        let expected: Vec<Vec<String>> = reader
            .records()
            .map(|r| r.unwrap().iter().map(|f| f.to_string()).collect())
            .collect();

        Self(expected)
    }

    fn finish(self) {
        assert!(self.0.is_empty(), "Expected further entries: {:?}", self.0);
    }
}

impl FromEntries for Validator {
    fn add_entry(&mut self, entry: HistoryEntry) {
        let row = self.0.remove(0);

        let time = entry.time();
        let hour = time.map(|t| t.hour.to_string()).unwrap_or_default();
        let minute = time.map(|t| t.minute.to_string()).unwrap_or_default();
        let exit_line = entry.exit_line().map(|v| v.to_string()).unwrap_or_default();
        let exit_station = entry
            .exit_station()
            .map(|v| v.to_string())
            .unwrap_or_default();

        let fields = [
            format!("{:?}", entry.terminal),
            format!("{:?}", entry.transaction),
            entry.date.year.to_string(),
            entry.date.month.to_string(),
            entry.date.day.to_string(),
            hour,
            minute,
            entry.entry_line().to_string(),
            entry.entry_station().to_string(),
            exit_line,
            exit_station,
            entry.balance.to_string(),
            entry.sequence.to_string(),
            entry.region.to_string(),
        ];

        assert_eq!(row, fields);
    }
}
