//! Line-oriented text encoding of reservations.
//!
//! Each reservation is written as one block:
//!
//! ```text
//! REF:RB3X9K2A
//! DEST:MAKKAH
//! TIME:8.00AM
//! PRICE:2340.00
//! DISCOUNT:1260.00
//! NUM_ADULTS:2
//! NUM_KIDS:2
//! NUM_PASSENGERS:4
//! PASSENGER:Afiq,40,20,Economy Class
//! ...
//! END_RESERVATION
//! ```
//!
//! In a `PASSENGER:` line the name escapes `\` as `\\` and `,` as `\,` so
//! that commas inside names do not split the line.

use std::fmt::Write as _;

use crate::catalog::{DepartureSlot, Destination};
use crate::error::{Error, Result};
use crate::money::Money;
use crate::passenger::{Passenger, TravelClass};
use crate::reservation::{ReferenceNumber, Reservation};

const REF: &str = "REF:";
const DEST: &str = "DEST:";
const TIME: &str = "TIME:";
const PRICE: &str = "PRICE:";
const DISCOUNT: &str = "DISCOUNT:";
const NUM_ADULTS: &str = "NUM_ADULTS:";
const NUM_KIDS: &str = "NUM_KIDS:";
const NUM_PASSENGERS: &str = "NUM_PASSENGERS:";
const PASSENGER: &str = "PASSENGER:";
const END: &str = "END_RESERVATION";

/// Encodes reservations in order, one block each.
///
/// # Examples
///
/// ```
/// use raub::store::{decode, encode};
///
/// assert_eq!(encode(&[]), "");
/// assert!(decode("").is_empty());
/// ```
#[must_use]
pub fn encode(reservations: &[Reservation]) -> String {
    let mut out = String::new();
    for r in reservations {
        // Writing to a String cannot fail.
        let _ = writeln!(out, "{REF}{}", r.reference());
        let _ = writeln!(out, "{DEST}{}", r.destination());
        let _ = writeln!(out, "{TIME}{}", r.departure());
        let _ = writeln!(out, "{PRICE}{}", r.total_price());
        let _ = writeln!(out, "{DISCOUNT}{}", r.discount_applied());
        let _ = writeln!(out, "{NUM_ADULTS}{}", r.num_adults());
        let _ = writeln!(out, "{NUM_KIDS}{}", r.num_kids());
        let _ = writeln!(out, "{NUM_PASSENGERS}{}", r.passengers().len());
        for p in r.passengers() {
            let _ = writeln!(
                out,
                "{PASSENGER}{},{},{},{}",
                escape_name(p.name()),
                p.age(),
                p.seat(),
                p.travel_class()
            );
        }
        let _ = writeln!(out, "{END}");
    }
    out
}

/// Decodes every well-formed reservation, skipping malformed records.
///
/// Each skipped record is reported with a warning through the `log` facade.
#[must_use]
pub fn decode(text: &str) -> Vec<Reservation> {
    decode_records(text)
        .into_iter()
        .filter_map(|record| match record {
            Ok(reservation) => Some(reservation),
            Err(e) => {
                log::warn!("Skipping reservation: {e}");
                None
            }
        })
        .collect()
}

/// Decodes reservations, failing on the first malformed record.
///
/// # Errors
///
/// Returns [`Error::Decode`] naming the line where the malformed record
/// starts or where the offending field sits.
pub fn decode_strict(text: &str) -> Result<Vec<Reservation>> {
    decode_records(text).into_iter().collect()
}

fn escape_name(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    for c in name.chars() {
        if c == '\\' || c == ',' {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

/// Splits on unescaped commas, removing the escapes.
fn split_fields(data: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut chars = data.chars();
    while let Some(c) = chars.next() {
        match c {
            '\\' => current.extend(chars.next()),
            ',' => fields.push(std::mem::take(&mut current)),
            _ => current.push(c),
        }
    }
    fields.push(current);
    fields
}

fn decode_error(line: usize, message: impl Into<String>) -> Error {
    Error::Decode {
        line,
        message: message.into(),
    }
}

fn parse_field<T: std::str::FromStr>(line: usize, name: &str, value: &str) -> Result<T> {
    value
        .trim()
        .parse()
        .map_err(|_| decode_error(line, format!("unparseable {name} '{value}'")))
}

fn parse_passenger(line: usize, data: &str) -> Result<Passenger> {
    let fields = split_fields(data);
    let [name, age, seat, class] = fields.as_slice() else {
        return Err(decode_error(
            line,
            format!("passenger needs 4 fields, found {}", fields.len()),
        ));
    };

    let age: i64 = parse_field(line, "age", age)?;
    let seat: i32 = parse_field(line, "seat", seat)?;
    let class: TravelClass = parse_field(line, "travel class", class)?;
    let passenger =
        Passenger::new(name, age, seat).map_err(|e| decode_error(line, e.to_string()))?;
    if passenger.travel_class() != class {
        return Err(decode_error(
            line,
            format!("seat {} is not in {class}", passenger.seat()),
        ));
    }
    Ok(passenger)
}

/// A block being read, from its `REF:` line up to `END_RESERVATION`.
#[derive(Default)]
struct Block {
    start: usize,
    reference: Option<ReferenceNumber>,
    destination: Option<Destination>,
    departure: Option<DepartureSlot>,
    price: Option<Money>,
    discount: Option<Money>,
    num_adults: Option<usize>,
    num_kids: Option<usize>,
    passengers: Vec<Passenger>,
    error: Option<Error>,
}

impl Block {
    fn starting_at(start: usize, reference: &str) -> Self {
        let mut block = Self {
            start,
            ..Self::default()
        };
        match reference.parse() {
            Ok(r) => block.reference = Some(r),
            Err(e) => block.error = Some(decode_error(start, e.to_string())),
        }
        block
    }

    fn apply(&mut self, line: usize, text: &str) {
        if self.error.is_some() {
            return;
        }
        if let Err(e) = self.apply_field(line, text) {
            self.error = Some(e);
        }
    }

    fn apply_field(&mut self, line: usize, text: &str) -> Result<()> {
        if let Some(v) = text.strip_prefix(DEST) {
            self.destination = Some(parse_field(line, "destination", v)?);
        } else if let Some(v) = text.strip_prefix(TIME) {
            self.departure = Some(parse_field(line, "departure time", v)?);
        } else if let Some(v) = text.strip_prefix(PRICE) {
            self.price = Some(parse_field(line, "price", v)?);
        } else if let Some(v) = text.strip_prefix(DISCOUNT) {
            self.discount = Some(parse_field(line, "discount", v)?);
        } else if let Some(v) = text.strip_prefix(NUM_ADULTS) {
            self.num_adults = Some(parse_field(line, "adult count", v)?);
        } else if let Some(v) = text.strip_prefix(NUM_KIDS) {
            self.num_kids = Some(parse_field(line, "kid count", v)?);
        } else if text.starts_with(NUM_PASSENGERS) {
            // Informational only; the passenger lines are authoritative.
        } else if let Some(v) = text.strip_prefix(PASSENGER) {
            self.passengers.push(parse_passenger(line, v)?);
        } else {
            log::debug!("Ignoring unrecognised line {line}: {text}");
        }
        Ok(())
    }

    fn finish(self) -> Result<Reservation> {
        if let Some(e) = self.error {
            return Err(e);
        }
        let start = self.start;
        let missing = |field: &str| decode_error(start, format!("missing {field}"));

        let reservation = Reservation::from_parts(
            self.reference.ok_or_else(|| missing("REF"))?,
            self.destination.ok_or_else(|| missing("DEST"))?,
            self.departure.ok_or_else(|| missing("TIME"))?,
            self.price.ok_or_else(|| missing("PRICE"))?,
            self.discount.ok_or_else(|| missing("DISCOUNT"))?,
            self.passengers,
        )
        .map_err(|e| decode_error(start, e.to_string()))?;

        let adults = self.num_adults.ok_or_else(|| missing("NUM_ADULTS"))?;
        let kids = self.num_kids.ok_or_else(|| missing("NUM_KIDS"))?;
        if adults != reservation.num_adults() || kids != reservation.num_kids() {
            return Err(decode_error(
                start,
                format!(
                    "recorded {adults} adult(s) and {kids} kid(s) but passengers give {} and {}",
                    reservation.num_adults(),
                    reservation.num_kids()
                ),
            ));
        }
        Ok(reservation)
    }
}

fn decode_records(text: &str) -> Vec<Result<Reservation>> {
    let mut records = Vec::new();
    let mut current: Option<Block> = None;

    for (index, raw) in text.lines().enumerate() {
        let line = index + 1;
        let raw = raw.trim_end_matches('\r');
        if raw.trim().is_empty() {
            continue;
        }

        if let Some(reference) = raw.strip_prefix(REF) {
            if let Some(open) = current.take() {
                records.push(Err(decode_error(open.start, "missing END_RESERVATION")));
            }
            current = Some(Block::starting_at(line, reference.trim()));
        } else if raw == END {
            match current.take() {
                Some(block) => records.push(block.finish()),
                None => records.push(Err(decode_error(line, "END_RESERVATION without REF"))),
            }
        } else {
            match current.as_mut() {
                Some(block) => block.apply(line, raw),
                None => records.push(Err(decode_error(line, "field outside a reservation"))),
            }
        }
    }

    if let Some(open) = current {
        records.push(Err(decode_error(open.start, "missing END_RESERVATION")));
    }
    records
}
