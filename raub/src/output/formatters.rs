//! Output formatter implementations.

use std::fmt::Write as _;

use serde::Serialize;

use crate::error::{Error, Result};
use crate::report::Report;
use crate::reservation::Reservation;

use super::{FlightDetails, OutputFormatter};

const RULE: &str =
    "__________________________________________________________________________________________";

/// Formatter for e-boarding passes and plain-text totals.
pub struct HumanFormatter {
    details: FlightDetails,
}

impl HumanFormatter {
    /// Create a new human formatter printing the given flight details.
    #[must_use]
    pub const fn new(details: FlightDetails) -> Self {
        Self { details }
    }
}

impl OutputFormatter for HumanFormatter {
    fn format_reservation(&self, reservation: &Reservation) -> Result<String> {
        let FlightDetails {
            origin,
            flight_number,
            currency,
        } = &self.details;
        let mut out = String::new();

        let _ = writeln!(out, "{RULE}\n");
        let _ = writeln!(
            out,
            "          RAUB AIRLINE             e-Boarding Pass         [Reference Number : {}]",
            reservation.reference()
        );
        let _ = writeln!(out, "{RULE}\n");
        let _ = writeln!(out, "        PASSENGER & FLIGHT DETAILS");
        for p in reservation.passengers() {
            let _ = writeln!(out);
            let _ = writeln!(out, "        {}", p.name());
            let _ = writeln!(
                out,
                "        Age {:<10}Flight  {:<24}{}",
                p.age(),
                flight_number,
                p.travel_class()
            );
            let _ = writeln!(out, "        Seat {}", p.seat());
            let _ = writeln!(
                out,
                "        {origin} to {}     {}",
                reservation.destination(),
                reservation.departure()
            );
        }
        let _ = writeln!(out);
        if !reservation.discount_applied().is_zero() {
            let _ = writeln!(
                out,
                "        DISCOUNT     : {currency}{}",
                reservation.discount_applied()
            );
        }
        let _ = writeln!(
            out,
            "        TOTAL AMOUNT : {currency}{}",
            reservation.total_price()
        );
        out.push_str(RULE);
        Ok(out)
    }

    fn format_report(&self, report: &Report) -> Result<String> {
        let currency = &self.details.currency;
        let mut lines = vec![
            "SALES REPORT".to_string(),
            format!("  Reservations          : {}", report.total_reservations),
            format!(
                "  Tickets sold          : {} ({} adult(s), {} kid(s))",
                report.total_tickets, report.total_adults, report.total_kids
            ),
            format!("  Revenue               : {currency}{}", report.total_revenue),
            format!("  Discounts given       : {currency}{}", report.total_discount),
            format!(
                "  Gross before discount : {currency}{}",
                report.gross_before_discount()
            ),
        ];

        if !report.by_destination.is_empty() {
            lines.push("  By destination:".to_string());
            for (destination, count) in &report.by_destination {
                lines.push(format!("    {destination:<14}{count}"));
            }
        }

        Ok(lines.join("\n"))
    }
}

/// Formatter for JSON output.
pub struct JsonFormatter;

impl JsonFormatter {
    fn to_json<T: Serialize>(value: &T) -> Result<String> {
        serde_json::to_string_pretty(value).map_err(|e| Error::Validation {
            field: "json_output".to_string(),
            message: format!("failed to serialize to JSON: {e}"),
        })
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_reservation(&self, reservation: &Reservation) -> Result<String> {
        Self::to_json(reservation)
    }

    fn format_report(&self, report: &Report) -> Result<String> {
        Self::to_json(report)
    }
}
