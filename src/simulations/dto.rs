use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use time::{Date, OffsetDateTime};

use super::repo_types::{PaymentTerm, Simulation};

time::serde::format_description!(iso_date, Date, "[year]-[month]-[day]");

/// Body of create and update. Any `rate_applied` the client sends is ignored.
#[derive(Debug, Deserialize)]
pub struct SimulationRequest {
    pub amount: Decimal,
    pub term: PaymentTerm,
    #[serde(with = "iso_date")]
    pub start_date: Date,
    #[serde(with = "iso_date")]
    pub end_date: Date,
}

#[derive(Debug, Serialize)]
pub struct SimulationResponse {
    pub id: i64,
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    pub term: PaymentTerm,
    #[serde(with = "iso_date")]
    pub start_date: Date,
    #[serde(with = "iso_date")]
    pub end_date: Date,
    #[serde(with = "rust_decimal::serde::float")]
    pub rate_applied: Decimal,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

impl From<Simulation> for SimulationResponse {
    fn from(s: Simulation) -> Self {
        Self {
            id: s.id,
            amount: s.amount,
            term: s.term,
            start_date: s.start_date,
            end_date: s.end_date,
            rate_applied: s.rate_applied,
            created_at: s.created_at,
        }
    }
}
