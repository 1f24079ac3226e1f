use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use time::{Date, OffsetDateTime};

/// Payment frequency. Stored and sent on the wire as `Mensual` / `Anual`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "payment_term")]
pub enum PaymentTerm {
    #[serde(rename = "Mensual")]
    #[sqlx(rename = "Mensual")]
    Monthly,
    #[serde(rename = "Anual")]
    #[sqlx(rename = "Anual")]
    Annual,
}

/// Simulation record in the database.
#[derive(Debug, Clone, FromRow)]
pub struct Simulation {
    pub id: i64,
    pub user_id: i64,
    pub amount: Decimal,          // NUMERIC(14,2)
    pub term: PaymentTerm,
    pub start_date: Date,
    pub end_date: Date,
    pub rate_applied: Decimal,    // NUMERIC(6,4), always computed server-side
    pub created_at: OffsetDateTime,
}

/// Validated field set written on create and update.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationDraft {
    pub amount: Decimal,
    pub term: PaymentTerm,
    pub start_date: Date,
    pub end_date: Date,
    pub rate_applied: Decimal,
}
