use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Frequency {
    #[default]
    Monthly,
    Quarterly,
}

impl Frequency {
    pub fn months(self) -> u32 {
        match self {
            Frequency::Monthly => 1,
            Frequency::Quarterly => 3,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ClientStatus {
    #[default]
    Active,
    Inactive,
}

/// How a billing day past the end of the target month is resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum DayOverflow {
    /// Day 31 in a 30-day month lands on the 30th.
    #[default]
    Clamp,
    /// Calendar rollover: the cycle advance and then the billing day both
    /// carry excess days into the following month, so day 31 in a 30-day
    /// month lands on the 1st of the next one.
    RollForward,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientBillingRecord {
    pub id: u64,
    pub name: String,
    pub amount: f64,
    pub frequency: Frequency,
    pub billing_day: u32,
    pub project_kickoff_date: NaiveDate,
    pub status: ClientStatus,
    pub last_payment_date: NaiveDate,
    pub next_payment_date: NaiveDate,
}

impl ClientBillingRecord {
    pub fn is_active(&self) -> bool {
        self.status == ClientStatus::Active
    }
}

/// Add/edit payload as submitted by the page. Everything is kept loose here
/// and checked by the registry, so a bad field becomes a named validation
/// error instead of a corrupt record.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ClientForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub amount: Value,
    #[serde(default)]
    pub frequency: Option<String>,
    #[serde(default)]
    pub billing_day: Value,
    #[serde(default)]
    pub project_kickoff_date: String,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub last_payment_date: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PaymentRow {
    pub id: u64,
    pub name: String,
    pub amount: f64,
    pub frequency: Frequency,
    pub next_payment_date: NaiveDate,
    pub days_until: i64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DashboardResponse {
    pub today: NaiveDate,
    pub monthly_revenue: f64,
    pub active_clients: usize,
    pub upcoming: Vec<PaymentRow>,
    pub overdue: Vec<PaymentRow>,
}
