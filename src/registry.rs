use crate::errors::ValidationError;
use crate::models::{ClientBillingRecord, ClientForm, ClientStatus, DayOverflow, Frequency};
use crate::schedule::next_payment_date;
use chrono::NaiveDate;
use serde_json::Value;
use tracing::info;

/// A mutation of the registry, applied with [`Registry::apply`].
#[derive(Debug, Clone)]
pub enum Action {
    Add(ClientForm),
    Update { id: u64, form: ClientForm },
    Remove(u64),
    MarkPaid(u64),
}

/// Ordered, in-memory collection of client billing records.
///
/// Every mutation either succeeds completely or leaves the registry as it
/// was: forms are validated before any record is touched, and unknown ids
/// are ignored.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    clients: Vec<ClientBillingRecord>,
    last_id: u64,
    overflow: DayOverflow,
}

impl Registry {
    pub fn new(overflow: DayOverflow) -> Self {
        Self {
            overflow,
            ..Self::default()
        }
    }

    /// Registry pre-filled with the sample clients shown on a fresh dashboard.
    pub fn with_demo_clients(overflow: DayOverflow) -> Result<Self, ValidationError> {
        let mut registry = Self::new(overflow);
        let samples = [
            ("TechCorp Inc", 5000, "monthly", 15, "2024-01-15", "2025-04-15"),
            ("StartupXYZ", 12000, "quarterly", 1, "2024-03-01", "2025-03-01"),
            ("Enterprise Solutions", 8000, "monthly", 28, "2024-02-28", "2025-04-28"),
        ];
        for (name, amount, frequency, day, kickoff, last_payment) in samples {
            let added = registry.add(ClientForm {
                name: name.to_string(),
                amount: Value::from(amount),
                frequency: Some(frequency.to_string()),
                billing_day: Value::from(day),
                project_kickoff_date: kickoff.to_string(),
                status: None,
                last_payment_date: None,
            })?;
            registry.set_last_payment(added.id, parse_date("last_payment_date", last_payment)?);
        }
        Ok(registry)
    }

    pub fn overflow(&self) -> DayOverflow {
        self.overflow
    }

    pub fn records(&self) -> &[ClientBillingRecord] {
        &self.clients
    }

    pub fn get(&self, id: u64) -> Option<&ClientBillingRecord> {
        self.clients.iter().find(|client| client.id == id)
    }

    pub fn len(&self) -> usize {
        self.clients.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clients.is_empty()
    }

    /// Applies one action and returns the record it touched, if any.
    pub fn apply(
        &mut self,
        action: Action,
        today: NaiveDate,
    ) -> Result<Option<ClientBillingRecord>, ValidationError> {
        match action {
            Action::Add(form) => self.add(form).map(Some),
            Action::Update { id, form } => self.update(id, form),
            Action::Remove(id) => Ok(self.remove(id)),
            Action::MarkPaid(id) => Ok(self.mark_paid(id, today)),
        }
    }

    pub fn add(&mut self, form: ClientForm) -> Result<ClientBillingRecord, ValidationError> {
        let fields = ValidatedForm::parse(&form)?;
        self.last_id += 1;

        let last_payment_date = fields.project_kickoff_date;
        let record = ClientBillingRecord {
            id: self.last_id,
            next_payment_date: next_payment_date(
                last_payment_date,
                fields.frequency,
                fields.billing_day,
                self.overflow,
            ),
            name: fields.name,
            amount: fields.amount,
            frequency: fields.frequency,
            billing_day: fields.billing_day,
            project_kickoff_date: fields.project_kickoff_date,
            status: fields.status,
            last_payment_date,
        };

        info!(id = record.id, name = %record.name, next = %record.next_payment_date, "client added");
        self.clients.push(record.clone());
        Ok(record)
    }

    /// Replaces the editable fields of `id`. The last payment date is kept
    /// unless the form carries one, rather than being reset to the kickoff
    /// date. Returns `Ok(None)` for an unknown id.
    pub fn update(
        &mut self,
        id: u64,
        form: ClientForm,
    ) -> Result<Option<ClientBillingRecord>, ValidationError> {
        let fields = ValidatedForm::parse(&form)?;
        let overflow = self.overflow;
        let Some(client) = self.clients.iter_mut().find(|client| client.id == id) else {
            return Ok(None);
        };

        client.name = fields.name;
        client.amount = fields.amount;
        client.frequency = fields.frequency;
        client.billing_day = fields.billing_day;
        client.project_kickoff_date = fields.project_kickoff_date;
        client.status = fields.status;
        if let Some(last_payment) = fields.last_payment_date {
            client.last_payment_date = last_payment;
        }
        reschedule(client, overflow);

        info!(id, next = %client.next_payment_date, "client updated");
        Ok(Some(client.clone()))
    }

    pub fn remove(&mut self, id: u64) -> Option<ClientBillingRecord> {
        let index = self.clients.iter().position(|client| client.id == id)?;
        let removed = self.clients.remove(index);
        info!(id, name = %removed.name, "client removed");
        Some(removed)
    }

    pub fn mark_paid(&mut self, id: u64, today: NaiveDate) -> Option<ClientBillingRecord> {
        let updated = self.set_last_payment(id, today)?;
        info!(id, paid = %today, next = %updated.next_payment_date, "payment recorded");
        Some(updated)
    }

    fn set_last_payment(&mut self, id: u64, date: NaiveDate) -> Option<ClientBillingRecord> {
        let overflow = self.overflow;
        let client = self.clients.iter_mut().find(|client| client.id == id)?;
        client.last_payment_date = date;
        reschedule(client, overflow);
        Some(client.clone())
    }
}

fn reschedule(client: &mut ClientBillingRecord, overflow: DayOverflow) {
    client.next_payment_date = next_payment_date(
        client.last_payment_date,
        client.frequency,
        client.billing_day,
        overflow,
    );
}

struct ValidatedForm {
    name: String,
    amount: f64,
    frequency: Frequency,
    billing_day: u32,
    project_kickoff_date: NaiveDate,
    status: ClientStatus,
    last_payment_date: Option<NaiveDate>,
}

impl ValidatedForm {
    fn parse(form: &ClientForm) -> Result<Self, ValidationError> {
        let name = form.name.trim();
        if name.is_empty() {
            return Err(ValidationError::new("name", "is required"));
        }

        let last_payment_date = match form.last_payment_date.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(raw) => Some(parse_date("last_payment_date", raw)?),
        };

        Ok(Self {
            name: name.to_string(),
            amount: parse_amount(&form.amount)?,
            frequency: parse_frequency(form.frequency.as_deref())?,
            billing_day: parse_billing_day(&form.billing_day)?,
            project_kickoff_date: parse_date("project_kickoff_date", &form.project_kickoff_date)?,
            status: parse_status(form.status.as_deref())?,
            last_payment_date,
        })
    }
}

/// Largest amount whose cents still fit the revenue totals.
const MAX_AMOUNT: f64 = 1e15;

fn parse_amount(value: &Value) -> Result<f64, ValidationError> {
    const FIELD: &str = "amount";
    let amount = match value {
        Value::Null => return Err(ValidationError::new(FIELD, "is required")),
        Value::Number(number) => number.as_f64(),
        Value::String(text) if text.trim().is_empty() => {
            return Err(ValidationError::new(FIELD, "is required"));
        }
        Value::String(text) => text.trim().parse::<f64>().ok(),
        _ => None,
    }
    .ok_or_else(|| ValidationError::new(FIELD, "must be a number"))?;

    if !amount.is_finite() {
        return Err(ValidationError::new(FIELD, "must be a finite number"));
    }
    if amount < 0.0 {
        return Err(ValidationError::new(FIELD, "must not be negative"));
    }
    if amount > MAX_AMOUNT {
        return Err(ValidationError::new(FIELD, "is too large"));
    }
    Ok((amount * 100.0).round() / 100.0)
}

fn parse_billing_day(value: &Value) -> Result<u32, ValidationError> {
    const FIELD: &str = "billing_day";
    let day = match value {
        Value::Null => return Err(ValidationError::new(FIELD, "is required")),
        Value::Number(number) => number.as_i64(),
        Value::String(text) if text.trim().is_empty() => {
            return Err(ValidationError::new(FIELD, "is required"));
        }
        Value::String(text) => text.trim().parse::<i64>().ok(),
        _ => None,
    }
    .ok_or_else(|| ValidationError::new(FIELD, "must be a whole number"))?;

    if !(1..=31).contains(&day) {
        return Err(ValidationError::new(FIELD, "must be between 1 and 31"));
    }
    Ok(day as u32)
}

fn parse_frequency(raw: Option<&str>) -> Result<Frequency, ValidationError> {
    match raw.map(|value| value.trim().to_ascii_lowercase()).as_deref() {
        None | Some("") | Some("monthly") => Ok(Frequency::Monthly),
        Some("quarterly") => Ok(Frequency::Quarterly),
        Some(_) => Err(ValidationError::new("frequency", "must be 'monthly' or 'quarterly'")),
    }
}

fn parse_status(raw: Option<&str>) -> Result<ClientStatus, ValidationError> {
    match raw.map(|value| value.trim().to_ascii_lowercase()).as_deref() {
        None | Some("") | Some("active") => Ok(ClientStatus::Active),
        Some("inactive") => Ok(ClientStatus::Inactive),
        Some(_) => Err(ValidationError::new("status", "must be 'active' or 'inactive'")),
    }
}

fn parse_date(field: &'static str, raw: &str) -> Result<NaiveDate, ValidationError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(ValidationError::new(field, "is required"));
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map_err(|_| ValidationError::new(field, "must be a date formatted YYYY-MM-DD"))
}
