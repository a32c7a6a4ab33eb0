use crate::models::{ClientBillingRecord, DashboardResponse, Frequency, PaymentRow};
use crate::schedule::days_until;
use chrono::{Duration, Local, NaiveDate};

pub const UPCOMING_WINDOW_DAYS: i64 = 7;

pub fn build_dashboard(records: &[ClientBillingRecord]) -> DashboardResponse {
    build_dashboard_at(Local::now().date_naive(), records)
}

pub fn build_dashboard_at(today: NaiveDate, records: &[ClientBillingRecord]) -> DashboardResponse {
    let to_row = |client: &ClientBillingRecord| PaymentRow {
        id: client.id,
        name: client.name.clone(),
        amount: client.amount,
        frequency: client.frequency,
        next_payment_date: client.next_payment_date,
        days_until: days_until(today, client.next_payment_date),
    };

    DashboardResponse {
        today,
        monthly_revenue: monthly_equivalent_revenue(records),
        active_clients: records.iter().filter(|client| client.is_active()).count(),
        upcoming: upcoming_payments(records, today).map(to_row).collect(),
        overdue: overdue_payments(records, today).map(to_row).collect(),
    }
}

/// Active clients due between today and a week from today, both inclusive.
pub fn upcoming_payments(
    records: &[ClientBillingRecord],
    today: NaiveDate,
) -> impl Iterator<Item = &ClientBillingRecord> {
    let window_end = today + Duration::days(UPCOMING_WINDOW_DAYS);
    records.iter().filter(move |client| {
        client.is_active() && client.next_payment_date >= today && client.next_payment_date <= window_end
    })
}

pub fn overdue_payments(
    records: &[ClientBillingRecord],
    today: NaiveDate,
) -> impl Iterator<Item = &ClientBillingRecord> {
    records
        .iter()
        .filter(move |client| client.is_active() && client.next_payment_date < today)
}

/// Run rate of active clients, with quarterly charges spread over three
/// months. Summed in cents per cycle so record order cannot change the total.
pub fn monthly_equivalent_revenue(records: &[ClientBillingRecord]) -> f64 {
    let (monthly_cents, quarterly_cents) = records
        .iter()
        .filter(|client| client.is_active())
        .fold((0i64, 0i64), |(monthly, quarterly), client| {
            let cents = (client.amount * 100.0).round() as i64;
            match client.frequency {
                Frequency::Monthly => (monthly.saturating_add(cents), quarterly),
                Frequency::Quarterly => (monthly, quarterly.saturating_add(cents)),
            }
        });

    monthly_cents as f64 / 100.0 + quarterly_cents as f64 / 300.0
}

/// US-dollar display string, e.g. `$12,345.67`.
pub fn format_usd(amount: f64) -> String {
    let cents = (amount.abs() * 100.0).round() as u64;
    let dollars = (cents / 100).to_string();

    let mut grouped = String::with_capacity(dollars.len() + dollars.len() / 3);
    for (index, digit) in dollars.chars().enumerate() {
        if index > 0 && (dollars.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if amount < 0.0 && cents > 0 { "-" } else { "" };
    format!("{sign}${grouped}.{:02}", cents % 100)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ClientStatus;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn client(id: u64, amount: f64, frequency: Frequency, next: NaiveDate) -> ClientBillingRecord {
        ClientBillingRecord {
            id,
            name: format!("client-{id}"),
            amount,
            frequency,
            billing_day: 1,
            project_kickoff_date: date(2024, 1, 1),
            status: ClientStatus::Active,
            last_payment_date: date(2024, 1, 1),
            next_payment_date: next,
        }
    }

    fn ids<'a>(records: impl Iterator<Item = &'a ClientBillingRecord>) -> Vec<u64> {
        records.map(|client| client.id).collect()
    }

    #[test]
    fn past_due_date_is_overdue_not_upcoming() {
        let today = date(2025, 5, 10);
        let records = vec![client(1, 8000.0, Frequency::Monthly, date(2025, 4, 28))];

        assert_eq!(ids(overdue_payments(&records, today)), vec![1]);
        assert!(ids(upcoming_payments(&records, today)).is_empty());
    }

    #[test]
    fn upcoming_window_is_inclusive_on_both_ends() {
        let today = date(2025, 5, 10);
        let records = vec![
            client(1, 1.0, Frequency::Monthly, date(2025, 5, 9)),
            client(2, 1.0, Frequency::Monthly, date(2025, 5, 10)),
            client(3, 1.0, Frequency::Monthly, date(2025, 5, 17)),
            client(4, 1.0, Frequency::Monthly, date(2025, 5, 18)),
        ];

        assert_eq!(ids(upcoming_payments(&records, today)), vec![2, 3]);
        assert_eq!(ids(overdue_payments(&records, today)), vec![1]);
    }

    #[test]
    fn inactive_clients_are_never_classified() {
        let today = date(2025, 5, 10);
        let mut late = client(1, 1.0, Frequency::Monthly, date(2025, 5, 1));
        let mut soon = client(2, 1.0, Frequency::Monthly, date(2025, 5, 12));
        late.status = ClientStatus::Inactive;
        soon.status = ClientStatus::Inactive;
        let records = vec![late, soon];

        assert!(ids(overdue_payments(&records, today)).is_empty());
        assert!(ids(upcoming_payments(&records, today)).is_empty());
    }

    #[test]
    fn classification_keeps_registry_order() {
        let today = date(2025, 5, 10);
        let records = vec![
            client(5, 1.0, Frequency::Monthly, date(2025, 5, 15)),
            client(2, 1.0, Frequency::Monthly, date(2025, 5, 11)),
            client(9, 1.0, Frequency::Monthly, date(2025, 5, 16)),
        ];
        assert_eq!(ids(upcoming_payments(&records, today)), vec![5, 2, 9]);
    }

    #[test]
    fn revenue_normalizes_quarterly_and_skips_inactive() {
        let next = date(2025, 6, 1);
        let mut paused = client(3, 8000.0, Frequency::Monthly, next);
        paused.status = ClientStatus::Inactive;
        let records = vec![
            client(1, 5000.0, Frequency::Monthly, next),
            client(2, 12000.0, Frequency::Quarterly, next),
            paused,
        ];

        assert_eq!(monthly_equivalent_revenue(&records), 9000.0);
        assert_eq!(monthly_equivalent_revenue(&[]), 0.0);
    }

    #[test]
    fn revenue_is_order_independent() {
        let next = date(2025, 6, 1);
        let mut records = vec![
            client(1, 0.1, Frequency::Monthly, next),
            client(2, 100.01, Frequency::Quarterly, next),
            client(3, 0.2, Frequency::Monthly, next),
            client(4, 3333.33, Frequency::Quarterly, next),
            client(5, 1e7 + 0.07, Frequency::Monthly, next),
        ];
        let forward = monthly_equivalent_revenue(&records);
        records.reverse();
        assert_eq!(monthly_equivalent_revenue(&records), forward);
        records.swap(0, 3);
        assert_eq!(monthly_equivalent_revenue(&records), forward);
    }

    #[test]
    fn dashboard_reports_day_offsets() {
        let today = date(2025, 5, 10);
        let mut paused = client(3, 100.0, Frequency::Monthly, date(2025, 5, 11));
        paused.status = ClientStatus::Inactive;
        let records = vec![
            client(1, 8000.0, Frequency::Monthly, date(2025, 4, 28)),
            client(2, 5000.0, Frequency::Monthly, date(2025, 5, 15)),
            paused,
        ];

        let dashboard = build_dashboard_at(today, &records);
        assert_eq!(dashboard.today, today);
        assert_eq!(dashboard.active_clients, 2);
        assert_eq!(dashboard.monthly_revenue, 13000.0);
        assert_eq!(dashboard.overdue.len(), 1);
        assert_eq!(dashboard.overdue[0].days_until, -12);
        assert_eq!(dashboard.upcoming.len(), 1);
        assert_eq!(dashboard.upcoming[0].id, 2);
        assert_eq!(dashboard.upcoming[0].days_until, 5);
    }

    #[test]
    fn usd_formatting_groups_thousands() {
        assert_eq!(format_usd(0.0), "$0.00");
        assert_eq!(format_usd(5.5), "$5.50");
        assert_eq!(format_usd(999.999), "$1,000.00");
        assert_eq!(format_usd(12345.67), "$12,345.67");
        assert_eq!(format_usd(1234567.0), "$1,234,567.00");
        assert_eq!(format_usd(-4000.0), "-$4,000.00");
    }
}
