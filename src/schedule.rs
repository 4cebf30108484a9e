use log::trace;
use std::collections::BTreeMap;
use std::fmt;

use crate::terms::MONTHS_PER_YEAR;

/// One period of an amortization schedule.
#[derive(Clone, Copy, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScheduleRow {
    pub period_index: u32,
    pub payment: f64,
    pub principal_portion: f64,
    pub interest_portion: f64,
    /// balance after this period's payment is applied
    pub remaining_balance: f64,
    pub year_index: u32,
}

impl fmt::Display for ScheduleRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "month {}, year {}, payment ${:.4}, principal ${:.4}, interest ${:.4}, remaining balance ${:.4}",
            self.period_index,
            self.year_index,
            self.payment,
            self.principal_portion,
            self.interest_portion,
            self.remaining_balance
        )
    }
}

/// Remaining balance at the close of one loan year, for coarse charts.
#[derive(Clone, Copy, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct YearlyBalance {
    pub year_index: u32,
    pub remaining_balance: f64,
}

/// Per-period point for a balance vs. principal/interest chart.
#[derive(Clone, Copy, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PeriodPoint {
    pub period_index: u32,
    pub remaining_balance: f64,
    pub principal_portion: f64,
    pub interest_portion: f64,
}

pub fn year_of_period(period_index: u32) -> u32 {
    period_index.div_ceil(MONTHS_PER_YEAR)
}

/// Builds the schedule as a left fold over period indices; each row starts
/// from the previous row's remaining balance, the first from `loan_amount`.
pub fn generate_schedule(
    loan_amount: f64,
    periodic_rate: f64,
    payment: f64,
    period_count: u32,
) -> Vec<ScheduleRow> {
    (1..=period_count).fold(
        Vec::with_capacity(period_count as usize),
        |mut rows, period_index| {
            let balance = rows
                .last()
                .map_or(loan_amount, |prev: &ScheduleRow| prev.remaining_balance);

            let interest_portion = balance * periodic_rate;
            let principal_portion = payment - interest_portion;
            let remaining_balance = balance - principal_portion;
            let year_index = year_of_period(period_index);

            trace!(
                "month {}, interest {}, principal {}, balance {}",
                period_index,
                interest_portion,
                principal_portion,
                remaining_balance
            );

            rows.push(ScheduleRow {
                period_index,
                payment,
                principal_portion,
                interest_portion,
                remaining_balance,
                year_index,
            });
            rows
        },
    )
}

/// Lowest remaining balance seen in each loan year, in ascending year order.
pub fn aggregate_by_year(schedule: &[ScheduleRow]) -> Vec<YearlyBalance> {
    let mut years: BTreeMap<u32, f64> = BTreeMap::new();
    for row in schedule {
        years
            .entry(row.year_index)
            .and_modify(|min| *min = min.min(row.remaining_balance))
            .or_insert(row.remaining_balance);
    }

    years
        .into_iter()
        .map(|(year_index, remaining_balance)| YearlyBalance {
            year_index,
            remaining_balance,
        })
        .collect()
}

pub fn period_series(schedule: &[ScheduleRow]) -> Vec<PeriodPoint> {
    schedule
        .iter()
        .map(|row| PeriodPoint {
            period_index: row.period_index,
            remaining_balance: row.remaining_balance,
            principal_portion: row.principal_portion,
            interest_portion: row.interest_portion,
        })
        .collect()
}
