//! Fixed-rate mortgage amortization: the monthly payment, the full
//! period-by-period schedule and the yearly balance series used for charts.

pub mod error;
pub mod payment;
pub mod schedule;
pub mod summary;
pub mod terms;

pub use error::{MortgageError, Result};
pub use payment::compute_monthly_payment;
pub use schedule::{
    aggregate_by_year, generate_schedule, period_series, year_of_period, PeriodPoint,
    ScheduleRow, YearlyBalance,
};
pub use summary::{compute_summary, format_currency, SummaryMetrics};
pub use terms::{LoanTerms, MAX_TERM_YEARS, MONTHS_PER_YEAR};

/// Everything computed for one set of loan terms.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Amortization {
    pub terms: LoanTerms,
    pub summary: SummaryMetrics,
    pub schedule: Vec<ScheduleRow>,
}

impl Amortization {
    pub fn from_terms(terms: LoanTerms) -> Result<Self> {
        let loan_amount = terms.loan_amount();
        let payment =
            compute_monthly_payment(loan_amount, terms.periodic_rate(), terms.period_count())?;

        let summary = compute_summary(loan_amount, payment, terms.period_count());
        if !summary.total_paid.is_finite() || !summary.total_interest_paid.is_finite() {
            return Err(MortgageError::ArithmeticDegenerate {
                context: "total paid".to_string(),
            });
        }

        Ok(Self {
            terms,
            summary,
            schedule: generate_schedule(
                loan_amount,
                terms.periodic_rate(),
                payment,
                terms.period_count(),
            ),
        })
    }

    pub fn yearly_balances(&self) -> Vec<YearlyBalance> {
        aggregate_by_year(&self.schedule)
    }

    pub fn period_series(&self) -> Vec<PeriodPoint> {
        period_series(&self.schedule)
    }
}

/// Validates the raw inputs and computes the summary and schedule.
/// Invalid input fails before any schedule is generated.
pub fn amortize(
    home_value: f64,
    down_payment: f64,
    annual_rate_percent: f64,
    term_years: u32,
) -> Result<Amortization> {
    let terms = LoanTerms::new(home_value, down_payment, annual_rate_percent, term_years)?;
    Amortization::from_terms(terms)
}
