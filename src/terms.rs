use log::debug;
use std::fmt;

use crate::error::{MortgageError, Result};

pub const MONTHS_PER_YEAR: u32 = 12;
pub const MAX_TERM_YEARS: u32 = 100;

/// The four raw inputs of a fixed-rate mortgage, validated once at
/// construction. Every derived quantity is computed from these fields.
#[derive(Clone, Copy, PartialEq, Debug)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "RawLoanTerms", into = "RawLoanTerms")
)]
pub struct LoanTerms {
    home_value: f64,
    down_payment: f64,
    annual_rate_percent: f64,
    term_years: u32,
}

impl LoanTerms {
    pub fn new(
        home_value: f64,
        down_payment: f64,
        annual_rate_percent: f64,
        term_years: u32,
    ) -> Result<Self> {
        check_amount("home_value", home_value)?;
        check_amount("down_payment", down_payment)?;

        if !annual_rate_percent.is_finite() || annual_rate_percent <= 0. {
            return Err(MortgageError::invalid(
                "annual_rate_percent",
                format!("must be a positive number, got {}", annual_rate_percent),
            ));
        }
        if term_years < 1 {
            return Err(MortgageError::invalid("term_years", "must be at least 1"));
        }
        if term_years > MAX_TERM_YEARS {
            return Err(MortgageError::invalid(
                "term_years",
                format!("must be at most {}, got {}", MAX_TERM_YEARS, term_years),
            ));
        }
        // a negative loan amount would yield a negative payment
        if down_payment > home_value {
            return Err(MortgageError::invalid(
                "down_payment",
                format!(
                    "down payment {} exceeds home value {}",
                    down_payment, home_value
                ),
            ));
        }

        let terms = Self {
            home_value,
            down_payment,
            annual_rate_percent,
            term_years,
        };
        debug!(
            "loan amount {}, periodic rate {}, period count {}",
            terms.loan_amount(),
            terms.periodic_rate(),
            terms.period_count()
        );
        Ok(terms)
    }

    pub fn home_value(&self) -> f64 {
        self.home_value
    }

    pub fn down_payment(&self) -> f64 {
        self.down_payment
    }

    pub fn annual_rate_percent(&self) -> f64 {
        self.annual_rate_percent
    }

    pub fn term_years(&self) -> u32 {
        self.term_years
    }

    pub fn loan_amount(&self) -> f64 {
        self.home_value - self.down_payment
    }

    /// monthly rate as a fraction, i.e. 6.7 (%) becomes 0.005583...
    pub fn periodic_rate(&self) -> f64 {
        (self.annual_rate_percent / 100.) / MONTHS_PER_YEAR as f64
    }

    pub fn period_count(&self) -> u32 {
        self.term_years * MONTHS_PER_YEAR
    }
}

impl Default for LoanTerms {
    // initial values of the calculator form
    fn default() -> Self {
        Self {
            home_value: 350000.,
            down_payment: 30000.,
            annual_rate_percent: 6.7,
            term_years: 30,
        }
    }
}

impl fmt::Display for LoanTerms {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "home value ${:.2}, down payment ${:.2}, rate {}%, term {} years",
            self.home_value, self.down_payment, self.annual_rate_percent, self.term_years
        )
    }
}

fn check_amount(field: &str, amount: f64) -> Result<()> {
    if !amount.is_finite() || amount < 0. {
        return Err(MortgageError::invalid(
            field,
            format!("must be a non-negative amount, got {}", amount),
        ));
    }
    Ok(())
}

#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct RawLoanTerms {
    home_value: f64,
    down_payment: f64,
    annual_rate_percent: f64,
    term_years: u32,
}

#[cfg(feature = "serde")]
impl TryFrom<RawLoanTerms> for LoanTerms {
    type Error = MortgageError;

    fn try_from(raw: RawLoanTerms) -> Result<Self> {
        LoanTerms::new(
            raw.home_value,
            raw.down_payment,
            raw.annual_rate_percent,
            raw.term_years,
        )
    }
}

#[cfg(feature = "serde")]
impl From<LoanTerms> for RawLoanTerms {
    fn from(terms: LoanTerms) -> Self {
        Self {
            home_value: terms.home_value,
            down_payment: terms.down_payment,
            annual_rate_percent: terms.annual_rate_percent,
            term_years: terms.term_years,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{LoanTerms, MAX_TERM_YEARS};
    use crate::error::MortgageError;
    use test_log::test;

    fn rejected_field(result: crate::Result<LoanTerms>) -> String {
        match result {
            Err(MortgageError::InvalidInput { field, .. }) => field,
            other => panic!("expected InvalidInput, got {:?}", other),
        }
    }

    #[test]
    fn test_derived_quantities() {
        let terms = LoanTerms::new(350000., 30000., 6.7, 30).unwrap();

        assert_eq!(terms.loan_amount(), 320000.);
        assert!((terms.periodic_rate() - 0.0055833333).abs() < 1e-9);
        assert_eq!(terms.period_count(), 360);

        let terms = LoanTerms::new(12000., 0., 12., 1).unwrap();
        assert_eq!(terms.loan_amount(), 12000.);
        assert!((terms.periodic_rate() - 0.01).abs() < 1e-15);
        assert_eq!(terms.period_count(), 12);
    }

    #[test]
    fn test_default_matches_form() {
        let terms = LoanTerms::default();
        assert_eq!(terms, LoanTerms::new(350000., 30000., 6.7, 30).unwrap());
    }

    #[test]
    fn test_rejects_invalid_input() {
        assert_eq!(rejected_field(LoanTerms::new(-1., 0., 5., 30)), "home_value");
        assert_eq!(rejected_field(LoanTerms::new(100., -1., 5., 30)), "down_payment");
        assert_eq!(
            rejected_field(LoanTerms::new(f64::NAN, 0., 5., 30)),
            "home_value"
        );
        assert_eq!(
            rejected_field(LoanTerms::new(100., 0., 0., 30)),
            "annual_rate_percent"
        );
        assert_eq!(
            rejected_field(LoanTerms::new(100., 0., -2.5, 30)),
            "annual_rate_percent"
        );
        assert_eq!(
            rejected_field(LoanTerms::new(100., 0., f64::INFINITY, 30)),
            "annual_rate_percent"
        );
        assert_eq!(rejected_field(LoanTerms::new(100., 0., 5., 0)), "term_years");
        assert_eq!(
            rejected_field(LoanTerms::new(100., 0., 5., u32::MAX)),
            "term_years"
        );
    }

    #[test]
    fn test_term_years_limit() {
        let terms = LoanTerms::new(100000., 0., 5., MAX_TERM_YEARS).unwrap();
        assert_eq!(terms.period_count(), 1200);

        // a tiny rate keeps the payment finite, the term alone must be refused
        assert_eq!(
            rejected_field(LoanTerms::new(100000., 0., 0.00000001, 300_000_000)),
            "term_years"
        );
        assert_eq!(
            rejected_field(LoanTerms::new(100000., 0., 5., MAX_TERM_YEARS + 1)),
            "term_years"
        );
    }

    #[test]
    fn test_down_payment_above_home_value() {
        assert_eq!(
            rejected_field(LoanTerms::new(100000., 100001., 5., 30)),
            "down_payment"
        );

        // paying the full price in cash leaves nothing to borrow
        let terms = LoanTerms::new(100000., 100000., 5., 30).unwrap();
        assert_eq!(terms.loan_amount(), 0.);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_validates() {
        let terms = LoanTerms::default();
        let json = serde_json::to_string(&terms).unwrap();
        let back: LoanTerms = serde_json::from_str(&json).unwrap();
        assert_eq!(back, terms);

        let bad = r#"{"home_value":1.0,"down_payment":2.0,"annual_rate_percent":5.0,"term_years":1}"#;
        assert!(serde_json::from_str::<LoanTerms>(bad).is_err());
    }
}
