use log::{debug, warn};

use crate::error::{MortgageError, Result};

/// Constant periodic payment that fully amortizes `loan_amount` over
/// `period_count` periods at `periodic_rate` (fraction per period).
///
/// Uses the annuity formula `P * r(1+r)^n / ((1+r)^n - 1)`. A zero rate
/// falls back to the exact linear payment `P / n`.
pub fn compute_monthly_payment(
    loan_amount: f64,
    periodic_rate: f64,
    period_count: u32,
) -> Result<f64> {
    if period_count == 0 {
        return Err(MortgageError::invalid(
            "period_count",
            "must be at least 1",
        ));
    }
    if !loan_amount.is_finite() || !periodic_rate.is_finite() {
        return Err(MortgageError::invalid(
            "loan_amount",
            format!(
                "non-finite input: loan amount {}, periodic rate {}",
                loan_amount, periodic_rate
            ),
        ));
    }

    let periods = period_count as f64;

    if periodic_rate == 0. {
        warn!("zero periodic rate, using linear payment");
        return Ok(loan_amount / periods);
    }

    let factor = (1. + periodic_rate).powf(periods);
    let payment = loan_amount * (periodic_rate * factor) / (factor - 1.);

    if !payment.is_finite() {
        return Err(MortgageError::ArithmeticDegenerate {
            context: format!(
                "monthly payment for rate {} over {} periods",
                periodic_rate, period_count
            ),
        });
    }
    debug!("monthly payment {}", payment);
    Ok(payment)
}
