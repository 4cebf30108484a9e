use std::fmt;

/// Headline figures shown above the schedule.
#[derive(Clone, Copy, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SummaryMetrics {
    pub monthly_payment: f64,
    pub total_paid: f64,
    pub total_interest_paid: f64,
}

pub fn compute_summary(loan_amount: f64, payment: f64, period_count: u32) -> SummaryMetrics {
    let total_paid = period_count as f64 * payment;
    SummaryMetrics {
        monthly_payment: payment,
        total_paid,
        total_interest_paid: total_paid - loan_amount,
    }
}

impl fmt::Display for SummaryMetrics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "monthly payment {}, total paid {}, total interest {}",
            format_currency(self.monthly_payment),
            format_currency(self.total_paid),
            format_currency(self.total_interest_paid)
        )
    }
}

/// Dollar amount to cents with comma thousands separators, e.g. `$2,064.89`.
/// Non-finite amounts are printed as-is without a currency sign.
pub fn format_currency(amount: f64) -> String {
    if !amount.is_finite() {
        return amount.to_string();
    }

    let fixed = format!("{:.2}", amount.abs());
    let (whole, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    // -0.001 prints as $0.00, not -$0.00
    let sign = if amount < 0. && fixed.bytes().any(|b| b.is_ascii_digit() && b != b'0') {
        "-"
    } else {
        ""
    };
    format!("{}${}.{}", sign, grouped, cents)
}
