use clap::Parser;
use log::{error, info};
use mortgage::{amortize, format_currency, Amortization};
use simple_logger::SimpleLogger;
use std::process;

/// Mortgage payment calculator
#[derive(Parser, Debug)]
#[command(
    name = "mortgage",
    version,
    about = "Fixed-rate mortgage payments and amortization schedule"
)]
struct Cli {
    /// Purchase price of the home
    #[arg(long, default_value_t = 350000.0)]
    home_value: f64,

    /// Cash paid up front
    #[arg(long, default_value_t = 30000.0)]
    down_payment: f64,

    /// Annual interest rate in percent, e.g. 6.7
    #[arg(long, default_value_t = 6.7)]
    rate: f64,

    /// Loan term in years
    #[arg(long, default_value_t = 30)]
    term: u32,

    /// Print the remaining balance at the end of each year
    #[arg(long)]
    yearly: bool,

    /// Print every monthly payment
    #[arg(long)]
    schedule: bool,

    /// More log output (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => log::LevelFilter::Info,
        1 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    if let Err(err) = SimpleLogger::new().with_level(level).init() {
        eprintln!("logger: {err}");
    }

    match amortize(cli.home_value, cli.down_payment, cli.rate, cli.term) {
        Ok(result) => show(&cli, &result),
        Err(err) => {
            error!("{}", err);
            process::exit(1);
        }
    }
}

fn show(cli: &Cli, result: &Amortization) {
    info!("{}", result.terms);

    println!("Monthly Payments:    {}", format_currency(result.summary.monthly_payment));
    println!("Total Paid in Full:  {}", format_currency(result.summary.total_paid));
    println!("Total Interest Paid: {}", format_currency(result.summary.total_interest_paid));

    if cli.yearly {
        println!();
        println!("year, remaining balance");
        for year in result.yearly_balances() {
            println!("{}, {}", year.year_index, format_currency(year.remaining_balance));
        }
    }

    if cli.schedule {
        println!();
        for row in &result.schedule {
            println!("{}", row);
        }
    }
}

// verifies that types can implement the gated traits below
#[cfg(test)]
fn is_normal<T: Sized + Send + Sync + Unpin>() {}

#[test]
fn normal_types() {
    is_normal::<mortgage::LoanTerms>();
    is_normal::<mortgage::ScheduleRow>();
    is_normal::<Amortization>();
    is_normal::<mortgage::MortgageError>();
}

#[test]
fn cli_defaults_match_form() {
    let cli = Cli::parse_from(["mortgage"]);
    assert_eq!(cli.home_value, 350000.0);
    assert_eq!(cli.down_payment, 30000.0);
    assert_eq!(cli.rate, 6.7);
    assert_eq!(cli.term, 30);

    let cli = Cli::parse_from(["mortgage", "--term", "15", "--schedule", "-vv"]);
    assert_eq!(cli.term, 15);
    assert!(cli.schedule);
    assert_eq!(cli.verbose, 2);
}
