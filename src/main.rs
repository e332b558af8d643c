use clap::Parser;
use miette::{IntoDiagnostic, Result};
use payment_gateway::application::service::PaymentService;
use payment_gateway::domain::card::CardData;
use payment_gateway::domain::ports::{PaymentLedgerBox, SettlementGatewayBox};
use payment_gateway::domain::validation;
use payment_gateway::infrastructure::in_memory::InMemoryLedger;
use payment_gateway::infrastructure::settlement::{ApprovingBank, DecliningBank};
use rust_decimal::Decimal;
use tracing_subscriber::EnvFilter;

/// Validate a card payment, submit it for settlement and print the recorded
/// outcome as JSON.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Card number; embedded spaces are stripped before validation
    #[arg(long)]
    card_number: String,

    /// Expiry date in MM/YY form
    #[arg(long)]
    expiry: String,

    /// Card verification value (3 or 4 digits)
    #[arg(long)]
    cvv: String,

    /// Payment amount, at most two decimal places
    #[arg(long)]
    amount: Decimal,

    /// ISO-4217 currency code
    #[arg(long, default_value = "GBP")]
    currency: String,

    /// Submit against a settlement bank that declines every payment
    #[arg(long)]
    decline: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let card = CardData {
        card_number: cli.card_number.replace(' ', ""),
        expiry_date: cli.expiry,
        amount: cli.amount,
        currency: cli.currency,
        cvv: cli.cvv,
    };

    validation::validate(&card).into_diagnostic()?;

    let gateway: SettlementGatewayBox = if cli.decline {
        Box::new(DecliningBank)
    } else {
        Box::new(ApprovingBank)
    };
    let ledger: PaymentLedgerBox = Box::new(InMemoryLedger::new());
    let service = PaymentService::new(gateway, ledger);

    let payment_id = service.make_payment(card).await.into_diagnostic()?;
    let view = service
        .get_payment(payment_id)
        .await
        .into_diagnostic()?
        .ok_or_else(|| miette::miette!("payment {payment_id} missing after recording"))?;

    let output = serde_json::json!({
        "payment-id": payment_id,
        "status": view.status,
        "card-number-masked": view.card.card_number,
        "amount": view.card.amount,
        "currency": view.card.currency,
        "expiry-date": view.card.expiry_date,
    });
    println!("{}", serde_json::to_string_pretty(&output).into_diagnostic()?);

    Ok(())
}
