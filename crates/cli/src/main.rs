//! wonder-finance: the personal-finance dashboard in a terminal.
//!
//! Reads the backend URL and session from the environment, fetches every
//! widget and prints the rendered panels.

mod config;
mod logging;

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use wonder_finance_core::formatters::{format_currency, format_percentage};
use wonder_finance_core::models::analysis::Period;
use wonder_finance_core::models::transaction::{TransactionKind, TransactionQuery, TransactionSort};
use wonder_finance_core::render_panel;
use wonder_finance_core::services::stock_service::StockService;
use wonder_finance_core::storage::session::Session;
use wonder_finance_core::widgets::RenderContext;
use wonder_finance_core::Dashboard;

use config::Config;

#[derive(Parser, Debug)]
#[command(name = "wonder-finance")]
#[command(about = "Personal finance dashboard: transactions, budgets, markets and AI tips")]
struct Args {
    /// Env file to load instead of `./.env`
    #[arg(long, global = true)]
    env_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render the full dashboard (default)
    Dashboard {
        /// Financial summary period
        #[arg(long, value_enum, default_value_t = PeriodArg::Month)]
        period: PeriodArg,

        /// Number of recent transactions to fetch
        #[arg(long)]
        limit: Option<usize>,

        /// Display currency (e.g. INR, USD)
        #[arg(long)]
        currency: Option<String>,

        /// Expand the notification dropdown
        #[arg(long)]
        notifications: bool,
    },
    /// List recent transactions grouped by day
    Transactions {
        #[arg(long, value_enum)]
        kind: Option<KindArg>,

        /// Only this category (case-insensitive)
        #[arg(long)]
        category: Option<String>,

        /// Substring search over category and description
        #[arg(long)]
        search: Option<String>,

        #[arg(long, value_enum, default_value_t = SortArg::DateDesc)]
        sort: SortArg,

        #[arg(long)]
        limit: Option<usize>,
    },
    /// Print the bundled offline stock feed
    Stocks,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum PeriodArg {
    Week,
    Month,
    Year,
}

impl From<PeriodArg> for Period {
    fn from(p: PeriodArg) -> Self {
        match p {
            PeriodArg::Week => Period::Week,
            PeriodArg::Month => Period::Month,
            PeriodArg::Year => Period::Year,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum KindArg {
    Income,
    Expense,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum SortArg {
    DateDesc,
    DateAsc,
    AmountDesc,
    AmountAsc,
    Category,
}

impl From<SortArg> for TransactionSort {
    fn from(s: SortArg) -> Self {
        match s {
            SortArg::DateDesc => TransactionSort::DateDesc,
            SortArg::DateAsc => TransactionSort::DateAsc,
            SortArg::AmountDesc => TransactionSort::AmountDesc,
            SortArg::AmountAsc => TransactionSort::AmountAsc,
            SortArg::Category => TransactionSort::CategoryAsc,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    match &args.env_file {
        Some(path) => config::load_dotenv_from(path)?,
        None => config::load_dotenv(),
    }
    logging::init_tracing();

    let command = args.command.unwrap_or(Command::Dashboard {
        period: PeriodArg::Month,
        limit: None,
        currency: None,
        notifications: false,
    });

    match command {
        Command::Stocks => run_stocks().await,
        Command::Dashboard {
            period,
            limit,
            currency,
            notifications,
        } => {
            let mut config = Config::from_env()?;
            config.settings.period = period.into();
            if let Some(limit) = limit {
                config.settings.transaction_limit = limit;
            }
            if let Some(currency) = currency {
                config.settings.set_display_currency(&currency)?;
            }
            run_dashboard(config, notifications).await
        }
        Command::Transactions {
            kind,
            category,
            search,
            sort,
            limit,
        } => {
            let mut config = Config::from_env()?;
            if let Some(limit) = limit {
                config.settings.transaction_limit = limit;
            }
            let query = TransactionQuery {
                kind: kind.map(|k| match k {
                    KindArg::Income => TransactionKind::Income,
                    KindArg::Expense => TransactionKind::Expense,
                }),
                category,
                search,
                sort: sort.into(),
            };
            run_transactions(config, query).await
        }
    }
}

async fn run_dashboard(config: Config, expand_notifications: bool) -> anyhow::Result<()> {
    let session = Session::load_from_file(&config.session_file)?;
    let mut dashboard = Dashboard::connect(config.settings, session)?;
    dashboard.refresh().await;
    if expand_notifications {
        dashboard.widgets_mut().notifications.toggle();
    }
    print!("{}", dashboard.render(chrono::Local::now().naive_local()));
    Ok(())
}

async fn run_transactions(config: Config, query: TransactionQuery) -> anyhow::Result<()> {
    let session = Session::load_from_file(&config.session_file)?;
    let currency = config.settings.display_currency.clone();
    let mut dashboard = Dashboard::connect(config.settings, session)?;
    if let Some(banner) = dashboard.general_error() {
        eprintln!("{banner}");
    }

    dashboard.set_transaction_query(query);
    dashboard.refresh_transactions().await;

    let ctx = RenderContext::new(currency, chrono::Local::now().naive_local());
    print!("{}", render_panel(&dashboard.widgets().transactions, &ctx));
    Ok(())
}

async fn run_stocks() -> anyhow::Result<()> {
    let records = StockService::new().fetch_stock_data().await?;
    println!("Stock Data");
    for r in records {
        println!(
            "{:<6} {:>12} {:>8}",
            r.symbol,
            format_currency(Some(r.price), "USD"),
            format_percentage(Some(r.change), 2)
        );
    }
    Ok(())
}
