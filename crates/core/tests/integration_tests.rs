// ═══════════════════════════════════════════════════════════════════
// Integration Tests — Dashboard over a mock backend: widget states,
// failure isolation, period/query changes, notifications, refresh tasks
// ═══════════════════════════════════════════════════════════════════

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use chrono::{NaiveDate, NaiveDateTime};
use serde_json::json;

use wonder_finance_core::backend::traits::DashboardBackend;
use wonder_finance_core::errors::DashboardError;
use wonder_finance_core::models::analysis::{Period, SpendingAnalysis};
use wonder_finance_core::models::budget::Budget;
use wonder_finance_core::models::market::{MarketInstrument, Quote};
use wonder_finance_core::models::notification::{Notification, NotificationKind};
use wonder_finance_core::models::portfolio::Holding;
use wonder_finance_core::models::settings::Settings;
use wonder_finance_core::models::transaction::{Transaction, TransactionKind, TransactionQuery};
use wonder_finance_core::storage::session::Session;
use wonder_finance_core::widgets::{RenderContext, Widget, WidgetState};
use wonder_finance_core::{render_panel, Dashboard, MISSING_BACKEND_BANNER};

// ═══════════════════════════════════════════════════════════════════
// Mock Backend
// ═══════════════════════════════════════════════════════════════════

/// Each endpoint serves its canned data, or a 500 when it is `None`.
#[derive(Default)]
struct MockBackend {
    transactions: Option<Vec<Transaction>>,
    suggestion: Option<String>,
    budgets: Option<Vec<Budget>>,
    quote_price: Option<f64>,
    trending: Option<Vec<Quote>>,
    portfolio: Option<Vec<Holding>>,
    analysis: Option<SpendingAnalysis>,
    notifications: Option<Vec<Notification>>,
    delay: Option<Duration>,

    transaction_calls: AtomicUsize,
    analysis_calls: AtomicUsize,
    completed: AtomicUsize,
    periods: Mutex<Vec<Period>>,
}

impl MockBackend {
    fn healthy() -> Self {
        Self {
            transactions: Some(sample_transactions()),
            suggestion: Some("  Cut dining out by 10% to save ₹2,000 a month.  ".into()),
            budgets: Some(vec![Budget {
                category: "Food".into(),
                spent: 450.0,
                total_budget: 500.0,
                percentage_used: 90.0,
            }]),
            quote_price: Some(3500.0),
            trending: Some(vec![Quote {
                symbol: "ETH".into(),
                price: Some(3000.0),
                change_percent: Some(-1.25),
            }]),
            portfolio: Some(vec![Holding {
                symbol: "AAPL".into(),
                name: Some("Apple".into()),
                asset_type: "stock".into(),
                quantity: 10.0,
                current_value: 1500.0,
                profit_loss: 100.0,
                profit_loss_percent: 7.14,
            }]),
            analysis: Some(SpendingAnalysis {
                top_spending_categories: vec![("Food".into(), 300.0), ("Rent".into(), 700.0)],
                monthly_spending: json!({}),
                total_income: Some(2000.0),
            }),
            notifications: Some(sample_notifications()),
            ..Default::default()
        }
    }

    fn empty() -> Self {
        Self {
            transactions: Some(Vec::new()),
            suggestion: Some("   ".into()),
            budgets: Some(Vec::new()),
            quote_price: Some(1.0),
            trending: Some(Vec::new()),
            portfolio: Some(Vec::new()),
            analysis: Some(SpendingAnalysis::default()),
            notifications: Some(Vec::new()),
            ..Default::default()
        }
    }

    fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    async fn pause(&self) {
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
    }

    fn serve<T: Clone>(&self, data: &Option<T>, endpoint: &str) -> Result<T, DashboardError> {
        self.completed.fetch_add(1, Ordering::SeqCst);
        data.clone().ok_or_else(|| DashboardError::Http {
            endpoint: endpoint.to_string(),
            status: 500,
        })
    }
}

#[async_trait]
impl DashboardBackend for MockBackend {
    fn name(&self) -> &str {
        "mock"
    }

    async fn recent_transactions(&self, limit: usize) -> Result<Vec<Transaction>, DashboardError> {
        self.pause().await;
        self.transaction_calls.fetch_add(1, Ordering::SeqCst);
        let mut list = self.serve(&self.transactions, "transactions")?;
        list.truncate(limit);
        Ok(list)
    }

    async fn ai_suggestion(&self) -> Result<String, DashboardError> {
        self.pause().await;
        self.serve(&self.suggestion, "AI suggestion")
    }

    async fn budgets(&self) -> Result<Vec<Budget>, DashboardError> {
        self.pause().await;
        self.serve(&self.budgets, "budgets")
    }

    async fn quote(&self, instrument: &MarketInstrument) -> Result<Quote, DashboardError> {
        self.pause().await;
        let price = self.serve(&self.quote_price, "market data")?;
        let (symbol, price) = match instrument {
            MarketInstrument::Stock(s) => (s.clone(), price),
            MarketInstrument::Crypto(id) => (id.clone(), price * 20.0),
        };
        Ok(Quote {
            symbol,
            price: Some(price),
            change_percent: None,
        })
    }

    async fn trending(&self) -> Result<Vec<Quote>, DashboardError> {
        self.pause().await;
        self.serve(&self.trending, "market data")
    }

    async fn portfolio(&self) -> Result<Vec<Holding>, DashboardError> {
        self.pause().await;
        self.serve(&self.portfolio, "portfolio data")
    }

    async fn spending_analysis(&self, period: Period) -> Result<SpendingAnalysis, DashboardError> {
        self.pause().await;
        self.analysis_calls.fetch_add(1, Ordering::SeqCst);
        self.periods.lock().unwrap().push(period);
        self.serve(&self.analysis, "financial summary")
    }

    async fn notifications(&self) -> Result<Vec<Notification>, DashboardError> {
        self.pause().await;
        self.serve(&self.notifications, "notifications")
    }
}

// ═══════════════════════════════════════════════════════════════════
// Fixtures
// ═══════════════════════════════════════════════════════════════════

fn tx(id: &str, category: &str, amount: f64, date: &str, kind: &str, desc: Option<&str>) -> Transaction {
    Transaction {
        id: Some(id.into()),
        category: category.into(),
        amount,
        date: Some(date.into()),
        transaction_type: Some(kind.into()),
        description: desc.map(str::to_string),
    }
}

fn sample_transactions() -> Vec<Transaction> {
    vec![
        tx("1", "Salary", 2000.0, "2025-03-10T09:00:00", "income", Some("March pay")),
        tx("2", "Food", 35.5, "2025-03-10T13:00:00", "expense", None),
        tx("3", "Rent", 700.0, "2025-03-09T08:00:00", "expense", None),
    ]
}

fn sample_notifications() -> Vec<Notification> {
    let n = |id: &str, kind, title: &str, read| Notification {
        id: id.into(),
        kind,
        title: title.into(),
        message: format!("{title} details"),
        timestamp: Some("2025-03-10T11:00:00".into()),
        read,
    };
    vec![
        n("1", NotificationKind::Alert, "Budget Alert", false),
        n("2", NotificationKind::Market, "Market Update", false),
        n("3", NotificationKind::Success, "Goal Reached", true),
    ]
}

fn now() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 3, 10)
        .unwrap()
        .and_hms_opt(12, 0, 0)
        .unwrap()
}

fn settings() -> Settings {
    let mut s = Settings::default().with_backend_url("http://mock");
    s.set_display_currency("USD").unwrap();
    s
}

fn session() -> Session {
    Session::with_token("t").with_user(json!({ "name": "Asha" }))
}

fn dashboard(mock: &Arc<MockBackend>) -> Dashboard {
    let backend: Arc<dyn DashboardBackend> = mock.clone();
    Dashboard::with_backend(backend, settings(), &session())
}

fn ctx() -> RenderContext {
    RenderContext::new("USD", now())
}

// ═══════════════════════════════════════════════════════════════════
// Refresh & Widget States
// ═══════════════════════════════════════════════════════════════════

mod refresh {
    use super::*;

    #[tokio::test]
    async fn widgets_start_loading() {
        let mock = Arc::new(MockBackend::healthy());
        let dash = dashboard(&mock);
        let w = dash.widgets();
        assert!(w.summary.state().is_loading());
        assert!(w.budgets.state().is_loading());
        assert!(w.transactions.state().is_loading());
        assert_eq!(mock.completed.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn healthy_backend_makes_everything_ready() {
        let mock = Arc::new(MockBackend::healthy());
        let mut dash = dashboard(&mock);
        dash.refresh().await;

        let w = dash.widgets();
        assert!(w.summary.state().is_ready());
        assert!(w.budgets.state().is_ready());
        assert!(w.market.state().is_ready());
        assert!(w.transactions.state().is_ready());
        assert!(w.portfolio.state().is_ready());
        assert!(w.notifications.state().is_ready());
        assert_eq!(
            w.suggestion.state().ready().map(String::as_str),
            Some("Cut dining out by 10% to save ₹2,000 a month.")
        );
    }

    #[tokio::test]
    async fn summary_totals() {
        let mock = Arc::new(MockBackend::healthy());
        let mut dash = dashboard(&mock);
        dash.refresh().await;

        let view = dash.widgets().summary.state().ready().unwrap().clone();
        assert_eq!(view.totals.income, Some(2000.0));
        assert_eq!(view.totals.expenses, 1000.0);
        assert_eq!(view.totals.savings, Some(1000.0));
        assert_eq!(view.spending.labels, vec!["Food", "Rent"]);
    }

    #[tokio::test]
    async fn market_fetches_every_instrument() {
        let mock = Arc::new(MockBackend::healthy());
        let mut dash = dashboard(&mock);
        dash.refresh().await;

        let view = dash.widgets().market.state().ready().unwrap();
        assert_eq!(view.quotes.len(), 2);
        assert_eq!(view.quotes[1].1.price, Some(70000.0));
        assert_eq!(view.trending.len(), 1);
    }

    #[tokio::test]
    async fn transaction_limit_is_passed_through() {
        let mock = Arc::new(MockBackend::healthy());
        let backend: Arc<dyn DashboardBackend> = mock.clone();
        let mut s = settings();
        s.transaction_limit = 2;
        let mut dash = Dashboard::with_backend(backend, s, &session());
        dash.refresh().await;

        let groups = dash.widgets().transactions.state().ready().unwrap();
        let count: usize = groups.iter().map(|g| g.transactions.len()).sum();
        assert_eq!(count, 2);
    }
}

// ═══════════════════════════════════════════════════════════════════
// Failure Isolation & Empty States
// ═══════════════════════════════════════════════════════════════════

mod failures {
    use super::*;

    #[tokio::test]
    async fn one_failure_leaves_the_rest_ready() {
        let mock = Arc::new(MockBackend {
            budgets: None,
            ..MockBackend::healthy()
        });
        let mut dash = dashboard(&mock);
        dash.refresh().await;

        let w = dash.widgets();
        assert_eq!(
            w.budgets.state(),
            &WidgetState::Failed("Error loading budgets: Failed to fetch budgets: 500".into())
        );
        assert!(w.summary.state().is_ready());
        assert!(w.transactions.state().is_ready());
        assert!(w.portfolio.state().is_ready());
    }

    #[tokio::test]
    async fn fixed_messages_for_list_widgets() {
        let mock = Arc::new(MockBackend {
            transactions: None,
            suggestion: None,
            trending: None,
            ..MockBackend::healthy()
        });
        let mut dash = dashboard(&mock);
        dash.refresh().await;

        let w = dash.widgets();
        assert_eq!(
            w.transactions.state().error(),
            Some("Unable to load transactions. Please try again.")
        );
        assert_eq!(
            w.suggestion.state().error(),
            Some("Unable to load AI suggestion. Please try again.")
        );
        assert_eq!(w.market.state().error(), Some("Failed to load market data."));
        assert!(w.budgets.state().is_ready());
    }

    #[tokio::test]
    async fn summary_and_portfolio_include_the_cause() {
        let mock = Arc::new(MockBackend {
            analysis: None,
            portfolio: None,
            notifications: None,
            ..MockBackend::healthy()
        });
        let mut dash = dashboard(&mock);
        dash.refresh().await;

        let w = dash.widgets();
        assert_eq!(
            w.summary.state().error(),
            Some("Error loading financial summary: Failed to fetch financial summary: 500")
        );
        assert_eq!(
            w.portfolio.state().error(),
            Some("Error loading portfolio: Failed to fetch portfolio data: 500")
        );
        assert_eq!(
            w.notifications.state().error(),
            Some("Failed to fetch notifications: 500")
        );
    }

    #[tokio::test]
    async fn empty_payloads_render_empty_states() {
        let mock = Arc::new(MockBackend::empty());
        let backend: Arc<dyn DashboardBackend> = mock.clone();
        let mut s = settings();
        s.market_instruments.clear();
        let mut dash = Dashboard::with_backend(backend, s, &session());
        dash.refresh().await;

        let w = dash.widgets();
        assert_eq!(w.budgets.state(), &WidgetState::Empty);
        assert_eq!(w.transactions.state(), &WidgetState::Empty);
        assert_eq!(w.portfolio.state(), &WidgetState::Empty);
        assert_eq!(w.suggestion.state(), &WidgetState::Empty);
        assert_eq!(w.market.state(), &WidgetState::Empty);
        assert_eq!(w.notifications.state(), &WidgetState::Empty);

        // The summary always shows its cards.
        assert!(w.summary.state().is_ready());
        let lines = w.summary.render(&ctx());
        assert!(lines.contains(&"Income: -".to_string()));
        assert!(lines.contains(&"Expenses: $0.00".to_string()));
        assert!(lines.contains(&"  No spending data available".to_string()));
    }

    #[tokio::test]
    async fn unconfigured_backend_shows_banner_and_widget_errors() {
        let mut dash = Dashboard::connect(Settings::default(), session()).unwrap();
        assert_eq!(dash.general_error(), Some(MISSING_BACKEND_BANNER));

        dash.refresh().await;
        let w = dash.widgets();
        assert_eq!(
            w.budgets.state().error(),
            Some("Error loading budgets: Backend URL not configured")
        );
        assert_eq!(
            w.summary.state().error(),
            Some("Error loading financial summary: Backend URL not configured")
        );
        assert_eq!(
            w.transactions.state().error(),
            Some("Unable to load transactions. Please try again.")
        );

        let page = dash.render(now());
        assert!(page.contains(&format!("✖ {MISSING_BACKEND_BANNER}")));
    }
}

// ═══════════════════════════════════════════════════════════════════
// Period & Query Changes
// ═══════════════════════════════════════════════════════════════════

mod interactions {
    use super::*;

    #[tokio::test]
    async fn period_change_refetches_only_the_summary() {
        let mock = Arc::new(MockBackend::healthy());
        let mut dash = dashboard(&mock);
        dash.refresh().await;
        assert_eq!(mock.analysis_calls.load(Ordering::SeqCst), 1);

        dash.set_period(Period::Month).await;
        assert_eq!(mock.analysis_calls.load(Ordering::SeqCst), 1);

        dash.set_period(Period::Week).await;
        assert_eq!(mock.analysis_calls.load(Ordering::SeqCst), 2);
        assert_eq!(mock.transaction_calls.load(Ordering::SeqCst), 1);
        assert_eq!(*mock.periods.lock().unwrap(), vec![Period::Month, Period::Week]);
        assert_eq!(dash.widgets().summary.period(), Period::Week);
        assert!(dash.widgets().summary.state().is_ready());
    }

    #[tokio::test]
    async fn query_change_regroups_without_refetch() {
        let mock = Arc::new(MockBackend::healthy());
        let mut dash = dashboard(&mock);
        dash.refresh().await;

        dash.set_transaction_query(TransactionQuery {
            kind: Some(TransactionKind::Expense),
            ..Default::default()
        });
        assert_eq!(mock.transaction_calls.load(Ordering::SeqCst), 1);

        let groups = dash.widgets().transactions.state().ready().unwrap();
        assert!(groups
            .iter()
            .flat_map(|g| &g.transactions)
            .all(|t| t.kind() == TransactionKind::Expense));
        assert_eq!(groups.len(), 2);
    }

    #[tokio::test]
    async fn query_with_no_matches_is_empty_and_recovers() {
        let mock = Arc::new(MockBackend::healthy());
        let mut dash = dashboard(&mock);
        dash.refresh().await;

        dash.set_transaction_query(TransactionQuery {
            search: Some("nothing matches this".into()),
            ..Default::default()
        });
        assert_eq!(dash.widgets().transactions.state(), &WidgetState::Empty);

        dash.set_transaction_query(TransactionQuery::default());
        assert!(dash.widgets().transactions.state().is_ready());
    }

    #[tokio::test]
    async fn query_before_load_applies_on_load() {
        let mock = Arc::new(MockBackend::healthy());
        let mut dash = dashboard(&mock);
        dash.set_transaction_query(TransactionQuery {
            kind: Some(TransactionKind::Income),
            ..Default::default()
        });
        assert!(dash.widgets().transactions.state().is_loading());

        dash.refresh_transactions().await;
        let groups = dash.widgets().transactions.state().ready().unwrap();
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].transactions[0].category, "Salary");
    }
}

// ═══════════════════════════════════════════════════════════════════
// Notifications
// ═══════════════════════════════════════════════════════════════════

mod notifications {
    use super::*;

    #[tokio::test]
    async fn read_bookkeeping() {
        let mock = Arc::new(MockBackend::healthy());
        let mut dash = dashboard(&mock);
        dash.refresh().await;

        let center = &mut dash.widgets_mut().notifications;
        assert_eq!(center.unread_count(), 2);

        assert!(center.mark_as_read("1"));
        assert_eq!(center.unread_count(), 1);

        assert!(!center.mark_as_read("1"), "already read");
        assert!(!center.mark_as_read("3"), "was read from the start");
        assert!(!center.mark_as_read("99"), "unknown id");
        assert_eq!(center.unread_count(), 1);

        assert_eq!(center.mark_all_as_read(), 1);
        assert_eq!(center.unread_count(), 0);
        assert_eq!(center.mark_all_as_read(), 0);
    }

    #[tokio::test]
    async fn dropdown_rendering() {
        let mock = Arc::new(MockBackend::healthy());
        let mut dash = dashboard(&mock);
        dash.refresh().await;

        let center = &mut dash.widgets_mut().notifications;
        assert_eq!(center.render(&ctx()), vec!["🔔 2 unread".to_string()]);

        center.toggle();
        assert!(center.is_open());
        let lines = center.render(&ctx());
        assert!(lines.contains(&"● ⚠ Budget Alert".to_string()));
        assert!(lines.contains(&"    Budget Alert details · 1 hour ago".to_string()));
        assert!(lines.contains(&"  ✔ Goal Reached".to_string()));

        center.close();
        assert!(!center.is_open());
    }

    #[tokio::test]
    async fn nothing_to_mark_before_load() {
        let mock = Arc::new(MockBackend::healthy());
        let mut dash = dashboard(&mock);
        let center = &mut dash.widgets_mut().notifications;
        assert_eq!(center.unread_count(), 0);
        assert!(!center.mark_as_read("1"));
        assert_eq!(center.mark_all_as_read(), 0);
    }
}

// ═══════════════════════════════════════════════════════════════════
// Background Refresh
// ═══════════════════════════════════════════════════════════════════

mod background {
    use super::*;

    #[tokio::test]
    async fn spawned_refresh_can_be_applied() {
        let mock = Arc::new(MockBackend::healthy().with_delay(Duration::from_millis(10)));
        let mut dash = dashboard(&mock);
        dash.widgets_mut().notifications.toggle();

        let task = dash.spawn_refresh();
        let widgets = task.join().await.unwrap();
        dash.apply(widgets);

        assert!(dash.widgets().budgets.state().is_ready());
        assert!(dash.widgets().notifications.is_open());
    }

    #[tokio::test]
    async fn spawned_refresh_keeps_period() {
        let mock = Arc::new(MockBackend::healthy());
        let mut dash = dashboard(&mock);
        dash.set_period(Period::Year).await;

        let widgets = dash.spawn_refresh().join().await.unwrap();
        assert_eq!(widgets.summary.period(), Period::Year);
        assert_eq!(mock.periods.lock().unwrap().last(), Some(&Period::Year));
    }

    #[tokio::test]
    async fn dropping_the_task_aborts_it() {
        let mock = Arc::new(MockBackend::healthy().with_delay(Duration::from_millis(100)));
        let dash = dashboard(&mock);

        let task = dash.spawn_refresh();
        drop(task);
        tokio::time::sleep(Duration::from_millis(300)).await;

        assert_eq!(mock.completed.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn cancelled_task_reports_cancelled() {
        let mock = Arc::new(MockBackend::healthy().with_delay(Duration::from_millis(100)));
        let dash = dashboard(&mock);

        let mut task = dash.spawn_refresh();
        task.cancel();
        assert!(task.is_finished());
        assert!(matches!(task.join().await, Err(DashboardError::Cancelled)));
    }
}

// ═══════════════════════════════════════════════════════════════════
// Rendering
// ═══════════════════════════════════════════════════════════════════

mod rendering {
    use super::*;

    #[tokio::test]
    async fn page_has_greeting_and_every_panel() {
        let mock = Arc::new(MockBackend::healthy());
        let mut dash = dashboard(&mock);
        dash.refresh().await;

        let page = dash.render(now());
        assert!(page.starts_with("Dashboard\nWelcome back, Asha! Here's your financial overview.\n"));
        for title in [
            "Notifications",
            "Financial Summary",
            "AI Suggestion",
            "Budget Overview",
            "Market Prices",
            "Recent Transactions",
            "Investment Portfolio",
        ] {
            assert!(page.contains(title), "missing panel {title}");
        }
        assert!(!page.contains(MISSING_BACKEND_BANNER));
    }

    #[tokio::test]
    async fn anonymous_greeting() {
        let mock = Arc::new(MockBackend::healthy());
        let backend: Arc<dyn DashboardBackend> = mock.clone();
        let dash = Dashboard::with_backend(backend, settings(), &Session::with_token("t"));
        assert_eq!(dash.greeting(), "Welcome back! Here's your financial overview.");
        assert!(dash.is_authenticated());
    }

    #[tokio::test]
    async fn panel_lines() {
        let mock = Arc::new(MockBackend::healthy());
        let mut dash = dashboard(&mock);
        dash.refresh().await;
        let w = dash.widgets();

        let budgets = w.budgets.render(&ctx());
        assert_eq!(budgets[0], "Food  $450.00 / $500.00");
        assert!(budgets[1].ends_with(" 90%  Approaching limit · $50.00 left"));

        let portfolio = w.portfolio.render(&ctx());
        assert_eq!(portfolio[0], "Total Value: $1,500.00");
        assert_eq!(portfolio[1], "Total Gain/Loss: +$100.00");
        assert_eq!(portfolio[2], "[S] Apple $1,500.00 ▲ 7.14%");

        let market = w.market.render(&ctx());
        assert_eq!(market[0], "TCS.BSE Stock: ₹3,500.00");
        assert_eq!(market[1], "Bitcoin: $70,000.00");
        assert_eq!(market[3], "  ETH $3,000.00 ▼ 1.25%");

        let summary = w.summary.render(&ctx());
        assert_eq!(summary[0], "Period: This Month");
        assert!(summary.contains(&"  Food: $300.00 (30.0%)".to_string()));

        let transactions = w.transactions.render(&ctx());
        assert_eq!(transactions[0], "Mar 10, 2025");
        assert!(transactions.contains(&"  Salary: +$2,000.00 · March pay".to_string()));
        assert!(transactions.contains(&"  Rent: -$700.00".to_string()));
    }

    #[tokio::test]
    async fn overspent_budget_shows_excess() {
        let mock = Arc::new(MockBackend {
            budgets: Some(vec![Budget {
                category: "Travel".into(),
                spent: 1250.0,
                total_budget: 1000.0,
                percentage_used: 125.0,
            }]),
            ..MockBackend::healthy()
        });
        let mut dash = dashboard(&mock);
        dash.refresh().await;

        let budgets = dash.widgets().budgets.render(&ctx());
        assert_eq!(budgets[0], "Travel  $1,250.00 / $1,000.00");
        assert!(budgets[1].ends_with(" 125%  Over budget · $250.00 over"));
    }

    #[test]
    fn panel_title_is_underlined() {
        let mock = Arc::new(MockBackend::healthy());
        let dash = dashboard(&mock);
        let out = render_panel(&dash.widgets().budgets, &ctx());
        assert!(out.starts_with("Budget Overview\n───────────────\n"));
    }
}
