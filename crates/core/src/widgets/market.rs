use crate::backend::traits::DashboardBackend;
use crate::errors::DashboardError;
use crate::formatters::{format_currency, format_percentage};
use crate::models::market::{MarketInstrument, Quote};

use super::{banner, skeleton, RenderContext, Widget, WidgetState};

pub const TITLE: &str = "Market Prices";
pub const EMPTY_MESSAGE: &str = "No market data available.";
pub const ERROR_MESSAGE: &str = "Failed to load market data.";

/// Fetched quotes for the tracked instruments plus the trending list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MarketView {
    pub quotes: Vec<(MarketInstrument, Quote)>,
    pub trending: Vec<Quote>,
}

impl MarketView {
    pub fn is_empty(&self) -> bool {
        self.quotes.is_empty() && self.trending.is_empty()
    }
}

/// Live prices for a fixed set of instruments and what is trending.
///
/// All requests are independent; any one failing fails the widget.
#[derive(Debug, Clone)]
pub struct MarketPrices {
    instruments: Vec<MarketInstrument>,
    state: WidgetState<MarketView>,
}

impl MarketPrices {
    pub fn new(instruments: Vec<MarketInstrument>) -> Self {
        Self {
            instruments,
            state: WidgetState::Loading,
        }
    }

    pub fn state(&self) -> &WidgetState<MarketView> {
        &self.state
    }

    pub fn instruments(&self) -> &[MarketInstrument] {
        &self.instruments
    }

    pub async fn load(&mut self, backend: &dyn DashboardBackend) {
        self.state = WidgetState::Loading;
        let result = self.fetch(backend).await;
        self.state = WidgetState::resolve(result, MarketView::is_empty, |e| {
            tracing::error!(error = %e, "error fetching market data");
            ERROR_MESSAGE.to_string()
        });
    }

    async fn fetch(&self, backend: &dyn DashboardBackend) -> Result<MarketView, DashboardError> {
        let quote_requests = async {
            let mut quotes = Vec::with_capacity(self.instruments.len());
            for instrument in &self.instruments {
                let quote = backend.quote(instrument).await?;
                quotes.push((instrument.clone(), quote));
            }
            Ok::<_, DashboardError>(quotes)
        };
        let (quotes, trending) = tokio::join!(quote_requests, backend.trending());
        Ok(MarketView {
            quotes: quotes?,
            trending: trending?,
        })
    }
}

impl Widget for MarketPrices {
    fn title(&self) -> &str {
        TITLE
    }

    fn render(&self, _ctx: &RenderContext) -> Vec<String> {
        match &self.state {
            WidgetState::Loading => skeleton(2),
            WidgetState::Failed(msg) => banner(msg),
            WidgetState::Empty => vec![EMPTY_MESSAGE.to_string()],
            WidgetState::Ready(view) => {
                let mut lines: Vec<String> = view
                    .quotes
                    .iter()
                    .map(|(instrument, quote)| {
                        format!(
                            "{}: {}",
                            instrument.label(),
                            format_currency(quote.price, instrument.currency())
                        )
                    })
                    .collect();
                if !view.trending.is_empty() {
                    lines.push("Trending".to_string());
                    lines.extend(view.trending.iter().map(trending_line));
                }
                lines
            }
        }
    }
}

fn trending_line(quote: &Quote) -> String {
    let arrow = match quote.change_percent {
        Some(c) if c >= 0.0 => "▲",
        Some(_) => "▼",
        None => " ",
    };
    format!(
        "  {} {} {} {}",
        quote.symbol,
        format_currency(quote.price, "USD"),
        arrow,
        format_percentage(quote.change_percent.map(f64::abs), 2)
    )
}
