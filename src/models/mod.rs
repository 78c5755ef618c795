//! Shared data models spanning the analysis layers.

pub mod forecast;
pub mod indicators;
pub mod news;
pub mod price;
pub mod signal;

pub use forecast::{Forecast, ForecastAction};
pub use indicators::{IndicatorSet, IndicatorSnapshot};
pub use news::{NewsItem, ScoredNewsItem, Sentiment};
pub use price::{PricePoint, QuoteInfo};
pub use signal::{Recommendation, Score, SignalEvent, SignalKind, TrendLabel};
