//! Discrete signal detection over an indicator set.

use crate::models::{IndicatorSet, SignalEvent, TrendLabel};

pub const RSI_OVERSOLD: f64 = 30.0;
pub const RSI_OVERBOUGHT: f64 = 70.0;

/// Detect signal events at `index`.
///
/// The previous index is consulted for MACD cross detection. Indicators
/// that are undefined at the evaluated index contribute no event.
pub fn detect_signals(set: &IndicatorSet, index: usize) -> Vec<SignalEvent> {
    let mut events = Vec::new();
    if index >= set.len() {
        return events;
    }

    let at = |series: &[Option<f64>], i: usize| series.get(i).copied().flatten();

    if let Some(rsi) = at(&set.rsi, index) {
        if rsi < RSI_OVERSOLD {
            events.push(SignalEvent::buy("RSI", rsi, "oversold"));
        } else if rsi > RSI_OVERBOUGHT {
            events.push(SignalEvent::sell("RSI", rsi, "overbought"));
        }
    }

    // A crossing, not a level, triggers the MACD event: the current and
    // previous sides of the signal line must differ.
    if index >= 1 {
        let cross = (
            at(&set.macd, index),
            at(&set.macd_signal, index),
            at(&set.macd, index - 1),
            at(&set.macd_signal, index - 1),
        );
        if let (Some(macd), Some(signal), Some(prev_macd), Some(prev_signal)) = cross {
            if macd > signal && prev_macd <= prev_signal {
                events.push(SignalEvent::buy("MACD", macd, "bullish crossover"));
            } else if macd < signal && prev_macd >= prev_signal {
                events.push(SignalEvent::sell("MACD", macd, "bearish crossover"));
            }
        }
    }

    if let Some(close) = set.close.get(index).copied() {
        if let Some(lower) = at(&set.bb_lower, index) {
            if close < lower {
                events.push(SignalEvent::buy(
                    "Bollinger Bands",
                    close,
                    "breached lower band",
                ));
            }
        }
        if let Some(upper) = at(&set.bb_upper, index) {
            if close > upper {
                events.push(SignalEvent::sell(
                    "Bollinger Bands",
                    close,
                    "breached upper band",
                ));
            }
        }
    }

    events
}

/// Moving-average trend label at `index`: SMA20 against SMA50.
///
/// Neutral when either average is undefined or the two are equal.
pub fn trend_label(set: &IndicatorSet, index: usize) -> TrendLabel {
    let short = set.sma_20.get(index).copied().flatten();
    let long = set.sma_50.get(index).copied().flatten();

    match (short, long) {
        (Some(s), Some(l)) if s > l => TrendLabel::Uptrend,
        (Some(s), Some(l)) if s < l => TrendLabel::Downtrend,
        _ => TrendLabel::Neutral,
    }
}
