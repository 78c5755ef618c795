//! Unit tests for signal detection

use stockpulse::models::{IndicatorSet, SignalKind, TrendLabel};
use stockpulse::signals::{detect_signals, trend_label};

/// Two-bar indicator set with every series undefined.
fn empty_set(closes: Vec<f64>) -> IndicatorSet {
    let len = closes.len();
    IndicatorSet {
        close: closes,
        sma_20: vec![None; len],
        sma_50: vec![None; len],
        ema_12: vec![None; len],
        ema_26: vec![None; len],
        rsi: vec![None; len],
        macd: vec![None; len],
        macd_signal: vec![None; len],
        macd_histogram: vec![None; len],
        bb_upper: vec![None; len],
        bb_middle: vec![None; len],
        bb_lower: vec![None; len],
        stoch_k: vec![None; len],
        stoch_d: vec![None; len],
    }
}

#[test]
fn all_undefined_indicators_produce_no_events() {
    let set = empty_set(vec![100.0, 101.0]);
    assert!(detect_signals(&set, 1).is_empty());
}

#[test]
fn out_of_range_index_produces_no_events() {
    let set = empty_set(vec![100.0]);
    assert!(detect_signals(&set, 5).is_empty());
}

#[test]
fn rsi_below_30_is_a_buy() {
    let mut set = empty_set(vec![100.0, 101.0]);
    set.rsi[1] = Some(25.0);

    let events = detect_signals(&set, 1);
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].kind, SignalKind::Buy);
    assert_eq!(events[0].indicator, "RSI");
    assert_eq!(events[0].reason, "oversold");
    assert_eq!(events[0].value, 25.0);
}

#[test]
fn rsi_above_70_is_a_sell() {
    let mut set = empty_set(vec![100.0, 101.0]);
    set.rsi[1] = Some(75.0);

    let events = detect_signals(&set, 1);
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].kind, SignalKind::Sell);
    assert_eq!(events[0].reason, "overbought");
}

#[test]
fn rsi_in_neutral_band_is_silent() {
    let mut set = empty_set(vec![100.0, 101.0]);
    set.rsi[1] = Some(50.0);
    assert!(detect_signals(&set, 1).is_empty());

    set.rsi[1] = Some(30.0);
    assert!(detect_signals(&set, 1).is_empty());
    set.rsi[1] = Some(70.0);
    assert!(detect_signals(&set, 1).is_empty());
}

#[test]
fn macd_upward_cross_fires_buy() {
    let mut set = empty_set(vec![100.0, 101.0]);
    set.macd[0] = Some(-0.5);
    set.macd_signal[0] = Some(-0.3);
    set.macd[1] = Some(0.2);
    set.macd_signal[1] = Some(0.1);

    let events = detect_signals(&set, 1);
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].kind, SignalKind::Buy);
    assert_eq!(events[0].indicator, "MACD");
    assert_eq!(events[0].reason, "bullish crossover");
}

#[test]
fn macd_downward_cross_fires_sell() {
    let mut set = empty_set(vec![100.0, 101.0]);
    set.macd[0] = Some(0.3);
    set.macd_signal[0] = Some(0.1);
    set.macd[1] = Some(-0.1);
    set.macd_signal[1] = Some(0.05);

    let events = detect_signals(&set, 1);
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].kind, SignalKind::Sell);
    assert_eq!(events[0].reason, "bearish crossover");
}

#[test]
fn sustained_macd_level_without_cross_is_silent() {
    // MACD above signal on both bars: no crossing, no event.
    let mut set = empty_set(vec![100.0, 101.0]);
    set.macd[0] = Some(0.5);
    set.macd_signal[0] = Some(0.2);
    set.macd[1] = Some(0.6);
    set.macd_signal[1] = Some(0.3);

    assert!(detect_signals(&set, 1).is_empty());
}

#[test]
fn macd_cross_from_exact_touch_fires() {
    // Previous bar touching the signal line counts as the opposite side.
    let mut set = empty_set(vec![100.0, 101.0]);
    set.macd[0] = Some(0.2);
    set.macd_signal[0] = Some(0.2);
    set.macd[1] = Some(0.4);
    set.macd_signal[1] = Some(0.3);

    let events = detect_signals(&set, 1);
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].kind, SignalKind::Buy);
}

#[test]
fn macd_needs_previous_bar() {
    let mut set = empty_set(vec![100.0]);
    set.macd[0] = Some(0.4);
    set.macd_signal[0] = Some(0.3);
    assert!(detect_signals(&set, 0).is_empty());
}

#[test]
fn close_below_lower_band_is_a_buy() {
    let mut set = empty_set(vec![100.0, 95.0]);
    set.bb_lower[1] = Some(96.0);
    set.bb_upper[1] = Some(104.0);

    let events = detect_signals(&set, 1);
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].kind, SignalKind::Buy);
    assert_eq!(events[0].indicator, "Bollinger Bands");
    assert_eq!(events[0].reason, "breached lower band");
}

#[test]
fn close_above_upper_band_is_a_sell() {
    let mut set = empty_set(vec![100.0, 105.0]);
    set.bb_lower[1] = Some(96.0);
    set.bb_upper[1] = Some(104.0);

    let events = detect_signals(&set, 1);
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].kind, SignalKind::Sell);
    assert_eq!(events[0].reason, "breached upper band");
}

#[test]
fn close_inside_bands_is_silent() {
    let mut set = empty_set(vec![100.0, 100.0]);
    set.bb_lower[1] = Some(96.0);
    set.bb_upper[1] = Some(104.0);
    assert!(detect_signals(&set, 1).is_empty());
}

#[test]
fn multiple_indicators_stack_events() {
    let mut set = empty_set(vec![100.0, 95.0]);
    set.rsi[1] = Some(20.0);
    set.bb_lower[1] = Some(96.0);
    set.macd[0] = Some(-0.2);
    set.macd_signal[0] = Some(-0.1);
    set.macd[1] = Some(0.1);
    set.macd_signal[1] = Some(0.0);

    let events = detect_signals(&set, 1);
    assert_eq!(events.len(), 3);
    assert!(events.iter().all(|e| e.kind == SignalKind::Buy));
}

#[test]
fn trend_label_from_sma_pair() {
    let mut set = empty_set(vec![100.0, 101.0]);
    set.sma_20[1] = Some(105.0);
    set.sma_50[1] = Some(100.0);
    assert_eq!(trend_label(&set, 1), TrendLabel::Uptrend);

    set.sma_20[1] = Some(95.0);
    assert_eq!(trend_label(&set, 1), TrendLabel::Downtrend);

    set.sma_20[1] = Some(100.0);
    assert_eq!(trend_label(&set, 1), TrendLabel::Neutral);
}

#[test]
fn trend_label_is_neutral_when_undefined() {
    let set = empty_set(vec![100.0, 101.0]);
    assert_eq!(trend_label(&set, 1), TrendLabel::Neutral);
}
