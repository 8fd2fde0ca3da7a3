//! Unit tests for indicator, level and pattern modules

use chrono::NaiveDate;
use idx_scanner::config::{BreakoutConfig, ReversalConfig};
use idx_scanner::data::Candle;
use idx_scanner::indicators::{ema, macd, sma, MacdParams};
use idx_scanner::levels::calculate_support_resistance;
use idx_scanner::patterns::{
    breakout_signal, detect_break_resistance, detect_dead_cross, detect_golden_cross,
    detect_high_volume, detect_marubozu, find_crosses, is_above_ma20, reversal_signal,
    trend_phase, CrossKind, Marubozu, TrendPhase,
};
use idx_scanner::strategy::{evaluate, MatchDetails, ScanRule};

fn date(i: usize) -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 1, 1).unwrap() + chrono::Duration::days(i as i64)
}

/// Flat candles (open == close) with a one-point range around each close
fn flat(closes: &[f64]) -> Vec<Candle> {
    closes
        .iter()
        .enumerate()
        .map(|(i, &c)| Candle::new(date(i), c, c + 1.0, c - 1.0, c, 1_000))
        .collect()
}

/// MA5 crosses above MA20 on candle 20, which is a bullish marubozu
fn golden_cross_fixture() -> Vec<Candle> {
    let mut closes = vec![100.0; 15];
    closes.extend([95.0; 5]);
    let mut candles = flat(&closes);
    candles.push(Candle::new(date(20), 120.0, 130.0, 120.0, 130.0, 5_000));
    candles
}

/// Quiet tape then a high-volume close through the 10-session high
fn breakout_fixture() -> Vec<Candle> {
    let mut candles = flat(&[100.0; 19]);
    candles.push(Candle::new(date(19), 101.0, 109.0, 100.0, 108.0, 3_000));
    candles
}

/// Hand-built series with three swing lows (92, 90, 93) and two swing highs (110, 112)
fn swing_fixture() -> Vec<Candle> {
    let hl = [
        (104.0, 98.0),
        (103.0, 96.0),
        (102.0, 92.0),
        (106.0, 95.0),
        (110.0, 97.0),
        (107.0, 99.0),
        (105.0, 96.0),
        (101.0, 90.0),
        (108.0, 94.0),
        (112.0, 97.0),
        (109.0, 98.0),
        (104.0, 95.0),
        (103.0, 93.0),
        (106.0, 96.0),
    ];
    let mut candles: Vec<Candle> = hl
        .iter()
        .enumerate()
        .map(|(i, &(h, l))| {
            let mid = (h + l) / 2.0;
            Candle::new(date(i), mid, h, l, mid, 1_000)
        })
        .collect();
    candles.push(Candle::new(date(14), 100.0, 101.0, 99.0, 100.0, 1_000));
    candles
}

#[test]
fn test_sma_matches_hand_computed_means() {
    let closes: Vec<f64> = (10..20).map(|c| c as f64).collect();
    let candles = flat(&closes);
    let result = sma(&candles, 3);

    assert_eq!(result.len(), 10);
    assert_eq!(result[0], None);
    assert_eq!(result[1], None);
    for i in 2..10 {
        let expected = (closes[i - 2] + closes[i - 1] + closes[i]) / 3.0;
        assert_eq!(result[i], Some(expected), "index {i}");
    }
    assert_eq!(result[9], Some(18.0));
}

#[test]
fn test_ema_defined_everywhere() {
    let values: Vec<f64> = (0..30).map(|i| 100.0 + (i % 7) as f64).collect();
    let result = ema(&values, 12);
    assert_eq!(result.len(), values.len());
    assert_eq!(result[0], values[0]);
    assert!(result.iter().all(|v| v.is_finite()));
}

#[test]
fn test_macd_histogram_length_and_alignment() {
    let closes: Vec<f64> = (0..60).map(|i| 100.0 + (i as f64 * 0.3).cos() * 5.0).collect();
    let candles = flat(&closes);
    let result = macd(&candles, MacdParams::default());

    assert_eq!(result.histogram.len(), candles.len() - 25 - 8);
    let points = result.points(&candles);
    assert_eq!(points.len(), result.histogram.len());
    assert_eq!(points.first().unwrap().date, candles[33].date);
    assert_eq!(points.last().unwrap().date, candles[59].date);

    // the signal EMA starts on the first MACD value of a full slow period
    let line_tail: Vec<f64> = result.line[25..].to_vec();
    assert_eq!(result.signal, ema(&line_tail, 9));
    assert_eq!(result.histogram[0], result.line[33] - result.signal[0]);
    assert_eq!(points[0].signal, result.signal[0]);
    let last = result.histogram.len() - 1;
    assert_eq!(result.histogram[last], result.line[59] - result.signal[last]);
}

#[test]
fn test_support_resistance_levels() {
    let candles = swing_fixture();
    let levels = calculate_support_resistance(&candles, 30, 3);
    assert_eq!(levels.current_close, Some(100.0));
    assert_eq!(levels.supports, vec![Some(93.0), Some(92.0), Some(90.0)]);
    assert_eq!(levels.resistances, vec![Some(110.0), Some(112.0), None]);
}

#[test]
fn test_support_resistance_respects_lookback() {
    let candles = swing_fixture();
    let levels = calculate_support_resistance(&candles, 10, 3);
    assert_eq!(levels.supports, vec![Some(93.0), Some(90.0), None]);
    assert_eq!(levels.resistances, vec![Some(112.0), None, None]);
}

#[test]
fn test_support_resistance_zero_lookback_uses_whole_series() {
    let candles = swing_fixture();
    let whole = calculate_support_resistance(&candles, candles.len(), 3);
    let levels = calculate_support_resistance(&candles, 0, 3);
    assert_eq!(levels, whole);
    assert_eq!(levels.supports, vec![Some(93.0), Some(92.0), Some(90.0)]);
    assert_eq!(levels.resistances, vec![Some(110.0), Some(112.0), None]);
}

#[test]
fn test_support_resistance_invariants() {
    for seed in 1..6 {
        let candles: Vec<Candle> = (0..80)
            .map(|i| {
                let x = i as f64;
                let mid = 500.0 + 40.0 * (x * 0.21 * seed as f64).sin() + 15.0 * (x * 0.77).cos();
                Candle::new(date(i), mid, mid + 3.0, mid - 3.0, mid, 1_000)
            })
            .collect();
        let levels = calculate_support_resistance(&candles, 60, 5);
        let close = levels.current_close.unwrap();

        assert_eq!(levels.supports.len(), 5);
        assert_eq!(levels.resistances.len(), 5);

        let supports = levels.valid_supports();
        assert!(supports.iter().all(|&s| s < close));
        assert!(supports.windows(2).all(|w| w[0] > w[1]));
        // padding only ever trails the genuine levels
        assert!(levels.supports[supports.len()..].iter().all(|s| s.is_none()));

        let resistances = levels.valid_resistances();
        assert!(resistances.iter().all(|&r| r > close));
        assert!(resistances.windows(2).all(|w| w[0] < w[1]));
        assert!(levels.resistances[resistances.len()..].iter().all(|r| r.is_none()));
    }
}

#[test]
fn test_short_inputs_never_signal() {
    let short = flat(&[100.0; 5]);
    assert!(!detect_break_resistance(&short, 10));
    assert!(!detect_high_volume(&short, 1.5));
    assert!(!is_above_ma20(&short));
    assert!(!detect_golden_cross(&short));
    assert!(!detect_dead_cross(&short));
    assert!(!breakout_signal(&short, &BreakoutConfig::default()));
    assert!(!reversal_signal(&short, &ReversalConfig::default()));
    assert!(trend_phase(&short, 5, 20).is_none());
    assert!(find_crosses(&short, 5, 20).is_empty());

    assert!(!detect_golden_cross(&[]));
    assert!(!reversal_signal(&[], &ReversalConfig::default()));
    assert!(evaluate("EMPTY.JK", &[], &ScanRule::breakout()).is_none());
}

#[test]
fn test_golden_cross_with_marubozu_matches() {
    let candles = golden_cross_fixture();
    assert_eq!(candles.len(), 21);
    assert!(detect_golden_cross(&candles));
    assert!(!detect_golden_cross(&candles[..20]));
    assert_eq!(
        detect_marubozu(candles.last().unwrap(), 0.01),
        Some(Marubozu::Bullish)
    );

    let hit = evaluate("BBRI.JK", &candles, &ScanRule::reversal()).expect("reversal match");
    assert_eq!(hit.symbol, "BBRI.JK");
    assert_eq!(hit.close, 130.0);
    assert_eq!(hit.date, date(20));
    assert_eq!(
        hit.details,
        MatchDetails::Reversal {
            fast_ma: 102.0,
            slow_ma: 100.25
        }
    );
}

#[test]
fn test_golden_cross_without_marubozu_does_not_match() {
    let mut candles = golden_cross_fixture();
    let last = candles.last_mut().unwrap();
    last.high = 135.0;

    assert!(detect_golden_cross(&candles));
    assert_eq!(detect_marubozu(candles.last().unwrap(), 0.01), None);
    assert!(evaluate("BBRI.JK", &candles, &ScanRule::reversal()).is_none());
}

#[test]
fn test_dead_cross_and_trend_phase() {
    let mut closes = vec![100.0; 15];
    closes.extend([105.0; 5]);
    closes.push(70.0);
    let candles = flat(&closes);

    assert!(detect_dead_cross(&candles));
    assert!(!detect_golden_cross(&candles));
    assert_eq!(trend_phase(&candles, 5, 20), Some(TrendPhase::Bearish));
    assert_eq!(trend_phase(&golden_cross_fixture(), 5, 20), Some(TrendPhase::Bullish));
}

#[test]
fn test_find_crosses_reports_each_sign_change() {
    // slide from 120 to 101, rally to 130, then drop to 80
    let mut closes: Vec<f64> = (0..20).map(|i| 120.0 - i as f64).collect();
    closes.extend([130.0; 5]);
    closes.extend([80.0; 5]);
    let candles = flat(&closes);

    let events = find_crosses(&candles, 5, 20);
    assert_eq!(events.len(), 2);
    assert_eq!(events[0].kind, CrossKind::Golden);
    assert_eq!(events[0].date, date(21));
    assert_eq!(events[0].price, 130.0);
    assert_eq!(events[1].kind, CrossKind::Dead);
    assert_eq!(events[1].date, date(26));
}

#[test]
fn test_breakout_composite() {
    let candles = breakout_fixture();
    assert!(breakout_signal(&candles, &BreakoutConfig::default()));

    let hit = evaluate("TLKM.JK", &candles, &ScanRule::breakout()).expect("breakout match");
    match hit.details {
        MatchDetails::Breakout {
            resistance,
            average_volume,
            moving_average,
        } => {
            assert_eq!(resistance, 101.0);
            assert_eq!(average_volume, 1_000.0);
            assert!((moving_average - 100.4).abs() < 1e-9);
        }
        other => panic!("unexpected details {other:?}"),
    }

    // same shape on quiet volume is not a breakout
    let mut quiet = breakout_fixture();
    quiet.last_mut().unwrap().volume = 1_200;
    assert!(evaluate("TLKM.JK", &quiet, &ScanRule::breakout()).is_none());
}

#[test]
fn test_evaluate_rejects_unordered_history() {
    let mut candles = breakout_fixture();
    candles.swap(3, 4);
    assert!(evaluate("TLKM.JK", &candles, &ScanRule::breakout()).is_none());
}
