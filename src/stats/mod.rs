//! Reduction of Monkeytype payloads into the two numbers the dashboard
//! shows. The API answers with different shapes per endpoint (an array of
//! result records, or personal bests nested per test mode) and the fold
//! accepts both without trusting any field to be present.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Every test-mode bucket a personal-bests payload can carry.
pub const TEST_MODES: [&str; 5] = ["time", "words", "quote", "zen", "custom"];

/// Shown when nothing usable could be fetched.
pub const FALLBACK: StatsSummary = StatsSummary {
    highest_wpm: 63.0,
    highest_accuracy: 97.0,
};

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsSummary {
    pub highest_wpm: f64,
    pub highest_accuracy: f64,
}

/// Folds a relay payload into per-field maxima.
///
/// Scans `payload.data` as either a flat record array or as per-mode
/// buckets of record arrays, taking the maximum observed
/// `wpm` and the maximum observed `acc` independently of each other and of
/// record order. Returns `None` when no record contributed either field, so
/// the caller can substitute [`FALLBACK`]. A field observed on no record
/// while the other was reports `0.0`.
pub fn extract(payload: &Value) -> Option<StatsSummary> {
    let data = payload.get("data")?;

    let mut highest_wpm = None;
    let mut highest_accuracy = None;

    match data {
        Value::Array(records) => {
            scan_records(records, &mut highest_wpm, &mut highest_accuracy);
        }
        Value::Object(by_mode) => {
            for mode in TEST_MODES {
                let Some(Value::Object(buckets)) = by_mode.get(mode) else {
                    continue;
                };
                for bucket in buckets.values() {
                    if let Value::Array(records) = bucket {
                        scan_records(records, &mut highest_wpm, &mut highest_accuracy);
                    }
                }
            }
        }
        _ => {}
    }

    if highest_wpm.is_none() && highest_accuracy.is_none() {
        return None;
    }
    Some(StatsSummary {
        highest_wpm: highest_wpm.unwrap_or(0.0),
        highest_accuracy: highest_accuracy.unwrap_or(0.0),
    })
}

fn scan_records(records: &[Value], highest_wpm: &mut Option<f64>, highest_accuracy: &mut Option<f64>) {
    for record in records {
        if let Some(wpm) = record.get("wpm").and_then(Value::as_f64) {
            raise(highest_wpm, wpm);
        }
        if let Some(accuracy) = record.get("acc").and_then(Value::as_f64) {
            raise(highest_accuracy, accuracy);
        }
    }
}

fn raise(slot: &mut Option<f64>, candidate: f64) {
    if slot.is_none_or(|current| candidate > current) {
        *slot = Some(candidate);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn missing_payload_yields_nothing() {
        assert_eq!(extract(&Value::Null), None);
        assert_eq!(extract(&json!({})), None);
        assert_eq!(extract(&json!({"data": null})), None);
        assert_eq!(extract(&json!({"data": "oops"})), None);
    }

    #[test]
    fn empty_buckets_yield_nothing_so_fallback_applies_unchanged() {
        let payload = json!({"message": "ok", "data": {"time": {}, "zen": {}}});
        let summary = extract(&payload).unwrap_or(FALLBACK);
        assert_eq!(summary, FALLBACK);
        assert_eq!(extract(&json!({"data": []})), None);
    }

    #[test]
    fn single_record_reports_both_fields() {
        let payload = json!({
            "data": {"time": {"60": [{"wpm": 80.0, "acc": 95.0}]}}
        });
        let summary = extract(&payload).unwrap();
        assert_eq!(summary.highest_wpm, 80.0);
        assert_eq!(summary.highest_accuracy, 95.0);
    }

    #[test]
    fn maxima_are_tracked_per_field_not_per_record() {
        let payload = json!({
            "data": {"time": {
                "15": [{"wpm": 80.0, "acc": 90.0}],
                "60": [{"wpm": 60.0, "acc": 97.0}],
            }}
        });
        let summary = extract(&payload).unwrap();
        assert_eq!((summary.highest_wpm, summary.highest_accuracy), (80.0, 97.0));
    }

    #[test]
    fn result_order_does_not_matter() {
        let forward = json!({"data": [
            {"wpm": 80.0, "acc": 90.0},
            {"wpm": 60.0, "acc": 97.0},
            {"wpm": 72.5, "acc": 93.1},
        ]});
        let backward = json!({"data": [
            {"wpm": 72.5, "acc": 93.1},
            {"wpm": 60.0, "acc": 97.0},
            {"wpm": 80.0, "acc": 90.0},
        ]});
        assert_eq!(extract(&forward), extract(&backward));
        assert_eq!(
            extract(&forward),
            Some(StatsSummary { highest_wpm: 80.0, highest_accuracy: 97.0 })
        );
    }

    #[test]
    fn records_span_every_known_mode() {
        let payload = json!({"data": {
            "time":   {"15": [{"wpm": 70.0, "acc": 91.0}]},
            "words":  {"25": [{"wpm": 88.0, "acc": 89.0}]},
            "quote":  {"short": [{"wpm": 64.0, "acc": 99.2}]},
            "zen":    {"zen": [{"wpm": 50.0}]},
            "custom": {"custom": [{"acc": 96.0}]},
        }});
        let summary = extract(&payload).unwrap();
        assert_eq!((summary.highest_wpm, summary.highest_accuracy), (88.0, 99.2));
    }

    #[test]
    fn unknown_modes_and_junk_records_are_ignored() {
        let payload = json!({"data": {
            "marathon": {"60": [{"wpm": 999.0, "acc": 100.0}]},
            "time": {
                "60": [
                    {"wpm": "fast", "acc": [1, 2]},
                    {"language": "english"},
                    {"wpm": 75.0},
                    42,
                ],
                "30": "not-a-bucket",
            },
        }});
        let summary = extract(&payload).unwrap();
        assert_eq!(summary.highest_wpm, 75.0);
        assert_eq!(summary.highest_accuracy, 0.0);
    }

    #[test]
    fn integer_fields_count_as_numbers() {
        let payload = json!({"data": [{"wpm": 81, "acc": 94}]});
        let summary = extract(&payload).unwrap();
        assert_eq!((summary.highest_wpm, summary.highest_accuracy), (81.0, 94.0));
    }

    #[test]
    fn summary_serializes_with_the_wire_names() {
        let rendered = serde_json::to_value(FALLBACK).unwrap();
        assert_eq!(rendered, json!({"highestWpm": 63.0, "highestAccuracy": 97.0}));
    }
}
