use crate::rule::RuleRecord;
use itertools::{Itertools, MinMaxResult};
use ordered_float::OrderedFloat;

/// Mean, minimum and maximum of a set of metric values. All `None` when
/// there were no values.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MetricStats {
    pub mean: Option<f64>,
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl MetricStats {
    pub fn of<I>(values: I) -> MetricStats
    where
        I: IntoIterator<Item = f64>,
    {
        let values: Vec<f64> = values.into_iter().collect();
        if values.is_empty() {
            return MetricStats::default();
        }
        let mean = values.iter().sum::<f64>() / values.len() as f64;
        let (min, max) = match values.iter().cloned().map(OrderedFloat).minmax() {
            MinMaxResult::NoElements => return MetricStats::default(),
            MinMaxResult::OneElement(x) => (x, x),
            MinMaxResult::MinMax(min, max) => (min, max),
        };
        MetricStats {
            mean: Some(mean),
            min: Some(min.into_inner()),
            max: Some(max.into_inner()),
        }
    }
}

/// Aggregate quality of a rule set. Undefined metric values are left out
/// of the aggregates rather than counted as zero.
#[derive(Clone, Debug, PartialEq)]
pub struct RuleSummary {
    pub count: usize,
    pub support: MetricStats,
    pub confidence: MetricStats,
    pub lift: MetricStats,
    pub mean_cosine: Option<f64>,
}

impl RuleSummary {
    pub fn of(rules: &[RuleRecord]) -> RuleSummary {
        RuleSummary {
            count: rules.len(),
            support: MetricStats::of(rules.iter().map(|r| r.support)),
            confidence: MetricStats::of(rules.iter().map(|r| r.confidence)),
            lift: MetricStats::of(rules.iter().filter_map(|r| r.lift)),
            mean_cosine: MetricStats::of(rules.iter().filter_map(|r| r.cosine)).mean,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{MetricStats, RuleSummary};
    use crate::rule::RuleRecord;

    fn record(support: f64, confidence: f64, lift: Option<f64>) -> RuleRecord {
        RuleRecord {
            antecedent: vec!["a".to_owned()],
            consequent: vec!["b".to_owned()],
            support,
            confidence,
            lift,
            leverage: None,
            conviction: None,
            cosine: crate::rule::cosine(support, lift),
        }
    }

    #[test]
    fn test_empty() {
        let summary = RuleSummary::of(&[]);
        assert_eq!(summary.count, 0);
        assert_eq!(summary.support, MetricStats::default());
        assert_eq!(summary.mean_cosine, None);
    }

    #[test]
    fn test_skips_undefined_values() {
        let summary = RuleSummary::of(&[
            record(0.2, 0.5, Some(2.0)),
            record(0.4, 1.0, None),
            record(0.6, 0.75, Some(1.0)),
        ]);
        assert_eq!(summary.count, 3);
        assert!((summary.support.mean.unwrap() - 0.4).abs() < 1e-12);
        assert_eq!(summary.support.min, Some(0.2));
        assert_eq!(summary.support.max, Some(0.6));
        assert_eq!(summary.confidence.max, Some(1.0));
        assert!((summary.lift.mean.unwrap() - 1.5).abs() < 1e-12);
        assert_eq!(summary.lift.min, Some(1.0));
        let expected_cosine = ((0.4f64).sqrt() + (0.6f64).sqrt()) / 2.0;
        assert!((summary.mean_cosine.unwrap() - expected_cosine).abs() < 1e-12);
    }
}
