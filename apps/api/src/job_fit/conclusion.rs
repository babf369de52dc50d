use crate::job_fit::scoring_config::{ConclusionMetric, ConclusionTable};

/// Picks the verdict: overrides first, then score tiers, both in listed order
/// with the first satisfied rule winning; the default message otherwise.
pub fn select_conclusion(table: &ConclusionTable, score: u32, req_coverage: u32) -> &str {
    let metric_value = |metric: ConclusionMetric| match metric {
        ConclusionMetric::ReqCoverage => req_coverage,
        ConclusionMetric::Score => score,
    };

    if let Some(rule) = table
        .overrides
        .iter()
        .find(|rule| metric_value(rule.metric) >= rule.threshold)
    {
        return &rule.message;
    }

    table
        .tiers
        .iter()
        .find(|tier| score >= tier.threshold)
        .map(|tier| tier.message.as_str())
        .unwrap_or(table.default_message.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::job_fit::scoring_config::{ConclusionOverride, ScoreTier, ScoringConfig};

    fn table(overrides: Vec<(ConclusionMetric, u32, &str)>, tiers: Vec<(u32, &str)>) -> ConclusionTable {
        ConclusionTable {
            overrides: overrides
                .into_iter()
                .map(|(metric, threshold, message)| ConclusionOverride {
                    metric,
                    threshold,
                    message: message.to_string(),
                })
                .collect(),
            tiers: tiers
                .into_iter()
                .map(|(threshold, message)| ScoreTier {
                    threshold,
                    message: message.to_string(),
                })
                .collect(),
            default_message: "default".to_string(),
        }
    }

    #[test]
    fn test_override_beats_tier() {
        let t = table(
            vec![(ConclusionMetric::ReqCoverage, 85, "override")],
            vec![(85, "tier")],
        );
        assert_eq!(select_conclusion(&t, 90, 90), "override");
    }

    #[test]
    fn test_first_listed_rule_wins() {
        let t = table(
            vec![],
            vec![(40, "listed first"), (85, "higher but later")],
        );
        assert_eq!(select_conclusion(&t, 90, 0), "listed first");
    }

    #[test]
    fn test_falls_through_to_tiers_then_default() {
        let t = table(
            vec![(ConclusionMetric::ReqCoverage, 85, "override")],
            vec![(65, "moderate"), (40, "partial")],
        );
        assert_eq!(select_conclusion(&t, 70, 50), "moderate");
        assert_eq!(select_conclusion(&t, 41, 50), "partial");
        assert_eq!(select_conclusion(&t, 10, 50), "default");
    }

    #[test]
    fn test_empty_table_uses_default() {
        let t = table(vec![], vec![]);
        assert_eq!(select_conclusion(&t, 100, 100), "default");
    }

    #[test]
    fn test_default_table_priority_chain() {
        let t = ScoringConfig::default().conclusions;
        assert!(select_conclusion(&t, 96, 0).starts_with("Exceptional fit"));
        assert!(select_conclusion(&t, 90, 90).starts_with("High Potential Match"));
        assert!(select_conclusion(&t, 88, 50).starts_with("Strong technical fit"));
        assert!(select_conclusion(&t, 50, 75).starts_with("Qualified Match"));
        assert!(select_conclusion(&t, 66, 10).starts_with("Moderate fit"));
        assert!(select_conclusion(&t, 40, 10).starts_with("Partial Match"));
        assert!(select_conclusion(&t, 39, 69).starts_with("Low match probability"));
    }
}
