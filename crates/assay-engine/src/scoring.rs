//! Scoring and confidence aggregation.
//!
//! Weights per entity kind:
//!
//! | Project        | Weight | NGO         | Weight |
//! |----------------|--------|-------------|--------|
//! | feasibility    | 0.25   | credibility | 0.40   |
//! | impact         | 0.25   | impact      | 0.35   |
//! | innovation     | 0.20   | compliance  | 0.25   |
//! | sustainability | 0.20   |             |        |
//! | 100 - risk     | 0.10   |             |        |
//!
//! All functions here are pure; the orchestrators feed them analyzer output
//! that has already been clamped by [`AnalysisResult::normalized`].

use assay_config::MAX_LIST_LIMIT;
use assay_core::analysis::{AnalysisResult, ScreeningResult};
use assay_core::enums::Dimension;

/// One weighted term of an overall score.
#[derive(Debug, Clone, Copy)]
pub struct Term {
    pub dimension: Dimension,
    pub weight: f64,
    /// Score contributes as `100 - score` (risk: lower is better).
    pub inverted: bool,
}

impl Term {
    const fn direct(dimension: Dimension, weight: f64) -> Self {
        Self {
            dimension,
            weight,
            inverted: false,
        }
    }

    const fn inverted(dimension: Dimension, weight: f64) -> Self {
        Self {
            dimension,
            weight,
            inverted: true,
        }
    }
}

pub const PROJECT_TERMS: [Term; 5] = [
    Term::direct(Dimension::Feasibility, 0.25),
    Term::direct(Dimension::Impact, 0.25),
    Term::direct(Dimension::Innovation, 0.20),
    Term::direct(Dimension::Sustainability, 0.20),
    Term::inverted(Dimension::Risk, 0.10),
];

pub const NGO_TERMS: [Term; 3] = [
    Term::direct(Dimension::Credibility, 0.40),
    Term::direct(Dimension::Impact, 0.35),
    Term::direct(Dimension::Compliance, 0.25),
];

/// Weighted sum of the terms, rounded half away from zero and clamped to `[0, 100]`.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn overall_score(terms: &[Term], score_of: impl Fn(Dimension) -> f64) -> u8 {
    let total: f64 = terms
        .iter()
        .map(|term| {
            let score = score_of(term.dimension);
            let contribution = if term.inverted { 100.0 - score } else { score };
            contribution * term.weight
        })
        .sum();
    total.round().clamp(0.0, 100.0) as u8
}

/// Concatenate `lists` in order and keep the first `limit` entries, never more
/// than [`MAX_LIST_LIMIT`].
pub fn merge_capped<'a>(lists: impl IntoIterator<Item = &'a [String]>, limit: usize) -> Vec<String> {
    lists
        .into_iter()
        .flatten()
        .take(limit.min(MAX_LIST_LIMIT))
        .cloned()
        .collect()
}

/// Arithmetic mean; 0 for an empty slice.
#[allow(clippy::cast_precision_loss)]
pub fn mean_confidence(confidences: &[f64]) -> f64 {
    if confidences.is_empty() {
        return 0.0;
    }
    confidences.iter().sum::<f64>() / confidences.len() as f64
}

// ---------------------------------------------------------------------------
// Entity aggregation
// ---------------------------------------------------------------------------

/// Analyzer output for the five project dimensions.
#[derive(Debug, Clone)]
pub struct ProjectAnalyses {
    pub feasibility: AnalysisResult,
    pub impact: AnalysisResult,
    pub risk: AnalysisResult,
    pub innovation: AnalysisResult,
    pub sustainability: AnalysisResult,
}

impl ProjectAnalyses {
    const fn get(&self, dimension: Dimension) -> Option<&AnalysisResult> {
        match dimension {
            Dimension::Feasibility => Some(&self.feasibility),
            Dimension::Impact => Some(&self.impact),
            Dimension::Risk => Some(&self.risk),
            Dimension::Innovation => Some(&self.innovation),
            Dimension::Sustainability => Some(&self.sustainability),
            Dimension::Credibility | Dimension::Compliance => None,
        }
    }
}

/// Analyzer output for the three NGO dimensions.
#[derive(Debug, Clone)]
pub struct NgoAnalyses {
    pub credibility: AnalysisResult,
    pub impact: AnalysisResult,
    pub compliance: AnalysisResult,
}

impl NgoAnalyses {
    const fn get(&self, dimension: Dimension) -> Option<&AnalysisResult> {
        match dimension {
            Dimension::Credibility => Some(&self.credibility),
            Dimension::Impact => Some(&self.impact),
            Dimension::Compliance => Some(&self.compliance),
            _ => None,
        }
    }
}

/// Combine project analyses into a screening result.
pub fn aggregate_project(analyses: &ProjectAnalyses, list_limit: usize) -> ScreeningResult {
    let overall = overall_score(&PROJECT_TERMS, |d| {
        analyses.get(d).map_or(0.0, |a| a.score)
    });

    ScreeningResult {
        feasibility_score: analyses.feasibility.score,
        impact_score: analyses.impact.score,
        risk_score: analyses.risk.score,
        innovation_score: analyses.innovation.score,
        sustainability_score: analyses.sustainability.score,
        overall_score: overall,
        recommendations: merge_capped(
            [
                analyses.feasibility.recommendations.as_slice(),
                analyses.impact.recommendations.as_slice(),
                analyses.innovation.recommendations.as_slice(),
                analyses.sustainability.recommendations.as_slice(),
            ],
            list_limit,
        ),
        concerns: merge_capped(
            [
                analyses.risk.concerns.as_slice(),
                analyses.feasibility.concerns.as_slice(),
                analyses.impact.concerns.as_slice(),
            ],
            list_limit,
        ),
        confidence: mean_confidence(&[
            analyses.feasibility.confidence,
            analyses.impact.confidence,
            analyses.risk.confidence,
            analyses.innovation.confidence,
            analyses.sustainability.confidence,
        ]),
    }
}

/// Combine NGO analyses into a screening result.
///
/// NGOs have no innovation or risk analyzer: innovation is always 0 and risk
/// is derived as `100 - compliance`. Impact concerns are not reported.
pub fn aggregate_ngo(analyses: &NgoAnalyses, list_limit: usize) -> ScreeningResult {
    let overall = overall_score(&NGO_TERMS, |d| analyses.get(d).map_or(0.0, |a| a.score));

    ScreeningResult {
        feasibility_score: analyses.credibility.score,
        impact_score: analyses.impact.score,
        risk_score: 100.0 - analyses.compliance.score,
        innovation_score: 0.0,
        sustainability_score: analyses.impact.sustainability.unwrap_or(0.0),
        overall_score: overall,
        recommendations: merge_capped(
            [
                analyses.credibility.recommendations.as_slice(),
                analyses.impact.recommendations.as_slice(),
                analyses.compliance.recommendations.as_slice(),
            ],
            list_limit,
        ),
        concerns: merge_capped(
            [
                analyses.credibility.concerns.as_slice(),
                analyses.compliance.concerns.as_slice(),
            ],
            list_limit,
        ),
        confidence: mean_confidence(&[
            analyses.credibility.confidence,
            analyses.impact.confidence,
            analyses.compliance.confidence,
        ]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn uniform_project(score: f64, risk: f64) -> ProjectAnalyses {
        ProjectAnalyses {
            feasibility: AnalysisResult::new(score, 0.8),
            impact: AnalysisResult::new(score, 0.8),
            risk: AnalysisResult::new(risk, 0.8),
            innovation: AnalysisResult::new(score, 0.8),
            sustainability: AnalysisResult::new(score, 0.8),
        }
    }

    fn numbered(prefix: &str, n: usize) -> Vec<String> {
        (1..=n).map(|i| format!("{prefix} {i}")).collect()
    }

    #[rstest]
    #[case::best(100.0, 0.0, 100)]
    #[case::worst(0.0, 100.0, 0)]
    #[case::middling(50.0, 50.0, 50)]
    #[case::half_rounds_up(55.0, 100.0, 50)]
    fn project_overall_score(#[case] score: f64, #[case] risk: f64, #[case] expected: u8) {
        let result = aggregate_project(&uniform_project(score, risk), 10);
        assert_eq!(result.overall_score, expected);
    }

    #[test]
    fn weights_sum_to_one() {
        let project: f64 = PROJECT_TERMS.iter().map(|t| t.weight).sum();
        let ngo: f64 = NGO_TERMS.iter().map(|t| t.weight).sum();
        assert!((project - 1.0).abs() < 1e-9);
        assert!((ngo - 1.0).abs() < 1e-9);
    }

    #[test]
    fn overall_score_clamps_out_of_range_input() {
        let terms = [Term::direct(Dimension::Impact, 2.0)];
        assert_eq!(overall_score(&terms, |_| 100.0), 100);
        assert_eq!(overall_score(&terms, |_| -40.0), 0);
    }

    #[test]
    fn mean_of_five_confidences() {
        let mean = mean_confidence(&[0.8, 0.75, 0.85, 0.7, 0.8]);
        assert!((mean - 0.78).abs() < 1e-9);
        assert_eq!(mean_confidence(&[]), 0.0);
    }

    #[test]
    fn project_lists_follow_dimension_order_and_cap() {
        let mut analyses = uniform_project(60.0, 30.0);
        analyses.feasibility.recommendations = numbered("feasibility", 4);
        analyses.impact.recommendations = numbered("impact", 4);
        analyses.innovation.recommendations = numbered("innovation", 4);
        analyses.sustainability.recommendations = numbered("sustainability", 4);
        analyses.risk.concerns = vec!["risk 1".into()];
        analyses.feasibility.concerns = vec!["feasibility 1".into()];
        analyses.impact.concerns = vec!["impact 1".into()];
        analyses.innovation.concerns = vec!["never reported".into()];

        let result = aggregate_project(&analyses, 10);
        assert_eq!(result.recommendations.len(), 10);
        assert_eq!(result.recommendations[0], "feasibility 1");
        assert_eq!(result.recommendations[4], "impact 1");
        assert_eq!(result.recommendations[9], "innovation 2");
        assert_eq!(
            result.concerns,
            vec!["risk 1", "feasibility 1", "impact 1"]
        );
    }

    #[test]
    fn ngo_example_scores_79() {
        let analyses = NgoAnalyses {
            credibility: AnalysisResult::new(80.0, 0.9),
            impact: AnalysisResult::new(70.0, 0.6).with_sustainability(65.0),
            compliance: AnalysisResult::new(90.0, 0.9),
        };
        let result = aggregate_ngo(&analyses, 10);
        assert_eq!(result.overall_score, 79);
        assert_eq!(result.feasibility_score, 80.0);
        assert_eq!(result.risk_score, 10.0);
        assert_eq!(result.innovation_score, 0.0);
        assert_eq!(result.sustainability_score, 65.0);
        assert!((result.confidence - 0.8).abs() < 1e-9);
    }

    #[test]
    fn ngo_excludes_impact_concerns_and_defaults_sustainability() {
        let analyses = NgoAnalyses {
            credibility: AnalysisResult::new(50.0, 0.5).with_concerns(["unverified address"]),
            impact: AnalysisResult::new(50.0, 0.5).with_concerns(["small reach"]),
            compliance: AnalysisResult::new(50.0, 0.5).with_concerns(["late filing"]),
        };
        let result = aggregate_ngo(&analyses, 10);
        assert_eq!(result.concerns, vec!["unverified address", "late filing"]);
        assert_eq!(result.sustainability_score, 0.0);
    }

    #[test]
    fn merge_capped_respects_limit() {
        let a = numbered("a", 8);
        let b = numbered("b", 8);
        let merged = merge_capped([a.as_slice(), b.as_slice()], 10);
        assert_eq!(merged.len(), 10);
        assert_eq!(merged[8], "b 1");
    }

    #[test]
    fn oversized_limit_still_caps_at_ten() {
        let mut analyses = uniform_project(60.0, 30.0);
        analyses.feasibility.recommendations = numbered("feasibility", 6);
        analyses.impact.recommendations = numbered("impact", 6);
        analyses.innovation.recommendations = numbered("innovation", 6);
        analyses.sustainability.recommendations = numbered("sustainability", 6);

        let result = aggregate_project(&analyses, 25);
        assert_eq!(result.recommendations.len(), MAX_LIST_LIMIT);
        assert_eq!(result.recommendations[9], "impact 4");
    }
}
