//! Nearest-neighbor player comparison.
//!
//! Given one player's per-game profile and a league-wide pool of profiles,
//! finds the most statistically similar peer: the pool is filtered (position
//! group, self-exclusion, production floor), each of the seven features is
//! standardized against the filtered pool, and candidates are ranked by
//! cosine similarity to the standardized target vector.
//!
//! The fit side of standardization only ever sees the filtered pool. The
//! target vector is transformed with the pool's mean and deviation but never
//! contributes to them.

use serde::Serialize;
use std::fmt;

use crate::cli::types::PlayerId;

/// Minimum points per game for a player to stay in the comparison pool.
pub const MIN_POINTS_PER_GAME: f64 = 5.0;

/// Threshold below which a standard deviation or vector norm is treated as zero.
const EPSILON: f64 = 1e-9;

/// One player-season's per-game statistical profile.
///
/// Shooting percentages are fractions in [0, 1]; display layers scale them.
/// Missing upstream values are coerced to 0.0 before a profile is built, so
/// every field is always a finite number.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StatProfile {
    pub pts: f64,
    pub reb: f64,
    pub ast: f64,
    pub stl: f64,
    pub blk: f64,
    pub fg_pct: f64,
    pub ft_pct: f64,
}

impl StatProfile {
    /// Fixed-order feature vector used by the similarity metric.
    pub fn features(&self) -> [f64; 7] {
        [
            self.pts,
            self.reb,
            self.ast,
            self.stl,
            self.blk,
            self.fg_pct,
            self.ft_pct,
        ]
    }
}

/// Identity plus profile for exactly one player-season.
#[derive(Debug, Clone, Serialize)]
pub struct PlayerRecord {
    pub id: PlayerId,
    pub name: String,
    /// Coarse position label as the stats API reports it, e.g. "G" or "F-C".
    pub position: String,
    pub profile: StatProfile,
}

/// Why no comparable player could be produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum UnavailableReason {
    PopulationUnavailable,
    EmptyAfterFilter,
}

impl fmt::Display for UnavailableReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            UnavailableReason::PopulationUnavailable => "population unavailable",
            UnavailableReason::EmptyAfterFilter => "population empty after filtering",
        };
        write!(f, "{}", s)
    }
}

/// Outcome of a comparison query. Every call yields exactly one variant;
/// degenerate pools surface as `Unavailable`, never as a silent partial match.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum ComparisonResult {
    Match {
        name: String,
        /// Cosine similarity scaled to [-100, 100], rounded to 2 decimals.
        similarity_pct: f64,
    },
    Unavailable { reason: UnavailableReason },
}

/// Coarse position-group test keyed on the leading letter of the group tag.
///
/// "G" matches "PG", "SG" and "G-F"; "F" matches "Forward-Center". This is
/// containment, not equality, so hybrid labels land in every group they
/// mention. Kept as its own function so a stricter positional taxonomy can
/// replace it without touching the similarity math.
pub fn position_matches_group(position: &str, group: &str) -> bool {
    let Some(letter) = group.chars().next() else {
        return true;
    };
    position
        .to_ascii_uppercase()
        .contains(letter.to_ascii_uppercase())
}

/// Per-feature mean and population standard deviation over a pool.
struct FeatureScaler {
    mean: [f64; 7],
    stdev: [f64; 7],
}

impl FeatureScaler {
    /// Fit over the pool rows. Uses the population deviation (N denominator):
    /// the pool is the full comparison universe, not a sample of one.
    fn fit(rows: &[[f64; 7]]) -> Self {
        let n = rows.len() as f64;
        let mut mean = [0.0; 7];
        let mut stdev = [0.0; 7];

        for row in rows {
            for (m, v) in mean.iter_mut().zip(row) {
                *m += v;
            }
        }
        for m in &mut mean {
            *m /= n;
        }

        for row in rows {
            for i in 0..7 {
                stdev[i] += (row[i] - mean[i]).powi(2);
            }
        }
        for s in &mut stdev {
            *s = (*s / n).sqrt();
        }

        Self { mean, stdev }
    }

    /// Standardize one vector. A feature with (near-)zero deviation across
    /// the pool carries no signal and maps to 0.0 on that dimension for every
    /// vector, target included, rather than dividing by zero.
    fn transform(&self, features: &[f64; 7]) -> [f64; 7] {
        let mut out = [0.0; 7];
        for i in 0..7 {
            if self.stdev[i] >= EPSILON {
                out[i] = (features[i] - self.mean[i]) / self.stdev[i];
            }
        }
        out
    }
}

/// Cosine similarity in [-1, 1]. Defined as 0.0 when either vector has
/// (near-)zero magnitude, so degenerate inputs never produce NaN.
pub fn cosine_similarity(a: &[f64; 7], b: &[f64; 7]) -> f64 {
    let mut dot = 0.0;
    let mut norm_a = 0.0;
    let mut norm_b = 0.0;
    for i in 0..7 {
        dot += a[i] * b[i];
        norm_a += a[i] * a[i];
        norm_b += b[i] * b[i];
    }
    let norm_a = norm_a.sqrt();
    let norm_b = norm_b.sqrt();
    if norm_a < EPSILON || norm_b < EPSILON {
        return 0.0;
    }
    dot / (norm_a * norm_b)
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Find the most statistically similar peer for `target` in `population`.
///
/// `None` for the population means the upstream fetch failed; an empty or
/// fully filtered-out pool is reported distinctly. The filter keeps records
/// that match the optional position group, are not the target themselves
/// (case-insensitive name match), and clear the production floor of
/// [`MIN_POINTS_PER_GAME`].
///
/// Ties in similarity keep the earliest pool row, so the result is
/// deterministic for a deterministic population ordering.
pub fn find_closest_match(
    target: &PlayerRecord,
    population: Option<&[PlayerRecord]>,
    position_filter: Option<&str>,
) -> ComparisonResult {
    let Some(population) = population else {
        return ComparisonResult::Unavailable {
            reason: UnavailableReason::PopulationUnavailable,
        };
    };

    let pool: Vec<&PlayerRecord> = population
        .iter()
        .filter(|p| {
            position_filter
                .map(|group| position_matches_group(&p.position, group))
                .unwrap_or(true)
        })
        .filter(|p| !p.name.eq_ignore_ascii_case(&target.name))
        .filter(|p| p.profile.pts >= MIN_POINTS_PER_GAME)
        .collect();

    if pool.is_empty() {
        return ComparisonResult::Unavailable {
            reason: UnavailableReason::EmptyAfterFilter,
        };
    }

    let rows: Vec<[f64; 7]> = pool.iter().map(|p| p.profile.features()).collect();
    let scaler = FeatureScaler::fit(&rows);
    let target_vec = scaler.transform(&target.profile.features());

    let mut best_idx = 0;
    let mut best_sim = f64::NEG_INFINITY;
    for (i, row) in rows.iter().enumerate() {
        let sim = cosine_similarity(&target_vec, &scaler.transform(row));
        if sim > best_sim {
            best_idx = i;
            best_sim = sim;
        }
    }

    ComparisonResult::Match {
        name: pool[best_idx].name.clone(),
        similarity_pct: round2(best_sim * 100.0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64, epsilon: f64) -> bool {
        (a - b).abs() < epsilon
    }

    fn record(name: &str, position: &str, profile: StatProfile) -> PlayerRecord {
        PlayerRecord {
            id: PlayerId::new(name.len() as u64),
            name: name.to_string(),
            position: position.to_string(),
            profile,
        }
    }

    fn profile(pts: f64, reb: f64, ast: f64) -> StatProfile {
        StatProfile {
            pts,
            reb,
            ast,
            stl: 1.0,
            blk: 0.5,
            fg_pct: 0.45,
            ft_pct: 0.80,
        }
    }

    // ---- FeatureScaler ----

    #[test]
    fn scaler_known_values() {
        // Feature 0 over rows: [2, 4, 4, 4, 5, 5, 7, 9]
        // mean = 5.0, population variance = 4.0, stdev = 2.0
        let rows: Vec<[f64; 7]> = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]
            .iter()
            .map(|&v| [v, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0])
            .collect();
        let scaler = FeatureScaler::fit(&rows);

        assert!(approx_eq(scaler.mean[0], 5.0, 1e-10));
        assert!(approx_eq(scaler.stdev[0], 2.0, 1e-10));

        let z = scaler.transform(&[9.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0]);
        assert!(approx_eq(z[0], 2.0, 1e-10));
    }

    #[test]
    fn scaler_zero_variance_feature_maps_to_zero() {
        // Every row identical on feature 1; standardizing must not divide by zero.
        let rows = vec![
            [1.0, 7.0, 0.0, 0.0, 0.0, 0.0, 0.0],
            [3.0, 7.0, 0.0, 0.0, 0.0, 0.0, 0.0],
        ];
        let scaler = FeatureScaler::fit(&rows);

        let z = scaler.transform(&[1.0, 100.0, 0.0, 0.0, 0.0, 0.0, 0.0]);
        assert!(z[1].is_finite());
        assert!(approx_eq(z[1], 0.0, 1e-10));
    }

    // ---- cosine_similarity ----

    #[test]
    fn cosine_symmetry() {
        let a = [1.0, 2.0, -1.0, 0.5, 0.0, 3.0, -2.0];
        let b = [0.5, -1.0, 2.0, 1.5, 1.0, 0.0, 2.0];
        assert!(approx_eq(
            cosine_similarity(&a, &b),
            cosine_similarity(&b, &a),
            1e-12
        ));
    }

    #[test]
    fn cosine_reflexivity() {
        let a = [1.0, 2.0, -1.0, 0.5, 0.25, 3.0, -2.0];
        assert!(approx_eq(cosine_similarity(&a, &a), 1.0, 1e-12));
    }

    #[test]
    fn cosine_opposite_vectors_negative() {
        let a = [1.0, 2.0, 3.0, 0.0, 0.0, 0.0, 0.0];
        let b = [-1.0, -2.0, -3.0, 0.0, 0.0, 0.0, 0.0];
        assert!(approx_eq(cosine_similarity(&a, &b), -1.0, 1e-12));
    }

    #[test]
    fn cosine_zero_norm_is_zero_not_nan() {
        let zero = [0.0; 7];
        let a = [1.0, 2.0, 3.0, 0.0, 0.0, 0.0, 0.0];
        assert_eq!(cosine_similarity(&zero, &a), 0.0);
        assert_eq!(cosine_similarity(&zero, &zero), 0.0);
    }

    // ---- position_matches_group ----

    #[test]
    fn position_group_containment() {
        assert!(position_matches_group("PG", "G"));
        assert!(position_matches_group("SG", "G"));
        assert!(position_matches_group("G-F", "G"));
        assert!(position_matches_group("G-F", "F"));
        assert!(position_matches_group("Forward-Center", "f"));
        assert!(!position_matches_group("C", "G"));
        assert!(!position_matches_group("", "G"));
        // Empty group token places no constraint.
        assert!(position_matches_group("C", ""));
    }

    // ---- find_closest_match ----

    #[test]
    fn unavailable_population_short_circuits() {
        let target = record("Target", "G", profile(20.0, 5.0, 5.0));
        let result = find_closest_match(&target, None, None);
        assert_eq!(
            result,
            ComparisonResult::Unavailable {
                reason: UnavailableReason::PopulationUnavailable
            }
        );
    }

    #[test]
    fn empty_population_reports_empty_after_filter() {
        let target = record("Target", "G", profile(20.0, 5.0, 5.0));
        let result = find_closest_match(&target, Some(&[]), None);
        assert_eq!(
            result,
            ComparisonResult::Unavailable {
                reason: UnavailableReason::EmptyAfterFilter
            }
        );
    }

    #[test]
    fn self_is_excluded_case_insensitively() {
        let target = record("Luka Doncic", "G", profile(32.0, 9.0, 9.0));
        let population = vec![
            record("LUKA DONCIC", "G", profile(32.0, 9.0, 9.0)),
            record("Trae Young", "G", profile(26.0, 3.0, 10.0)),
        ];

        match find_closest_match(&target, Some(&population), None) {
            ComparisonResult::Match { name, .. } => assert_eq!(name, "Trae Young"),
            other => panic!("expected a match, got {:?}", other),
        }
    }

    #[test]
    fn production_floor_excludes_low_scorers() {
        let target = record("Target", "G", profile(4.9, 2.0, 2.0));
        let population = vec![
            // Identical profile, but below the floor: must not be matched.
            record("Bench Twin", "G", profile(4.9, 2.0, 2.0)),
            record("Starter", "G", profile(18.0, 4.0, 6.0)),
        ];

        match find_closest_match(&target, Some(&population), None) {
            ComparisonResult::Match { name, .. } => assert_eq!(name, "Starter"),
            other => panic!("expected a match, got {:?}", other),
        }
    }

    #[test]
    fn floor_filter_can_empty_the_pool() {
        let target = record("Target", "G", profile(20.0, 5.0, 5.0));
        let population = vec![
            record("Deep Bench A", "G", profile(2.0, 1.0, 0.5)),
            record("Deep Bench B", "G", profile(4.99, 1.0, 0.5)),
        ];

        assert_eq!(
            find_closest_match(&target, Some(&population), None),
            ComparisonResult::Unavailable {
                reason: UnavailableReason::EmptyAfterFilter
            }
        );
    }

    #[test]
    fn position_filter_narrows_pool() {
        let target = record("Target", "Guard", profile(22.0, 4.0, 7.0));
        let population = vec![
            // Statistically closer, wrong group.
            record("Big Man", "C", profile(22.0, 4.0, 7.0)),
            record("Combo Guard", "G-F", profile(15.0, 5.0, 4.0)),
        ];

        match find_closest_match(&target, Some(&population), Some("G")) {
            ComparisonResult::Match { name, .. } => assert_eq!(name, "Combo Guard"),
            other => panic!("expected a match, got {:?}", other),
        }
    }

    #[test]
    fn ties_keep_first_pool_row() {
        let target = record("Target", "G", profile(20.0, 5.0, 5.0));
        // Two candidates with identical profiles tie exactly; first wins.
        let population = vec![
            record("First Twin", "G", profile(25.0, 6.0, 6.0)),
            record("Second Twin", "G", profile(25.0, 6.0, 6.0)),
            record("Outlier", "G", profile(8.0, 12.0, 1.0)),
        ];

        match find_closest_match(&target, Some(&population), None) {
            ComparisonResult::Match { name, .. } => assert_eq!(name, "First Twin"),
            other => panic!("expected a match, got {:?}", other),
        }
    }

    #[test]
    fn target_row_in_population_does_not_disturb_scoring() {
        // The target's own row is removed before the fit, so its presence in
        // the population must not change the selected match or its score.
        let target = record("Target", "G", profile(24.0, 6.0, 6.0));
        let others = vec![
            record("Candidate A", "G", profile(25.0, 6.5, 5.5)),
            record("Candidate B", "G", profile(12.0, 9.0, 2.0)),
            record("Candidate C", "G", profile(18.0, 3.0, 9.0)),
        ];
        let mut with_target = others.clone();
        with_target.insert(1, target.clone());

        let without = find_closest_match(&target, Some(&others), None);
        let with = find_closest_match(&target, Some(&with_target), None);
        assert_eq!(without, with);
    }

    #[test]
    fn single_qualifying_row_is_forced_match() {
        let target = record("Target", "G", profile(30.0, 7.0, 7.0));
        let population = vec![
            record("Target", "G", profile(30.0, 7.0, 7.0)),
            record("Only Peer", "C", profile(11.0, 11.0, 1.0)),
        ];

        match find_closest_match(&target, Some(&population), None) {
            ComparisonResult::Match { name, similarity_pct } => {
                assert_eq!(name, "Only Peer");
                assert!(similarity_pct.is_finite());
            }
            other => panic!("expected a match, got {:?}", other),
        }
    }

    #[test]
    fn similarity_pct_rounded_to_two_decimals() {
        let target = record("Target", "G", profile(24.0, 6.0, 6.0));
        let population = vec![
            record("A", "G", profile(25.0, 6.5, 5.5)),
            record("B", "G", profile(12.0, 9.0, 2.0)),
            record("C", "G", profile(18.0, 3.0, 9.0)),
        ];

        match find_closest_match(&target, Some(&population), None) {
            ComparisonResult::Match { similarity_pct, .. } => {
                assert!(similarity_pct <= 100.0 && similarity_pct >= -100.0);
                assert!(approx_eq(
                    similarity_pct,
                    (similarity_pct * 100.0).round() / 100.0,
                    1e-12
                ));
            }
            other => panic!("expected a match, got {:?}", other),
        }
    }
}
