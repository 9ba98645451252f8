// ============================================================
// Layer 5 — Strata Report
// ============================================================
// Renders the per-stratum breakdown of a run as CSV so the
// distribution of word counts can be checked or plotted
// outside this tool. SampleStore stages it with the sample.
//
// Example CSV output for a 2.5% run:
//   word_count,population,share,allocation
//   1,312,0.084011,8
//   2,1204,0.324179,30
//   3,980,0.263866,24
//
// `share` is the stratum's fraction of all distinct ingredients.

use crate::domain::stratum::StratumSummary;

const HEADER: &str = "word_count,population,share,allocation";

/// CSV text for `strata`, header included
pub fn render(strata: &[StratumSummary]) -> String {
    let total: usize = strata.iter().map(|s| s.population).sum();
    let mut out = String::from(HEADER);
    out.push('\n');
    for s in strata {
        out.push_str(&format!(
            "{},{},{:.6},{}\n",
            s.word_count,
            s.population,
            s.share_of(total),
            s.allocation
        ));
    }
    out
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render() {
        let rows = [StratumSummary::new(1, 40, 1), StratumSummary::new(3, 120, 3)];
        assert_eq!(
            render(&rows),
            "word_count,population,share,allocation\n\
             1,40,0.250000,1\n\
             3,120,0.750000,3\n"
        );
    }

    #[test]
    fn test_render_empty() {
        assert_eq!(render(&[]), "word_count,population,share,allocation\n");
    }
}
