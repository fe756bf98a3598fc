use super::domain::{Catalog, Domain, DomainProfile};

/// Keyword hits of one domain against a query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DomainScore {
    pub domain: Domain,
    pub hits: usize,
}

pub struct Classifier {
    catalog: Catalog,
}

impl Classifier {
    pub fn new(catalog: Catalog) -> Self {
        Self { catalog }
    }

    /// Scores the query against every domain vocabulary, in catalog order.
    pub fn scores(&self, query: &str) -> Vec<DomainScore> {
        let lowered = query.to_lowercase();
        self.catalog
            .profiles()
            .iter()
            .map(|profile| DomainScore {
                domain: profile.domain,
                hits: keyword_hits(profile, &lowered),
            })
            .collect()
    }

    /// Picks the domain with the strictly highest score. Ties keep the
    /// earlier catalog entry, so ambiguous and empty queries land on Footfall.
    pub fn classify(&self, query: &str) -> Domain {
        let scores = self.scores(query);
        let mut best = scores.first().copied().unwrap_or(DomainScore {
            domain: Domain::Footfall,
            hits: 0,
        });
        for score in scores.iter().skip(1) {
            if score.hits > best.hits {
                best = *score;
            }
        }
        log::debug!("   -> Keyword scores: {:?}", scores);
        best.domain
    }
}

impl Default for Classifier {
    fn default() -> Self {
        Self::new(Catalog::builtin())
    }
}

/// Sums every occurrence of every vocabulary entry in `lowered`. Repeats of a
/// keyword each count, and nested keywords (`traffic` inside `avg_traffic`)
/// are scored independently.
fn keyword_hits(profile: &DomainProfile, lowered: &str) -> usize {
    profile
        .keywords
        .iter()
        .map(|kw| lowered.matches(*kw).count())
        .sum()
}

pub fn classify(query: &str) -> Domain {
    Classifier::default().classify(query)
}
