// Quality selection logic
//
// Handles:
// - Similarity expansion: every catalog itag ordered by closeness to a seed
// - Availability matching: first similar itag a video actually offers
// - Quality-spec resolution: tier names and literal itags to a concrete itag

use std::str::FromStr;

use super::catalog::ITAGS_BY_QUALITY;
use super::errors::ResolveError;
use super::models::ItagId;

/// Recognized tier names, in the order reported to the user.
pub const QUALITY_TIERS: &[&str] = &["low", "medium", "high"];

/// A user-supplied quality specifier: a named tier or a literal itag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QualitySpec {
    Low,
    Medium,
    High,
    Itag(ItagId),
}

impl FromStr for QualitySpec {
    type Err = ResolveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            _ => s
                .parse::<ItagId>()
                .map(Self::Itag)
                .map_err(|_| ResolveError::UnknownQuality {
                    spec: s.to_string(),
                    candidates: None,
                }),
        }
    }
}

/// Resolve a quality spec to a concrete itag.
///
/// Tiers index into the full catalog ranking, never into a per-video
/// availability set. A literal itag passes through unchanged as long as it
/// is a member of `scope`.
pub fn itag_from_quality(spec: QualitySpec, scope: &[ItagId]) -> Result<ItagId, ResolveError> {
    let ranked: &[ItagId] = &ITAGS_BY_QUALITY;
    match spec {
        QualitySpec::High => Ok(ranked[0]),
        QualitySpec::Medium => Ok(ranked[ranked.len() / 2]),
        QualitySpec::Low => Ok(ranked[ranked.len() - 1]),
        QualitySpec::Itag(itag) if scope.contains(&itag) => Ok(itag),
        QualitySpec::Itag(itag) => Err(ResolveError::UnknownQuality {
            spec: itag.to_string(),
            candidates: Some(scope.to_vec()),
        }),
    }
}

/// All catalog itags ordered from most to least similar in quality to
/// `desired`, starting with `desired` itself.
///
/// Walks outward from the seed's rank one step at a time, taking the
/// higher-quality neighbor before the lower-quality one at equal distance;
/// once one side runs out the other drains in order. The iterator is pure:
/// calling again with the same itag reproduces the same sequence.
pub fn itags_by_similarity(
    desired: ItagId,
) -> Result<impl Iterator<Item = ItagId>, ResolveError> {
    let ranked: &'static [ItagId] = &ITAGS_BY_QUALITY;
    let seed = ranked
        .iter()
        .position(|&itag| itag == desired)
        .ok_or_else(|| ResolveError::UnknownQuality {
            spec: desired.to_string(),
            candidates: Some(ranked.to_vec()),
        })?;

    let sequence = std::iter::once(seed)
        .chain((1..ranked.len()).flat_map(move |distance| {
            let better = seed.checked_sub(distance);
            let worse = Some(seed + distance).filter(|&i| i < ranked.len());
            better.into_iter().chain(worse)
        }))
        .map(move |rank| ranked[rank]);

    Ok(sequence)
}

/// Pick the first itag in the similarity sequence that the video offers.
pub fn most_similar_available(
    sequence: impl IntoIterator<Item = ItagId>,
    available: &[ItagId],
) -> Result<ItagId, ResolveError> {
    let mut tried = Vec::new();
    for itag in sequence {
        if available.contains(&itag) {
            return Ok(itag);
        }
        tried.push(itag);
    }

    Err(ResolveError::NoFormatMatch {
        tried,
        available: available.to_vec(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolver::catalog::ITAGS;

    fn similarity(itag: ItagId) -> Vec<ItagId> {
        itags_by_similarity(itag).expect("known itag").collect()
    }

    fn rank(itag: ItagId) -> usize {
        ITAGS_BY_QUALITY
            .iter()
            .position(|&i| i == itag)
            .expect("itag in catalog")
    }

    #[test]
    fn test_similarity_from_the_middle() {
        assert_eq!(
            similarity(18),
            vec![18, 34, 6, 43, 5, 35, 36, 44, 17, 45, 13, 22, 46, 37, 38],
        );
    }

    #[test]
    fn test_similarity_from_the_top() {
        // Best itag: nothing above it, so the walk is the rank order itself.
        assert_eq!(
            similarity(38),
            vec![38, 37, 46, 22, 45, 44, 35, 43, 34, 18, 6, 5, 36, 17, 13],
        );
    }

    #[test]
    fn test_similarity_from_the_bottom() {
        assert_eq!(
            similarity(13),
            vec![13, 17, 36, 5, 6, 18, 34, 43, 35, 44, 45, 22, 46, 37, 38],
        );
    }

    #[test]
    fn test_similarity_near_the_top() {
        // The short high side drains, then the low side continues alone.
        assert_eq!(
            similarity(46),
            vec![46, 37, 22, 38, 45, 44, 35, 43, 34, 18, 6, 5, 36, 17, 13],
        );
    }

    #[test]
    fn test_similarity_is_a_permutation_widening_from_the_seed() {
        for (itag, _) in ITAGS {
            let sequence = similarity(*itag);
            assert_eq!(sequence[0], *itag);
            assert_eq!(sequence.len(), ITAGS.len());

            let mut sorted = sequence.clone();
            sorted.sort_unstable();
            sorted.dedup();
            assert_eq!(sorted.len(), ITAGS.len(), "duplicates for seed {}", itag);

            let seed = rank(*itag);
            let distances: Vec<usize> =
                sequence.iter().map(|&i| rank(i).abs_diff(seed)).collect();
            assert!(
                distances.windows(2).all(|w| w[0] <= w[1]),
                "distances not monotonic for seed {}: {:?}",
                itag,
                distances
            );
        }
    }

    #[test]
    fn test_unknown_seed_is_rejected() {
        let err = itags_by_similarity(141).map(|_| ()).unwrap_err();
        assert!(matches!(err, ResolveError::UnknownQuality { .. }));
    }

    #[test]
    fn test_most_similar_available() {
        let pick = |seed, available: &[ItagId]| {
            most_similar_available(itags_by_similarity(seed).unwrap(), available)
        };

        assert_eq!(pick(18, &[46, 38]).unwrap(), 46);
        assert_eq!(pick(38, &[17, 13]).unwrap(), 17);
        assert_eq!(pick(13, &[38, 35, 17, 13]).unwrap(), 13);

        let err = pick(46, &[]).unwrap_err();
        match err {
            ResolveError::NoFormatMatch { tried, available } => {
                assert_eq!(tried.len(), ITAGS.len());
                assert!(available.is_empty());
            }
            other => panic!("expected NoFormatMatch, got {:?}", other),
        }
    }

    #[test]
    fn test_matcher_ignores_unknown_available_itags() {
        // 999 is not a catalog member, so it can never be chosen.
        let chosen =
            most_similar_available(itags_by_similarity(18).unwrap(), &[999, 22]).unwrap();
        assert_eq!(chosen, 22);

        let err =
            most_similar_available(itags_by_similarity(18).unwrap(), &[999]).unwrap_err();
        assert!(matches!(err, ResolveError::NoFormatMatch { .. }));
    }

    #[test]
    fn test_matcher_picks_minimal_distance() {
        let available = [43, 18, 5];
        let chosen =
            most_similar_available(itags_by_similarity(38).unwrap(), &available).unwrap();
        let best = available.iter().map(|&i| rank(i).abs_diff(rank(38))).min();
        assert_eq!(rank(chosen).abs_diff(rank(38)), best.unwrap());
        assert_eq!(chosen, 43);
    }

    #[test]
    fn test_tier_resolution_uses_the_full_catalog() {
        let ranked: &[ItagId] = &ITAGS_BY_QUALITY;
        assert_eq!(itag_from_quality(QualitySpec::High, ranked).unwrap(), ranked[0]);
        assert_eq!(
            itag_from_quality(QualitySpec::Medium, ranked).unwrap(),
            ranked[ranked.len() / 2],
        );
        assert_eq!(
            itag_from_quality(QualitySpec::Low, ranked).unwrap(),
            ranked[ranked.len() - 1],
        );
    }

    #[test]
    fn test_literal_itag_passthrough() {
        assert_eq!(itag_from_quality(QualitySpec::Itag(18), &[43, 18, 5]).unwrap(), 18);

        let err = itag_from_quality(QualitySpec::Itag(22), &[43, 18, 5]).unwrap_err();
        match err {
            ResolveError::UnknownQuality { spec, candidates } => {
                assert_eq!(spec, "22");
                assert_eq!(candidates, Some(vec![43, 18, 5]));
            }
            other => panic!("expected UnknownQuality, got {:?}", other),
        }
    }

    #[test]
    fn test_quality_spec_parsing() {
        assert_eq!("low".parse::<QualitySpec>().unwrap(), QualitySpec::Low);
        assert_eq!("medium".parse::<QualitySpec>().unwrap(), QualitySpec::Medium);
        assert_eq!("high".parse::<QualitySpec>().unwrap(), QualitySpec::High);
        assert_eq!("18".parse::<QualitySpec>().unwrap(), QualitySpec::Itag(18));

        let err = "potato".parse::<QualitySpec>().unwrap_err();
        assert!(matches!(err, ResolveError::UnknownQuality { .. }));
    }
}
