/// The triple search engine.
///
/// One `SolveSession` owns the card pool, the set of already tried triples
/// and the running match counter for a single solve. The engine draws
/// random untried 3-card combinations and tests them against the validity
/// rule until the requested number of valid sets has been found.
///
/// The tried-triples set is the de-duplication authority: every combination
/// of 3 indexes out of N is evaluated at most once per session, so the
/// random walk degrades to exhaustive coverage in the worst case and never
/// reports the same valid set twice.

use std::collections::HashSet;

use rand::Rng;
use thiserror::Error;

use crate::card::{Card, CardPool};
use crate::is_set::is_valid_set;

/// 3 distinct card indexes, sorted ascending. The sorted form is the
/// canonical key used to recognize an already tried combination.
pub type Triple = [usize; 3];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SolveError {
    #[error("the pool holds {len} cards, at least 3 are needed")]
    PoolTooSmall { len: usize },
    /// The combination space was exhausted before reaching the target:
    /// the caller asked for more valid sets than the pool contains.
    #[error("combination space exhausted after {found} valid sets, {target} were requested")]
    TargetUnreachable { found: usize, target: usize },
}

/// A confirmed valid set: the canonical triple of card indexes plus a
/// snapshot of the 3 member cards, ready for reporting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidSet {
    pub indexes: Triple,
    pub cards: [Card; 3],
}

/// Number of 3-card combinations in an n-card pool, C(n,3).
pub fn combination_count(n: usize) -> usize {
    if n < 3 {
        return 0;
    }
    n * (n - 1) * (n - 2) / 6
}

pub struct SolveSession {
    pool: CardPool,
    tried: HashSet<Triple>,
    matches: usize,
}

impl SolveSession {
    /// Start a fresh session: empty tried-set, match counter at zero.
    pub fn new(pool: CardPool) -> Self {
        Self {
            pool,
            tried: HashSet::new(),
            matches: 0,
        }
    }

    pub fn pool(&self) -> &CardPool {
        &self.pool
    }

    /// Number of distinct combinations evaluated so far.
    pub fn tried_count(&self) -> usize {
        self.tried.len()
    }

    /// Number of valid sets discovered so far.
    pub fn match_count(&self) -> usize {
        self.matches
    }

    // Draw 3 distinct indexes uniformly from the pool. A duplicate index
    // within the draw is rejected and redrawn.
    fn draw_triple<R: Rng>(&self, rng: &mut R) -> Triple {
        let n = self.pool.len();
        let mut indexes = [0usize; 3];
        let mut filled = 0;
        while filled < 3 {
            let candidate = rng.gen_range(0..n);
            if !indexes[..filled].contains(&candidate) {
                indexes[filled] = candidate;
                filled += 1;
            }
        }
        indexes.sort_unstable();
        indexes
    }

    fn resolve(&self, triple: Triple) -> ValidSet {
        ValidSet {
            indexes: triple,
            cards: [
                self.pool.get(triple[0]).clone(),
                self.pool.get(triple[1]).clone(),
                self.pool.get(triple[2]).clone(),
            ],
        }
    }

    /// Search the pool until `target` valid sets have been found.
    ///
    /// `on_match` is invoked once per discovered set, as it is found, so a
    /// reporting collaborator can act on each match without waiting for the
    /// full result sequence.
    ///
    /// When `target` exceeds the number of valid sets actually present, the
    /// session ends with `TargetUnreachable` once all C(N,3) combinations
    /// have been tried. Callers should request a target they know to be
    /// achievable (9 cards hold 4 sets, 12 cards hold 6 in the supported
    /// game modes).
    pub fn find_all_sets<R, F>(
        &mut self,
        target: usize,
        rng: &mut R,
        mut on_match: F,
    ) -> Result<Vec<ValidSet>, SolveError>
    where
        R: Rng,
        F: FnMut(&ValidSet),
    {
        let n = self.pool.len();
        if n < 3 {
            return Err(SolveError::PoolTooSmall { len: n });
        }
        let space = combination_count(n);
        let mut found = Vec::with_capacity(target);
        while found.len() < target {
            if self.tried.len() == space {
                // every combination has been evaluated
                return Err(SolveError::TargetUnreachable {
                    found: found.len(),
                    target,
                });
            }
            let triple = self.draw_triple(rng);
            if !self.tried.insert(triple) {
                // already evaluated in this session
                continue;
            }
            let valid = is_valid_set(
                self.pool.get(triple[0]),
                self.pool.get(triple[1]),
                self.pool.get(triple[2]),
            );
            if valid {
                self.matches += 1;
                let valid_set = self.resolve(triple);
                on_match(&valid_set);
                found.push(valid_set);
            }
        }
        Ok(found)
    }
}

/// Brute-force enumeration of every valid set in the pool, in lexicographic
/// triple order. Used as the oracle for the sampling engine and for the
/// up-front achievability check of a requested target.
pub fn enumerate_all_sets(pool: &CardPool) -> Vec<ValidSet> {
    let n = pool.len();
    let mut sets = Vec::new();
    for i in 0..n {
        for j in (i + 1)..n {
            for k in (j + 1)..n {
                if is_valid_set(pool.get(i), pool.get(j), pool.get(k)) {
                    sets.push(ValidSet {
                        indexes: [i, j, k],
                        cards: [pool.get(i).clone(), pool.get(j).clone(), pool.get(k).clone()],
                    });
                }
            }
        }
    }
    sets
}

/// True number of valid sets in the pool.
pub fn count_all_sets(pool: &CardPool) -> usize {
    enumerate_all_sets(pool).len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::{Color, Shading};
    use rand::SeedableRng;
    use rand_pcg::Pcg64;

    fn card(color: Color, shape: &str, shading: Shading, count: u8) -> Card {
        Card::new(color, shape, shading, count)
    }

    // 3 identical cards: the only combination is a valid set.
    fn tiny_pool() -> CardPool {
        let c = card(Color::Green, "oval", Shading::Solid, 1);
        CardPool::new(vec![c.clone(), c.clone(), c])
    }

    // 3 cards where color is two-same-one-different: no valid set at all.
    fn setless_pool() -> CardPool {
        CardPool::new(vec![
            card(Color::Green, "oval", Shading::Solid, 1),
            card(Color::Purple, "oval", Shading::Solid, 1),
            card(Color::Green, "oval", Shading::Solid, 1),
        ])
    }

    #[test]
    fn combination_count_matches_c_n_3() {
        assert_eq!(combination_count(0), 0);
        assert_eq!(combination_count(2), 0);
        assert_eq!(combination_count(3), 1);
        assert_eq!(combination_count(9), 84);
        assert_eq!(combination_count(12), 220);
    }

    #[test]
    fn pool_too_small_is_rejected() {
        let pool = CardPool::new(vec![
            card(Color::Green, "oval", Shading::Solid, 1),
            card(Color::Green, "oval", Shading::Solid, 1),
        ]);
        let mut session = SolveSession::new(pool);
        let mut rng = Pcg64::seed_from_u64(1);
        let err = session.find_all_sets(1, &mut rng, |_| {}).unwrap_err();
        assert_eq!(err, SolveError::PoolTooSmall { len: 2 });
    }

    #[test]
    fn target_zero_returns_empty_without_sampling() {
        let mut session = SolveSession::new(tiny_pool());
        let mut rng = Pcg64::seed_from_u64(1);
        let found = session.find_all_sets(0, &mut rng, |_| {}).unwrap();
        assert!(found.is_empty());
        assert_eq!(session.tried_count(), 0);
    }

    #[test]
    fn finds_the_single_set_of_a_3_card_pool() {
        let mut session = SolveSession::new(tiny_pool());
        let mut rng = Pcg64::seed_from_u64(7);
        let found = session.find_all_sets(1, &mut rng, |_| {}).unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].indexes, [0, 1, 2]);
        assert_eq!(session.tried_count(), 1);
        assert_eq!(session.match_count(), 1);
    }

    #[test]
    fn exhaustion_reports_target_unreachable() {
        let mut session = SolveSession::new(setless_pool());
        let mut rng = Pcg64::seed_from_u64(7);
        let err = session.find_all_sets(1, &mut rng, |_| {}).unwrap_err();
        assert_eq!(err, SolveError::TargetUnreachable { found: 0, target: 1 });
        // the whole (tiny) combination space was evaluated before giving up
        assert_eq!(session.tried_count(), 1);
    }

    #[test]
    fn on_match_fires_once_per_discovered_set() {
        let mut session = SolveSession::new(tiny_pool());
        let mut rng = Pcg64::seed_from_u64(42);
        let mut seen = Vec::new();
        let found = session
            .find_all_sets(1, &mut rng, |vs| seen.push(vs.indexes))
            .unwrap();
        assert_eq!(seen.len(), found.len());
        assert_eq!(seen[0], found[0].indexes);
    }

    #[test]
    fn oracle_enumerates_in_lexicographic_order() {
        // 4 identical cards: all 4 combinations are valid sets
        let c = card(Color::Red, "diamond", Shading::Empty, 2);
        let pool = CardPool::new(vec![c.clone(), c.clone(), c.clone(), c]);
        let sets = enumerate_all_sets(&pool);
        let indexes: Vec<Triple> = sets.iter().map(|s| s.indexes).collect();
        assert_eq!(indexes, vec![[0, 1, 2], [0, 1, 3], [0, 2, 3], [1, 2, 3]]);
        assert_eq!(count_all_sets(&pool), 4);
    }
}
