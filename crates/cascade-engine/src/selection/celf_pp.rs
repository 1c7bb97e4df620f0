//! CELF++ selection.
//!
//! Besides CELF's `(gain, generation)` record, each candidate caches `mg2`,
//! its gain assuming `prev_best` joins the seed set first. When `prev_best`
//! turns out to be the seed accepted in the very next round, `mg2` is the
//! exact refreshed gain and no spread evaluation is needed.

use cascade_core::types::NodeIdx;

use super::celf::singleton_gains;
use super::lazy_queue::{LazyQueue, QueueRecord};
use super::report::RoundRecorder;
use super::selector::slot_count;
use super::spread::{CountingSpread, SpreadFunction};

/// Per-candidate bookkeeping, stored in an arena indexed by node.
#[derive(Debug, Clone, Copy, Default)]
struct CandidateCache {
    mg1: f64,
    mg2: f64,
    prev_best: Option<NodeIdx>,
}

/// Spread of `S ∪ {best}`, kept for the seed-set size it was computed at.
struct CompanionBase {
    best: NodeIdx,
    generation: usize,
    spread: f64,
}

struct Companion<'s, 'a, S: SpreadFunction + ?Sized> {
    spread: &'s CountingSpread<'a, S>,
    base: Option<CompanionBase>,
}

impl<'s, 'a, S: SpreadFunction + ?Sized> Companion<'s, 'a, S> {
    /// Gain of `node` against `seeds ∪ {best}`.
    fn gain(&mut self, seeds: &[NodeIdx], best: NodeIdx, node: NodeIdx) -> f64 {
        let generation = seeds.len();
        let base = match &self.base {
            Some(b) if b.best == best && b.generation == generation => b.spread,
            _ => {
                let mut with_best = seeds.to_vec();
                with_best.push(best);
                let spread = self.spread.spread(&with_best);
                self.base = Some(CompanionBase {
                    best,
                    generation,
                    spread,
                });
                spread
            }
        };
        let mut with_both = seeds.to_vec();
        with_both.push(best);
        with_both.push(node);
        (self.spread.spread(&with_both) - base).max(0.0)
    }
}

pub(crate) fn run<S: SpreadFunction + ?Sized>(
    spread: &CountingSpread<'_, S>,
    candidates: &[NodeIdx],
    k: usize,
    parallel: bool,
    recorder: &mut RoundRecorder<'_>,
) {
    let slots = slot_count(candidates);
    let mut cache = vec![CandidateCache::default(); slots];
    let mut queue = LazyQueue::with_capacity(slots);
    let mut companion = Companion { spread, base: None };
    let mut current_best: Option<NodeIdx> = None;

    let singles = singleton_gains(spread, candidates, parallel);
    for (&v, mg1) in candidates.iter().zip(singles) {
        let (mg2, prev_best) = match current_best {
            Some(best) => (companion.gain(&[], best, v), Some(best)),
            None => (mg1, None),
        };
        cache[v.index()] = CandidateCache {
            mg1,
            mg2,
            prev_best,
        };
        queue.push(QueueRecord::new(v, mg1, 0));
        if current_best.map_or(true, |best| mg1 > cache[best.index()].mg1) {
            current_best = Some(v);
        }
    }

    let mut lookups = candidates.len();
    let mut last_seed: Option<NodeIdx> = None;

    while recorder.seeds().len() < k {
        let Some(top) = queue.pop() else {
            break;
        };
        let v = top.node;
        let generation = recorder.seeds().len();

        if top.is_fresh(generation) {
            if top.gain <= 0.0 {
                recorder.exhaust(lookups, k);
                break;
            }
            recorder.record(Some(v), top.gain, lookups);
            lookups = 0;
            last_seed = Some(v);
            if current_best == Some(v) {
                current_best = None;
            }
            continue;
        }

        let entry = cache[v.index()];
        let reusable = entry.prev_best.is_some()
            && entry.prev_best == last_seed
            && top.generation + 1 == generation;

        let mg1 = if reusable {
            entry.mg2
        } else {
            lookups += 1;
            let mg1 = spread.marginal_gain(recorder.seeds(), v, recorder.cumulative());
            let (mg2, prev_best) = match current_best {
                Some(best) if best != v => {
                    (companion.gain(recorder.seeds(), best, v), Some(best))
                }
                _ => (mg1, None),
            };
            cache[v.index()].mg2 = mg2;
            cache[v.index()].prev_best = prev_best;
            mg1
        };

        cache[v.index()].mg1 = mg1;
        queue.push(QueueRecord::new(v, mg1, generation));
        if current_best.map_or(true, |best| mg1 > cache[best.index()].mg1) {
            current_best = Some(v);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::SeedSelector;
    use cascade_core::types::NodeIdx;

    /// Candidate `i` covers `{i, i + 1}`.
    fn coverage(seeds: &[NodeIdx]) -> f64 {
        let mut covered = [false; 8];
        for s in seeds {
            covered[s.index()] = true;
            covered[s.index() + 1] = true;
        }
        covered.iter().filter(|&&c| c).count() as f64
    }

    #[test]
    fn test_companion_gain_reused_after_best_is_accepted() {
        let selector = SeedSelector::with_candidates(&coverage, (0..7).map(NodeIdx::new));
        let pp = selector.celf_pp(2);
        let celf = selector.celf(2);

        assert_eq!(pp.seeds, vec![NodeIdx::new(0), NodeIdx::new(2)]);
        assert_eq!(pp.seeds, celf.seeds);
        // Every candidate's mg2 assumed node 0 joins first, so round two
        // needs no fresh marginal-gain computation.
        assert_eq!(pp.lookups[1], 0);
        assert!(celf.lookups[1] > 0);
        assert_eq!(pp.total_spread, 4.0);
    }

    #[test]
    fn test_single_candidate() {
        let selector = SeedSelector::with_candidates(&coverage, [NodeIdx::new(3)]);
        let result = selector.celf_pp(4);
        assert_eq!(result.seeds, vec![NodeIdx::new(3)]);
        assert_eq!(result.rounds(), 1);
    }
}
