//! One Independent Cascade trial.

use cascade_core::types::NodeIdx;
use rand::Rng;

use super::streams::node_rng;
use crate::graph::GraphModel;

/// Run one IC trial from `seeds` and return the final active-set size.
///
/// Each step, every node of the frontier makes one Bernoulli(`p`) attempt
/// against each target that was inactive when the step began. A target hit
/// by several frontier nodes gets several attempts; the first success
/// activates it. The trial ends when a step activates nothing.
///
/// A frontier node draws one coin per target, active or not, from a stream
/// keyed by the trial and the node. The outcome of edge `u -> v` in a trial
/// is therefore fixed, and the trial is monotone in the seed set.
pub fn run_trial<G, R>(graph: &G, seeds: &[NodeIdx], p: f64, rng: &mut R) -> usize
where
    G: GraphModel,
    R: Rng + ?Sized,
{
    let n = graph.node_count();
    let mut active = vec![false; n];
    let mut frontier: Vec<NodeIdx> = Vec::with_capacity(seeds.len());
    for &s in seeds {
        if !active[s.index()] {
            active[s.index()] = true;
            frontier.push(s);
        }
    }
    let mut activated = frontier.len();

    // Marks nodes already queued for the next frontier.
    let mut pending = vec![false; n];
    let mut next: Vec<NodeIdx> = Vec::new();
    let trial_key: u64 = rng.gen();

    while !frontier.is_empty() {
        next.clear();
        for &u in &frontier {
            let mut coins = node_rng(trial_key, u);
            for v in graph.cascade_targets(u) {
                let success = coins.gen::<f64>() < p;
                if success && !active[v.index()] && !pending[v.index()] {
                    pending[v.index()] = true;
                    next.push(v);
                }
            }
        }
        for &v in &next {
            active[v.index()] = true;
            pending[v.index()] = false;
        }
        activated += next.len();
        std::mem::swap(&mut frontier, &mut next);
    }

    activated
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::DiGraphView;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_p_one_reaches_closure() {
        let g = DiGraphView::from_edges([(0u32, 1), (1, 2), (3, 4)]);
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(run_trial(&g, &[NodeIdx::new(0)], 1.0, &mut rng), 3);
    }

    #[test]
    fn test_p_zero_keeps_seeds_only() {
        let g = DiGraphView::from_edges([(0u32, 1), (1, 2)]);
        let mut rng = StdRng::seed_from_u64(0);
        let seeds = [NodeIdx::new(0), NodeIdx::new(2)];
        assert_eq!(run_trial(&g, &seeds, 0.0, &mut rng), 2);
    }

    #[test]
    fn test_cycle_terminates() {
        let g = DiGraphView::from_edges([(0u32, 1), (1, 2), (2, 0)]);
        let mut rng = StdRng::seed_from_u64(5);
        assert_eq!(run_trial(&g, &[NodeIdx::new(1)], 1.0, &mut rng), 3);
    }
}
