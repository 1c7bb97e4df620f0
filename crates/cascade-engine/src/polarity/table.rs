//! Mapping-backed polarity source.

use cascade_core::types::FxHashMap;

use super::source::PolaritySource;
use crate::graph::NodeKey;

/// Polarity values stored in maps, resolved in order:
///
/// 1. the `(user, edge)` pair map,
/// 2. the nested `user -> edge -> value` map,
/// 3. the table default, if one was set.
///
/// Anything else resolves to `None`.
#[derive(Debug, Clone)]
pub struct PolarityTable<N: NodeKey, E: NodeKey, P> {
    pairs: FxHashMap<(N, E), P>,
    nested: FxHashMap<N, FxHashMap<E, P>>,
    default: Option<P>,
}

impl<N: NodeKey, E: NodeKey, P: Clone + PartialEq> PolarityTable<N, E, P> {
    pub fn new() -> Self {
        Self {
            pairs: FxHashMap::default(),
            nested: FxHashMap::default(),
            default: None,
        }
    }

    /// Value returned when neither map has the pair.
    pub fn with_default(mut self, value: P) -> Self {
        self.default = Some(value);
        self
    }

    /// Set the polarity of `user` on `edge` in the pair map.
    pub fn insert(&mut self, user: N, edge: E, value: P) -> &mut Self {
        self.pairs.insert((user, edge), value);
        self
    }

    /// Set the polarity of `user` on `edge` in the nested map.
    pub fn insert_nested(&mut self, user: N, edge: E, value: P) -> &mut Self {
        self.nested.entry(user).or_default().insert(edge, value);
        self
    }

    pub fn len(&self) -> usize {
        self.pairs.len() + self.nested.values().map(|m| m.len()).sum::<usize>()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Look up one pair through the fallback chain.
    pub fn get(&self, user: &N, edge: &E) -> Option<&P> {
        // The pair map needs an owned key.
        self.pairs
            .get(&(user.clone(), edge.clone()))
            .or_else(|| self.nested.get(user).and_then(|m| m.get(edge)))
            .or(self.default.as_ref())
    }
}

impl<N: NodeKey, E: NodeKey, P: Clone + PartialEq> Default for PolarityTable<N, E, P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N, E, P> FromIterator<((N, E), P)> for PolarityTable<N, E, P>
where
    N: NodeKey,
    E: NodeKey,
    P: Clone + PartialEq,
{
    fn from_iter<I: IntoIterator<Item = ((N, E), P)>>(iter: I) -> Self {
        let mut table = Self::new();
        for ((user, edge), value) in iter {
            table.insert(user, edge, value);
        }
        table
    }
}

impl<N, E, P> PolaritySource<N, E> for PolarityTable<N, E, P>
where
    N: NodeKey,
    E: NodeKey,
    P: Clone + PartialEq + Sync,
{
    type Value = P;

    fn polarity(&self, user: &N, edge: &E) -> Option<P> {
        self.get(user, edge).cloned()
    }
}
