//! The `PolaritySource` capability.

/// Resolves a `(user, edge)` pair to a polarity value.
///
/// Implemented for [`PolarityTable`](super::PolarityTable) and for any
/// closure `Fn(&N, &E) -> Option<P>`.
pub trait PolaritySource<N, E>: Sync {
    type Value: PartialEq;

    fn polarity(&self, user: &N, edge: &E) -> Option<Self::Value>;
}

impl<N, E, P, F> PolaritySource<N, E> for F
where
    F: Fn(&N, &E) -> Option<P> + Sync,
    P: PartialEq,
{
    type Value = P;

    fn polarity(&self, user: &N, edge: &E) -> Option<P> {
        self(user, edge)
    }
}

/// Whether `u` and `v` hold the same polarity on `edge`. Absent matches absent.
pub fn polarity_matches<N, E, S>(source: &S, u: &N, v: &N, edge: &E) -> bool
where
    S: PolaritySource<N, E> + ?Sized,
{
    source.polarity(u, edge) == source.polarity(v, edge)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closure_source() {
        let sign = |u: &i32, _e: &&str| Some(u.signum());
        assert!(polarity_matches(&sign, &3, &9, &"A"));
        assert!(!polarity_matches(&sign, &3, &-9, &"A"));
    }

    #[test]
    fn test_absent_matches_absent() {
        let partial = |u: &u32, _e: &&str| if *u == 0 { Some(true) } else { None };
        assert!(polarity_matches(&partial, &1, &2, &"A"));
        assert!(!polarity_matches(&partial, &0, &2, &"A"));
    }
}
