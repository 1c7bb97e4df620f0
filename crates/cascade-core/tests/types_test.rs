//! Tests for identifiers and collection aliases.

use cascade_core::types::{EdgeIdx, FxHashMap, NodeIdx, SmallVec4};

#[test]
fn test_index_round_trip() {
    let n = NodeIdx::new(17);
    assert_eq!(n.index(), 17);
    assert_eq!(u32::from(n), 17);
    assert_eq!(NodeIdx::from(17u32), n);
    assert_eq!(n.to_string(), "17");
}

#[test]
fn test_indices_order_by_position() {
    let mut v = vec![NodeIdx::new(3), NodeIdx::new(1), NodeIdx::new(2)];
    v.sort();
    assert_eq!(v, vec![NodeIdx::new(1), NodeIdx::new(2), NodeIdx::new(3)]);
}

#[test]
fn test_indices_usable_as_map_keys() {
    let mut m: FxHashMap<EdgeIdx, SmallVec4<NodeIdx>> = FxHashMap::default();
    m.entry(EdgeIdx::new(0)).or_default().push(NodeIdx::new(5));
    m.entry(EdgeIdx::new(0)).or_default().push(NodeIdx::new(6));
    assert_eq!(m[&EdgeIdx::new(0)].len(), 2);
    assert!(!m[&EdgeIdx::new(0)].spilled());
}
