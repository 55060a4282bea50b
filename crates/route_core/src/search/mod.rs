use rustc_hash::FxHashMap;

use crate::{constants::Weight, graph::NodeIndex};

use self::shortest_path::ShortestPath;

pub mod dijkstra;
pub mod shortest_path;

/// Walks the predecessor links in `node_data` back from `target` to `source`.
///
/// Returns `None` if `target` was never reached.
pub fn reconstruct_path(
    target: NodeIndex,
    source: NodeIndex,
    node_data: &FxHashMap<NodeIndex, (Weight, Option<NodeIndex>)>,
) -> Option<ShortestPath> {
    let (weight, mut previous) = *node_data.get(&target)?;
    let mut path = vec![target];

    while let Some(prev_node) = previous {
        path.push(prev_node);
        previous = node_data.get(&prev_node)?.1;
    }

    if path.last() != Some(&source) {
        return None;
    }

    path.reverse();
    Some(ShortestPath::new(path, weight))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::node_index;

    #[test]
    fn reconstruct_chain() {
        let mut node_data = FxHashMap::default();
        node_data.insert(node_index(0), (0.0, None));
        node_data.insert(node_index(3), (1.0, Some(node_index(0))));
        node_data.insert(node_index(1), (2.5, Some(node_index(3))));

        let sp = reconstruct_path(node_index(1), node_index(0), &node_data).unwrap();

        assert_eq!(sp.nodes, vec![node_index(0), node_index(3), node_index(1)]);
        assert_eq!(sp.weight, 2.5);
    }

    #[test]
    fn unreached_target() {
        let mut node_data = FxHashMap::default();
        node_data.insert(node_index(0), (0.0, None));

        assert_eq!(reconstruct_path(node_index(5), node_index(0), &node_data), None);
    }

    #[test]
    fn source_only() {
        let mut node_data = FxHashMap::default();
        node_data.insert(node_index(2), (0.0, None));

        let sp = reconstruct_path(node_index(2), node_index(2), &node_data).unwrap();
        assert_eq!(sp.nodes, vec![node_index(2)]);
        assert_eq!(sp.weight, 0.0);
    }
}
