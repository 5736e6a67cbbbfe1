//! Traversal over graphs stored as adjacency matrices.
//!
//! An adjacency matrix is any slice of rows, where an edge `i -> j` exists if `matrix[i][j]` is
//! equal to `1`. Entries past the end of a short row are treated as missing edges, and columns
//! that don't correspond to a row are ignored, since they can't be visited.

use tracing::trace;

use crate::collections::contiguous::Vector;

/// Counts the nodes reachable from `start` with a depth first search, including `start` itself.
///
/// Returns 0 if the matrix is empty or `start` isn't a node of the graph.
///
/// # Examples
/// ```
/// # use basic_structures::algorithms::graph::depth_first_search;
/// let adjacency = [
///     [0, 1, 0, 0],
///     [0, 0, 1, 0],
///     [1, 0, 0, 0],
///     [0, 0, 0, 0],
/// ];
/// assert_eq!(depth_first_search(&adjacency, 0), 3);
/// assert_eq!(depth_first_search(&adjacency, 3), 1);
/// assert_eq!(depth_first_search(&adjacency, 4), 0);
/// ```
pub fn depth_first_search<R, T>(adjacency: &[R], start: usize) -> usize
where
    R: AsRef<[T]>,
    T: PartialEq + From<u8>,
{
    let count = reachable(adjacency, start).len();
    trace!(start, count, "Depth first search finished");
    count
}

/// Returns every node reachable from `start` in the order a depth first search visits them,
/// starting with `start` itself. Neighbours are explored in ascending order.
///
/// Returns an empty Vector if the matrix is empty or `start` isn't a node of the graph.
///
/// # Examples
/// ```
/// # use basic_structures::algorithms::graph::reachable;
/// let adjacency = vec![
///     vec![0, 1, 1],
///     vec![0, 0, 0],
///     vec![1, 0, 0],
/// ];
/// assert_eq!(&*reachable(&adjacency, 0), &[0, 1, 2]);
/// assert_eq!(&*reachable(&adjacency, 1), &[1]);
/// ```
pub fn reachable<R, T>(adjacency: &[R], start: usize) -> Vector<usize>
where
    R: AsRef<[T]>,
    T: PartialEq + From<u8>,
{
    let nodes = adjacency.len();
    let mut order = Vector::new();
    if start >= nodes {
        return order;
    }

    let edge = T::from(1);
    let mut visited = Vector::repeat(false, nodes);
    let mut stack = Vector::new();
    stack.push(start);

    while let Some(node) = stack.pop() {
        if visited[node] {
            continue;
        }
        visited[node] = true;
        order.push(node);

        // Pushed in reverse, so that lower indices are popped and visited first.
        let row = adjacency[node].as_ref();
        for next in (0..row.len().min(nodes)).rev() {
            if row[next] == edge && !visited[next] {
                stack.push(next);
            }
        }
    }

    order
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_and_out_of_range() {
        let empty: [[u8; 0]; 0] = [];
        assert_eq!(depth_first_search(&empty, 0), 0);

        let single = [[0_u8]];
        assert_eq!(depth_first_search(&single, 0), 1);
        assert_eq!(depth_first_search(&single, 1), 0);
    }

    #[test]
    fn test_cycles_and_self_loops() {
        let adjacency = [
            [1, 1, 0, 0, 0],
            [0, 0, 1, 0, 0],
            [1, 0, 0, 0, 0],
            [0, 0, 0, 0, 1],
            [0, 0, 0, 1, 0],
        ];

        assert_eq!(depth_first_search(&adjacency, 0), 3);
        assert_eq!(depth_first_search(&adjacency, 2), 3);
        assert_eq!(depth_first_search(&adjacency, 3), 2);
        assert_eq!(&*reachable(&adjacency, 2), &[2, 0, 1]);
    }

    #[test]
    fn test_visit_order() {
        let adjacency = [
            [0, 1, 1, 0],
            [0, 0, 0, 1],
            [0, 0, 0, 0],
            [0, 0, 1, 0],
        ];

        assert_eq!(&*reachable(&adjacency, 0), &[0, 1, 3, 2], "Search should go deep first.");
    }

    #[test]
    fn test_entry_types() {
        let floats = vec![vec![0.0_f32, 1.0], vec![0.5, 0.0]];
        assert_eq!(depth_first_search(&floats, 0), 2);
        assert_eq!(depth_first_search(&floats, 1), 1, "Only entries equal to 1 are edges.");

        let ragged: Vec<Vec<i64>> = vec![vec![0, 1, 1, 1], vec![], vec![0, 1]];
        assert_eq!(&*reachable(&ragged, 0), &[0, 1, 2]);
    }

    #[test]
    fn test_long_chain() {
        let nodes = 2_000;
        let adjacency: Vec<Vec<u8>> = (0..nodes)
            .map(|i| (0..nodes).map(|j| u8::from(j == i + 1)).collect())
            .collect();

        assert_eq!(depth_first_search(&adjacency, 0), nodes);
        assert_eq!(depth_first_search(&adjacency, nodes - 10), 10);
    }
}
