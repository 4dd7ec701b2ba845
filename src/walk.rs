//! Depth-first traversal of the cell adjacency graph (component C5).
//!
//! The walk is iterative rather than recursive: each step scans the
//! current cell's neighbors for the first unvisited one into an
//! explicit `found` option, then either descends into it or
//! backtracks through the current cell's own `parent` pointer. There
//! is no call stack and no loop state shared across steps.

use crate::cell::Cell;

/// Returns the order in which `start` and its reachable neighbors are
/// first visited. Marks every visited cell's `visited` flag and sets
/// `parent` pointers used for backtracking.
pub fn visitation_order(cells: &mut [Cell], start: usize) -> Vec<usize> {
    if cells.is_empty() {
        return Vec::new();
    }

    let mut unvisited = cells.len();
    let mut path = Vec::with_capacity(cells.len());
    let mut current = start;

    loop {
        if !cells[current].visited {
            cells[current].visited = true;
            unvisited -= 1;
        }
        path.push(current);

        let mut found = None;
        for &neighbor in &cells[current].neighbors {
            if !cells[neighbor].visited {
                found = Some(neighbor);
                break;
            }
        }

        match found {
            Some(next) => {
                cells[next].parent = Some(current);
                current = next;
            }
            None => match cells[current].parent {
                Some(parent) if unvisited > 0 => current = parent,
                _ => break,
            },
        }
    }

    path
}

#[cfg(test)]
mod tests {
    use super::*;

    fn linked(a: usize, b: usize, cells: &mut [Cell]) {
        cells[a].neighbors.push(b);
        cells[b].neighbors.push(a);
    }

    #[test]
    fn single_cell_visits_itself_once() {
        let mut cells = vec![Cell::new(0)];
        assert_eq!(visitation_order(&mut cells, 0), vec![0]);
    }

    #[test]
    fn diamond_shaped_graph_backtracks_to_cover_every_cell() {
        // left(0) -- top(1) -- right(3)
        //   \-------- bottom(2) ------/
        let mut cells: Vec<Cell> = (0..4).map(Cell::new).collect();
        linked(0, 1, &mut cells);
        linked(0, 2, &mut cells);
        linked(1, 3, &mut cells);
        linked(2, 3, &mut cells);

        let order = visitation_order(&mut cells, 0);
        assert_eq!(order, vec![0, 1, 3, 2]);
        assert!(cells.iter().all(|c| c.visited));
    }

    #[test]
    fn disconnected_cell_is_never_reached() {
        let mut cells: Vec<Cell> = (0..3).map(Cell::new).collect();
        linked(0, 1, &mut cells);
        // cell 2 has no edges.
        let order = visitation_order(&mut cells, 0);
        assert_eq!(order, vec![0, 1]);
        assert!(!cells[2].visited);
    }
}
