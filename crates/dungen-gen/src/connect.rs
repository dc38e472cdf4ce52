//! Room connection: a minimum spanning tree over room centers, plus a few
//! random loops so the dungeon is not a pure tree.

use std::collections::BTreeSet;

use dungen_rng::DungeonRng;
use dungen_types::{Corridor, Position, Room};

/// Unordered room pair, stored lower index first.
pub(crate) type Link = (usize, usize);

fn link(a: usize, b: usize) -> Link {
    (a.min(b), a.max(b))
}

/// Prim's algorithm on the complete graph of centers with Manhattan
/// weights. Ties go to the lower room index. Links come out in the order
/// they join the tree, each as `(tree_room, new_room)`.
pub(crate) fn spanning_links(centers: &[Position]) -> Vec<(usize, usize)> {
    let n = centers.len();
    if n < 2 {
        return Vec::new();
    }
    let mut in_tree = vec![false; n];
    // Cheapest known edge into the tree for every room outside it.
    let mut best: Vec<(i32, usize)> = centers.iter().map(|c| (c.manhattan(centers[0]), 0)).collect();
    in_tree[0] = true;
    let mut links = Vec::with_capacity(n - 1);

    for _ in 1..n {
        let Some(next) = (0..n)
            .filter(|&i| !in_tree[i])
            .min_by_key(|&i| (best[i].0, i))
        else {
            break;
        };
        in_tree[next] = true;
        links.push((best[next].1, next));

        for i in 0..n {
            if in_tree[i] {
                continue;
            }
            let d = centers[i].manhattan(centers[next]);
            if d < best[i].0 {
                best[i] = (d, next);
            }
        }
    }
    links
}

/// For each room, with `percent` chance, links it to its nearest room that
/// it is not already linked to.
pub(crate) fn extra_links(
    centers: &[Position],
    existing: &[(usize, usize)],
    percent: u32,
    rng: &mut DungeonRng,
) -> Vec<(usize, usize)> {
    let mut linked: BTreeSet<Link> = existing.iter().map(|&(a, b)| link(a, b)).collect();
    let mut extras = Vec::new();

    for (i, center) in centers.iter().enumerate() {
        if !rng.percent(percent) {
            continue;
        }
        let nearest = centers
            .iter()
            .enumerate()
            .filter(|&(j, _)| j != i && !linked.contains(&link(i, j)))
            .min_by_key(|&(j, c)| (c.manhattan(*center), j));
        if let Some((j, _)) = nearest {
            linked.insert(link(i, j));
            extras.push((i, j));
        }
    }
    extras
}

/// Lays an L-shaped corridor between the centers of each linked pair.
pub(crate) fn build_corridors(
    rooms: &[Room],
    links: &[(usize, usize)],
    width: i32,
    rng: &mut DungeonRng,
) -> Vec<Corridor> {
    links
        .iter()
        .map(|&(a, b)| {
            let horizontal_first = rng.rn2(2) == 0;
            Corridor::new(
                rooms[a].id,
                rooms[b].id,
                rooms[a].rect.center(),
                rooms[b].rect.center(),
                horizontal_first,
                width,
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn connected(n: usize, links: &[(usize, usize)]) -> bool {
        let mut seen = vec![false; n];
        let mut stack = vec![0];
        seen[0] = true;
        while let Some(i) = stack.pop() {
            for &(a, b) in links {
                let other = if a == i {
                    b
                } else if b == i {
                    a
                } else {
                    continue;
                };
                if !seen[other] {
                    seen[other] = true;
                    stack.push(other);
                }
            }
        }
        seen.into_iter().all(|s| s)
    }

    #[test]
    fn spanning_tree_on_a_line() {
        let centers = [
            Position::new(0, 0),
            Position::new(30, 0),
            Position::new(10, 0),
            Position::new(20, 0),
        ];
        let links = spanning_links(&centers);
        assert_eq!(links, vec![(0, 2), (2, 3), (3, 1)]);
    }

    #[test]
    fn spanning_tree_connects_everything() {
        let centers: Vec<_> = (0..12)
            .map(|i| Position::new((i * 37) % 90, (i * 53) % 90))
            .collect();
        let links = spanning_links(&centers);
        assert_eq!(links.len(), centers.len() - 1);
        assert!(connected(centers.len(), &links));
    }

    #[test]
    fn trivial_inputs() {
        assert!(spanning_links(&[]).is_empty());
        assert!(spanning_links(&[Position::new(4, 4)]).is_empty());
    }

    #[test]
    fn extras_never_duplicate_links() {
        let centers: Vec<_> = (0..8).map(|i| Position::new(i * 10, (i % 3) * 10)).collect();
        let tree = spanning_links(&centers);
        let mut rng = DungeonRng::new(9);
        let extras = extra_links(&centers, &tree, 100, &mut rng);
        assert!(!extras.is_empty());

        let mut all: Vec<Link> = tree.iter().chain(&extras).map(|&(a, b)| link(a, b)).collect();
        let before = all.len();
        all.sort();
        all.dedup();
        assert_eq!(all.len(), before);
        assert!(all.iter().all(|(a, b)| a != b));
    }

    #[test]
    fn zero_percent_adds_nothing() {
        let centers: Vec<_> = (0..5).map(|i| Position::new(i * 10, 0)).collect();
        let tree = spanning_links(&centers);
        let mut rng = DungeonRng::new(9);
        assert!(extra_links(&centers, &tree, 0, &mut rng).is_empty());
    }

    #[test]
    fn two_rooms_have_no_extra_candidates() {
        let centers = [Position::new(0, 0), Position::new(10, 0)];
        let tree = spanning_links(&centers);
        let mut rng = DungeonRng::new(9);
        assert!(extra_links(&centers, &tree, 100, &mut rng).is_empty());
    }
}
