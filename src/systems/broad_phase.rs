//! Broad phase - walks the spatial grid and feeds candidate pairs to the
//! narrow phase and resolver.
//!
//! Per cell: every unordered pair of the dynamic list, then every dynamic body
//! against every static body of the same cell. Bodies sharing several cells
//! are tested (and resolved) once per shared cell unless a `PairBitset` is
//! supplied.

use crate::core::PairBitset;
use crate::domain::{Body, BodyId};
use crate::spatial::SpatialGrid;

use super::collision::{pair_mut, resolve_dynamic, resolve_static, test_overlap};

/// Counters gathered by one traversal.
///
/// Occupancy is the number of dynamic nodes in a cell, each counted once.
/// A cell walked by both the dynamic and the static pass is not counted
/// twice, so `occupancy_threshold` compares against real body counts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BroadPhaseStats {
    /// Most dynamic bodies seen in a single cell
    pub max_occupancy: u32,
    /// Dynamic nodes summed over every cell
    pub occupancy_sum: u64,
    /// Cells holding more dynamic bodies than the threshold
    pub crowded_cells: u32,
    pub pairs_tested: u32,
    pub pairs_skipped: u32,
    pub contacts_resolved: u32,
}

impl BroadPhaseStats {
    fn record_cell(&mut self, occupancy: u32, threshold: u32) {
        self.max_occupancy = self.max_occupancy.max(occupancy);
        self.occupancy_sum += occupancy as u64;
        if occupancy > threshold {
            self.crowded_cells += 1;
        }
    }
}

/// Test and resolve every candidate pair of the grid, mutating `bodies` in place.
pub fn solve_grid(
    grid: &SpatialGrid,
    bodies: &mut [Body],
    mut seen: Option<&mut PairBitset>,
    occupancy_threshold: u32,
) -> BroadPhaseStats {
    let mut stats = BroadPhaseStats::default();

    for cell in 0..grid.size() {
        let dynamic_head = grid.dynamic_head(cell);
        let static_head = grid.static_head(cell);

        let mut occupancy = 0u32;
        for (_, node) in grid.iter_list(dynamic_head) {
            for (_, other) in grid.iter_list(node.next) {
                if first_visit(&mut seen, node.body, other.body, &mut stats) {
                    solve_dynamic_pair(bodies, node.body, other.body, &mut stats);
                }
            }
            occupancy += 1;
        }

        for (_, node) in grid.iter_list(dynamic_head) {
            for (_, fixed) in grid.iter_list(static_head) {
                if first_visit(&mut seen, node.body, fixed.body, &mut stats) {
                    solve_static_pair(bodies, node.body, fixed.body, &mut stats);
                }
            }
        }

        stats.record_cell(occupancy, occupancy_threshold);
    }

    stats
}

#[inline]
fn first_visit(
    seen: &mut Option<&mut PairBitset>,
    a: BodyId,
    b: BodyId,
    stats: &mut BroadPhaseStats,
) -> bool {
    match seen {
        Some(bits) => {
            let fresh = bits.mark_pair(a, b);
            if !fresh {
                stats.pairs_skipped += 1;
            }
            fresh
        }
        None => true,
    }
}

#[inline]
fn solve_dynamic_pair(bodies: &mut [Body], a: BodyId, b: BodyId, stats: &mut BroadPhaseStats) {
    stats.pairs_tested += 1;
    let (body_a, body_b) = pair_mut(bodies, a, b);
    if let Some(contact) = test_overlap(body_a, body_b) {
        if resolve_dynamic(body_a, body_b, &contact) {
            stats.contacts_resolved += 1;
        }
    }
}

#[inline]
fn solve_static_pair(bodies: &mut [Body], a: BodyId, fixed: BodyId, stats: &mut BroadPhaseStats) {
    stats.pairs_tested += 1;
    let (body, fixed) = pair_mut(bodies, a, fixed);
    if let Some(contact) = test_overlap(body, fixed) {
        if resolve_static(body, fixed, &contact) {
            stats.contacts_resolved += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::BodyDesc;

    fn build(descs: &[BodyDesc]) -> Vec<Body> {
        descs.iter().map(|d| d.build()).collect()
    }

    #[test]
    fn pair_in_one_cell_is_tested_once() {
        let mut grid = SpatialGrid::new(10, 10, 32.0);
        let mut bodies = build(&[
            BodyDesc::dynamic(10.0, 10.0, 2.0, 2.0),
            BodyDesc::dynamic(13.0, 10.0, 2.0, 2.0),
        ]);
        grid.rebuild(&bodies);

        let stats = solve_grid(&grid, &mut bodies, None, 20);
        assert_eq!(stats.pairs_tested, 1);
        assert_eq!(stats.contacts_resolved, 1);
        assert_eq!(stats.max_occupancy, 2);
        assert_eq!(stats.occupancy_sum, 2);
    }

    #[test]
    fn pair_sharing_four_cells_is_resolved_four_times() {
        let mut grid = SpatialGrid::new(10, 10, 32.0);
        // Both straddle the (64, 64) corner.
        let mut bodies = build(&[
            BodyDesc::dynamic(63.0, 64.0, 3.0, 3.0),
            BodyDesc::dynamic(65.0, 64.0, 3.0, 3.0),
        ]);
        grid.rebuild(&bodies);

        let stats = solve_grid(&grid, &mut bodies, None, 20);
        assert_eq!(stats.pairs_tested, 4);
        assert_eq!(stats.pairs_skipped, 0);
    }

    #[test]
    fn bitset_dedups_cross_cell_pairs() {
        let mut grid = SpatialGrid::new(10, 10, 32.0);
        let mut bodies = build(&[
            BodyDesc::dynamic(63.0, 64.0, 3.0, 3.0),
            BodyDesc::dynamic(65.0, 64.0, 3.0, 3.0),
        ]);
        grid.rebuild(&bodies);

        let mut seen = PairBitset::new();
        seen.reset(bodies.len());
        let stats = solve_grid(&grid, &mut bodies, Some(&mut seen), 20);
        assert_eq!(stats.pairs_tested, 1);
        assert_eq!(stats.pairs_skipped, 3);
        assert_eq!(stats.contacts_resolved, 1);
    }

    #[test]
    fn static_bodies_are_never_paired_with_each_other() {
        let mut grid = SpatialGrid::new(10, 10, 32.0);
        let mut bodies = build(&[
            BodyDesc::fixed(10.0, 10.0, 5.0, 5.0),
            BodyDesc::fixed(12.0, 10.0, 5.0, 5.0),
        ]);
        grid.rebuild(&bodies);

        let stats = solve_grid(&grid, &mut bodies, None, 20);
        assert_eq!(stats.pairs_tested, 0);
        assert_eq!(bodies[0].position.x, 10.0);
        assert_eq!(bodies[1].position.x, 12.0);
    }

    #[test]
    fn dynamic_body_is_pushed_out_of_static_one() {
        let mut grid = SpatialGrid::new(10, 10, 32.0);
        let mut bodies = build(&[
            BodyDesc::fixed(16.0, 20.0, 10.0, 2.0),
            BodyDesc::dynamic(16.0, 16.0, 2.0, 3.0).with_velocity(0.0, 5.0),
        ]);
        grid.rebuild(&bodies);

        let stats = solve_grid(&grid, &mut bodies, None, 20);
        assert_eq!(stats.pairs_tested, 1);
        assert_eq!(bodies[1].position.y, 15.0);
        assert_eq!(bodies[1].velocity.y, 0.0);
        assert_eq!(bodies[0].position.y, 20.0);
    }

    #[test]
    fn occupancy_counts_each_dynamic_body_once() {
        let mut grid = SpatialGrid::new(4, 4, 32.0);
        let mut descs: Vec<BodyDesc> = (0..11)
            .map(|i| BodyDesc::dynamic(2.0 + i as f32 * 2.5, 8.0, 0.5, 0.5))
            .collect();
        descs.push(BodyDesc::fixed(16.0, 24.0, 15.0, 1.0));
        let mut bodies = build(&descs);
        grid.rebuild(&bodies);

        let stats = solve_grid(&grid, &mut bodies, None, 20);
        assert_eq!(stats.max_occupancy, 11);
        assert_eq!(stats.occupancy_sum, 11);
        assert_eq!(stats.crowded_cells, 0);

        let stats = solve_grid(&grid, &mut bodies, None, 10);
        assert_eq!(stats.crowded_cells, 1);
    }

    #[test]
    fn crowded_cells_are_counted() {
        let mut grid = SpatialGrid::new(4, 4, 32.0);
        let descs: Vec<BodyDesc> = (0..5)
            .map(|i| BodyDesc::dynamic(4.0 + i as f32 * 5.0, 16.0, 1.0, 1.0))
            .collect();
        let mut bodies = build(&descs);
        grid.rebuild(&bodies);

        let stats = solve_grid(&grid, &mut bodies, None, 3);
        assert_eq!(stats.crowded_cells, 1);
        assert_eq!(stats.max_occupancy, 5);
        assert_eq!(stats.pairs_tested, 10);
        assert_eq!(stats.contacts_resolved, 0);
    }
}
