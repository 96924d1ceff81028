//! Explicit-stack depth-first search over a single mutable second layer
//!
//! Each stack frame is one decision point of the row-major scan. A frame
//! tries a rightward brick, then a downward brick, then leaves its cell to
//! the placements already made. A frame that placed a brick removes it again
//! before trying its next alternative, so sibling attempts always see the
//! layer exactly as it was when the frame was entered.
//!
//! Three checks cut branches that cannot complete without changing which
//! layer is found first: a free cell may not be skipped, a placement may not
//! strand a neighbouring cell, and a state already seen to fail is not
//! searched again.

use crate::io::configuration::PROGRESS_REPORT_INTERVAL;
use crate::layer::{BrickId, Direction, Grid, Placement};
use crate::search::boundary::{BoundaryMask, is_legal, strands_neighbor};
use crate::search::cache::FailureCache;
use crate::search::{Solver, has_tileable_shape};

/// Counters describing the work done by one search
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Bricks placed, including those later removed
    pub placements: u64,
    /// Bricks removed while backtracking
    pub undos: u64,
    /// Placements rejected immediately for stranding a neighbouring cell
    pub pruned: u64,
    /// Frames abandoned on entry because their state was known to fail
    pub cache_hits: usize,
    /// Furthest scan position reached (cells in row-major order)
    pub deepest: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stage {
    Right,
    Down,
    Skip,
    Exhausted,
}

#[derive(Debug)]
struct Frame {
    index: usize,
    stage: Stage,
    placed: Option<Placement>,
}

impl Frame {
    const fn new(index: usize) -> Self {
        Self {
            index,
            stage: Stage::Right,
            placed: None,
        }
    }
}

enum Step {
    Descend,
    Retry,
    Backtrack,
}

/// Depth-first solver with place/undo backtracking
///
/// Stack depth is bounded by the cell count, so grid size never depends
/// on the thread's call stack.
#[derive(Debug, Clone, Copy, Default)]
pub struct BacktrackingSolver;

impl BacktrackingSolver {
    /// Create a solver
    pub const fn new() -> Self {
        Self
    }

    /// Solve and report the work done
    pub fn solve_with_stats(&self, reference: &Grid) -> (Option<Grid>, SearchStats) {
        self.solve_observed(reference, |_| {})
    }

    /// Solve, calling `observer` every [`PROGRESS_REPORT_INTERVAL`] placements
    pub fn solve_observed<F>(&self, reference: &Grid, mut observer: F) -> (Option<Grid>, SearchStats)
    where
        F: FnMut(&SearchStats),
    {
        let mut stats = SearchStats::default();
        if !has_tileable_shape(reference) {
            return (None, stats);
        }

        let (rows, cols) = reference.dimensions();
        let total = rows * cols;
        let target = reference.brick_count();
        let mask = BoundaryMask::new(reference);
        let mut cache = FailureCache::new();

        let mut second = Grid::empty(rows, cols);
        let mut placed = 0_usize;
        let mut stack = Vec::with_capacity(total + 1);
        stack.push(Frame::new(0));

        while let Some(frame) = stack.last_mut() {
            let index = frame.index;
            stats.deepest = stats.deepest.max(index);

            if frame.stage == Stage::Right && cache.is_known_failure(&second, index) {
                stats.cache_hits = cache.stats.hits;
                stack.pop();
                continue;
            }

            if index == total {
                if placed == target {
                    return (Some(second), stats);
                }
                cache.record_failure(&second, index);
                stack.pop();
                continue;
            }

            if let Some(previous) = frame.placed.take() {
                second.clear(&previous);
                placed -= 1;
                stats.undos += 1;
            }

            let (row, col) = (index / cols, index % cols);
            let direction = match frame.stage {
                Stage::Right => {
                    frame.stage = Stage::Down;
                    Direction::Right
                }
                Stage::Down => {
                    frame.stage = Stage::Skip;
                    Direction::Down
                }
                Stage::Skip => {
                    frame.stage = Stage::Exhausted;
                    // Later anchors only reach right and down, so a free cell
                    // left behind here can never be covered
                    let step = if second.is_free(row, col) {
                        cache.record_failure(&second, index);
                        Step::Backtrack
                    } else {
                        Step::Descend
                    };
                    advance(&mut stack, step);
                    continue;
                }
                Stage::Exhausted => {
                    cache.record_failure(&second, index);
                    stack.pop();
                    continue;
                }
            };

            let placement = Placement::new(row, col, direction);
            let step = if is_legal(&mask, &second, &placement) {
                placed += 1;
                second.place(&placement, brick_label(placed));
                frame.placed = Some(placement);

                stats.placements += 1;
                if stats.placements % PROGRESS_REPORT_INTERVAL == 0 {
                    observer(&stats);
                }

                if strands_neighbor(reference, &second, &placement) {
                    stats.pruned += 1;
                    Step::Retry
                } else {
                    Step::Descend
                }
            } else {
                Step::Retry
            };
            advance(&mut stack, step);
        }

        (None, stats)
    }
}

impl Solver for BacktrackingSolver {
    fn solve(&self, reference: &Grid) -> Option<Grid> {
        self.solve_with_stats(reference).0
    }
}

fn advance(stack: &mut Vec<Frame>, step: Step) {
    match step {
        Step::Descend => {
            if let Some(index) = stack.last().map(|frame| frame.index + 1) {
                stack.push(Frame::new(index));
            }
        }
        Step::Retry => {}
        Step::Backtrack => {
            stack.pop();
        }
    }
}

fn brick_label(count: usize) -> BrickId {
    BrickId::try_from(count).unwrap_or(BrickId::MAX)
}
