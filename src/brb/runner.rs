//! BRB execution loop.
//!
//! # Algorithm
//!
//! Branch-Reduce-Bound as in Tuy et al., "Monotonic Optimization: Branch
//! and Cut Methods" (Section 7.6), in Audet et al., *Essays and Surveys in
//! Global Optimization*, Springer 2005:
//!
//! 1. **Reduce & bound**: bound every box of the working set, drop boxes
//!    below the acceptance threshold or proven empty, shrink the survivors
//!    and bound them again.
//! 2. **Update**: evaluate the feasible witness of each surviving box and
//!    replace the incumbent on improvement; queue the box.
//! 3. **Terminate** when the frontier is empty or its best bound no longer
//!    beats the acceptance threshold.
//! 4. **Branch**: bisect the best box along its longest edge.

use std::fmt;
use std::time::Instant;

use super::config::BrbConfig;
use super::types::{BrbProblem, WorkingSet};
use crate::arena::BoxArena;
use crate::error::{check_bounds, MonoError, MonoResult};
use crate::frontier::{Frontier, Traversal};
use crate::region::{Region, Storage};
use crate::status::{fmt_point, RunStats, Status};
use crate::tolerance::threshold;

/// Result of a Branch-Reduce-Bound run.
#[derive(Debug, Clone)]
pub struct BrbResult<const D: usize> {
    /// Terminal status.
    pub status: Status,

    /// Best feasible point found, `None` if no feasible point was found.
    pub xopt: Option<[f64; D]>,

    /// Objective value at `xopt`, `-inf` if no feasible point was found.
    pub optval: f64,

    /// Precision the run was asked for.
    pub epsilon: f64,

    /// Iteration counters and timing.
    pub stats: RunStats,

    /// Incumbent improvements as `(iteration, value)`, oldest first.
    pub history: Vec<(u64, f64)>,
}

impl<const D: usize> fmt::Display for BrbResult<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Status: {}", self.status)?;
        writeln!(f, "Optval: {}", self.optval)?;
        f.write_str("X*: ")?;
        match &self.xopt {
            Some(x) => fmt_point(f, x)?,
            None => f.write_str("none")?,
        }
        writeln!(f)?;
        writeln!(f, "Precision: epsilon = {}", self.epsilon)?;
        writeln!(f, "Iter: {}", self.stats.iterations)?;
        writeln!(f, "Solution found in iter: {}", self.stats.last_update)?;
        writeln!(f, "Peak boxes: {}", self.stats.peak_working_set)?;
        write!(f, "Runtime: {:.3} sec", self.stats.runtime.as_secs_f64())
    }
}

/// Executes the Branch-Reduce-Bound algorithm.
pub struct BrbRunner;

impl BrbRunner {
    /// Maximizes `problem` over `[lb, ub]`, storing queued boxes as `f32`.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_monotonic::brb::{BrbConfig, BrbRunner};
    /// use u_monotonic::mmp::{Mmp, MmpObjective};
    /// use u_monotonic::{CallbackResult, Status};
    ///
    /// // G(x, y) = x0 + x1, independent of y
    /// struct Sum;
    /// impl MmpObjective<2> for Sum {
    ///     fn mmp_obj(&self, x: &[f64; 2], _y: &[f64; 2]) -> CallbackResult<f64> {
    ///         Ok(x[0] + x[1])
    ///     }
    /// }
    ///
    /// let result = BrbRunner::run(&Mmp::new(Sum), [0.0; 2], [1.0; 2], &BrbConfig::default())?;
    /// assert_eq!(result.status, Status::Optimal);
    /// assert!((result.optval - 2.0).abs() <= 2.0 * 1e-2);
    /// # Ok::<(), u_monotonic::MonoError>(())
    /// ```
    pub fn run<P, const D: usize>(
        problem: &P,
        lb: [f64; D],
        ub: [f64; D],
        config: &BrbConfig,
    ) -> MonoResult<BrbResult<D>>
    where
        P: BrbProblem<D>,
    {
        Self::run_with_storage::<f32, P, D>(problem, lb, ub, config, None)
    }

    /// Like [`run`](Self::run), seeding the incumbent with `start` if it is
    /// feasible.
    pub fn run_from<P, const D: usize>(
        problem: &P,
        lb: [f64; D],
        ub: [f64; D],
        config: &BrbConfig,
        start: &[f64; D],
    ) -> MonoResult<BrbResult<D>>
    where
        P: BrbProblem<D>,
    {
        Self::run_with_storage::<f32, P, D>(problem, lb, ub, config, Some(start))
    }

    /// Runs BRB with queued boxes stored at width `S`.
    pub fn run_with_storage<S, P, const D: usize>(
        problem: &P,
        lb: [f64; D],
        ub: [f64; D],
        config: &BrbConfig,
        start: Option<&[f64; D]>,
    ) -> MonoResult<BrbResult<D>>
    where
        S: Storage,
        P: BrbProblem<D>,
    {
        config.validate().map_err(MonoError::InvalidConfig)?;
        check_bounds(&lb, &ub)?;

        let tic = Instant::now();
        let gamma_of = |optval: f64| threshold(config.tolerance, optval, config.epsilon);

        let mut xopt: Option<[f64; D]> = None;
        let mut optval = f64::NEG_INFINITY;
        let mut iter = 0u64;
        let mut last_update = 0u64;
        let mut history = Vec::new();

        if let Some(x) = start {
            if Region::new(lb, ub).contains(x) && problem.is_feasible(x)? {
                optval = problem.objective(x)?;
                xopt = Some(*x);
                history.push((0, optval));
            } else {
                log::warn!("infeasible start point, starting from scratch");
            }
        }

        let mut arena = BoxArena::<S, D>::new();
        let mut frontier = Frontier::new(config.traversal);
        let mut working = WorkingSet::One(Region::new(lb, ub));
        let mut prune_armed = false;
        let mut status = Status::Unsolved;

        loop {
            iter += 1;

            // Reduce & bound
            for region in working.as_slice() {
                let mut region = *region;

                let mut bound = problem.bound(&region)?;
                let gamma = gamma_of(optval);
                if bound < gamma || problem.is_empty(&region)? {
                    continue;
                }

                if config.reduction {
                    problem.reduce(&mut region, gamma, config.reduction_tol)?;
                    bound = problem.bound(&region)?;
                }

                // Update incumbent
                let candidate = problem.feasible_point(&region);
                if problem.is_feasible(&candidate)? {
                    let value = problem.objective(&candidate)?;
                    if value > optval {
                        optval = value;
                        xopt = Some(candidate);
                        last_update = iter;
                        history.push((iter, value));
                        prune_armed = config.pruning;
                    }
                }

                let slot = arena.checkout(&region);
                frontier.push(slot, bound);
            }

            if prune_armed && iter - last_update > config.prune_interval {
                prune_armed = false;
                let before = frontier.len();
                let pruned = frontier.prune_below(gamma_of(optval), &mut arena);
                log::debug!("prune: {} -> {} boxes", before, before - pruned);
            }

            // Terminate
            let exhausted = match config.traversal {
                Traversal::BestBound => {
                    frontier.is_empty() || frontier.best_bound() - gamma_of(optval) < 0.0
                }
                Traversal::BreadthFirst => frontier.is_empty(),
            };
            if exhausted {
                status = if optval == f64::NEG_INFINITY {
                    Status::Infeasible
                } else {
                    Status::Optimal
                };
                break;
            }

            if config.max_iterations > 0 && iter >= config.max_iterations {
                status = Status::MaxIterations;
                break;
            }

            // Select & branch
            let Some(best) = frontier.pop() else {
                break;
            };

            if config.verbose && iter % config.output_every == 0 {
                log::info!(
                    "{:>8}  {:>8}  {:>11.6}  {:>11.6}  ({:>11.6} | {:>8})",
                    iter,
                    frontier.len() + 1,
                    optval,
                    best.bound,
                    best.bound - optval,
                    last_update
                );
            }

            working = WorkingSet::Two(arena.load(&best.slot).split());
            arena.release(best.slot);
        }

        let stats = RunStats {
            iterations: iter,
            last_update,
            runtime: tic.elapsed(),
            peak_working_set: arena.capacity(),
        };

        if config.verbose {
            log::info!(
                "BRB finished: status={} optval={} iter={} last_update={} peak_boxes={} ({} bytes/box) time={:.3}s",
                status,
                optval,
                stats.iterations,
                stats.last_update,
                stats.peak_working_set,
                BoxArena::<S, D>::box_size(),
                stats.runtime.as_secs_f64()
            );
        }

        Ok(BrbResult {
            status,
            xopt,
            optval,
            epsilon: config.epsilon,
            stats,
            history,
        })
    }
}
