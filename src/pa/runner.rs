//! PA execution loop.
//!
//! # Algorithm
//!
//! Polyblock outer approximation as in Tuy, "Monotonic Optimization:
//! Problems and Solution Approaches", SIAM J. Optim. 11(2), 2000:
//!
//! 1. **Select** the vertex `z` with the largest objective value. Stop if
//!    it lies in the normal set or cannot beat the incumbent by the
//!    requested precision.
//! 2. **Project** `z` and the vertices whose value is within
//!    `partition_tol` of it onto the boundary of the normal set, trying
//!    every feasible candidate as incumbent. The projection with the
//!    largest gap gives the branching point.
//! 3. **Refine**: vertices strictly above the branching point are replaced
//!    by `D` new vertices each, one per coordinate; vertices that can no
//!    longer beat the incumbent are dropped.

use std::fmt;
use std::time::Instant;

use super::config::PaConfig;
use super::types::{remove_dominated, PolyblockProblem, Projection, Vertex};
use crate::error::{MonoError, MonoResult};
use crate::region::le_all;
use crate::status::{fmt_point, RunStats, Status};
use crate::tolerance::threshold;

/// Result of a Polyblock Approximation run.
#[derive(Debug, Clone)]
pub struct PaResult<const D: usize> {
    /// Terminal status.
    pub status: Status,

    /// Best feasible point found, `None` if no feasible point was found.
    pub xopt: Option<[f64; D]>,

    /// Objective value at `xopt`, `-inf` if no feasible point was found.
    pub optval: f64,

    /// Precision the run was asked for.
    pub epsilon: f64,

    /// Iteration counters and timing. `peak_working_set` counts vertices.
    pub stats: RunStats,

    /// Incumbent improvements as `(iteration, value)`, oldest first.
    pub history: Vec<(u64, f64)>,
}

impl<const D: usize> fmt::Display for PaResult<D> {
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
        writeln!(f, "Peak vertices: {}", self.stats.peak_working_set)?;
        write!(f, "Runtime: {:.3} sec", self.stats.runtime.as_secs_f64())
    }
}

/// Best feasible point seen so far.
struct Incumbent<const D: usize> {
    xopt: Option<[f64; D]>,
    optval: f64,
    last_update: u64,
    history: Vec<(u64, f64)>,
}

impl<const D: usize> Incumbent<D> {
    fn new() -> Self {
        Self {
            xopt: None,
            optval: f64::NEG_INFINITY,
            last_update: 0,
            history: Vec::new(),
        }
    }

    /// Replaces the incumbent if `value` is strictly better.
    fn offer(&mut self, x: [f64; D], value: f64, iter: u64) {
        if value > self.optval {
            self.xopt = Some(x);
            self.optval = value;
            self.last_update = iter;
            self.history.push((iter, value));
        }
    }

    fn terminal_status(&self) -> Status {
        if self.xopt.is_none() {
            Status::Infeasible
        } else {
            Status::Optimal
        }
    }
}

/// Projects `v` and offers the candidate as incumbent. Returns the
/// projection and the gap `v.obj - f(candidate)`, `-inf` if the candidate
/// is infeasible.
fn probe<P, const D: usize>(
    problem: &P,
    v: &Vertex<D>,
    incumbent: &mut Incumbent<D>,
    iter: u64,
) -> MonoResult<(Projection<D>, f64)>
where
    P: PolyblockProblem<D>,
{
    let proj = problem.project(&v.point)?;
    let mut gap = f64::NEG_INFINITY;

    if problem.in_feasible_set(&proj.candidate)? {
        let value = problem.objective(&proj.candidate)?;
        incumbent.offer(proj.candidate, value, iter);
        gap = v.obj - value;
    }

    Ok((proj, gap))
}

/// Executes the Polyblock Approximation algorithm.
pub struct PaRunner;

impl PaRunner {
    /// Maximizes `problem` over the polyblock spanned by `ub`.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_monotonic::pa::{radial_projection, PaConfig, PaRunner, PolyblockProblem, Projection};
    /// use u_monotonic::{CallbackResult, Status};
    ///
    /// /// Maximize x0 + x1 over the unit box: the corner is optimal.
    /// struct Corner;
    ///
    /// impl PolyblockProblem<2> for Corner {
    ///     fn objective(&self, x: &[f64; 2]) -> CallbackResult<f64> {
    ///         Ok(x[0] + x[1])
    ///     }
    ///
    ///     fn in_normal_set(&self, x: &[f64; 2]) -> CallbackResult<bool> {
    ///         Ok(x.iter().all(|&xi| xi <= 1.0))
    ///     }
    ///
    ///     fn project(&self, v: &[f64; 2]) -> CallbackResult<Projection<2>> {
    ///         radial_projection(self, v, &[0.0; 2], 1e-9)
    ///     }
    /// }
    ///
    /// let result = PaRunner::run(&Corner, [1.0, 1.0], &PaConfig::default())?;
    /// assert_eq!(result.status, Status::Optimal);
    /// assert_eq!(result.xopt, Some([1.0, 1.0]));
    /// # Ok::<(), u_monotonic::MonoError>(())
    /// ```
    pub fn run<P, const D: usize>(
        problem: &P,
        ub: [f64; D],
        config: &PaConfig,
    ) -> MonoResult<PaResult<D>>
    where
        P: PolyblockProblem<D>,
    {
        Self::execute(problem, ub, config, None)
    }

    /// Like [`run`](Self::run), seeding the incumbent with `start` if it
    /// lies below `ub` and in both the normal and the feasible set.
    pub fn run_from<P, const D: usize>(
        problem: &P,
        ub: [f64; D],
        config: &PaConfig,
        start: &[f64; D],
    ) -> MonoResult<PaResult<D>>
    where
        P: PolyblockProblem<D>,
    {
        Self::execute(problem, ub, config, Some(start))
    }

    fn execute<P, const D: usize>(
        problem: &P,
        ub: [f64; D],
        config: &PaConfig,
        start: Option<&[f64; D]>,
    ) -> MonoResult<PaResult<D>>
    where
        P: PolyblockProblem<D>,
    {
        config.validate().map_err(MonoError::InvalidConfig)?;
        if let Some(dim) = ub.iter().position(|u| !u.is_finite()) {
            return Err(MonoError::InvalidBounds {
                dim,
                lb: f64::NEG_INFINITY,
                ub: ub[dim],
            });
        }

        let tic = Instant::now();
        let gamma_of = |optval: f64| threshold(config.tolerance, optval, config.epsilon);

        let mut incumbent = Incumbent::new();
        if let Some(x) = start {
            if le_all(x, &ub) && problem.in_normal_set(x)? && problem.in_feasible_set(x)? {
                incumbent.offer(*x, problem.objective(x)?, 0);
            } else {
                log::warn!("infeasible start point, starting from scratch");
            }
        }

        let mut vertices = vec![Vertex::new(ub, problem.objective(&ub)?)];
        let mut peak = vertices.len();
        let mut iter = 0u64;

        let status = loop {
            // Select
            let Some((zi, z)) = vertices
                .iter()
                .copied()
                .enumerate()
                .reduce(|best, cur| if cur.1.obj > best.1.obj { cur } else { best })
            else {
                break incumbent.terminal_status();
            };

            if config.verbose && iter > 0 && iter % config.output_every == 0 {
                log::info!(
                    "{:>8}  {:>8}  {:>11.6}  {:>11.6}  (gap {:.6})",
                    iter,
                    vertices.len(),
                    incumbent.optval,
                    z.obj,
                    z.obj - incumbent.optval
                );
            }
            peak = peak.max(vertices.len());

            if config.max_iterations > 0 && iter >= config.max_iterations {
                break Status::MaxIterations;
            }
            iter += 1;

            if problem.in_normal_set(&z.point)? {
                if problem.in_feasible_set(&z.point)? {
                    incumbent.offer(z.point, z.obj, iter);
                    break Status::Optimal;
                }
                // H is upward closed, so nothing below z is feasible
                vertices.swap_remove(zi);
                if vertices.is_empty() {
                    break incumbent.terminal_status();
                }
                continue;
            }

            if z.obj < gamma_of(incumbent.optval) {
                break Status::Optimal;
            }

            // Project the near-best vertices
            let near: Vec<Vertex<D>> = vertices
                .iter()
                .enumerate()
                .filter(|&(j, v)| j != zi && (1.0 + config.partition_tol) * v.obj >= z.obj)
                .map(|(_, v)| *v)
                .collect();

            let (proj, mut best_gap) = probe(problem, &z, &mut incumbent, iter)?;
            let mut branch = proj.boundary;
            for v in &near {
                let (proj, gap) = probe(problem, v, &mut incumbent, iter)?;
                if gap > best_gap {
                    best_gap = gap;
                    branch = proj.boundary;
                }
            }

            // Split off T*, the vertices strictly above the branching point
            let (mut kept, t_star): (Vec<_>, Vec<_>) = vertices
                .drain(..)
                .partition(|v| v.point.iter().zip(&branch).any(|(a, b)| a <= b));
            kept.retain(|v| v.obj > incumbent.optval);
            vertices = kept;

            // Refine
            let gamma = gamma_of(incumbent.optval);
            let mut fresh = Vec::with_capacity(t_star.len() * D);
            for e in &t_star {
                for i in 0..D {
                    let mut point = e.point;
                    point[i] = branch[i];

                    if problem.in_feasible_set(&point)? {
                        let obj = problem.objective(&point)?;
                        if obj > gamma {
                            fresh.push(Vertex::new(point, obj));
                        }
                    }
                }
            }
            remove_dominated(&mut fresh);
            vertices.extend(fresh);
            peak = peak.max(vertices.len());

            if vertices.is_empty() {
                break incumbent.terminal_status();
            }
        };

        let stats = RunStats {
            iterations: iter,
            last_update: incumbent.last_update,
            runtime: tic.elapsed(),
            peak_working_set: peak,
        };

        if config.verbose {
            log::info!(
                "PA finished: status={} optval={} iter={} last_update={} peak_vertices={} time={:.3}s",
                status,
                incumbent.optval,
                stats.iterations,
                stats.last_update,
                stats.peak_working_set,
                stats.runtime.as_secs_f64()
            );
        }

        Ok(PaResult {
            status,
            xopt: incumbent.xopt,
            optval: incumbent.optval,
            epsilon: config.epsilon,
            stats,
            history: incumbent.history,
        })
    }
}
