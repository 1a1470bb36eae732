//! End-to-end tests for Branch-Reduce-Bound on canonical-form problems.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use u_monotonic::brb::{BrbConfig, BrbProblem, BrbRunner};
use u_monotonic::mmp::{Mmp, MmpConstrained, MmpConstraints, MmpObjective};
use u_monotonic::{CallbackResult, Region, Status, Tolerance, Traversal};

/// `G(x, y) = sum(x)`, maximal at the upper corner.
struct Sum<const D: usize>;

impl<const D: usize> MmpObjective<D> for Sum<D> {
    fn mmp_obj(&self, x: &[f64; D], _y: &[f64; D]) -> CallbackResult<f64> {
        Ok(x.iter().sum())
    }
}

/// Three-user interference channel, each receiver treating interference
/// as noise.
struct Interference {
    direct: [f64; 3],
    cross: [[f64; 3]; 3],
    noise: [f64; 3],
    budget: f64,
}

impl Interference {
    fn new(budget: f64) -> Self {
        Self {
            direct: [1.0, 0.8, 1.2],
            cross: [[0.0, 0.6, 0.3], [0.5, 0.0, 0.7], [0.4, 0.9, 0.0]],
            noise: [1.0, 0.5, 1.0],
            budget,
        }
    }

    fn rate(&self, x: &[f64; 3]) -> f64 {
        self.mmp_obj(x, x).unwrap_or(f64::NAN)
    }
}

impl MmpObjective<3> for Interference {
    fn mmp_obj(&self, x: &[f64; 3], y: &[f64; 3]) -> CallbackResult<f64> {
        let mut rate = 0.0;
        for i in 0..3 {
            let interference: f64 = (0..3).map(|j| self.cross[i][j] * y[j]).sum();
            rate += (1.0 + self.direct[i] * x[i] / (self.noise[i] + interference)).log2();
        }
        Ok(rate)
    }
}

impl MmpConstraints<3> for Interference {
    fn constraints(&self, x: &[f64; 3], _y: &[f64; 3]) -> CallbackResult<bool> {
        Ok(x.iter().sum::<f64>() <= self.budget)
    }
}

/// Never feasible.
struct Blocked;

impl MmpObjective<2> for Blocked {
    fn mmp_obj(&self, x: &[f64; 2], _y: &[f64; 2]) -> CallbackResult<f64> {
        Ok(x[0] + x[1])
    }
}

impl MmpConstraints<2> for Blocked {
    fn constraints(&self, _x: &[f64; 2], _y: &[f64; 2]) -> CallbackResult<bool> {
        Ok(false)
    }
}

/// Best value on a regular grid over `[0, hi]^3`.
fn grid_max(
    hi: f64,
    steps: usize,
    keep: impl Fn(&[f64; 3]) -> bool,
    f: impl Fn(&[f64; 3]) -> f64,
) -> f64 {
    let h = hi / steps as f64;
    let mut best = f64::NEG_INFINITY;
    for a in 0..=steps {
        for b in 0..=steps {
            for c in 0..=steps {
                let x = [a as f64 * h, b as f64 * h, c as f64 * h];
                if keep(&x) {
                    best = best.max(f(&x));
                }
            }
        }
    }
    best
}

#[test]
fn test_two_dim_sum_end_to_end() {
    let config = BrbConfig::default().with_epsilon(1e-2);
    let result = BrbRunner::run(&Mmp::new(Sum::<2>), [0.0; 2], [1.0; 2], &config).unwrap();

    assert_eq!(result.status, Status::Optimal);
    assert!(
        (result.optval - 2.0).abs() <= 2.0 * 1e-2,
        "expected optval near 2, got {}",
        result.optval
    );
    let x = result.xopt.unwrap();
    assert!((x[0] - 1.0).abs() < 0.05 && (x[1] - 1.0).abs() < 0.05, "got {x:?}");
    assert!(result.stats.iterations < 100, "took {} iterations", result.stats.iterations);
}

#[test]
fn test_sum_in_higher_dimensions() {
    let config = BrbConfig::default();

    let r3 = BrbRunner::run(&Mmp::new(Sum::<3>), [0.0; 3], [1.0; 3], &config).unwrap();
    assert_eq!(r3.status, Status::Optimal);
    assert!(r3.optval * 1.01 >= 3.0 - 1e-9, "got {}", r3.optval);

    let r4 = BrbRunner::run(&Mmp::new(Sum::<4>), [0.0; 4], [1.0; 4], &config).unwrap();
    assert_eq!(r4.status, Status::Optimal);
    assert!(r4.optval * 1.01 >= 4.0 - 1e-9, "got {}", r4.optval);
}

#[test]
fn test_always_infeasible_constraints() {
    let result =
        BrbRunner::run(&MmpConstrained::new(Blocked), [0.0; 2], [1.0; 2], &BrbConfig::default())
            .unwrap();

    assert_eq!(result.status, Status::Infeasible);
    assert_eq!(result.optval, f64::NEG_INFINITY);
    assert!(result.xopt.is_none());
}

#[test]
fn test_interference_matches_grid_search() {
    let problem = Interference::new(f64::INFINITY);
    let config = BrbConfig::default().with_epsilon(1e-2);
    let result = BrbRunner::run(
        &Mmp::new(Interference::new(f64::INFINITY)),
        [0.0; 3],
        [10.0; 3],
        &config,
    )
    .unwrap();

    assert_eq!(result.status, Status::Optimal);
    let x = result.xopt.unwrap();
    assert!(x.iter().all(|&xi| (0.0..=10.0).contains(&xi)));
    assert!((problem.rate(&x) - result.optval).abs() < 1e-12);

    let best = grid_max(10.0, 20, |_| true, |x| problem.rate(x));
    assert!(
        result.optval * 1.01 >= best - 1e-9,
        "optval {} not within 1% of grid maximum {}",
        result.optval,
        best
    );
}

#[test]
fn test_interference_with_power_budget() {
    let problem = Interference::new(6.0);
    let result = BrbRunner::run(
        &MmpConstrained::new(Interference::new(6.0)),
        [0.0; 3],
        [10.0; 3],
        &BrbConfig::default(),
    )
    .unwrap();

    assert_eq!(result.status, Status::Optimal);
    let x = result.xopt.unwrap();
    assert!(x.iter().sum::<f64>() <= 6.0, "budget violated: {x:?}");

    let best = grid_max(10.0, 40, |x| x.iter().sum::<f64>() <= 6.0, |x| problem.rate(x));
    assert!(
        result.optval * 1.01 >= best - 1e-9,
        "optval {} not within 1% of grid maximum {}",
        result.optval,
        best
    );
}

#[test]
fn test_absolute_precision() {
    let problem = Mmp::new(Interference::new(f64::INFINITY));
    let loose = BrbRunner::run(&problem, [0.0; 3], [10.0; 3], &BrbConfig::default()).unwrap();
    let tight = BrbRunner::run(
        &problem,
        [0.0; 3],
        [10.0; 3],
        &BrbConfig::default()
            .with_tolerance(Tolerance::Absolute)
            .with_epsilon(1e-3),
    )
    .unwrap();

    // Both stay below the true maximum, the tight run within 1e-3 of it.
    assert_eq!(tight.status, Status::Optimal);
    assert!(tight.optval + 1e-3 >= loose.optval - 1e-12);
}

#[test]
fn test_reduction_and_pruning_agree() {
    let problem = Mmp::new(Interference::new(f64::INFINITY));
    let config = BrbConfig::default()
        .with_tolerance(Tolerance::Absolute)
        .with_epsilon(1e-2);

    let plain = BrbRunner::run(
        &problem,
        [0.0; 3],
        [10.0; 3],
        &config.clone().with_reduction(false),
    )
    .unwrap();
    let pruned = BrbRunner::run(
        &problem,
        [0.0; 3],
        [10.0; 3],
        &config.with_pruning(true).with_prune_interval(5),
    )
    .unwrap();

    assert_eq!(plain.status, Status::Optimal);
    assert_eq!(pruned.status, Status::Optimal);
    assert!((plain.optval - pruned.optval).abs() <= 1e-2 + 1e-12);
}

#[test]
fn test_pruning_sweep_saves_breadth_first_iterations() {
    let problem = Mmp::new(Sum::<2>);
    let config = BrbConfig::default()
        .with_tolerance(Tolerance::Absolute)
        .with_epsilon(1e-2)
        .with_reduction(false)
        .with_traversal(Traversal::BreadthFirst)
        .with_prune_interval(1);

    let plain = BrbRunner::run(&problem, [0.0; 2], [1.0; 2], &config).unwrap();
    let pruned =
        BrbRunner::run(&problem, [0.0; 2], [1.0; 2], &config.clone().with_pruning(true)).unwrap();

    assert_eq!(plain.status, Status::Optimal);
    assert_eq!(pruned.status, Status::Optimal);
    assert_eq!(plain.optval, pruned.optval);
    assert!(
        pruned.stats.iterations < plain.stats.iterations,
        "sweep had no effect: {} vs {} iterations",
        pruned.stats.iterations,
        plain.stats.iterations
    );
}

#[test]
fn test_warm_start_outside_domain_is_rejected() {
    let result = BrbRunner::run_from(
        &Mmp::new(Sum::<2>),
        [0.0; 2],
        [1.0; 2],
        &BrbConfig::default(),
        &[100.0, 100.0],
    )
    .unwrap();

    assert_eq!(result.status, Status::Optimal);
    assert!(result.optval <= 2.0, "got {}", result.optval);
    let x = result.xopt.unwrap();
    assert!(Region::new([0.0; 2], [1.0; 2]).contains(&x), "got {x:?}");
}

#[test]
fn test_incumbent_is_monotone() {
    let result = BrbRunner::run(
        &Mmp::new(Interference::new(f64::INFINITY)),
        [0.0; 3],
        [10.0; 3],
        &BrbConfig::default(),
    )
    .unwrap();

    assert!(!result.history.is_empty());
    for w in result.history.windows(2) {
        assert!(w[0].0 <= w[1].0 && w[0].1 < w[1].1, "history not monotone: {w:?}");
    }
    assert_eq!(result.history.last().map(|h| h.0), Some(result.stats.last_update));
}

#[test]
fn test_warm_start_is_kept_when_optimal() {
    let problem = Mmp::new(Sum::<2>);
    let result =
        BrbRunner::run_from(&problem, [0.0; 2], [1.0; 2], &BrbConfig::default(), &[1.0, 1.0])
            .unwrap();

    assert_eq!(result.status, Status::Optimal);
    assert_eq!(result.optval, 2.0);
    assert_eq!(result.stats.last_update, 0);
    assert_eq!(result.history, vec![(0, 2.0)]);
}

#[test]
fn test_bound_soundness_on_sampled_boxes() {
    let problem = Mmp::new(Interference::new(f64::INFINITY));
    let mut rng = StdRng::seed_from_u64(7);

    for _ in 0..500 {
        let mut lb = [0.0; 3];
        let mut ub = [0.0; 3];
        for i in 0..3 {
            let a: f64 = rng.random_range(0.0..10.0);
            let b: f64 = rng.random_range(0.0..10.0);
            lb[i] = a.min(b);
            ub[i] = a.max(b);
        }
        let region = Region::new(lb, ub);
        let bound = problem.bound(&region).unwrap();

        for _ in 0..20 {
            let mut x = [0.0; 3];
            for i in 0..3 {
                x[i] = if lb[i] < ub[i] { rng.random_range(lb[i]..=ub[i]) } else { lb[i] };
            }
            let value = problem.objective(&x).unwrap();
            assert!(bound >= value - 1e-12, "bound {bound} below f({x:?}) = {value}");
        }
    }
}

#[test]
fn test_reduction_keeps_sampled_admissible_points() {
    let problem = MmpConstrained::new(Interference::new(12.0));
    let mut rng = StdRng::seed_from_u64(11);

    for _ in 0..200 {
        let mut lb = [0.0; 3];
        let mut ub = [0.0; 3];
        for i in 0..3 {
            let a: f64 = rng.random_range(0.0..10.0);
            let b: f64 = rng.random_range(0.0..10.0);
            lb[i] = a.min(b);
            ub[i] = a.max(b);
        }
        let original = Region::new(lb, ub);
        let gamma = problem.objective(&lb).unwrap() * 1.01;

        let mut reduced = original;
        problem.reduce(&mut reduced, gamma, 0.1).unwrap();
        assert!(original.encloses(&reduced));

        for _ in 0..50 {
            let mut x = [0.0; 3];
            for i in 0..3 {
                x[i] = if lb[i] < ub[i] { rng.random_range(lb[i]..=ub[i]) } else { lb[i] };
            }
            if problem.is_feasible(&x).unwrap() && problem.objective(&x).unwrap() >= gamma {
                assert!(reduced.contains(&x), "{x:?} cut from {original:?} -> {reduced:?}");
            }
        }
    }
}
