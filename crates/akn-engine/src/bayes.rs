use akn_core::*;

/// Single-step Bayesian update of `prior` by a leaf `likelihood`.
///
/// The prior is floored at [`EPSILON`] so a "no" answer still lets a pure
/// leaf reach full confidence.
pub fn posterior(prior: Probability, likelihood: Probability) -> Probability {
    let p = prior.max(EPSILON);
    let l = likelihood;
    let agree = p * l;
    let disagree = (1. - p) * (1. - l);
    let total = agree + disagree;
    if total > 0. { agree / total } else { 0. }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;
    use rand::SeedableRng;

    #[test]
    fn pure_leaf_is_certain() {
        assert_eq!(posterior(PRIOR_YES, 1.), 1.);
        assert_eq!(posterior(PRIOR, 1.), 1.);
        assert_eq!(posterior(PRIOR_NO, 1.), 1.);
    }

    #[test]
    fn even_prior_returns_likelihood() {
        for l in [0.1, 0.25, 0.5, 0.75, 0.9] {
            assert!((posterior(PRIOR, l) - l).abs() < 1e-6);
        }
    }

    #[test]
    fn yes_prior_dominates_mixed_leaf() {
        assert_eq!(posterior(PRIOR_YES, 0.5), 1.);
    }

    #[test]
    fn no_prior_floors_at_epsilon() {
        let p = posterior(PRIOR_NO, 0.5);
        assert!(p > 0.);
        assert!(p < 1e-6);
    }

    #[test]
    fn degenerate_leaf() {
        assert_eq!(posterior(PRIOR_YES, 0.), 0.);
    }

    #[test]
    fn bounded() {
        let ref mut rng = rand::rngs::SmallRng::seed_from_u64(3);
        for _ in 0..10_000 {
            let prior = rng.random::<Probability>();
            let likelihood = rng.random::<Probability>();
            let p = posterior(prior, likelihood);
            assert!(p >= 0.);
            assert!(p <= 1.);
        }
    }
}
