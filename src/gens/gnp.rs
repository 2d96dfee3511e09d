use std::ops::Range;

use super::*;

/// `G(n,p)` generators produce every directed pair `(u, v)` with `u != v` over the vertices
/// `0..n` independently with probability `p`.
///
/// Undirected graphs may receive both `(u, v)` and `(v, u)`; the second insertion is a no-op.
#[derive(Debug, Copy, Clone, Default)]
pub struct Gnp {
    n: u32,
    p: Option<f64>,
}

impl Gnp {
    /// Creates a new unconfigured `G(n,p)` generator
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the edge probability
    ///
    /// # Panics
    /// If `prob` is not in `[0, 1]`
    pub fn prob(mut self, prob: f64) -> Self {
        self.set_prob(prob);
        self
    }

    /// Sets the edge probability
    ///
    /// # Panics
    /// If `prob` is not in `[0, 1]`
    pub fn set_prob(&mut self, prob: f64) {
        assert!((0.0..=1.0).contains(&prob), "invalid probability {prob}");
        self.p = Some(prob);
    }

    /// Sets the edge probability to `deg / (n - 1)`. Requires `n` to be set beforehand.
    pub fn avg_deg(self, deg: f64) -> Self {
        let slots = self.n.saturating_sub(1).max(1) as f64;
        self.prob((deg / slots).min(1.0))
    }

    /// Streams weighted edges; every edge draws its weight uniformly from `weights`
    pub fn weighted_stream<'a, R>(
        &self,
        rng: &'a mut R,
        weights: Range<Weight>,
    ) -> impl Iterator<Item = WeightedEdge<u32>> + use<'a, R>
    where
        R: Rng,
    {
        let pairs = self.pairs();
        let p = self.probability();
        pairs.filter_map(move |Edge(u, v)| {
            rng.random_bool(p)
                .then(|| WeightedEdge(u, v, rng.random_range(weights.clone())))
        })
    }

    fn probability(&self) -> f64 {
        match self.p {
            Some(p) => p,
            None => panic!("probability of Gnp was not set"),
        }
    }

    /// All candidate pairs in lexicographic order
    fn pairs(&self) -> impl Iterator<Item = Edge<u32>> + use<> {
        let n = self.n;
        (0..n)
            .flat_map(move |u| (0..n).map(move |v| Edge(u, v)))
            .filter(|e| !e.is_loop())
    }
}

impl NumNodesGen for Gnp {
    fn nodes(mut self, n: u32) -> Self {
        self.n = n;
        self
    }
}

impl GraphGenerator for Gnp {
    fn stream<R>(&self, rng: &mut R) -> impl Iterator<Item = Edge<u32>>
    where
        R: Rng,
    {
        let p = self.probability();
        self.pairs().filter(move |_| rng.random_bool(p))
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    use super::*;

    #[test]
    fn extreme_probabilities() {
        let rng = &mut Pcg64Mcg::seed_from_u64(1);

        assert_eq!(Gnp::new().nodes(8).prob(0.0).stream(rng).count(), 0);
        assert_eq!(Gnp::new().nodes(8).prob(1.0).generate(rng).len(), 56);
        assert!(
            Gnp::new()
                .nodes(8)
                .prob(1.0)
                .stream(rng)
                .all(|e| !e.is_loop())
        );
    }

    #[test]
    fn expected_density() {
        let rng = &mut Pcg64Mcg::seed_from_u64(2);
        let m = Gnp::new().nodes(100).avg_deg(5.0).stream(rng).count();

        // 500 expected edges
        assert!((400..600).contains(&m), "{m}");
    }

    #[test]
    fn weights_in_range() {
        let rng = &mut Pcg64Mcg::seed_from_u64(3);
        let edges: Vec<_> = Gnp::new()
            .nodes(20)
            .prob(0.3)
            .weighted_stream(rng, 5..10)
            .collect();

        assert!(!edges.is_empty());
        assert!(edges.iter().all(|e| (5..10).contains(&e.weight())));
    }

    #[test]
    #[should_panic]
    fn invalid_probability() {
        let _ = Gnp::new().prob(1.5);
    }
}
