use rand::Rng;

use super::*;

/// `G(n,p)` digraphs on the nodes `0..n` contain every possible edge `(u, v)` with
/// probability `p`, independent from each other.
///
/// Without a probability set, `p = 1/2`, i.e. every digraph on `n` nodes is equally likely.
#[derive(Debug, Copy, Clone)]
pub struct Gnp {
    n: NumNodes,
    p: f64,
    loops: bool,
}

impl Default for Gnp {
    fn default() -> Self {
        Self {
            n: 0,
            p: 0.5,
            loops: true,
        }
    }
}

impl Gnp {
    /// Creates a new empty `G(n,p)` generator
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates `p` directly
    ///
    /// # Panics
    /// Panics if `prob` is not within `[0, 1]`.
    pub fn prob(mut self, prob: f64) -> Self {
        assert!((0.0..=1.0).contains(&prob), "{prob} is not a valid probability");
        self.p = prob;
        self
    }

    /// If *false*, self-loops are never generated
    pub fn loops(mut self, loops: bool) -> Self {
        self.loops = loops;
        self
    }

    /// Creates a lazy stream over random `G(n,p)` edges in ascending order
    pub fn stream<'a, R: Rng>(&self, rng: &'a mut R) -> impl Iterator<Item = Edge> + 'a {
        let Self { n, p, loops } = *self;
        (0..n)
            .flat_map(move |u| (0..n).map(move |v| Edge(u, v)))
            .filter(move |e| (loops || !e.is_loop()) && rng.random_bool(p))
    }

    /// Creates a graph with nodes `0..n` and the edges of [`Gnp::stream`]
    ///
    /// # Errors
    /// Propagates the first failing insertion of the target representation.
    pub fn generate<G, R>(&self, rng: &mut R) -> Result<G>
    where
        G: GraphNew + GraphNodeEditing + GraphEdgeEditing,
        R: Rng,
    {
        G::from_edges(0..self.n, self.stream(rng))
    }
}

impl NumNodesGen for Gnp {
    /// Updates `n`
    fn nodes(mut self, n: NumNodes) -> Self {
        self.n = n;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    #[test]
    fn extreme_probabilities() {
        let rng = &mut Pcg64Mcg::seed_from_u64(1);

        let empty: AdjListGraph = Gnp::new().nodes(10).prob(0.0).generate(rng).unwrap();
        assert_eq!(empty.number_of_nodes(), 10);
        assert_eq!(empty.number_of_edges(), 0);

        let complete: AdjListGraph = Gnp::new().nodes(10).prob(1.0).generate(rng).unwrap();
        assert_eq!(complete.number_of_edges(), 100);

        let no_loops: EdgeSetGraph = Gnp::new()
            .nodes(10)
            .prob(1.0)
            .loops(false)
            .generate(rng)
            .unwrap();
        assert_eq!(no_loops.number_of_edges(), 90);
        assert!(no_loops.vertices().into_iter().all(|u| !no_loops.has_self_loop(u)));
    }

    #[test]
    fn seeded_generation_is_reproducible() {
        let generator = Gnp::new().nodes(30).prob(0.1);
        let a = generator
            .stream(&mut Pcg64Mcg::seed_from_u64(4))
            .collect_vec();
        let b: AdjMatrixGraph = generator.generate(&mut Pcg64Mcg::seed_from_u64(4)).unwrap();

        assert!(a.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(a, b.edges());
    }

    #[test]
    fn edge_density() {
        let rng = &mut Pcg64Mcg::seed_from_u64(2);
        let graph: AdjListGraph = Gnp::new().nodes(100).prob(0.3).generate(rng).unwrap();
        let m = graph.number_of_edges();
        assert!((2_500..3_500).contains(&m), "{m} edges");
    }

    #[test]
    #[should_panic]
    fn invalid_probability() {
        let _ = Gnp::new().prob(1.5);
    }
}
