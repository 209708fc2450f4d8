use rand::Rng;
use tracing::debug;

use crate::error::{GraphError, Result};
use crate::graph::{Graph, VertexId, Weight};

/// Settings for [`generate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Chance, in percent (0..=100), that any given vertex pair gets an edge.
    pub probability: u8,
    pub min_weight: Weight,
    pub max_weight: Weight,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            probability: 10,
            min_weight: 1,
            max_weight: 9,
        }
    }
}

impl GeneratorConfig {
    pub fn with_probability(probability: u8) -> Self {
        Self {
            probability,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.probability > 100 {
            return Err(GraphError::IndexOutOfRange {
                what: "probability",
                value: u64::from(self.probability),
                min: 0,
                max: 100,
            });
        }
        if self.min_weight == 0 || self.min_weight > self.max_weight {
            return Err(GraphError::IndexOutOfRange {
                what: "min_weight",
                value: u64::from(self.min_weight),
                min: 1,
                max: u64::from(self.max_weight.max(1)),
            });
        }
        Ok(())
    }
}

/// Populate `graph` with random edges.
///
/// Every unordered pair `(i, j)`, `i < j`, of current vertices draws
/// uniformly from `0..100` and gets an edge when the draw is strictly below
/// `probability`: 0 never adds an edge, 100 always does. Weights are uniform
/// over `min_weight..=max_weight`. Existing edges have their weight
/// overwritten.
///
/// Returns how many pairs were given an edge.
pub fn generate<R: Rng>(graph: &mut Graph, config: &GeneratorConfig, rng: &mut R) -> Result<usize> {
    config.validate()?;

    let ids: Vec<VertexId> = graph.vertices().collect();
    let mut created = 0usize;

    for (i, &low) in ids.iter().enumerate() {
        for &high in &ids[i + 1..] {
            let draw: u8 = rng.random_range(0..100);
            if draw < config.probability {
                let weight = rng.random_range(config.min_weight..=config.max_weight);
                graph.insert_edge(low, high, weight)?;
                created += 1;
            }
        }
    }

    debug!(
        vertices = ids.len(),
        edges = created,
        probability = config.probability,
        "generated random edges"
    );
    Ok(created)
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    #[test]
    fn test_probability_zero_adds_nothing() {
        let mut g = Graph::with_vertices(40);
        let mut rng = StdRng::seed_from_u64(1);
        let n = generate(&mut g, &GeneratorConfig::with_probability(0), &mut rng).unwrap();
        assert_eq!(n, 0);
        assert_eq!(g.edge_count(), 0);
    }

    #[test]
    fn test_probability_hundred_is_complete() {
        let mut g = Graph::with_vertices(12);
        let mut rng = StdRng::seed_from_u64(2);
        let n = generate(&mut g, &GeneratorConfig::with_probability(100), &mut rng).unwrap();
        assert_eq!(n, 12 * 11 / 2);
        assert_eq!(g.edge_count(), 12 * 11 / 2);
        for v in g.vertices() {
            assert_eq!(g.degree(v), Ok(11));
        }
    }

    #[test]
    fn test_weights_within_range() {
        let mut g = Graph::with_vertices(30);
        let mut rng = StdRng::seed_from_u64(3);
        generate(&mut g, &GeneratorConfig::with_probability(50), &mut rng).unwrap();
        assert!(g.edge_count() > 0);
        assert!(g.edges().all(|(low, high, w)| low < high && (1..=9).contains(&w)));
    }

    #[test]
    fn test_same_seed_same_graph() {
        let config = GeneratorConfig::with_probability(30);
        let mut a = Graph::with_vertices(25);
        let mut b = Graph::with_vertices(25);
        generate(&mut a, &config, &mut StdRng::seed_from_u64(99)).unwrap();
        generate(&mut b, &config, &mut StdRng::seed_from_u64(99)).unwrap();
        assert_eq!(a.edges().collect::<Vec<_>>(), b.edges().collect::<Vec<_>>());
    }

    #[test]
    fn test_regenerate_upserts() {
        let mut g = Graph::with_vertices(6);
        let mut rng = StdRng::seed_from_u64(4);
        let config = GeneratorConfig::with_probability(100);
        generate(&mut g, &config, &mut rng).unwrap();
        generate(&mut g, &config, &mut rng).unwrap();
        assert_eq!(g.edge_count(), 15);
    }

    #[test]
    fn test_sparse_vertex_ids() {
        let mut g = Graph::new();
        for id in [3, 8, 21] {
            g.insert_vertex(id).unwrap();
        }
        let mut rng = StdRng::seed_from_u64(5);
        generate(&mut g, &GeneratorConfig::with_probability(100), &mut rng).unwrap();
        let pairs: Vec<_> = g.edges().map(|(l, h, _)| (l, h)).collect();
        assert_eq!(pairs, vec![(3, 8), (3, 21), (8, 21)]);
    }

    #[test]
    fn test_invalid_config() {
        let mut g = Graph::with_vertices(3);
        let mut rng = StdRng::seed_from_u64(6);

        let err = generate(&mut g, &GeneratorConfig::with_probability(101), &mut rng).unwrap_err();
        assert!(matches!(err, GraphError::IndexOutOfRange { what: "probability", value: 101, .. }));

        let zero_weight = GeneratorConfig {
            min_weight: 0,
            ..GeneratorConfig::default()
        };
        assert!(zero_weight.validate().is_err());

        let inverted = GeneratorConfig {
            min_weight: 5,
            max_weight: 2,
            ..GeneratorConfig::default()
        };
        assert!(inverted.validate().is_err());
        assert_eq!(g.edge_count(), 0);
    }
}
