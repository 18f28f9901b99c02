use stream_bitset::prelude::*;
use tracing::{debug, trace};

use super::*;

/// Number of steps a diffusion process seeded at a node needs to inform a fraction of all nodes.
///
/// The seed starts with `seed_value`. In every step, each node that has sent (or was seeded)
/// before relays `transfer_probability` times its previous value to every neighbor that can
/// still receive. A node stops receiving once its value reaches `1` and counts as informed
/// once its value reaches `target_value`. The simulation ends when `ceil(finish_factor * n)`
/// nodes are informed.
///
/// Seeds whose diffusion stalls before that are reported as `NaN`.
///
/// All parameters lie in `(0, 1]`; the default sets all of them to `1`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SpreadingSpeed {
    seed_value: f64,
    transfer_probability: f64,
    target_value: f64,
    finish_factor: f64,
}

impl Default for SpreadingSpeed {
    fn default() -> Self {
        Self {
            seed_value: 1.0,
            transfer_probability: 1.0,
            target_value: 1.0,
            finish_factor: 1.0,
        }
    }
}

fn check_parameter(name: &'static str, value: f64) -> Result<f64> {
    if value > 0.0 && value <= 1.0 {
        Ok(value)
    } else {
        Err(GraphError::InvalidParameter { name, value })
    }
}

impl SpreadingSpeed {
    /// Creates a new calculator.
    ///
    /// Returns [`GraphError::InvalidParameter`] if any value is not in `(0, 1]`.
    pub fn new(
        seed_value: f64,
        transfer_probability: f64,
        target_value: f64,
        finish_factor: f64,
    ) -> Result<Self> {
        Ok(Self {
            seed_value: check_parameter("seed_value", seed_value)?,
            transfer_probability: check_parameter("transfer_probability", transfer_probability)?,
            target_value: check_parameter("target_value", target_value)?,
            finish_factor: check_parameter("finish_factor", finish_factor)?,
        })
    }

    pub fn with_seed_value(mut self, seed_value: f64) -> Result<Self> {
        self.seed_value = check_parameter("seed_value", seed_value)?;
        Ok(self)
    }

    pub fn with_transfer_probability(mut self, transfer_probability: f64) -> Result<Self> {
        self.transfer_probability =
            check_parameter("transfer_probability", transfer_probability)?;
        Ok(self)
    }

    pub fn with_target_value(mut self, target_value: f64) -> Result<Self> {
        self.target_value = check_parameter("target_value", target_value)?;
        Ok(self)
    }

    pub fn with_finish_factor(mut self, finish_factor: f64) -> Result<Self> {
        self.finish_factor = check_parameter("finish_factor", finish_factor)?;
        Ok(self)
    }

    pub fn seed_value(&self) -> f64 {
        self.seed_value
    }

    pub fn transfer_probability(&self) -> f64 {
        self.transfer_probability
    }

    pub fn target_value(&self) -> f64 {
        self.target_value
    }

    pub fn finish_factor(&self) -> f64 {
        self.finish_factor
    }

    /// Number of steps the diffusion seeded at `seed` needs, or `NaN` if it stalls.
    ///
    /// ** Panics if `seed >= n` or if the simulation exceeds `max(n(n-1)/2, 1)` steps **
    pub fn spreading_time(&self, graph: &SortedAdjArray, seed: Node) -> f64 {
        graph.assert_node(seed);
        let n = graph.len();

        let mut values = vec![0.0; n];
        let mut prev_values = vec![0.0; n];
        let mut senders = graph.vertex_bitset_unset();
        let mut prev_senders = graph.vertex_bitset_unset();
        let mut receivers = NodeBitSet::new_with_bits_set(graph.number_of_nodes(), graph.vertices());
        let mut informed = graph.vertex_bitset_unset();

        values[seed as usize] = self.seed_value;
        senders.set_bit(seed);
        if self.seed_value >= 1.0 {
            receivers.clear_bit(seed);
        }

        let mut remaining = (self.finish_factor * n as f64).ceil() as i64;
        if self.seed_value >= self.target_value {
            informed.set_bit(seed);
            remaining -= 1;
        }

        if remaining == 0 {
            return 0.0;
        }

        let n = n as u64;
        let limit = (n * (n - 1) / 2).max(1);

        for step in 1..=limit {
            prev_values.copy_from_slice(&values);
            prev_senders.clone_from(&senders);
            let mut changed = false;

            for s in prev_senders.iter_set_bits() {
                let relayed = self.transfer_probability * prev_values[s as usize];

                for r in graph.neighbors_of(s) {
                    if !receivers.get_bit(r) {
                        continue;
                    }

                    let value = &mut values[r as usize];
                    *value += relayed;
                    senders.set_bit(r);

                    if *value >= self.target_value && !informed.set_bit(r) {
                        remaining -= 1;
                    }

                    if *value >= 1.0 {
                        *value = 1.0;
                        receivers.clear_bit(r);
                    }

                    changed = true;
                }
            }

            trace!(seed, step, remaining, changed, "spreading step");

            if remaining <= 0 {
                return step as f64;
            }

            if !changed {
                return f64::NAN;
            }
        }

        panic!("spreading from node {seed} did not finish within {limit} steps");
    }
}

impl NodeStatistic for SpreadingSpeed {
    fn name(&self) -> &'static str {
        "Spreading Speed"
    }

    fn abbreviation(&self) -> &'static str {
        "SS"
    }

    fn calculate_all(&self, graph: &SortedAdjArray) -> Vec<f64> {
        let result: Vec<f64> = graph
            .vertices()
            .map(|seed| self.spreading_time(graph, seed))
            .collect();

        debug!(
            n = graph.number_of_nodes(),
            stalled = result.iter().filter(|x| x.is_nan()).count(),
            "spreading speed computed"
        );

        result
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::gens::GeneratorSubstructures;

    #[test]
    fn path_with_defaults() {
        let graph = SortedAdjArray::from_connections(4, [(0, 1), (1, 2), (2, 3)]);
        assert_eq!(
            SpreadingSpeed::default().calculate_all(&graph),
            vec![3.0, 2.0, 2.0, 3.0]
        );
    }

    #[test]
    fn disjoint_pairs() {
        let graph = SortedAdjArray::from_connections(4, [(0, 1), (2, 3)]);

        let stalled = SpreadingSpeed::default().calculate_all(&graph);
        assert!(stalled.iter().all(|x| x.is_nan()));

        let half = SpreadingSpeed::default().with_finish_factor(0.5).unwrap();
        assert_eq!(half.calculate_all(&graph), vec![1.0; 4]);
    }

    #[test]
    fn seed_alone_may_suffice() {
        let graph = SortedAdjArray::new(1);
        assert_eq!(SpreadingSpeed::default().calculate_all(&graph), vec![0.0]);

        let graph = SortedAdjArray::from_connections(4, [(0, 1)]);
        let quarter = SpreadingSpeed::default().with_finish_factor(0.25).unwrap();
        assert_eq!(quarter.spreading_time(&graph, 3), 0.0);
    }

    #[test]
    fn star_reaches_leaves_in_one_step() {
        let mut graph = SortedAdjArray::new(6);
        graph.connect_path([1, 0, 2]);
        graph.set_connections([(0, 3), (0, 4), (0, 5)]);

        let speed = SpreadingSpeed::default().calculate_all(&graph);
        assert_eq!(speed, vec![1.0, 2.0, 2.0, 2.0, 2.0, 2.0]);
    }

    #[test]
    fn partial_transfer() {
        // seed 0 sends 0.5 per step to 1, which saturates in step 2
        let graph = SortedAdjArray::from_connections(3, [(0, 1), (1, 2)]);
        let ss = SpreadingSpeed::new(1.0, 0.5, 1.0, 0.5).unwrap();
        assert_eq!(ss.spreading_time(&graph, 0), 2.0);

        // a lower target is reached after the first transfer
        let ss = ss.with_target_value(0.5).unwrap();
        assert_eq!(ss.spreading_time(&graph, 0), 1.0);
    }

    #[test]
    fn invalid_parameters() {
        for value in [0.0, -0.5, 1.5, f64::NAN] {
            assert!(SpreadingSpeed::new(value, 1.0, 1.0, 1.0).is_err());
            assert!(SpreadingSpeed::default().with_transfer_probability(value).is_err());
            assert!(SpreadingSpeed::default().with_target_value(value).is_err());
            assert!(SpreadingSpeed::default().with_finish_factor(value).is_err());
        }

        assert_eq!(
            SpreadingSpeed::new(1.0, 1.0, 2.0, 1.0),
            Err(GraphError::InvalidParameter {
                name: "target_value",
                value: 2.0
            })
        );
        let ss = SpreadingSpeed::new(0.1, 0.2, 0.3, 0.4).unwrap();
        assert_eq!(ss.seed_value(), 0.1);
        assert_eq!(ss.transfer_probability(), 0.2);
        assert_eq!(ss.target_value(), 0.3);
        assert_eq!(ss.finish_factor(), 0.4);

        let ss = ss.with_seed_value(0.7).unwrap();
        assert_eq!(ss.seed_value(), 0.7);
    }

    #[test]
    fn finishes_on_last_allowed_step() {
        // a single pair allows exactly one step
        let pair = SortedAdjArray::from_connections(2, [(0, 1)]);
        assert_eq!(SpreadingSpeed::default().spreading_time(&pair, 0), 1.0);

        // node 2 crosses the target in step 3 = 3 * 2 / 2
        let path = SortedAdjArray::from_connections(3, [(0, 1), (1, 2)]);
        let ss = SpreadingSpeed::new(1.0, 0.5, 0.5, 1.0).unwrap();
        assert_eq!(ss.spreading_time(&path, 0), 3.0);
    }

    #[test]
    #[should_panic(expected = "did not finish within 3 steps")]
    fn slow_transfer_exceeds_step_limit() {
        // node 1 gains about 0.01 per step and never reaches the target in time
        let path = SortedAdjArray::from_connections(3, [(0, 1), (1, 2)]);
        let ss = SpreadingSpeed::new(1.0, 0.01, 1.0, 1.0).unwrap();
        ss.spreading_time(&path, 0);
    }
}
