use super::{argmax, ChooseMove, Topology};
use crate::{
    constants::SNEK_MUTATE_PARAMS,
    error::{Error, Result},
    game::{Move, STIMULUS_LEN},
};
use rulinalg::matrix::{BaseMatrixMut, Matrix};

/// Two dense layers with a tanh between them. The weights are copied out of a genome once,
/// and never change afterwards. Play happens through a [Player], which owns the memory.
#[derive(Debug, Clone)]
pub struct Simple {
    topology: Topology,
    /// neurons × (inputs + 1)
    layer1: Matrix<f64>,
    /// outputs × (neurons + 1)
    layer2: Matrix<f64>,
}

impl Simple {
    /// Slice a genome into layers. The leading mutation slots are skipped, then layer 1 and
    /// layer 2 are read row-major, back to back.
    pub fn from_genome(topology: Topology, genome: &[f64]) -> Result<Self> {
        let expected = topology.genome_len();
        if genome.len() != expected {
            return Err(Error::GenomeLength {
                expected,
                got: genome.len(),
            });
        }

        let (l1, _) = topology.layer_sizes();
        let weights = &genome[SNEK_MUTATE_PARAMS..];
        Ok(Self {
            topology,
            layer1: Matrix::new(topology.neurons, topology.inputs() + 1, &weights[..l1]),
            layer2: Matrix::new(topology.outputs(), topology.neurons + 1, &weights[l1..]),
        })
    }

    #[inline]
    pub fn topology(&self) -> Topology {
        self.topology
    }

    /// A fresh player with zeroed memory
    pub fn player(&self) -> Player<'_> {
        Player {
            net: self,
            memory: vec![0.; self.topology.memories],
        }
    }

    /// Raw outputs for a stimulus and memory: move logits first, then memory pre-activations
    pub fn forward(&self, stimulus: &[f64], memory: &[f64]) -> Vec<f64> {
        debug_assert_eq!(STIMULUS_LEN, stimulus.len());
        debug_assert_eq!(self.topology.memories, memory.len());

        let mut input = Vec::with_capacity(self.topology.inputs() + 1);
        input.extend_from_slice(stimulus);
        input.extend_from_slice(memory);
        input.push(1.);

        let mut hidden = (&self.layer1 * Matrix::new(input.len(), 1, input))
            .apply(&f64::tanh)
            .into_vec();
        hidden.push(1.);

        (&self.layer2 * Matrix::new(hidden.len(), 1, hidden)).into_vec()
    }
}

/// One episode's worth of play from a [Simple] network
#[derive(Debug)]
pub struct Player<'a> {
    net: &'a Simple,
    memory: Vec<f64>,
}

impl Player<'_> {
    #[inline]
    pub fn memory(&self) -> &[f64] {
        &self.memory
    }
}

impl ChooseMove for Player<'_> {
    fn choose_move(&mut self, stimulus: &[f64]) -> Move {
        let out = self.net.forward(stimulus, &self.memory);
        let (logits, memory) = out.split_at(Move::ALL.len());
        for (slot, v) in self.memory.iter_mut().zip(memory) {
            *slot = v.tanh();
        }
        Move::from_index(argmax(logits))
    }
}
