//! Partitioning a population into species of similar genomes.

use crate::{
    error::{Error, Result},
    organism::Organism,
};

/// Mean absolute difference between two genomes, weight by weight
pub fn distance(l: &[f64], r: &[f64]) -> Result<f64> {
    if l.len() != r.len() {
        return Err(Error::LengthMismatch {
            left: l.len(),
            right: r.len(),
        });
    }
    if l.is_empty() {
        return Ok(0.);
    }
    let total = l.iter().zip(r).map(|(l, r)| (l - r).abs()).sum::<f64>();
    Ok(total / l.len() as f64)
}

/// A group of organisms close to the same representative. Members are population indices, and
/// the representative is always the first of them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Specie {
    pub members: Vec<usize>,
}

impl Specie {
    #[inline]
    pub fn repr(&self) -> usize {
        self.members[0]
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

/// Walk the population in order, putting every organism into the first specie whose
/// representative is closer than `threshold`. If none is, it founds a new specie.
pub fn speciate(population: &[Organism], threshold: f64) -> Result<Vec<Specie>> {
    let mut species: Vec<Specie> = Vec::new();
    for (idx, organism) in population.iter().enumerate() {
        let mut home = None;
        for (s_idx, specie) in species.iter().enumerate() {
            if distance(&population[specie.repr()].genome, &organism.genome)? < threshold {
                home = Some(s_idx);
                break;
            }
        }

        match home {
            Some(s_idx) => species[s_idx].members.push(idx),
            None => species.push(Specie { members: vec![idx] }),
        }
    }
    Ok(species)
}

/// Record each organism's specie index on the organism itself
pub fn tag(population: &mut [Organism], species: &[Specie]) {
    for (s_idx, specie) in species.iter().enumerate() {
        for &member in specie.members.iter() {
            population[member].species = s_idx;
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{assert_f64_approx, random::WyRng};
    use rand::Rng;

    #[test]
    fn test_distance() {
        assert_f64_approx!(0., distance(&[], &[]).unwrap());
        assert_f64_approx!(0., distance(&[1., 2.], &[1., 2.]).unwrap());
        assert_f64_approx!(1.5, distance(&[0., 0.], &[1., -2.]).unwrap());
        assert!(matches!(
            distance(&[0.], &[0., 1.]),
            Err(Error::LengthMismatch { left: 1, right: 2 })
        ));
    }

    #[test]
    fn test_distance_symmetric() {
        let mut rng = WyRng::seeded(22);
        for len in [1, 5, 477] {
            for _ in 0..100 {
                let l = (0..len).map(|_| rng.random_range(-5.0..5.0)).collect::<Vec<f64>>();
                let r = (0..len).map(|_| rng.random_range(-5.0..5.0)).collect::<Vec<f64>>();
                assert_eq!(distance(&l, &r).unwrap(), distance(&r, &l).unwrap());
            }
        }
    }

    #[test]
    fn test_speciate_three() {
        // d(0, 1) = 0.1, d(0, 2) = d(1, 2) = 5.0
        let population = vec![
            Organism::new(vec![0., 0.]),
            Organism::new(vec![0.1, 0.1]),
            Organism::new(vec![5., 5.]),
        ];
        let species = speciate(&population, 0.7).unwrap();
        assert_eq!(
            vec![
                Specie {
                    members: vec![0, 1]
                },
                Specie { members: vec![2] }
            ],
            species
        );
    }

    #[test]
    fn test_speciate_against_first_member() {
        // 1 is close to 0, 2 is close to 1 but not to 0, so it starts its own specie
        let population = vec![
            Organism::new(vec![0.]),
            Organism::new(vec![0.5]),
            Organism::new(vec![1.]),
        ];
        let species = speciate(&population, 0.7).unwrap();
        assert_eq!(2, species.len());
        assert_eq!(vec![0, 1], species[0].members);
        assert_eq!(2, species[1].repr());
    }

    #[test]
    fn test_speciate_partitions() {
        let mut rng = WyRng::seeded(23);
        let mut population = (0..200)
            .map(|_| Organism::new((0..4).map(|_| rng.random_range(-1.0..1.0)).collect()))
            .collect::<Vec<_>>();
        let species = speciate(&population, 0.5).unwrap();
        tag(&mut population, &species);

        let mut seen = species
            .iter()
            .flat_map(|s| s.members.iter().copied())
            .collect::<Vec<_>>();
        seen.sort();
        assert_eq!((0..200).collect::<Vec<_>>(), seen);

        for (s_idx, specie) in species.iter().enumerate() {
            assert!(!specie.is_empty());
            for &m in specie.members.iter() {
                assert_eq!(s_idx, population[m].species);
                assert!(
                    distance(&population[specie.repr()].genome, &population[m].genome).unwrap()
                        < 0.5
                );
            }
        }
    }

    #[test]
    fn test_speciate_mismatched_genomes() {
        let population = vec![Organism::new(vec![0.]), Organism::new(vec![0., 1.])];
        assert!(speciate(&population, 0.7).is_err());
    }
}
