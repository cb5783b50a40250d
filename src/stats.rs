use crate::organism::Organism;
use serde::{Deserialize, Serialize};

/// One organism's line in a [Stat]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StatOrg {
    pub score: f64,
    pub species: usize,
}

/// A snapshot of a generation, taken once it's been scored and sorted
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stat {
    pub generation: usize,
    pub best_model: Vec<f64>,
    pub max: f64,
    pub avg: f64,
    pub species: usize,
    pub orgs: Vec<StatOrg>,
}

impl Stat {
    /// Expects `population` sorted best first
    pub fn new(generation: usize, population: &[Organism]) -> Self {
        let orgs = population
            .iter()
            .map(|o| StatOrg {
                score: o.score(),
                species: o.species,
            })
            .collect::<Vec<_>>();
        let avg = if orgs.is_empty() {
            0.
        } else {
            orgs.iter().map(|o| o.score).sum::<f64>() / orgs.len() as f64
        };

        Self {
            generation,
            best_model: population
                .first()
                .map(|o| o.genome.clone())
                .unwrap_or_default(),
            max: orgs.first().map_or(0., |o| o.score),
            avg,
            species: orgs.iter().map(|o| o.species + 1).max().unwrap_or(0),
            orgs,
        }
    }

    /// One JSON object, for line delimited output
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{assert_f64_approx, organism::sort_by_score};

    #[test]
    fn test_stat() {
        let mut population = [(vec![1.], 4, 0), (vec![2.], 10, 1), (vec![3.], 1, 1)]
            .into_iter()
            .map(|(genome, score, species)| {
                let mut o = Organism::new(genome);
                o.record(score);
                o.species = species;
                o
            })
            .collect::<Vec<_>>();
        sort_by_score(&mut population);

        let stat = Stat::new(7, &population);
        assert_eq!(7, stat.generation);
        assert_eq!(vec![2.], stat.best_model);
        assert_f64_approx!(10., stat.max);
        assert_f64_approx!(5., stat.avg);
        assert_eq!(2, stat.species);
        assert_eq!(
            vec![
                StatOrg {
                    score: 10.,
                    species: 1
                },
                StatOrg {
                    score: 4.,
                    species: 0
                },
                StatOrg {
                    score: 1.,
                    species: 1
                },
            ],
            stat.orgs
        );
    }

    #[test]
    fn test_stat_json() {
        let stat = Stat::new(0, &[]);
        let json = stat.to_json().unwrap();
        assert_eq!(
            r#"{"generation":0,"bestModel":[],"max":0.0,"avg":0.0,"species":0,"orgs":[]}"#,
            json
        );
        assert_eq!(stat, serde_json::from_str(&json).unwrap());
    }
}
