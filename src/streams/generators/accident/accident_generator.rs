use std::io::{Error, ErrorKind};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::streams::{DataHeader, RawRow, RowStream};

use super::domain::{CLASS, ROAD_TYPE, TRAFFIC, WEATHER, build_header};
use super::rules::hazard_class_idx;

/// Synthetic stream of road-condition observations.
///
/// Reproduces the toy accident dataset as a seeded stream: three nominal
/// features (weather, road type, traffic density) sampled uniformly, a
/// deterministic hazard rule assigning the class, and optional Bernoulli
/// label noise.
///
/// Key properties:
/// - Deterministic: fully reproducible given the seed.
/// - Bounded: yields at most `max_rows` rows when set, unbounded otherwise.
/// - Fixed schema: the header is built once and never changes.
#[derive(Debug)]
pub struct AccidentGenerator {
    seed: u64,
    rng: StdRng,
    noise_percentage: f32,
    header: DataHeader,
    max_rows: Option<usize>,
    produced: usize,
}

impl AccidentGenerator {
    /// Creates a generator with label-flip probability `noise_percentage`
    /// (must be in `[0, 1]`), optional row bound and RNG seed.
    pub fn new(
        noise_percentage: f32,
        max_rows: Option<usize>,
        seed: u64,
    ) -> Result<AccidentGenerator, Error> {
        if !(0.0..=1.0).contains(&noise_percentage) {
            return Err(Error::new(
                ErrorKind::InvalidInput,
                "noise_percentage must be in 0.0..=1.0",
            ));
        }

        Ok(AccidentGenerator {
            seed,
            rng: StdRng::seed_from_u64(seed),
            noise_percentage,
            header: build_header(),
            max_rows,
            produced: 0,
        })
    }

    /// Bernoulli label noise: flips the class with probability
    /// `noise_percentage`.
    #[inline]
    fn add_noise(&mut self, cls: usize) -> usize {
        if self.rng.random::<f32>() < self.noise_percentage {
            1 - cls
        } else {
            cls
        }
    }

    #[inline]
    fn sample_indices(&mut self) -> [usize; 3] {
        [
            self.rng.random_range(0..WEATHER.len()),
            self.rng.random_range(0..ROAD_TYPE.len()),
            self.rng.random_range(0..TRAFFIC.len()),
        ]
    }
}

impl RowStream for AccidentGenerator {
    fn header(&self) -> &DataHeader {
        &self.header
    }

    fn has_more_rows(&self) -> bool {
        match self.max_rows {
            Some(n) => self.produced < n,
            None => true,
        }
    }

    fn next_row(&mut self) -> Option<RawRow> {
        if !self.has_more_rows() {
            return None;
        }

        let vals = self.sample_indices();
        let cls = self.add_noise(hazard_class_idx(&vals));
        self.produced += 1;

        Some(RawRow {
            features: vec![
                WEATHER[vals[0]].to_string(),
                ROAD_TYPE[vals[1]].to_string(),
                TRAFFIC[vals[2]].to_string(),
            ],
            class_label: CLASS[cls].to_string(),
        })
    }

    fn restart(&mut self) -> Result<(), Error> {
        self.rng = StdRng::seed_from_u64(self.seed);
        self.produced = 0;
        Ok(())
    }
}
