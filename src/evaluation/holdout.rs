use std::io::{Error, ErrorKind};

use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

/// Seeded shuffle split into `(train, test)` sets.
///
/// `test_fraction` must be in `(0, 1)` and the slice needs at least two
/// elements; the test set always gets at least one element and never all
/// of them. The same seed always produces the same split.
pub fn holdout_split<T: Clone>(
    rows: &[T],
    test_fraction: f64,
    seed: u64,
) -> Result<(Vec<T>, Vec<T>), Error> {
    if !(test_fraction > 0.0 && test_fraction < 1.0) {
        return Err(Error::new(
            ErrorKind::InvalidInput,
            "test_fraction must be strictly between 0 and 1",
        ));
    }
    if rows.len() < 2 {
        return Err(Error::new(
            ErrorKind::InvalidInput,
            "holdout split needs at least two rows",
        ));
    }

    let mut indices: Vec<usize> = (0..rows.len()).collect();
    let mut rng = StdRng::seed_from_u64(seed);
    indices.shuffle(&mut rng);

    let test_len = ((rows.len() as f64) * test_fraction)
        .round()
        .clamp(1.0, (rows.len() - 1) as f64) as usize;

    let test = indices[..test_len]
        .iter()
        .map(|&i| rows[i].clone())
        .collect();
    let train = indices[test_len..]
        .iter()
        .map(|&i| rows[i].clone())
        .collect();
    Ok((train, test))
}
