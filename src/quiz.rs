use rand::Rng;
use rand::seq::SliceRandom;
use std::collections::BTreeSet;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RankingError {
    #[error("ranking has {got} entries, expected {expected}")]
    WrongLength { expected: usize, got: usize },
    #[error("ranking repeats '{0}'")]
    DuplicateEntry(String),
    #[error("ranking contains unknown entry '{0}'")]
    UnknownEntry(String),
}

/// Unbiased Fisher-Yates ordering of the day's items for display.
pub fn shuffled(items: &[String]) -> Vec<String> {
    let mut out = items.to_vec();
    shuffle_with(&mut rand::thread_rng(), &mut out);
    out
}

pub fn shuffle_with<R: Rng + ?Sized>(rng: &mut R, items: &mut [String]) {
    items.shuffle(rng);
}

/// A submitted ranking must be a permutation of the day's items: same
/// length, no repeats, nothing outside the catalog entry.
pub fn validate_rankings(expected: &[String], submitted: &[String]) -> Result<(), RankingError> {
    if submitted.len() != expected.len() {
        return Err(RankingError::WrongLength {
            expected: expected.len(),
            got: submitted.len(),
        });
    }

    let mut seen = BTreeSet::new();
    for entry in submitted {
        if !expected.iter().any(|item| item == entry) {
            return Err(RankingError::UnknownEntry(entry.clone()));
        }
        if !seen.insert(entry.as_str()) {
            return Err(RankingError::DuplicateEntry(entry.clone()));
        }
    }

    Ok(())
}
