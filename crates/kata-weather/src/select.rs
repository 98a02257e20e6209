//! Candidate selection when an address geocodes to more than one result.

use crate::types::GeocodeCandidate;
use thiserror::Error;

/// Selection failures abort the lookup; there is no re-prompt.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SelectError {
    #[error("Invalid index.")]
    InvalidIndex,

    #[error("Index out of range.")]
    OutOfRange,
}

/// Pick a candidate by the 0-based index the user typed.
pub fn pick_candidate<'a>(
    input: &str,
    candidates: &'a [GeocodeCandidate],
) -> Result<&'a GeocodeCandidate, SelectError> {
    let index: usize = input.trim().parse().map_err(|_| SelectError::InvalidIndex)?;

    candidates.get(index).ok_or(SelectError::OutOfRange)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidates(n: usize) -> Vec<GeocodeCandidate> {
        (0..n)
            .map(|i| {
                serde_json::from_value(serde_json::json!({
                    "formatted_address": format!("Address {}", i),
                    "geometry": {"location": {"lat": i as f64, "lng": -(i as f64)}}
                }))
                .unwrap()
            })
            .collect()
    }

    #[test]
    fn test_valid_index() {
        let list = candidates(3);
        let picked = pick_candidate("1", &list).unwrap();
        assert_eq!(picked.formatted_address, "Address 1");
    }

    #[test]
    fn test_index_is_trimmed() {
        let list = candidates(2);
        assert!(pick_candidate(" 0 \n", &list).is_ok());
    }

    #[test]
    fn test_non_numeric_input() {
        let list = candidates(2);
        assert_eq!(pick_candidate("first", &list), Err(SelectError::InvalidIndex));
    }

    #[test]
    fn test_negative_index_is_invalid() {
        let list = candidates(2);
        assert_eq!(pick_candidate("-1", &list), Err(SelectError::InvalidIndex));
    }

    #[test]
    fn test_out_of_range_index() {
        let list = candidates(2);
        assert_eq!(pick_candidate("2", &list), Err(SelectError::OutOfRange));
    }
}
