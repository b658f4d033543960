//! Serialize/deserialize boundary for the whole observation sequence.
//!
//! The journal only ever sees `encode` and `decode`; swapping the whole-blob
//! format for something incremental means replacing this module.

use std::collections::HashSet;

use uuid::Uuid;

use crate::model::Observation;

/// Why a persisted blob could not be turned back into a valid log.
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    #[error("not a valid observation array: {0}")]
    Json(#[from] serde_json::Error),

    #[error("duplicate observation id: {0}")]
    DuplicateId(Uuid),

    #[error("observation {0} has empty content")]
    EmptyContent(Uuid),
}

/// Serializes the sequence, in order, as a JSON array.
pub fn encode(observations: &[Observation]) -> serde_json::Result<String> {
    serde_json::to_string(observations)
}

/// Parses a JSON array of observations, preserving order.
///
/// Beyond shape, the result must satisfy the log's invariants: ids are
/// unique and no content is blank.
pub fn decode(blob: &str) -> Result<Vec<Observation>, DecodeError> {
    let observations: Vec<Observation> = serde_json::from_str(blob)?;

    let mut seen = HashSet::with_capacity(observations.len());
    for obs in &observations {
        if !seen.insert(obs.id) {
            return Err(DecodeError::DuplicateId(obs.id));
        }
        if obs.content.trim().is_empty() {
            return Err(DecodeError::EmptyContent(obs.id));
        }
    }

    Ok(observations)
}

#[cfg(test)]
mod tests {
    use super::*;

    use jiff::Timestamp;

    use crate::model::{HumanRole, ObjectState};

    fn sample(content: &str, ms: i64) -> Observation {
        Observation {
            id: Uuid::new_v4(),
            timestamp: Timestamp::from_millisecond(ms).unwrap(),
            content: content.into(),
            object_state: ObjectState::Formation,
            human_role: HumanRole::Owner,
        }
    }

    #[test]
    fn decode_inverts_encode_and_keeps_order() {
        let log = vec![
            sample("newest", 3_000),
            sample("middle", 2_000),
            sample("oldest", 1_000),
        ];

        let blob = encode(&log).unwrap();
        let back = decode(&blob).unwrap();

        assert_eq!(back, log);
    }

    #[test]
    fn empty_array_decodes_to_empty_log() {
        assert!(decode("[]").unwrap().is_empty());
    }

    #[test]
    fn decodes_blob_written_by_hand() {
        let blob = r#"[{"id":"6f1c1c7e-8a0e-4b8e-9d3a-2b7f9a1e4c55","timestamp":1718000000000,"content":"Team focus drifting","objectState":"STABILIZATION","humanRole":"STRATEGIST"}]"#;

        let log = decode(blob).unwrap();
        assert_eq!(log.len(), 1);
        assert_eq!(log[0].content, "Team focus drifting");
        assert_eq!(log[0].object_state, ObjectState::Stabilization);
        assert_eq!(log[0].human_role, HumanRole::Strategist);
        assert_eq!(log[0].timestamp.as_millisecond(), 1_718_000_000_000);
    }

    #[test]
    fn rejects_malformed_json() {
        let err = decode("{not json").unwrap_err();
        assert!(matches!(err, DecodeError::Json(_)));
    }

    #[test]
    fn rejects_object_instead_of_array() {
        let err = decode(r#"{"id":"x"}"#).unwrap_err();
        assert!(matches!(err, DecodeError::Json(_)));
    }

    #[test]
    fn rejects_unknown_enum_member() {
        let blob = r#"[{"id":"6f1c1c7e-8a0e-4b8e-9d3a-2b7f9a1e4c55","timestamp":1,"content":"x","objectState":"MELTING","humanRole":"OWNER"}]"#;
        assert!(matches!(decode(blob).unwrap_err(), DecodeError::Json(_)));
    }

    #[test]
    fn rejects_duplicate_ids() {
        let first = sample("a", 2_000);
        let mut second = sample("b", 1_000);
        second.id = first.id;

        let blob = encode(&[first.clone(), second]).unwrap();
        let err = decode(&blob).unwrap_err();

        assert!(matches!(err, DecodeError::DuplicateId(id) if id == first.id));
    }

    #[test]
    fn rejects_blank_content() {
        let blob = encode(&[sample("   ", 1_000)]).unwrap();
        let err = decode(&blob).unwrap_err();

        assert!(matches!(err, DecodeError::EmptyContent(_)));
    }
}
