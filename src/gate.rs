use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::time::{SystemTime, UNIX_EPOCH};

const SESSION_RANDOM_LEN: usize = 9;
const SESSION_CHARSET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Per-identity record of which day numbers were already submitted.
///
/// Advisory, not authoritative: it only blocks a caller that presents the
/// same identity token. A client with cleared storage or a second browser
/// mints a fresh token and passes the gate again.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SubmissionGate {
    pub sessions: BTreeMap<String, BTreeSet<u16>>,
}

impl SubmissionGate {
    pub fn has_submitted(&self, session_id: &str, day: u16) -> bool {
        self.sessions
            .get(session_id)
            .is_some_and(|days| days.contains(&day))
    }

    /// Idempotent; a submitted day never reverts.
    pub fn mark_submitted(&mut self, session_id: &str, day: u16) {
        self.sessions
            .entry(session_id.to_string())
            .or_default()
            .insert(day);
    }
}

/// Fresh identity token: a random base-36 component plus unix milliseconds.
///
/// The page keeps the token in its local storage and only asks for a new
/// one when none is stored, so repeated loads present the identical token.
pub fn mint_session_id() -> String {
    let mut rng = rand::thread_rng();
    let random: String = (0..SESSION_RANDOM_LEN)
        .map(|_| SESSION_CHARSET[rng.gen_range(0..SESSION_CHARSET.len())] as char)
        .collect();
    let millis = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis())
        .unwrap_or_default();
    format!("session-{random}-{millis}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn unmarked_day_reads_as_not_submitted() {
        let gate = SubmissionGate::default();
        assert!(!gate.has_submitted("session-abc-1", 5));
    }

    #[test]
    fn marking_flips_the_flag_for_that_day_only() {
        let mut gate = SubmissionGate::default();
        gate.mark_submitted("session-abc-1", 5);

        assert!(gate.has_submitted("session-abc-1", 5));
        assert!(!gate.has_submitted("session-abc-1", 6));
        assert!(!gate.has_submitted("session-xyz-2", 5));
    }

    #[test]
    fn marking_twice_is_idempotent() {
        let mut gate = SubmissionGate::default();
        gate.mark_submitted("session-abc-1", 5);
        let once = serde_json::to_string(&gate).unwrap();

        gate.mark_submitted("session-abc-1", 5);
        let twice = serde_json::to_string(&gate).unwrap();

        assert_eq!(once, twice);
        assert!(gate.has_submitted("session-abc-1", 5));
    }

    #[test]
    fn gate_state_round_trips_through_json() {
        let mut gate = SubmissionGate::default();
        gate.mark_submitted("session-abc-1", 5);
        gate.mark_submitted("session-abc-1", 9);

        let restored: SubmissionGate =
            serde_json::from_str(&serde_json::to_string(&gate).unwrap()).unwrap();
        assert!(restored.has_submitted("session-abc-1", 5));
        assert!(restored.has_submitted("session-abc-1", 9));
        assert!(!restored.has_submitted("session-abc-1", 6));
    }

    #[test]
    fn minted_tokens_carry_the_expected_shape() {
        let token = mint_session_id();
        let parts: Vec<&str> = token.splitn(3, '-').collect();

        assert_eq!(parts[0], "session");
        assert_eq!(parts[1].len(), SESSION_RANDOM_LEN);
        assert!(parts[1]
            .bytes()
            .all(|byte| SESSION_CHARSET.contains(&byte)));
        assert!(parts[2].parse::<u128>().is_ok());
    }

    #[test]
    fn minted_tokens_do_not_collide_in_practice() {
        let tokens: HashSet<String> = (0..100).map(|_| mint_session_id()).collect();
        assert_eq!(tokens.len(), 100);
    }
}
