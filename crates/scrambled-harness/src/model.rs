//! Reference model of the face-group rule.
//!
//! A deliberately simple replay of the recent-face bookkeeping: a plain
//! `Vec` of faces with explicit removals, kept separate from the
//! generator's own set type. It captures the rule itself, not the
//! generator's implementation, and is the oracle generated sequences are
//! checked against.
//!
//! # Design Principles
//!
//! - Simplicity: the model should be obviously correct
//! - Captures WHAT the rule demands, not HOW the generator meets it
//! - Deterministic: same inputs produce same outputs

use scrambled_core::{Face, Move};

/// Replay state for the face-group rule.
#[derive(Debug, Default, Clone)]
pub struct FaceLog {
    recent: Vec<Face>,
}

impl FaceLog {
    /// Empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Observe the next face of a sequence.
    ///
    /// Returns `false` if the face conflicts - it was still in the recent
    /// set when chosen. The log is updated either way so a scan can
    /// continue past a conflict.
    pub fn observe(&mut self, face: Face) -> bool {
        let fresh = !self.recent.contains(&face);

        match face {
            Face::U | Face::D | Face::F => {
                self.recent.retain(|f| !matches!(f, Face::R | Face::L));
            },
            Face::R | Face::L => {
                self.recent.retain(|f| !matches!(f, Face::U | Face::D | Face::F));
            },
            Face::B => {},
        }

        if fresh {
            self.recent.push(face);
        }

        fresh
    }

    /// Faces currently in the recent set.
    #[must_use]
    pub fn recent(&self) -> &[Face] {
        &self.recent
    }
}

/// Index of the first move whose face conflicts, if any.
#[must_use]
pub fn first_conflict(moves: &[Move]) -> Option<usize> {
    let mut log = FaceLog::new();

    moves.iter().position(|m| !log.observe(m.face))
}

#[cfg(test)]
mod tests {
    use super::*;
    use scrambled_core::Modifier;

    fn plain(face: Face) -> Move {
        Move { depth: None, face, modifier: Modifier::Quarter }
    }

    #[test]
    fn repeated_face_conflicts() {
        let mut log = FaceLog::new();

        assert!(log.observe(Face::U));
        assert!(!log.observe(Face::U));
    }

    #[test]
    fn same_group_distinct_faces_are_fine() {
        let mut log = FaceLog::new();

        assert!(log.observe(Face::U));
        assert!(log.observe(Face::D));
        assert!(log.observe(Face::F));
    }

    #[test]
    fn opposing_group_reopens_faces() {
        let mut log = FaceLog::new();

        assert!(log.observe(Face::U));
        assert!(log.observe(Face::R));
        assert!(log.observe(Face::U));
    }

    #[test]
    fn back_face_stays_blocked() {
        let mut log = FaceLog::new();

        assert!(log.observe(Face::B));
        assert!(log.observe(Face::R));
        assert!(log.observe(Face::U));
        assert!(!log.observe(Face::B));
    }

    #[test]
    fn conflict_reports_position() {
        let moves = vec![plain(Face::U), plain(Face::D), plain(Face::D)];

        assert_eq!(first_conflict(&moves), Some(2));
    }

    #[test]
    fn clean_sequence_has_no_conflict() {
        let moves = vec![plain(Face::U), plain(Face::R), plain(Face::U), plain(Face::B)];

        assert_eq!(first_conflict(&moves), None);
    }
}
