//! Sacred-code verification for the ballgame.
//!
//! The code is produced by an external mini-game; the engine only judges
//! the string it is handed.

/// Prefix every winning code starts with.
pub const CODE_PREFIX: &str = "TLACHTLI";
/// Marker for a code earned by the player.
pub const PLAYER_MARKER: &str = "P1";
/// Marker for a code earned by the Lords.
pub const LORDS_MARKER: &str = "P2";

/// Outcome of checking a sacred code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodeVerdict {
    /// The player won the court game.
    Accepted,
    /// The Lords won the court game.
    Rejected,
    /// Neither pattern matched; the player should try again.
    Unrecognized,
}

/// Judge a sacred code.
///
/// Acceptance is checked first, so a code carrying both markers after the
/// prefix counts as a win.
pub fn verify_code(code: &str) -> CodeVerdict {
    if code.starts_with(CODE_PREFIX) && code.contains(PLAYER_MARKER) {
        CodeVerdict::Accepted
    } else if code.contains(LORDS_MARKER) {
        CodeVerdict::Rejected
    } else {
        CodeVerdict::Unrecognized
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepted_codes() {
        assert_eq!(verify_code("TLACHTLI-P1-WIN"), CodeVerdict::Accepted);
        assert_eq!(verify_code("TLACHTLIP1"), CodeVerdict::Accepted);
        assert_eq!(verify_code("TLACHTLI-P1-P2"), CodeVerdict::Accepted);
    }

    #[test]
    fn rejected_codes() {
        assert_eq!(verify_code("XYZ-P2"), CodeVerdict::Rejected);
        assert_eq!(verify_code("TLACHTLI-P2"), CodeVerdict::Rejected);
    }

    #[test]
    fn unrecognized_codes() {
        assert_eq!(verify_code("garbage"), CodeVerdict::Unrecognized);
        assert_eq!(verify_code(""), CodeVerdict::Unrecognized);
        // Player marker without the prefix is not enough.
        assert_eq!(verify_code("XYZ-P1"), CodeVerdict::Unrecognized);
        // Case matters.
        assert_eq!(verify_code("tlachtli-p1"), CodeVerdict::Unrecognized);
    }
}
