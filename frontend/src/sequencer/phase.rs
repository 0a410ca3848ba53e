use std::fmt;

use thiserror::Error;

/// Which screen of the invitation is showing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Intro,
    Video,
    Invite,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("cannot go from {from} to {to}")]
pub struct TransitionError {
    pub from: Phase,
    pub to: Phase,
}

impl Phase {
    /// Only the forward edges Intro -> Video -> Invite exist.
    pub fn transition(self, to: Phase) -> Result<Phase, TransitionError> {
        match (self, to) {
            (Phase::Intro, Phase::Video) | (Phase::Video, Phase::Invite) => Ok(to),
            _ => Err(TransitionError { from: self, to }),
        }
    }

    pub fn is_terminal(self) -> bool {
        self == Phase::Invite
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Phase::Intro => "intro",
            Phase::Video => "video",
            Phase::Invite => "invite",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forward_edges_only() {
        assert_eq!(Phase::Intro.transition(Phase::Video), Ok(Phase::Video));
        assert_eq!(Phase::Video.transition(Phase::Invite), Ok(Phase::Invite));

        for (from, to) in [
            (Phase::Intro, Phase::Intro),
            (Phase::Intro, Phase::Invite),
            (Phase::Video, Phase::Video),
            (Phase::Video, Phase::Intro),
            (Phase::Invite, Phase::Intro),
            (Phase::Invite, Phase::Video),
            (Phase::Invite, Phase::Invite),
        ] {
            assert_eq!(from.transition(to), Err(TransitionError { from, to }));
        }
    }

    #[test]
    fn error_names_both_phases() {
        let err = Phase::Invite.transition(Phase::Video).unwrap_err();
        assert_eq!(err.to_string(), "cannot go from invite to video");
    }
}
