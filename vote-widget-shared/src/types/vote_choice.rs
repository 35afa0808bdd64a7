use serde::{Deserialize, Serialize};

/// Represents the direction of a vote cast by a user.
///
/// The absence of a vote is modelled as `Option<VoteChoice>` by consumers
/// rather than as a third variant, so the two selection projections can
/// never disagree.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum VoteChoice {
    /// Indicates an upvote or positive endorsement.
    Upvote,
    /// Indicates a downvote or negative endorsement.
    Downvote,
}

impl VoteChoice {
    /// Returns the wire label used when submitting a vote.
    pub fn as_str(&self) -> &'static str {
        match self {
            VoteChoice::Upvote => "Upvote",
            VoteChoice::Downvote => "Downvote",
        }
    }

    /// Returns the smallint code under which the choice is persisted.
    pub fn as_code(&self) -> i16 {
        match self {
            VoteChoice::Upvote => 0,
            VoteChoice::Downvote => 1,
        }
    }
}

impl TryFrom<i16> for VoteChoice {
    type Error = i16;

    /// Decodes a persisted smallint code, returning the offending code
    /// when it matches no known choice.
    fn try_from(code: i16) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(VoteChoice::Upvote),
            1 => Ok(VoteChoice::Downvote),
            other => Err(other),
        }
    }
}

impl std::fmt::Display for VoteChoice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
