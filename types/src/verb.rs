//! Per-family verb sets.
//!
//! Each family accepts a closed set of verbs. Parsing a verb string into one
//! of these enums is the last validation step before state is touched.

use std::fmt;

/// A verb recognized by one family.
pub trait FamilyVerb: Copy + fmt::Debug + Send + Sync + 'static {
    /// Allowed verbs as listed in the rejection message.
    const ALLOWED: &'static str;

    fn parse(verb: &str) -> Option<Self>;

    fn as_str(&self) -> &'static str;
}

/// Verbs of the single-phase vote registries.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum VoteVerb {
    Set,
}

impl FamilyVerb for VoteVerb {
    const ALLOWED: &'static str = "set";

    fn parse(verb: &str) -> Option<Self> {
        match verb {
            "set" => Some(Self::Set),
            _ => None,
        }
    }

    fn as_str(&self) -> &'static str {
        match self {
            Self::Set => "set",
        }
    }
}

/// Verbs of the local registration / ballot workflow.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LocalDptVerb {
    Ready,
    Vote,
}

impl FamilyVerb for LocalDptVerb {
    const ALLOWED: &'static str = "ready or vote";

    fn parse(verb: &str) -> Option<Self> {
        match verb {
            "ready" => Some(Self::Ready),
            "vote" => Some(Self::Vote),
            _ => None,
        }
    }

    fn as_str(&self) -> &'static str {
        match self {
            Self::Ready => "ready",
            Self::Vote => "vote",
        }
    }
}

/// Verbs of the province registration workflow.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ProvinceDptVerb {
    Registered,
    Ready,
    Vote,
    Invalid,
}

impl FamilyVerb for ProvinceDptVerb {
    const ALLOWED: &'static str = "registered,ready,vote,invalid";

    fn parse(verb: &str) -> Option<Self> {
        match verb {
            "registered" => Some(Self::Registered),
            "ready" => Some(Self::Ready),
            "vote" => Some(Self::Vote),
            "invalid" => Some(Self::Invalid),
            _ => None,
        }
    }

    fn as_str(&self) -> &'static str {
        match self {
            Self::Registered => "registered",
            Self::Ready => "ready",
            Self::Vote => "vote",
            Self::Invalid => "invalid",
        }
    }
}
