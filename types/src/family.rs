//! Transaction family identifiers.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::UnknownFamily;

/// Every family is registered under this single version.
pub const FAMILY_VERSION: &str = "1.0";

/// A named transaction-processing workflow with its own namespace and verb set.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Family {
    /// Single-phase vote registry for local elections.
    LocalVote,
    /// Single-phase vote registry for province elections.
    ProvinceVote,
    /// Local registration / ballot collection workflow.
    LocalDpt,
    /// Province registration / ready / vote / invalidate workflow.
    ProvinceDpt,
}

impl Family {
    pub const ALL: [Family; 4] = [
        Self::LocalVote,
        Self::ProvinceVote,
        Self::LocalDpt,
        Self::ProvinceDpt,
    ];

    /// Family name as declared on the ledger. Also the input to the namespace hash.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::LocalVote => "localVote",
            Self::ProvinceVote => "provinceVote",
            Self::LocalDpt => "localDPT",
            Self::ProvinceDpt => "provinceDPT",
        }
    }

    /// Whether this family stores a write-once scalar per name.
    pub fn is_single_phase(&self) -> bool {
        matches!(self, Self::LocalVote | Self::ProvinceVote)
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Family {
    type Err = UnknownFamily;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|family| family.as_str() == s)
            .ok_or_else(|| UnknownFamily(s.to_string()))
    }
}
