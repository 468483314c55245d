use super::LogicalType;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredProcedure {
    pub name: String,

    /// Catalog remarks, if any.
    pub description: Option<String>,

    pub returns: Returns,

    /// Parameters in catalog order.
    pub params: Vec<Param>,
}

/// What a stored procedure hands back to its caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Returns {
    Void,

    /// A single value of the given type.
    Type(LogicalType),

    ResultSet,

    Unknown,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Param {
    pub direction: ParamDirection,
    pub name: String,
    pub ty: LogicalType,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ParamDirection {
    In,
    Out,
    InOut,
}

impl Returns {
    pub fn ty(self) -> Option<LogicalType> {
        match self {
            Returns::Type(ty) => Some(ty),
            _ => None,
        }
    }
}
