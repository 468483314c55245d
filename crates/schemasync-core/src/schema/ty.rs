use crate::{Error, Result};

use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Portable data types, independent of any one engine's native type names.
///
/// Each member corresponds to a JDBC `java.sql.Types` code, which is what
/// engine catalogs report in their `DATA_TYPE` columns. The mapping from a
/// logical type to the type clause written into DDL is engine specific and
/// lives with the serializer; the mapping back from a catalog code is
/// [`LogicalType::from_code`].
///
/// # Length and scale
///
/// Only [`Char`](Self::Char), [`VarChar`](Self::VarChar),
/// [`Numeric`](Self::Numeric) and [`Decimal`](Self::Decimal) carry a length;
/// only the latter two carry a scale. For every other type both values are
/// ignored, both when emitting DDL and when comparing columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum LogicalType {
    TinyInt,
    SmallInt,
    Integer,
    BigInt,
    Real,
    Float,
    Double,
    Numeric,
    Decimal,
    Char,
    VarChar,
    LongVarChar,
    Date,
    Time,
    Timestamp,
    Binary,
    VarBinary,
    LongVarBinary,
    Boolean,
    Clob,
    Blob,
    Object,
}

impl LogicalType {
    pub const ALL: [LogicalType; 22] = [
        LogicalType::TinyInt,
        LogicalType::SmallInt,
        LogicalType::Integer,
        LogicalType::BigInt,
        LogicalType::Real,
        LogicalType::Float,
        LogicalType::Double,
        LogicalType::Numeric,
        LogicalType::Decimal,
        LogicalType::Char,
        LogicalType::VarChar,
        LogicalType::LongVarChar,
        LogicalType::Date,
        LogicalType::Time,
        LogicalType::Timestamp,
        LogicalType::Binary,
        LogicalType::VarBinary,
        LogicalType::LongVarBinary,
        LogicalType::Boolean,
        LogicalType::Clob,
        LogicalType::Blob,
        LogicalType::Object,
    ];

    /// The canonical upper-case name, e.g. `LONGVARCHAR`.
    pub const fn name(self) -> &'static str {
        match self {
            LogicalType::TinyInt => "TINYINT",
            LogicalType::SmallInt => "SMALLINT",
            LogicalType::Integer => "INTEGER",
            LogicalType::BigInt => "BIGINT",
            LogicalType::Real => "REAL",
            LogicalType::Float => "FLOAT",
            LogicalType::Double => "DOUBLE",
            LogicalType::Numeric => "NUMERIC",
            LogicalType::Decimal => "DECIMAL",
            LogicalType::Char => "CHAR",
            LogicalType::VarChar => "VARCHAR",
            LogicalType::LongVarChar => "LONGVARCHAR",
            LogicalType::Date => "DATE",
            LogicalType::Time => "TIME",
            LogicalType::Timestamp => "TIMESTAMP",
            LogicalType::Binary => "BINARY",
            LogicalType::VarBinary => "VARBINARY",
            LogicalType::LongVarBinary => "LONGVARBINARY",
            LogicalType::Boolean => "BOOLEAN",
            LogicalType::Clob => "CLOB",
            LogicalType::Blob => "BLOB",
            LogicalType::Object => "OBJECT",
        }
    }

    /// The JDBC type code.
    pub const fn code(self) -> i32 {
        match self {
            LogicalType::TinyInt => -6,
            LogicalType::SmallInt => 5,
            LogicalType::Integer => 4,
            LogicalType::BigInt => -5,
            LogicalType::Real => 7,
            LogicalType::Float => 6,
            LogicalType::Double => 8,
            LogicalType::Numeric => 2,
            LogicalType::Decimal => 3,
            LogicalType::Char => 1,
            LogicalType::VarChar => 12,
            LogicalType::LongVarChar => -1,
            LogicalType::Date => 91,
            LogicalType::Time => 92,
            LogicalType::Timestamp => 93,
            LogicalType::Binary => -2,
            LogicalType::VarBinary => -3,
            LogicalType::LongVarBinary => -4,
            LogicalType::Boolean => 16,
            LogicalType::Clob => 2005,
            LogicalType::Blob => 2004,
            LogicalType::Object => 2000,
        }
    }

    /// Decodes a catalog type code.
    ///
    /// Besides the codes returned by [`code`](Self::code), a few aliases that
    /// engines report are folded onto the nearest logical type (national
    /// character types onto their plain counterparts, `BIT` onto `BOOLEAN`,
    /// `OTHER` onto `OBJECT`, time zone carrying types onto `TIME` and
    /// `TIMESTAMP`).
    pub fn from_code(code: i32) -> Result<LogicalType> {
        let ty = match code {
            -7 => LogicalType::Boolean,
            -15 => LogicalType::Char,
            -9 => LogicalType::VarChar,
            -16 => LogicalType::LongVarChar,
            2011 => LogicalType::Clob,
            1111 => LogicalType::Object,
            2013 => LogicalType::Time,
            2014 => LogicalType::Timestamp,
            code => match Self::ALL.into_iter().find(|ty| ty.code() == code) {
                Some(ty) => ty,
                None => {
                    return Err(Error::invalid_result(format!(
                        "type code {code} has no logical type"
                    )))
                }
            },
        };

        Ok(ty)
    }

    /// `NUMERIC` and `DECIMAL`: length and scale are both significant.
    pub const fn is_numeric_family(self) -> bool {
        matches!(self, LogicalType::Numeric | LogicalType::Decimal)
    }

    /// `CHAR` and `VARCHAR`: length is significant.
    pub const fn is_char_family(self) -> bool {
        matches!(self, LogicalType::Char | LogicalType::VarChar)
    }

    /// Returns `true` if DDL for this type carries a length.
    pub const fn has_length(self) -> bool {
        self.is_numeric_family() || self.is_char_family()
    }

    /// Returns `true` if DDL for this type carries a scale.
    pub const fn has_scale(self) -> bool {
        self.is_numeric_family()
    }

    pub const fn is_temporal(self) -> bool {
        matches!(
            self,
            LogicalType::Date | LogicalType::Time | LogicalType::Timestamp
        )
    }
}

impl fmt::Display for LogicalType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for LogicalType {
    type Err = Error;

    /// Parses a canonical type name, ignoring ASCII case.
    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|ty| ty.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| Error::invalid_result(format!("unknown logical type `{s}`")))
    }
}
