use super::LogicalType;
use crate::driver::Capability;

use jiff::civil;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Column {
    /// Name of the table owning the column.
    pub table: String,

    /// The name of the column in the database.
    pub name: String,

    /// Display caption. Catalogs do not report one, so introspected columns
    /// carry an empty caption.
    pub caption: String,

    /// The portable column type.
    pub ty: LogicalType,

    /// Length (or precision) of the column. Only meaningful when
    /// [`LogicalType::has_length`] is true.
    pub length: i64,

    /// Scale of the column. Only meaningful when [`LogicalType::has_scale`]
    /// is true.
    pub scale: i64,

    /// The column default, `None` when the column has no default.
    pub default: Option<DefaultValue>,

    /// Whether or not the column is nullable
    pub nullable: bool,

    /// True if the engine generates values for this column on insert.
    pub auto_increment: bool,
}

/// A column default value.
///
/// The absence of a default is represented by `Option::None` on
/// [`Column::default`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DefaultValue {
    /// A character literal, written single-quoted into DDL.
    Text(String),

    /// A date, time or timestamp; written with the canonical pattern of the
    /// column's logical type.
    DateTime(civil::DateTime),

    /// Any other literal (numbers, keywords such as `CURRENT_TIMESTAMP`),
    /// written verbatim.
    Literal(String),
}

impl Column {
    /// Creates a nullable column with no default, zero length and zero scale.
    pub fn new(table: impl Into<String>, name: impl Into<String>, ty: LogicalType) -> Self {
        Self {
            table: table.into(),
            name: name.into(),
            caption: String::new(),
            ty,
            length: 0,
            scale: 0,
            default: None,
            nullable: true,
            auto_increment: false,
        }
    }

    pub fn length(mut self, length: i64) -> Self {
        self.length = length;
        self
    }

    pub fn scale(mut self, scale: i64) -> Self {
        self.scale = scale;
        self
    }

    pub fn default_value(mut self, default: DefaultValue) -> Self {
        self.default = Some(default);
        self
    }

    pub fn not_null(mut self) -> Self {
        self.nullable = false;
        self
    }

    pub fn auto_increment(mut self) -> Self {
        self.auto_increment = true;
        self
    }

    /// Returns `true` if `self` (the client-side declaration) and `other`
    /// (what the live database reports) have the same type for
    /// schema-synchronization purposes.
    ///
    /// Same-type pairs compare length and scale where the type makes them
    /// significant. Different types are equivalent only through an entry of
    /// the engine's [`Capability::type_equivalences`] table, which is
    /// consulted with either column as the reference side; the relation is
    /// therefore symmetric.
    pub fn equals_type(&self, other: &Column, capability: &Capability) -> bool {
        if self.ty == other.ty {
            return if self.ty.is_numeric_family() {
                self.length == other.length && self.scale == other.scale
            } else if self.ty.is_char_family() {
                self.length == other.length
            } else {
                true
            };
        }

        capability
            .type_equivalences
            .iter()
            .any(|rule| rule.matches(self, other) || rule.matches(other, self))
    }
}

impl From<&str> for DefaultValue {
    fn from(value: &str) -> Self {
        DefaultValue::Text(value.to_string())
    }
}

impl From<String> for DefaultValue {
    fn from(value: String) -> Self {
        DefaultValue::Text(value)
    }
}

impl From<civil::DateTime> for DefaultValue {
    fn from(value: civil::DateTime) -> Self {
        DefaultValue::DateTime(value)
    }
}

impl From<civil::Date> for DefaultValue {
    fn from(value: civil::Date) -> Self {
        DefaultValue::DateTime(value.to_datetime(civil::Time::midnight()))
    }
}

impl From<i64> for DefaultValue {
    fn from(value: i64) -> Self {
        DefaultValue::Literal(value.to_string())
    }
}

impl From<f64> for DefaultValue {
    fn from(value: f64) -> Self {
        DefaultValue::Literal(value.to_string())
    }
}

impl From<bool> for DefaultValue {
    fn from(value: bool) -> Self {
        DefaultValue::Literal(if value { "TRUE" } else { "FALSE" }.to_string())
    }
}
