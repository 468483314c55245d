#[macro_use]
mod fmt;
use fmt::ToSql;

mod delim;
use delim::{Comma, Period};

mod flavor;
use flavor::Flavor;

mod ident;
use ident::Ident;

// Fragment serializers
mod column_def;
mod literal;
mod name;
mod statement;
mod ty;
use ty::TypeClause;

use crate::stmt::{Name, Statement};

use schemasync_core::{driver::Capability, schema::LogicalType};

/// Serialize a statement to a SQL string
#[derive(Debug)]
pub struct Serializer<'a> {
    /// Capability of the target engine: identifier quoting and type aliasing.
    capability: &'a Capability,

    /// The database flavor handles the differences between SQL dialects and
    /// supported features.
    flavor: Flavor,
}

struct Formatter<'a> {
    /// Handle to the serializer
    serializer: &'a Serializer<'a>,

    /// Where to write the serialized SQL
    dst: &'a mut String,
}

impl<'a> Serializer<'a> {
    /// Serializes `stmt`. Statements are executed one at a time, so no
    /// terminating semicolon is written.
    pub fn serialize(&self, stmt: &Statement) -> String {
        let mut ret = String::new();

        let mut fmt = Formatter {
            serializer: self,
            dst: &mut ret,
        };

        stmt.to_sql(&mut fmt);

        ret
    }

    /// The type clause for a column of type `ty`, e.g. `DECIMAL(10,2)`.
    ///
    /// `length` is only written for character and numeric types and `scale`
    /// only for numeric types; other types ignore both.
    pub fn type_clause(&self, ty: LogicalType, length: i64, scale: i64) -> String {
        let mut ret = String::new();

        let mut fmt = Formatter {
            serializer: self,
            dst: &mut ret,
        };

        TypeClause { ty, length, scale }.to_sql(&mut fmt);

        ret
    }

    /// Quotes `name` as an identifier.
    pub fn ident(&self, name: &str) -> String {
        let mut ret = String::new();

        let mut fmt = Formatter {
            serializer: self,
            dst: &mut ret,
        };

        Ident(name).to_sql(&mut fmt);

        ret
    }

    /// Quotes each part of `name`, joined by periods.
    pub fn name(&self, name: &Name) -> String {
        let mut ret = String::new();

        let mut fmt = Formatter {
            serializer: self,
            dst: &mut ret,
        };

        name.to_sql(&mut fmt);

        ret
    }
}
