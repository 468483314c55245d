use schemasync_core::{
    driver::Capability,
    schema::{Column, DefaultValue, LogicalType},
    Error, Result,
};

use jiff::civil;

/// A column definition as it appears in `CREATE TABLE` and `ALTER TABLE`.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnDef {
    pub name: String,

    /// Storage type, after large-object aliasing.
    pub ty: LogicalType,

    pub length: i64,

    pub scale: i64,

    /// Whether the column is an identity column.
    pub auto_increment: bool,

    /// The `DEFAULT` clause. `None` omits the clause.
    pub default: Option<Literal>,

    pub nullable: bool,
}

/// A default-value literal.
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    Null,
    String(String),
    Date(civil::Date),
    Time(civil::Time),
    Timestamp(civil::DateTime),

    /// Written as is.
    Raw(String),
}

impl ColumnDef {
    pub(crate) fn from_schema(column: &Column, capability: &Capability) -> Result<ColumnDef> {
        if column.ty.is_char_family()
            && u64::try_from(column.length).map_or(true, |len| len > capability.max_varchar_length)
        {
            return Err(Error::invalid_schema(format!(
                "column `{}` of table `{}` has length {}; {} allows 0 to {}",
                column.name,
                column.table,
                column.length,
                capability.name,
                capability.max_varchar_length
            )));
        }

        // Identity columns never carry a default.
        let default = if column.auto_increment {
            None
        } else {
            match &column.default {
                None if column.nullable => Some(Literal::Null),
                None => None,
                Some(value) => Some(Literal::from_default(column, value)?),
            }
        };

        Ok(ColumnDef {
            name: column.name.clone(),
            ty: capability.storage_type(column.ty),
            length: column.length,
            scale: column.scale,
            auto_increment: column.auto_increment,
            default,
            nullable: column.nullable,
        })
    }
}

impl Literal {
    fn from_default(column: &Column, value: &DefaultValue) -> Result<Literal> {
        Ok(match value {
            DefaultValue::Text(value) => Literal::String(value.clone()),
            DefaultValue::Literal(value) => Literal::Raw(value.clone()),
            DefaultValue::DateTime(value) => match column.ty {
                LogicalType::Date => Literal::Date(value.date()),
                LogicalType::Time => Literal::Time(value.time()),
                LogicalType::Timestamp => Literal::Timestamp(*value),
                ty => {
                    return Err(Error::invalid_schema(format!(
                        "column `{}` of table `{}` has a date-time default but type {ty}",
                        column.name, column.table
                    )))
                }
            },
        })
    }
}
