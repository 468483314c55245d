use super::{Ident, ToSql, TypeClause};

use crate::stmt;

/// A column definition without the leading column name, as written after
/// `ALTER COLUMN "name"`.
pub(super) struct Definition<'a>(pub(super) &'a stmt::ColumnDef);

impl ToSql for &stmt::ColumnDef {
    fn to_sql(self, f: &mut super::Formatter<'_>) {
        let name = Ident(&self.name);

        fmt!(f, name " " Definition(self))
    }
}

impl ToSql for Definition<'_> {
    fn to_sql(self, f: &mut super::Formatter<'_>) {
        let column = self.0;
        let ty = TypeClause {
            ty: column.ty,
            length: column.length,
            scale: column.scale,
        };

        fmt!(f, ty);

        if column.auto_increment {
            fmt!(f, " GENERATED BY DEFAULT AS IDENTITY");
        } else if let Some(default) = &column.default {
            fmt!(f, " DEFAULT " default);
        }

        if column.nullable {
            fmt!(f, " NULL");
        } else {
            fmt!(f, " NOT NULL");
        }
    }
}
