use super::{column_def::Definition, Comma, Ident, ToSql};

use crate::stmt::{self, ConstraintKind};

impl ToSql for &stmt::Statement {
    fn to_sql(self, f: &mut super::Formatter<'_>) {
        match self {
            stmt::Statement::AddColumn(stmt) => stmt.to_sql(f),
            stmt::Statement::AddConstraint(stmt) => stmt.to_sql(f),
            stmt::Statement::AlterColumn(stmt) => stmt.to_sql(f),
            stmt::Statement::CreateTable(stmt) => stmt.to_sql(f),
            stmt::Statement::DropColumn(stmt) => stmt.to_sql(f),
            stmt::Statement::DropConstraint(stmt) => stmt.to_sql(f),
            stmt::Statement::DropTable(stmt) => stmt.to_sql(f),
        }
    }
}

struct ColumnsWithConstraints<'a>(&'a stmt::CreateTable);

impl ToSql for ColumnsWithConstraints<'_> {
    fn to_sql(self, f: &mut super::Formatter<'_>) {
        let columns = Comma(&self.0.columns);
        fmt!(f, columns);

        for constraint in &self.0.constraints {
            fmt!(f, ", " constraint);
        }
    }
}

impl ToSql for &stmt::CreateTable {
    fn to_sql(self, f: &mut super::Formatter<'_>) {
        let kind = f.serializer.table_kind();
        let columns = ColumnsWithConstraints(self);

        fmt!(f, "CREATE " kind "TABLE " self.name " (" columns ")");
    }
}

impl ToSql for &stmt::IndexDef {
    fn to_sql(self, f: &mut super::Formatter<'_>) {
        let kind = match self.kind {
            ConstraintKind::PrimaryKey => "PRIMARY KEY",
            ConstraintKind::Unique => "UNIQUE",
        };
        let columns = Comma(self.columns.iter().map(Ident));

        fmt!(f, kind " (" columns ")");
    }
}

impl ToSql for &stmt::AddColumn {
    fn to_sql(self, f: &mut super::Formatter<'_>) {
        fmt!(f, "ALTER TABLE " self.table " ADD COLUMN " self.column);

        if let Some(before) = &self.before {
            fmt!(f, " BEFORE " Ident(before));
        }
    }
}

impl ToSql for &stmt::AlterColumn {
    fn to_sql(self, f: &mut super::Formatter<'_>) {
        let existing = Ident(&self.existing);

        fmt!(
            f, "ALTER TABLE " self.table " ALTER COLUMN " existing " " Definition(&self.column)
        );
    }
}

impl ToSql for &stmt::DropColumn {
    fn to_sql(self, f: &mut super::Formatter<'_>) {
        fmt!(f, "ALTER TABLE " self.table " DROP COLUMN " Ident(&self.column));
    }
}

impl ToSql for &stmt::AddConstraint {
    fn to_sql(self, f: &mut super::Formatter<'_>) {
        fmt!(f, "ALTER TABLE " self.table " ADD " self.constraint);
    }
}

impl ToSql for &stmt::DropConstraint {
    fn to_sql(self, f: &mut super::Formatter<'_>) {
        fmt!(f, "ALTER TABLE " self.table " DROP CONSTRAINT " Ident(&self.name));
    }
}

impl ToSql for &stmt::DropTable {
    fn to_sql(self, f: &mut super::Formatter<'_>) {
        fmt!(f, "DROP TABLE ");

        if self.if_exists {
            fmt!(f, "IF EXISTS ");
        }

        fmt!(f, &self.name);
    }
}
