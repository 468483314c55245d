use super::{Flavor, Formatter, ToSql};

use schemasync_core::schema::LogicalType;

pub(super) struct TypeClause {
    pub(super) ty: LogicalType,
    pub(super) length: i64,
    pub(super) scale: i64,
}

impl ToSql for TypeClause {
    fn to_sql(self, f: &mut Formatter<'_>) {
        let ty = f.serializer.capability.storage_type(self.ty);

        match ty {
            ty if ty.has_scale() => fmt!(f, ty.name() "(" self.length "," self.scale ")"),
            ty if ty.has_length() => fmt!(f, ty.name() "(" self.length ")"),
            LogicalType::Object => match f.serializer.flavor {
                Flavor::Hsqldb => fmt!(f, "OTHER"),
            },
            ty => fmt!(f, ty.name()),
        }
    }
}
