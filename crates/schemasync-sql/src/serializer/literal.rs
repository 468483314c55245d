use super::{Formatter, ToSql};

use crate::stmt::Literal;

impl ToSql for &Literal {
    fn to_sql(self, f: &mut Formatter<'_>) {
        match self {
            Literal::Null => fmt!(f, "NULL"),
            Literal::String(value) => quoted(value, f),
            Literal::Date(value) => quoted(&value.strftime("%Y-%m-%d").to_string(), f),
            Literal::Time(value) => quoted(&value.strftime("%H:%M:%S").to_string(), f),
            Literal::Timestamp(value) => {
                quoted(&value.strftime("%Y-%m-%d %H:%M:%S").to_string(), f)
            }
            Literal::Raw(value) => fmt!(f, value.as_str()),
        }
    }
}

/// Writes a single-quoted string literal, doubling embedded quotes.
fn quoted(value: &str, f: &mut Formatter<'_>) {
    f.dst.push('\'');
    for ch in value.chars() {
        if ch == '\'' {
            f.dst.push('\'');
        }
        f.dst.push(ch);
    }
    f.dst.push('\'');
}
