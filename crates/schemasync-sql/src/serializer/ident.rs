use super::{Formatter, ToSql};

/// A quoted identifier. Embedded delimiters are doubled.
pub(super) struct Ident<S>(pub(super) S);

impl<S: AsRef<str>> ToSql for Ident<S> {
    fn to_sql(self, f: &mut Formatter<'_>) {
        let delimiter = f.serializer.capability.identifier_delimiter;

        f.dst.push(delimiter);
        for ch in self.0.as_ref().chars() {
            if ch == delimiter {
                f.dst.push(delimiter);
            }
            f.dst.push(ch);
        }
        f.dst.push(delimiter);
    }
}
