use std::fmt;

use schemasync_core::schema::TableInfo;

/// A possibly qualified object name; each part is quoted on its own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Name(pub Vec<String>);

impl From<&str> for Name {
    fn from(value: &str) -> Self {
        Self(vec![value.into()])
    }
}

impl From<&String> for Name {
    fn from(value: &String) -> Self {
        Self::from(&value[..])
    }
}

/// Tables are addressed by their bare name, relative to the session's
/// current schema.
impl Name {
    /// The table's name, prefixed by its schema when it has one.
    pub fn qualified(info: &TableInfo) -> Self {
        Self(info.schema.iter().chain([&info.name]).cloned().collect())
    }
}

impl From<&TableInfo> for Name {
    fn from(value: &TableInfo) -> Self {
        Self::from(&value.name)
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = "";
        for ident in &self.0 {
            write!(f, "{s}{ident}")?;
            s = ".";
        }

        Ok(())
    }
}
