use super::Serializer;

use schemasync_core::driver::Capability;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Flavor {
    Hsqldb,
}

impl Serializer<'static> {
    pub fn hsqldb() -> Serializer<'static> {
        Serializer {
            capability: &Capability::HSQLDB,
            flavor: Flavor::Hsqldb,
        }
    }
}

impl Serializer<'_> {
    /// Table type keyword written after `CREATE`, if any.
    pub(super) fn table_kind(&self) -> Option<&'static str> {
        match self.flavor {
            // Cached tables keep their rows on disk rather than in memory.
            Flavor::Hsqldb => Some("CACHED "),
        }
    }
}
