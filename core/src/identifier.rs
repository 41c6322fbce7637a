use std::fmt;

/// A composite `"<data source>.<service>"` identifier.
///
/// Empty segments are skipped, so `"memory..records"` names the `records`
/// service of `memory`. Segments after the service are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DaoId<'a> {
    pub data_source: &'a str,
    pub service: &'a str,
}

impl<'a> DaoId<'a> {
    pub const SEPARATOR: char = '.';

    pub fn parse(id: &'a str) -> Option<Self> {
        let mut components = id
            .split(Self::SEPARATOR)
            .filter(|component| !component.is_empty());
        let data_source = components.next()?;
        let service = components.next()?;
        Some(Self {
            data_source,
            service,
        })
    }
}

impl fmt::Display for DaoId<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.data_source, Self::SEPARATOR, self.service)
    }
}
