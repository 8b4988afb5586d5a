//! Collection prefixes.

/// The namespace a collection occupies in the store.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Prefix(Vec<u8>);

impl Prefix {
    pub fn new(bytes: impl AsRef<[u8]>) -> Self {
        Self(bytes.as_ref().to_vec())
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Whether either prefix is a prefix of the other (including equality).
    pub fn overlaps(&self, other: &Prefix) -> bool {
        self.0.starts_with(&other.0) || other.0.starts_with(&self.0)
    }
}

impl From<u8> for Prefix {
    fn from(b: u8) -> Self {
        Self(vec![b])
    }
}

impl From<&str> for Prefix {
    fn from(s: &str) -> Self {
        Self(s.as_bytes().to_vec())
    }
}
