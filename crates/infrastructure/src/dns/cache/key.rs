use compact_str::CompactString;
use ferrous_root_domain::RecordType;
use std::hash::{Hash, Hasher};

#[derive(Clone, Debug, Eq)]
pub struct CacheKey {
    pub name: CompactString,
    pub record_type: RecordType,
}

impl CacheKey {
    #[inline]
    pub fn new(name: &str, record_type: RecordType) -> Self {
        Self {
            name: CompactString::from(name),
            record_type,
        }
    }
}

impl Hash for CacheKey {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.as_str().hash(state);
        self.record_type.hash(state);
    }
}

impl PartialEq for CacheKey {
    #[inline]
    fn eq(&self, other: &CacheKey) -> bool {
        self.record_type == other.record_type && self.name == other.name
    }
}
