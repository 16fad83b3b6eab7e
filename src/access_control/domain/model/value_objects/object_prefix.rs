/// Key prefix a grant is scoped to. Matching is a plain `starts_with`; the
/// empty prefix covers the whole bucket.
#[derive(Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct ObjectPrefix(String);

pub const PATH_SEPARATOR: char = '/';

impl ObjectPrefix {
    pub fn new(value: String) -> Self {
        Self(value)
    }

    pub fn root() -> Self {
        Self(String::new())
    }

    pub fn value(&self) -> &str {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn covers(&self, object_key: &str) -> bool {
        object_key.starts_with(&self.0)
    }

    /// First path segment (with trailing separator) of `self` below `ancestor`,
    /// when `self` is strictly deeper than `ancestor`.
    pub fn first_segment_below(&self, ancestor: &ObjectPrefix) -> Option<String> {
        let remainder = self.0.strip_prefix(ancestor.value())?;
        let segment = remainder.split(PATH_SEPARATOR).next()?;
        if segment.is_empty() {
            return None;
        }
        Some(format!("{segment}{PATH_SEPARATOR}"))
    }
}
