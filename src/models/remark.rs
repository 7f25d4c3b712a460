use std::fmt;

/// Free-text note on a person. The empty string means "no remark".
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Remark(String);

impl Remark {
    pub fn new(remark: impl Into<String>) -> Self {
        Self(remark.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Remark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
