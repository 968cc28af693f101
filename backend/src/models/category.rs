use std::borrow::Borrow;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Interned categorical value taken verbatim from the source file.
///
/// Clones share one allocation per distinct value, so a dataset with
/// hundreds of thousands of rows holds only a handful of strings per column.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Category(Arc<str>);

impl Category {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for Category {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Category {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// The set of values a categorical column takes, discovered at load time.
///
/// Values are kept in order of first appearance.
#[derive(Debug, Clone, Default)]
pub struct CategoryDomain {
    values: Vec<Category>,
    index: HashMap<Arc<str>, usize>,
}

impl CategoryDomain {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the shared [`Category`] for `value`, registering it on first sight.
    pub fn intern(&mut self, value: &str) -> Category {
        if let Some(&idx) = self.index.get(value) {
            return self.values[idx].clone();
        }
        let shared: Arc<str> = Arc::from(value);
        self.index.insert(Arc::clone(&shared), self.values.len());
        let category = Category(shared);
        self.values.push(category.clone());
        category
    }

    pub fn contains(&self, value: &str) -> bool {
        self.index.contains_key(value)
    }

    pub fn values(&self) -> &[Category] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Values as owned strings, in first-seen order.
    pub fn to_strings(&self) -> Vec<String> {
        self.values.iter().map(|c| c.as_str().to_string()).collect()
    }
}
