//! Name registry: binds anonymous canonical forms to declared names
//!
//! Combining `Length` with `Time⁻¹` yields an anonymous dimension. If
//! `Speed` was declared for exactly that canonical form, [`NameRegistry::resolve`]
//! hands back the declared value instead. Names are a presentation layer:
//! the resolved value compares, hashes and combines exactly like the
//! anonymous one.

use std::collections::HashMap;
use std::hash::Hash;
use std::sync::Arc;

use tracing::{debug, trace};

use crate::error::{AlgebraError, Result};

/// A canonical value that can carry a declared name
pub trait Downcast: Clone + Eq + Hash {
    /// Name attached to this value, if any
    fn declared_name(&self) -> Option<&str>;

    /// Same canonical value, tagged with `name`
    fn with_name(self, name: Arc<str>) -> Self;
}

/// One-to-one table between canonical forms and declared names
#[derive(Debug, Clone)]
pub struct NameRegistry<T> {
    by_form: HashMap<T, usize>,
    by_name: HashMap<Arc<str>, usize>,
    declared: Vec<T>,
}

impl<T> Default for NameRegistry<T> {
    fn default() -> Self {
        Self {
            by_form: HashMap::new(),
            by_name: HashMap::new(),
            declared: Vec::new(),
        }
    }
}

impl<T: Downcast> NameRegistry<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding a single declaration, which cannot conflict
    pub(crate) fn seeded(name: &str, form: T) -> Self {
        let name: Arc<str> = name.into();
        let named = form.with_name(name.clone());
        Self {
            by_form: HashMap::from([(named.clone(), 0)]),
            by_name: HashMap::from([(name, 0)]),
            declared: vec![named],
        }
    }

    /// Bind `form` to `name` and return the named value.
    ///
    /// Each name and each canonical form may be declared once.
    pub fn declare(&mut self, name: impl Into<Arc<str>>, form: T) -> Result<T> {
        let name: Arc<str> = name.into();
        if self.by_name.contains_key(&name) {
            return Err(AlgebraError::DuplicateName {
                name: name.to_string(),
            });
        }
        if let Some(&idx) = self.by_form.get(&form) {
            let existing = self.declared[idx].declared_name().unwrap_or_default();
            return Err(AlgebraError::DuplicateForm {
                existing: existing.to_string(),
                requested: name.to_string(),
            });
        }

        let named = form.with_name(name.clone());
        let idx = self.declared.len();
        self.by_form.insert(named.clone(), idx);
        self.by_name.insert(name.clone(), idx);
        self.declared.push(named.clone());
        debug!(name = %name, "declared canonical form");
        Ok(named)
    }

    /// The declared value for `form`, or `form` itself when none exists
    pub fn resolve(&self, form: T) -> T {
        match self.by_form.get(&form) {
            Some(&idx) => {
                let declared = &self.declared[idx];
                trace!(name = declared.declared_name(), "resolved to declared name");
                declared.clone()
            }
            None => form,
        }
    }

    /// Look up a declaration by name
    pub fn get(&self, name: &str) -> Option<&T> {
        self.by_name.get(name).map(|&idx| &self.declared[idx])
    }

    pub fn contains(&self, form: &T) -> bool {
        self.by_form.contains_key(form)
    }

    pub fn len(&self) -> usize {
        self.declared.len()
    }

    pub fn is_empty(&self) -> bool {
        self.declared.is_empty()
    }

    /// Declarations in the order they were made
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.declared.iter()
    }
}
