//! Ordered composition of [`Transform`]s.
use super::Entry;
use super::name::is_usable;
use super::transform::{
    Collapse, Downcase, ExtensionPointGuard, Omit, Prepend, PrependDate, SpecialCharFold,
    Substitute, Transform, Transliterate, Truncate,
};
use crate::config::{Config, Mode};

/// A fixed, ordered list of transforms built once per run.
#[derive(Debug, Default)]
pub struct Pipeline {
    transforms: Vec<Box<dyn Transform>>,
}

impl Pipeline {
    /// Build a pipeline from an explicit rule list.
    #[must_use]
    pub fn new(transforms: Vec<Box<dyn Transform>>) -> Self {
        Self { transforms }
    }

    /// Compose the rules selected by `config`.
    ///
    /// In [`Mode::Rename`] the point guard always runs first and truncation
    /// last, with collapse in between everything that can introduce
    /// separators and the truncation that relies on their absence. In
    /// [`Mode::LengthAudit`] only names at the limit or longer are kept, and
    /// those are truncated.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        let limit = config.policy.name_limit;
        let mut transforms: Vec<Box<dyn Transform>> = Vec::new();
        match config.mode {
            Mode::LengthAudit => {
                transforms.push(Box::new(Omit::new(limit)));
                transforms.push(Box::new(Truncate::new(limit)));
            }
            Mode::Rename => {
                transforms.push(Box::new(ExtensionPointGuard));
                if let Some(sub) = &config.substitution {
                    transforms.push(Box::new(Substitute::new(&sub.find, sub.replace.as_deref())));
                }
                transforms.push(Box::new(Downcase));
                transforms.push(Box::new(SpecialCharFold));
                transforms.push(Box::new(Transliterate));
                if config.date_prefix {
                    transforms.push(Box::new(PrependDate));
                }
                if let Some(prefix) = &config.prefix {
                    transforms.push(Box::new(Prepend::new(prefix)));
                }
                transforms.push(Box::new(Collapse));
                transforms.push(Box::new(Truncate::new(limit)));
            }
        }
        Self::new(transforms)
    }

    /// Run every rule over the entry's original name.
    ///
    /// Returns `None` as soon as a rule omits the entry. A result that is not
    /// a usable directory entry name (empty, `.` or `..`) falls back to the
    /// original name.
    #[must_use]
    pub fn run(&self, entry: &Entry) -> Option<String> {
        let mut name = entry.original_name.clone();
        for transform in &self.transforms {
            name = transform.apply(&name, entry)?;
        }
        if is_usable(&name) {
            Some(name)
        } else {
            Some(entry.original_name.clone())
        }
    }

    /// Rule names in execution order.
    #[must_use]
    pub fn names(&self) -> Vec<&'static str> {
        self.transforms.iter().map(|t| t.name()).collect()
    }
}
