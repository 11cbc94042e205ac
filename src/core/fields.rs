//! Per-converter field text

use super::currency::Currency;
use super::rates::RateTable;
use serde::ser::{Serialize, SerializeMap, Serializer};

/// The display text of every field of a form, in rate table order.
///
/// Fields hold strings rather than numbers so the edited field can keep
/// partially typed input such as `"1."` untouched.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FieldState {
    fields: Vec<(Currency, String)>,
}

impl FieldState {
    /// Creates an all-empty state with one field per currency in `rates`.
    pub fn empty(rates: &RateTable) -> Self {
        Self {
            fields: rates.currencies().map(|c| (c, String::new())).collect(),
        }
    }

    pub fn get(&self, currency: Currency) -> Option<&str> {
        self.fields
            .iter()
            .find(|(c, _)| *c == currency)
            .map(|(_, text)| text.as_str())
    }

    /// Replaces the text of `currency`. Returns `false` if the state has no
    /// such field.
    pub fn set(&mut self, currency: Currency, text: impl Into<String>) -> bool {
        match self.fields.iter_mut().find(|(c, _)| *c == currency) {
            Some((_, slot)) => {
                *slot = text.into();
                true
            }
            None => false,
        }
    }

    pub fn clear(&mut self) {
        for (_, text) in &mut self.fields {
            text.clear();
        }
    }

    /// True when every field is empty.
    pub fn is_blank(&self) -> bool {
        self.fields.iter().all(|(_, text)| text.is_empty())
    }

    pub fn iter(&self) -> impl Iterator<Item = (Currency, &str)> + '_ {
        self.fields.iter().map(|(c, text)| (*c, text.as_str()))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

// Serialized as a map so JSON output keeps table order.
impl Serialize for FieldState {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (currency, text) in &self.fields {
            map.serialize_entry(currency.code(), text)?;
        }
        map.end()
    }
}
