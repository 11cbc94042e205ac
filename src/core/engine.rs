//! Keeps a form's fields consistent under single-field edits

use super::currency::Currency;
use super::fields::FieldState;
use super::format::{format_2dp, parse_leading_float};
use super::rates::RateTable;
use anyhow::{Result, bail};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Which converter a form is built as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    /// usd, eur, gbp, aed and irr
    #[default]
    Multi,
    /// usd and irr only
    Pair,
}

impl Variant {
    pub fn rate_table(&self, irr_rate: f64) -> Result<RateTable> {
        match self {
            Variant::Multi => RateTable::multi(irr_rate),
            Variant::Pair => RateTable::pair(irr_rate),
        }
    }
}

/// A single keystroke-level change to one field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldEdit {
    pub key: Currency,
    pub text: String,
}

impl FieldEdit {
    pub fn new(key: Currency, text: impl Into<String>) -> Self {
        Self {
            key,
            text: text.into(),
        }
    }
}

/// Applies `edit` to `state` and returns the resulting state.
///
/// The edited field always takes the raw text. Empty text clears every
/// field. Text with a numeric prefix recomputes every other field from the
/// rate ratio. Anything else leaves the other fields as they were. Edits to
/// a currency outside `rates` are ignored.
pub fn reduce(rates: &RateTable, state: &FieldState, edit: &FieldEdit) -> FieldState {
    let mut next = state.clone();

    let Some(pivot_rate) = rates.rate(edit.key) else {
        warn!(currency = %edit.key, "Ignoring edit for currency outside the rate table");
        return next;
    };

    next.set(edit.key, edit.text.as_str());

    if edit.text.is_empty() {
        debug!(pivot = %edit.key, "Empty input, clearing all fields");
        next.clear();
        return next;
    }

    let Some(value) = parse_leading_float(&edit.text) else {
        debug!(pivot = %edit.key, text = %edit.text, "Input is not a number, other fields left as is");
        return next;
    };

    for (currency, rate) in rates.iter() {
        if currency == edit.key {
            continue;
        }
        let converted = value * (rate / pivot_rate);
        next.set(currency, format_2dp(converted));
    }
    debug!(pivot = %edit.key, value, "Recomputed fields");

    next
}

/// A form instance: an immutable rate table plus the fields it owns.
#[derive(Debug, Clone)]
pub struct Converter {
    rates: RateTable,
    state: FieldState,
}

impl Converter {
    pub fn new(rates: RateTable) -> Self {
        let state = FieldState::empty(&rates);
        Self { rates, state }
    }

    pub fn multi(irr_rate: f64) -> Result<Self> {
        Ok(Self::new(RateTable::multi(irr_rate)?))
    }

    pub fn pair(irr_rate: f64) -> Result<Self> {
        Ok(Self::new(RateTable::pair(irr_rate)?))
    }

    pub fn with_variant(variant: Variant, irr_rate: f64) -> Result<Self> {
        Ok(Self::new(variant.rate_table(irr_rate)?))
    }

    /// Handles a change of `key`'s field to `text`.
    pub fn on_field_edit(&mut self, key: Currency, text: &str) -> Result<()> {
        if !self.rates.contains(key) {
            bail!("Currency {key} is not part of this converter");
        }
        self.state = reduce(&self.rates, &self.state, &FieldEdit::new(key, text));
        Ok(())
    }

    pub fn clear(&mut self) {
        self.state.clear();
    }

    pub fn field(&self, key: Currency) -> Option<&str> {
        self.state.get(key)
    }

    pub fn fields(&self) -> &FieldState {
        &self.state
    }

    pub fn rates(&self) -> &RateTable {
        &self.rates
    }
}
