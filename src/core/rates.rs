//! Fixed exchange rate tables

use super::currency::Currency;
use anyhow::{Result, bail};

pub const DEFAULT_IRR_RATE: f64 = 500_000.0;

// Units of each currency per 1 USD.
const EUR_RATE: f64 = 0.92;
const GBP_RATE: f64 = 0.79;
const AED_RATE: f64 = 3.67;

/// An ordered, immutable mapping of currency to its value relative to USD.
#[derive(Debug, Clone, PartialEq)]
pub struct RateTable {
    entries: Vec<(Currency, f64)>,
}

impl RateTable {
    /// Builds a table, rejecting non-positive or non-finite rates and
    /// duplicate currencies.
    pub fn new(entries: Vec<(Currency, f64)>) -> Result<Self> {
        if entries.is_empty() {
            bail!("Rate table must contain at least one currency");
        }
        for (i, (currency, rate)) in entries.iter().enumerate() {
            if !rate.is_finite() || *rate <= 0.0 {
                bail!("Rate for {currency} must be a positive number, got {rate}");
            }
            if entries[..i].iter().any(|(c, _)| c == currency) {
                bail!("Currency {currency} appears more than once in the rate table");
            }
        }
        Ok(Self { entries })
    }

    /// The five currency table: usd, eur, gbp, aed, irr.
    pub fn multi(irr_rate: f64) -> Result<Self> {
        Self::new(vec![
            (Currency::Usd, 1.0),
            (Currency::Eur, EUR_RATE),
            (Currency::Gbp, GBP_RATE),
            (Currency::Aed, AED_RATE),
            (Currency::Irr, irr_rate),
        ])
    }

    /// The two currency table: usd and irr.
    pub fn pair(irr_rate: f64) -> Result<Self> {
        Self::new(vec![(Currency::Usd, 1.0), (Currency::Irr, irr_rate)])
    }

    pub fn rate(&self, currency: Currency) -> Option<f64> {
        self.entries
            .iter()
            .find(|(c, _)| *c == currency)
            .map(|(_, rate)| *rate)
    }

    pub fn contains(&self, currency: Currency) -> bool {
        self.rate(currency).is_some()
    }

    pub fn currencies(&self) -> impl Iterator<Item = Currency> + '_ {
        self.entries.iter().map(|(c, _)| *c)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Currency, f64)> + '_ {
        self.entries.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_multi_table_order_and_rates() {
        let table = RateTable::multi(DEFAULT_IRR_RATE).unwrap();
        let currencies: Vec<Currency> = table.currencies().collect();
        assert_eq!(
            currencies,
            vec![
                Currency::Usd,
                Currency::Eur,
                Currency::Gbp,
                Currency::Aed,
                Currency::Irr
            ]
        );
        assert_eq!(table.rate(Currency::Usd), Some(1.0));
        assert_eq!(table.rate(Currency::Irr), Some(500_000.0));
        assert_eq!(table.rate(Currency::Aed), Some(3.67));
    }

    #[test]
    fn test_pair_table_has_two_entries() {
        let table = RateTable::pair(42_000.0).unwrap();
        assert_eq!(table.len(), 2);
        assert!(table.contains(Currency::Irr));
        assert!(!table.contains(Currency::Eur));
    }

    #[test]
    fn test_rejects_invalid_rates() {
        assert!(RateTable::multi(0.0).is_err());
        assert!(RateTable::multi(-5.0).is_err());
        assert!(RateTable::pair(f64::NAN).is_err());
        assert!(RateTable::pair(f64::INFINITY).is_err());

        let err = RateTable::pair(0.0).unwrap_err();
        assert!(err.to_string().contains("positive"));
    }

    #[test]
    fn test_rejects_duplicates_and_empty() {
        let result = RateTable::new(vec![(Currency::Usd, 1.0), (Currency::Usd, 2.0)]);
        assert!(result.unwrap_err().to_string().contains("more than once"));
        assert!(RateTable::new(vec![]).is_err());
    }
}
