//! Currency codes and their form input metadata

use std::fmt::Display;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd)]
pub enum Currency {
    Usd,
    Eur,
    Gbp,
    Aed,
    Irr,
}

impl Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for Currency {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "usd" => Ok(Currency::Usd),
            "eur" => Ok(Currency::Eur),
            "gbp" => Ok(Currency::Gbp),
            "aed" => Ok(Currency::Aed),
            "irr" => Ok(Currency::Irr),
            _ => Err(anyhow::anyhow!("Unknown currency code: {}", s)),
        }
    }
}

/// Describes how a currency field is presented in the form.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InputSpec {
    pub label: &'static str,
    pub placeholder: &'static str,
    pub min: f64,
    pub step: f64,
}

impl Currency {
    pub const ALL: [Currency; 5] = [
        Currency::Usd,
        Currency::Eur,
        Currency::Gbp,
        Currency::Aed,
        Currency::Irr,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            Currency::Usd => "usd",
            Currency::Eur => "eur",
            Currency::Gbp => "gbp",
            Currency::Aed => "aed",
            Currency::Irr => "irr",
        }
    }

    pub fn input_spec(&self) -> InputSpec {
        let (label, placeholder, step) = match self {
            Currency::Usd => ("US Dollar (USD)", "Enter amount in dollars", 0.01),
            Currency::Eur => ("Euro (EUR)", "Enter amount in euros", 0.01),
            Currency::Gbp => ("British Pound (GBP)", "Enter amount in pounds", 0.01),
            Currency::Aed => ("UAE Dirham (AED)", "Enter amount in dirhams", 0.01),
            Currency::Irr => ("Iranian Rial (IRR)", "Enter amount in rials", 1000.0),
        };
        InputSpec {
            label,
            placeholder,
            min: 0.0,
            step,
        }
    }
}
