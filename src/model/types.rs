use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid origin tag: '{0}'")]
pub struct ParseOriginError(String);

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid origin classification: '{0}'")]
pub struct ParseOriginClassError(String);

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unrecognized alkane name: '{0}'")]
pub struct ParseAlkaneError(String);

/// Provenance tag recorded on a compound by the supplier of the sample data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Origin {
    Biotic,
    Abiotic,
    Unknown,
}

impl Origin {
    pub fn as_str(&self) -> &'static str {
        match self {
            Origin::Biotic => "biotic",
            Origin::Abiotic => "abiotic",
            Origin::Unknown => "unknown",
        }
    }
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Origin {
    type Err = ParseOriginError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "biotic" => Ok(Origin::Biotic),
            "abiotic" => Ok(Origin::Abiotic),
            "unknown" => Ok(Origin::Unknown),
            _ => Err(ParseOriginError(s.to_string())),
        }
    }
}

/// Verdict produced by the screening heuristics; `Uncertain` is a result,
/// not missing data, which is why it is a separate type from [`Origin`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OriginClass {
    Biotic,
    Abiotic,
    Uncertain,
}

impl OriginClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            OriginClass::Biotic => "biotic",
            OriginClass::Abiotic => "abiotic",
            OriginClass::Uncertain => "uncertain",
        }
    }
}

impl fmt::Display for OriginClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OriginClass {
    type Err = ParseOriginClassError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "biotic" => Ok(OriginClass::Biotic),
            "abiotic" => Ok(OriginClass::Abiotic),
            "uncertain" => Ok(OriginClass::Uncertain),
            _ => Err(ParseOriginClassError(s.to_string())),
        }
    }
}

/// The n-alkanes the screening and impact heuristics reason about: the
/// light series produced by shock chemistry and the C10–C12 series found
/// in carbonaceous chondrites.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Alkane {
    Methane,
    Ethane,
    Propane,
    Butane,
    Decane,
    Undecane,
    Dodecane,
}

impl Alkane {
    pub fn name(&self) -> &'static str {
        match self {
            Alkane::Methane => "methane",
            Alkane::Ethane => "ethane",
            Alkane::Propane => "propane",
            Alkane::Butane => "butane",
            Alkane::Decane => "decane",
            Alkane::Undecane => "undecane",
            Alkane::Dodecane => "dodecane",
        }
    }

    pub fn formula(&self) -> &'static str {
        match self {
            Alkane::Methane => "CH4",
            Alkane::Ethane => "C2H6",
            Alkane::Propane => "C3H8",
            Alkane::Butane => "C4H10",
            Alkane::Decane => "C10H22",
            Alkane::Undecane => "C11H24",
            Alkane::Dodecane => "C12H26",
        }
    }

    pub fn carbon_count(&self) -> u32 {
        match self {
            Alkane::Methane => 1,
            Alkane::Ethane => 2,
            Alkane::Propane => 3,
            Alkane::Butane => 4,
            Alkane::Decane => 10,
            Alkane::Undecane => 11,
            Alkane::Dodecane => 12,
        }
    }

    pub fn molecular_weight(&self) -> f64 {
        match self {
            Alkane::Methane => 16.04,
            Alkane::Ethane => 30.07,
            Alkane::Propane => 44.10,
            Alkane::Butane => 58.12,
            Alkane::Decane => 142.28,
            Alkane::Undecane => 156.31,
            Alkane::Dodecane => 170.33,
        }
    }
}

impl fmt::Display for Alkane {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Alkane {
    type Err = ParseAlkaneError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "methane" => Ok(Alkane::Methane),
            "ethane" => Ok(Alkane::Ethane),
            "propane" => Ok(Alkane::Propane),
            "butane" => Ok(Alkane::Butane),
            "decane" => Ok(Alkane::Decane),
            "undecane" => Ok(Alkane::Undecane),
            "dodecane" => Ok(Alkane::Dodecane),
            _ => Err(ParseAlkaneError(s.to_string())),
        }
    }
}
