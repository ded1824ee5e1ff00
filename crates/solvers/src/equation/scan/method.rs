use std::{fmt, str::FromStr};

use rootscan_core::{Function, Observer};
use thiserror::Error;

use crate::equation::{Action, Bracket, Config, Error, Event, Solution, muller, secant};

/// Refinement strategy applied to each bracket of a scan.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Method {
    /// Secant steps kept inside the sign change. Robust, converges linearly.
    Secant,

    /// Muller's quadratic interpolation. Faster, but can meet complex roots.
    #[default]
    Muller,
}

/// Error returned when parsing an unknown method name.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown method {0:?}, expected \"secant\" or \"muller\"")]
pub struct ParseMethodError(String);

impl Method {
    pub(super) fn refine<F, Obs>(
        self,
        f: &F,
        bracket: Bracket,
        config: &Config,
        observer: &mut Obs,
    ) -> Result<Solution, Error>
    where
        F: Function,
        Obs: Observer<Event, Action>,
    {
        match self {
            Method::Secant => secant::refine(f, bracket, config, observer),
            Method::Muller => muller::refine(f, bracket, config, observer),
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Method::Secant => f.write_str("secant"),
            Method::Muller => f.write_str("muller"),
        }
    }
}

impl FromStr for Method {
    type Err = ParseMethodError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "secant" => Ok(Method::Secant),
            "muller" => Ok(Method::Muller),
            _ => Err(ParseMethodError(s.to_owned())),
        }
    }
}
