pub mod api_client;
pub mod requests;
pub mod responses;

pub use api_client::{APIClient, ClientError};

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Origin that post hrefs are relative to.
pub const METACRITIC_ORIGIN: &str = "https://www.metacritic.com";

/// Platform category a post belongs to.
///
/// PC and Switch are both games on the backend, but are tracked separately
/// since the platform is part of the listing.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
#[serde(rename_all = "lowercase")]
pub enum Medium {
    #[display("tv")]
    Tv,
    #[display("pc")]
    Pc,
    #[default]
    #[display("switch")]
    Switch,
    #[display("movie")]
    Movie,
}

impl Medium {
    /// All mediums, in the order they are offered for selection.
    pub const ALL: [Medium; 4] =
        [Medium::Tv, Medium::Pc, Medium::Switch, Medium::Movie];
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown medium: {0}")]
pub struct UnknownMedium(pub String);

impl FromStr for Medium {
    type Err = UnknownMedium;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Medium::ALL
            .into_iter()
            .find(|medium| medium.to_string() == s)
            .ok_or_else(|| UnknownMedium(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn medium_display_matches_wire_value() {
        let shown: Vec<String> =
            Medium::ALL.iter().map(|m| m.to_string()).collect();
        assert_eq!(shown, ["tv", "pc", "switch", "movie"]);
    }

    #[test]
    fn medium_parses_its_own_display() {
        for medium in Medium::ALL {
            assert_eq!(medium.to_string().parse::<Medium>(), Ok(medium));
        }
    }

    #[test]
    fn unknown_medium_is_rejected() {
        assert_eq!(
            "game".parse::<Medium>(),
            Err(UnknownMedium("game".to_string()))
        );
        // wire values are lowercase only
        assert!("Switch".parse::<Medium>().is_err());
    }

    #[test]
    fn default_medium_is_switch() {
        assert_eq!(Medium::default(), Medium::Switch);
    }
}
