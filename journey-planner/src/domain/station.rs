//! Station name type.

use std::fmt;

/// Error returned when constructing an invalid station name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid station name: {reason}")]
pub struct InvalidStation {
    reason: &'static str,
}

/// A station name.
///
/// Station names are free text (e.g. "Kings Cross"); the only validation
/// is that they are non-empty after trimming surrounding whitespace.
/// `Station` is `Ord` so that every ordering the planner takes over
/// stations (component discovery, odd-degree selection) is deterministic.
///
/// # Examples
///
/// ```
/// use journey_planner::domain::Station;
///
/// let station = Station::new("Kings Cross").unwrap();
/// assert_eq!(station.as_str(), "Kings Cross");
///
/// // Surrounding whitespace is trimmed
/// assert_eq!(Station::new("  York ").unwrap().as_str(), "York");
///
/// // Empty and whitespace-only names are rejected
/// assert!(Station::new("").is_err());
/// assert!(Station::new("   ").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Station(String);

impl Station {
    /// Create a station name, trimming surrounding whitespace.
    ///
    /// Returns an error if the trimmed name is empty.
    pub fn new(s: &str) -> Result<Self, InvalidStation> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(InvalidStation {
                reason: "station name cannot be empty",
            });
        }
        Ok(Station(trimmed.to_string()))
    }

    /// Returns the station name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the Station and returns the inner String.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Debug for Station {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Station({})", self.0)
    }
}

impl fmt::Display for Station {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_names() {
        assert!(Station::new("York").is_ok());
        assert!(Station::new("Kings Cross").is_ok());
        assert!(Station::new("Stratford-upon-Avon").is_ok());
    }

    #[test]
    fn trims_whitespace() {
        let station = Station::new("  Leeds  ").unwrap();
        assert_eq!(station.as_str(), "Leeds");
    }

    #[test]
    fn reject_empty() {
        assert!(Station::new("").is_err());
        assert!(Station::new(" ").is_err());
        assert!(Station::new("\t\n").is_err());
    }

    #[test]
    fn ordering_is_lexicographic() {
        let a = Station::new("Aberdeen").unwrap();
        let b = Station::new("Brighton").unwrap();
        assert!(a < b);
    }

    #[test]
    fn display_and_debug() {
        let station = Station::new("Hull").unwrap();
        assert_eq!(format!("{}", station), "Hull");
        assert_eq!(format!("{:?}", station), "Station(Hull)");
    }

    #[test]
    fn into_inner() {
        let station = Station::new("Derby").unwrap();
        assert_eq!(station.into_inner(), "Derby".to_string());
    }

    #[test]
    fn hash_consistent_with_eq() {
        use std::collections::HashSet;
        let mut set = HashSet::new();
        set.insert(Station::new("York").unwrap());
        assert!(set.contains(&Station::new("York").unwrap()));
        assert!(!set.contains(&Station::new("Hull").unwrap()));
    }
}
