//! Route code type.

use std::fmt;

/// Error returned when parsing an invalid route code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid route code: {reason}")]
pub struct InvalidRouteId {
    reason: &'static str,
}

/// A route code in the network's standard format: `R` followed by exactly
/// three ASCII digits (e.g. `R001`, `R042`).
///
/// This type guarantees that any `RouteId` value is valid by construction.
/// The derived ordering compares the stored bytes, which for this
/// fixed-width format coincides with numeric order; all deterministic
/// tie-breaking in the planner (adjacency ordering, walk edge selection)
/// relies on it.
///
/// # Examples
///
/// ```
/// use journey_planner::domain::RouteId;
///
/// let id = RouteId::parse("R042").unwrap();
/// assert_eq!(id.as_str(), "R042");
///
/// // Wrong prefix is rejected
/// assert!(RouteId::parse("X042").is_err());
///
/// // Wrong length is rejected
/// assert!(RouteId::parse("R42").is_err());
/// assert!(RouteId::parse("R0042").is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RouteId([u8; 4]);

impl RouteId {
    /// Parse a route code from a string.
    ///
    /// The input must be an uppercase `R` followed by exactly three ASCII
    /// digits (0-9).
    pub fn parse(s: &str) -> Result<Self, InvalidRouteId> {
        let bytes = s.as_bytes();

        if bytes.len() != 4 {
            return Err(InvalidRouteId {
                reason: "must be exactly 4 characters",
            });
        }

        if bytes[0] != b'R' {
            return Err(InvalidRouteId {
                reason: "must start with 'R'",
            });
        }

        for &b in &bytes[1..] {
            if !b.is_ascii_digit() {
                return Err(InvalidRouteId {
                    reason: "must end with three digits 0-9",
                });
            }
        }

        Ok(RouteId([bytes[0], bytes[1], bytes[2], bytes[3]]))
    }

    /// Returns the route code as a string slice.
    pub fn as_str(&self) -> &str {
        // SAFETY: We only store 'R' plus ASCII digits
        std::str::from_utf8(&self.0).unwrap()
    }
}

impl fmt::Debug for RouteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RouteId({})", self.as_str())
    }
}

impl fmt::Display for RouteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
