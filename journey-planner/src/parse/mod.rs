//! Route file parsing.
//!
//! Routes arrive as line-oriented text, one route per line:
//!
//! ```text
//! Kings Cross <> York (R001) 110 min, 4 stops
//! Kings Cross <> York (R002) 125 min, 7 stops | stopping service
//! ```
//!
//! Blank lines are skipped. The parser validates shape and numbers only;
//! duplicate route codes are the graph builder's concern.

use crate::domain::{InvalidRouteId, InvalidStation, Route, RouteId, Station};

/// Error returned when a single route line is malformed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("malformed route: {reason}")]
pub struct ParseRouteError {
    reason: &'static str,
}

impl ParseRouteError {
    fn new(reason: &'static str) -> Self {
        Self { reason }
    }
}

impl From<InvalidStation> for ParseRouteError {
    fn from(_: InvalidStation) -> Self {
        Self::new("station name cannot be empty")
    }
}

impl From<InvalidRouteId> for ParseRouteError {
    fn from(_: InvalidRouteId) -> Self {
        Self::new("route code must be 'R' plus three digits")
    }
}

/// Error returned when a route file cannot be parsed, carrying the
/// 1-based line number of the offending line.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("line {line}: {source}")]
pub struct ParseError {
    /// 1-based line number
    pub line: usize,
    source: ParseRouteError,
}

/// Parse one route line.
///
/// Expected shape:
/// `<station> <> <station> (R123) <minutes> min, <stops> stops` with an
/// optional ` | <tag>` suffix.
pub fn parse_route_line(line: &str) -> Result<Route, ParseRouteError> {
    let (endpoint_a, rest) = line
        .split_once(" <> ")
        .ok_or_else(|| ParseRouteError::new("expected ' <> ' between stations"))?;

    let (endpoint_b, rest) = rest
        .split_once(" (")
        .ok_or_else(|| ParseRouteError::new("expected '(R...)' route code"))?;

    let (code, rest) = rest
        .split_once(") ")
        .ok_or_else(|| ParseRouteError::new("expected ')' after route code"))?;

    // Optional tag comes after the stop count
    let (metrics, tag) = match rest.split_once(" | ") {
        Some((metrics, tag)) => (metrics, Some(tag)),
        None => (rest, None),
    };

    let (minutes, stops) = metrics
        .split_once(" min, ")
        .ok_or_else(|| ParseRouteError::new("expected '<minutes> min, <stops> stops'"))?;

    let stops = stops
        .strip_suffix(" stops")
        .ok_or_else(|| ParseRouteError::new("expected '<stops> stops'"))?;

    let minutes: u32 = minutes
        .parse()
        .map_err(|_| ParseRouteError::new("duration must be a non-negative integer"))?;

    let stops: u32 = stops
        .parse()
        .map_err(|_| ParseRouteError::new("stop count must be a non-negative integer"))?;

    let tag = match tag {
        Some(tag) if !tag.trim().is_empty() => Some(tag.trim().to_string()),
        _ => None,
    };

    Ok(Route::new(
        RouteId::parse(code)?,
        Station::new(endpoint_a)?,
        Station::new(endpoint_b)?,
        minutes,
        stops,
        tag,
    ))
}

/// Parse a whole route file. Blank lines are skipped; the first malformed
/// line aborts with its line number.
pub fn parse_routes(input: &str) -> Result<Vec<Route>, ParseError> {
    let mut routes = Vec::new();

    for (index, line) in input.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let route = parse_route_line(line.trim_end()).map_err(|source| ParseError {
            line: index + 1,
            source,
        })?;
        routes.push(route);
    }

    Ok(routes)
}
