//! Whitespace-separated point lists.
//!
//! The counted form is `"N x0 y0 x1 y1 ... x(N-1) y(N-1)"`; the fixed form
//! drops the leading `N` when the caller already knows how many points to
//! expect. Points are displayed as `[(x0,y0), (x1,y1), ...]`.

use crate::error::ParseError;
use crate::primitives::VirtualPoint;
use std::fmt;

/// Parses the counted form into its points.
///
/// # Example
///
/// ```
/// use planum::io::parse_points;
/// use planum::VirtualPoint;
///
/// let points = parse_points("2 0 1.5 3 4").unwrap();
/// assert_eq!(points, vec![VirtualPoint::new(0.0, 1.5), VirtualPoint::new(3.0, 4.0)]);
///
/// assert!(parse_points("2 0 1.5 3").is_err());
/// ```
pub fn parse_points(s: &str) -> Result<Vec<VirtualPoint>, ParseError> {
    let tokens: Vec<&str> = s.split_ascii_whitespace().collect();
    if tokens.len() < 3 {
        return Err(ParseError::TooShort {
            tokens: tokens.len(),
        });
    }

    let count = tokens[0]
        .parse::<usize>()
        .map_err(|_| ParseError::InvalidCount {
            token: tokens[0].to_string(),
        })?;
    parse_coordinates(&tokens[1..], 1, count)
}

/// Parses the fixed form, expecting exactly `count` points.
pub fn parse_points_exact(s: &str, count: usize) -> Result<Vec<VirtualPoint>, ParseError> {
    let tokens: Vec<&str> = s.split_ascii_whitespace().collect();
    parse_coordinates(&tokens, 0, count)
}

/// Pairs up `count` points from coordinate tokens starting at token `offset`
/// of the original input.
fn parse_coordinates(
    tokens: &[&str],
    offset: usize,
    count: usize,
) -> Result<Vec<VirtualPoint>, ParseError> {
    let expected = 2 * count;
    if tokens.len() != expected {
        return Err(ParseError::CoordinateCount {
            expected,
            found: tokens.len(),
        });
    }

    let coordinates = tokens
        .iter()
        .enumerate()
        .map(|(i, token)| {
            token.parse::<f64>().map_err(|_| ParseError::InvalidCoordinate {
                position: offset + i,
                token: token.to_string(),
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(coordinates
        .chunks_exact(2)
        .map(|pair| VirtualPoint::new(pair[0], pair[1]))
        .collect())
}

/// Formats points as `[(x0,y0), (x1,y1), ...]`.
pub fn format_points<P: fmt::Display>(points: &[P]) -> String {
    let items: Vec<String> = points.iter().map(ToString::to_string).collect();
    format!("[{}]", items.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitives::{NaturalPoint, Point};

    #[test]
    fn test_parse_counted() {
        let points = parse_points("3 0 0  1 2\n\t4.5 6").unwrap();
        assert_eq!(
            points,
            vec![
                VirtualPoint::new(0.0, 0.0),
                VirtualPoint::new(1.0, 2.0),
                VirtualPoint::new(4.5, 6.0),
            ]
        );
    }

    #[test]
    fn test_parse_negative_coordinates() {
        let points = parse_points("1 -2 3").unwrap();
        assert_eq!(points, vec![VirtualPoint::new(-2.0, 3.0)]);
    }

    #[test]
    fn test_parse_too_short() {
        assert_eq!(parse_points("1 2"), Err(ParseError::TooShort { tokens: 2 }));
        assert_eq!(parse_points("   "), Err(ParseError::TooShort { tokens: 0 }));
    }

    #[test]
    fn test_parse_invalid_count() {
        assert!(matches!(
            parse_points("two 0 0 1 1"),
            Err(ParseError::InvalidCount { .. })
        ));
        assert!(matches!(
            parse_points("-1 0 0"),
            Err(ParseError::InvalidCount { .. })
        ));
        assert!(matches!(
            parse_points("1.5 0 0"),
            Err(ParseError::InvalidCount { .. })
        ));
    }

    #[test]
    fn test_parse_invalid_coordinate() {
        assert_eq!(
            parse_points("2 0 0 x 1"),
            Err(ParseError::InvalidCoordinate {
                position: 3,
                token: "x".to_string()
            })
        );
        assert_eq!(
            parse_points_exact("0 y", 1),
            Err(ParseError::InvalidCoordinate {
                position: 1,
                token: "y".to_string()
            })
        );
    }

    #[test]
    fn test_parse_count_mismatch() {
        assert_eq!(
            parse_points("3 0 0 1 1"),
            Err(ParseError::CoordinateCount {
                expected: 6,
                found: 4
            })
        );
        assert_eq!(
            parse_points("1 0 0 1 1"),
            Err(ParseError::CoordinateCount {
                expected: 2,
                found: 4
            })
        );
    }

    #[test]
    fn test_parse_exact() {
        let points = parse_points_exact("1 1 3 1 3 5 1 5", 4).unwrap();
        assert_eq!(points.len(), 4);
        assert_eq!(points[2], VirtualPoint::new(3.0, 5.0));
        assert!(parse_points_exact("1 1 3 1", 4).is_err());
    }

    #[test]
    fn test_format() {
        let points = [Point::new(1.0, 2.0).unwrap(), Point::new(3.7, 4.0).unwrap()];
        assert_eq!(format_points(&points), "[(1,2), (3,4)]");
        assert_eq!(format_points::<Point>(&[]), "[]");
        assert_eq!(format_points(&[NaturalPoint::new(5, 6)]), "[(5,6)]");
    }

    #[test]
    fn test_display_then_parse() {
        let points = vec![
            VirtualPoint::new(0.0, 3.0),
            VirtualPoint::new(12.0, 7.0),
            VirtualPoint::new(5.0, 5.0),
        ];
        let shown = format_points(&points);
        let stripped: String = shown
            .chars()
            .map(|c| if c.is_ascii_digit() { c } else { ' ' })
            .collect();
        let reparsed = parse_points(&format!("{} {}", points.len(), stripped)).unwrap();
        assert_eq!(reparsed, points);
    }
}
