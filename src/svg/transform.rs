//! Typed `transform` attribute values
//!
//! Only the two forms the icon sources use are understood. Anything else is
//! carried through verbatim.

use std::fmt;
use std::sync::OnceLock;

use regex_lite::Regex;

use super::document::Element;

fn transform_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| {
        Regex::new(r"^\s*(matrix|translate)\s*\(([^)]*)\)\s*$").expect("Invalid transform regex")
    })
}

/// A parsed `transform` attribute
#[derive(Debug, Clone, PartialEq)]
pub enum Transform {
    /// No-op transform, written as `translate(0,0)`
    Identity,
    /// `matrix(a,b,c,d,e,f)`
    Matrix([f64; 6]),
    /// `translate(x,y)`
    Translate { x: f64, y: f64 },
    /// Anything else, kept as written
    Other(String),
}

impl Transform {
    /// Uniform placement matrix: scale then offset
    pub fn scale_and_offset(x_scale: f64, y_scale: f64, x: f64, y: f64) -> Self {
        Transform::Matrix([x_scale, 0.0, 0.0, y_scale, x, y])
    }

    pub fn parse(value: &str) -> Self {
        let Some(caps) = transform_regex().captures(value) else {
            return Transform::Other(value.to_string());
        };

        let args: Option<Vec<f64>> = caps[2]
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|s| !s.is_empty())
            .map(|s| s.parse::<f64>().ok())
            .collect();
        let Some(args) = args else {
            return Transform::Other(value.to_string());
        };

        match (&caps[1], args.as_slice()) {
            (_, []) => Transform::Identity,
            ("matrix", [a, b, c, d, e, f]) => Transform::Matrix([*a, *b, *c, *d, *e, *f]),
            ("translate", [x]) => Transform::Translate { x: *x, y: 0.0 },
            ("translate", [x, y]) => Transform::Translate { x: *x, y: *y },
            _ => Transform::Other(value.to_string()),
        }
    }

    /// The element's transform, if it has one
    pub fn of(element: &Element) -> Option<Self> {
        element.attr("transform").map(Self::parse)
    }

    /// Write this transform onto an element
    pub fn apply_to(&self, element: &mut Element) {
        element.set_attr("transform", self.to_string());
    }
}

impl fmt::Display for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Transform::Identity => write!(f, "translate(0,0)"),
            Transform::Matrix([a, b, c, d, e, g]) => {
                write!(f, "matrix({},{},{},{},{},{})", a, b, c, d, e, g)
            }
            Transform::Translate { x, y } => write!(f, "translate({},{})", x, y),
            Transform::Other(raw) => write!(f, "{}", raw),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_matrix() {
        assert_eq!(
            Transform::parse("matrix(2,0,0,2,-8.5,12)"),
            Transform::Matrix([2.0, 0.0, 0.0, 2.0, -8.5, 12.0])
        );
        assert_eq!(
            Transform::parse("matrix(1 0 0 1 3 4)"),
            Transform::Matrix([1.0, 0.0, 0.0, 1.0, 3.0, 4.0])
        );
    }

    #[test]
    fn test_parse_translate() {
        assert_eq!(
            Transform::parse("translate(0,-796.36218)"),
            Transform::Translate { x: 0.0, y: -796.36218 }
        );
        assert_eq!(
            Transform::parse("translate(5)"),
            Transform::Translate { x: 5.0, y: 0.0 }
        );
    }

    #[test]
    fn test_parse_empty_is_identity() {
        assert_eq!(Transform::parse("matrix()"), Transform::Identity);
        assert_eq!(Transform::parse("translate()"), Transform::Identity);
    }

    #[test]
    fn test_parse_other() {
        assert_eq!(
            Transform::parse("rotate(45)"),
            Transform::Other("rotate(45)".to_string())
        );
        assert_eq!(
            Transform::parse("matrix(1,0,0,1)"),
            Transform::Other("matrix(1,0,0,1)".to_string())
        );
        assert_eq!(
            Transform::parse("translate(a,b)"),
            Transform::Other("translate(a,b)".to_string())
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(
            Transform::scale_and_offset(0.70, 0.66, 24.0, 16.0).to_string(),
            "matrix(0.7,0,0,0.66,24,16)"
        );
        assert_eq!(Transform::Identity.to_string(), "translate(0,0)");
        assert_eq!(Transform::Translate { x: 8.0, y: 8.0 }.to_string(), "translate(8,8)");
    }

    #[test]
    fn test_apply_to_element() {
        let mut el = Element::new("g");
        assert_eq!(Transform::of(&el), None);
        Transform::Translate { x: 176.0, y: 24.0 }.apply_to(&mut el);
        assert_eq!(el.attr("transform"), Some("translate(176,24)"));
        assert_eq!(
            Transform::of(&el),
            Some(Transform::Translate { x: 176.0, y: 24.0 })
        );
    }
}
