use serde::{Deserialize, Deserializer, Serialize};

/// A single 2D coordinate of a blueprint outline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// A named, authored, ordered sequence of points.
///
/// `(author, name)` is the identity key inside a store. The point sequence
/// preserves insertion order and may be empty; a missing or null sequence in
/// serialized input is normalized to empty at construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Blueprint {
    pub author: String,
    pub name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub points: Vec<Point>,
}

impl Blueprint {
    pub fn new(author: impl Into<String>, name: impl Into<String>, points: Vec<Point>) -> Self {
        Self {
            author: author.into(),
            name: name.into(),
            points,
        }
    }

    /// Owned `(author, name)` pair, the key used by every store backend.
    pub fn key(&self) -> (String, String) {
        (self.author.clone(), self.name.clone())
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<Point>, D::Error>
where
    D: Deserializer<'de>,
{
    let points = Option::<Vec<Point>>::deserialize(deserializer)?;
    Ok(points.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blueprint_construction_preserves_point_order() {
        let bp = Blueprint::new(
            "john",
            "house",
            vec![Point::new(0, 0), Point::new(10, 0), Point::new(10, 10)],
        );

        assert_eq!(bp.author, "john");
        assert_eq!(bp.name, "house");
        assert_eq!(bp.points.len(), 3);
        assert_eq!(bp.points[1], Point::new(10, 0));
    }

    #[test]
    fn test_missing_points_deserialize_as_empty() {
        let bp: Blueprint = serde_json::from_str(r#"{"author": "a", "name": "b"}"#).unwrap();
        assert!(bp.points.is_empty());
    }

    #[test]
    fn test_null_points_deserialize_as_empty() {
        let bp: Blueprint =
            serde_json::from_str(r#"{"author": "a", "name": "b", "points": null}"#).unwrap();
        assert!(bp.points.is_empty());
    }

    #[test]
    fn test_json_round_trip() {
        let bp = Blueprint::new("jane", "garden", vec![Point::new(2, 2), Point::new(3, 4)]);
        let json = serde_json::to_string(&bp).unwrap();
        let back: Blueprint = serde_json::from_str(&json).unwrap();
        assert_eq!(bp, back);
    }
}
