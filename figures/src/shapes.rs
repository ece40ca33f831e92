use std::fmt;

use glam::DVec2;

use crate::date::{Date, Predicate};

/// Geometry for each of the supported figure kinds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Geometry {
    Circle { center: DVec2, radius: f64 },
    Rectangle { corner1: DVec2, corner2: DVec2 },
    Triangle { vertices: [DVec2; 3] },
}

/// A catalogued figure: color and creation date shared by every kind, plus
/// the kind-specific geometry. Immutable once constructed.
#[derive(Debug, Clone, PartialEq)]
pub struct Shape {
    color: String,
    created: Date,
    geometry: Geometry,
}

impl Shape {
    pub fn circle(color: impl Into<String>, center: DVec2, radius: f64, created: Date) -> Self {
        Self {
            color: color.into(),
            created,
            geometry: Geometry::Circle { center, radius },
        }
    }

    pub fn rectangle(color: impl Into<String>, corner1: DVec2, corner2: DVec2, created: Date) -> Self {
        Self {
            color: color.into(),
            created,
            geometry: Geometry::Rectangle { corner1, corner2 },
        }
    }

    pub fn triangle(color: impl Into<String>, vertices: [DVec2; 3], created: Date) -> Self {
        Self {
            color: color.into(),
            created,
            geometry: Geometry::Triangle { vertices },
        }
    }

    #[inline]
    pub fn color(&self) -> &str {
        &self.color
    }

    #[inline]
    pub fn created(&self) -> Date {
        self.created
    }

    #[inline]
    pub fn year(&self) -> i32 {
        self.created.year()
    }

    #[inline]
    pub fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    pub fn matches(&self, pred: &Predicate) -> bool {
        pred.matches(self.year())
    }
}

/// The canonical one-line rendering. Downstream output depends on the
/// exact field order and labels, so this format is held stable.
impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.geometry {
            Geometry::Circle { center, radius } => write!(
                f,
                "Circle: Color={}, Center=({}, {}), Radius={}, Year={}",
                self.color,
                center.x,
                center.y,
                radius,
                self.year()
            ),
            Geometry::Rectangle { corner1, corner2 } => write!(
                f,
                "Rectangle: Color={}, Point1=({}, {}), Point2=({}, {}), Year={}",
                self.color,
                corner1.x,
                corner1.y,
                corner2.x,
                corner2.y,
                self.year()
            ),
            Geometry::Triangle { vertices: [a, b, c] } => write!(
                f,
                "Triangle: Color={}, Point1=({}, {}), Point2=({}, {}), Point3=({}, {}), Year={}",
                self.color,
                a.x,
                a.y,
                b.x,
                b.y,
                c.x,
                c.y,
                self.year()
            ),
        }
    }
}

#[cfg(test)]
fn date(text: &str) -> Date {
    Date::parse(text).unwrap()
}

#[test]
fn describes_each_kind() {
    let circle = Shape::circle("red", DVec2::new(0.0, 0.0), 5.0, date("1.1.2020"));
    assert_eq!(
        circle.to_string(),
        "Circle: Color=red, Center=(0, 0), Radius=5, Year=2020"
    );

    let rect = Shape::rectangle("blue", DVec2::new(0.0, 0.0), DVec2::new(2.0, 2.0), date("1.1.2019"));
    assert_eq!(
        rect.to_string(),
        "Rectangle: Color=blue, Point1=(0, 0), Point2=(2, 2), Year=2019"
    );

    let tri = Shape::triangle(
        "green",
        [DVec2::new(0.0, 0.0), DVec2::new(1.0, 0.0), DVec2::new(0.0, 1.0)],
        date("1.1.2021"),
    );
    assert_eq!(
        tri.to_string(),
        "Triangle: Color=green, Point1=(0, 0), Point2=(1, 0), Point3=(0, 1), Year=2021"
    );
}

#[test]
fn fractional_coordinates_keep_their_digits() {
    let circle = Shape::circle("teal", DVec2::new(0.5, -1.25), 2.5, date("3.4.2018"));
    assert_eq!(
        circle.to_string(),
        "Circle: Color=teal, Center=(0.5, -1.25), Radius=2.5, Year=2018"
    );
}

#[test]
fn matches_against_creation_year() {
    let circle = Shape::circle("red", DVec2::ZERO, 1.0, date("1.1.2020"));
    assert!(circle.matches(&Predicate::parse("> 2019").unwrap()));
    assert!(circle.matches(&Predicate::parse("= 2020").unwrap()));
    assert!(!circle.matches(&Predicate::parse("< 2020").unwrap()));
}
