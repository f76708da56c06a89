// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Example value classes: `Point` and `Circle`.
//!
//! # Example
//!
//! ```
//! use typed_dataclass::shapes::{Circle, Point};
//!
//! let mut p = Point::new(1, 2).unwrap();
//! p.move_by(3, 4).unwrap();
//! assert_eq!(p.to_string(), "A Point at 4, 6");
//!
//! let c = Circle::new(Point::new(0, 0).unwrap(), 2).unwrap();
//! assert_eq!(c.area().unwrap(), std::f64::consts::PI * 4.0);
//! assert!(Circle::new(Point::new(0, 0).unwrap(), "2").is_err());
//! ```

use crate::class::ValueClass;
use crate::error::{Error, Result};
use crate::instance::{Args, Instance};
use crate::types::RequiredType;
use crate::value::Value;
use std::f64::consts::PI;
use std::fmt;
use std::sync::{Arc, OnceLock};

static POINT: OnceLock<Arc<ValueClass>> = OnceLock::new();
static CIRCLE: OnceLock<Arc<ValueClass>> = OnceLock::new();

/// `Point { x: int, y: int }`
pub fn point_class() -> Arc<ValueClass> {
    POINT
        .get_or_init(|| {
            ValueClass::builder("Point")
                .field("x", RequiredType::Int)
                .field("y", RequiredType::Int)
                .display(display_point)
                .build()
        })
        .clone()
}

/// `Circle { center: Point, radius: int }`
pub fn circle_class() -> Arc<ValueClass> {
    CIRCLE
        .get_or_init(|| {
            ValueClass::builder("Circle")
                .field("center", point_class())
                .field("radius", RequiredType::Int)
                .display(display_circle)
                .build()
        })
        .clone()
}

/// Falls back to the `repr` form when a coordinate can't be read.
fn display_point(point: &Instance, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match (point.get("x"), point.get("y")) {
        (Ok(x), Ok(y)) => write!(f, "A Point at {}, {}", x, y),
        _ => f.write_str(&point.repr()),
    }
}

fn display_circle(circle: &Instance, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let center = circle
        .get("center")
        .ok()
        .and_then(Value::as_instance)
        .map(|c| (c.get("x"), c.get("y")));
    match (center, circle.get("radius")) {
        (Some((Ok(x), Ok(y))), Ok(radius)) => {
            write!(f, "A Circle at {}, {} and radius {}", x, y, radius)
        }
        _ => f.write_str(&circle.repr()),
    }
}

fn downcast(instance: Instance, class: &ValueClass) -> Result<Instance> {
    if instance.is_instance_of(class) {
        Ok(instance)
    } else {
        Err(Error::Conversion {
            expected: class.name().to_string(),
            got: instance.class().name().to_string(),
        })
    }
}

/// A [`point_class`] instance.
#[derive(Debug, Clone, PartialEq)]
pub struct Point(Instance);

impl Point {
    pub fn new(x: impl Into<Value>, y: impl Into<Value>) -> Result<Self> {
        point_class()
            .construct(Args::new().arg(x).arg(y))
            .map(Self)
    }

    /// Wrap an instance of `Point` (or of a subclass).
    pub fn from_instance(instance: Instance) -> Result<Self> {
        downcast(instance, &point_class()).map(Self)
    }

    pub fn x(&self) -> Result<i64> {
        self.0.get_as("x")
    }

    pub fn y(&self) -> Result<i64> {
        self.0.get_as("y")
    }

    /// Shift by `(dx, dy)`.
    ///
    /// Both coordinates are computed and checked against the instance's own
    /// class (a subclass may retype them) before either is written, so a
    /// rejected delta leaves the point where it was.
    pub fn move_by(&mut self, dx: impl Into<Value>, dy: impl Into<Value>) -> Result<()> {
        let class = Arc::clone(self.0.class());
        let mut moved = Vec::with_capacity(2);
        for (field, delta) in [("x", dx.into()), ("y", dy.into())] {
            let attribute = class.attribute(field).ok_or_else(|| Error::UnknownField {
                class: class.name().to_string(),
                field: field.to_string(),
            })?;
            let next = attribute.get(&self.0)?.add(&delta)?;
            attribute.validate(&next)?;
            moved.push((attribute, next));
        }
        for (attribute, next) in moved {
            attribute.set(&mut self.0, next)?;
        }
        Ok(())
    }

    pub fn as_instance(&self) -> &Instance {
        &self.0
    }

    pub fn into_instance(self) -> Instance {
        self.0
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl From<Point> for Value {
    fn from(point: Point) -> Self {
        Value::Instance(point.0)
    }
}

/// A [`circle_class`] instance.
#[derive(Debug, Clone, PartialEq)]
pub struct Circle(Instance);

impl Circle {
    pub fn new(center: impl Into<Value>, radius: impl Into<Value>) -> Result<Self> {
        circle_class()
            .construct(Args::new().kwarg("center", center).kwarg("radius", radius))
            .map(Self)
    }

    pub fn from_instance(instance: Instance) -> Result<Self> {
        downcast(instance, &circle_class()).map(Self)
    }

    pub fn center(&self) -> Result<Point> {
        match self.0.get("center")? {
            Value::Instance(center) => Point::from_instance(center.clone()),
            other => Err(Error::Conversion {
                expected: "Point".to_string(),
                got: other.type_name().to_string(),
            }),
        }
    }

    pub fn radius(&self) -> Result<i64> {
        self.0.get_as("radius")
    }

    pub fn set_radius(&mut self, radius: impl Into<Value>) -> Result<()> {
        self.0.set("radius", radius)
    }

    /// `PI * radius²`
    #[allow(clippy::cast_precision_loss)]
    pub fn area(&self) -> Result<f64> {
        let radius = self.radius()? as f64;
        Ok(PI * radius.powi(2))
    }

    pub fn as_instance(&self) -> &Instance {
        &self.0
    }

    pub fn into_instance(self) -> Instance {
        self.0
    }
}

impl fmt::Display for Circle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl From<Circle> for Value {
    fn from(circle: Circle) -> Self {
        Value::Instance(circle.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_move_by() {
        let mut p = point_class()
            .construct(Args::new().kwarg("x", 1).kwarg("y", 2))
            .and_then(Point::from_instance)
            .expect("point");
        p.move_by(3, 4).expect("move");
        assert_eq!(p.to_string(), "A Point at 4, 6");
        assert_eq!((p.x(), p.y()), (Ok(4), Ok(6)));
    }

    #[test]
    fn test_point_move_by_float_is_rejected_atomically() {
        let mut p = Point::new(1, 2).expect("point");
        let err = p.move_by(0, 0.5).unwrap_err();
        assert!(err.is_type_constraint());
        assert_eq!(p, Point::new(1, 2).expect("point"));
    }

    #[test]
    fn test_point_move_by_uses_subclass_types() {
        let float_point = point_class()
            .subclass("FloatPoint")
            .field("x", RequiredType::Float)
            .build();
        let mut p = float_point
            .construct(Args::new().arg(1.5).arg(2))
            .and_then(Point::from_instance)
            .expect("float point");
        p.move_by(0.5, 0).expect("float move");
        assert_eq!(p.as_instance().get("x"), Ok(&Value::Float(2.0)));
        assert_eq!(p.y(), Ok(2));

        let err = p.move_by(0, 0.5).unwrap_err();
        assert_eq!(
            err,
            Error::TypeConstraint {
                class: "Point".into(),
                field: "y".into(),
                expected: "int".into(),
                got: "float".into(),
            }
        );
        assert_eq!(p.as_instance().get("x"), Ok(&Value::Float(2.0)));
    }

    #[test]
    fn test_display_with_unset_slot_falls_back_to_repr() {
        let mut point = Point::new(1, 2).expect("point").into_instance();
        point.storage_mut().remove("_x");
        assert_eq!(point.to_string(), "Point(x=<unset>, y=2)");
        assert_eq!(format!("{}", point), "Point(x=<unset>, y=2)");

        let mut circle = Circle::new(Point::new(0, 0).expect("center"), 1)
            .expect("circle")
            .into_instance();
        circle.storage_mut().remove("_radius");
        assert_eq!(
            circle.to_string(),
            "Circle(center=Point(x=0, y=0), radius=<unset>)"
        );
    }

    #[test]
    fn test_point_rejects_non_int() {
        assert!(Point::new(1.0, 2).unwrap_err().is_type_constraint());
        assert!(Point::new(1, "2").unwrap_err().is_type_constraint());
    }

    #[test]
    fn test_circle_area_and_display() {
        let c = Circle::new(Point::new(0, 0).expect("center"), 2).expect("circle");
        assert_eq!(c.area(), Ok(PI * 4.0));
        assert_eq!(c.to_string(), "A Circle at 0, 0 and radius 2");
        assert_eq!(c.center(), Point::new(0, 0));
        assert_eq!(
            c.as_instance().repr(),
            "Circle(center=Point(x=0, y=0), radius=2)"
        );
    }

    #[test]
    fn test_circle_string_radius_fails() {
        let err = Circle::new(Point::new(0, 0).expect("center"), "2").unwrap_err();
        assert_eq!(
            err,
            Error::TypeConstraint {
                class: "Circle".into(),
                field: "radius".into(),
                expected: "int".into(),
                got: "str".into(),
            }
        );
    }

    #[test]
    fn test_circle_center_must_be_point() {
        let not_a_point = ValueClass::builder("Point").field("x", RequiredType::Int).build();
        let impostor = not_a_point.construct(Args::new().arg(0)).expect("impostor");
        let err = Circle::new(impostor, 1).unwrap_err();
        assert!(err.is_type_constraint());
        assert!(Circle::new(3, 1).unwrap_err().is_type_constraint());
    }

    #[test]
    fn test_circle_accepts_point_subclass() {
        let labelled = point_class()
            .subclass("LabelledPoint")
            .field("label", RequiredType::Str)
            .build();
        let center = labelled
            .construct(Args::new().arg(1).arg(2).arg("origin"))
            .expect("labelled");
        let c = Circle::new(center, 3).expect("circle");
        assert_eq!(c.to_string(), "A Circle at 1, 2 and radius 3");
        assert_eq!(c.center().and_then(|p| p.x()), Ok(1));
    }

    #[test]
    fn test_circles_share_checkers_with_points() {
        let radius = circle_class().attribute("radius").expect("radius").clone();
        let x = point_class().attribute("x").expect("x").clone();
        assert!(Arc::ptr_eq(radius.checker(), x.checker()));
        let center = circle_class().attribute("center").expect("center").clone();
        assert!(!Arc::ptr_eq(center.checker(), x.checker()));
        assert_eq!(center.checker().name(), "PointChecker");
    }

    #[test]
    fn test_set_radius() {
        let mut c = Circle::new(Point::new(0, 0).expect("center"), 1).expect("circle");
        c.set_radius(5).expect("set radius");
        assert_eq!(c.radius(), Ok(5));
        assert!(c.set_radius("5").is_err());
        assert_eq!(c.radius(), Ok(5));
    }
}
