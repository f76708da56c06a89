// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Workflow tests across the whole crate.

use super::*;
use crate::shapes::{circle_class, point_class, Circle, Point};
use std::f64::consts::PI;
use std::sync::Arc;

fn every_kind() -> Vec<Value> {
    vec![
        Value::None,
        Value::Bool(true),
        Value::Int(7),
        Value::Float(0.5),
        Value::from("text"),
        Value::from(Point::new(0, 0).expect("point")),
    ]
}

#[test]
fn test_full_workflow() {
    // 1. Define classes the way an author would
    let mut namespace = Namespace::builtins();
    let vector = ValueClass::builder("Vector")
        .field("dx", RequiredType::Float)
        .field("dy", RequiredType::Float)
        .build_in(&mut namespace);
    let def = ClassDef::new("Particle")
        .annotate("name", "str")
        .annotate("velocity", "Vector")
        .annotate("alive", "bool");
    let particle = attach_typed_fields(def, &namespace, CheckerRegistry::global()).expect("attach");

    // 2. Construct through the generated constructor
    let v = vector
        .construct(Args::new().arg(1.0).arg(-2.0))
        .expect("vector");
    let mut p = particle
        .construct(
            Args::new()
                .arg("dust")
                .kwarg("alive", true)
                .kwarg("velocity", v.clone()),
        )
        .expect("particle");

    // 3. Reads and checked writes
    assert_eq!(p.get_as::<String>("name"), Ok("dust".to_string()));
    assert_eq!(p.get("velocity"), Ok(&Value::Instance(v)));
    p.set("alive", false).expect("set alive");
    assert!(p.set("alive", 0).unwrap_err().is_type_constraint());
    assert!(p.set("velocity", Point::new(1, 1).expect("point")).is_err());

    assert_eq!(
        p.repr(),
        "Particle(name='dust', velocity=Vector(dx=1.0, dy=-2.0), alive=False)"
    );
}

#[test]
fn test_mismatched_write_never_mutates() {
    let class = ValueClass::builder("Everything")
        .field("b", RequiredType::Bool)
        .field("i", RequiredType::Int)
        .field("f", RequiredType::Float)
        .field("s", RequiredType::Str)
        .field("n", RequiredType::NoneType)
        .field("p", point_class())
        .build();
    let mut instance = class
        .construct(
            Args::new()
                .arg(false)
                .arg(0)
                .arg(0.0)
                .arg("")
                .arg(())
                .arg(Point::new(0, 0).expect("point")),
        )
        .expect("construct");

    for attribute in class.attributes() {
        for value in every_kind() {
            let before = instance.clone();
            let accepted = attribute.required_type().is_instance(&value);
            let result = instance.set(attribute.name(), value.clone());
            if accepted {
                assert!(result.is_ok(), "{} should accept {:?}", attribute.name(), value);
                assert_eq!(instance.get(attribute.name()), Ok(&value));
            } else {
                let err = result.expect_err("mismatch must fail");
                assert!(err.is_type_constraint());
                assert!(err.to_string().contains(attribute.required_type().name()));
                assert_eq!(instance, before);
            }
        }
    }
}

#[test]
fn test_randomized_int_writes_round_trip() {
    let class = ValueClass::builder("Counter")
        .field("count", RequiredType::Int)
        .build();
    let mut counter = class.construct(Args::new().arg(0)).expect("counter");
    let mut rng = fastrand::Rng::with_seed(0x5eed);
    for _ in 0..256 {
        let n = rng.i64(..);
        counter.set("count", n).expect("int write");
        assert_eq!(counter.get_as::<i64>("count"), Ok(n));

        let f = rng.f64();
        assert!(counter.set("count", f).is_err());
        assert_eq!(counter.get_as::<i64>("count"), Ok(n));
    }
}

#[test]
fn test_checker_reuse_across_classes() {
    let a = ValueClass::builder("Left").field("v", RequiredType::Str).build();
    let b = ValueClass::builder("Right").field("w", RequiredType::Str).build();
    let c = ValueClass::builder("Other").field("w", RequiredType::Float).build();

    let sa = a.attribute("v").expect("v").checker();
    let sb = b.attribute("w").expect("w").checker();
    let fc = c.attribute("w").expect("w").checker();
    assert!(Arc::ptr_eq(sa, sb));
    assert!(!Arc::ptr_eq(sa, fc));
    assert!(Arc::ptr_eq(
        sa,
        &CheckerRegistry::global().get_or_create(&RequiredType::Str)
    ));
}

#[test]
fn test_omitting_any_field_fails() {
    let class = ValueClass::builder("Triple")
        .field("a", RequiredType::Int)
        .field("b", RequiredType::Int)
        .field("c", RequiredType::Int)
        .build();
    let names = ["a", "b", "c"];
    for skip in 0..names.len() {
        let args = names
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != skip)
            .fold(Args::new(), |args, (i, name)| args.kwarg(*name, i as i64));
        assert_eq!(
            class.construct(args).unwrap_err(),
            Error::MissingArguments {
                class: "Triple".into(),
                names: vec![names[skip].to_string()],
            }
        );
    }
    let full: Args = [1, 2, 3].into_iter().collect();
    let t = class.construct(full).expect("full");
    let values: Vec<_> = t.fields().map(|(_, v)| v.cloned()).collect();
    assert_eq!(values, [Some(Value::Int(1)), Some(Value::Int(2)), Some(Value::Int(3))]);
}

#[test]
fn test_nested_structural_equality() {
    let c1 = Circle::new(Point::new(1, 1).expect("p"), 3).expect("c1");
    let c2 = Circle::new(Point::new(1, 1).expect("p"), 3).expect("c2");
    let c3 = Circle::new(Point::new(1, 2).expect("p"), 3).expect("c3");
    let c4 = Circle::new(Point::new(1, 1).expect("p"), 4).expect("c4");
    assert_eq!(c1, c2);
    assert_ne!(c1, c3);
    assert_ne!(c1, c4);
}

#[test]
fn test_point_and_circle_scenarios() {
    let mut p = Point::from_instance(
        point_class()
            .construct(Args::new().kwarg("x", 1).kwarg("y", 2))
            .expect("point"),
    )
    .expect("downcast");
    p.move_by(3, 4).expect("move");
    assert_eq!(p.to_string(), "A Point at 4, 6");

    let c = circle_class()
        .construct(
            Args::new()
                .kwarg("center", Point::new(0, 0).expect("origin"))
                .kwarg("radius", 2),
        )
        .and_then(Circle::from_instance)
        .expect("circle");
    assert_eq!(c.area(), Ok(PI * 4.0));

    let err = circle_class()
        .construct(
            Args::new()
                .kwarg("center", Point::new(0, 0).expect("origin"))
                .kwarg("radius", "2"),
        )
        .unwrap_err();
    assert!(err.is_type_constraint());
    assert!(err.to_string().contains("expecting a int"));
}

#[cfg(feature = "derive")]
#[derive(Debug, Clone, PartialEq, TypedFields)]
struct Reading {
    sensor: String,
    value: f64,
    valid: bool,
}

#[cfg(feature = "derive")]
#[test]
fn test_derive_inside_crate() {
    let reading = Reading {
        sensor: "t1".into(),
        value: 20.5,
        valid: true,
    };
    let instance = reading.clone().into_instance().expect("into instance");
    assert_eq!(instance.class().name(), "Reading");
    assert_eq!(Reading::from_instance(&instance), Ok(reading));
    assert!(Arc::ptr_eq(&Reading::value_class(), instance.class()));
}
