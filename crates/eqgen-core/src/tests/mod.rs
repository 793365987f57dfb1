
use crate::{
    config::GenerationConfig,
    generate::{GenerationResult, generate},
    test_support::{Value, World},
};
use eqgen_schema::{
    build::ClassSchemaBuilder,
    node::{ClassSchema, MemberDescriptor},
    types::{ArrayElement, Presence, TypeCategory},
};

fn schema(builder: ClassSchemaBuilder) -> ClassSchema {
    builder.build().expect("valid schema")
}

fn world_with(builder: ClassSchemaBuilder) -> World {
    let mut world = World::new();
    world.define_generated(&schema(builder), None);
    world
}

fn agency() -> ClassSchemaBuilder {
    ClassSchemaBuilder::new("Agency")
        .member(MemberDescriptor::field("id", TypeCategory::IntegerLike))
}

//
// sentinel
//

#[test]
fn instance_with_unset_identity_equals_itself() {
    let mut world = world_with(agency());
    let a = world.instance("Agency", &[("id", Value::Int(0))]);

    assert!(world.equals(&a, &a));
}

#[test]
fn distinct_instances_with_unset_identity_are_unequal() {
    let mut world = world_with(agency());
    let a = world.instance("Agency", &[("id", Value::Int(0))]);
    let b = world.instance("Agency", &[("id", Value::Int(0))]);

    assert!(!world.equals(&a, &b));
    assert!(!world.equals(&b, &a));
}

#[test]
fn surrogate_identity_follows_the_sentinel_rule() {
    let mut world = world_with(ClassSchemaBuilder::new("Agency"));
    let unset = world.instance("Agency", &[("id", Value::Int(0))]);
    let other = world.instance("Agency", &[("id", Value::Int(0))]);
    let a = world.instance("Agency", &[("id", Value::Int(3))]);
    let b = world.instance("Agency", &[("id", Value::Int(3))]);

    assert!(!world.equals(&unset, &other));
    assert!(world.equals(&a, &b));
}

#[test]
fn unset_receiver_is_unequal_even_to_an_assigned_argument() {
    let mut world = world_with(agency());
    let unset = world.instance("Agency", &[("id", Value::Int(0))]);
    let set = world.instance("Agency", &[("id", Value::Int(4))]);

    assert!(!world.equals(&unset, &set));
    assert!(!world.equals(&set, &unset));
}

//
// ordinary equality
//

#[test]
fn equal_identity_means_equal_and_same_hash() {
    let mut world = world_with(agency());
    let a = world.instance("Agency", &[("id", Value::Int(5))]);
    let b = world.instance("Agency", &[("id", Value::Int(5))]);

    assert!(world.equals(&a, &b));
    assert!(world.equals(&b, &a));
    assert_eq!(world.hash_code(&a), world.hash_code(&b));
}

#[test]
fn different_identity_is_unequal_but_hash_is_unchanged() {
    let mut world = world_with(agency());
    let a = world.instance("Agency", &[("id", Value::Int(5))]);
    let b = world.instance("Agency", &[("id", Value::Int(6))]);

    assert!(!world.equals(&a, &b));
    assert_eq!(world.hash_code(&a), world.hash_code(&b));
}

#[test]
fn every_identity_member_participates() {
    let mut world = world_with(
        agency().member(MemberDescriptor::field("code", TypeCategory::Reference)),
    );
    let a = world.instance(
        "Agency",
        &[("id", Value::Int(1)), ("code", Value::Str("NYC".to_string()))],
    );
    let b = world.instance(
        "Agency",
        &[("id", Value::Int(1)), ("code", Value::Str("NYC".to_string()))],
    );
    let c = world.instance(
        "Agency",
        &[("id", Value::Int(1)), ("code", Value::Str("LA".to_string()))],
    );

    assert!(world.equals(&a, &b));
    assert!(!world.equals(&a, &c));
}

#[test]
fn plain_primitives_compare_without_a_sentinel() {
    let mut world = world_with(
        ClassSchemaBuilder::new("Flag")
            .member(MemberDescriptor::field("active", TypeCategory::Boolean)),
    );
    let a = world.instance("Flag", &[("active", Value::Bool(false))]);
    let b = world.instance("Flag", &[("active", Value::Bool(false))]);
    let c = world.instance("Flag", &[("active", Value::Bool(true))]);

    assert!(world.equals(&a, &b));
    assert!(!world.equals(&a, &c));
}

#[test]
fn accessor_members_are_read_through_the_accessor() {
    let mut world = world_with(
        ClassSchemaBuilder::new("Agency")
            .member(MemberDescriptor::accessor("getCode", TypeCategory::Reference)),
    );
    let a = world.instance("Agency", &[("getCode", Value::Str("NYC".to_string()))]);
    let b = world.instance("Agency", &[("getCode", Value::Str("NYC".to_string()))]);

    assert!(world.equals(&a, &b));
}

//
// type mismatch and inheritance
//

#[test]
fn unrelated_types_are_never_equal() {
    let mut world = World::new();
    world.define_generated(&schema(agency()), None);
    world.define_generated(
        &schema(
            ClassSchemaBuilder::new("Vendor")
                .member(MemberDescriptor::field("id", TypeCategory::IntegerLike)),
        ),
        None,
    );
    let a = world.instance("Agency", &[("id", Value::Int(5))]);
    let v = world.instance("Vendor", &[("id", Value::Int(5))]);

    assert!(!world.equals(&a, &v));
    assert!(!world.equals(&v, &a));
}

fn animals() -> World {
    let name = || MemberDescriptor::field("name", TypeCategory::Reference);
    let mut world = World::new();
    world.define_generated(&schema(ClassSchemaBuilder::new("Animal").member(name())), None);
    world.define_generated(
        &schema(ClassSchemaBuilder::new("Dog").extends_non_root().member(name())),
        Some("Animal"),
    );
    // a subclass that declares nothing and inherits the base methods
    world.define_class("Cat", Some("Animal"), Vec::new());

    world
}

#[test]
fn guard_keeps_generated_subclass_apart_from_base() {
    let mut world = animals();
    let named = || [("name", Value::Str("Rex".to_string()))];
    let animal = world.instance("Animal", &named());
    let dog = world.instance("Dog", &named());

    assert_eq!(world.equals(&animal, &dog), world.equals(&dog, &animal));
    assert!(!world.equals(&animal, &dog));
}

#[test]
fn guard_accepts_subclass_that_inherits_base_equality() {
    let mut world = animals();
    let named = || [("name", Value::Str("Tom".to_string()))];
    let animal = world.instance("Animal", &named());
    let cat = world.instance("Cat", &named());

    assert_eq!(world.equals(&animal, &cat), world.equals(&cat, &animal));
    assert!(world.equals(&animal, &cat));
}

#[test]
fn generated_subclass_still_equals_its_own_kind() {
    let mut world = animals();
    let a = world.instance("Dog", &[("name", Value::Str("Rex".to_string()))]);
    let b = world.instance("Dog", &[("name", Value::Str("Rex".to_string()))]);

    assert!(world.equals(&a, &b));
    assert_eq!(world.hash_code(&a), world.hash_code(&b));
}

//
// references
//

#[test]
fn null_receiver_member_is_unequal_to_everything_else() {
    let mut world = world_with(
        ClassSchemaBuilder::new("Agency")
            .member(MemberDescriptor::field("code", TypeCategory::Reference)),
    );
    let a = world.instance("Agency", &[("code", Value::Null)]);
    let b = world.instance("Agency", &[("code", Value::Null)]);
    let c = world.instance("Agency", &[("code", Value::Str("NYC".to_string()))]);

    assert!(world.equals(&a, &a));
    assert!(!world.equals(&a, &b));
    assert!(!world.equals(&a, &c));
    assert!(!world.equals(&c, &a));
}

#[test]
fn reference_members_use_their_own_equality() {
    let mut world = World::new();
    world.define_generated(
        &schema(
            ClassSchemaBuilder::new("Address")
                .member(MemberDescriptor::field("zip", TypeCategory::IntegerLike)),
        ),
        None,
    );
    world.define_generated(
        &schema(
            ClassSchemaBuilder::new("Office")
                .member(MemberDescriptor::field("address", TypeCategory::Reference)),
        ),
        None,
    );
    let home = world.instance("Address", &[("zip", Value::Int(10001))]);
    let same = world.instance("Address", &[("zip", Value::Int(10001))]);
    let a = world.instance("Office", &[("address", home)]);
    let b = world.instance("Office", &[("address", same)]);

    assert!(world.equals(&a, &b));
}

//
// floating point
//

#[test]
fn nan_members_compare_equal() {
    let mut world = world_with(
        ClassSchemaBuilder::new("Reading")
            .member(MemberDescriptor::field("value", TypeCategory::Float64)),
    );
    let a = world.instance("Reading", &[("value", Value::Double(f64::NAN))]);
    let b = world.instance("Reading", &[("value", Value::Double(f64::NAN))]);

    assert!(world.equals(&a, &b));
}

#[test]
fn zero_float_is_an_unset_sentinel() {
    let mut world = world_with(
        ClassSchemaBuilder::new("Reading")
            .member(MemberDescriptor::field("value", TypeCategory::Float32)),
    );
    let a = world.instance("Reading", &[("value", Value::Float(0.0))]);
    let b = world.instance("Reading", &[("value", Value::Float(0.0))]);
    let c = world.instance("Reading", &[("value", Value::Float(1.5))]);
    let d = world.instance("Reading", &[("value", Value::Float(1.5))]);

    assert!(!world.equals(&a, &b));
    assert!(world.equals(&c, &d));
}

#[test]
fn zero_double_is_an_unset_sentinel() {
    let mut world = world_with(
        ClassSchemaBuilder::new("Reading")
            .member(MemberDescriptor::field("value", TypeCategory::Float64)),
    );
    let a = world.instance("Reading", &[("value", Value::Double(0.0))]);
    let b = world.instance("Reading", &[("value", Value::Double(0.0))]);
    let c = world.instance("Reading", &[("value", Value::Double(2.25))]);
    let d = world.instance("Reading", &[("value", Value::Double(2.25))]);

    assert!(!world.equals(&a, &b));
    assert!(world.equals(&a, &a));
    assert!(world.equals(&c, &d));
    assert!(world.equals(&d, &c));
}

#[test]
fn negative_zero_double_is_also_unset() {
    let mut world = world_with(
        ClassSchemaBuilder::new("Reading")
            .member(MemberDescriptor::field("value", TypeCategory::Float64)),
    );
    let neg = world.instance("Reading", &[("value", Value::Double(-0.0))]);
    let other_neg = world.instance("Reading", &[("value", Value::Double(-0.0))]);
    let pos = world.instance("Reading", &[("value", Value::Double(0.0))]);

    assert!(!world.equals(&neg, &other_neg));
    assert!(!world.equals(&neg, &pos));
    assert!(!world.equals(&pos, &neg));
}

//
// arrays
//

fn grid(world: &mut World, rows: &[&[i64]]) -> Value {
    let rows = rows
        .iter()
        .map(|row| world.array(row.iter().copied().map(Value::Int).collect()))
        .collect();

    world.array(rows)
}

#[test]
fn two_dimensional_arrays_compare_deeply() {
    let mut world = world_with(ClassSchemaBuilder::new("Board").member(MemberDescriptor::field(
        "cells",
        TypeCategory::Array(ArrayElement::PrimitiveMultiDimensional),
    )));
    let left = grid(&mut world, &[&[1, 2], &[3, 4]]);
    let right = grid(&mut world, &[&[1, 2], &[3, 4]]);
    let other = grid(&mut world, &[&[1, 2], &[3, 5]]);

    let a = world.instance("Board", &[("cells", left)]);
    let b = world.instance("Board", &[("cells", right)]);
    let c = world.instance("Board", &[("cells", other)]);

    assert!(world.equals(&a, &b));
    assert!(!world.equals(&a, &c));
}

#[test]
fn one_dimensional_arrays_compare_elementwise() {
    let mut world = world_with(ClassSchemaBuilder::new("Blob").member(MemberDescriptor::field(
        "bytes",
        TypeCategory::Array(ArrayElement::Primitive),
    )));
    let left = world.array(vec![Value::Int(1), Value::Int(2)]);
    let right = world.array(vec![Value::Int(1), Value::Int(2)]);
    let shorter = world.array(vec![Value::Int(1)]);

    let a = world.instance("Blob", &[("bytes", left)]);
    let b = world.instance("Blob", &[("bytes", right)]);
    let c = world.instance("Blob", &[("bytes", shorter)]);

    assert!(world.equals(&a, &b));
    assert!(!world.equals(&a, &c));
}

//
// regeneration
//

#[test]
fn second_pass_over_spliced_output_is_skipped() {
    let config = GenerationConfig::default();
    let mut class = schema(agency());

    let first = generate(&class, &config).expect("first pass");
    let GenerationResult::Generated(methods) = &first else {
        panic!("expected generation on first pass");
    };

    // the host splices the result and marks it as tool-generated
    class.existing.equals = Presence::ToolGenerated;
    class.existing.hash_code = Presence::ToolGenerated;
    if methods.can_equal.is_some() {
        class.existing.can_equal = Presence::ToolGenerated;
    }

    let second = generate(&class, &config).expect("second pass");
    assert_eq!(second, GenerationResult::Skipped);
    assert!(second.methods().is_empty());
    assert!(second.diagnostics().is_empty());
}

#[test]
fn hand_written_equals_alone_warns_and_generates_nothing() {
    let class = schema(agency().existing_equals(Presence::UserWritten));
    let result = generate(&class, &GenerationConfig::default()).expect("resolved");

    assert!(matches!(result, GenerationResult::SkippedWithWarning(_)));
    assert!(result.methods().is_empty());
}
