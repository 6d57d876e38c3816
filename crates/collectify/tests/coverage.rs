//! End-to-end coverage of the public API: matching, set algebra, partition
//! and tabular conversion working together.

use std::rc::Rc;

use collectify::{
    collect, collection, contains_strict, is_collection, matches, not, partial, pattern, property,
    records_from_csv, records_from_header_and_rows, records_from_json, records_from_table, row,
    Collection, IntoCollection, Pattern, Record, Scalar, TableOptions, Value,
};
use serde_json::json;

// ============================================================================
// Fixtures
// ============================================================================

fn record(pairs: &[(&str, Scalar)]) -> Record {
    pairs
        .iter()
        .map(|(name, value)| (*name, value.clone()))
        .collect()
}

fn people() -> Collection<Record> {
    records_from_table(
        vec![
            row!["name", "age", "team"],
            row!["joe", 30, "red"],
            row!["jane", 35, "blue"],
            row!["jim", 30, "blue"],
        ],
        0,
    )
    .unwrap()
}

// ============================================================================
// Matching
// ============================================================================

#[test]
fn matches_is_strict_and_shallow() {
    let candidate = record(&[("a", Scalar::from(1)), ("b", Scalar::from(2))]);
    assert!(matches(&pattern! { "a" => 1 }, &candidate));
    let other = record(&[("a", Scalar::from(2))]);
    assert!(!matches(&pattern! { "a" => 1 }, &other));
    assert!(!matches(&pattern! { "a" => 1 }, &Record::new()));
    assert!(matches(&pattern! {}, &candidate));
    assert!(matches(&pattern! {}, &Record::new()));
}

#[test]
fn empty_pattern_keeps_whole_collection() {
    let numbers = collection![json!(1), json!(2), json!(2), json!(3)];
    let kept = numbers.filter_where(&pattern! {});
    assert_eq!(kept, numbers);
}

#[test]
fn find_where_on_empty_is_none() {
    let empty: Collection<Record> = collection![];
    assert!(empty.find_where(&pattern! { "x" => 9 }).is_none());
    assert!(empty.find_where_not(&pattern! { "x" => 9 }).is_none());
}

#[test]
fn where_and_where_not_split_the_collection() {
    let people = people();
    let blue = people.filter_where(&pattern! { "team" => "blue" });
    let other = people.filter_where_not(&pattern! { "team" => "blue" });
    assert_eq!(blue.len() + other.len(), people.len());
    assert_eq!(
        blue.pluck("name").to_vec(),
        vec![Value::String("jane"), Value::String("jim")]
    );
    assert_eq!(other.pluck("name").to_vec(), vec![Value::String("joe")]);
}

#[test]
fn find_where_returns_first_match() {
    let people = people();
    let found = people.find_where(&pattern! { "age" => 30 }).unwrap();
    assert_eq!(found.get("name"), Some(&Scalar::from("joe")));

    let not_thirty = people.find_where_not(&pattern! { "age" => 30 }).unwrap();
    assert_eq!(not_thirty.get("name"), Some(&Scalar::from("jane")));
}

#[test]
fn matching_does_not_coerce_types() {
    let people = people();
    assert!(people.filter_where(&pattern! { "age" => "30" }).is_empty());
    assert!(people.find_where(&pattern! { "age" => true }).is_none());
}

#[test]
fn pluck_and_pick_project_properties() {
    let people = people();
    let ages = people.pluck("age");
    assert_eq!(ages.len(), 3);
    assert_eq!(ages[1], Value::Number(35i64.into()));
    assert!(people.pluck("missing").iter().all(Value::is_none));

    let picked = people.pick(&["team", "name"]);
    let keys: Vec<&str> = picked[0].keys().collect();
    assert_eq!(keys, vec!["team", "name"]);
}

#[test]
fn json_values_are_matchable() {
    let items = collection![
        json!({"kind": "fruit", "name": "apple"}),
        json!({"kind": "veg", "name": "leek"}),
        json!({"kind": "fruit", "name": "pear", "tags": ["green"]}),
    ];
    let fruit = items.filter_where(&pattern! { "kind" => "fruit" });
    assert_eq!(fruit.len(), 2);
    // Compound values are present but never equal to a scalar
    assert!(items.find_where(&pattern! { "tags" => "green" }).is_none());
}

// ============================================================================
// Predicate primitives
// ============================================================================

#[test]
fn predicate_primitives_compose_with_collections() {
    let people = people();
    let is_red = partial(matches::<Record>, pattern! { "team" => "red" });
    let not_red = not(partial(matches::<Record>, pattern! { "team" => "red" }));

    assert_eq!(people.filter(&is_red).len(), 1);
    assert_eq!(people.filter(&not_red).len(), 2);

    let name = property("name");
    let names: Vec<_> = people.iter().map(|p| name.get(p)).collect();
    assert_eq!(names[2], Value::String("jim"));

    assert!(contains_strict(&[1, 2, 3][..], &2));
    assert!(!contains_strict(&["1"][..], &"2"));
}

// ============================================================================
// Set algebra
// ============================================================================

#[test]
fn union_across_several_arguments() {
    let a = collection![1, 2];
    let result = a.union([vec![2, 3], vec![4, 1]]);
    assert_eq!(result.to_vec(), vec![1, 2, 3, 4]);
    assert_eq!(a.to_vec(), vec![1, 2]);
}

#[test]
fn intersection_and_difference_with_several_arguments() {
    let a = collection![1, 2, 3, 4, 4];
    assert_eq!(
        a.intersection([vec![4, 2, 9], vec![2, 4]]).to_vec(),
        vec![2, 4]
    );
    assert_eq!(a.difference([vec![1], vec![3]]).to_vec(), vec![2, 4, 4]);
}

#[test]
fn intersection_without_arguments_is_receiver() {
    let a = collection![3, 1, 3];
    let none: [Vec<i32>; 0] = [];
    assert_eq!(a.intersection(none).to_vec(), vec![3, 1, 3]);
}

#[test]
fn set_operations_on_records_compare_by_value() {
    let people = people();
    let blue = people.filter_where(&pattern! { "team" => "blue" });
    let thirty = people.filter_where(&pattern! { "age" => 30 });

    let both = blue.intersection([&thirty]);
    assert_eq!(both.len(), 1);
    assert_eq!(both[0].get("name"), Some(&Scalar::from("jim")));

    assert_eq!(blue.union([&thirty]).len(), 3);
    assert_eq!(people.difference([&blue]).len(), 1);
}

#[test]
fn identity_semantics_with_shared_records() {
    let shared = Rc::new(record(&[("id", Scalar::from(1))]));
    let lookalike = Rc::new(record(&[("id", Scalar::from(1))]));

    let a = collection![Rc::clone(&shared), Rc::clone(&lookalike)];
    let b = collection![Rc::clone(&shared)];

    assert_eq!(a.intersection_by([&b], Rc::ptr_eq).len(), 1);
    assert_eq!(a.difference_by([&b], Rc::ptr_eq).len(), 1);
    assert_eq!(a.unique_by(Rc::ptr_eq).len(), 2);
    assert_eq!(a.unique().len(), 1);
}

// ============================================================================
// Partition
// ============================================================================

#[test]
fn partition_results_keep_chaining() {
    let people = people();
    let parts = people.partition(|p| p.get("age") == Some(&Scalar::from(30)));
    let older = parts[1].filter_where(&pattern! { "team" => "blue" });
    assert_eq!(older.len(), 1);
    assert_eq!(parts[0].pluck("name").len(), 2);
}

// ============================================================================
// Tabular conversion
// ============================================================================

#[test]
fn header_and_rows_example() {
    let rows = vec![row!["joe", 30], row!["jane", 35]];
    let records = records_from_header_and_rows(["name", "age"], rows);
    assert_eq!(
        records.to_vec(),
        vec![
            record(&[("name", Scalar::from("joe")), ("age", Scalar::from(30))]),
            record(&[("name", Scalar::from("jane")), ("age", Scalar::from(35))]),
        ]
    );
}

#[test]
fn table_example_matches_header_and_rows() {
    let from_table = records_from_table(
        vec![row!["name", "age"], row!["joe", 30], row!["jane", 35]],
        0,
    )
    .unwrap();
    let rows = vec![row!["joe", 30], row!["jane", 35]];
    let from_rows = records_from_header_and_rows(["name", "age"], rows);
    assert_eq!(from_table, from_rows);
}

#[test]
fn csv_json_and_table_agree() {
    let options = TableOptions::new().infer_types(true);
    let from_csv = records_from_csv("name,age\njoe,30\njane,35\n".as_bytes(), &options).unwrap();
    let from_json = records_from_json(
        r#"[{"name":"joe","age":30},{"name":"jane","age":35}]"#,
        &TableOptions::new(),
    )
    .unwrap();
    assert_eq!(from_csv, from_json);
    assert_eq!(
        from_json.to_json().unwrap(),
        r#"[{"name":"joe","age":30},{"name":"jane","age":35}]"#
    );
}

#[test]
fn pattern_from_record_finds_that_record() {
    let people = people();
    let jim = people[2].clone();
    let found = people.find_where(&Pattern::from(jim.clone()));
    assert_eq!(found, Some(&jim));
}

// ============================================================================
// Factory and chaining
// ============================================================================

#[test]
fn factory_builds_from_sequences() {
    let empty = collect(Vec::<Record>::new());
    assert!(empty.is_empty());
    assert!(is_collection::<Record>(&empty));
    assert!(!is_collection::<Record>(&Vec::<Record>::new()));

    let doubled = (1..=3).map(|n| n * 2).into_collection();
    assert_eq!(doubled.to_vec(), vec![2, 4, 6]);
}

#[test]
fn mutate_and_chain_then_transform() {
    let mut people = people();
    let mut kim = Record::new();
    kim.insert("name", "kim");
    kim.insert("age", 41);

    let mut seen = 0;
    people.push(kim).shift().tap(|c| seen = c.len());
    assert_eq!(seen, 3);

    let names = people
        .filter_where_not(&pattern! { "age" => 30 })
        .pluck("name")
        .map(|v| v.as_str().unwrap_or_default().to_uppercase());
    assert_eq!(names.to_vec(), vec!["JANE", "KIM"]);
}
