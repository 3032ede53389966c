use super::*;
use pretty_assertions::assert_eq;

fn id(index: u32) -> TypeId<'static> {
    TypeId::new(index)
}

#[test]
fn new_struct_is_empty() {
    let s = StructType::new("Empty");
    assert_eq!(s.name(), "Empty");
    assert_eq!(s.size(), 0);
    assert_eq!(s.field("x"), None);
}

#[test]
fn fields_keep_insertion_order() {
    let mut s = StructType::new("Point");
    s.add_field("y", id(1));
    s.add_field("x", id(2));
    s.add_field("z", id(3));
    let names: Vec<&str> = s.fields().map(|(name, _)| name).collect();
    assert_eq!(names, vec!["y", "x", "z"]);
}

#[test]
fn overwrite_keeps_position() {
    let mut s = StructType::new("Pair");
    assert_eq!(s.add_field("a", id(1)), None);
    s.add_field("b", id(2));
    assert_eq!(s.add_field("a", id(9)), Some(id(1)));
    assert_eq!(s.size(), 2);
    assert_eq!(s.field("a"), Some(id(9)));
    assert_eq!(s.fields().next(), Some(("a", id(9))));
}

mod proptest_fields {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn size_counts_distinct_names(names in prop::collection::vec("[a-d]", 0..12)) {
            let mut s = StructType::new("S");
            for (i, name) in names.iter().enumerate() {
                s.add_field(name.as_str(), id(i as u32));
            }

            let mut distinct: Vec<&String> = Vec::new();
            for name in &names {
                if !distinct.contains(&name) {
                    distinct.push(name);
                }
            }
            prop_assert_eq!(s.size(), distinct.len());
            let order: Vec<&str> = s.fields().map(|(name, _)| name).collect();
            let expected: Vec<&str> = distinct.iter().map(|n| n.as_str()).collect();
            prop_assert_eq!(order, expected);

            for name in &distinct {
                let last = names.iter().rposition(|n| n == *name).map(|i| id(i as u32));
                prop_assert_eq!(s.field(name), last);
            }
        }
    }
}
