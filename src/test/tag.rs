use crate::{TagData, Value};

fn tag(pairs: Vec<(&str, Value)>) -> TagData {
    pairs.into_iter().collect()
}

#[test]
fn flat_primitives() {
    let data = tag(vec![("a", value!(1)), ("b", value!("x"))]);
    assert_eq!(data.render().unwrap(), "[a=1,b=x]");
}

#[test]
fn empty() {
    assert_eq!(TagData::new().render().unwrap(), "[]");
    assert!(TagData::new().is_empty());
}

#[test]
fn booleans() {
    let data = tag(vec![("waterlogged", value!(true)), ("lit", value!(false))]);
    assert_eq!(data.render().unwrap(), "[waterlogged=true,lit=false]");
}

#[test]
fn empty_list_and_null_skipped() {
    let data = tag(vec![
        ("facing", value!("south")),
        ("gone", value!([])),
        ("unset", Value::Null),
        ("type", value!("left")),
    ]);
    assert_eq!(data.render().unwrap(), "[facing=south,type=left]");
    assert_eq!(data.parse().unwrap(), ["facing=south", "type=left"]);
}

#[test]
fn only_skipped_is_empty() {
    let data = tag(vec![("gone", value!([])), ("unset", Value::Null)]);
    assert!(data.is_empty());
    assert_eq!(data.render().unwrap(), "[]");
}

#[test]
fn numbers() {
    let data = tag(vec![("note", value!(10)), ("scale", value!(0.5))]);
    assert_eq!(data.render().unwrap(), "[note=10,scale=0.5]");
}

#[test]
fn containers_use_nbt_text() {
    let data = tag(vec![
        ("list", value!([1, 2])),
        ("map", value!({ "k": "v", "on": true })),
    ]);
    assert_eq!(data.render().unwrap(), r#"[list=[1,2],map={k:"v",on:"true"}]"#);
}

#[test]
fn insertion_order_not_alphabetical() {
    let mut data = TagData::new();
    data.insert("z", "1").insert("a", "2");
    assert_eq!(data.render().unwrap(), "[z=1,a=2]");

    data.insert("z", "3");
    assert_eq!(data.render().unwrap(), "[z=3,a=2]");
}

#[test]
fn container_values_are_pruned() {
    let data = tag(vec![
        ("p", value!({ "q": null, "r": 1 })),
        ("l", value!([{ "gone": [] }, [{ "x": null, "y": 2 }]])),
    ]);
    assert_eq!(data.render().unwrap(), "[p={r:1},l=[{},[{y:2}]]]");
}
