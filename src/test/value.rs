use crate::{Compound, NbtData, Value};

#[test]
fn from_primitives() {
    assert_eq!(Value::from(true), Value::Bool(true));
    assert_eq!(Value::from(1u8), Value::Int(1));
    assert_eq!(Value::from(-1i16), Value::Int(-1));
    assert_eq!(Value::from(7i64), Value::Int(7));
    assert_eq!(Value::from(1.5f32), Value::Float(1.5));
    assert_eq!(Value::from("s"), Value::String("s".into()));
    assert_eq!(Value::from('c'), Value::String("c".into()));
    assert_eq!(Value::from(None::<i32>), Value::Null);
    assert_eq!(Value::from(Some(2)), Value::Int(2));
    assert_eq!(
        Value::from(vec![1, 2]),
        Value::List(vec![Value::Int(1), Value::Int(2)])
    );
}

#[test]
fn comparisons() {
    assert_eq!(Value::from("a"), "a");
    assert_eq!(Value::Int(3), 3);
    assert_eq!(Value::Float(0.5), 0.5);
    assert_eq!(Value::Bool(false), false);
    assert_ne!(Value::Int(3), "3");
}

#[test]
fn empty_containers() {
    assert!(Value::List(vec![]).is_empty_container());
    assert!(Value::Compound(Compound::new()).is_empty_container());
    assert!(!Value::String(String::new()).is_empty_container());
    assert!(Value::default().is_null());
}

#[test]
fn serialize_keeps_compound_order() {
    let v = value!({ "z": [1, 2.5], "a": { "on": true }, "id": "minecraft:egg" });
    assert_eq!(
        serde_json::to_string(&v).unwrap(),
        r#"{"z":[1,2.5],"a":{"on":true},"id":"minecraft:egg"}"#
    );
    assert_eq!(serde_json::to_string(&Value::Null).unwrap(), "null");
}

#[test]
fn nbt_data_serializes_as_its_entries() {
    let mut tag = NbtData::new();
    tag.insert("Damage", 3).insert("Unset", Value::Null);
    assert_eq!(
        serde_json::to_string(&tag).unwrap(),
        r#"{"Damage":3,"Unset":null}"#
    );
}

#[cfg(feature = "json")]
#[test]
fn from_json() {
    let json: serde_json::Value = serde_json::from_str(
        r#"{"Lock": null, "Items": [{"Slot": 0, "id": "minecraft:egg", "Count": 1.5}], "b": true}"#,
    )
    .unwrap();

    assert_eq!(
        Value::from(json),
        value!({
            "Lock": null,
            "Items": [{ "Slot": 0, "id": "minecraft:egg", "Count": 1.5 }],
            "b": true,
        })
    );
}

#[cfg(feature = "json")]
#[test]
fn json_renders_like_nbt() {
    let json: serde_json::Value =
        serde_json::from_str(r#"{"z": 1, "a": {"on": false}, "gone": []}"#).unwrap();
    let nbt = NbtData::from(match Value::from(json) {
        Value::Compound(c) => c,
        _ => panic!("expected compound"),
    });
    assert_eq!(nbt.render().unwrap(), r#"{z:1,a:{on:"false"}}"#);
}
