use crate::{Compound, NbtData, NbtView, Value};

fn nbt(v: Value) -> NbtData {
    match v {
        Value::Compound(c) => NbtData::from(c),
        _ => panic!("expected compound"),
    }
}

#[test]
fn null_and_empty_list_pruned() {
    let data = nbt(value!({ "Lock": null, "Items": [] }));
    assert_eq!(data.render().unwrap(), "{}");
    assert!(data.parse().unwrap().is_empty());
}

#[test]
fn keys_unquoted_values_quoted() {
    let data = nbt(value!({ "id": "minecraft:egg" }));
    let text = data.render().unwrap();
    assert_eq!(text, r#"{id:"minecraft:egg"}"#);
    assert!(text.contains("id:"));
    assert!(text.contains(r#""minecraft:egg""#));
}

#[test]
fn odd_keys_stay_quoted() {
    let data = nbt(value!({ "minecraft:key": 1, "with space": 2, "ok_key-1.x+": 3 }));
    assert_eq!(
        data.render().unwrap(),
        r#"{"minecraft:key":1,"with space":2,ok_key-1.x+:3}"#
    );
}

#[test]
fn key_resembling_json_is_not_mangled() {
    let data = nbt(value!({ "a\":b": "c\":" }));
    assert_eq!(data.render().unwrap(), r#"{"a\":b":"c\":"}"#);
}

#[test]
fn booleans_become_strings() {
    let data = nbt(value!({ "Invulnerable": true }));
    assert_eq!(data.render().unwrap(), r#"{Invulnerable:"true"}"#);
}

#[test]
fn empty_compound_pruned() {
    let data = nbt(value!({ "tag": {}, "id": "minecraft:stone" }));
    assert_eq!(data.render().unwrap(), r#"{id:"minecraft:stone"}"#);
}

#[test]
fn pruning_is_recursive() {
    let data = nbt(value!({
        "tag": {
            "display": { "Name": null, "Lore": [] },
            "HideFlags": 1,
        },
        "empty_once_pruned": { "inner": { "x": null } },
    }));
    assert_eq!(data.render().unwrap(), "{tag:{HideFlags:1}}");
}

#[test]
fn compounds_in_lists_pruned_but_kept() {
    let data = nbt(value!({
        "Items": [
            { "Slot": 0, "tag": {} },
            { "gone": null },
        ],
    }));
    assert_eq!(data.render().unwrap(), "{Items:[{Slot:0},{}]}");
}

#[test]
fn nested_example() {
    let data = nbt(value!({
        "Items": [{
            "Slot": 0,
            "id": "minecraft:egg",
            "Count": 1,
            "tag": {
                "HideFlags": 1,
                "Enchantments": [{ "id": "minecraft:power", "lvl": 1 }],
            },
        }],
    }));
    assert_eq!(
        data.render().unwrap(),
        r#"{Items:[{Slot:0,id:"minecraft:egg",Count:1,tag:{HideFlags:1,Enchantments:[{id:"minecraft:power",lvl:1}]}}]}"#
    );
}

#[test]
fn null_in_list_is_an_error() {
    let data = nbt(value!({ "list": [1, null] }));
    let err = data.render().unwrap_err();
    assert_eq!(err.kind(), crate::error::ErrorKind::Conversion);
}

#[test]
fn non_finite_float_is_an_error() {
    let mut data = NbtData::new();
    data.insert("x", f64::NAN);
    assert!(data.render().is_err());

    let mut data = NbtData::new();
    data.insert("x", f64::INFINITY);
    assert!(data.render().is_err());
}

#[test]
fn insert_chain_keeps_order() {
    let mut data = NbtData::new();
    data.insert("b", 1).insert("a", "x").insert("c", 2.5);
    assert_eq!(data.render().unwrap(), r#"{b:1,a:"x",c:2.5}"#);
    assert_eq!(data.get("a"), Some(&Value::from("x")));
}

#[test]
fn custom_view() {
    struct Sign {
        text: String,
        glowing: bool,
        internal_counter: u32,
    }

    impl NbtView for Sign {
        fn nbt_view(&self) -> crate::error::Result<Compound> {
            Ok([
                ("Text1".to_owned(), Value::from(self.text.as_str())),
                ("GlowingText".to_owned(), Value::from(self.glowing)),
            ]
            .into_iter()
            .collect())
        }
    }

    let sign = Sign {
        text: "hello".into(),
        glowing: false,
        internal_counter: 7,
    };
    assert_eq!(sign.internal_counter, 7);
    assert_eq!(
        sign.render_nbt().unwrap(),
        r#"{Text1:"hello",GlowingText:"false"}"#
    );
}

#[test]
fn render_twice_is_identical() {
    let data = nbt(value!({ "a": [1, 2], "b": { "c": true } }));
    assert_eq!(data.render().unwrap(), data.render().unwrap());
}

#[test]
fn compounds_in_nested_lists_are_pruned() {
    let data = nbt(value!({ "a": [[{ "x": null, "y": 1 }]] }));
    assert_eq!(data.render().unwrap(), "{a:[[{y:1}]]}");

    let data = nbt(value!({ "b": [{ "c": [{ "x": null, "y": 2 }] }] }));
    assert_eq!(data.render().unwrap(), "{b:[{c:[{y:2}]}]}");
}

#[test]
fn nested_list_elements_are_kept() {
    let data = nbt(value!({ "a": [[], [{ "x": null }], [3]] }));
    assert_eq!(data.render().unwrap(), "{a:[[],[{}],[3]]}");
}
