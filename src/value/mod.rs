use indexmap::IndexMap;
use serde::{Serialize, Serializer};

/// An ordered NBT compound. Keys render in insertion order.
pub type Compound = IndexMap<String, Value>;

/// Value is any piece of data that can be rendered into Minecraft's command
/// syntax. It owns its data. Lists and compounds nest arbitrarily, and
/// compounds remember the order their keys were inserted in.
///
/// `Null` stands for an unset value. It is dropped from tag data and from NBT
/// compounds rather than being rendered.
///
/// ```
/// # use mcct::{value, Value};
/// let v = value!({
///     "id": "minecraft:egg",
///     "Count": 1,
/// });
/// match &v {
///     Value::Compound(c) => assert_eq!(c["id"], "minecraft:egg"),
///     _ => unreachable!(),
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
    List(Vec<Value>),
    Compound(Compound),
}

impl Value {
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// True for a list or compound with nothing in it.
    pub fn is_empty_container(&self) -> bool {
        match self {
            Value::List(v) => v.is_empty(),
            Value::Compound(v) => v.is_empty(),
            _ => false,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match *self {
            Value::Bool(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match *self {
            Value::Int(v) => Some(v),
            Value::Float(v) => Some(v as i64),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match *self {
            Value::Int(v) => Some(v as f64),
            Value::Float(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_compound(&self) -> Option<&Compound> {
        match self {
            Value::Compound(v) => Some(v),
            _ => None,
        }
    }
}

// ------------- From<T> impls -------------

macro_rules! from {
    ($type:ty, $variant:ident $(, $($part:tt)+)?) => {
        impl From<$type> for Value {
            fn from(val: $type) -> Self {
                Self::$variant(val$($($part)+)?)
            }
        }
        impl From<&$type> for Value {
            fn from(val: &$type) -> Self {
                Self::$variant(val.to_owned()$($($part)+)?)
            }
        }
    };
}
from!(bool, Bool);
from!(i8, Int, as i64);
from!(u8, Int, as i64);
from!(i16, Int, as i64);
from!(u16, Int, as i64);
from!(i32, Int, as i64);
from!(u32, Int, as i64);
from!(i64, Int);
from!(f32, Float, as f64);
from!(f64, Float);
from!(String, String);
from!(&str, String, .to_owned());
from!(Compound, Compound);

impl From<char> for Value {
    fn from(val: char) -> Self {
        Self::String(val.to_string())
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(val: Vec<T>) -> Self {
        Self::List(val.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(val: Option<T>) -> Self {
        val.map_or(Value::Null, Into::into)
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Value {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Value::Compound(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

#[cfg(feature = "json")]
impl From<serde_json::Value> for Value {
    fn from(val: serde_json::Value) -> Self {
        use serde_json::Value as Json;

        match val {
            Json::Null => Value::Null,
            Json::Bool(v) => Value::Bool(v),
            Json::Number(n) => match n.as_i64() {
                Some(i) => Value::Int(i),
                None => n.as_f64().map_or(Value::Null, Value::Float),
            },
            Json::String(v) => Value::String(v),
            Json::Array(v) => Value::List(v.into_iter().map(Value::from).collect()),
            Json::Object(v) => {
                Value::Compound(v.into_iter().map(|(k, v)| (k, Value::from(v))).collect())
            }
        }
    }
}

fn eq_i64(value: &Value, other: i64) -> bool {
    matches!(*value, Value::Int(v) if v == other)
}

fn eq_f64(value: &Value, other: f64) -> bool {
    value.as_f64().map_or(false, |v| v == other)
}

fn eq_str(value: &Value, other: &str) -> bool {
    value.as_str().map_or(false, |v| v == other)
}

impl PartialEq<str> for Value {
    fn eq(&self, other: &str) -> bool {
        eq_str(self, other)
    }
}

impl<'a> PartialEq<&'a str> for Value {
    fn eq(&self, other: &&str) -> bool {
        eq_str(self, other)
    }
}

impl PartialEq<String> for Value {
    fn eq(&self, other: &String) -> bool {
        eq_str(self, other.as_str())
    }
}

impl PartialEq<bool> for Value {
    fn eq(&self, other: &bool) -> bool {
        self.as_bool() == Some(*other)
    }
}

macro_rules! partialeq_numeric {
    ($($eq:ident [$($ty:ty)*])*) => {
        $($(
            impl PartialEq<$ty> for Value {
                fn eq(&self, other: &$ty) -> bool {
                    $eq(self, *other as _)
                }
            }
        )*)*
    }
}

partialeq_numeric! {
    eq_i64[i8 i16 i32 i64 u8 u16 u32]
    eq_f64[f32 f64]
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::Null => serializer.serialize_none(),
            Value::Bool(v) => serializer.serialize_bool(*v),
            Value::Int(v) => serializer.serialize_i64(*v),
            Value::Float(v) => serializer.serialize_f64(*v),
            Value::String(v) => serializer.serialize_str(v),
            Value::List(v) => serializer.collect_seq(v),
            Value::Compound(v) => serializer.collect_map(v),
        }
    }
}
