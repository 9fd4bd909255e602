use crate::array::KeyedArray;

/// A value that can take part in a structural comparison.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    /// A keyed collection.
    Array(KeyedArray),
    /// A class-tagged property collection.
    Object(ObjectValue),
}

impl Value {
    /// Name of the value's type, as used in type-mismatch messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool(_) => "bool",
            Self::Int(_) => "int",
            Self::Float(_) => "float",
            Self::Str(_) => "string",
            Self::Array(_) => "array",
            Self::Object(_) => "object",
        }
    }

    /// Returns `true` for null, booleans, numbers and strings.
    pub fn is_scalar(&self) -> bool {
        !matches!(self, Self::Array(_) | Self::Object(_))
    }

    pub fn is_float(&self) -> bool {
        matches!(self, Self::Float(_))
    }

    pub fn is_string(&self) -> bool {
        matches!(self, Self::Str(_))
    }

    pub fn as_array(&self) -> Option<&KeyedArray> {
        match self {
            Self::Array(array) => Some(array),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&ObjectValue> {
        match self {
            Self::Object(object) => Some(object),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Numeric reading of the value.
    ///
    /// Integers and floats are numeric. Strings are numeric when, after
    /// trimming surrounding whitespace, they parse as a finite decimal number
    /// (`"12"`, `" -1.5e3 "`). Spelled-out specials such as `"inf"` or `"NaN"`
    /// are not numeric.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Int(n) => Some(*n as f64),
            Self::Float(f) => Some(*f),
            Self::Str(s) => {
                let trimmed = s.trim();
                let spelled = trimmed
                    .chars()
                    .any(|c| c.is_ascii_alphabetic() && !matches!(c, 'e' | 'E'));
                if trimmed.is_empty() || spelled {
                    return None;
                }
                trimmed.parse::<f64>().ok().filter(|f| f.is_finite())
            }
            _ => None,
        }
    }

    pub fn is_numeric(&self) -> bool {
        self.as_number().is_some()
    }
}

/// An object-like value: a class name plus a property collection.
#[derive(Clone, Debug, PartialEq)]
pub struct ObjectValue {
    pub class: String,
    pub properties: KeyedArray,
}

impl ObjectValue {
    /// Create an object of `class` with no properties.
    pub fn new(class: impl Into<String>) -> Self {
        Self {
            class: class.into(),
            properties: KeyedArray::new(),
        }
    }

    /// Builder-style property setter.
    pub fn with_property(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.properties.insert(name.into(), value);
        self
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Self::Int(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Self::Int(i64::from(n))
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Self::Float(f)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::Str(s.to_owned())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::Str(s)
    }
}

impl From<KeyedArray> for Value {
    fn from(array: KeyedArray) -> Self {
        Self::Array(array)
    }
}

impl From<ObjectValue> for Value {
    fn from(object: ObjectValue) -> Self {
        Self::Object(object)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}
