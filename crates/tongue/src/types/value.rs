/// A runtime value passed as a parameter to a translation.
///
/// Every value can be rendered into a simple placeholder. Numbers drive
/// plural selection, and small non-negative integers select a gender
/// variant.
///
/// # Example
///
/// ```
/// use tongue::Value;
///
/// let count: Value = 42.into();
/// assert_eq!(count.as_count(), 42.0);
///
/// let name: Value = "Alice".into();
/// assert_eq!(name.to_string(), "Alice");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// An integer number.
    Number(i64),

    /// A floating-point number.
    Float(f64),

    /// A string value.
    String(String),
}

impl Value {
    /// Get this value as an integer, if it is one.
    pub fn as_number(&self) -> Option<i64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Get this value as a float, if it is numeric.
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(f) => Some(*f),
            Value::Number(n) => Some(*n as f64),
            Value::String(_) => None,
        }
    }

    /// Get this value as a string, if it is one.
    pub fn as_string(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// The number this value stands for when used as a plural count.
    ///
    /// Strings are parsed after trimming; anything that is not a number
    /// counts as NaN, which every rule maps to its catch-all form.
    pub fn as_count(&self) -> f64 {
        match self {
            Value::String(s) => s.trim().parse().unwrap_or(f64::NAN),
            _ => self.as_float().unwrap_or(f64::NAN),
        }
    }

    /// The variant position this value selects when used as a gender.
    ///
    /// Only non-negative whole numbers (or strings spelling one) select a
    /// position.
    pub fn as_index(&self) -> Option<usize> {
        match self {
            Value::Number(n) => usize::try_from(*n).ok(),
            Value::Float(f) if f.fract() == 0.0 && *f >= 0.0 && *f <= u32::MAX as f64 => {
                Some(*f as usize)
            }
            Value::Float(_) => None,
            Value::String(s) => s.parse().ok(),
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Number(n) => write!(f, "{n}"),
            Value::Float(n) => write!(f, "{n}"),
            Value::String(s) => write!(f, "{s}"),
        }
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Number(n as i64)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Number(n)
    }
}

impl From<u32> for Value {
    fn from(n: u32) -> Self {
        Value::Number(i64::from(n))
    }
}

impl From<u64> for Value {
    /// Values beyond `i64::MAX` saturate.
    fn from(n: u64) -> Self {
        Value::Number(i64::try_from(n).unwrap_or(i64::MAX))
    }
}

impl From<usize> for Value {
    /// Values beyond `i64::MAX` saturate.
    fn from(n: usize) -> Self {
        Value::Number(i64::try_from(n).unwrap_or(i64::MAX))
    }
}

impl From<f32> for Value {
    fn from(n: f32) -> Self {
        Value::Float(n as f64)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Float(n)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unsigned_values_saturate() {
        assert_eq!(Value::from(u64::MAX), Value::Number(i64::MAX));
        assert_eq!(Value::from(usize::MAX), Value::Number(i64::MAX));
        assert_eq!(Value::from(7_u64), Value::Number(7));
        assert!(Value::from(u64::MAX).as_count() > 0.0);
    }

    #[test]
    fn counts_from_every_variant() {
        assert_eq!(Value::from(3).as_count(), 3.0);
        assert_eq!(Value::from(1.5).as_count(), 1.5);
        assert_eq!(Value::from(" 21 ").as_count(), 21.0);
        assert!(Value::from("many").as_count().is_nan());
    }
}
