//! Runtime translation lookup with plural and gender operators.
//!
//! Templates are stored per `(language, section, key)` and may contain
//! simple placeholders (`%{name}`) and operators that pick a variant by
//! count and gender (`%{count, sex -> он пришёл|она пришла,...}`).
//!
//! ```
//! use tongue::{TranslationEngine, TranslationEntry, TranslationId, TranslationStore, params};
//!
//! let mut engine = TranslationEngine::new();
//! let id = TranslationId::new("cart.items", "ru");
//! engine.store_mut().set(TranslationEntry::new(
//!     id.clone(),
//!     "%{n} %{n -> товар,товара,товаров}",
//! ));
//!
//! assert_eq!(engine.translate(&id, &params! { "n" => 3 }), "3 товара");
//! assert_eq!(engine.translate(&id, &params! { "n" => 11 }), "11 товаров");
//! ```

pub mod interpreter;
pub mod parser;
pub mod types;

pub use interpreter::{
    AuditEvent, AuditSink, CldrRule, ConfigError, English, MemoryStore, NullAuditSink,
    PluralRule, PluralizerRegistry, RecordingAuditSink, Russian, TracingAuditSink,
    TranslationEngine, TranslationStore, is_valid_key,
};
pub use types::{PluralForm, Section, TranslationEntry, TranslationId, Value};

/// Creates a `HashMap<String, Value>` from key-value pairs.
///
/// Values are converted via `Into<Value>`, so integers, floats and strings
/// can be passed directly.
///
/// # Example
///
/// ```
/// use tongue::{params, Value};
///
/// let p = params! { "count" => 3, "name" => "Alice" };
/// assert_eq!(p.len(), 2);
/// assert_eq!(p["count"].as_number(), Some(3));
/// assert_eq!(p["name"].as_string(), Some("Alice"));
/// ```
#[macro_export]
macro_rules! params {
    {} => {
        ::std::collections::HashMap::<String, $crate::Value>::new()
    };
    { $($key:expr => $value:expr),+ $(,)? } => {
        {
            let mut map = ::std::collections::HashMap::<String, $crate::Value>::new();
            $(
                map.insert($key.to_string(), ::std::convert::Into::<$crate::Value>::into($value));
            )+
            map
        }
    };
}
