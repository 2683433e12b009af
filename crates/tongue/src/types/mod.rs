mod plural_form;
mod section;
mod translation_id;
mod value;

pub use plural_form::PluralForm;
pub use section::Section;
pub use translation_id::{TranslationEntry, TranslationId};
pub use value::Value;
