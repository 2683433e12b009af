//! Plural rules.
//!
//! A [`PluralRule`] maps a number to a CLDR plural category and knows the
//! ordered list of categories its language uses. The position of a category
//! in that list is the slot index operators select with, so
//! `%{n -> файл,файла,файлов}` lines up with Russian's `[one, few, many, other]`.
//!
//! English and Russian are hand-written and follow the exact semantics the
//! templates were authored against (English treats only `1` as singular).
//! Any other language can be backed by ICU4X data through [`CldrRule`].

use std::cell::RefCell;

use fixed_decimal::Decimal;
use icu_locale_core::Locale;
use icu_plurals::{PluralCategory, PluralOperands, PluralRuleType, PluralRules};

use crate::interpreter::ConfigError;
use crate::types::PluralForm;

/// A language's plural rule.
///
/// Implementations are stateless and must be total over `f64`, including
/// fractions, NaN and infinities.
pub trait PluralRule: Send + Sync {
    /// The forms this language distinguishes, in slot order.
    ///
    /// Never contains duplicates and always contains [`PluralForm::Other`].
    fn forms(&self) -> &[PluralForm];

    /// The plural form of `number`.
    fn form(&self, number: f64) -> PluralForm;

    /// The slot index of `number`'s form, or `None` if the rule produced a
    /// form missing from its own form list.
    fn form_index(&self, number: f64) -> Option<usize> {
        let form = self.form(number);
        self.forms().iter().position(|f| *f == form)
    }
}

/// English-style rule: `one` for exactly 1, `other` for everything else.
///
/// Used for English and Italian.
#[derive(Debug, Clone, Copy, Default)]
pub struct English;

impl PluralRule for English {
    fn forms(&self) -> &[PluralForm] {
        &[PluralForm::One, PluralForm::Other]
    }

    fn form(&self, number: f64) -> PluralForm {
        if number == 1.0 {
            PluralForm::One
        } else {
            PluralForm::Other
        }
    }
}

/// Russian cardinal rule: `one`, `few`, `many`, `other`.
///
/// Fractions are `other`. For integers the last one and two digits decide:
/// 1, 21, 31 are `one`; 2-4, 22-24 are `few`; 0, 5-20, 25-30 are `many`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Russian;

impl PluralRule for Russian {
    fn forms(&self) -> &[PluralForm] {
        &[
            PluralForm::One,
            PluralForm::Few,
            PluralForm::Many,
            PluralForm::Other,
        ]
    }

    fn form(&self, number: f64) -> PluralForm {
        if !number.is_finite() || number.fract() != 0.0 {
            return PluralForm::Other;
        }

        // Remainders keep the sign of `number`, so negatives fall through to `other`.
        let mod10 = number % 10.0;
        let mod100 = number % 100.0;

        if mod10 == 1.0 && mod100 != 11.0 {
            PluralForm::One
        } else if (2.0..=4.0).contains(&mod10) && !(12.0..=14.0).contains(&mod100) {
            PluralForm::Few
        } else if mod10 == 0.0 || (5.0..=9.0).contains(&mod10) || (11.0..=14.0).contains(&mod100)
        {
            PluralForm::Many
        } else {
            PluralForm::Other
        }
    }
}

thread_local! {
    /// Per-thread cache of ICU `PluralRules` keyed by language tag.
    static CLDR_RULES_CACHE: RefCell<Vec<(String, PluralRules)>> = const { RefCell::new(Vec::new()) };
}

/// A rule backed by ICU4X CLDR cardinal plural data.
///
/// The form list is the set of categories the locale defines, in canonical
/// order (zero, one, two, few, many, other). ICU `PluralRules` are built
/// lazily and cached per thread.
///
/// # Example
///
/// ```
/// use tongue::{CldrRule, PluralForm, PluralRule};
///
/// let polish = CldrRule::try_new("pl").unwrap();
/// assert_eq!(polish.forms(), &[PluralForm::One, PluralForm::Few, PluralForm::Many, PluralForm::Other]);
/// assert_eq!(polish.form(22.0), PluralForm::Few);
/// ```
#[derive(Debug, Clone)]
pub struct CldrRule {
    tag: String,
    locale: Locale,
    forms: Vec<PluralForm>,
}

impl CldrRule {
    /// Build a rule for a BCP-47 language tag.
    pub fn try_new(language: &str) -> Result<Self, ConfigError> {
        let locale: Locale = language.parse().map_err(|e: icu_locale_core::ParseError| {
            ConfigError::InvalidLocale {
                language: language.to_string(),
                reason: e.to_string(),
            }
        })?;
        let rules = build_rules(&locale).map_err(|e| ConfigError::MissingPluralData {
            language: language.to_string(),
            reason: e.to_string(),
        })?;

        let mut forms: Vec<PluralForm> = rules.categories().map(form_of).collect();
        forms.push(PluralForm::Other);
        forms.sort();
        forms.dedup();

        let tag = locale.to_string();
        CLDR_RULES_CACHE.with_borrow_mut(|cache| {
            if !cache.iter().any(|(code, _)| *code == tag) {
                cache.push((tag.clone(), rules));
            }
        });

        Ok(Self { tag, locale, forms })
    }

    /// The normalized language tag this rule was built for.
    pub fn language(&self) -> &str {
        &self.tag
    }
}

impl PluralRule for CldrRule {
    fn forms(&self) -> &[PluralForm] {
        &self.forms
    }

    fn form(&self, number: f64) -> PluralForm {
        let Some(operands) = operands(number) else {
            return PluralForm::Other;
        };
        CLDR_RULES_CACHE.with_borrow_mut(|cache| {
            if let Some((_, rules)) = cache.iter().find(|(code, _)| *code == self.tag) {
                return form_of(rules.category_for(operands));
            }
            match build_rules(&self.locale) {
                Ok(rules) => {
                    let form = form_of(rules.category_for(operands));
                    cache.push((self.tag.clone(), rules));
                    form
                }
                Err(_) => PluralForm::Other,
            }
        })
    }
}

fn build_rules(locale: &Locale) -> Result<PluralRules, icu_provider::DataError> {
    PluralRules::try_new(locale.clone().into(), PluralRuleType::Cardinal.into())
}

/// Convert a number into ICU plural operands.
///
/// Whole numbers go through the integer path; fractions are rendered and
/// parsed as a decimal so their visible digits count. Non-finite numbers
/// have no operands.
fn operands(number: f64) -> Option<PluralOperands> {
    if !number.is_finite() {
        return None;
    }
    if number.fract() == 0.0 && number.abs() < 9_007_199_254_740_992.0 {
        return Some(PluralOperands::from(number as i64));
    }
    let decimal: Decimal = number.to_string().parse().ok()?;
    Some(PluralOperands::from(&decimal))
}

/// Translate an ICU `PluralCategory` into a [`PluralForm`].
fn form_of(category: PluralCategory) -> PluralForm {
    match category {
        PluralCategory::Zero => PluralForm::Zero,
        PluralCategory::One => PluralForm::One,
        PluralCategory::Two => PluralForm::Two,
        PluralCategory::Few => PluralForm::Few,
        PluralCategory::Many => PluralForm::Many,
        PluralCategory::Other => PluralForm::Other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn russian_teens_are_many() {
        for n in 11..=14 {
            assert_eq!(Russian.form(n as f64), PluralForm::Many, "n = {n}");
        }
        assert_eq!(Russian.form(111.0), PluralForm::Many);
        assert_eq!(Russian.form(112.0), PluralForm::Many);
    }

    #[test]
    fn russian_negative_numbers_fall_back_to_other() {
        assert_eq!(Russian.form(-1.0), PluralForm::Other);
        assert_eq!(Russian.form(-2.0), PluralForm::Other);
    }

    #[test]
    fn rules_are_total_over_non_finite_numbers() {
        for n in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            assert_eq!(English.form(n), PluralForm::Other);
            assert_eq!(Russian.form(n), PluralForm::Other);
        }
    }

    #[test]
    fn operands_keep_fraction_digits() {
        let rule = CldrRule::try_new("pl").unwrap();
        assert!(operands(1.5).is_some());
        assert_eq!(rule.form(1.5), PluralForm::Other);
        assert_eq!(rule.form(2.0), PluralForm::Few);
        assert!(operands(f64::NAN).is_none());
    }
}
