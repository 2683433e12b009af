//! CLI command implementations.

mod check;
mod coverage;
mod plural;
mod translate;

pub use check::{run_check, CheckArgs};
pub use coverage::{run_coverage, CoverageArgs};
pub use plural::{run_plural, PluralArgs};
pub use translate::{run_translate, TranslateArgs};

use miette::{IntoDiagnostic, Result};
use tongue::{PluralizerRegistry, Section, Value};

/// Parse a key=value parameter string.
fn parse_key_val(s: &str) -> Result<(String, String), String> {
    let pos = s
        .find('=')
        .ok_or_else(|| format!("invalid parameter format '{}': expected name=value", s))?;
    Ok((s[..pos].to_string(), s[pos + 1..].to_string()))
}

/// Parse a `name=value` parameter. Values become integers, then floats,
/// then strings, whichever parses first.
fn parse_param(s: &str) -> Result<(String, Value), String> {
    let (name, raw) = parse_key_val(s)?;
    let value = if let Ok(n) = raw.parse::<i64>() {
        Value::from(n)
    } else if let Ok(f) = raw.parse::<f64>() {
        Value::from(f)
    } else {
        Value::from(raw)
    };
    Ok((name, value))
}

/// Parse a section argument: numeric text is a section id.
fn parse_section(s: &str) -> Result<Section, String> {
    Ok(match s.parse::<u32>() {
        Ok(id) => Section::from(id),
        Err(_) => Section::from(s),
    })
}

/// Build a registry with `default_language` and extra CLDR languages.
fn build_registry(default_language: &str, cldr: &[String]) -> Result<PluralizerRegistry> {
    let mut registry = PluralizerRegistry::new(default_language).into_diagnostic()?;
    for language in cldr {
        registry.add_cldr_pluralizer(language).into_diagnostic()?;
    }
    Ok(registry)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn params_prefer_integers() {
        assert_eq!(parse_param("n=5").unwrap(), ("n".into(), Value::Number(5)));
        assert_eq!(parse_param("n=1.5").unwrap(), ("n".into(), Value::Float(1.5)));
        assert_eq!(
            parse_param("name=Ann=Lee").unwrap(),
            ("name".into(), Value::String("Ann=Lee".into()))
        );
        assert!(parse_param("novalue").is_err());
    }

    #[test]
    fn sections_parse_ids_and_names() {
        assert_eq!(parse_section("3").unwrap(), Section::Id(3));
        assert_eq!(parse_section("shop").unwrap(), Section::Name("shop".into()));
        assert_eq!(parse_section("").unwrap(), Section::Id(0));
    }

    #[test]
    fn registry_rejects_unknown_default() {
        assert!(build_registry("xx", &[]).is_err());
        let registry = build_registry("ru", &["pl".to_string()]).unwrap();
        assert!(registry.pluralizer("pl").is_some());
    }
}
