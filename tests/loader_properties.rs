use proptest::prelude::*;
use serde_json::{json, Map, Value};
use themeconf::{ConfigLoader, ConfigWarning};

fn token_name() -> impl Strategy<Value = String> {
    prop_oneof![
        prop::sample::select(vec![
            "base", "surface", "text", "accent", "header-bg", "link", "link-hover",
        ])
        .prop_map(str::to_string),
        "[a-z][a-z0-9-]{0,12}",
    ]
}

fn token_value() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-z][a-z0-9-]{0,12}".prop_map(|name| format!("var(--{name})")),
        "#[0-9a-f]{6}",
        Just(String::new()),
    ]
}

fn document(colors: &Map<String, Value>, globs: &[String]) -> Value {
    json!({
        "content": globs,
        "theme": {"extend": {
            "colors": colors,
            "borderRadius": {"DEFAULT": "var(--radius)"},
            "fontSize": {"base": "1rem", "xl": 3}
        }},
        "plugins": []
    })
}

prop_compose! {
    fn colors()(entries in prop::collection::btree_map(token_name(), token_value(), 0..25))
        -> Map<String, Value> {
        entries.into_iter().map(|(k, v)| (k, Value::String(v))).collect()
    }
}

proptest! {
    /// Property: every input color survives with its value unchanged
    #[test]
    fn prop_colors_preserved_verbatim(
        colors in colors(),
        globs in prop::collection::vec("[a-z*/]{0,10}", 0..5),
    ) {
        let outcome = ConfigLoader::load_value(&document(&colors, &globs)).unwrap();
        let tokens = outcome.config.color_tokens();
        for (name, value) in &colors {
            prop_assert_eq!(Some(value.as_str().unwrap()), tokens.get(name).map(String::as_str));
        }
    }

    /// Property: loading a re-serialized configuration yields the same object
    #[test]
    fn prop_reload_is_idempotent(
        colors in colors(),
        globs in prop::collection::vec("[a-z*/]{0,10}", 0..5),
    ) {
        let first = ConfigLoader::load_value(&document(&colors, &globs)).unwrap();
        let second = ConfigLoader::load_value(&first.config.to_document()).unwrap();
        prop_assert_eq!(&first.config, &second.config);

        let yaml = serde_yaml::to_string(&first.config.to_document()).unwrap();
        let third = ConfigLoader::load_str(&yaml, themeconf::SourceFormat::Yaml).unwrap();
        prop_assert_eq!(&first.config, &third.config);
    }

    /// Property: only empty globs are dropped, and each one is reported
    #[test]
    fn prop_empty_globs_reported(globs in prop::collection::vec("[a-z*]{0,3}", 0..8)) {
        let outcome = ConfigLoader::load_value(&document(&Map::new(), &globs)).unwrap();
        let kept: Vec<&String> = globs.iter().filter(|g| !g.is_empty()).collect();
        prop_assert_eq!(outcome.config.content_globs().len(), kept.len());

        let reported = outcome
            .warnings
            .iter()
            .filter(|w| matches!(w, ConfigWarning::EmptyGlob { .. }))
            .count();
        prop_assert_eq!(reported, globs.len() - kept.len());
    }

    /// Property: an empty value always warns with the token's path
    #[test]
    fn prop_empty_values_warn(colors in colors()) {
        let outcome = ConfigLoader::load_value(&document(&colors, &[])).unwrap();
        for (name, value) in &colors {
            if value.as_str() == Some("") {
                let expected = ConfigWarning::EmptyValue { path: format!("colors.{name}") };
                prop_assert!(outcome.warnings.contains(&expected));
            }
        }
    }
}
