mod common;

use common::{TestResult, init_logging, name_aware_builder};
use elpath::{DialectKind, ParseError, PathConfig, PathError};
use elpath_engine::element::tests::create_test_tree;

#[test]
fn test_empty_config_uses_defaults() -> TestResult {
    init_logging();
    let config: PathConfig = serde_json::from_str("{}")?;
    assert_eq!(config, PathConfig::default());
    Ok(())
}

#[test]
fn test_partial_config() -> TestResult {
    init_logging();
    let config: PathConfig = serde_json::from_str(r#"{ "strict": false }"#)?;
    assert_eq!(config.dialect, DialectKind::Full);
    assert!(!config.strict);

    let config: PathConfig = serde_json::from_str(r#"{ "dialect": "minimal" }"#)?;
    assert_eq!(config.dialect, DialectKind::Minimal);
    assert!(config.strict);
    Ok(())
}

#[test]
fn test_unknown_dialect_is_rejected() {
    init_logging();
    assert!(serde_json::from_str::<PathConfig>(r#"{ "dialect": "extended" }"#).is_err());
}

#[test]
fn test_config_serializes_lowercase() -> TestResult {
    init_logging();
    let json = serde_json::to_string(&PathConfig::default())?;
    assert_eq!(json, r#"{"dialect":"full","strict":true,"max_depth":512}"#);
    Ok(())
}

#[test]
fn test_loaded_max_depth_bounds_nesting() -> TestResult {
    init_logging();
    let config: PathConfig = serde_json::from_str(r#"{ "max_depth": 4 }"#)?;
    assert!(config.strict);
    let builder = name_aware_builder().with_config(config);
    assert_eq!(builder.build("root/node")?.execute(&create_test_tree(2, 2))?.len(), 2);
    assert!(matches!(
        builder.build("root/node/subnode"),
        Err(PathError::Parse(ParseError::TooDeep { limit: 4 }))
    ));
    Ok(())
}

#[test]
fn test_loaded_config_drives_compilation() -> TestResult {
    init_logging();
    let root = create_test_tree(3, 2);

    let lenient: PathConfig = serde_json::from_str(r#"{ "strict": false }"#)?;
    let path = name_aware_builder().with_config(lenient).build("/node trailing")?;
    assert_eq!(path.execute(&root)?.len(), 3);

    let strict = name_aware_builder().with_config(PathConfig::default());
    assert!(matches!(
        strict.build("/node trailing"),
        Err(PathError::Parse(ParseError::TrailingInput(_)))
    ));

    let minimal: PathConfig = serde_json::from_str(r#"{ "dialect": "minimal" }"#)?;
    let builder = name_aware_builder().with_config(minimal);
    assert_eq!(builder.config().dialect, DialectKind::Minimal);
    assert!(matches!(builder.build("/node"), Err(PathError::Parse(ParseError::Lex(_)))));
    // Literal-only paths still compile without punctuation.
    assert_eq!(builder.build("node")?.execute(&root)?.len(), 3);
    Ok(())
}
