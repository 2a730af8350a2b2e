use std::io::Write;
use std::path::Path;

use anyhow::Result;
use scriptrun::script::ScriptSet;
use tempfile::NamedTempFile;

#[test]
fn load_fills_names_from_map_keys() -> Result<()> {
    let mut file = NamedTempFile::new()?;
    write!(
        file,
        r#"{{"scripts": {{"hello": {{"script": "42", "input_types": ["i64"], "return_type": "i64"}}}}}}"#
    )?;

    let set = ScriptSet::load(file.path())?;
    let def = set.scripts.get("hello").expect("definition present");
    assert_eq!(def.name, "hello");
    Ok(())
}

#[test]
fn explicit_name_is_kept() -> Result<()> {
    let mut file = NamedTempFile::new()?;
    write!(
        file,
        r#"{{"scripts": {{"hello": {{"name": "greeter", "script": "42", "input_types": ["i64"], "return_type": "i64"}}}}}}"#
    )?;

    let set = ScriptSet::load(file.path())?;
    let def = set.scripts.get("hello").expect("definition present");
    assert_eq!(def.name, "greeter");
    Ok(())
}

#[test]
fn missing_file_error_carries_the_path() {
    let err = ScriptSet::load(Path::new("no-such-scripts.json")).unwrap_err();
    assert!(
        format!("{:#}", err).contains("no-such-scripts.json"),
        "unexpected error: {:#}",
        err
    );
}

#[test]
fn malformed_json_is_rejected() -> Result<()> {
    let mut file = NamedTempFile::new()?;
    write!(file, "not json")?;
    assert!(ScriptSet::load(file.path()).is_err());
    Ok(())
}

#[test]
fn shipped_scripts_file_is_valid() -> Result<()> {
    let set = ScriptSet::load(Path::new("scripts.json"))?;
    assert!(!set.scripts.is_empty());
    for def in set.scripts.values() {
        def.validate()?;
    }
    Ok(())
}
