use std::fs;
use std::path::Path;
use std::sync::Arc;

use serde::Deserialize;
use tempfile::TempDir;

use confusion::adapters::{OsFs, StaticEnv};
use confusion::{ConfigLoader, DecoderRegistry, LoadError, Options};

#[derive(Debug, Default, Deserialize)]
struct Config {
    message: String,
    #[serde(default)]
    port: u16,
}

fn write(path: &Path, contents: &str) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, contents).unwrap();
}

fn loader_for(root: &Path) -> ConfigLoader {
    let env = StaticEnv::new().with("ROOT", root.to_str().unwrap());
    ConfigLoader::new(Arc::new(OsFs::new()), Arc::new(env))
}

#[test]
fn loads_first_decodable_file_from_disk() {
    let temp_dir = TempDir::new().unwrap();
    write(&temp_dir.path().join("system/app/config.json"), "{ not json");
    write(
        &temp_dir.path().join("user/app/config.json"),
        r#"{"message": "from disk", "port": 8080}"#,
    );
    let options = Options::new("app")
        .paths(["$ROOT/missing", "$ROOT/system", "${ROOT}/user"])
        .with_registry(DecoderRegistry::standard());

    let (result, trace) = loader_for(temp_dir.path()).load_traced::<Config>("config.json", &options);

    let loaded = result.unwrap();
    assert_eq!(loaded.path, temp_dir.path().join("user/app/config.json"));
    assert_eq!(loaded.value.message, "from disk");
    assert_eq!(loaded.value.port, 8080);
    assert_eq!(trace.decode_failures().count(), 1);
}

#[test]
fn directory_named_like_the_file_is_skipped() {
    let temp_dir = TempDir::new().unwrap();
    fs::create_dir_all(temp_dir.path().join("a/app/config.toml")).unwrap();
    write(&temp_dir.path().join("b/app/config.toml"), "message = \"b\"");
    let options = Options::new("app")
        .paths(["$ROOT/a", "$ROOT/b"])
        .with_registry(DecoderRegistry::standard());
    let mut config = Config::default();

    let path = loader_for(temp_dir.path())
        .load_into("config.toml", &options, &mut config)
        .unwrap();

    assert_eq!(path, temp_dir.path().join("b/app/config.toml"));
    assert_eq!(config.message, "b");
}

#[test]
fn file_without_extension_needs_a_decoder() {
    let temp_dir = TempDir::new().unwrap();
    write(&temp_dir.path().join("app/config"), "message = \"x\"");
    let options: Options<Config> = Options::new("app")
        .path("$ROOT")
        .with_registry(DecoderRegistry::standard());

    let result = loader_for(temp_dir.path()).load("config", &options);

    match result {
        Err(LoadError::DecoderNotFound { extension, .. }) => assert_eq!(extension, ""),
        other => panic!("expected DecoderNotFound, got {other:?}"),
    }
}
