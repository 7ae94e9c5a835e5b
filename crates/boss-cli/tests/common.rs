#![allow(dead_code)]

use std::{fs, path::Path};

use assert_cmd::assert::Assert;
use serde_json::Value;

pub fn write_manifest(dir: &Path, contents: &str) {
    fs::write(dir.join("boss.json"), contents).expect("write boss.json");
}

pub fn read_manifest(dir: &Path) -> Value {
    let contents = fs::read_to_string(dir.join("boss.json")).expect("read boss.json");
    serde_json::from_str(&contents).expect("valid boss.json")
}

pub fn dependencies(manifest: &Value) -> &serde_json::Map<String, Value> {
    manifest["dependencies"]
        .as_object()
        .expect("dependencies object")
}

pub fn parse_json(assert: &Assert) -> Value {
    serde_json::from_slice(&assert.get_output().stdout).expect("valid json output")
}
