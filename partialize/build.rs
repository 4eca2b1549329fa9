use toml::Value as TomlVal;

fn codegen_dependency_version(manifest: &TomlVal) -> Result<&str, &'static str> {
    let TomlVal::Table(deps) = manifest.get("dependencies").ok_or("manifest has no dependencies")? else {
        return Err("expected dependencies to be a table")
    };
    let TomlVal::Table(codegen_dep) = deps.get("partialize_codegen").ok_or("partialize_codegen is not a dependency")? else {
        return Err("expected partialize_codegen dep to be a table")
    };
    match codegen_dep.get("version") {
        Some(TomlVal::String(version)) => Ok(version.as_str()),
        _ => Err("expected partialize_codegen dep to have a string version"),
    }
}

fn main(){
    println!("cargo::rerun-if-changed=Cargo.toml");

    let crate_ver = std::env::var("CARGO_PKG_VERSION").unwrap();
    let manifest_path = std::env::var("CARGO_MANIFEST_PATH").unwrap();
    let manifest: TomlVal = toml::from_slice(&std::fs::read(&manifest_path).unwrap()).unwrap();

    match codegen_dependency_version(&manifest) {
        Err(message) => println!("cargo::error={message}"),
        Ok(codegen_ver) if codegen_ver != crate_ver => println!(
            "cargo::error=Crate partialize ({crate_ver}) has different version number from partialize_codegen ({codegen_ver})"
        ),
        Ok(_) => (),
    }
}
