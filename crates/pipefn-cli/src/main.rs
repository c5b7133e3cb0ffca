use std::collections::BTreeMap;
use std::path::PathBuf;

use pipefn_pack::{EmbedSpec, FlatFileBundler, Packager, PassthroughDowngrader, TypeRef};

fn main() {
    // Cargar .env si existe (p.ej. RUST_LOG)
    let _ = dotenvy::dotenv();
    env_logger::init();

    // CLI mínima:
    // `pipefn build --entry <FILE> --out <FILE> --name <MANIFEST> --step <STEP>
    //               --function <FN> --xr-api-version <V> --xr-kind <K>
    //               [--annotation k=v]... [--value k=v]...`
    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 || args[1] != "build" {
        eprintln!("usage: pipefn build --entry <FILE> --out <FILE> --name <MANIFEST> --step <STEP> --function <FN> --xr-api-version <V> --xr-kind <K> [--annotation k=v]... [--value k=v]...");
        std::process::exit(2);
    }

    let mut entry: Option<PathBuf> = None;
    let mut out: Option<PathBuf> = None;
    let mut name: Option<String> = None;
    let mut step: Option<String> = None;
    let mut function: Option<String> = None;
    let mut xr_api_version: Option<String> = None;
    let mut xr_kind: Option<String> = None;
    let mut annotations: BTreeMap<String, String> = BTreeMap::new();
    let mut values: BTreeMap<String, String> = BTreeMap::new();

    let mut i = 2;
    while i < args.len() {
        match args[i].as_str() {
            "--entry" => {
                i += 1;
                if i < args.len() { entry = Some(PathBuf::from(&args[i])); }
            }
            "--out" => {
                i += 1;
                if i < args.len() { out = Some(PathBuf::from(&args[i])); }
            }
            "--name" => {
                i += 1;
                if i < args.len() { name = Some(args[i].clone()); }
            }
            "--step" => {
                i += 1;
                if i < args.len() { step = Some(args[i].clone()); }
            }
            "--function" => {
                i += 1;
                if i < args.len() { function = Some(args[i].clone()); }
            }
            "--xr-api-version" => {
                i += 1;
                if i < args.len() { xr_api_version = Some(args[i].clone()); }
            }
            "--xr-kind" => {
                i += 1;
                if i < args.len() { xr_kind = Some(args[i].clone()); }
            }
            "--annotation" => {
                i += 1;
                if i < args.len() {
                    if let Some((k, v)) = args[i].split_once('=') {
                        annotations.insert(k.to_string(), v.to_string());
                    }
                }
            }
            "--value" => {
                i += 1;
                if i < args.len() {
                    if let Some((k, v)) = args[i].split_once('=') {
                        values.insert(k.to_string(), v.to_string());
                    }
                }
            }
            _ => {}
        }
        i += 1;
    }

    let (entry, out) = match (entry, out) {
        (Some(e), Some(o)) => (e, o),
        _ => {
            eprintln!("[pipefn build] --entry y --out son obligatorios");
            std::process::exit(2);
        }
    };

    let spec = EmbedSpec { manifest_name: name.unwrap_or_else(|| "function-pipeline".to_string()),
                           step_name: step.unwrap_or_else(|| "run-the-function".to_string()),
                           function_name: function.unwrap_or_else(|| "function-inline".to_string()),
                           composite_type_ref: TypeRef { api_version: xr_api_version.unwrap_or_else(|| "example.org/v1".to_string()),
                                                         kind: xr_kind.unwrap_or_else(|| "XR".to_string()) },
                           annotations,
                           values };

    let packager = Packager::new(FlatFileBundler, PassthroughDowngrader);
    match packager.build_to(&entry, &spec, &out) {
        Ok(digest) => {
            println!("wrote {} (digest {})", out.display(), digest);
        }
        Err(e) => {
            eprintln!("[pipefn build] error: {e}");
            std::process::exit(4);
        }
    }
}
