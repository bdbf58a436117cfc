// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::io::Write;

/// Environment variables read by the CLI, with what each one controls.
const VARS: &[(&str, &str)] = &[
    ("CSVSEEK_LOG", "Tracing filter directives for stderr logging."),
    ("CSVSEEK_CONFIG_DIR", "Directory searched for the user-level config.toml."),
];

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let out_dir = std::env::var("OUT_DIR")?;
    let path = std::path::Path::new(&out_dir).join("env_vars.rs");
    let mut f = std::fs::File::create(path)?;

    for (name, doc) in VARS {
        writeln!(f, "/// {doc}")?;
        writeln!(f, "pub const {name}: &str = \"{name}\";")?;
    }

    println!("cargo:rerun-if-changed=build.rs");
    Ok(())
}
