//! Reading `go env` output into a typed struct.
//!
//! Run with: cargo run --example go_env

use serde::{Deserialize, Serialize};
use serde_vars::{from_str, to_string};
use std::error::Error;

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
struct GoEnv {
    goarch: String,
    goos: String,
    goroot: String,
    cc: String,
    gogccflags: String,
    cgo_enabled: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    goamd64: Option<String>,
}

const GO_ENV: &str = r#"GOARCH="amd64"
GOHOSTARCH="amd64"
GOHOSTOS="linux"
GOOS="linux"
GOPATH="/go-workspace"
GOROOT="/usr/lib/golang"
CC="gcc"
CXX="g++"
GOGCCFLAGS="-fPIC -m64 -pthread -fmessage-length=0"
CGO_ENABLED="1"
CGO_CFLAGS="-g -O2"
CGO_CPPFLAGS=""
"#;

fn main() -> Result<(), Box<dyn Error>> {
    // Unknown keys are ignored, missing optional keys become None
    let env: GoEnv = from_str(GO_ENV)?;
    println!("{:#?}\n", env);

    println!("cgo is {}", if env.cgo_enabled { "on" } else { "off" });
    println!("building for {}/{}\n", env.goos, env.goarch);

    // Booleans are written back in their canonical spelling
    println!("Written back:");
    print!("{}", to_string(&env)?);

    Ok(())
}
