//! Builds the game for the browser and gathers everything a static file
//! server needs into one directory.
//!
//! The output directory defaults to `dist` and can be moved with `PACK_OUT_DIR`.

use std::{
    env, fs,
    io::{self, Write},
    path::Path,
    process::{exit, Command},
};

const WASM_LIB: &str = "tanks_wasm";
const WASM_TARGET: &str = "wasm32-unknown-unknown";

fn main() {
    let output_dir = env::var("PACK_OUT_DIR").unwrap_or_else(|_| String::from("dist"));
    let wasm_path = format!("target/{}/release/{}.wasm", WASM_TARGET, WASM_LIB);

    println!("\n📦 Packaging the game into '{}'\n", output_dir);

    run_step(
        "compile",
        Command::new("cargo")
            .arg("build")
            .args(["-p", WASM_LIB])
            .arg("--lib")
            .args(["--target", WASM_TARGET])
            .arg("--release"),
    );

    run_step(
        "bindings",
        Command::new("wasm-bindgen")
            .arg(&wasm_path)
            .args(["--out-dir", &output_dir])
            .args(["--target", "web"])
            .arg("--no-typescript"),
    );

    let page = Path::new(WASM_LIB).join("index.html");
    if let Err(err) = fs::copy(&page, Path::new(&output_dir).join("index.html")) {
        fail("page", &format!("could not copy {}: {}", page.display(), err));
    }
    println!("[page] ✔");

    println!(
        "\n⚡ Done, serve './{}' and open index.html to play\n",
        output_dir
    );
}

fn run_step(name: &str, command: &mut Command) {
    println!("[{}] {:?}", name, command);
    let output = match command.output() {
        Ok(output) => output,
        Err(err) => fail(name, &format!("could not run: {}", err)),
    };

    if !output.status.success() {
        let _ = io::stdout().write_all(&output.stdout);
        let _ = io::stderr().write_all(&output.stderr);
        fail(name, &format!("exited with {}", output.status));
    }
    println!("[{}] ✔", name);
}

fn fail(step: &str, reason: &str) -> ! {
    eprintln!("[{}] ✖ {}", step, reason);
    exit(1);
}
