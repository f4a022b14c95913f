// This binary crate is intentionally minimal.
// All fitting logic lives in the library (src/lib.rs and its modules).
// Run demos with:
//   cargo run --example headless
fn main() {
    println!("descent-lab: an interactive gradient-descent teaching tool.");
    println!("Run `cargo run --bin studio` for the browser UI,");
    println!("or `cargo run --example headless` for a terminal-only fit.");
}
