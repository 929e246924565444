use std::process;

fn main() {
    if let Err(e) = cipher_lab::cli::run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
