fn main() {
    if let Err(e) = faxc::main() {
        eprintln!("error: {e}");
        std::process::exit(e.exit_code());
    }
}
