fn main() {
    if let Err(e) = fsinv_cli::run() {
        eprintln!("fsinv: {}", e);
        std::process::exit(1);
    }
}
