fn main() {
    if let Err(err) = snapgrid::run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
