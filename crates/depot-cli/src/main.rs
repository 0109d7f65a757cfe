mod cli;

use depot_core::api::ApiError;

fn main() {
    if let Err(e) = cli::run() {
        if matches!(e.downcast_ref::<ApiError>(), Some(ApiError::SessionExpired)) {
            eprintln!("Session expired. Run `depot login` to sign in again.");
            std::process::exit(1);
        }
        eprintln!("{e:#}"); // pretty anyhow chain
        std::process::exit(1);
    }
}
