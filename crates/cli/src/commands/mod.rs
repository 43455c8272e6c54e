pub(crate) mod extract;

use std::process;

use tokio::runtime::Runtime;

/// Single-threaded runtime: trials are awaited one at a time anyway.
pub(crate) fn runtime() -> Runtime {
    match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(rt) => rt,
        Err(e) => {
            eprintln!("error: failed to create tokio runtime: {}", e);
            process::exit(1);
        }
    }
}
