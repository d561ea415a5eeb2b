use clap::Parser;
use qshowcase_cli::{Cli, run};

fn main() {
    // Reset SIGPIPE so piping into `head` or `less` does not panic on early exit
    #[cfg(unix)]
    reset_sigpipe();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

#[cfg(unix)]
fn reset_sigpipe() {
    unsafe {
        libc::signal(libc::SIGPIPE, libc::SIG_DFL);
    }
}
