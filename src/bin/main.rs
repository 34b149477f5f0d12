use std::env;

use loxide::Lox;

fn main() -> Result<(), anyhow::Error> {
    let mut args = env::args().skip(1).collect::<Vec<_>>();

    if args.len() == 1 {
        let mut lox = Lox::new();
        let filename = args.pop().unwrap();
        lox.run_file(filename.as_ref())?;

        // Indicate errors in the exit code, sysexits style
        if lox.had_error() {
            std::process::exit(65);
        }
        if lox.had_runtime_error() {
            std::process::exit(70);
        }

        Ok(())
    } else {
        let bin_name = env!("CARGO_BIN_NAME");
        println!("Usage: {} <script>", bin_name);
        std::process::exit(64);
    }
}
