//! HLSL intrinsic tooling CLI.

use hlslc::commands::{CommandError, Driver, Report};

fn main() {
    hlslc::init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = args[1].as_str();

    match command {
        "help" | "--help" | "-h" => {
            print_usage();
            return;
        }
        "version" | "--version" | "-v" => {
            println!("hlslc {}", env!("CARGO_PKG_VERSION"));
            return;
        }
        "list" | "intrinsics" | "signatures" | "resolve" | "symbols" => {}
        _ => {
            eprintln!("Unknown command: {command}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    }

    let mut driver = match Driver::from_env() {
        Ok(driver) => driver,
        Err(err) => fail(&err),
    };

    let result = match command {
        "signatures" => {
            if args.len() < 3 {
                eprintln!("Usage: hlslc signatures <name>");
                std::process::exit(1);
            }
            driver.signatures(&args[2])
        }
        "resolve" => {
            if args.len() < 3 {
                eprintln!("Usage: hlslc resolve <name> [types...]");
                eprintln!();
                eprintln!("Prefix a type with `out:` to pass an output argument.");
                eprintln!("Example: hlslc resolve InterlockedAdd int int out:int");
                std::process::exit(1);
            }
            driver.resolve(&args[2], &args[3..])
        }
        "symbols" => {
            if args.len() < 3 {
                eprintln!("Usage: hlslc symbols <query>");
                std::process::exit(1);
            }
            driver.symbols(&args[2])
        }
        // `list` and `intrinsics`
        _ => driver.list(args.get(2).map_or("", String::as_str)),
    };

    match result {
        Ok(Report { text, failed }) => {
            println!("{text}");
            if failed {
                drop(driver);
                std::process::exit(1);
            }
        }
        Err(err) => fail(&err),
    }
}

fn fail(err: &CommandError) -> ! {
    eprintln!("error: {err}");
    std::process::exit(1);
}

fn print_usage() {
    println!("HLSL intrinsic tooling");
    println!();
    println!("Usage: hlslc <command> [arguments]");
    println!();
    println!("Commands:");
    println!("  list [prefix]             List intrinsic functions (alias: intrinsics)");
    println!("  signatures <name>         Show every overload of a function");
    println!("  resolve <name> [types...] Pick the overload a call would use");
    println!("  symbols <query>           Search function names (any case, substring)");
    println!("  help                      Show this help message");
    println!("  version                   Show version information");
    println!();
    println!("Environment:");
    println!("  RUST_LOG                  Log filter, e.g. hlsl_typeck=trace");
    println!("  HLSL_LOG_TREE             Log as an indented span tree");
    println!("  HLSL_WORKER_THREADS       Worker pool size (default: one per core)");
    println!();
    println!("Examples:");
    println!("  hlslc list Interlocked");
    println!("  hlslc signatures lerp");
    println!("  hlslc resolve max float int");
    println!("  hlslc resolve frexp float out:float");
    println!("  hlslc symbols barrier");
}
