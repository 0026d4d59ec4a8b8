//! jsx-distill CLI entry point

use std::process::ExitCode;

use tracing_subscriber::EnvFilter;

use jsx_distill::cli::{Command, ExtractArgs};
use jsx_distill::{extract, load_source, parse_source, render_tree, serve_stdio, Cli, DistillError};

fn main() -> ExitCode {
    let cli = Cli::parse_args();
    init_tracing(&cli.log_level);

    match run(cli) {
        Ok(Some(output)) => {
            println!("{}", output);
            ExitCode::SUCCESS
        }
        Ok(None) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            e.exit_code()
        }
    }
}

/// Log to stderr so stdout carries nothing but JSON
fn init_tracing(directive: &str) {
    let filter = EnvFilter::try_new(directive).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: Cli) -> jsx_distill::Result<Option<String>> {
    match cli.command {
        Command::Extract(args) => run_extract(&args).map(Some),
        Command::Serve => {
            let runtime = tokio::runtime::Runtime::new()?;
            let answered = runtime.block_on(serve_stdio())?;
            tracing::info!(answered, "transport finished");
            Ok(None)
        }
    }
}

fn run_extract(args: &ExtractArgs) -> jsx_distill::Result<String> {
    // 1. Check file exists, gate the extension, read it
    let (dialect, source) = load_source(&args.file)?;
    tracing::debug!(
        path = %args.file.display(),
        dialect = dialect.name(),
        bytes = source.len(),
        "read component source"
    );

    // 2. Parse with tree-sitter
    let tree = parse_source(&source)?;
    tracing::debug!(nodes = tree.root_node().descendant_count(), "parsed syntax tree");

    if args.print_ast {
        eprint!("{}", render_tree(&tree.root_node(), &source));
    }

    // 3. Extract the descriptor
    let descriptor = extract(&source, &tree);

    if args.strict {
        let issues = descriptor.validate();
        if !issues.is_empty() {
            return Err(DistillError::Validation { issues });
        }
    }

    // 4. Serialize
    let output = if args.compact {
        serde_json::to_string(&descriptor)?
    } else {
        serde_json::to_string_pretty(&descriptor)?
    };

    Ok(output)
}
