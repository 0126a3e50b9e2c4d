use clap::Parser;
use ogp::application::{init::init, BuildOptions, BuildService, RenderService};
use ogp::cli::{format_build_summary, format_tag_list, format_types, Cli, Commands};
use ogp::error::OgpError;
use ogp::infrastructure::FileSystemRepository;
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();

    // Logs go to stderr so rendered tags can be piped
    let filter = match cli.verbose {
        0 if cli.quiet => "error",
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match run(cli) {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn run(cli: Cli) -> Result<(), OgpError> {
    match cli.command {
        Commands::Init {
            path,
            site_name,
            locales,
        } => {
            init(&path, site_name, locales)?;
            println!("Initialized ogp site at {}", path.display());
            Ok(())
        }
        Commands::Render { file, config, list } => {
            let service = RenderService::for_document(&file, config.as_deref())?;
            let meta = service.execute(&file)?;
            if list {
                print!("{}", format_tag_list(&meta));
            } else {
                println!("{}", meta.to_html());
            }
            Ok(())
        }
        Commands::Build { path, out } => {
            let repo = FileSystemRepository::discover_from(&path)?;
            let service = BuildService::new(repo);
            let summary = service.execute(BuildOptions { out_dir: out })?;
            print!("{}", format_build_summary(&summary));
            Ok(())
        }
        Commands::Types => {
            print!("{}", format_types());
            Ok(())
        }
    }
}
