// quickforms: resolve form setup file locations and assemble the forms they describe.
// Usage: quickforms resolve --root <DIR> --dir <SUBDIR> [--file <NAME>]
//        quickforms load --config <FILE> [--defaults <FILE>] [--bundle-dir <DIR>]

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use quickforms::config::{effective_config, load_defaults, read_bundle_config, RawBundleConfig};
use quickforms::forms::{FormType, PlainFormFactory};
use quickforms::{load_setup_info, OsProbe, PathResolver, QuickForms};

#[derive(Parser, Debug)]
#[command(name = "quickforms", version, about = "Build forms from YAML setup files")]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug). `RUST_LOG` takes precedence.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the existing directories (or files) built from roots, sub paths and file names.
    Resolve {
        /// Root directory; repeat for several.
        #[arg(long = "root", required = true)]
        roots: Vec<String>,
        /// Sub directory, absolute or relative to each root; repeat for several.
        #[arg(long = "dir", required = true)]
        dirs: Vec<String>,
        /// File name to look for in every resolved directory; repeat for several.
        #[arg(long = "file")]
        files: Vec<String>,
    },
    /// Load the bundle configuration, read every form setup file and print the forms as JSON.
    Load {
        /// Application config file holding a `quick_forms` section.
        #[arg(long)]
        config: PathBuf,
        /// Bundle defaults file; may contain `__BUNDLE_DIR__`.
        #[arg(long)]
        defaults: Option<String>,
        /// Directory substituted for `__BUNDLE_DIR__`. Defaults to the current directory.
        #[arg(long)]
        bundle_dir: Option<PathBuf>,
    },
}

fn init_tracing(verbose: u8) {
    let fallback = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Command::Resolve { roots, dirs, files } => {
            let resolver = PathResolver::new(OsProbe);
            let files = (!files.is_empty()).then_some(files.as_slice());
            let paths = resolver
                .resolve(Some(roots.as_slice()), Some(dirs.as_slice()), files)
                .context("Failed to resolve paths")?;
            for path in paths {
                println!("{path}");
            }
        }
        Command::Load {
            config,
            defaults,
            bundle_dir,
        } => {
            let bundle_dir = match bundle_dir {
                Some(dir) => dir,
                None => std::env::current_dir().context("Failed to read current directory")?,
            };
            let bundle_dir = bundle_dir.to_string_lossy();

            let defaults = match defaults {
                Some(path) => load_defaults(&path, &bundle_dir)?,
                None => RawBundleConfig::default(),
            };
            let user = read_bundle_config(&config)
                .with_context(|| format!("Failed to load config {}", config.display()))?;
            let bundle = effective_config(user, defaults, &bundle_dir)?;

            let setup = load_setup_info(&bundle, OsProbe).context("Failed to load form setup")?;
            tracing::info!(resources = setup.resources.len(), "form setup loaded");

            let forms = QuickForms::new(
                setup.forms,
                FormType::new(bundle.form_class_prefix.as_str()),
                PlainFormFactory,
            );
            let json = serde_json::to_string_pretty(&forms.load_forms())
                .context("Failed to serialize forms")?;
            println!("{json}");
        }
    }

    Ok(())
}
