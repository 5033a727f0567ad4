use std::fs;
use std::net::IpAddr;
use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use tailwind_playground::config::PlaygroundConfig;
use tailwind_playground::palette::{swatches, ColorClass, Utility};
use tailwind_playground::snippets::{self, Category};
use tailwind_playground::{PlaygroundError, SettingsStore};

#[derive(Parser)]
#[command(name = "twplay", version)]
#[command(about = "Tailwind Playground: edit HTML with Tailwind classes in a sandboxed live preview")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the playground server
    Serve {
        /// Seed the editor from this file and reload when it changes
        #[arg(long)]
        file: Option<PathBuf>,

        /// Server port
        #[arg(long)]
        port: Option<u16>,

        /// Address to bind
        #[arg(long)]
        host: Option<IpAddr>,

        /// JSON config file
        #[arg(long)]
        config: Option<PathBuf>,

        /// Settings file (default: platform data directory)
        #[arg(long)]
        settings: Option<PathBuf>,

        /// Let links inside the preview navigate
        #[arg(long)]
        allow_links: bool,
    },

    /// Print the preview document for an HTML fragment
    Render {
        /// Input HTML file
        file: PathBuf,

        /// Write output to file instead of stdout
        #[arg(short)]
        o: Option<PathBuf>,
    },

    /// List gallery snippets
    Snippets {
        /// Only this category (Buttons, Cards, Forms, Navigation)
        #[arg(long)]
        category: Option<String>,
    },

    /// Print one snippet's code
    Snippet {
        /// Snippet title, case-insensitive
        title: String,
    },

    /// List palette color classes, or check one
    Colors {
        #[arg(long, value_enum, default_value_t = UtilityArg::Bg)]
        utility: UtilityArg,

        /// A class such as `text-red-500` to validate
        class: Option<String>,
    },

    /// Write the document as a downloadable HTML file
    Export {
        /// Source file (default: the saved document)
        file: Option<PathBuf>,

        /// Output path (default: tailwind-playground.html)
        #[arg(short)]
        o: Option<PathBuf>,

        /// Settings file (default: platform data directory)
        #[arg(long)]
        settings: Option<PathBuf>,
    },

    /// Show or reset the onboarding tour state
    Tour {
        /// Show the onboarding prompt again on next start
        #[arg(long)]
        reset: bool,

        /// Settings file (default: platform data directory)
        #[arg(long)]
        settings: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum UtilityArg {
    Bg,
    Text,
    Border,
}

impl From<UtilityArg> for Utility {
    fn from(arg: UtilityArg) -> Self {
        match arg {
            UtilityArg::Bg => Utility::Background,
            UtilityArg::Text => Utility::Text,
            UtilityArg::Border => Utility::Border,
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve {
            file,
            port,
            host,
            config,
            settings,
            allow_links,
        } => {
            let mut cfg = match config {
                Some(path) => PlaygroundConfig::from_file(&path).unwrap_or_else(|e| fail(e)),
                None => PlaygroundConfig::default(),
            };
            if let Some(file) = file {
                cfg.watch_file = Some(file);
            }
            if let Some(port) = port {
                cfg.port = port;
            }
            if let Some(host) = host {
                cfg.host = host;
            }
            if let Some(settings) = settings {
                cfg.settings_path = Some(settings);
            }
            if allow_links {
                cfg.preview.contain_navigation = false;
            }

            let rt = match tokio::runtime::Runtime::new() {
                Ok(rt) => rt,
                Err(e) => {
                    eprintln!("error: cannot start async runtime: {e}");
                    process::exit(1);
                }
            };
            rt.block_on(async {
                if let Err(e) = tailwind_playground::server::run(cfg).await {
                    eprintln!("error: server failed: {e}");
                    process::exit(1);
                }
            });
        }

        Commands::Render { file, o } => {
            let source = read_file(&file);
            let payload = tailwind_playground::build_payload(&source);
            write_or_print(o.as_deref(), &payload, "preview");
        }

        Commands::Snippets { category } => {
            let filter = match category.as_deref() {
                Some(label) => match Category::from_label(label) {
                    Some(cat) => Some(cat),
                    None => {
                        eprintln!("error: unknown category '{label}'");
                        process::exit(1);
                    }
                },
                None => None,
            };
            for cat in Category::ALL {
                if filter.is_some_and(|f| f != cat) {
                    continue;
                }
                println!("{}", cat.heading());
                for s in snippets::by_category(cat) {
                    println!("  {}", s.title);
                }
            }
        }

        Commands::Snippet { title } => {
            let snippet = snippets::find(&title).unwrap_or_else(|e| fail(e));
            println!("{}", snippet.code);
        }

        Commands::Colors { utility, class } => {
            if let Some(token) = class {
                let parsed: ColorClass = token.parse().unwrap_or_else(|e| fail(e));
                println!("{parsed}");
                return;
            }
            for group in swatches(utility.into()) {
                println!("{}", group.family.label());
                for swatch in &group.swatches {
                    println!("  {}", swatch.class_name);
                }
            }
        }

        Commands::Export { file, o, settings } => {
            let source = match file {
                Some(path) => read_file(&path),
                None => store_at(settings)
                    .load()
                    .unwrap_or_else(|e| fail(e))
                    .initial_source()
                    .to_string(),
            };
            let download = tailwind_playground::export::Download::of_source(&source);
            let out = o.unwrap_or_else(|| PathBuf::from(download.filename));
            write_or_print(Some(&out), &download.body, "document");
        }

        Commands::Tour { reset, settings } => {
            let store = store_at(settings);
            let mut current = store.load().unwrap_or_else(|e| fail(e));
            if reset {
                current.tour_dismissed = false;
                store.save(&current).unwrap_or_else(|e| fail(e));
                eprintln!("tour prompt will show on next start");
            } else if tailwind_playground::tour::should_prompt(&current) {
                println!("tour: not yet dismissed");
            } else {
                println!("tour: dismissed");
            }
        }
    }
}

fn store_at(path: Option<PathBuf>) -> SettingsStore {
    path.map(SettingsStore::at)
        .unwrap_or_else(SettingsStore::default_location)
}

fn read_file(path: &Path) -> String {
    match fs::read_to_string(path) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("error: cannot read '{}': {e}", path.display());
            process::exit(1);
        }
    }
}

fn write_or_print(out: Option<&Path>, text: &str, kind: &str) {
    match out {
        Some(out_path) => match fs::write(out_path, text) {
            Ok(()) => eprintln!(
                "wrote {kind} to {} ({} bytes)",
                out_path.display(),
                text.len()
            ),
            Err(e) => {
                eprintln!("error: cannot write '{}': {e}", out_path.display());
                process::exit(1);
            }
        },
        None => print!("{text}"),
    }
}

fn fail(e: PlaygroundError) -> ! {
    eprintln!("error: {e}");
    process::exit(1);
}
