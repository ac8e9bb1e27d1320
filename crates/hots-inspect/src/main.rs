use camino::Utf8PathBuf;
use clap::builder::{styling::AnsiColor, Styles};
use clap::ColorChoice;
use clap::{CommandFactory, FromArgMatches, Parser, Subcommand};
use commands::{
    list_builds, list_heroes, list_talents, set_data_path, show_config, show_hero, talent_owner,
    ListBuildsArgs, ListHeroesArgs, ListTalentsArgs, ShowHeroArgs, TalentOwnerArgs,
};
use hots_data::TalentTier;
use miette::{IntoDiagnostic, Result};
use utils::{config, DataSource};

mod commands;
mod errors;
mod utils;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// The data folder containing Builds.xml (overrides config.toml)
    #[arg(short, long, global = true)]
    data_path: Option<Utf8PathBuf>,

    /// The build to load (overrides config.toml, defaults to the latest build)
    #[arg(short, long, global = true)]
    build: Option<u32>,

    /// Print machine-readable JSON instead of formatted text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the builds in the registry
    Builds,
    /// List heroes available at a build
    Heroes {
        /// Only list heroes released at or before this build (defaults to the loaded build)
        #[arg(long)]
        available_at: Option<u32>,
    },
    /// Show a hero by short or real name
    Hero { name: String },
    /// List a hero's talents
    Talents {
        /// Short or real hero name
        hero: String,

        /// Only list talents of this tier (Level1, Level4, ..., Level20, Old)
        #[arg(short, long)]
        tier: Option<TalentTier>,
    },
    /// Find the hero owning a hero-specific talent
    TalentOwner {
        tier: TalentTier,
        reference_name: String,
    },
    /// Show or change config.toml
    Config {
        #[command(subcommand)]
        action: ConfigCommands,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show the current configuration
    Show,
    /// Store the data folder (and the --build flag, if given) in config.toml
    SetDataPath { path: String },
}

fn parse_args() -> Result<Args> {
    // Configure colored/styled help output
    let styles = Styles::styled()
        .header(AnsiColor::Yellow.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default())
        .placeholder(AnsiColor::Blue.on_default());

    let matches = Args::command()
        .styles(styles)
        .color(ColorChoice::Auto)
        .get_matches();

    Args::from_arg_matches(&matches).into_diagnostic()
}

fn init_logging() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "hots_data=info,hots_inspect=info".into());

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    init_logging();

    let args = parse_args()?;
    let json = args.json;
    let source = || DataSource::resolve(args.data_path.clone(), args.build, &config::load_config());

    match args.command {
        Commands::Config { action } => match action {
            ConfigCommands::Show => show_config(),
            ConfigCommands::SetDataPath { path } => set_data_path(path, args.build),
        },
        Commands::Builds => list_builds(ListBuildsArgs {
            source: source()?,
            json,
        }),
        Commands::Heroes { available_at } => list_heroes(ListHeroesArgs {
            source: source()?,
            available_at,
            json,
        }),
        Commands::Hero { name } => show_hero(ShowHeroArgs {
            source: source()?,
            name,
            json,
        }),
        Commands::Talents { hero, tier } => list_talents(ListTalentsArgs {
            source: source()?,
            hero,
            tier,
            json,
        }),
        Commands::TalentOwner {
            tier,
            reference_name,
        } => talent_owner(TalentOwnerArgs {
            source: source()?,
            tier,
            reference_name,
        }),
    }
}
