use crate::errors::CliError;
use crate::println_pad;
use crate::utils::DataSource;
use colored::Colorize;
use hots_data::BuildCatalog;
use miette::Result;
use serde::Serialize;

pub struct ListBuildsArgs {
    pub source: DataSource,
    pub json: bool,
}

#[derive(Serialize)]
struct BuildEntry<'a> {
    build: u32,
    kind: Option<&'a str>,
    link: Option<&'a str>,
}

/// Lists registry builds without loading any hero data.
pub fn list_builds(args: ListBuildsArgs) -> Result<()> {
    let catalog = BuildCatalog::load(&args.source.data_path).map_err(CliError::from)?;

    let entries: Vec<BuildEntry> = catalog
        .builds()
        .iter()
        .map(|build| {
            let notes = catalog.patch_notes(*build);
            BuildEntry {
                build: *build,
                kind: notes.map(|n| n.kind.as_str()).filter(|k| !k.is_empty()),
                link: notes.map(|n| n.link.as_str()).filter(|l| !l.is_empty()),
            }
        })
        .collect();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&entries).map_err(CliError::from)?);
        return Ok(());
    }

    println_pad!(
        "{} {}",
        "📚 Builds:".bright_blue().bold(),
        format!("({})", entries.len()).dimmed()
    );
    for entry in &entries {
        let marker = if entry.build == catalog.latest() {
            " latest".bright_green().to_string()
        } else {
            String::new()
        };
        println_pad!(
            "   {} {}{} {} {}",
            "•".bright_cyan(),
            entry.build.to_string().bright_white().bold(),
            marker,
            entry.kind.unwrap_or("-").bright_yellow(),
            entry.link.unwrap_or("").dimmed()
        );
    }

    Ok(())
}
