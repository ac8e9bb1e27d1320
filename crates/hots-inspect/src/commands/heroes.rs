use crate::errors::CliError;
use crate::println_pad;
use crate::utils::DataSource;
use colored::Colorize;
use miette::Result;

pub struct ListHeroesArgs {
    pub source: DataSource,
    /// Only list heroes released at or before this build.
    pub available_at: Option<u32>,
    pub json: bool,
}

pub fn list_heroes(args: ListHeroesArgs) -> Result<()> {
    let index = args.source.load()?;
    let available_at = args.available_at.unwrap_or(index.requested_build());
    let heroes = index.list_of_heroes(available_at);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&heroes).map_err(CliError::from)?);
        return Ok(());
    }

    println_pad!(
        "{} {} {}",
        "🦸 Heroes at build".bright_blue().bold(),
        available_at.to_string().bright_cyan().bold(),
        format!("({} of {})", heroes.len(), index.total_heroes()).dimmed()
    );
    for name in heroes {
        println_pad!("   {} {}", "•".bright_cyan(), name.bright_white());
    }

    Ok(())
}

pub struct ShowHeroArgs {
    pub source: DataSource,
    /// Short or real hero name.
    pub name: String,
    pub json: bool,
}

pub fn show_hero(args: ShowHeroArgs) -> Result<()> {
    let index = args.source.load()?;
    if !index.hero_exists(&args.name) {
        return Err(CliError::hero_not_found(args.name).into());
    }

    let hero = index.hero_info(&args.name);
    if args.json {
        println!("{}", serde_json::to_string_pretty(hero.as_ref()).map_err(CliError::from)?);
        return Ok(());
    }

    let roles = hero
        .roles
        .iter()
        .map(|role| format!("{:?}", role))
        .collect::<Vec<_>>()
        .join(", ");

    println_pad!(
        "{} {} {}",
        "🦸 Hero:".bright_blue().bold(),
        hero.name.bright_cyan().bold(),
        format!("({})", hero.short_name).dimmed()
    );
    println_pad!("{} {}", "🆔 Attribute id:".bright_green(), hero.attribute_id.bright_white());
    println_pad!("{} {}", "🧩 Unit:".bright_green(), hero.unit_name.bright_white());
    println_pad!("{} {:?}", "🌐 Franchise:".bright_green(), hero.franchise);
    println_pad!("{} {:?}", "⚔️ Type:".bright_green(), hero.hero_type);
    println_pad!("{} {:?}", "🎯 Difficulty:".bright_green(), hero.difficulty);
    println_pad!("{} {:?}", "💧 Energy:".bright_green(), hero.mana_type);
    println_pad!("{} {}", "🏷️ Roles:".bright_green(), roles.bright_white());
    println_pad!(
        "{} {}",
        "📅 Available since:".bright_green(),
        hero.build_available.to_string().bright_white()
    );
    if let Some(description) = &hero.description {
        println_pad!("{} {}", "📝 Description:".bright_yellow(), description.bright_white());
    }

    println_pad!("\n{}", "🖼️  Portraits:".bright_magenta().bold());
    for portrait in [
        &hero.hero_portrait,
        &hero.leaderboard_portrait,
        &hero.loading_portrait,
    ] {
        println_pad!("   {} {}", "•".bright_cyan(), portrait.dimmed());
    }

    Ok(())
}
