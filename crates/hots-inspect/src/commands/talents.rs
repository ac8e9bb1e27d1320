use crate::errors::CliError;
use crate::println_pad;
use crate::utils::DataSource;
use colored::Colorize;
use hots_data::{Talent, TalentTier};
use miette::Result;

pub struct ListTalentsArgs {
    pub source: DataSource,
    /// Short or real hero name.
    pub hero: String,
    pub tier: Option<TalentTier>,
    pub json: bool,
}

pub fn list_talents(args: ListTalentsArgs) -> Result<()> {
    let index = args.source.load()?;
    if !index.hero_exists(&args.hero) {
        return Err(CliError::hero_not_found(args.hero).into());
    }

    let hero = index.hero_info(&args.hero);
    let mut talents: Vec<&Talent> = match args.tier {
        Some(tier) => index
            .hero_talents_in_tier(&hero.name, tier)
            .map(|talents| talents.into_values().collect())
            .unwrap_or_default(),
        None => index
            .hero_talents(&hero.name)
            .map(|talents| talents.values().collect())
            .unwrap_or_default(),
    };
    talents.sort_by(|a, b| {
        a.tier
            .cmp(&b.tier)
            .then_with(|| a.reference_name.cmp(&b.reference_name))
    });

    if args.json {
        println!("{}", serde_json::to_string_pretty(&talents).map_err(CliError::from)?);
        return Ok(());
    }

    println_pad!(
        "{} {} {}",
        "📜 Talents:".bright_blue().bold(),
        hero.name.bright_cyan().bold(),
        format!("({})", talents.len()).dimmed()
    );

    let mut current_tier = None;
    for talent in talents {
        if current_tier != Some(talent.tier) {
            current_tier = Some(talent.tier);
            println_pad!("\n{}", talent.tier.to_string().bright_magenta().bold());
        }

        let generic = if talent.is_generic {
            " generic".bright_yellow().to_string()
        } else {
            String::new()
        };
        println_pad!(
            "   {} {} {}{}",
            "•".bright_cyan(),
            talent.name.bright_white().bold(),
            format!("[{}]", talent.reference_name).dimmed(),
            generic
        );
        if !talent.tooltip.short.is_empty() {
            println_pad!("     {}", talent.tooltip.short);
        }
        if talent.tooltip.cooldown > 0 || talent.tooltip.mana > 0 {
            println_pad!(
                "     {}",
                format!(
                    "cooldown {}s, cost {} {:?}",
                    talent.tooltip.cooldown, talent.tooltip.mana, talent.tooltip.mana_type
                )
                .dimmed()
            );
        }
    }

    Ok(())
}

pub struct TalentOwnerArgs {
    pub source: DataSource,
    pub tier: TalentTier,
    pub reference_name: String,
}

pub fn talent_owner(args: TalentOwnerArgs) -> Result<()> {
    let index = args.source.load()?;

    match index.hero_name_from_talent(args.tier, &args.reference_name) {
        Some(hero) => println_pad!(
            "{} {} {}",
            args.reference_name.bright_white().bold(),
            "belongs to".dimmed(),
            hero.bright_cyan().bold()
        ),
        None => println_pad!(
            "{} {}",
            "✗".bright_red(),
            format!(
                "No hero owns {} at {} (generic and removed talents have no owner)",
                args.reference_name, args.tier
            )
            .bright_yellow()
        ),
    }

    Ok(())
}
