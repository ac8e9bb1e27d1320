mod builds;
mod config;
mod heroes;
mod talents;

pub use builds::{list_builds, ListBuildsArgs};
pub use config::{set_data_path, show_config};
pub use heroes::{list_heroes, show_hero, ListHeroesArgs, ShowHeroArgs};
pub use talents::{list_talents, talent_owner, ListTalentsArgs, TalentOwnerArgs};
