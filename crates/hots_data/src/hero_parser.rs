//! Hero record parsing.
//!
//! A hero record is one XML file whose root element is named after the hero's
//! short name. Its blocks must appear in this order:
//!
//! 1. **Info**: attributes on the root element.
//! 2. **Roles**: `<Roles>` with a comma-separated role list.
//! 3. **Abilities**: `<Abilities>`, currently accepted and ignored.
//! 4. **Talent tiers**: one element per [`TalentTier`] (`<Level1>`, ..., `<Old>`),
//!    each holding one element per talent. Tier elements with other names are skipped.
//!
//! ```xml
//! <Anubarak name="Anub'arak" attributeid="Anub" unit="HeroAnubarak" franchise="Warcraft"
//!           type="Melee" difficulty="Medium" mana="Mana" available="0"
//!           portrait="anubarak.png" leader="anubarak_lb.png" loading="anubarak_ls.png">
//!   <Roles>Warrior</Roles>
//!   <Abilities />
//!   <Level1>
//!     <AnubarakScarabHostBeetleBarrier name="Shed Exoskeleton" desc="AnubarakShedExoskeleton"
//!                                      cooldown="30">storm_ui_icon_anubarak_shedexoskeleton.png</AnubarakScarabHostBeetleBarrier>
//!   </Level1>
//! </Anubarak>
//! ```
//!
//! Parsing a record only depends on the record and the build's text stores, so
//! records can be parsed independently. Checks that span several heroes live in
//! [`DataIndex`](crate::DataIndex), which registers the hero before it looks at
//! any talent. Failures after the info block are therefore kept in the record at
//! the position they occurred instead of failing the parse.

use crate::error::{Error, Result};
use crate::images::ImagePaths;
use crate::model::{parse_variant, Hero, HeroMana, HeroRole, Talent, TalentTier, TalentTooltip};
use crate::tooltips::BuildTexts;
use crate::utils::{parse_count, parse_flag};
use crate::xml::{read_document, Element};
use camino::Utf8Path;

/// Talent reference name prefixes that always denote talents shared between heroes.
const GENERIC_TALENT_PREFIXES: [&str; 3] = ["Generic", "HeroGeneric", "BattleMomentum"];

/// A parsed hero record.
#[derive(Debug)]
pub struct HeroRecord {
    pub hero: Hero,
    /// Talents in document order, duplicates included.
    ///
    /// A failed block or talent ends the list as its last entry.
    pub talents: Vec<Result<Talent>>,
}

/// Where the parser is within a hero record.
enum ParseState {
    ExpectInfo,
    ExpectRoles(Hero),
    ExpectAbilities(Hero),
    ExpectTalentTiers(Hero, Vec<Result<Talent>>),
    Done(HeroRecord),
}

/// Parses hero records of one build.
pub struct HeroParser<'a> {
    images: &'a ImagePaths,
    texts: &'a BuildTexts,
}

impl<'a> HeroParser<'a> {
    pub fn new(images: &'a ImagePaths, texts: &'a BuildTexts) -> Self {
        Self { images, texts }
    }

    /// Parse `<build_dir>/<short_name>.xml`.
    ///
    /// Returns `Ok(None)` when the file's root element is not named `short_name`.
    pub fn parse_file(&self, build_dir: &Utf8Path, short_name: &str) -> Result<Option<HeroRecord>> {
        let path = build_dir.join(format!("{}.xml", short_name));
        let root = read_document(&path)?;

        if root.name != short_name {
            tracing::debug!(
                "Skipping {}: root element <{}> does not match hero {}",
                path,
                root.name,
                short_name
            );
            return Ok(None);
        }

        self.parse(&root).map(Some)
    }

    /// Parse a hero record from its root element.
    ///
    /// Only info block failures are returned as `Err`.
    pub fn parse(&self, root: &Element) -> Result<HeroRecord> {
        let mut children = root.children.iter();
        let mut state = ParseState::ExpectInfo;

        loop {
            state = match state {
                ParseState::ExpectInfo => ParseState::ExpectRoles(self.parse_info(root)?),
                ParseState::ExpectRoles(mut hero) => {
                    match expect_block(&hero, children.next(), "Roles") {
                        Ok(roles) => {
                            hero.roles = HeroRole::parse_list(&roles.text);
                            ParseState::ExpectAbilities(hero)
                        }
                        Err(e) => failed(hero, e),
                    }
                }
                ParseState::ExpectAbilities(hero) => {
                    match expect_block(&hero, children.next(), "Abilities") {
                        Ok(_) => ParseState::ExpectTalentTiers(hero, Vec::new()),
                        Err(e) => failed(hero, e),
                    }
                }
                ParseState::ExpectTalentTiers(hero, mut talents) => match children.next() {
                    Some(block) => match TalentTier::from_element_name(&block.name) {
                        Some(tier) => {
                            if self.parse_tier(&hero, tier, block, &mut talents) {
                                ParseState::ExpectTalentTiers(hero, talents)
                            } else {
                                ParseState::Done(HeroRecord { hero, talents })
                            }
                        }
                        None => {
                            tracing::trace!(
                                "[{}] skipping unknown tier <{}>",
                                hero.short_name,
                                block.name
                            );
                            ParseState::ExpectTalentTiers(hero, talents)
                        }
                    },
                    None => ParseState::Done(HeroRecord { hero, talents }),
                },
                ParseState::Done(record) => return Ok(record),
            };
        }
    }

    /// Appends the tier's talents. Returns `false` once a talent fails.
    fn parse_tier(
        &self,
        hero: &Hero,
        tier: TalentTier,
        block: &Element,
        talents: &mut Vec<Result<Talent>>,
    ) -> bool {
        for element in &block.children {
            let talent = self.parse_talent(hero, tier, element);
            let ok = talent.is_ok();
            talents.push(talent);
            if !ok {
                return false;
            }
        }
        true
    }

    /// Info block: the root element's attributes.
    fn parse_info(&self, root: &Element) -> Result<Hero> {
        let short_name = root.name.clone();
        let name = root
            .non_empty_attribute("name")
            .unwrap_or(&short_name)
            .to_string();

        let attribute_id = root
            .non_empty_attribute("attributeid")
            .ok_or_else(|| Error::MissingAttribute {
                hero: short_name.clone(),
                attribute: "attributeid",
            })?
            .to_string();

        let description = match &self.texts.descriptions {
            Some(descriptions) => Some(
                descriptions
                    .get(&short_name)
                    .ok_or_else(|| Error::MissingHeroDescription(short_name.clone()))?
                    .to_string(),
            ),
            None => None,
        };

        let [hero_portrait, leaderboard_portrait, loading_portrait] = self.images.hero_portraits(
            root.attribute("portrait").unwrap_or_default(),
            root.attribute("leader").unwrap_or_default(),
            root.attribute("loading").unwrap_or_default(),
        );

        Ok(Hero {
            name,
            attribute_id,
            unit_name: root.attribute("unit").unwrap_or_default().to_string(),
            franchise: permissive(root, "franchise"),
            hero_type: permissive(root, "type"),
            difficulty: permissive(root, "difficulty"),
            mana_type: permissive::<HeroMana>(root, "mana"),
            build_available: root
                .attribute("available")
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(0),
            roles: Vec::new(),
            hero_portrait,
            leaderboard_portrait,
            loading_portrait,
            description,
            short_name,
        })
    }

    fn parse_talent(&self, hero: &Hero, tier: TalentTier, element: &Element) -> Result<Talent> {
        let reference_name = element.name.clone();
        let tooltip_key = element.attribute("desc").unwrap_or_default().to_string();

        let number = |field: &'static str| {
            parse_count(element.attribute(field)).map_err(|value| Error::InvalidNumber {
                hero: hero.short_name.clone(),
                talent: reference_name.clone(),
                field,
                value,
            })
        };
        let mana = number("mana")?;
        let cooldown = number("cooldown")?;

        let is_generic = GENERIC_TALENT_PREFIXES
            .iter()
            .any(|prefix| reference_name.starts_with(prefix));
        let is_icon_generic = is_generic || parse_flag(element.attribute("generic"));

        let icon = self
            .images
            .talent_icon(&hero.name, element.text.trim(), is_icon_generic)?;

        let tooltip = TalentTooltip {
            short: self
                .texts
                .short_tooltips
                .get(&tooltip_key)
                .unwrap_or_default()
                .to_string(),
            full: self
                .texts
                .full_tooltips
                .get(&tooltip_key)
                .unwrap_or_default()
                .to_string(),
            mana_type: hero.mana_type,
            mana,
            is_per_mana_cost: parse_flag(element.attribute("per-mana")),
            cooldown,
            is_charge_cooldown: parse_flag(element.attribute("ch-cooldown")),
        };

        Ok(Talent {
            name: element.attribute("name").unwrap_or_default().to_string(),
            reference_name,
            tier,
            icon,
            is_icon_generic,
            is_generic,
            tooltip_key,
            tooltip,
        })
    }
}

fn failed(hero: Hero, error: Error) -> ParseState {
    ParseState::Done(HeroRecord {
        hero,
        talents: vec![Err(error)],
    })
}

/// Enum attributes fall back to the type's default when absent or unrecognised.
fn permissive<T: serde::de::DeserializeOwned + Default>(element: &Element, attribute: &str) -> T {
    element
        .attribute(attribute)
        .and_then(parse_variant)
        .unwrap_or_default()
}

fn expect_block<'e>(
    hero: &Hero,
    element: Option<&'e Element>,
    expected: &'static str,
) -> Result<&'e Element> {
    match element {
        Some(element) if element.name == expected => Ok(element),
        Some(element) => Err(Error::UnexpectedElement {
            hero: hero.short_name.clone(),
            expected,
            found: element.name.clone(),
        }),
        None => Err(Error::MissingElement {
            hero: hero.short_name.clone(),
            expected,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{HeroDifficulty, HeroFranchise, HeroType};
    use crate::tooltips::TooltipStore;
    use crate::xml::parse_document;

    fn texts() -> BuildTexts {
        BuildTexts {
            short_tooltips: TooltipStore::parse("AbathurSpikeBurst=Short text\n", "short").unwrap(),
            full_tooltips: TooltipStore::parse("AbathurSpikeBurst=Full text\n", "full").unwrap(),
            descriptions: None,
        }
    }

    struct Parsed {
        hero: Hero,
        talents: Vec<Talent>,
    }

    /// Parses a record and fails on its first recorded error.
    fn parse(xml: &str) -> Result<Parsed> {
        let images = ImagePaths::default();
        let texts = texts();
        let record = HeroParser::new(&images, &texts).parse(&parse_document(xml).unwrap())?;
        Ok(Parsed {
            hero: record.hero,
            talents: record.talents.into_iter().collect::<Result<_>>()?,
        })
    }

    const ABATHUR: &str = r#"
        <Abathur attributeid="Abat" unit="HeroAbathur" franchise="Starcraft" type="Melee"
                 difficulty="VeryHard" mana="None" available="12345"
                 portrait="abathur.png" leader="abathur_lb.png" loading="abathur_ls.png">
          <Roles>Specialist,Support</Roles>
          <Abilities />
          <Level1>
            <AbathurPressurizedGlands name="Pressurized Glands" desc="AbathurSpikeBurst" mana="10" per-mana="true" cooldown="4" ch-cooldown="true">storm_ui_icon_abathur_spikeburst.png</AbathurPressurizedGlands>
            <GenericTalentBlock name="Block" generic="false" desc="Unknown">storm_ui_icon_talent_block.png</GenericTalentBlock>
          </Level1>
          <Level2>
            <Ignored>ignored.png</Ignored>
          </Level2>
          <Old>
            <AbathurOldTalent name="Old">storm_ui_icon_old.dds</AbathurOldTalent>
          </Old>
        </Abathur>"#;

    #[test]
    fn test_parse_info_block() {
        let record = parse(ABATHUR).unwrap();
        let hero = &record.hero;

        assert_eq!(hero.short_name, "Abathur");
        assert_eq!(hero.name, "Abathur");
        assert_eq!(hero.attribute_id, "Abat");
        assert_eq!(hero.unit_name, "HeroAbathur");
        assert_eq!(hero.franchise, HeroFranchise::Starcraft);
        assert_eq!(hero.hero_type, HeroType::Melee);
        assert_eq!(hero.difficulty, HeroDifficulty::VeryHard);
        assert_eq!(hero.mana_type, HeroMana::None);
        assert_eq!(hero.build_available, 12345);
        assert_eq!(hero.roles, vec![HeroRole::Specialist, HeroRole::Support]);
        assert_eq!(
            hero.hero_portrait,
            "Heroes.Icons.Images.HeroPortraits.abathur.png"
        );
        assert_eq!(hero.description, None);
    }

    #[test]
    fn test_parse_talents() {
        let record = parse(ABATHUR).unwrap();
        assert_eq!(record.talents.len(), 3);

        let glands = &record.talents[0];
        assert_eq!(glands.reference_name, "AbathurPressurizedGlands");
        assert_eq!(glands.name, "Pressurized Glands");
        assert_eq!(glands.tier, TalentTier::Level1);
        assert_eq!(
            glands.icon,
            "Heroes.Icons.Images.Talents.Abathur.storm_ui_icon_abathur_spikeburst.png"
        );
        assert!(!glands.is_generic);
        assert!(!glands.is_icon_generic);
        assert_eq!(glands.tooltip.short, "Short text");
        assert_eq!(glands.tooltip.full, "Full text");
        assert_eq!(glands.tooltip.mana, 10);
        assert!(glands.tooltip.is_per_mana_cost);
        assert_eq!(glands.tooltip.cooldown, 4);
        assert!(glands.tooltip.is_charge_cooldown);
        assert_eq!(glands.tooltip.mana_type, HeroMana::None);

        let old = &record.talents[2];
        assert_eq!(old.tier, TalentTier::Old);
        assert_eq!(old.tooltip.cooldown, 0);
        assert_eq!(old.tooltip.short, "");
    }

    #[test]
    fn test_generic_prefix_forces_flags() {
        let record = parse(ABATHUR).unwrap();
        let block = &record.talents[1];

        assert!(block.is_generic);
        assert!(block.is_icon_generic);
        assert_eq!(
            block.icon,
            "Heroes.Icons.Images.Talents._Generic.storm_ui_icon_talent_block.png"
        );
    }

    #[test]
    fn test_all_generic_prefixes() {
        let record = parse(
            r#"<Alarak attributeid="Alar"><Roles>Assassin</Roles><Abilities />
               <Level1><HeroGenericExtraQuest generic="false">quest.PNG</HeroGenericExtraQuest></Level1>
               <Level4><BattleMomentumAlarak>momentum.dds</BattleMomentumAlarak></Level4></Alarak>"#,
        )
        .unwrap();

        for talent in &record.talents {
            assert!(talent.is_generic, "{} should be generic", talent.reference_name);
            assert!(talent.is_icon_generic);
            assert!(
                talent.icon.starts_with("Heroes.Icons.Images.Talents._Generic."),
                "{}",
                talent.icon
            );
        }
        assert_eq!(record.talents.len(), 2);
    }

    #[test]
    fn test_failures_kept_after_hero() {
        let images = ImagePaths::default();
        let texts = texts();
        let parser = HeroParser::new(&images, &texts);
        let root = parse_document(
            r#"<Alarak attributeid="Alar"><Roles>Assassin</Roles><Abilities />
               <Level1><AlarakFirst>a.png</AlarakFirst><AlarakBad>b.jpg</AlarakBad><AlarakNever>c.png</AlarakNever></Level1>
               <Level4><AlarakLater>d.png</AlarakLater></Level4></Alarak>"#,
        )
        .unwrap();

        let record = parser.parse(&root).unwrap();
        assert_eq!(record.hero.attribute_id, "Alar");
        assert_eq!(record.talents.len(), 2);
        assert!(matches!(&record.talents[0], Ok(talent) if talent.reference_name == "AlarakFirst"));
        assert!(matches!(
            &record.talents[1],
            Err(Error::UnsupportedIconExtension(name)) if name == "b.jpg"
        ));

        let root = parse_document(r#"<Alarak attributeid="Alar"><Abilities /></Alarak>"#).unwrap();
        let record = parser.parse(&root).unwrap();
        assert!(matches!(
            record.talents.as_slice(),
            [Err(Error::UnexpectedElement { expected: "Roles", .. })]
        ));
    }

    #[test]
    fn test_generic_attribute_only_affects_icon() {
        let record = parse(
            r#"<Alarak attributeid="Alar"><Roles>Assassin</Roles><Abilities />
               <Level4><AlarakShared generic="true">shared.png</AlarakShared></Level4></Alarak>"#,
        )
        .unwrap();
        let talent = &record.talents[0];
        assert!(talent.is_icon_generic);
        assert!(!talent.is_generic);
    }

    #[test]
    fn test_permissive_enums() {
        let record = parse(
            r#"<Alarak attributeid="Alar" franchise="Hearthstone" type="" difficulty="hard" mana="Rage">
               <Roles>Assassin,Healer,Wizard</Roles><Abilities /></Alarak>"#,
        )
        .unwrap();
        let hero = &record.hero;
        assert_eq!(hero.franchise, HeroFranchise::Unknown);
        assert_eq!(hero.hero_type, HeroType::Unknown);
        assert_eq!(hero.difficulty, HeroDifficulty::Unknown);
        assert_eq!(hero.mana_type, HeroMana::Mana);
        assert_eq!(hero.build_available, 0);
        assert_eq!(
            hero.roles,
            vec![HeroRole::Assassin, HeroRole::Healer, HeroRole::Unknown]
        );
    }

    #[test]
    fn test_name_defaults_to_short_name() {
        let record = parse(r#"<Alarak attributeid="Alar" name=""><Roles>Assassin</Roles><Abilities /></Alarak>"#).unwrap();
        assert_eq!(record.hero.name, "Alarak");
    }

    #[test]
    fn test_real_name_used_for_icon_folder() {
        let record = parse(
            r#"<Anubarak name="Anub'arak" attributeid="Anub"><Roles>Warrior</Roles><Abilities />
               <Level1><AnubarakTalent>burrow.png</AnubarakTalent></Level1></Anubarak>"#,
        )
        .unwrap();
        assert_eq!(
            record.talents[0].icon,
            "Heroes.Icons.Images.Talents.Anub'arak.burrow.png"
        );
    }

    #[test]
    fn test_blocks_out_of_order() {
        let result = parse(r#"<Alarak attributeid="Alar"><Abilities /><Roles>Assassin</Roles></Alarak>"#);
        assert!(matches!(
            result,
            Err(Error::UnexpectedElement { expected: "Roles", found, .. }) if found == "Abilities"
        ));

        let result = parse(r#"<Alarak attributeid="Alar"><Roles>Assassin</Roles></Alarak>"#);
        assert!(matches!(
            result,
            Err(Error::MissingElement { expected: "Abilities", .. })
        ));
    }

    #[test]
    fn test_missing_attribute_id() {
        let result = parse(r#"<Alarak><Roles>Assassin</Roles><Abilities /></Alarak>"#);
        assert!(matches!(
            result,
            Err(Error::MissingAttribute { attribute: "attributeid", .. })
        ));
    }

    #[test]
    fn test_invalid_number() {
        let result = parse(
            r#"<Alarak attributeid="Alar"><Roles>Assassin</Roles><Abilities />
               <Level1><AlarakTalent cooldown="ten">a.png</AlarakTalent></Level1></Alarak>"#,
        );
        assert!(matches!(
            result,
            Err(Error::InvalidNumber { field: "cooldown", value, .. }) if value == "ten"
        ));
    }

    #[test]
    fn test_invalid_icon_extension() {
        let result = parse(
            r#"<Alarak attributeid="Alar"><Roles>Assassin</Roles><Abilities />
               <Level1><AlarakTalent>icon.jpg</AlarakTalent></Level1></Alarak>"#,
        );
        assert!(matches!(result, Err(Error::UnsupportedIconExtension(name)) if name == "icon.jpg"));
    }

    #[test]
    fn test_description_required_when_loaded() {
        let images = ImagePaths::default();
        let mut texts = texts();
        texts.descriptions = Some(TooltipStore::parse("Alarak=Highlord\n", "desc").unwrap());
        let parser = HeroParser::new(&images, &texts);

        let alarak = parse_document(r#"<Alarak attributeid="Alar"><Roles>Assassin</Roles><Abilities /></Alarak>"#).unwrap();
        let record = parser.parse(&alarak).unwrap();
        assert_eq!(record.hero.description.as_deref(), Some("Highlord"));

        let zarya = parse_document(r#"<Zarya attributeid="Zary"><Roles>Warrior</Roles><Abilities /></Zarya>"#).unwrap();
        assert!(matches!(
            parser.parse(&zarya),
            Err(Error::MissingHeroDescription(name)) if name == "Zarya"
        ));
    }
}
