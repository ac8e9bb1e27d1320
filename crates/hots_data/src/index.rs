//! The queryable hero and talent index of one build.
//!
//! [`DataIndex::load`] runs the whole pipeline:
//!
//! 1. Read the build registry into a [`BuildCatalog`].
//! 2. Pick the requested build (or the latest) and follow its `pre` links with
//!    [`resolve_alias`] to the build whose data is loaded.
//! 3. Load that build's tooltip and description text stores.
//! 4. Parse every listed hero record in parallel. Talent and block failures stay
//!    in the record at their position.
//! 5. Merge the parsed records in listing order: register the hero, then walk
//!    its talents, enforcing every uniqueness rule. Errors are therefore reported
//!    in the same order a sequential load would find them.
//!
//! Any failure aborts the load; a partially built index is never returned.
//!
//! Queries never fail. Unknown names produce `None` or a placeholder record, and
//! the miss is reported as a [`Diagnostic`].

use crate::builds::{resolve_alias, BuildCatalog, PatchNotes};
use crate::error::{Error, Result};
use crate::hero_parser::{HeroParser, HeroRecord};
use crate::images::{ImagePaths, PortraitPlaceholder, NO_TALENT_FOUND_ICON, NO_TALENT_PICK_ICON};
use crate::model::{Hero, Talent, TalentTier};
use crate::options::{Diagnostic, DiagnosticSink, LoadOptions};
use crate::tooltips::BuildTexts;
use camino::Utf8Path;
use rayon::prelude::*;
use std::borrow::Cow;
use std::collections::HashMap;
use std::time::Instant;

/// Hero name that selects the "no pick" placeholder in [`DataIndex::hero_info`].
pub const NO_PICK_HERO_NAME: &str = "No pick";

/// Read-only hero and talent data of one build.
pub struct DataIndex {
    catalog: BuildCatalog,
    /// Build the caller asked for.
    requested_build: u32,
    /// Build whose files were read, after following `pre` links.
    loaded_build: u32,
    images: ImagePaths,

    /// Real hero name -> hero.
    heroes: HashMap<String, Hero>,
    /// Real hero name -> (talent reference name -> talent).
    talents: HashMap<String, HashMap<String, Talent>>,
    /// Tier -> (talent reference name -> real hero name).
    ///
    /// Only hero-specific talents outside the `Old` tier are indexed.
    hero_by_talent: HashMap<TalentTier, HashMap<String, String>>,
    /// Attribute id -> real hero name.
    name_by_attribute_id: HashMap<String, String>,
    /// Short name -> real hero name, e.g. `Anubarak` -> `Anub'arak`.
    name_by_short_name: HashMap<String, String>,

    enable_logging: bool,
    diagnostics: Option<DiagnosticSink>,
}

impl DataIndex {
    /// Load the index from the data folder at `data_root`.
    pub fn load(data_root: &Utf8Path, options: LoadOptions) -> Result<Self> {
        let started = Instant::now();
        let catalog = BuildCatalog::load(data_root)?;

        let requested_build = match options.build {
            Some(build) if !catalog.contains(build) => return Err(Error::UnknownBuild(build)),
            Some(build) => build,
            None => catalog.latest(),
        };

        let resolved = resolve_alias(data_root, &catalog, requested_build)?;
        let build_dir = data_root.join(resolved.build.to_string());
        tracing::info!(
            "Loading build {} from {} ({} heroes listed)",
            requested_build,
            build_dir,
            resolved.heroes.len()
        );

        let images = ImagePaths::new(options.image_root.clone());
        let texts = BuildTexts::load(&build_dir, resolved.build)?;
        let parser = HeroParser::new(&images, &texts);

        // Collecting keeps listing order, so the merge below sees records sequentially.
        let records: Vec<Result<Option<HeroRecord>>> = resolved
            .heroes
            .par_iter()
            .map(|short_name| parser.parse_file(&build_dir, short_name))
            .collect();

        let mut index = Self {
            catalog,
            requested_build,
            loaded_build: resolved.build,
            images,
            heroes: HashMap::with_capacity(records.len()),
            talents: HashMap::with_capacity(records.len()),
            hero_by_talent: HashMap::new(),
            name_by_attribute_id: HashMap::with_capacity(records.len()),
            name_by_short_name: HashMap::with_capacity(records.len()),
            enable_logging: options.enable_logging,
            diagnostics: options.diagnostics(),
        };

        for record in records {
            if let Some(record) = record? {
                index.insert_record(record)?;
            }
        }

        tracing::info!(
            "Build {} loaded: {} heroes, {} talents in {:?}",
            index.loaded_build,
            index.heroes.len(),
            index.talents.values().map(HashMap::len).sum::<usize>(),
            started.elapsed()
        );

        Ok(index)
    }

    fn insert_record(&mut self, record: HeroRecord) -> Result<()> {
        let HeroRecord { hero, talents } = record;
        self.register_hero(&hero)?;

        let mut by_reference: HashMap<String, Talent> = HashMap::with_capacity(talents.len());
        for talent in talents {
            let talent = talent?;
            if by_reference.contains_key(&talent.reference_name) {
                return Err(Error::DuplicateTalent {
                    build: self.loaded_build,
                    hero: hero.name.clone(),
                    talent: talent.reference_name,
                });
            }

            if !talent.is_generic && talent.tier != TalentTier::Old {
                self.register_talent_owner(&hero.short_name, &talent)?;
            }

            by_reference.insert(talent.reference_name.clone(), talent);
        }

        self.talents.insert(hero.name.clone(), by_reference);
        self.heroes.insert(hero.name.clone(), hero);
        Ok(())
    }

    /// Info block registration: attribute id and short name must be unique.
    fn register_hero(&mut self, hero: &Hero) -> Result<()> {
        if self.name_by_attribute_id.contains_key(&hero.attribute_id) {
            return Err(Error::DuplicateAttributeId {
                attribute_id: hero.attribute_id.clone(),
                hero: hero.short_name.clone(),
            });
        }
        if self.name_by_short_name.contains_key(&hero.short_name) {
            return Err(Error::DuplicateShortName(hero.short_name.clone()));
        }
        if self.heroes.contains_key(&hero.name) {
            return Err(Error::DuplicateHeroName(hero.name.clone()));
        }

        self.name_by_attribute_id
            .insert(hero.attribute_id.clone(), hero.name.clone());
        self.name_by_short_name
            .insert(hero.short_name.clone(), hero.name.clone());
        Ok(())
    }

    fn register_talent_owner(&mut self, short_name: &str, talent: &Talent) -> Result<()> {
        let real_name = self
            .name_by_short_name
            .get(short_name)
            .ok_or_else(|| Error::HeroNotRegistered(short_name.to_string()))?;

        let owners = self.hero_by_talent.entry(talent.tier).or_default();
        if owners.contains_key(&talent.reference_name) {
            return Err(Error::DuplicateTierTalent {
                tier: talent.tier,
                talent: talent.reference_name.clone(),
                hero: real_name.clone(),
            });
        }
        owners.insert(talent.reference_name.clone(), real_name.clone());
        Ok(())
    }

    fn report(&self, diagnostic: Diagnostic) {
        if self.enable_logging {
            tracing::warn!("{}", diagnostic);
        }
        if let Some(sink) = &self.diagnostics {
            sink(&diagnostic);
        }
    }

    /// All builds listed in the registry, highest first.
    pub fn builds(&self) -> &[u32] {
        self.catalog.builds()
    }

    pub fn latest_build(&self) -> u32 {
        self.catalog.latest()
    }

    pub fn earliest_build(&self) -> u32 {
        self.catalog.earliest()
    }

    /// The build that was asked for.
    pub fn requested_build(&self) -> u32 {
        self.requested_build
    }

    /// The build whose files were actually read. Differs from
    /// [`requested_build`](Self::requested_build) when the requested build reuses
    /// an earlier build's hero data.
    pub fn loaded_build(&self) -> u32 {
        self.loaded_build
    }

    /// All talents of a hero, keyed by reference name.
    pub fn hero_talents(&self, real_hero_name: &str) -> Option<&HashMap<String, Talent>> {
        let talents = self.talents.get(real_hero_name);
        if talents.is_none() {
            self.report(Diagnostic::HeroTalentsNotFound {
                hero: real_hero_name.to_string(),
            });
        }
        talents
    }

    /// Talents of a hero in one tier, keyed by reference name.
    pub fn hero_talents_in_tier(
        &self,
        real_hero_name: &str,
        tier: TalentTier,
    ) -> Option<HashMap<&str, &Talent>> {
        self.hero_talents(real_hero_name).map(|talents| {
            talents
                .iter()
                .filter(|(_, talent)| talent.tier == tier)
                .map(|(reference, talent)| (reference.as_str(), talent))
                .collect()
        })
    }

    /// A single talent.
    ///
    /// An empty `talent_reference_name` means nothing was picked and yields the
    /// "no pick" placeholder. An unknown hero or reference name yields the
    /// "not found" placeholder. Placeholders are built fresh and never stored.
    pub fn hero_talent(
        &self,
        real_hero_name: &str,
        tier: TalentTier,
        talent_reference_name: &str,
    ) -> Cow<'_, Talent> {
        if talent_reference_name.is_empty() {
            return Cow::Owned(Talent::no_pick(
                tier,
                self.images.sentinel_talent_icon(NO_TALENT_PICK_ICON),
            ));
        }

        let not_found = || {
            Cow::Owned(Talent::not_found(
                talent_reference_name,
                tier,
                self.images.sentinel_talent_icon(NO_TALENT_FOUND_ICON),
            ))
        };

        let Some(talents) = self.hero_talents(real_hero_name) else {
            return not_found();
        };

        match talents.get(talent_reference_name) {
            Some(talent) => Cow::Borrowed(talent),
            None => {
                self.report(Diagnostic::TalentNotFound {
                    hero: real_hero_name.to_string(),
                    talent: talent_reference_name.to_string(),
                });
                not_found()
            }
        }
    }

    /// Real name of the hero owning a hero-specific talent.
    pub fn hero_name_from_talent(&self, tier: TalentTier, talent_reference_name: &str) -> Option<&str> {
        self.hero_by_talent
            .get(&tier)
            .and_then(|owners| owners.get(talent_reference_name))
            .map(String::as_str)
    }

    /// Patch notes of any registry build.
    pub fn patch_notes(&self, build: u32) -> Option<&PatchNotes> {
        self.catalog.patch_notes(build)
    }

    /// Real hero name from a four character attribute id.
    ///
    /// An empty id means no hero was picked and returns `Some("")`.
    pub fn real_name_from_attribute_id(&self, attribute_id: &str) -> Option<&str> {
        if attribute_id.is_empty() {
            return Some("");
        }

        let name = self.name_by_attribute_id.get(attribute_id).map(String::as_str);
        if name.is_none() {
            self.report(Diagnostic::AttributeIdNotFound {
                attribute_id: attribute_id.to_string(),
            });
        }
        name
    }

    /// Real hero name from a short name. An empty short name returns `Some("")`.
    pub fn real_name_from_short_name(&self, short_name: &str) -> Option<&str> {
        if short_name.is_empty() {
            return Some("");
        }
        self.name_by_short_name.get(short_name).map(String::as_str)
    }

    /// Accepts either a short name or a real name.
    fn resolve_name<'a>(&'a self, hero_name: &'a str) -> &'a str {
        match self.real_name_from_short_name(hero_name) {
            Some(real_name) if !real_name.is_empty() => real_name,
            _ => hero_name,
        }
    }

    /// Whether a hero exists, by short or real name.
    pub fn hero_exists(&self, hero_name: &str) -> bool {
        self.heroes.contains_key(self.resolve_name(hero_name))
    }

    /// Real names of heroes available at or before `build`, sorted.
    pub fn list_of_heroes(&self, build: u32) -> Vec<&str> {
        let mut heroes: Vec<&str> = self
            .heroes
            .values()
            .filter(|hero| hero.build_available <= build)
            .map(|hero| hero.name.as_str())
            .collect();
        heroes.sort_unstable();
        heroes
    }

    pub fn total_heroes(&self) -> usize {
        self.heroes.len()
    }

    /// A hero record by short or real name.
    ///
    /// [`NO_PICK_HERO_NAME`] yields the "no pick" placeholder and unknown names
    /// yield the "not found" placeholder.
    pub fn hero_info(&self, hero_name: &str) -> Cow<'_, Hero> {
        if hero_name == NO_PICK_HERO_NAME {
            return Cow::Owned(Hero::placeholder(
                hero_name,
                self.images
                    .placeholder_portraits(PortraitPlaceholder::NoPick),
            ));
        }

        match self.heroes.get(self.resolve_name(hero_name)) {
            Some(hero) => Cow::Borrowed(hero),
            None => Cow::Owned(Hero::placeholder(
                hero_name,
                self.images
                    .placeholder_portraits(PortraitPlaceholder::NotFound),
            )),
        }
    }

    /// All stored heroes, in no particular order.
    pub fn heroes(&self) -> impl Iterator<Item = &Hero> {
        self.heroes.values()
    }
}

impl std::fmt::Debug for DataIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DataIndex")
            .field("requested_build", &self.requested_build)
            .field("loaded_build", &self.loaded_build)
            .field("heroes", &self.heroes.len())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builds::BUILD_REGISTRY_FILE_NAME;
    use crate::model::HeroFranchise;
    use std::sync::{Arc, Mutex};

    fn record(short_name: &str, name: &str, attribute_id: &str, talents: &[(&str, TalentTier, bool)]) -> HeroRecord {
        let images = ImagePaths::default();
        let mut hero = Hero::placeholder(name, images.hero_portraits("p.png", "l.png", "s.png"));
        hero.short_name = short_name.to_string();
        hero.attribute_id = attribute_id.to_string();

        let talents = talents
            .iter()
            .map(|(reference, tier, generic)| {
                let mut talent = Talent::not_found(reference, *tier, format!("{}.png", reference));
                talent.is_generic = *generic;
                Ok(talent)
            })
            .collect();
        HeroRecord { hero, talents }
    }

    fn empty_index() -> DataIndex {
        let catalog_root = tempfile::tempdir().unwrap();
        let root = camino::Utf8PathBuf::from_path_buf(catalog_root.path().to_path_buf()).unwrap();
        std::fs::write(
            root.join(BUILD_REGISTRY_FILE_NAME),
            r#"<Builds><Build type="a" link="b">47479</Build></Builds>"#,
        )
        .unwrap();
        std::fs::create_dir_all(root.join("47479")).unwrap();

        DataIndex {
            catalog: BuildCatalog::load(&root).unwrap(),
            requested_build: 47479,
            loaded_build: 47479,
            images: ImagePaths::default(),
            heroes: HashMap::new(),
            talents: HashMap::new(),
            hero_by_talent: HashMap::new(),
            name_by_attribute_id: HashMap::new(),
            name_by_short_name: HashMap::new(),
            enable_logging: false,
            diagnostics: None,
        }
    }

    #[test]
    fn test_duplicate_talent_same_tier() {
        let mut index = empty_index();
        let result = index.insert_record(record(
            "Alarak",
            "Alarak",
            "Alar",
            &[
                ("AlarakTalent", TalentTier::Level1, false),
                ("AlarakTalent", TalentTier::Level1, false),
            ],
        ));
        assert!(matches!(result, Err(Error::DuplicateTalent { talent, .. }) if talent == "AlarakTalent"));
    }

    #[test]
    fn test_duplicate_talent_across_tiers() {
        let mut index = empty_index();
        let result = index.insert_record(record(
            "Alarak",
            "Alarak",
            "Alar",
            &[
                ("AlarakTalent", TalentTier::Level1, false),
                ("AlarakTalent", TalentTier::Level7, false),
            ],
        ));
        assert!(matches!(result, Err(Error::DuplicateTalent { .. })));
    }

    #[test]
    fn test_duplicate_old_talent_within_hero() {
        let mut index = empty_index();
        let result = index.insert_record(record(
            "Alarak",
            "Alarak",
            "Alar",
            &[
                ("AlarakTalent", TalentTier::Old, false),
                ("AlarakTalent", TalentTier::Old, false),
            ],
        ));
        assert!(matches!(result, Err(Error::DuplicateTalent { .. })));
    }

    #[test]
    fn test_tier_talent_collision_between_heroes() {
        let mut index = empty_index();
        index
            .insert_record(record("Alarak", "Alarak", "Alar", &[("Shared", TalentTier::Level4, false)]))
            .unwrap();

        let result = index.insert_record(record("Zarya", "Zarya", "Zary", &[("Shared", TalentTier::Level4, false)]));
        assert!(matches!(
            result,
            Err(Error::DuplicateTierTalent { tier: TalentTier::Level4, talent, hero }) if talent == "Shared" && hero == "Zarya"
        ));
    }

    #[test]
    fn test_generic_and_old_talents_not_indexed() {
        let mut index = empty_index();
        index
            .insert_record(record(
                "Alarak",
                "Alarak",
                "Alar",
                &[
                    ("GenericTalentBlock", TalentTier::Level1, true),
                    ("AlarakOld", TalentTier::Old, false),
                    ("AlarakOwn", TalentTier::Level1, false),
                ],
            ))
            .unwrap();
        index
            .insert_record(record(
                "Zarya",
                "Zarya",
                "Zary",
                &[
                    ("GenericTalentBlock", TalentTier::Level1, true),
                    ("AlarakOld", TalentTier::Old, false),
                ],
            ))
            .unwrap();

        assert_eq!(index.hero_name_from_talent(TalentTier::Level1, "GenericTalentBlock"), None);
        assert_eq!(index.hero_name_from_talent(TalentTier::Old, "AlarakOld"), None);
        assert_eq!(index.hero_name_from_talent(TalentTier::Level1, "AlarakOwn"), Some("Alarak"));
        assert_eq!(index.hero_name_from_talent(TalentTier::Level4, "AlarakOwn"), None);
    }

    #[test]
    fn test_hero_registered_before_talent_failures() {
        let mut index = empty_index();
        index.insert_record(record("Alarak", "Alarak", "Same", &[])).unwrap();

        let mut zarya = record("Zarya", "Zarya", "Same", &[]);
        zarya
            .talents
            .push(Err(Error::UnsupportedIconExtension("x.jpg".to_string())));
        assert!(matches!(
            index.insert_record(zarya),
            Err(Error::DuplicateAttributeId { attribute_id, .. }) if attribute_id == "Same"
        ));
    }

    #[test]
    fn test_talent_failures_keep_document_order() {
        let mut index = empty_index();
        let mut alarak = record(
            "Alarak",
            "Alarak",
            "Alar",
            &[
                ("AlarakTalent", TalentTier::Level1, false),
                ("AlarakTalent", TalentTier::Level4, false),
            ],
        );
        alarak
            .talents
            .push(Err(Error::UnsupportedIconExtension("x.jpg".to_string())));
        assert!(matches!(index.insert_record(alarak), Err(Error::DuplicateTalent { .. })));

        let mut index = empty_index();
        let mut zarya = record("Zarya", "Zarya", "Zary", &[("ZaryaOne", TalentTier::Level1, false)]);
        zarya
            .talents
            .insert(0, Err(Error::UnsupportedIconExtension("x.jpg".to_string())));
        zarya
            .talents
            .push(Ok(Talent::not_found("ZaryaOne", TalentTier::Level1, "z.png".to_string())));
        assert!(matches!(
            index.insert_record(zarya),
            Err(Error::UnsupportedIconExtension(name)) if name == "x.jpg"
        ));
    }

    #[test]
    fn test_talent_owner_requires_registered_hero() {
        let mut index = empty_index();
        let talent = Talent::not_found("NovaSnipe", TalentTier::Level1, "snipe.png".to_string());

        assert!(matches!(
            index.register_talent_owner("Nova", &talent),
            Err(Error::HeroNotRegistered(name)) if name == "Nova"
        ));
        assert_eq!(index.hero_name_from_talent(TalentTier::Level1, "NovaSnipe"), None);
    }

    #[test]
    fn test_tier_collision_names_real_hero() {
        let mut index = empty_index();
        index
            .insert_record(record("Alarak", "Alarak", "Alar", &[("Shared", TalentTier::Level7, false)]))
            .unwrap();

        let result = index.insert_record(record(
            "Anubarak",
            "Anub'arak",
            "Anub",
            &[("Shared", TalentTier::Level7, false)],
        ));
        assert!(matches!(
            result,
            Err(Error::DuplicateTierTalent { hero, .. }) if hero == "Anub'arak"
        ));
    }

    #[test]
    fn test_duplicate_hero_keys() {
        let mut index = empty_index();
        index.insert_record(record("Alarak", "Alarak", "Alar", &[])).unwrap();

        assert!(matches!(
            index.insert_record(record("Other", "Other", "Alar", &[])),
            Err(Error::DuplicateAttributeId { attribute_id, .. }) if attribute_id == "Alar"
        ));
        assert!(matches!(
            index.insert_record(record("Alarak", "Other", "Othr", &[])),
            Err(Error::DuplicateShortName(name)) if name == "Alarak"
        ));
    }

    #[test]
    fn test_talent_queries() {
        let mut index = empty_index();
        let misses = Arc::new(Mutex::new(Vec::new()));
        let recorded = misses.clone();
        let sink: DiagnosticSink = Arc::new(move |d: &Diagnostic| recorded.lock().unwrap().push(d.clone()));
        index.diagnostics = Some(sink);
        index
            .insert_record(record(
                "Anubarak",
                "Anub'arak",
                "Anub",
                &[
                    ("AnubarakOne", TalentTier::Level1, false),
                    ("AnubarakFour", TalentTier::Level4, false),
                ],
            ))
            .unwrap();

        let stored = index.hero_talent("Anub'arak", TalentTier::Level1, "AnubarakOne");
        assert!(matches!(stored, Cow::Borrowed(_)));
        assert_eq!(stored.icon, "AnubarakOne.png");

        let no_pick = index.hero_talent("Anub'arak", TalentTier::Level1, "");
        assert_eq!(no_pick.name, "No pick");
        assert!(no_pick.is_generic && no_pick.is_icon_generic);
        assert_eq!(
            no_pick.icon,
            "Heroes.Icons.Images.Talents._Generic.storm_ui_icon_no_pick.png"
        );

        let unknown = index.hero_talent("Anub'arak", TalentTier::Level1, "Missing");
        assert_eq!(unknown.name, "Missing");
        assert_eq!(
            unknown.icon,
            "Heroes.Icons.Images.Talents._Generic.storm_ui_icon_not_found.png"
        );
        assert_ne!(no_pick.icon, unknown.icon);

        let unknown_hero = index.hero_talent("Nobody", TalentTier::Level1, "AnubarakOne");
        assert_eq!(unknown_hero.icon, unknown.icon);

        // Placeholders are never stored.
        assert_eq!(index.hero_talents("Anub'arak").unwrap().len(), 2);

        let tier = index.hero_talents_in_tier("Anub'arak", TalentTier::Level4).unwrap();
        assert_eq!(tier.len(), 1);
        assert!(tier.contains_key("AnubarakFour"));
        assert!(index.hero_talents_in_tier("Nobody", TalentTier::Level4).is_none());

        let misses = misses.lock().unwrap();
        assert_eq!(
            misses.as_slice(),
            &[
                Diagnostic::TalentNotFound {
                    hero: "Anub'arak".to_string(),
                    talent: "Missing".to_string()
                },
                Diagnostic::HeroTalentsNotFound {
                    hero: "Nobody".to_string()
                },
                Diagnostic::HeroTalentsNotFound {
                    hero: "Nobody".to_string()
                },
            ]
        );
    }

    #[test]
    fn test_name_queries() {
        let mut index = empty_index();
        index.insert_record(record("Anubarak", "Anub'arak", "Anub", &[])).unwrap();

        assert_eq!(index.real_name_from_attribute_id("Anub"), Some("Anub'arak"));
        assert_eq!(index.real_name_from_attribute_id(""), Some(""));
        assert_eq!(index.real_name_from_attribute_id("Nope"), None);
        assert_eq!(index.real_name_from_short_name("Anubarak"), Some("Anub'arak"));
        assert_eq!(index.real_name_from_short_name(""), Some(""));
        assert_eq!(index.real_name_from_short_name("Anub'arak"), None);

        assert!(index.hero_exists("Anubarak"));
        assert!(index.hero_exists("Anub'arak"));
        assert!(!index.hero_exists("Nobody"));
        assert_eq!(index.total_heroes(), 1);
    }

    #[test]
    fn test_hero_info_fallbacks() {
        let mut index = empty_index();
        index.insert_record(record("Anubarak", "Anub'arak", "Anub", &[])).unwrap();

        let by_short = index.hero_info("Anubarak");
        let by_real = index.hero_info("Anub'arak");
        assert!(matches!(by_short, Cow::Borrowed(_)));
        assert_eq!(by_short.as_ref(), by_real.as_ref());

        let no_pick = index.hero_info(NO_PICK_HERO_NAME);
        assert_eq!(no_pick.name, NO_PICK_HERO_NAME);
        assert_eq!(no_pick.franchise, HeroFranchise::Unknown);
        assert!(no_pick.hero_portrait.ends_with("storm_ui_ingame_heroselect_btn_nopick.png"));

        let unknown = index.hero_info("Nobody");
        assert_eq!(unknown.name, "Nobody");
        assert!(unknown.hero_portrait.ends_with("storm_ui_ingame_heroselect_btn_notfound.png"));
        assert!(!index.hero_exists(NO_PICK_HERO_NAME));
    }

    #[test]
    fn test_list_of_heroes_filters_and_sorts() {
        let mut index = empty_index();
        for (short, name, id, available) in [
            ("Zarya", "Zarya", "Zary", 40000),
            ("Anubarak", "Anub'arak", "Anub", 0),
            ("Alarak", "Alarak", "Alar", 50000),
            ("Abathur", "Abathur", "Abat", 47479),
        ] {
            let mut rec = record(short, name, id, &[]);
            rec.hero.build_available = available;
            index.insert_record(rec).unwrap();
        }

        assert_eq!(index.list_of_heroes(47479), vec!["Abathur", "Anub'arak", "Zarya"]);
        assert_eq!(index.list_of_heroes(0), vec!["Anub'arak"]);
        assert_eq!(index.list_of_heroes(u32::MAX).len(), 4);
    }
}
