//! Static catalog of scorable rank items.
//!
//! Every achievement the clan awards points for is one [`ItemDef`] entry in
//! [`ITEMS`], pairing a maximum point value with the [`Rule`] that decides
//! completion. Adding a new scorable item is a table edit, not a code
//! change: the engine walks the table and matches on the rule variant.

use std::collections::HashSet;

use crate::error::CatalogError;
use crate::snapshot::CombatTier;

/// Maximum collection log slots the profile source can report.
pub const MAX_COLLECTION_SLOTS: u32 = 1594;

/// EHB/EHP value at which the efficiency items cap out.
pub const EFFICIENCY_CAP: u32 = 1250;

/// The five Tombs of Amascut remnants; all must be owned simultaneously.
pub const TOA_REMNANTS: &[&str] = &[
    "Remnant of akkha",
    "Remnant of ba-ba",
    "Remnant of kephri",
    "Remnant of zebak",
    "Ancient remnant",
];

/// Display grouping for the report, in fixed evaluation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Quests,
    Diaries,
    Pvm,
    Skilling,
    Misc,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Quests,
        Category::Diaries,
        Category::Pvm,
        Category::Skilling,
        Category::Misc,
    ];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Category::Quests => "Quests",
            Category::Diaries => "Diaries",
            Category::Pvm => "PvM",
            Category::Skilling => "Skilling",
            Category::Misc => "Miscellaneous",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Stable identifier for every rank item, replacing lookup by display name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItemKey {
    QuestPoints,
    MiniquestsCompleted,
    RecipeForDisaster,
    MonkeyMadness2,
    DragonSlayer2,
    SongOfTheElves,
    AKingdomDivided,
    DesertTreasure2,
    WhileGuthixSleeps,
    DiariesCompleted,
    EasyDiaries,
    MediumDiaries,
    HardDiaries,
    EliteDiaries,
    CombatPoints,
    EasyCombat,
    MediumCombat,
    HardCombat,
    EliteCombat,
    MasterCombat,
    GrandmasterCombat,
    DragonDefender,
    FighterTorso,
    FireCape,
    ImbuedGodCape,
    VorkathsHead,
    GauntletCape,
    ThreadOfElidinis,
    MasoriCraftingKit,
    MenaphiteOrnamentKit,
    CursedPhalanx,
    ToaRemnants,
    XericsGuard,
    SinhazaShroud,
    IcthlarinsShroud,
    InfernalCape,
    DizanasQuiver,
    AncientBloodOrnamentKit,
    PurifyingSigil,
    Ehb,
    Level1250,
    Level1500,
    Level1750,
    Level2000,
    Level2100,
    Level2200,
    Level2277,
    Ehp,
    CollectionsLogged,
    MusicCape,
    OneMonthInClan,
    ThreeMonthsInClan,
    SixMonthsInClan,
    OneYearInClan,
    TwoYearsInClan,
}

/// Maximum point value of an item.
///
/// Most items carry a fixed value; a few derive their maximum from the
/// snapshot itself (e.g. the miniquest count the profile source reports),
/// resolved at evaluation time.
#[derive(Debug, Clone, Copy)]
pub enum MaxPoints {
    Fixed(u32),
    /// Sum of every mapped quest's point value.
    QuestPointTotal,
    /// Number of miniquest records in the profile snapshot.
    MiniquestTotal,
    /// Sum of `tasks_count` across all diary tier records.
    DiaryTaskTotal,
    /// Sum of `id * tasks_count` across all combat achievement tiers.
    CombatPointTotal,
}

/// Completion rule for an item.
///
/// Two families: binary rules award either zero or the maximum, while the
/// accumulator rules (`QuestPoints`, `MiniquestCount`, `DiaryTasks`,
/// `CombatPoints`, `Ehb`, `Ehp`, `CollectionCount`) report a running value
/// capped at the maximum and only flip `completed` at the cap. That
/// asymmetry is load-bearing: the rank total counts accumulated points
/// below the cap.
#[derive(Debug, Clone, Copy)]
pub enum Rule {
    /// Sum of quest point values over completed quests.
    QuestPoints,
    /// Count of completed miniquest records.
    MiniquestCount,
    /// A specific quest record is completed. The name must match the
    /// profile source exactly, including subtitles.
    QuestComplete(&'static str),
    /// Every diary record with this tier index is fully completed.
    DiaryTier(u32),
    /// Sum of completed diary tasks across all tiers.
    DiaryTasks,
    /// Sum of `completed_count * id` over combat achievement tiers.
    CombatPoints,
    /// Earned combat achievement points reach this tier's cumulative
    /// threshold.
    CombatTier(u32),
    /// An exact item name is present in the collection log.
    OwnedItem(&'static str),
    /// Every listed item name is present in the collection log.
    OwnedAll(&'static [&'static str]),
    /// Efficient hours bossed, floored and capped.
    Ehb,
    /// Efficient hours played, floored and capped.
    Ehp,
    /// Overall total level meets this threshold.
    TotalLevel(u32),
    /// Collection log slot count, capped.
    CollectionCount,
    /// At least this many whole days since joining the clan.
    TenureDays(i64),
    /// No upstream signal exists for this item; it stays at zero. A known,
    /// permanent limitation of the data sources, not a gap to paper over.
    Unscored,
}

/// One catalog entry.
#[derive(Debug)]
pub struct ItemDef {
    pub key: ItemKey,
    pub name: &'static str,
    pub category: Category,
    pub max: MaxPoints,
    pub rule: Rule,
}

const fn item(
    key: ItemKey,
    name: &'static str,
    category: Category,
    max: MaxPoints,
    rule: Rule,
) -> ItemDef {
    ItemDef {
        key,
        name,
        category,
        max,
        rule,
    }
}

/// The full rank item catalog, ordered by category for deterministic output.
pub const ITEMS: &[ItemDef] = &[
    // Quests
    item(
        ItemKey::QuestPoints,
        "Quest Points",
        Category::Quests,
        MaxPoints::QuestPointTotal,
        Rule::QuestPoints,
    ),
    item(
        ItemKey::MiniquestsCompleted,
        "Miniquests Completed",
        Category::Quests,
        MaxPoints::MiniquestTotal,
        Rule::MiniquestCount,
    ),
    item(
        ItemKey::RecipeForDisaster,
        "Recipe for Disaster",
        Category::Quests,
        MaxPoints::Fixed(50),
        Rule::QuestComplete("Recipe for Disaster"),
    ),
    item(
        ItemKey::MonkeyMadness2,
        "Monkey Madness II",
        Category::Quests,
        MaxPoints::Fixed(50),
        Rule::QuestComplete("Monkey Madness II"),
    ),
    item(
        ItemKey::DragonSlayer2,
        "Dragon Slayer II",
        Category::Quests,
        MaxPoints::Fixed(100),
        Rule::QuestComplete("Dragon Slayer II"),
    ),
    item(
        ItemKey::SongOfTheElves,
        "Song of the Elves",
        Category::Quests,
        MaxPoints::Fixed(50),
        Rule::QuestComplete("Song of the Elves"),
    ),
    item(
        ItemKey::AKingdomDivided,
        "A Kingdom Divided",
        Category::Quests,
        MaxPoints::Fixed(50),
        Rule::QuestComplete("A Kingdom Divided"),
    ),
    item(
        ItemKey::DesertTreasure2,
        "Desert Treasure II",
        Category::Quests,
        MaxPoints::Fixed(100),
        // The profile source reports the full subtitled name.
        Rule::QuestComplete("Desert Treasure II - The Fallen Empire"),
    ),
    item(
        ItemKey::WhileGuthixSleeps,
        "While Guthix Sleeps",
        Category::Quests,
        MaxPoints::Fixed(50),
        Rule::QuestComplete("While Guthix Sleeps"),
    ),
    // Diaries
    item(
        ItemKey::DiariesCompleted,
        "Achievement Diaries Completed",
        Category::Diaries,
        MaxPoints::DiaryTaskTotal,
        Rule::DiaryTasks,
    ),
    item(
        ItemKey::EasyDiaries,
        "Easy Diaries",
        Category::Diaries,
        MaxPoints::Fixed(50),
        Rule::DiaryTier(0),
    ),
    item(
        ItemKey::MediumDiaries,
        "Medium Diaries",
        Category::Diaries,
        MaxPoints::Fixed(50),
        Rule::DiaryTier(1),
    ),
    item(
        ItemKey::HardDiaries,
        "Hard Diaries",
        Category::Diaries,
        MaxPoints::Fixed(100),
        Rule::DiaryTier(2),
    ),
    item(
        ItemKey::EliteDiaries,
        "Elite Diaries",
        Category::Diaries,
        MaxPoints::Fixed(200),
        Rule::DiaryTier(3),
    ),
    // PvM
    item(
        ItemKey::CombatPoints,
        "Combat Achievement Points",
        Category::Pvm,
        MaxPoints::CombatPointTotal,
        Rule::CombatPoints,
    ),
    item(
        ItemKey::EasyCombat,
        "Easy Combat Achievements",
        Category::Pvm,
        MaxPoints::Fixed(50),
        Rule::CombatTier(1),
    ),
    item(
        ItemKey::MediumCombat,
        "Medium Combat Achievements",
        Category::Pvm,
        MaxPoints::Fixed(50),
        Rule::CombatTier(2),
    ),
    item(
        ItemKey::HardCombat,
        "Hard Combat Achievements",
        Category::Pvm,
        MaxPoints::Fixed(100),
        Rule::CombatTier(3),
    ),
    item(
        ItemKey::EliteCombat,
        "Elite Combat Achievements",
        Category::Pvm,
        MaxPoints::Fixed(100),
        Rule::CombatTier(4),
    ),
    item(
        ItemKey::MasterCombat,
        "Master Combat Achievements",
        Category::Pvm,
        MaxPoints::Fixed(200),
        Rule::CombatTier(5),
    ),
    item(
        ItemKey::GrandmasterCombat,
        "Grandmaster Combat Achievements",
        Category::Pvm,
        MaxPoints::Fixed(300),
        Rule::CombatTier(6),
    ),
    item(
        ItemKey::DragonDefender,
        "Dragon Defender",
        Category::Pvm,
        MaxPoints::Fixed(50),
        Rule::OwnedItem("Dragon defender"),
    ),
    item(
        ItemKey::FighterTorso,
        "Fighter Torso",
        Category::Pvm,
        MaxPoints::Fixed(50),
        Rule::OwnedItem("Fighter torso"),
    ),
    item(
        ItemKey::FireCape,
        "Fire Cape",
        Category::Pvm,
        MaxPoints::Fixed(100),
        Rule::OwnedItem("Fire cape"),
    ),
    item(
        ItemKey::ImbuedGodCape,
        "Imbued God Cape",
        Category::Pvm,
        MaxPoints::Fixed(50),
        // No collection log entry exists; the unlocking miniquest stands in.
        Rule::QuestComplete("Mage Arena II"),
    ),
    item(
        ItemKey::VorkathsHead,
        "Vorkath's Head",
        Category::Pvm,
        MaxPoints::Fixed(50),
        Rule::OwnedItem("Vorkath's head"),
    ),
    item(
        ItemKey::GauntletCape,
        "Gauntlet Cape",
        Category::Pvm,
        MaxPoints::Fixed(50),
        Rule::OwnedItem("Gauntlet cape"),
    ),
    item(
        ItemKey::ThreadOfElidinis,
        "Thread of Elidinis",
        Category::Pvm,
        MaxPoints::Fixed(50),
        Rule::OwnedItem("Thread of elidinis"),
    ),
    item(
        ItemKey::MasoriCraftingKit,
        "Masori Crafting Kit",
        Category::Pvm,
        MaxPoints::Fixed(25),
        Rule::OwnedItem("Masori crafting kit"),
    ),
    item(
        ItemKey::MenaphiteOrnamentKit,
        "Menaphite Ornament Kit",
        Category::Pvm,
        MaxPoints::Fixed(25),
        Rule::OwnedItem("Menaphite ornament kit"),
    ),
    item(
        ItemKey::CursedPhalanx,
        "Cursed Phalanx",
        Category::Pvm,
        MaxPoints::Fixed(50),
        Rule::OwnedItem("Cursed phalanx"),
    ),
    item(
        ItemKey::ToaRemnants,
        "ToA Remnants",
        Category::Pvm,
        MaxPoints::Fixed(200),
        Rule::OwnedAll(TOA_REMNANTS),
    ),
    item(
        ItemKey::XericsGuard,
        "Xeric's Guard",
        Category::Pvm,
        MaxPoints::Fixed(200),
        Rule::OwnedItem("Xeric's guard"),
    ),
    item(
        ItemKey::SinhazaShroud,
        "Sinhaza Shroud",
        Category::Pvm,
        MaxPoints::Fixed(200),
        Rule::OwnedItem("Sinhaza shroud tier 1"),
    ),
    item(
        ItemKey::IcthlarinsShroud,
        "Icthlarin's Shroud",
        Category::Pvm,
        MaxPoints::Fixed(200),
        Rule::OwnedItem("Icthlarin's shroud (tier 1)"),
    ),
    item(
        ItemKey::InfernalCape,
        "Infernal Cape",
        Category::Pvm,
        MaxPoints::Fixed(200),
        Rule::OwnedItem("Infernal cape"),
    ),
    item(
        ItemKey::DizanasQuiver,
        "Dizana's Quiver",
        Category::Pvm,
        MaxPoints::Fixed(200),
        Rule::OwnedItem("Dizana's quiver"),
    ),
    item(
        ItemKey::AncientBloodOrnamentKit,
        "Ancient Blood Ornament Kit",
        Category::Pvm,
        MaxPoints::Fixed(300),
        Rule::Unscored,
    ),
    item(
        ItemKey::PurifyingSigil,
        "Purifying Sigil",
        Category::Pvm,
        MaxPoints::Fixed(300),
        Rule::Unscored,
    ),
    item(
        ItemKey::Ehb,
        "EHB",
        Category::Pvm,
        MaxPoints::Fixed(EFFICIENCY_CAP),
        Rule::Ehb,
    ),
    // Skilling
    item(
        ItemKey::Level1250,
        "1250 Total Level",
        Category::Skilling,
        MaxPoints::Fixed(100),
        Rule::TotalLevel(1250),
    ),
    item(
        ItemKey::Level1500,
        "1500 Total Level",
        Category::Skilling,
        MaxPoints::Fixed(100),
        Rule::TotalLevel(1500),
    ),
    item(
        ItemKey::Level1750,
        "1750 Total Level",
        Category::Skilling,
        MaxPoints::Fixed(100),
        Rule::TotalLevel(1750),
    ),
    item(
        ItemKey::Level2000,
        "2000 Total Level",
        Category::Skilling,
        MaxPoints::Fixed(200),
        Rule::TotalLevel(2000),
    ),
    item(
        ItemKey::Level2100,
        "2100 Total Level",
        Category::Skilling,
        MaxPoints::Fixed(200),
        Rule::TotalLevel(2100),
    ),
    item(
        ItemKey::Level2200,
        "2200 Total Level",
        Category::Skilling,
        MaxPoints::Fixed(250),
        Rule::TotalLevel(2200),
    ),
    item(
        ItemKey::Level2277,
        "2277 Total Level",
        Category::Skilling,
        MaxPoints::Fixed(300),
        Rule::TotalLevel(2277),
    ),
    item(
        ItemKey::Ehp,
        "EHP",
        Category::Skilling,
        MaxPoints::Fixed(EFFICIENCY_CAP),
        Rule::Ehp,
    ),
    // Miscellaneous
    item(
        ItemKey::CollectionsLogged,
        "Collections Logged",
        Category::Misc,
        MaxPoints::Fixed(MAX_COLLECTION_SLOTS),
        Rule::CollectionCount,
    ),
    item(
        ItemKey::MusicCape,
        "Music Cape",
        Category::Misc,
        MaxPoints::Fixed(50),
        Rule::Unscored,
    ),
    item(
        ItemKey::OneMonthInClan,
        "1 Month in Clan",
        Category::Misc,
        MaxPoints::Fixed(30),
        Rule::TenureDays(30),
    ),
    item(
        ItemKey::ThreeMonthsInClan,
        "3 Months in Clan",
        Category::Misc,
        MaxPoints::Fixed(90),
        Rule::TenureDays(90),
    ),
    item(
        ItemKey::SixMonthsInClan,
        "6 Months in Clan",
        Category::Misc,
        MaxPoints::Fixed(180),
        Rule::TenureDays(180),
    ),
    item(
        ItemKey::OneYearInClan,
        "1 Year in Clan",
        Category::Misc,
        MaxPoints::Fixed(360),
        Rule::TenureDays(365),
    ),
    item(
        ItemKey::TwoYearsInClan,
        "2 Years in Clan",
        Category::Misc,
        MaxPoints::Fixed(720),
        Rule::TenureDays(730),
    ),
];

/// Checks the static catalog for duplicate keys or display names.
///
/// # Errors
///
/// Returns [`CatalogError::DuplicateItem`] on the first duplicate found.
pub fn validate_catalog() -> Result<(), CatalogError> {
    let mut names = HashSet::new();
    let mut keys = HashSet::new();
    for def in ITEMS {
        if !names.insert(def.name) || !keys.insert(def.key) {
            return Err(CatalogError::DuplicateItem(def.name.to_string()));
        }
    }
    Ok(())
}

/// Cumulative combat achievement thresholds, derived from the snapshot's
/// tier records. Tier *i* is complete once earned combat achievement points
/// reach the running sum of `id * tasks_count` through tier *i*.
#[derive(Debug, Clone)]
pub struct CombatLadder {
    // (tier id, cumulative threshold), ascending by id.
    cumulative: Vec<(u32, u32)>,
}

impl CombatLadder {
    #[must_use]
    pub fn from_tiers(tiers: &[CombatTier]) -> Self {
        let mut sorted: Vec<&CombatTier> = tiers.iter().collect();
        sorted.sort_by_key(|t| t.id);

        let mut cumulative = Vec::with_capacity(sorted.len());
        let mut running = 0u32;
        for tier in sorted {
            running += tier.id * tier.tasks_count;
            cumulative.push((tier.id, running));
        }
        Self { cumulative }
    }

    /// The cumulative threshold for a tier id, or `None` if the snapshot
    /// carried no record for that tier.
    #[must_use]
    pub fn threshold(&self, tier_id: u32) -> Option<u32> {
        self.cumulative
            .iter()
            .find(|(id, _)| *id == tier_id)
            .map(|(_, cum)| *cum)
    }
}
