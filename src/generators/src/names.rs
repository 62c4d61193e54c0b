// src/generators/src/names.rs
//! Fixed vocabularies for generated names.

pub const PLAYER_FIRST_NAMES: [&str; 26] = [
    "Aiden", "Brynn", "Caspian", "Daphne", "Elowen", "Finn", "Gwendolyn", "Hector", "Iris",
    "Jasper", "Keira", "Liam", "Mira", "Nolan", "Ophelia", "Phoenix", "Quinn", "Rowan", "Sage",
    "Thora", "Ursa", "Vex", "Wren", "Xander", "Yara", "Zephyr",
];

pub const PLAYER_LAST_NAMES: [&str; 20] = [
    "Blackwood", "Cloudkeeper", "Dawnbringer", "Earthshaker", "Frostwind", "Goldenheart",
    "Ironside", "Lightfoot", "Moonshadow", "Nightwalker", "Oakenshield", "Ravenclaw",
    "Silverthorn", "Stormborn", "Swiftarrow", "Thorngage", "Truthseeker", "Voidwalker",
    "Windrider", "Wolfsbane",
];

pub const PLAYER_TITLES: [&str; 15] = [
    "the Brave", "the Wise", "the Swift", "the Strong", "the Cunning", "the Just",
    "the Merciful", "the Unyielding", "the Shadowdancer", "the Dragonheart", "the Spellweaver",
    "the Lionheart", "the Peacekeeper", "the Stormcaller", "the Truthsayer",
];

pub const MONSTER_PREFIXES: [&str; 10] = [
    "Shadow", "Frost", "Flame", "Storm", "Chaos", "Void", "Toxic", "Feral", "Ancient", "Mystic",
];

pub const MONSTER_ROOTS: [&str; 10] = [
    "fang", "claw", "wing", "scale", "horn", "tail", "eye", "maw", "spine", "tentacle",
];

pub const MONSTER_SUFFIXES: [&str; 10] = [
    "biter", "stalker", "crusher", "slayer", "howler", "lurker", "reaver", "wraith", "beast",
    "fiend",
];

pub const LOOT_PREFIXES: [&str; 10] = [
    "Rusty", "Shiny", "Ancient", "Magical", "Cursed", "Blessed", "Enchanted", "Mysterious",
    "Glowing", "Dark",
];

pub const LOOT_MATERIALS: [&str; 10] = [
    "Iron", "Gold", "Silver", "Bronze", "Crystal", "Obsidian", "Mithril", "Dragonbone",
    "Moonstone", "Stardust",
];

pub const LOOT_ITEMS: [&str; 10] = [
    "Sword", "Shield", "Amulet", "Ring", "Potion", "Scroll", "Gem", "Coin", "Dagger", "Staff",
];

/// Pick one word, reporting which vocabulary was empty on failure.
pub(crate) fn pick<'a, R: crate::RandomSource + ?Sized>(
    rng: &mut R,
    vocabulary: &'static str,
    words: &'a [&'a str],
) -> error::GameResult<&'a str> {
    if words.is_empty() {
        return Err(error::GameError::EmptyVocabulary(vocabulary));
    }
    rng.pick_one(words).copied()
}
