//! Static configuration data: the curated slug list and the search-title
//! override table. Both are fixed at compile time; nothing here is logic.

/// Slugs whose default normalization does not produce the catalog title,
/// mostly numeric prefixes, acronyms, and stylized names.
pub const TITLE_OVERRIDES: &[(&str, &str)] = &[
    ("14303_vrdefendery3k", "VR Defender Y3K"),
    ("1048_castle", "1048 Castle"),
    ("alien-hominid", "Alien Hominid"),
    ("bot-arena-2", "Bot Arena 2"),
    ("bow-master-prelude", "Bow Master Prelude"),
    ("bubble-tanks-2", "Bubble Tanks 2"),
    ("bunny-invasion-2", "Bunny Invasion 2"),
    ("copter", "Helicopter Game"),
    ("crush-the-castle", "Crush the Castle"),
    ("d-fence-2", "D-Fence 2"),
    ("defend-your-castle", "Defend Your Castle"),
    ("demonic-defence-3", "Demonic Defence 3"),
    ("dolphin-olympics-2", "Dolphin Olympics 2"),
    ("double-wires", "Double Wires"),
    ("fancy-pants-adventure", "The Fancy Pants Adventures"),
    ("fancy-pants-adventure-2", "The Fancy Pants Adventures: World 2"),
    ("gem-tower-defense", "Gem Tower Defense"),
    ("gravity-game", "Gravity Game"),
    ("gunmaster-jungle", "Gunmaster Jungle"),
    ("hot-air-baloons", "Hot Air Balloon"),
    ("interactive-buddy", "Interactive Buddy"),
    ("line-rider-beta-2", "Line Rider"),
    ("the-last-stand-2", "The Last Stand 2"),
    ("madness-accelerant", "Madness Accelerant"),
    ("max-dirtbike", "Max Dirt Bike"),
    ("me2d-game", "ME2D"),
    ("missile-game-3d", "Missile Game 3D"),
    ("n-ninja", "N (The Way of the Ninja)"),
    ("pet-protector-2", "Pet Protector 2"),
    ("phage-wars", "Phage Wars"),
    ("portal", "Portal: The Flash Version"),
    ("raiden-x", "Raiden X"),
    ("realm-of-the-mad-god", "Realm of the Mad God"),
    ("sonny-2", "Sonny 2"),
    ("stick-strike", "Stick Strike"),
    ("super-mario-flash", "Super Mario Flash"),
    ("super-smash-flash", "Super Smash Flash"),
    ("bloons-tower-defense-3", "Bloons Tower Defense 3"),
    ("bloons-tower-defense-4", "Bloons Tower Defense 4"),
];

/// The full curated list, fetched in this order.
pub const GAMES: &[&str] = &[
    "14303_vrdefendery3k",
    "1048_castle",
    "adrenaline",
    "alien-hominid",
    "alpha-bravo-charlie",
    "archer",
    "asteroids",
    "avalanche",
    "bloons-tower-defense-3",
    "bloons-tower-defense-4",
    "bot-arena-2",
    "bowman",
    "bow-master-prelude",
    "bubble-tanks-2",
    "bubble-tanks",
    "bubble-trouble",
    "bunny-invasion-2",
    "copter",
    "cubefield",
    "curveball",
    "crush-the-castle",
    "d-fence-2",
    "defend-your-castle",
    "demonic-defence-3",
    "dolphin-olympics-2",
    "double-wires",
    "fancy-pants-adventure-2",
    "fancy-pants-adventure",
    "feudalism-2",
    "fishy",
    "gem-tower-defense",
    "gravity-game",
    "gunmaster-jungle",
    "helicopter",
    "hot-air-baloons",
    "interactive-buddy",
    "line-rider-beta-2",
    "the-last-stand-2",
    "manhattan-project",
    "madness-accelerant",
    "max-dirtbike",
    "me2d-game",
    "missile-game-3d",
    "n-ninja",
    "pet-protector-2",
    "phage-wars",
    "portal",
    "raiden-x",
    "realm-of-the-mad-god",
    "run",
    "sonny-2",
    "sonny",
    "stairfall",
    "stick-strike",
    "super-mario-flash",
    "super-smash-flash",
    "tanks",
    "trampoline",
];

pub fn title_override(slug: &str) -> Option<&'static str> {
    TITLE_OVERRIDES
        .iter()
        .find(|(key, _)| *key == slug)
        .map(|(_, title)| *title)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn override_lookup() {
        assert_eq!(title_override("copter"), Some("Helicopter Game"));
        assert_eq!(title_override("adrenaline"), None);
    }

    #[test]
    fn every_override_slug_is_in_the_game_list() {
        for (slug, _) in TITLE_OVERRIDES {
            assert!(GAMES.contains(slug), "orphan override: {slug}");
        }
    }
}
