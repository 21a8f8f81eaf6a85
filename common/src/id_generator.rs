use rand::Rng;

const ADJECTIVES: &[&str] = &[
    "Swift", "Brave", "Hungry", "Sneaky", "Silent", "Golden", "Wild", "Coiled",
    "Fierce", "Lazy", "Quick", "Greedy", "Bold", "Slick", "Cunning", "Sly",
];

const NOUNS: &[&str] = &[
    "Python", "Cobra", "Viper", "Mamba", "Adder", "Boa", "Krait", "Asp",
    "Racer", "Taipan", "Garter", "Sidewinder", "Anaconda", "Rattler", "Kingsnake", "Eel",
];

/// Suggests a random player name that always fits the player-name length limit.
pub fn generate_player_name() -> String {
    let mut rng = rand::rng();
    let adjective = ADJECTIVES[rng.random_range(0..ADJECTIVES.len())];
    let noun = NOUNS[rng.random_range(0..NOUNS.len())];
    format!("{} {}", adjective, noun)
}
