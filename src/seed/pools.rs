use rand::Rng;
use rand::seq::SliceRandom;

/// Canned agent replies attached to tickets.
pub const COMMENTS: &[&str] = &[
    "I'm on it!",
    "Checking this out.",
    "Let me handle this one.",
    "Reached out to the consumer for more info.",
    "The next version should solve this issue.",
    "Checked with engineering for a possible fix. Waiting to hear back.",
    "I think I have a fix documented somewhere. I'll get back to this asap.",
];

/// Canned problem statements for tickets.
pub const DESCRIPTIONS: &[&str] = &[
    "Consumer lost the product manual.",
    "Consumer has a feature suggestion",
    "Consumer needs replacement parts.",
    "Consumer needs clarification on assembly/install instructions.",
    "Feature x is not functioning properly for this consumer.",
    "Consumer wants a time estimate on next version",
];

pub const PRODUCT_ADJECTIVES: &[&str] = &[
    "Small", "Ergonomic", "Rustic", "Intelligent", "Gorgeous", "Incredible", "Fantastic",
    "Practical", "Sleek", "Awesome", "Generic", "Handcrafted", "Handmade", "Licensed",
    "Refined", "Unbranded", "Tasty",
];

pub const PRODUCT_MATERIALS: &[&str] = &[
    "Steel", "Wooden", "Concrete", "Plastic", "Cotton", "Granite", "Rubber", "Metal", "Soft",
    "Fresh", "Frozen",
];

pub const PRODUCT_NOUNS: &[&str] = &[
    "Chair", "Car", "Computer", "Keyboard", "Mouse", "Bike", "Ball", "Gloves", "Pants", "Shirt",
    "Table", "Shoes", "Hat", "Towels", "Soap", "Tuna", "Chicken", "Fish", "Cheese", "Bacon",
    "Pizza", "Salad", "Sausages", "Chips",
];

/// Picks one entry of a static pool uniformly at random.
///
/// Every pool in this module is non-empty.
pub fn pick_random<'a, R: Rng>(rng: &mut R, pool: &'a [&'a str]) -> &'a str {
    pool.choose(rng).copied().unwrap_or_default()
}

/// A commerce-style product name such as "Rustic Wooden Chair".
pub fn product_name<R: Rng>(rng: &mut R) -> String {
    format!(
        "{} {} {}",
        pick_random(rng, PRODUCT_ADJECTIVES),
        pick_random(rng, PRODUCT_MATERIALS),
        pick_random(rng, PRODUCT_NOUNS)
    )
}
