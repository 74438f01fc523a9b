//! Fixed word lists and symbol sets used by the suggestion generator.

pub const ADJECTIVES: [&str; 10] = [
    "Swift", "Bright", "Bold", "Quick", "Smart", "Fresh", "Cool", "Warm", "Sharp", "Clear",
];

pub const NOUNS: [&str; 10] = [
    "Tiger", "Eagle", "River", "Mountain", "Ocean", "Storm", "Fire", "Wind", "Star", "Moon",
];

pub const SYMBOLS: [char; 8] = ['!', '@', '#', '$', '%', '^', '&', '*'];

/// Symbols appended when improving an existing password.
pub const IMPROVE_SYMBOLS: [char; 7] = ['!', '@', '#', '$', '%', '&', '*'];

pub const PASSPHRASE_WORDS: [&str; 20] = [
    "coffee", "sunset", "guitar", "travel", "pizza", "beach", "music", "dance", "smile", "dream",
    "forest", "castle", "rainbow", "thunder", "whisper", "journey", "mystery", "treasure", "magic",
    "wonder",
];

pub const SEPARATORS: [char; 4] = ['-', '_', '.', '!'];

pub const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Memorable phrases and the acronyms derived from them.
pub const ACRONYM_PHRASES: [(&str, &str); 4] = [
    ("I Love To Code Every Day", "ILtCeD"),
    ("My Favorite Color Is Blue", "MFcIb"),
    ("Coffee Makes Me Happy Always", "CmMhA"),
    ("Reading Books Is My Passion", "RbImP"),
];

pub const ACRONYM_SYMBOLS: [char; 4] = ['!', '@', '#', '$'];
