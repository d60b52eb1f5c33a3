//! Static replacement tables.
//!
//! Both tables are fixed at build time. The dictionary lists base glyphs only;
//! the matcher built from it also consumes a trailing U+FE0F so that the
//! text-presentation and emoji-presentation forms of a glyph are removed
//! together.

/// Emoji presentation selector (VS16).
pub const VARIATION_SELECTOR_16: char = '\u{FE0F}';

/// Glyphs commonly found in project documentation.
pub const DICTIONARY: &[&str] = &[
    "🚀", "📚", "🎯", "🏗", "🛠", "💻", "📁", "🎨", "🧪", "📝", "🔄", "📡", "🌐", "🔐",
    "🔑", "👤", "🛍", "📦", "📊", "🔧", "🚨", "🔍", "🧹", "🆘", "❓", "🎓", "🤝", "📋",
    "✅", "🎉", "🔮", "🏆", "📱", "🏥", "🎮", "📈", "🔒", "🌟", "🏛", "📄", "⚠", "⚡",
    "🔥", "💡", "🎪", "🎭", "🎬", "🎵", "🎶", "🎸", "🎹", "🎺", "🎻", "🥁", "🎤", "🎧",
    "📻", "🎙", "📺", "📹", "📷", "📸", "🔎", "🕯", "🔦", "🏮", "📔", "📕", "📖", "📗",
    "📘", "📙", "📓", "📒", "📃", "📜", "📰", "🗞", "📑", "🔖", "🏷", "💰", "💴", "💵",
    "💶", "💷", "💸", "💳", "💎", "⚖", "🔨", "⛏", "⚙", "🔩", "⚗", "🔬", "🔭", "💉",
    "💊", "🚪", "🛏", "🛋", "🚽", "🚿", "🛁", "🧴", "🧷", "🧺", "🧻", "🧼", "🧽",
];

/// An inclusive code-point range removed by the range strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlyphRange {
    pub start: char,
    pub end: char,
    pub label: &'static str,
}

const fn range(start: char, end: char, label: &'static str) -> GlyphRange {
    GlyphRange { start, end, label }
}

/// Code-point ranges treated as pictographic.
///
/// Single code points are expressed as one-element ranges.
pub const RANGES: &[GlyphRange] = &[
    range('\u{1F600}', '\u{1F64F}', "emoticons"),
    range('\u{1F300}', '\u{1F5FF}', "symbols & pictographs"),
    range('\u{1F680}', '\u{1F6FF}', "transport & map symbols"),
    range('\u{1F1E0}', '\u{1F1FF}', "regional indicators"),
    range('\u{1F900}', '\u{1F9FF}', "supplemental symbols & pictographs"),
    range('\u{1FA00}', '\u{1FA6F}', "chess symbols"),
    range('\u{1FA70}', '\u{1FAFF}', "symbols & pictographs extended-a"),
    range('\u{1F700}', '\u{1F8FF}', "alchemical, geometric shapes extended, arrows-c"),
    range('\u{1F000}', '\u{1F0FF}', "mahjong, dominoes, playing cards"),
    range('\u{1F100}', '\u{1F2FF}', "enclosed alphanumeric & ideographic supplement"),
    range('\u{2500}', '\u{2BEF}', "box drawing, misc symbols, dingbats, arrows"),
    range('\u{24C2}', '\u{24C2}', "circled m"),
    range('\u{231A}', '\u{231B}', "watch & hourglass"),
    range('\u{23CF}', '\u{23CF}', "eject"),
    range('\u{23E9}', '\u{23F3}', "media controls"),
    range('\u{3030}', '\u{3030}', "wavy dash"),
    range('\u{200D}', '\u{200D}', "zero width joiner"),
    range('\u{20E3}', '\u{20E3}', "combining keycap"),
    range('\u{FE0F}', '\u{FE0F}', "variation selector-16"),
    range('\u{E0020}', '\u{E007F}', "tag characters"),
];

impl GlyphRange {
    pub fn contains(&self, c: char) -> bool {
        self.start <= c && c <= self.end
    }
}

/// Whether `glyph` is one character, optionally followed by VS16.
///
/// Removing such glyphs can never join neighbours into a new match, so a
/// dictionary made only of them cleans in a single pass.
pub fn is_single_glyph(glyph: &str) -> bool {
    let base = glyph.strip_suffix(VARIATION_SELECTOR_16).unwrap_or(glyph);
    let mut chars = base.chars();
    matches!((chars.next(), chars.next()), (Some(c), None) if c != VARIATION_SELECTOR_16)
}

/// Returns true if `c` falls inside any of [`RANGES`].
pub fn in_ranges(c: char) -> bool {
    RANGES.iter().any(|r| r.contains(c))
}

/// Regex character class source covering every range in [`RANGES`].
pub fn range_class() -> String {
    let mut class = String::from("[");
    for r in RANGES {
        if r.start == r.end {
            class.push_str(&format!("\\x{{{:X}}}", r.start as u32));
        } else {
            class.push_str(&format!(
                "\\x{{{:X}}}-\\x{{{:X}}}",
                r.start as u32, r.end as u32
            ));
        }
    }
    class.push(']');
    class
}
