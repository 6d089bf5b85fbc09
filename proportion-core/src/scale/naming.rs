//! Token naming strategies.

const TSHIRT_NAMES: [&str; 20] = [
    "3xs", "2xs", "xs", "sm", "md", "lg", "xl", "2xl", "3xl", "4xl", "5xl", "6xl", "7xl", "8xl",
    "9xl", "10xl", "11xl", "12xl", "13xl", "14xl",
];

const SEMANTIC_NAMES: [&str; 20] = [
    "micro",
    "tiny",
    "small",
    "compact",
    "base",
    "comfortable",
    "spacious",
    "loose",
    "generous",
    "vast",
    "ultra",
    "mega",
    "supreme",
    "colossal",
    "immense",
    "enormous",
    "monumental",
    "epic",
    "titanic",
    "cosmic",
];

const TAILWIND_KEYS: [&str; 20] = [
    "0", "0.5", "1", "1.5", "2", "2.5", "3", "3.5", "4", "5", "6", "7", "8", "9", "10", "11",
    "12", "14", "16", "20",
];

const FIBONACCI: [u32; 20] = [
    1, 2, 3, 5, 8, 13, 21, 34, 55, 89, 144, 233, 377, 610, 987, 1597, 2584, 4181, 6765, 10946,
];

/// How generated tokens are named.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NamingConvention {
    /// `xs, sm, md, lg, xl`, centered on the dictionary.
    #[default]
    Tshirt,
    /// `100, 200, 300, ...`
    Numeric,
    /// `1, 2, 3, ...`
    Ordinal,
    /// `compact, base, spacious`, centered on the dictionary.
    Semantic,
    /// Tailwind spacing keys `0, 0.5, 1, 1.5, ...`
    Tailwind,
    /// `1, 2, 3, 5, 8, 13, ...`
    Fibonacci,
    /// User-supplied names.
    Custom,
}

impl NamingConvention {
    /// Every convention, in presentation order.
    pub const ALL: [NamingConvention; 7] = [
        NamingConvention::Tshirt,
        NamingConvention::Numeric,
        NamingConvention::Ordinal,
        NamingConvention::Semantic,
        NamingConvention::Tailwind,
        NamingConvention::Fibonacci,
        NamingConvention::Custom,
    ];

    /// Display label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Tshirt => "T-Shirt",
            Self::Numeric => "Numeric",
            Self::Ordinal => "Ordinal",
            Self::Semantic => "Semantic",
            Self::Tailwind => "Tailwind",
            Self::Fibonacci => "Fibonacci",
            Self::Custom => "Custom",
        }
    }

    /// Short sample of the names this convention produces.
    pub fn example(self) -> &'static str {
        match self {
            Self::Tshirt => "xs, sm, md, lg, xl",
            Self::Numeric => "100, 200, 300...",
            Self::Ordinal => "1, 2, 3, 4, 5...",
            Self::Semantic => "compact, base, spacious",
            Self::Tailwind => "0.5, 1, 1.5, 2...",
            Self::Fibonacci => "1, 2, 3, 5, 8, 13",
            Self::Custom => "your names",
        }
    }
}

/// Name of token `index` in a scale of `steps` tokens.
///
/// Dictionary conventions fall back to the bare index once the dictionary runs out; the
/// custom convention falls back to `token-{index}`.
pub fn token_name(
    index: usize,
    steps: usize,
    convention: NamingConvention,
    custom_names: &[String],
) -> String {
    match convention {
        NamingConvention::Tshirt => dictionary_name(&TSHIRT_NAMES, index, steps),
        NamingConvention::Numeric => ((index + 1) * 100).to_string(),
        NamingConvention::Ordinal => (index + 1).to_string(),
        NamingConvention::Semantic => dictionary_name(&SEMANTIC_NAMES, index, steps),
        NamingConvention::Tailwind => TAILWIND_KEYS
            .get(index)
            .map_or_else(|| index.to_string(), |s| (*s).to_string()),
        NamingConvention::Fibonacci => FIBONACCI
            .get(index)
            .map_or_else(|| index.to_string(), u32::to_string),
        NamingConvention::Custom => custom_names
            .get(index)
            .cloned()
            .unwrap_or_else(|| format!("token-{index}")),
    }
}

fn dictionary_name(dict: &[&str], index: usize, steps: usize) -> String {
    centered_slice(dict, steps)
        .get(index)
        .map_or_else(|| index.to_string(), |s| (*s).to_string())
}

/// Sub-slice of `count` entries centered on the middle of `items`; the whole slice when
/// `count` covers it.
fn centered_slice<T>(items: &[T], count: usize) -> &[T] {
    if count >= items.len() {
        return items;
    }
    let start = (items.len() / 2).saturating_sub(count / 2);
    &items[start..start + count]
}

#[cfg(test)]
#[path = "../../tests/unit/scale/naming.rs"]
mod tests;
