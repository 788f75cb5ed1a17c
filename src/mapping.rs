/// One Simplified -> Traditional replacement, quote characters included.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Substitution {
    pub simplified: &'static str,
    pub traditional: &'static str,
}

const fn pair(simplified: &'static str, traditional: &'static str) -> Substitution {
    Substitution {
        simplified,
        traditional,
    }
}

/// Temple/shrine vocabulary and place names seen in the photo captions.
///
/// Keys are matched as literal substrings, so they carry the surrounding
/// `"` (or `："`) from the data file. Some pairs map a term to itself.
pub(crate) static SUBSTITUTIONS: [Substitution; 14] = [
    pair("\"绘马\"", "\"絵馬\""),
    pair("\"东", "\"東"),
    pair("\"木纹\"", "\"木紋\""),
    pair("\"鹿\"", "\"鹿\""),
    pair("\"石灯\"", "\"石燈\""),
    pair("\"寺庙\"", "\"寺廟\""),
    pair("\"结构\"", "\"結構\""),
    pair("\"屋檐\"", "\"屋簷\""),
    pair("\"灯笼\"", "\"燈籠\""),
    pair("\"塔\"", "\"塔\""),
    pair("\"建筑\"", "\"建築\""),
    pair("\"山\"", "\"山\""),
    pair("：\"奈良", "：\"奈良"),
    pair("：\"京都", "：\"京都"),
];

pub fn substitutions() -> &'static [Substitution] {
    &SUBSTITUTIONS
}
