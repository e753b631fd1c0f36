//! Tone-number pinyin (`shou3 zhi3`) to tone marks (`shǒu zhǐ`)

use std::sync::LazyLock;

use regex::{Captures, Regex};

static SYLLABLE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[a-zA-Z:]+\d").unwrap());

/// Marked forms for tones 1 to 4
fn marked(vowel: char, tone: usize) -> Option<char> {
    let marks = match vowel {
        'a' => ['ā', 'á', 'ǎ', 'à'],
        'e' => ['ē', 'é', 'ě', 'è'],
        'i' => ['ī', 'í', 'ǐ', 'ì'],
        'o' => ['ō', 'ó', 'ǒ', 'ò'],
        'u' => ['ū', 'ú', 'ǔ', 'ù'],
        'ü' => ['ǖ', 'ǘ', 'ǚ', 'ǜ'],
        _ => return None,
    };
    marks.get(tone.checked_sub(1)?).copied()
}

fn is_vowel(c: char) -> bool {
    matches!(c, 'a' | 'e' | 'i' | 'o' | 'u' | 'ü')
}

/// Convert every numbered syllable of `pinyin`, leaving other text untouched.
/// Syllables without a vowel (`m2`, `r5`) are kept as written.
pub fn format_pinyin(pinyin: &str) -> String {
    SYLLABLE_RE
        .replace_all(pinyin, |caps: &Captures| format_syllable(&caps[0]))
        .into_owned()
}

fn format_syllable(syllable: &str) -> String {
    let Some((letters, digit)) = syllable.split_at_checked(syllable.len() - 1) else {
        return syllable.to_string();
    };
    let tone: usize = digit.parse().unwrap_or(5);

    let letters = letters.to_lowercase().replace("u:", "ü").replace('v', "ü");
    let mut chars: Vec<char> = letters.chars().collect();

    let Some(start) = chars.iter().position(|c| is_vowel(*c)) else {
        return syllable.to_string();
    };
    let cluster = chars[start..].iter().take_while(|c| is_vowel(**c)).count();

    // a, e and o take the mark when they lead the cluster, otherwise the second vowel does
    let target = if cluster == 1 || matches!(chars[start], 'a' | 'e' | 'o') {
        start
    } else {
        start + 1
    };

    if let Some(mark) = marked(chars[target], tone) {
        chars[target] = mark;
    }

    chars.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn marks_single_and_leading_vowels() {
        assert_eq!(format_pinyin("shou3 zhi3"), "shǒu zhǐ");
        assert_eq!(format_pinyin("hao3"), "hǎo");
        assert_eq!(format_pinyin("mei2"), "méi");
    }

    #[test]
    fn marks_second_vowel_of_i_and_u_clusters() {
        assert_eq!(format_pinyin("xiu1"), "xiū");
        assert_eq!(format_pinyin("gui4"), "guì");
        assert_eq!(format_pinyin("jia1"), "jiā");
        assert_eq!(format_pinyin("yue4 liang5"), "yuè liang");
    }

    #[test]
    fn converts_umlaut_spellings() {
        assert_eq!(format_pinyin("lu:4"), "lǜ");
        assert_eq!(format_pinyin("nv3"), "nǚ");
        assert_eq!(format_pinyin("lve4"), "lüè");
    }

    #[test]
    fn keeps_letters_and_vowelless_syllables() {
        assert_eq!(format_pinyin("U S B shou3 zhi3"), "U S B shǒu zhǐ");
        assert_eq!(format_pinyin("m2"), "m2");
        assert_eq!(format_pinyin("Zhong1 guo2"), "zhōng guó");
    }
}
