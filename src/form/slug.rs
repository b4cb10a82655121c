use regex::Regex;
use std::sync::LazyLock;

static SLUG_SEPARATOR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new("[^0-9A-Za-z-]+").unwrap_or_else(|err| unreachable!("static pattern: {err}"))
});

/// Lower-case ASCII slug: accents folded, every run of other characters
/// collapsed into a single `-`.
pub fn slugify(input: &str) -> String {
    let folded: String = input
        .chars()
        .flat_map(char::to_lowercase)
        .map(fold_latin)
        .collect();

    SLUG_SEPARATOR
        .split(&folded)
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("-")
}

fn fold_latin(c: char) -> char {
    match c {
        'à' | 'á' | 'â' | 'ã' | 'ä' | 'å' | 'ā' => 'a',
        'ç' | 'ć' | 'č' => 'c',
        'è' | 'é' | 'ê' | 'ë' | 'ē' | 'ę' => 'e',
        'ì' | 'í' | 'î' | 'ï' | 'ī' => 'i',
        'ñ' | 'ń' => 'n',
        'ò' | 'ó' | 'ô' | 'õ' | 'ö' | 'ø' | 'ō' => 'o',
        'ù' | 'ú' | 'û' | 'ü' | 'ū' => 'u',
        'ý' | 'ÿ' => 'y',
        'ś' | 'š' => 's',
        'ź' | 'ż' | 'ž' => 'z',
        'ł' => 'l',
        _ => c,
    }
}

#[cfg(test)]
mod tests {
    use super::slugify;

    #[test]
    fn joins_words_with_dashes() {
        assert_eq!(slugify("What is your name?"), "what-is-your-name");
        assert_eq!(slugify("  Favorite   color "), "favorite-color");
    }

    #[test]
    fn keeps_existing_dashes_and_digits() {
        assert_eq!(slugify("Year-of-birth 1990"), "year-of-birth-1990");
    }

    #[test]
    fn folds_accents() {
        assert_eq!(slugify("Café Crème"), "cafe-creme");
    }

    #[test]
    fn empty_when_nothing_is_safe() {
        assert_eq!(slugify("?!"), "");
    }
}
