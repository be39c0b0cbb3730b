use calamine::Data;
use chrono::NaiveDateTime;
use once_cell::sync::Lazy;
use regex::Regex;

static NON_IDENTIFIER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[^A-Za-z0-9 ]").expect("valid identifier pattern")
});

const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Turns a header into a CamelCase identifier: punctuation becomes a word
/// break, the text is title-cased and the spaces are dropped.
///
/// `"first name"` and `"First-Name!"` both become `"FirstName"`. No attempt is
/// made to keep names unique.
pub fn clean_column_name(name: &str) -> String {
    let spaced = NON_IDENTIFIER.replace_all(name, " ");

    title_case(&spaced).replace(' ', "")
}

/// A letter starts a word when the character before it is not a letter, so
/// digits break words too: `"2nd"` → `"2Nd"`.
fn title_case(text: &str) -> String {
    let mut prev_letter = false;
    text.chars()
        .map(|c| {
            let is_letter = c.is_ascii_alphabetic();
            let out = match (is_letter, prev_letter) {
                (true, true) => c.to_ascii_lowercase(),
                (true, false) => c.to_ascii_uppercase(),
                _ => c,
            };
            prev_letter = is_letter;
            out
        })
        .collect()
}

/// Text form of a header cell, or `None` when the cell holds an error value.
pub fn header_text(value: &Data) -> Option<String> {
    match value {
        Data::Empty => Some(String::new()),
        Data::String(s) | Data::DateTimeIso(s) | Data::DurationIso(s) => Some(s.clone()),
        Data::Int(i) => Some(i.to_string()),
        Data::Float(f) => Some(f.to_string()),
        Data::Bool(b) => Some(b.to_string()),
        Data::DateTime(dt) => Some(
            dt.as_datetime()
                .map(|d: NaiveDateTime| d.format(DATETIME_FORMAT).to_string())
                .unwrap_or_else(|| dt.as_f64().to_string()),
        ),
        Data::Error(_) => None,
    }
}

/// Header cells with nothing in them fall back to the column letter.
pub fn is_blank_header(value: &Data) -> bool {
    match value {
        Data::Empty => true,
        Data::String(s) => s.is_empty(),
        _ => false,
    }
}

/// Spreadsheet letter for a zero-based column index (`0` → `A`, `26` → `AA`).
pub fn column_letter(col: u16) -> String {
    rust_xlsxwriter::utility::column_number_to_name(col)
}

/// Whole-number floats are how xlsx stores integers.
pub fn as_integer(value: f64) -> Option<i64> {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < i64::MAX as f64 {
        Some(value as i64)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use calamine::CellErrorType;

    #[test]
    fn clean_column_name_camel_cases_words() {
        assert_eq!(clean_column_name("First Name"), "FirstName");
        assert_eq!(clean_column_name("first name"), "FirstName");
        assert_eq!(clean_column_name("ORDER TOTAL"), "OrderTotal");
        assert_eq!(clean_column_name("Age"), "Age");
    }

    #[test]
    fn clean_column_name_treats_punctuation_as_word_breaks() {
        assert_eq!(clean_column_name("e-mail address"), "EMailAddress");
        assert_eq!(clean_column_name("Unit Price ($)"), "UnitPrice");
        assert_eq!(clean_column_name("customer_id"), "CustomerId");
        assert_eq!(clean_column_name("  padded\tname  "), "PaddedName");
    }

    #[test]
    fn clean_column_name_keeps_digits() {
        assert_eq!(clean_column_name("Q1 2024"), "Q12024");
        assert_eq!(clean_column_name("2nd place"), "2NdPlace");
    }

    #[test]
    fn clean_column_name_starts_words_after_digits() {
        assert_eq!(clean_column_name("abc1def"), "Abc1Def");
        assert_eq!(clean_column_name("Q1a total"), "Q1ATotal");
        assert_eq!(clean_column_name("ID2GO"), "Id2Go");
    }

    #[test]
    fn clean_column_name_drops_non_ascii_letters() {
        assert_eq!(clean_column_name("Café Größe"), "CafGrE");
    }

    #[test]
    fn clean_column_name_output_is_alphanumeric() {
        let inputs = [
            "First Name",
            "a.b,c;d:e",
            "#%&*()[]{}",
            "tabs\tand\nnewlines",
            "naïve façade",
            "",
        ];
        for input in inputs {
            let cleaned = clean_column_name(input);
            assert!(
                cleaned.chars().all(|c| c.is_ascii_alphanumeric()),
                "{input:?} -> {cleaned:?}"
            );
        }
    }

    #[test]
    fn header_text_renders_scalars() {
        assert_eq!(header_text(&Data::String("Name".into())).as_deref(), Some("Name"));
        assert_eq!(header_text(&Data::Int(2024)).as_deref(), Some("2024"));
        assert_eq!(header_text(&Data::Float(30.0)).as_deref(), Some("30"));
        assert_eq!(header_text(&Data::Float(2.5)).as_deref(), Some("2.5"));
        assert_eq!(header_text(&Data::Bool(true)).as_deref(), Some("true"));
        assert_eq!(header_text(&Data::Error(CellErrorType::Div0)), None);
    }

    #[test]
    fn blank_headers() {
        assert!(is_blank_header(&Data::Empty));
        assert!(is_blank_header(&Data::String(String::new())));
        assert!(!is_blank_header(&Data::String(" ".into())));
        assert!(!is_blank_header(&Data::Int(0)));
    }

    #[test]
    fn column_letters() {
        assert_eq!(column_letter(0), "A");
        assert_eq!(column_letter(25), "Z");
        assert_eq!(column_letter(26), "AA");
    }

    #[test]
    fn whole_floats_are_integers() {
        assert_eq!(as_integer(30.0), Some(30));
        assert_eq!(as_integer(-4.0), Some(-4));
        assert_eq!(as_integer(2.5), None);
        assert_eq!(as_integer(f64::NAN), None);
        assert_eq!(as_integer(f64::INFINITY), None);
    }
}
