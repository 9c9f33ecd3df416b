//! Field validation for expense records.
//!
//! One check per field kind, each taking the raw input string and returning
//! a typed [`ValidationFailure`] whose `Display` text is suitable for direct
//! user presentation. The checks are pure: no side effects, no storage or
//! terminal access, so a UI can call them per keystroke for live feedback
//! independent of submission.
//!
//! The shape-level rules are compiled regexes; rules the `regex` crate cannot
//! express (the duplicate-word backreference, the no-digits lookahead) are
//! explicit scans over the input instead.

use once_cell::sync::Lazy;
use regex::{Regex, RegexBuilder};

/// Amount: `0` or a positive integer, optionally `.` and one or two digits.
static AMOUNT_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(0|[1-9]\d*)(\.\d{1,2})?$").expect("amount pattern"));

/// Date: strict `YYYY-MM-DD` with a syntactically plausible month and day.
/// Calendar validity (e.g. rejecting `2025-02-30`) is checked separately.
static DATE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d{4})-(0[1-9]|1[0-2])-(0[1-9]|[12]\d|3[01])$").expect("date pattern"));

/// Category: letter-runs separated by single spaces or hyphens.
static CATEGORY_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z]+(?:[ -][A-Za-z]+)*$").expect("category pattern"));

/// Why a field value was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationFailure {
    /// The field is empty or whitespace-only
    Empty,
    /// The description contains a digit
    ContainsDigit(char),
    /// The description contains a character outside the allowed set
    InvalidCharacter(char),
    /// The description immediately repeats a word ("the the")
    RepeatedWord(String),
    /// The amount is negative
    NegativeAmount,
    /// The amount has a leading zero on a multi-digit integer part
    LeadingZero,
    /// The amount has more than two decimal places
    TooManyDecimals,
    /// The amount is not a plain decimal number
    MalformedAmount,
    /// The date is not in `YYYY-MM-DD` form
    MalformedDate,
    /// The date is well-formed but not a real calendar day
    ImpossibleDate,
    /// The category is not letter-runs separated by spaces or hyphens
    MalformedCategory,
}

impl std::fmt::Display for ValidationFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationFailure::Empty => write!(f, "value cannot be empty"),
            ValidationFailure::ContainsDigit(ch) => {
                write!(f, "digits are not allowed, found '{}'", ch)
            }
            ValidationFailure::InvalidCharacter(ch) => {
                write!(
                    f,
                    "invalid character '{}' (only letters, spaces, commas, periods, apostrophes, and hyphens allowed)",
                    ch
                )
            }
            ValidationFailure::RepeatedWord(word) => {
                write!(f, "word '{}' is repeated back to back", word)
            }
            ValidationFailure::NegativeAmount => write!(f, "amount cannot be negative"),
            ValidationFailure::LeadingZero => {
                write!(f, "amount cannot have a leading zero")
            }
            ValidationFailure::TooManyDecimals => {
                write!(f, "amount can have at most two decimal places")
            }
            ValidationFailure::MalformedAmount => {
                write!(f, "amount must be a number like 12 or 12.50")
            }
            ValidationFailure::MalformedDate => {
                write!(f, "date must be in YYYY-MM-DD form")
            }
            ValidationFailure::ImpossibleDate => {
                write!(f, "date is not a real calendar day")
            }
            ValidationFailure::MalformedCategory => {
                write!(
                    f,
                    "category must be words made of letters, separated by single spaces or hyphens"
                )
            }
        }
    }
}

impl std::error::Error for ValidationFailure {}

/// Collapses runs of whitespace to a single space and trims the ends.
pub fn normalize_description(value: &str) -> String {
    value.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Returns the first immediately-repeated whole word, case-insensitive.
///
/// "Coffee coffee" and "the, the" both report a repeat; "the theme" does not.
/// Punctuation hugging a word does not hide the repeat.
pub fn repeated_word(value: &str) -> Option<String> {
    let mut previous: Option<String> = None;
    for raw in value.split_whitespace() {
        let word = raw
            .trim_matches(|c: char| !c.is_ascii_alphanumeric())
            .to_lowercase();
        if word.is_empty() {
            continue;
        }
        if previous.as_deref() == Some(word.as_str()) {
            return Some(word);
        }
        previous = Some(word);
    }
    None
}

fn is_valid_description_char(ch: char) -> bool {
    ch.is_ascii_alphabetic() || ch.is_whitespace() || matches!(ch, '.' | ',' | '\'' | '’' | '-')
}

/// Validates a free-text description.
///
/// # Rules
/// - Must not be empty or whitespace-only (checked after whitespace collapse)
/// - Must not contain digits
/// - May contain letters, spaces, commas, periods, apostrophes, and hyphens
/// - Must not immediately repeat a word ("lunch lunch")
///
/// # Examples
/// ```
/// use spendz::validate::validate_description;
///
/// assert!(validate_description("Lunch at the cafeteria").is_ok());
/// assert!(validate_description("Mom's groceries, again").is_ok());
///
/// assert!(validate_description("").is_err());
/// assert!(validate_description("Bus ticket 42").is_err());
/// assert!(validate_description("the the movies").is_err());
/// ```
pub fn validate_description(value: &str) -> Result<(), ValidationFailure> {
    let normalized = normalize_description(value);
    if normalized.is_empty() {
        return Err(ValidationFailure::Empty);
    }
    if let Some(digit) = normalized.chars().find(|c| c.is_ascii_digit()) {
        return Err(ValidationFailure::ContainsDigit(digit));
    }
    if let Some(bad) = normalized.chars().find(|c| !is_valid_description_char(*c)) {
        return Err(ValidationFailure::InvalidCharacter(bad));
    }
    if let Some(word) = repeated_word(&normalized) {
        return Err(ValidationFailure::RepeatedWord(word));
    }
    Ok(())
}

/// Validates an amount in its raw string form.
///
/// Accepts `0` or a positive integer, optionally followed by `.` and one or
/// two digits. Rejections are classified so the caller can say why: negative
/// sign, leading zero on a multi-digit integer, more than two decimals.
///
/// # Examples
/// ```
/// use spendz::validate::validate_amount;
///
/// assert!(validate_amount("0").is_ok());
/// assert!(validate_amount("12.5").is_ok());
/// assert!(validate_amount("12.50").is_ok());
///
/// assert!(validate_amount("-1").is_err());
/// assert!(validate_amount("01").is_err());
/// assert!(validate_amount("12.555").is_err());
/// ```
pub fn validate_amount(value: &str) -> Result<(), ValidationFailure> {
    let value = value.trim();
    if value.is_empty() {
        return Err(ValidationFailure::Empty);
    }
    if AMOUNT_PATTERN.is_match(value) {
        return Ok(());
    }

    // Classify the rejection for a precise message.
    if value.starts_with('-') {
        return Err(ValidationFailure::NegativeAmount);
    }
    let (integer, fraction) = match value.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (value, None),
    };
    let all_digits = |s: &str| !s.is_empty() && s.chars().all(|c| c.is_ascii_digit());
    if let Some(fraction) = fraction {
        if all_digits(integer) && all_digits(fraction) && fraction.len() > 2 {
            return Err(ValidationFailure::TooManyDecimals);
        }
    }
    if integer.len() > 1 && integer.starts_with('0') && all_digits(integer) {
        return Err(ValidationFailure::LeadingZero);
    }
    Err(ValidationFailure::MalformedAmount)
}

/// Validates a calendar date in strict `YYYY-MM-DD` form.
///
/// The syntactic gate allows day 01..31 for every month; the value must then
/// round-trip through real calendar construction, with year, month, and day
/// reconstructing identically. `2025-02-30` passes the gate and fails the
/// round-trip.
///
/// # Examples
/// ```
/// use spendz::validate::validate_date;
///
/// assert!(validate_date("2025-02-28").is_ok());
/// assert!(validate_date("2025-02-30").is_err());
/// assert!(validate_date("2025-13-01").is_err());
/// ```
pub fn validate_date(value: &str) -> Result<(), ValidationFailure> {
    use chrono::{Datelike, NaiveDate};

    let value = value.trim();
    if value.is_empty() {
        return Err(ValidationFailure::Empty);
    }
    let captures = DATE_PATTERN
        .captures(value)
        .ok_or(ValidationFailure::MalformedDate)?;
    let year: i32 = captures[1].parse().map_err(|_| ValidationFailure::MalformedDate)?;
    let month: u32 = captures[2].parse().map_err(|_| ValidationFailure::MalformedDate)?;
    let day: u32 = captures[3].parse().map_err(|_| ValidationFailure::MalformedDate)?;

    let date =
        NaiveDate::from_ymd_opt(year, month, day).ok_or(ValidationFailure::ImpossibleDate)?;
    if date.year() != year || date.month() != month || date.day() != day {
        return Err(ValidationFailure::ImpossibleDate);
    }
    Ok(())
}

/// Validates a category tag: one or more letter-runs separated by single
/// spaces or hyphens.
///
/// # Examples
/// ```
/// use spendz::validate::validate_category;
///
/// assert!(validate_category("Food").is_ok());
/// assert!(validate_category("Eating Out").is_ok());
/// assert!(validate_category("Self-Care").is_ok());
///
/// assert!(validate_category("").is_err());
/// assert!(validate_category("Food!").is_err());
/// assert!(validate_category("Food  Court").is_err());
/// ```
pub fn validate_category(value: &str) -> Result<(), ValidationFailure> {
    let value = value.trim();
    if value.is_empty() {
        return Err(ValidationFailure::Empty);
    }
    if !CATEGORY_PATTERN.is_match(value) {
        return Err(ValidationFailure::MalformedCategory);
    }
    Ok(())
}

/// A compiled search matcher: either a real regex or a literal-text fallback.
#[derive(Debug)]
pub enum SearchMatcher {
    Pattern(Regex),
    Literal(String),
}

impl SearchMatcher {
    pub fn matches(&self, text: &str) -> bool {
        match self {
            SearchMatcher::Pattern(re) => re.is_match(text),
            SearchMatcher::Literal(needle) => text.to_lowercase().contains(needle),
        }
    }
}

/// Compiles a user-supplied search input into a [`SearchMatcher`].
///
/// Tries a case-insensitive regex first; input that fails to compile (an
/// unbalanced `(` for instance) degrades to case-insensitive literal
/// matching instead of erroring. Every search feature goes through this one
/// function so the escaping behavior cannot drift between call sites.
pub fn compile_search_pattern(input: &str) -> SearchMatcher {
    match RegexBuilder::new(input).case_insensitive(true).build() {
        Ok(re) => SearchMatcher::Pattern(re),
        Err(_) => SearchMatcher::Literal(input.to_lowercase()),
    }
}
