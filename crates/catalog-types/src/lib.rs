//! Validated primitive types shared by the catalog crates.
//!
//! - [`NonEmptyText`]: trimmed text guaranteed to contain a non-whitespace character.
//! - [`Slug`]: a lowercase, hyphen-delimited identifier used for every catalog entry id.

/// Errors that can occur when creating validated text types.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TextError {
    /// The input text was empty or contained only whitespace
    #[error("Text cannot be empty")]
    Empty,
}

/// A string type that guarantees non-empty content.
///
/// This type wraps a `String` and ensures it contains at least one non-whitespace character.
/// The input is automatically trimmed of leading and trailing whitespace during construction.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NonEmptyText(String);

impl NonEmptyText {
    /// Creates a new `NonEmptyText` from the given input.
    ///
    /// The input is trimmed of leading and trailing whitespace. If the trimmed
    /// result is empty, an error is returned.
    pub fn new(input: impl AsRef<str>) -> Result<Self, TextError> {
        let trimmed = input.as_ref().trim();
        if trimmed.is_empty() {
            return Err(TextError::Empty);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the inner string as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    /// Length of the trimmed text in characters.
    pub fn char_count(&self) -> usize {
        self.0.chars().count()
    }
}

impl std::fmt::Display for NonEmptyText {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for NonEmptyText {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl serde::Serialize for NonEmptyText {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> serde::Deserialize<'de> for NonEmptyText {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        NonEmptyText::new(&s).map_err(serde::de::Error::custom)
    }
}

/// Errors returned when an identifier is not a valid slug.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SlugError {
    #[error("slug cannot be empty")]
    Empty,
    #[error("slug exceeds maximum length of {max} characters")]
    TooLong { max: usize },
    #[error("slug contains invalid character {0:?} (only a-z, 0-9 and '-' allowed)")]
    InvalidCharacter(char),
    #[error("slug must not start or end with '-' or contain '--'")]
    MisplacedHyphen,
}

/// A stable entry identifier in slug form, e.g. `open-angle-glaucoma`.
///
/// Slugs are lowercase ASCII letters and digits separated by single hyphens. Unlike
/// [`NonEmptyText`] the input is not normalised: `Cataracts` is rejected rather than lowercased,
/// because ids are published and must be authored in their final form.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Slug(String);

impl Slug {
    /// Upper bound on slug length.
    pub const MAX_LEN: usize = 128;

    /// Validates `input` and wraps it as a slug.
    ///
    /// # Errors
    ///
    /// Returns a [`SlugError`] describing the first rule the input breaks.
    pub fn parse(input: impl AsRef<str>) -> Result<Self, SlugError> {
        let input = input.as_ref();

        if input.is_empty() {
            return Err(SlugError::Empty);
        }

        if input.len() > Self::MAX_LEN {
            return Err(SlugError::TooLong { max: Self::MAX_LEN });
        }

        if let Some(bad) = input
            .chars()
            .find(|c| !matches!(c, 'a'..='z' | '0'..='9' | '-'))
        {
            return Err(SlugError::InvalidCharacter(bad));
        }

        if input.starts_with('-') || input.ends_with('-') || input.contains("--") {
            return Err(SlugError::MisplacedHyphen);
        }

        Ok(Self(input.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Slug {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Slug {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::borrow::Borrow<str> for Slug {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl std::str::FromStr for Slug {
    type Err = SlugError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl serde::Serialize for Slug {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> serde::Deserialize<'de> for Slug {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Slug::parse(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_empty_text_trims_input() {
        let text = NonEmptyText::new("  Cataracts \n").expect("should accept padded text");
        assert_eq!(text.as_str(), "Cataracts");
        assert_eq!(text.char_count(), 9);
    }

    #[test]
    fn non_empty_text_rejects_whitespace_only() {
        assert_eq!(NonEmptyText::new("   "), Err(TextError::Empty));
        assert_eq!(NonEmptyText::new(""), Err(TextError::Empty));
    }

    #[test]
    fn non_empty_text_deserialize_rejects_blank() {
        let err = serde_json::from_str::<NonEmptyText>("\"  \"").expect_err("blank should fail");
        assert!(err.to_string().contains("Text cannot be empty"));
    }

    #[test]
    fn slug_accepts_conventional_ids() {
        assert!(Slug::parse("cataracts").is_ok());
        assert!(Slug::parse("open-angle-glaucoma").is_ok());
        assert!(Slug::parse("covid-19").is_ok());
    }

    #[test]
    fn slug_rejects_uppercase_and_spaces() {
        assert_eq!(
            Slug::parse("Cataracts"),
            Err(SlugError::InvalidCharacter('C'))
        );
        assert_eq!(
            Slug::parse("dry eye"),
            Err(SlugError::InvalidCharacter(' '))
        );
        assert_eq!(
            Slug::parse("dry_eye"),
            Err(SlugError::InvalidCharacter('_'))
        );
    }

    #[test]
    fn slug_rejects_misplaced_hyphens() {
        for bad in ["-amd", "amd-", "wet--amd"] {
            assert_eq!(Slug::parse(bad), Err(SlugError::MisplacedHyphen), "{bad}");
        }
    }

    #[test]
    fn slug_rejects_empty_and_overlong() {
        assert_eq!(Slug::parse(""), Err(SlugError::Empty));
        let long = "a".repeat(Slug::MAX_LEN + 1);
        assert_eq!(
            Slug::parse(long),
            Err(SlugError::TooLong { max: Slug::MAX_LEN })
        );
    }

    #[test]
    fn slug_deserialize_validates() {
        let slug: Slug = serde_json::from_str("\"retinal-detachment\"").expect("valid slug");
        assert_eq!(slug.as_str(), "retinal-detachment");
        assert!(serde_json::from_str::<Slug>("\"Retinal Detachment\"").is_err());
    }
}
