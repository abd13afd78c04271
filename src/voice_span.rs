use std::collections::BTreeSet;

use crate::Result;
use crate::bundle::{Bundle, field_key};

/// A span representing a speaker, per the WebVTT cue voice-span convention.
///
/// Design:
/// - The record is immutable: both fields are fixed at construction and there
///   is no mutating API, so a span is safe to share across any number of
///   concurrent readers.
/// - The positioning of the span over a text range belongs to the containing
///   styled-text type; this value only carries the attribution metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VoiceSpan {
    /// The speaker name.
    pub speaker_name: String,

    /// The classes associated with the text. A class can specify things like
    /// `"first"` or `"loud"`. Membership is order-insensitive.
    pub classes: BTreeSet<String>,
}

impl VoiceSpan {
    /// Bundle key for the speaker name.
    fn field_speaker_name() -> String {
        field_key(0)
    }

    /// Bundle key for the classes array.
    fn field_classes() -> String {
        field_key(1)
    }

    /// Create a voice span from a speaker name and a set of classes.
    ///
    /// The classes set may be empty. The span logically owns both fields from
    /// this point on.
    pub fn new(speaker_name: impl Into<String>, classes: BTreeSet<String>) -> Self {
        Self {
            speaker_name: speaker_name.into(),
            classes,
        }
    }

    /// Encode this span into its two-key bundle representation.
    ///
    /// Field 0 holds the speaker name as a single string; field 1 holds the
    /// classes linearized into an array of strings. Encoding cannot fail: a
    /// constructed span always has both fields.
    pub fn to_bundle(&self) -> Bundle {
        let mut bundle = Bundle::new();
        bundle.put_string(Self::field_speaker_name(), self.speaker_name.clone());
        bundle.put_string_array(Self::field_classes(), self.classes.iter().cloned());
        bundle
    }

    /// Decode a span from its bundle representation.
    ///
    /// Errors:
    /// - [`Error::MissingField`](crate::Error::MissingField) if either field
    ///   is absent
    /// - [`Error::InvalidArgument`](crate::Error::InvalidArgument) if a field
    ///   is present but has the wrong shape
    ///
    /// Duplicate entries in the classes array collapse into the set. No other
    /// validation is performed; arbitrary strings are accepted as speaker
    /// names and class tags.
    pub fn from_bundle(bundle: &Bundle) -> Result<Self> {
        let speaker_name = bundle.string(&Self::field_speaker_name())?.to_owned();
        let classes = bundle
            .string_array(&Self::field_classes())?
            .into_iter()
            .collect();

        Ok(Self {
            speaker_name,
            classes,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    fn classes<const N: usize>(tags: [&str; N]) -> BTreeSet<String> {
        tags.iter().map(|tag| tag.to_string()).collect()
    }

    #[test]
    fn round_trip_preserves_both_fields() -> anyhow::Result<()> {
        let span = VoiceSpan::new("Narrator", classes(["first", "loud"]));
        let decoded = VoiceSpan::from_bundle(&span.to_bundle())?;
        assert_eq!(decoded, span);
        Ok(())
    }

    #[test]
    fn encode_produces_the_documented_shape() -> anyhow::Result<()> {
        let span = VoiceSpan::new("Narrator", classes(["first", "loud"]));
        let bundle = span.to_bundle();

        assert_eq!(bundle.len(), 2);
        assert_eq!(bundle.string("0")?, "Narrator");

        // Array order is unspecified by the contract; both elements must be
        // present exactly once.
        let mut tags = bundle.string_array("1")?;
        tags.sort();
        assert_eq!(tags, vec!["first", "loud"]);
        Ok(())
    }

    #[test]
    fn empty_classes_encode_to_an_empty_array() -> anyhow::Result<()> {
        let span = VoiceSpan::new("Alice", BTreeSet::new());
        let bundle = span.to_bundle();
        assert_eq!(bundle.string_array("1")?, Vec::<String>::new());

        let decoded = VoiceSpan::from_bundle(&bundle)?;
        assert!(decoded.classes.is_empty());
        assert_eq!(decoded.speaker_name, "Alice");
        Ok(())
    }

    #[test]
    fn decode_collapses_duplicate_classes() -> anyhow::Result<()> {
        let mut bundle = Bundle::new();
        bundle.put_string("0", "Alice");
        bundle.put_string_array("1", ["loud", "loud", "first"]);

        let span = VoiceSpan::from_bundle(&bundle)?;
        assert_eq!(span.classes, classes(["loud", "first"]));
        assert_eq!(span.classes.len(), 2);
        Ok(())
    }

    #[test]
    fn decode_missing_speaker_name_errors() {
        let mut bundle = Bundle::new();
        bundle.put_string_array("1", ["x"]);

        let err = VoiceSpan::from_bundle(&bundle).unwrap_err();
        assert!(matches!(err, Error::MissingField(ref key) if key == "0"));
    }

    #[test]
    fn decode_missing_classes_errors() {
        let mut bundle = Bundle::new();
        bundle.put_string("0", "Alice");

        let err = VoiceSpan::from_bundle(&bundle).unwrap_err();
        assert!(matches!(err, Error::MissingField(ref key) if key == "1"));
    }

    #[test]
    fn decode_wrong_shaped_speaker_name_errors() {
        let mut bundle = Bundle::new();
        bundle.put_string_array("0", ["Alice"]);
        bundle.put_string_array("1", ["x"]);

        let err = VoiceSpan::from_bundle(&bundle).unwrap_err();
        assert!(matches!(err, Error::InvalidArgument(_)));
    }

    #[test]
    fn spans_with_the_same_fields_are_equal() {
        let a = VoiceSpan::new("Bob", classes(["loud"]));
        let b = VoiceSpan::new("Bob", classes(["loud"]));
        assert_eq!(a, b);
        assert_ne!(a, VoiceSpan::new("Bob", classes(["quiet"])));
    }
}
