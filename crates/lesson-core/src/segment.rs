//! Transcript segmentation

/// Characters that terminate a sentence segment.
const SENTENCE_TERMINALS: [char; 3] = ['.', '!', '?'];

/// One sentence-level unit of the transcript, with its terminal punctuation
/// still attached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub text: String,
}

impl Segment {
    pub fn as_str(&self) -> &str {
        &self.text
    }
}

impl std::fmt::Display for Segment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.text)
    }
}

/// Split a transcript into displayable sentence segments.
///
/// The delimiter stays attached to its sentence, so a segment reads as the
/// user would see it ("Xin chào."). Whitespace around each piece is trimmed;
/// fragments that are empty or hold nothing but delimiters are dropped, so
/// an ellipsis or doubled punctuation never becomes a punctuation-only
/// "sentence". A transcript with no delimiter at all yields a single segment
/// (the trimmed input); an empty transcript yields an empty Vec and the view
/// renders a fallback instead.
pub fn segment_transcript(transcript: &str) -> Vec<Segment> {
    transcript
        .split_inclusive(|c| SENTENCE_TERMINALS.contains(&c))
        .map(str::trim)
        .filter(|piece| piece.chars().any(|c| !SENTENCE_TERMINALS.contains(&c)))
        .map(|piece| Segment {
            text: piece.to_string(),
        })
        .collect()
}
