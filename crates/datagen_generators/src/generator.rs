//! The generator seam shared with sibling field generators.

use std::fmt;
use std::str::FromStr;

use datagen_core::{DatagenRng, DocumentBuffer, ElementType};
use serde::Deserialize;

use crate::error::GeneratorError;

/// Output encoding of a generated value.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Encoding {
    /// Binary element payload, embedded in the surrounding document.
    Binary,
    /// Human-readable text.
    #[default]
    Text,
}

impl FromStr for Encoding {
    type Err = GeneratorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "binary" | "bin" => Ok(Encoding::Binary),
            "text" | "string" => Ok(Encoding::Text),
            _ => Err(GeneratorError::UnknownEncoding(s.to_string())),
        }
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Encoding::Binary => write!(f, "binary"),
            Encoding::Text => write!(f, "text"),
        }
    }
}

/// Produces one field value per call into a caller-owned buffer.
///
/// Implementations hold only immutable configuration. The random source and
/// the buffer belong to the calling worker and are lent for the duration of
/// one call, so a generator can be shared across workers (`Sync`) while
/// every worker keeps its own deterministic stream.
pub trait ValueGenerator: Send + Sync {
    /// Element tag the document assembler writes before this value's key.
    fn element_type(&self) -> ElementType;

    /// Appends the binary payload of one value.
    fn encode_value(&self, rng: &mut DatagenRng, buffer: &mut DocumentBuffer);

    /// Appends the text form of one value.
    fn encode_value_as_string(&self, rng: &mut DatagenRng, buffer: &mut DocumentBuffer);

    /// Appends one value in the requested encoding.
    #[inline]
    fn encode(&self, encoding: Encoding, rng: &mut DatagenRng, buffer: &mut DocumentBuffer) {
        match encoding {
            Encoding::Binary => self.encode_value(rng, buffer),
            Encoding::Text => self.encode_value_as_string(rng, buffer),
        }
    }
}
