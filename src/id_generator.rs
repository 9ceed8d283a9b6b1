use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::document::Document;
use crate::error::IdError;
use crate::string::{random_with, RandomOptions};

/// Prefix of generated element ids
pub const DEFAULT_PREFIX: &str = "md-";

/// Generates element ids that are free in a document.
///
/// A candidate is the prefix followed by `length` random lowercase
/// alphanumerics. Every candidate is checked against the live document
/// before it is accepted; with `max_attempts` unset the loop retries
/// until it finds a free one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IdGenerator {
    pub prefix: String,
    pub length: usize,
    /// Give up with [`IdError::Exhausted`] after this many candidates
    pub max_attempts: Option<usize>,
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self {
            prefix: DEFAULT_PREFIX.to_string(),
            length: crate::string::random::DEFAULT_LENGTH,
            max_attempts: None,
        }
    }
}

impl IdGenerator {
    /// Find an id not used anywhere in `doc`.
    pub fn generate<D: Document>(&self, doc: &D) -> Result<String, IdError> {
        self.generate_with(doc, &mut rand::thread_rng())
    }

    /// Like [`IdGenerator::generate`], drawing candidates from `rng`.
    pub fn generate_with<D, R>(&self, doc: &D, rng: &mut R) -> Result<String, IdError>
    where
        D: Document,
        R: Rng + ?Sized,
    {
        let mut attempts = 0;
        loop {
            let candidate = self.candidate(rng);
            attempts += 1;

            if doc.get_element_by_id(&candidate).is_none() {
                log::trace!("generated element id {} after {} attempt(s)", candidate, attempts);
                return Ok(candidate);
            }

            log::warn!("element id {} is already taken, retrying", candidate);
            if self.max_attempts.is_some_and(|max| attempts >= max) {
                return Err(IdError::Exhausted { attempts });
            }
        }
    }

    fn candidate<R: Rng + ?Sized>(&self, rng: &mut R) -> String {
        let suffix = random_with(rng, RandomOptions::lowercase(self.length));
        format!("{}{}", self.prefix, suffix)
    }
}
