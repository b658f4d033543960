//! Daily prompt: one question chosen at random when the session starts.

use rand::Rng;

use crate::catalog::DAILY_PROMPTS;

/// A non-empty list of prompts.
#[derive(Debug, Clone)]
pub struct PromptCatalog(Vec<String>);

impl PromptCatalog {
    /// Builds a catalog from `prompts`, trimming each and dropping blanks.
    /// Returns `None` if nothing is left.
    pub fn new<I, P>(prompts: I) -> Option<Self>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<str>,
    {
        let prompts: Vec<String> = prompts
            .into_iter()
            .map(|p| p.as_ref().trim().to_string())
            .filter(|p| !p.is_empty())
            .collect();
        (!prompts.is_empty()).then_some(Self(prompts))
    }

    pub fn builtin() -> Self {
        Self(DAILY_PROMPTS.iter().map(|p| (*p).to_string()).collect())
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    fn pick<R: Rng + ?Sized>(&self, rng: &mut R) -> &str {
        &self.0[rng.random_range(0..self.0.len())]
    }
}

/// The prompt held for the whole session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DailyPrompt(String);

impl DailyPrompt {
    /// Picks uniformly at random from `catalog`.
    pub fn choose(catalog: &PromptCatalog) -> Self {
        Self::choose_with(catalog, &mut rand::rng())
    }

    pub fn choose_with<R: Rng + ?Sized>(catalog: &PromptCatalog, rng: &mut R) -> Self {
        Self(catalog.pick(rng).to_string())
    }

    pub fn text(&self) -> &str {
        &self.0
    }
}
