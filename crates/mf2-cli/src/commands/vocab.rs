use std::collections::BTreeMap;

use mf2_config::Mf2Config;
use mf2_parser::VocabularyRegistry;
use mf2_parser::vocabulary::Vocabulary;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::output::output;

#[derive(Debug, Serialize)]
struct VocabularyEntry {
    target: String,
    roots: Vec<String>,
    properties: BTreeMap<String, String>,
}

impl From<&Vocabulary> for VocabularyEntry {
    fn from(vocab: &Vocabulary) -> Self {
        Self {
            target: vocab.target.clone(),
            roots: vocab.roots.iter().cloned().collect(),
            properties: vocab
                .properties
                .iter()
                .map(|(legacy, target)| (legacy.clone(), target.to_string()))
                .collect(),
        }
    }
}

#[derive(Debug, Serialize)]
struct VocabResponse {
    vocabularies: Vec<VocabularyEntry>,
}

fn describe(registry: &VocabularyRegistry) -> VocabResponse {
    VocabResponse {
        vocabularies: registry.iter().map(VocabularyEntry::from).collect(),
    }
}

/// Handle `mf2 vocab`.
pub fn handle(config: &Mf2Config, flags: &GlobalFlags) -> anyhow::Result<()> {
    let registry = config.registry()?;
    output(&describe(&registry), flags.format)
}
