use indexmap::IndexMap;
use tracing::debug;

use crate::sheet::CharacterSheet;

/// Rewrites every ability-score key to its trimmed uppercase form.
///
/// Values and document order are kept. When two keys collapse onto the same
/// uppercase key, the one appearing later in the document wins. Running this
/// on an already normalized sheet leaves it unchanged.
pub fn normalize_ability_scores(sheet: &mut CharacterSheet) {
    let raw = std::mem::take(&mut sheet.ability_scores);
    let mut upper = IndexMap::with_capacity(raw.len());

    for (key, score) in raw {
        let canonical = key.trim().to_uppercase();
        if let Some(previous) = upper.insert(canonical.clone(), score) {
            debug!(key = %canonical, previous, score, "ability score key collision after uppercasing");
        }
    }

    sheet.ability_scores = upper;
}

pub fn normalized(mut sheet: CharacterSheet) -> CharacterSheet {
    normalize_ability_scores(&mut sheet);
    sheet
}
