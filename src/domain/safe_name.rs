//! Layer name normalization for CloudFormation logical IDs.

use std::fmt;

/// Layer name title-cased with underscores removed.
///
/// Casing follows the usual "title" transform: a cased character that directly
/// follows another cased character is lowercased, every other cased character
/// is uppercased. Digits, hyphens, underscores and whitespace all start a new
/// word, but only underscores are dropped afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SafeName(String);

impl SafeName {
    pub fn from_layer_name(layer_name: &str) -> Self {
        let mut titled = String::with_capacity(layer_name.len());
        let mut previous_cased = false;

        for ch in layer_name.chars() {
            let cased = is_cased(ch);
            if cased && previous_cased {
                titled.extend(ch.to_lowercase());
            } else if cased {
                titled.extend(ch.to_uppercase());
            } else {
                titled.push(ch);
            }
            previous_cased = cased;
        }

        Self(titled.replace('_', ""))
    }
}

// Titlecase letters (e.g. U+01C5) count as uncased here, and word starts use
// `to_uppercase` since std has no titlecase mapping.
fn is_cased(ch: char) -> bool {
    ch.is_lowercase() || ch.is_uppercase()
}

impl fmt::Display for SafeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
