use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

/// Everything the service says out loud. Defaults are the stock copy; any
/// key can be replaced from a JSON file without touching dispatch.
///
/// Templates use `{name}` placeholders, filled in by [`Messages::render`].
#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct Messages {
    /// Asked once location access is already granted.
    pub spy_prompt: String,
    /// Placeholders: `{username}`, `{distance}`.
    pub distance: String,
    pub permission_granted: String,
    /// Spoken while the platform shows its own permission dialog.
    pub permission_prompt: String,
    /// Reason shown to the user alongside the permission dialog.
    pub permission_context: String,
}

impl Default for Messages {
    fn default() -> Self {
        Self {
            spy_prompt: "Who would you like to spy on?".to_string(),
            distance: "{username} is {distance} away".to_string(),
            permission_granted: "thank you, were good to go".to_string(),
            permission_prompt: "PLACEHOLDER_FOR_PERMISSION".to_string(),
            permission_context: "To compare".to_string(),
        }
    }
}

impl Messages {
    /// Read overrides from a JSON file. Keys missing from the file keep
    /// their default copy.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Could not read messages file {}", path.display()))?;
        let messages: Messages = serde_json::from_str(&content)
            .with_context(|| format!("Invalid messages file {}", path.display()))?;
        Ok(messages)
    }

    /// Fill `{name}` placeholders in a single pass. Substituted values are
    /// copied as-is and never scanned for placeholders themselves; unknown
    /// placeholders are left in place.
    pub fn render(template: &str, vars: &[(&str, &str)]) -> String {
        let mut out = String::with_capacity(template.len());
        let mut rest = template;

        while let Some(open) = rest.find('{') {
            out.push_str(&rest[..open]);
            let tail = &rest[open..];

            let value = tail[1..].find('}').and_then(|close| {
                let name = &tail[1..1 + close];
                vars.iter()
                    .find(|(var, _)| *var == name)
                    .map(|(_, value)| (*value, close + 2))
            });

            match value {
                Some((value, consumed)) => {
                    out.push_str(value);
                    rest = &tail[consumed..];
                }
                None => {
                    out.push('{');
                    rest = &tail[1..];
                }
            }
        }

        out.push_str(rest);
        out
    }
}
