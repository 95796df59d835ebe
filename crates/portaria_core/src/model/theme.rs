//! Fixed UI theme set for per-user preferences.

use serde::{Deserialize, Serialize};

/// Theme identifier persisted per user under `theme:{userId}`.
///
/// The wire tokens are kebab-case (`campos-jordao`, `modern`, ...).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Theme {
    /// Earthy mountain palette; the system default.
    #[default]
    CamposJordao,
    Modern,
    Elegant,
    Sunset,
}

impl Theme {
    /// All selectable themes, in presentation order.
    pub const ALL: [Theme; 4] = [
        Theme::CamposJordao,
        Theme::Modern,
        Theme::Elegant,
        Theme::Sunset,
    ];
}

#[cfg(test)]
mod tests {
    use super::Theme;

    #[test]
    fn wire_tokens_are_kebab_case() {
        assert_eq!(
            serde_json::to_string(&Theme::CamposJordao).unwrap(),
            "\"campos-jordao\""
        );
        let parsed: Theme = serde_json::from_str("\"sunset\"").unwrap();
        assert_eq!(parsed, Theme::Sunset);
    }

    #[test]
    fn default_is_campos_jordao() {
        assert_eq!(Theme::default(), Theme::CamposJordao);
    }
}
