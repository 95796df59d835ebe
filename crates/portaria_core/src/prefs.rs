//! Per-user theme preference binding.
//!
//! One `theme:{userId}` key per user, independent of every other
//! collection. A session switch recomputes the active theme from the new
//! user's stored preference; nothing carries over between users.

use crate::model::theme::Theme;
use crate::repo::RepoResult;
use crate::store::Store;
use log::warn;

fn theme_key(user_id: &str) -> String {
    format!("theme:{user_id}")
}

/// Theme preference store bound to one key-value store.
pub struct ThemePreferences<'s, S: Store> {
    store: &'s S,
}

impl<'s, S: Store> ThemePreferences<'s, S> {
    pub fn new(store: &'s S) -> Self {
        Self { store }
    }

    /// Returns the user's stored theme, or the default when none was
    /// ever set (or the stored token no longer parses).
    pub fn theme_for(&self, user_id: &str) -> RepoResult<Theme> {
        let key = theme_key(user_id);
        let Some(raw) = self.store.read(&key)? else {
            return Ok(Theme::default());
        };
        match serde_json::from_str(&raw) {
            Ok(theme) => Ok(theme),
            Err(err) => {
                warn!("event=decode_failed module=prefs status=recovered key={key} error={err}");
                Ok(Theme::default())
            }
        }
    }

    /// Stores the user's theme choice.
    pub fn set_theme(&self, user_id: &str, theme: Theme) -> RepoResult<()> {
        let raw = serde_json::to_string(&theme)?;
        self.store.write(&theme_key(user_id), &raw)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::ThemePreferences;
    use crate::model::theme::Theme;
    use crate::store::{MemoryStore, Store};

    #[test]
    fn unset_and_malformed_fall_back_to_default() {
        let store = MemoryStore::new();
        let prefs = ThemePreferences::new(&store);

        assert_eq!(prefs.theme_for("res-001").unwrap(), Theme::default());

        store.write("theme:res-001", "\"neon-disco\"").unwrap();
        assert_eq!(prefs.theme_for("res-001").unwrap(), Theme::default());
    }

    #[test]
    fn themes_are_isolated_per_user() {
        let store = MemoryStore::new();
        let prefs = ThemePreferences::new(&store);

        prefs.set_theme("res-001", Theme::Sunset).unwrap();
        assert_eq!(prefs.theme_for("res-001").unwrap(), Theme::Sunset);
        assert_eq!(prefs.theme_for("admin-001").unwrap(), Theme::default());
    }
}
