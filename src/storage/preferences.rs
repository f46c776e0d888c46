use super::db::LocalStorage;
use crate::constants::THEME_STORAGE_KEY;
use crate::theme::Theme;

impl LocalStorage {
    /// Stored theme, `None` when unset or unrecognized
    pub fn load_theme(&self) -> Option<Theme> {
        self.read_json::<Option<Theme>, _>(THEME_STORAGE_KEY, || None)
    }

    pub fn store_theme(&self, theme: Theme) {
        self.write_json(THEME_STORAGE_KEY, &theme);
    }
}
