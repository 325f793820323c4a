//! 偏好设置与收藏城市

use tracing::info;

use crate::error::Result;
use crate::store::JsonStore;
use crate::types::{Location, SpeedUnit, TempUnit, Theme};

const KEY_THEME: &str = "theme";
const KEY_TEMP_UNIT: &str = "tempUnit";
const KEY_SPEED_UNIT: &str = "speedUnit";
const KEY_SAVED_CITIES: &str = "savedCities";
const KEY_ACTIVE_CITY: &str = "activeCityId";

/// 所有读取在键缺失或损坏时回退到默认值
#[derive(Debug)]
pub struct Preferences {
    store: JsonStore,
}

impl Preferences {
    pub fn new(store: JsonStore) -> Self {
        Self { store }
    }

    pub fn theme(&self) -> Theme {
        self.store.get(KEY_THEME).unwrap_or_default()
    }

    pub fn set_theme(&mut self, theme: Theme) -> Result<()> {
        self.store.set(KEY_THEME, &theme)
    }

    pub fn temp_unit(&self) -> TempUnit {
        self.store.get(KEY_TEMP_UNIT).unwrap_or_default()
    }

    pub fn set_temp_unit(&mut self, unit: TempUnit) -> Result<()> {
        self.store.set(KEY_TEMP_UNIT, &unit)
    }

    pub fn speed_unit(&self) -> SpeedUnit {
        self.store.get(KEY_SPEED_UNIT).unwrap_or_default()
    }

    pub fn set_speed_unit(&mut self, unit: SpeedUnit) -> Result<()> {
        self.store.set(KEY_SPEED_UNIT, &unit)
    }

    pub fn saved_cities(&self) -> Vec<Location> {
        self.store
            .get(KEY_SAVED_CITIES)
            .unwrap_or_else(|| vec![Location::london()])
    }

    /// 未设置时取第一个收藏城市；空字符串表示没有选中城市
    pub fn active_city_id(&self) -> String {
        self.store.get(KEY_ACTIVE_CITY).unwrap_or_else(|| {
            self.saved_cities()
                .first()
                .map(|c| c.id.clone())
                .unwrap_or_default()
        })
    }

    /// 当前城市：选中的收藏，找不到时退回第一个收藏
    pub fn active_city(&self) -> Option<Location> {
        let saved = self.saved_cities();
        let active = self.active_city_id();
        saved
            .iter()
            .find(|c| c.id == active)
            .or_else(|| saved.first())
            .cloned()
    }

    pub fn set_active(&mut self, id: &str) -> Result<()> {
        self.store.set(KEY_ACTIVE_CITY, &id)
    }

    /// 添加收藏（按 id 去重）并设为当前城市
    pub fn add_location(&mut self, location: Location) -> Result<()> {
        let mut saved = self.saved_cities();
        let id = location.id.clone();
        if !saved.iter().any(|c| c.id == id) {
            info!("Saving location {} ({})", location.name, id);
            saved.push(location);
            self.store.set(KEY_SAVED_CITIES, &saved)?;
        }
        self.set_active(&id)
    }

    /// 删除收藏；删除的是当前城市时改选剩余的第一个
    pub fn remove_location(&mut self, id: &str) -> Result<()> {
        let mut saved = self.saved_cities();
        saved.retain(|c| c.id != id);
        self.store.set(KEY_SAVED_CITIES, &saved)?;

        if self.active_city_id() == id {
            let next = saved.first().map(|c| c.id.clone()).unwrap_or_default();
            self.set_active(&next)?;
        }
        Ok(())
    }

    pub fn clear_locations(&mut self) -> Result<()> {
        self.store.set(KEY_SAVED_CITIES, &Vec::<Location>::new())?;
        self.set_active("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prefs(dir: &tempfile::TempDir) -> Preferences {
        Preferences::new(JsonStore::open(dir.path().join("prefs.json")))
    }

    #[test]
    fn test_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let p = prefs(&dir);
        assert_eq!(p.theme(), Theme::Light);
        assert_eq!(p.temp_unit(), TempUnit::Metric);
        assert_eq!(p.speed_unit(), SpeedUnit::Kmh);
        assert_eq!(p.saved_cities(), vec![Location::london()]);
        assert_eq!(p.active_city(), Some(Location::london()));
    }

    #[test]
    fn test_corrupt_values_fall_back() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("prefs.json"),
            r#"{"theme":"neon","tempUnit":"imperial","savedCities":42}"#,
        )
        .unwrap();
        let p = prefs(&dir);
        assert_eq!(p.theme(), Theme::Light);
        assert_eq!(p.temp_unit(), TempUnit::Imperial);
        assert_eq!(p.saved_cities(), vec![Location::london()]);
    }

    #[test]
    fn test_add_deduplicates_and_activates() {
        let dir = tempfile::tempdir().unwrap();
        let mut p = prefs(&dir);
        let paris = Location::new("Paris, France", 48.85341, 2.3488);

        p.add_location(paris.clone()).unwrap();
        p.add_location(paris.clone()).unwrap();
        assert_eq!(p.saved_cities().len(), 2);
        assert_eq!(p.active_city(), Some(paris.clone()));

        // 已存在的城市只切换选中
        p.add_location(Location::london()).unwrap();
        assert_eq!(p.saved_cities().len(), 2);
        assert_eq!(p.active_city_id(), Location::london().id);
    }

    #[test]
    fn test_remove_active_selects_first_remaining() {
        let dir = tempfile::tempdir().unwrap();
        let mut p = prefs(&dir);
        let paris = Location::new("Paris, France", 48.85341, 2.3488);
        p.add_location(paris.clone()).unwrap();

        p.remove_location(&paris.id).unwrap();
        assert_eq!(p.active_city_id(), Location::london().id);

        p.remove_location(&Location::london().id).unwrap();
        assert_eq!(p.active_city_id(), "");
        assert_eq!(p.active_city(), None);
    }

    #[test]
    fn test_remove_inactive_keeps_selection() {
        let dir = tempfile::tempdir().unwrap();
        let mut p = prefs(&dir);
        let paris = Location::new("Paris, France", 48.85341, 2.3488);
        p.add_location(paris.clone()).unwrap();

        p.remove_location(&Location::london().id).unwrap();
        assert_eq!(p.active_city(), Some(paris));
    }

    #[test]
    fn test_clear() {
        let dir = tempfile::tempdir().unwrap();
        let mut p = prefs(&dir);
        p.clear_locations().unwrap();
        assert!(p.saved_cities().is_empty());
        assert_eq!(p.active_city_id(), "");
        assert_eq!(p.active_city(), None);
    }

    #[test]
    fn test_settings_persist() {
        let dir = tempfile::tempdir().unwrap();
        let mut p = prefs(&dir);
        p.set_theme(Theme::Dark).unwrap();
        p.set_speed_unit(SpeedUnit::Ms).unwrap();

        let reopened = prefs(&dir);
        assert_eq!(reopened.theme(), Theme::Dark);
        assert_eq!(reopened.speed_unit(), SpeedUnit::Ms);
    }
}
