pub mod categories;
pub mod check_edge;
pub mod dispatch;
pub mod entries;
pub mod graph;
pub mod habits;
pub mod repair;
pub mod schema;
pub mod tag;

#[cfg(test)]
pub(crate) mod fixtures {
    use humane_backup::Snapshot;
    use humane_config::HumaneConfig;
    use humane_core::enums::ZoneSetting;

    use crate::context::AppContext;

    /// Two categories, a wellness tag over two raw habits, and a tag/child
    /// link recorded on the child side only.
    pub const BACKUP: &str = r#"{
        "version": 1,
        "habits": [
            { "id": "wellness", "name": "Wellness", "habitType": "tag", "targetPerWeek": 2,
              "childIds": ["yoga", "walk"] },
            { "id": "yoga", "name": "Yoga", "category": "wellness", "targetPerWeek": 3,
              "parentIds": ["wellness"] },
            { "id": "walk", "name": "Walk", "category": "fitness", "targetPerWeek": 5 },
            { "id": "run", "name": "Run", "category": "fitness", "targetPerWeek": 2,
              "parentIds": ["wellness", "deleted-tag"] }
        ],
        "entries": [
            { "id": "e1", "habitId": "yoga", "date": "2025-11-24" },
            { "id": "e2", "habitId": "walk", "date": "2025-11-26T18:30:00Z" },
            { "id": "e3", "habitId": "walk", "date": "2025-11-25" },
            { "id": "e4", "habitId": "walk", "date": "2025-12-02" }
        ]
    }"#;

    pub fn context() -> AppContext {
        let mut config = HumaneConfig::default();
        config.tracker.time_zone = ZoneSetting::Utc;
        let snapshot = Snapshot::from_json(BACKUP).expect("fixture backup should parse");
        AppContext::for_tests(snapshot, config)
    }
}
