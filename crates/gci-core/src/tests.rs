#[cfg(test)]
mod tests {
    use crate::components::Role;
    use crate::config::{ConfigError, GameConfig};
    use crate::enums::*;
    use crate::events::TurnEvent;
    use crate::types::{heading_delta, normalize_heading, GridCell, MapBounds, Position};

    // ---- Geometry ----

    #[test]
    fn test_normalize_heading_wraps_into_range() {
        assert_eq!(normalize_heading(0.0), 0.0);
        assert_eq!(normalize_heading(360.0), 0.0);
        assert_eq!(normalize_heading(-90.0), 270.0);
        assert_eq!(normalize_heading(725.0), 5.0);
        // Tiny negatives must not round up to 360.
        let h = normalize_heading(-1e-17);
        assert!((0.0..360.0).contains(&h), "got {h}");
    }

    #[test]
    fn test_heading_delta_takes_short_arc() {
        assert_eq!(heading_delta(10.0, 350.0), -20.0);
        assert_eq!(heading_delta(350.0, 10.0), 20.0);
        assert_eq!(heading_delta(0.0, 90.0), 90.0);
        assert_eq!(heading_delta(0.0, 180.0), -180.0);
    }

    #[test]
    fn test_heading_to_uses_screen_rows() {
        let origin = Position::new(10.0, 10.0);
        // East
        assert!((origin.heading_to(&Position::new(20.0, 10.0)) - 0.0).abs() < 1e-10);
        // Row 0 is up, so a smaller y is north (90°).
        assert!((origin.heading_to(&Position::new(10.0, 0.0)) - 90.0).abs() < 1e-10);
        // West
        assert!((origin.heading_to(&Position::new(0.0, 10.0)) - 180.0).abs() < 1e-10);
        // South is normalized from -90 to 270.
        assert!((origin.heading_to(&Position::new(10.0, 20.0)) - 270.0).abs() < 1e-10);
    }

    #[test]
    fn test_position_cell_truncates() {
        assert_eq!(Position::new(3.99, 0.2).cell(), GridCell::new(3, 0));
        assert_eq!(Position::new(49.0, 49.0).cell(), GridCell::new(49, 49));
    }

    #[test]
    fn test_cell_distance() {
        let a = GridCell::new(0, 0);
        let b = GridCell::new(3, 4);
        assert!((a.distance_to(&b) - 5.0).abs() < 1e-10);
        assert!((Position::new(0.0, 0.0).range_to(&Position::new(3.0, 4.0)) - 5.0).abs() < 1e-10);
    }

    #[test]
    fn test_map_bounds_clamp() {
        let bounds = MapBounds::new(50, 40);
        let clamped = bounds.clamp(Position::new(-3.0, 55.0));
        assert_eq!(clamped, Position::new(0.0, 39.0));
        assert!(bounds.contains(&Position::new(49.0, 39.0)));
        assert!(!bounds.contains(&Position::new(49.5, 0.0)));
    }

    // ---- Outcome ----

    #[test]
    fn test_outcome_terminal_and_messages() {
        assert!(!GameOutcome::Active.is_terminal());
        assert!(GameOutcome::Active.message().is_none());
        for outcome in [
            GameOutcome::Victory,
            GameOutcome::DefeatAllTargetsLost,
            GameOutcome::DefeatAllInterceptorsLost,
        ] {
            assert!(outcome.is_terminal());
            assert!(outcome.message().is_some());
        }
        assert_ne!(
            GameOutcome::DefeatAllTargetsLost.message(),
            GameOutcome::DefeatAllInterceptorsLost.message()
        );
    }

    // ---- Events ----

    #[test]
    fn test_event_headline_fragments() {
        let sighted = TurnEvent::BomberSighted {
            bomber: 2,
            cell: GridCell::new(0, 17),
            edge: MapEdge::West,
        };
        assert_eq!(sighted.to_string(), "Bomber sighted at (0, 17)!");

        let report = TurnEvent::Position {
            kind: UnitKind::Interceptor,
            unit: 1,
            cell: GridCell::new(27, 25),
            heading: 89.6,
        };
        assert_eq!(report.to_string(), "Interceptor 1 is at (27, 25), facing 90.");
    }

    #[test]
    fn test_role_serde_is_tagged() {
        let role = Role::Bomber {
            target: Position::new(20.0, 20.0),
        };
        let json = serde_json::to_string(&role).unwrap();
        assert!(json.contains("\"type\":\"Bomber\""), "{json}");
        let back: Role = serde_json::from_str(&json).unwrap();
        assert_eq!(role, back);
        assert_eq!(back.kind(), UnitKind::Bomber);
    }

    // ---- Config ----

    #[test]
    fn test_default_config_matches_standard_scenario() {
        let config = GameConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.map, MapBounds::new(50, 50));
        assert_eq!(config.home_base, Position::new(25.0, 25.0));
        assert_eq!(
            config.interceptor_starts,
            vec![
                Position::new(25.0, 25.0),
                Position::new(27.0, 27.0),
                Position::new(29.0, 29.0),
                Position::new(31.0, 31.0),
            ]
        );
        assert_eq!(config.targets.len(), 4);
        assert_eq!(config.targets[1], Position::new(35.0, 13.0));
        assert_eq!(config.interceptor.max_fuel, 14);
        assert_eq!(config.bomber.max_fuel, 45);
        assert_eq!(config.spawn_period, 3);
        assert_eq!(config.turn_limit, 51);
    }

    #[test]
    fn test_partial_json_config_keeps_defaults() {
        let config = GameConfig::from_json(r#"{ "spawn_period": 5, "turn_limit": 20 }"#).unwrap();
        assert_eq!(config.spawn_period, 5);
        assert_eq!(config.turn_limit, 20);
        assert_eq!(config.targets, GameConfig::default().targets);
    }

    #[test]
    fn test_nested_json_override_keeps_sibling_defaults() {
        let config = GameConfig::from_json(
            r#"{ "interceptor": { "max_fuel": 20 }, "map": { "width": 60 } }"#,
        )
        .unwrap();
        assert_eq!(config.interceptor.max_fuel, 20);
        assert_eq!(config.interceptor.max_speed, 2.0);
        assert_eq!(config.interceptor.max_turn, 90.0);
        assert_eq!(config.bomber, GameConfig::default().bomber);
        assert_eq!(config.map, MapBounds::new(60, 50));

        let config = GameConfig::from_json(r#"{ "targets": [{ "x": 3.0, "y": 4.0 }] }"#).unwrap();
        assert_eq!(config.targets, vec![Position::new(3.0, 4.0)]);

        let err = GameConfig::from_json(r#"{ "bomber": { "max_fuel": "lots" } }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_config_rejects_bad_values() {
        let err = GameConfig::from_json("{ not json").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));

        let mut config = GameConfig::default();
        config.spawn_period = 0;
        assert!(matches!(config.validate(), Err(ConfigError::ZeroSpawnPeriod)));

        let mut config = GameConfig::default();
        config.targets.push(Position::new(50.0, 10.0));
        assert!(matches!(
            config.validate(),
            Err(ConfigError::OutOfBounds { what: "target", .. })
        ));

        let mut config = GameConfig::default();
        config.bomb_radius = f64::NAN;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidMagnitude { field: "bomb_radius", .. })
        ));

        let mut config = GameConfig::default();
        config.interceptor_starts.clear();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::EmptyRoster("interceptor"))
        ));

        let mut config = GameConfig::default();
        config.map = MapBounds::new(0, 10);
        assert!(matches!(config.validate(), Err(ConfigError::EmptyMap { .. })));
    }
}
