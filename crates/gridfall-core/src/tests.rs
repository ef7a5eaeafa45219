#[cfg(test)]
mod tests {
    use crate::commands::PlayerCommand;
    use crate::enums::*;
    use crate::errors::{ConfigError, InvalidTransition};
    use crate::events::GameEvent;
    use crate::state::GameSnapshot;
    use crate::types::{Position, SimClock, SimTime, Velocity};

    /// Verify all enums round-trip through serde_json.
    #[test]
    fn test_entity_kind_serde() {
        let variants = vec![
            EntityKind::Defender,
            EntityKind::HostileUnit,
            EntityKind::BonusFlyer,
            EntityKind::ShieldSegment,
            EntityKind::Projectile,
            EntityKind::Debris,
        ];
        for v in variants {
            let json = serde_json::to_string(&v).unwrap();
            let back: EntityKind = serde_json::from_str(&json).unwrap();
            assert_eq!(v, back);
        }
    }

    #[test]
    fn test_lifecycle_state_serde() {
        let variants = vec![
            LifecycleState::Flying,
            LifecycleState::FallingDebris,
            LifecycleState::GroundedDebris,
            LifecycleState::Repurposed,
        ];
        for v in variants {
            let json = serde_json::to_string(&v).unwrap();
            let back: LifecycleState = serde_json::from_str(&json).unwrap();
            assert_eq!(v, back);
        }
    }

    #[test]
    fn test_match_phase_serde() {
        let variants = vec![
            MatchPhase::MainMenu,
            MatchPhase::Playing,
            MatchPhase::RespawnWait,
            MatchPhase::WaveTransition,
            MatchPhase::GameOver,
        ];
        for v in variants {
            let json = serde_json::to_string(&v).unwrap();
            let back: MatchPhase = serde_json::from_str(&json).unwrap();
            assert_eq!(v, back);
        }
    }

    #[test]
    fn test_unit_class_point_values() {
        assert_eq!(UnitClass::Light.point_value(), 10);
        assert_eq!(UnitClass::Medium.point_value(), 20);
        assert_eq!(UnitClass::Heavy.point_value(), 30);
    }

    #[test]
    fn test_origin_side_opposite() {
        assert_eq!(OriginSide::Defender.opposite(), OriginSide::Hostile);
        assert_eq!(OriginSide::Hostile.opposite(), OriginSide::Defender);
    }

    /// Verify PlayerCommand round-trips through serde (tagged union).
    #[test]
    fn test_player_command_serde() {
        let commands = vec![
            PlayerCommand::SetAxis { value: -0.5 },
            PlayerCommand::Fire,
            PlayerCommand::Pause,
            PlayerCommand::Resume,
            PlayerCommand::SetTimeScale { scale: 2.0 },
            PlayerCommand::StartMatch,
            PlayerCommand::Restart,
        ];
        for cmd in &commands {
            let json = serde_json::to_string(cmd).unwrap();
            let back: PlayerCommand = serde_json::from_str(&json).unwrap();
            // Compare JSON representations since PlayerCommand doesn't derive PartialEq
            assert_eq!(json, serde_json::to_string(&back).unwrap());
        }
    }

    /// Verify GameEvent round-trips through serde.
    #[test]
    fn test_game_event_serde() {
        let events = vec![
            GameEvent::UnitDestroyed {
                position: Position::new(1.0, 0.0, 2.0),
                point_value: 30,
            },
            GameEvent::StepOccurred,
            GameEvent::ShieldDamaged {
                segment_id: 7,
                health_fraction: 0.75,
            },
            GameEvent::ScoreChanged { new_score: 120 },
            GameEvent::WaveCompleted { wave_number: 1 },
            GameEvent::GameOver { final_score: 990 },
        ];
        for event in &events {
            let json = serde_json::to_string(event).unwrap();
            let _back: GameEvent = serde_json::from_str(&json).unwrap();
        }
    }

    /// Verify GameSnapshot can be serialized to JSON.
    #[test]
    fn test_snapshot_serde() {
        let snapshot = GameSnapshot::default();
        let json = serde_json::to_string(&snapshot).unwrap();
        let back: GameSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(snapshot.time.tick, back.time.tick);
        assert_eq!(snapshot.phase, back.phase);
        assert!(
            json.len() < 1024,
            "Empty snapshot should be <1KB, was {} bytes",
            json.len()
        );
    }

    /// Verify Position geometry calculations.
    #[test]
    fn test_position_range() {
        let a = Position::new(0.0, 0.0, 0.0);
        let b = Position::new(3.0, 0.0, 4.0);
        assert!((a.range_to(&b) - 5.0).abs() < 1e-10);
    }

    #[test]
    fn test_velocity_speed() {
        let v = Velocity::new(3.0, 0.0, 4.0);
        assert!((v.speed() - 5.0).abs() < 1e-10);
    }

    /// Verify SimTime advancement.
    #[test]
    fn test_sim_time_advance() {
        let mut time = SimTime::default();
        assert_eq!(time.tick, 0);
        assert_eq!(time.elapsed_secs, 0.0);

        for _ in 0..30 {
            time.advance(crate::constants::DT);
        }
        assert_eq!(time.tick, 30);
        // 30 ticks at 30Hz = 1 second
        assert!((time.elapsed_secs - 1.0).abs() < 1e-10);
    }

    /// Pausing or zero scale yields zero effective dt; scale is clamped.
    #[test]
    fn test_sim_clock() {
        let mut clock = SimClock::default();
        assert!((clock.effective_dt(crate::constants::DT) - crate::constants::DT).abs() < 1e-12);

        clock.paused = true;
        assert_eq!(clock.effective_dt(crate::constants::DT), 0.0);

        clock.paused = false;
        clock.set_time_scale(10.0);
        assert!((clock.time_scale - 4.0).abs() < 1e-10);
        clock.set_time_scale(-1.0);
        assert_eq!(clock.time_scale, 0.0);
        assert_eq!(clock.effective_dt(crate::constants::DT), 0.0);
    }

    /// Errors format into readable messages.
    #[test]
    fn test_error_display() {
        let e = ConfigError::MissingTemplate {
            class: UnitClass::Light,
        };
        assert!(e.to_string().contains("Light"));

        let t = InvalidTransition {
            from: LifecycleState::GroundedDebris,
            to: LifecycleState::Flying,
        };
        assert!(t.to_string().contains("GroundedDebris"));
    }
}
