#[cfg(test)]
mod tests {
    use gridfall_core::constants::*;
    use gridfall_core::enums::{DebrisSource, EntityKind, LifecycleState, OriginSide};

    use crate::dispatch::{damage_rule, DamageAction};
    use crate::fsm;
    use crate::profiles::profile;

    const ALL_STATES: [LifecycleState; 4] = [
        LifecycleState::Flying,
        LifecycleState::FallingDebris,
        LifecycleState::GroundedDebris,
        LifecycleState::Repurposed,
    ];

    #[test]
    fn exactly_four_legal_edges() {
        let mut legal = Vec::new();
        for from in ALL_STATES {
            for to in ALL_STATES {
                if fsm::is_legal(from, to) {
                    legal.push((from, to));
                }
            }
        }
        assert_eq!(
            legal,
            vec![
                (LifecycleState::Flying, LifecycleState::FallingDebris),
                (LifecycleState::FallingDebris, LifecycleState::GroundedDebris),
                (LifecycleState::GroundedDebris, LifecycleState::Repurposed),
                (LifecycleState::Repurposed, LifecycleState::Flying),
            ]
        );
    }

    #[test]
    fn self_transitions_are_illegal() {
        for state in ALL_STATES {
            assert!(!fsm::is_legal(state, state));
        }
    }

    #[test]
    fn try_transition_reports_rejected_edge() {
        let err = fsm::try_transition(LifecycleState::Flying, LifecycleState::GroundedDebris)
            .unwrap_err();
        assert_eq!(err.from, LifecycleState::Flying);
        assert_eq!(err.to, LifecycleState::GroundedDebris);
    }

    #[test]
    fn miss_boundaries_are_per_side() {
        // Defender shots miss past the formation, toward +z.
        assert!(!fsm::missed(OriginSide::Defender, DEFENDER_SHOT_MISS_Z));
        assert!(fsm::missed(OriginSide::Defender, DEFENDER_SHOT_MISS_Z + 0.01));
        assert!(!fsm::missed(OriginSide::Defender, 0.0));

        // Hostile shots miss past the defender, toward -z.
        assert!(!fsm::missed(OriginSide::Hostile, HOSTILE_SHOT_MISS_Z));
        assert!(fsm::missed(OriginSide::Hostile, HOSTILE_SHOT_MISS_Z - 0.01));
        assert!(!fsm::missed(OriginSide::Hostile, 0.0));
    }

    #[test]
    fn fall_speed_clamps_at_profile_maximum() {
        let p = profile(DebrisSource::HostileShot);
        let mut vz = 0.0;
        for _ in 0..10_000 {
            vz = fsm::fall_step(vz, &p, DT);
            assert!(vz >= -p.max_fall_speed);
        }
        assert_eq!(vz, -p.max_fall_speed);
    }

    #[test]
    fn fall_step_accelerates_downward() {
        let p = profile(DebrisSource::DefenderShot);
        let v1 = fsm::fall_step(0.0, &p, DT);
        let v2 = fsm::fall_step(v1, &p, DT);
        assert!(v1 < 0.0);
        assert!(v2 < v1);
    }

    #[test]
    fn drag_decays_toward_rest_without_overshoot() {
        let mut v = DEBRIS_PUSH_SPEED;
        for _ in 0..1_000 {
            let next = fsm::drag_decay(v, SHOT_DEBRIS_DRAG, DT);
            assert!(next.abs() < v.abs());
            assert!(next.signum() == v.signum());
            v = next;
        }
        assert!(v.abs() < 1e-3);
    }

    #[test]
    fn ground_planes_differ_by_source() {
        let shot = profile(DebrisSource::DefenderShot);
        let unit = profile(DebrisSource::DestroyedUnit);
        assert!(fsm::reached_ground(shot.ground_z, &shot));
        assert!(!fsm::reached_ground(shot.ground_z + 0.01, &shot));
        // Unit debris settles further back than shot debris.
        assert!(unit.ground_z < shot.ground_z);
    }

    #[test]
    fn hostile_debris_falls_harder_than_defender_debris() {
        let defender = profile(DebrisSource::DefenderShot);
        let hostile = profile(DebrisSource::HostileShot);
        assert!(hostile.gravity > defender.gravity);
        assert!(hostile.max_fall_speed > defender.max_fall_speed);
    }

    #[test]
    fn only_grounded_hostile_shots_repurpose() {
        for state in ALL_STATES {
            for source in [
                DebrisSource::DefenderShot,
                DebrisSource::HostileShot,
                DebrisSource::DestroyedUnit,
            ] {
                let eligible = state == LifecycleState::GroundedDebris
                    && source == DebrisSource::HostileShot;
                assert_eq!(fsm::can_repurpose(state, source), eligible);
            }
        }
    }

    #[test]
    fn repurpose_cycle_returns_to_flying() {
        let state = fsm::repurpose(LifecycleState::GroundedDebris).unwrap();
        assert_eq!(state, LifecycleState::Flying);
    }

    #[test]
    fn repurpose_rejects_non_grounded_states() {
        assert!(fsm::repurpose(LifecycleState::Flying).is_err());
        assert!(fsm::repurpose(LifecycleState::FallingDebris).is_err());
        assert!(fsm::repurpose(LifecycleState::Repurposed).is_err());
    }

    #[test]
    fn dispatch_table_matches_design() {
        use EntityKind::*;

        // Defender shots.
        assert_eq!(
            damage_rule(OriginSide::Defender, HostileUnit),
            Some(DamageAction::KillUnit)
        );
        assert_eq!(
            damage_rule(OriginSide::Defender, BonusFlyer),
            Some(DamageAction::DestroyFlyer)
        );
        assert_eq!(
            damage_rule(OriginSide::Defender, ShieldSegment),
            Some(DamageAction::DamageShield)
        );
        assert_eq!(damage_rule(OriginSide::Defender, Defender), None);

        // Hostile shots.
        assert_eq!(
            damage_rule(OriginSide::Hostile, Defender),
            Some(DamageAction::HitDefender)
        );
        assert_eq!(
            damage_rule(OriginSide::Hostile, ShieldSegment),
            Some(DamageAction::DamageShield)
        );
        assert_eq!(damage_rule(OriginSide::Hostile, HostileUnit), None);
        assert_eq!(damage_rule(OriginSide::Hostile, BonusFlyer), None);
    }

    #[test]
    fn projectiles_and_debris_are_never_damage_targets() {
        for origin in [OriginSide::Defender, OriginSide::Hostile] {
            assert_eq!(damage_rule(origin, EntityKind::Projectile), None);
            assert_eq!(damage_rule(origin, EntityKind::Debris), None);
        }
    }
}
