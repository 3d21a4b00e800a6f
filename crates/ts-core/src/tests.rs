//! Unit tests for ts-core primitives.

#[cfg(test)]
mod ids {
    use crate::{IntersectionId, StreetId};

    #[test]
    fn index_roundtrip() {
        let id = IntersectionId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(IntersectionId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn ordering() {
        assert!(IntersectionId(0) < IntersectionId(1));
        assert!(StreetId(100) > StreetId(99));
    }

    #[test]
    fn display_is_bare_integer() {
        assert_eq!(IntersectionId(7).to_string(), "7");
        assert_eq!(StreetId(0).to_string(), "0");
    }

    #[test]
    fn try_from_overflow() {
        assert!(IntersectionId::try_from(u32::MAX as usize + 1).is_err());
    }
}

#[cfg(test)]
mod rounding {
    use crate::RoundingRule;

    #[test]
    fn default_is_half_even() {
        assert_eq!(RoundingRule::default(), RoundingRule::HalfEven);
    }

    #[test]
    fn half_even_ties() {
        let r = RoundingRule::HalfEven;
        assert_eq!(r.round(0.5), 0.0);
        assert_eq!(r.round(1.5), 2.0);
        assert_eq!(r.round(2.5), 2.0);
        assert_eq!(r.round(3.5), 4.0);
    }

    #[test]
    fn half_away_ties() {
        let r = RoundingRule::HalfAwayFromZero;
        assert_eq!(r.round(0.5), 1.0);
        assert_eq!(r.round(1.5), 2.0);
        assert_eq!(r.round(2.5), 3.0);
    }

    #[test]
    fn non_ties_agree() {
        for v in [0.4, 1.33, 2.67, 7.49, 7.51] {
            assert_eq!(
                RoundingRule::HalfEven.round(v),
                RoundingRule::HalfAwayFromZero.round(v),
                "value {v}"
            );
        }
    }

    #[test]
    fn parse_and_display() {
        assert_eq!("half-even".parse::<RoundingRule>().unwrap(), RoundingRule::HalfEven);
        assert_eq!("half-away".parse::<RoundingRule>().unwrap(), RoundingRule::HalfAwayFromZero);
        assert_eq!(RoundingRule::HalfAwayFromZero.to_string(), "half-away");
        assert!("nearest".parse::<RoundingRule>().is_err());
    }
}

#[cfg(test)]
mod config {
    use crate::{ProblemHeader, RoundingRule, ScheduleConfig, TsError};

    fn header(cycle_length: i64) -> ProblemHeader {
        ProblemHeader {
            duration:           6,
            intersection_count: 4,
            street_count:       5,
            vehicle_count:      2,
            cycle_length,
        }
    }

    #[test]
    fn positive_cycle_length_accepted() {
        let cfg = header(4).schedule_config(RoundingRule::HalfEven).unwrap();
        assert_eq!(cfg.cycle_length(), 4);
        assert_eq!(cfg.rounding(), RoundingRule::HalfEven);
    }

    #[test]
    fn zero_cycle_length_rejected() {
        let err = ScheduleConfig::new(0, RoundingRule::HalfEven).unwrap_err();
        assert!(matches!(err, TsError::InvalidConfiguration(_)));
    }

    #[test]
    fn negative_cycle_length_rejected() {
        let err = header(-3).schedule_config(RoundingRule::HalfEven).unwrap_err();
        assert!(matches!(err, TsError::InvalidConfiguration(_)));
        assert!(err.to_string().contains("-3"));
    }

    #[test]
    fn oversized_cycle_length_rejected() {
        let err = ScheduleConfig::new(u32::MAX as i64 + 1, RoundingRule::HalfEven).unwrap_err();
        assert!(matches!(err, TsError::InvalidConfiguration(_)));
    }

    #[test]
    fn proportional_duration_examples() {
        let cfg = ScheduleConfig::new(4, RoundingRule::HalfEven).unwrap();
        assert_eq!(cfg.proportional_duration(2, 3), 3); // 2.67
        assert_eq!(cfg.proportional_duration(1, 3), 1); // 1.33
        assert_eq!(cfg.proportional_duration(0, 3), 0);
        assert_eq!(cfg.proportional_duration(3, 3), 4);
    }

    #[test]
    fn proportional_duration_tie_follows_rule() {
        // 1/2 * 5 = 2.5
        let even = ScheduleConfig::new(5, RoundingRule::HalfEven).unwrap();
        let away = ScheduleConfig::new(5, RoundingRule::HalfAwayFromZero).unwrap();
        assert_eq!(even.proportional_duration(1, 2), 2);
        assert_eq!(away.proportional_duration(1, 2), 3);
    }
}
