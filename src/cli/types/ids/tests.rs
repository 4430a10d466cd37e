//! Unit tests for id wrappers

use super::*;
use std::str::FromStr;

#[cfg(test)]
mod team_id_tests {
    use super::*;

    #[test]
    fn test_team_id_new() {
        let id = TeamId::new(7);
        assert_eq!(id.as_u32(), 7);
        assert_eq!(id.to_string(), "7");
    }

    #[test]
    fn test_team_id_validate_bounds() {
        assert!(TeamId::new(1).validate().is_ok());
        assert!(TeamId::new(20).validate().is_ok());
        assert!(matches!(
            TeamId::new(0).validate(),
            Err(FplError::InvalidArgument { .. })
        ));
        assert!(matches!(
            TeamId::new(21).validate(),
            Err(FplError::InvalidArgument { .. })
        ));
    }

    #[test]
    fn test_team_id_from_str_negative() {
        let result = TeamId::from_str("-5");
        assert!(matches!(result, Err(FplError::InvalidArgument { .. })));
    }

    #[test]
    fn test_team_id_from_str_not_a_number() {
        let result = TeamId::from_str("arsenal");
        assert!(matches!(result, Err(FplError::InvalidArgument { .. })));
    }

    #[test]
    fn test_team_id_from_str_valid() {
        assert_eq!(TeamId::from_str(" 12 ").unwrap(), TeamId::new(12));
    }

    #[test]
    fn test_team_id_serde() {
        let json = serde_json::to_string(&TeamId::new(3)).unwrap();
        assert_eq!(json, "3");
        let back: TeamId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, TeamId::new(3));
    }
}

#[cfg(test)]
mod player_id_tests {
    use super::*;

    #[test]
    fn test_player_id_zero_is_invalid() {
        assert!(matches!(
            PlayerId::new(0).validate(),
            Err(FplError::InvalidArgument { .. })
        ));
    }

    #[test]
    fn test_player_id_from_str() {
        assert_eq!(PlayerId::from_str("302").unwrap().as_u32(), 302);
        assert!(PlayerId::from_str("0").is_err());
        assert!(PlayerId::from_str("-1").is_err());
    }

    #[test]
    fn test_player_id_from_str_out_of_range_messages() {
        let negative = PlayerId::from_str("-1").unwrap_err().to_string();
        let too_large = PlayerId::from_str("5000000000").unwrap_err().to_string();

        assert!(negative.contains("must be positive"), "{negative}");
        assert!(too_large.contains("must be at most 4294967295"), "{too_large}");
        assert!(!too_large.contains("positive"), "{too_large}");
    }

    #[test]
    fn test_player_id_has_no_upper_bound() {
        assert!(PlayerId::new(900).validate().is_ok());
    }
}

#[cfg(test)]
mod entry_id_tests {
    use super::*;

    #[test]
    fn test_entry_id_from_str() {
        assert_eq!(EntryId::from_str("1234567").unwrap().as_u32(), 1234567);
        assert!(EntryId::from_str("0").is_err());
    }

    #[test]
    fn test_cup_id_accepts_zero() {
        assert_eq!(CupId::from_str("0").unwrap().as_u32(), 0);
    }
}
