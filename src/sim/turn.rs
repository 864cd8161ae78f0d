//! Turn ownership
//!
//! The game is strictly two-player, so a player is a two-variant tag rather
//! than an index into a list.

use serde::{Deserialize, Serialize};

use super::state::{GameEvent, MatchState};
use crate::consts::*;

/// Which of the two players
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerId {
    /// Left side, throws to the right
    One,
    /// Right side, throws to the left
    Two,
}

impl PlayerId {
    /// The other player
    #[inline]
    pub fn other(self) -> Self {
        match self {
            PlayerId::One => PlayerId::Two,
            PlayerId::Two => PlayerId::One,
        }
    }

    /// Horizontal throw direction (+1 right, -1 left)
    #[inline]
    pub fn direction(self) -> f32 {
        match self {
            PlayerId::One => 1.0,
            PlayerId::Two => -1.0,
        }
    }

    /// Allowed range for the player's bottom-left x
    #[inline]
    pub fn lane(self) -> (f32, f32) {
        match self {
            PlayerId::One => P1_LANE,
            PlayerId::Two => P2_LANE,
        }
    }

    /// 1 or 2, for display
    pub fn number(self) -> u8 {
        match self {
            PlayerId::One => 1,
            PlayerId::Two => 2,
        }
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.number())
    }
}

impl MatchState {
    /// Hand the turn to the other player and put the projectile back in
    /// their hand. Aim, power and launch origins carry over.
    pub fn advance_turn(&mut self) {
        self.current = self.current.other();
        self.reset_projectile();
        log::info!("Now it's {}'s turn!", self.current);
        self.events.push(GameEvent::TurnChanged {
            player: self.current,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Tuning;

    #[test]
    fn test_other_is_involution() {
        assert_eq!(PlayerId::One.other(), PlayerId::Two);
        assert_eq!(PlayerId::One.other().other(), PlayerId::One);
    }

    #[test]
    fn test_players_face_each_other() {
        assert_eq!(PlayerId::One.direction(), 1.0);
        assert_eq!(PlayerId::Two.direction(), -1.0);
    }

    #[test]
    fn test_turn_round_trip() {
        let mut state = MatchState::new(Tuning::default());
        let hold = state.hold_position(PlayerId::One);

        state.advance_turn();
        assert_eq!(state.current_player(), PlayerId::Two);
        assert!(!state.projectile().in_flight);
        assert_eq!(state.projectile().pos, state.hold_position(PlayerId::Two));

        state.advance_turn();
        assert_eq!(state.current_player(), PlayerId::One);
        assert!(!state.projectile().in_flight);
        assert_eq!(state.projectile().pos, hold);
    }

    #[test]
    fn test_advance_turn_keeps_aim_and_origins() {
        let mut state = MatchState::new(Tuning::default());
        state.adjust_angle(10.0);
        state.adjust_power(3.0);
        state.fire();
        let origin = state.launch_origin(PlayerId::One);

        state.advance_turn();
        assert_eq!(state.projectile().angle_deg, 55.0);
        assert_eq!(state.projectile().power, 8.0);
        assert_eq!(state.launch_origin(PlayerId::One), origin);
        assert_eq!(state.projectile().flight_time, 0.0);
    }

    #[test]
    fn test_advance_turn_emits_event() {
        let mut state = MatchState::new(Tuning::default());
        state.advance_turn();
        let events = state.drain_events();
        assert_eq!(
            events,
            vec![GameEvent::TurnChanged {
                player: PlayerId::Two
            }]
        );
    }
}
