use crate::{Background, Config, Events, GameState, Time};

/// Scroll the background by the current world velocity
pub fn scroll_background(
    background: &mut Background,
    state: &GameState,
    config: &Config,
    events: &mut Events,
) {
    if background.scroll(state.world_velocity_x, config.viewport_width) {
        events.background_wrapped = true;
        log::debug!("background wrapped, lead image {}", background.images[0]);
    }
}

/// Decelerate a burst world speed back to the default
pub fn recover_world_speed(state: &mut GameState, time: &Time, config: &Config) {
    if state.world_velocity_x < config.world_default_speed {
        state.world_velocity_x += time.dt;
    } else {
        state.world_velocity_x = config.world_default_speed;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_burst_recovers_by_dt() {
        let config = Config::new();
        let mut state = GameState::new(config.world_burst_speed());
        let time = Time::new(0.5, 0.0);

        recover_world_speed(&mut state, &time, &config);
        assert_eq!(state.world_velocity_x, -10.5);
    }

    #[test]
    fn test_recovery_clamps_to_default() {
        let config = Config::new();
        let mut state = GameState::new(-7.9);
        recover_world_speed(&mut state, &Time::default(), &config);
        assert_eq!(state.world_velocity_x, -8.0);
    }

    #[test]
    fn test_scroll_uses_world_velocity() {
        let config = Config::new();
        let mut background = Background::new(1800.0, config.background_images.clone());
        let state = GameState::new(-11.0);
        let mut events = Events::new();

        scroll_background(&mut background, &state, &config, &mut events);

        assert_eq!(background.scene_x, -11.0);
        assert!(!events.background_wrapped);
    }

    #[test]
    fn test_scroll_reports_wrap() {
        let config = Config::new();
        let mut background = Background::new(900.0, config.background_images.clone());
        let state = GameState::new(config.world_default_speed);
        let mut events = Events::new();

        scroll_background(&mut background, &state, &config, &mut events);

        assert!(events.background_wrapped);
        assert_eq!(background.scene_x, 900.0);
        assert_eq!(background.images[0], "background_3.png");
    }
}
