//! Scripted controller timeline, fed through the desktop emulation so the
//! sandbox exercises the same path as a mouse and keyboard.

use input::{ElementState, Hand, InputState, KeyCode, MouseButton};

/// One controller change.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Cue {
    /// Partial pull on the gun trigger; shows the aim laser without firing.
    Aim(f32),
    /// Gun trigger fully down (left mouse button).
    Fire,
    /// Gun trigger back up.
    FireUp,
    /// Hold the gun grip (space).
    ReelHold,
    /// Let go of the grip.
    ReelStop,
    /// Off-hand trigger down (right mouse button).
    Release,
    /// Off-hand trigger back up.
    ReleaseUp,
}

impl Cue {
    pub fn apply(self, input: &mut InputState) {
        match self {
            Cue::Aim(value) => input.set_trigger(Hand::Right, value),
            Cue::Fire => input.process_mouse_button(MouseButton::Left, ElementState::Pressed),
            Cue::FireUp => input.process_mouse_button(MouseButton::Left, ElementState::Released),
            Cue::ReelHold => input.process_keyboard(KeyCode::Space, ElementState::Pressed),
            Cue::ReelStop => input.process_keyboard(KeyCode::Space, ElementState::Released),
            Cue::Release => input.process_mouse_button(MouseButton::Right, ElementState::Pressed),
            Cue::ReleaseUp => input.process_mouse_button(MouseButton::Right, ElementState::Released),
        }
    }
}

/// Cues sorted by time, consumed as the clock passes them.
#[derive(Debug)]
pub struct Script {
    cues: Vec<(f32, Cue)>,
    next: usize,
}

impl Script {
    pub fn new(mut cues: Vec<(f32, Cue)>) -> Self {
        cues.sort_by(|a, b| a.0.total_cmp(&b.0));
        Self { cues, next: 0 }
    }

    /// Aim, hook, swing, reel in, swing again, release.
    pub fn swing_demo() -> Self {
        Self::new(vec![
            (0.2, Cue::Aim(0.4)),
            (0.8, Cue::Fire),
            (0.9, Cue::FireUp),
            (1.5, Cue::ReelHold),
            (2.7, Cue::ReelStop),
            (3.6, Cue::Release),
            (3.7, Cue::ReleaseUp),
        ])
    }

    /// Time of the last cue.
    pub fn end_time(&self) -> f32 {
        self.cues.last().map_or(0.0, |(t, _)| *t)
    }

    /// Apply every cue due by `elapsed` seconds. Returns how many fired.
    pub fn apply_due(&mut self, elapsed: f32, input: &mut InputState) -> usize {
        let start = self.next;
        while let Some(&(at, cue)) = self.cues.get(self.next) {
            if at > elapsed {
                break;
            }
            log::debug!("cue {:?} at {:.2}s", cue, elapsed);
            cue.apply(input);
            self.next += 1;
        }
        self.next - start
    }

    pub fn is_finished(&self) -> bool {
        self.next >= self.cues.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cues_fire_in_time_order_once() {
        let mut script = Script::new(vec![(0.5, Cue::FireUp), (0.1, Cue::Fire)]);
        let mut input = InputState::new();

        assert_eq!(script.apply_due(0.05, &mut input), 0);
        assert_eq!(script.apply_due(0.2, &mut input), 1);
        assert!(input.is_trigger_pressed(Hand::Right));
        assert_eq!(script.apply_due(0.2, &mut input), 0);

        input.begin_frame();
        assert_eq!(script.apply_due(1.0, &mut input), 1);
        assert!(input.is_trigger_released(Hand::Right));
        assert!(script.is_finished());
    }

    #[test]
    fn release_cue_presses_off_hand() {
        let mut input = InputState::new();
        Cue::Release.apply(&mut input);
        assert!(input.is_trigger_pressed(Hand::Left));
        assert!(!input.is_trigger_pressed(Hand::Right));
    }

    #[test]
    fn reel_cues_drive_grip() {
        let mut input = InputState::new();
        Cue::ReelHold.apply(&mut input);
        assert_eq!(input.grip(Hand::Right), 1.0);
        Cue::ReelStop.apply(&mut input);
        assert_eq!(input.grip(Hand::Right), 0.0);
    }

    #[test]
    fn demo_ends_after_release() {
        let script = Script::swing_demo();
        assert!(script.end_time() > 3.0);
    }
}
