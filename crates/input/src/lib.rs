//! Input handling for tracked VR controllers, with mouse and keyboard emulation.
//!
//! A device runtime (or the desktop emulation below) writes analog trigger and
//! grip values once per frame; the state derives press/release edges from
//! them and collects haptic requests for the runtime to play back.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Analog value a trigger or grip must reach to count as pressed.
pub const DEFAULT_PRESS_THRESHOLD: f32 = 0.75;

/// Which controller.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Hand {
    Left,
    #[default]
    Right,
}

impl Hand {
    /// The other hand.
    pub fn opposite(self) -> Hand {
        match self {
            Hand::Left => Hand::Right,
            Hand::Right => Hand::Left,
        }
    }
}

/// One haptic vibration request.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HapticPulse {
    /// Normalized vibration frequency (0..=1).
    pub frequency: f32,
    /// Normalized amplitude (0..=1).
    pub amplitude: f32,
    /// Duration in seconds.
    pub duration: f32,
}

/// A haptic pulse addressed to one controller.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HapticRequest {
    pub hand: Hand,
    pub pulse: HapticPulse,
}

/// Analog button with edge detection.
#[derive(Debug, Clone, Copy, Default)]
struct AnalogButton {
    value: f32,
    /// Crossed the press threshold upward this frame.
    pressed: bool,
    /// Crossed the press threshold downward this frame.
    released: bool,
}

impl AnalogButton {
    fn set(&mut self, value: f32, threshold: f32) {
        let value = if value.is_finite() { value.clamp(0.0, 1.0) } else { 0.0 };
        let was_down = self.value >= threshold;
        let is_down = value >= threshold;
        if is_down && !was_down {
            self.pressed = true;
        }
        if was_down && !is_down {
            self.released = true;
        }
        self.value = value;
    }

    fn clear_edges(&mut self) {
        self.pressed = false;
        self.released = false;
    }
}

/// State of one tracked controller.
#[derive(Debug, Clone, Copy, Default)]
struct Controller {
    trigger: AnalogButton,
    grip: AnalogButton,
}

/// Manages input state for the current frame.
#[derive(Debug)]
pub struct InputState {
    left: Controller,
    right: Controller,
    press_threshold: f32,
    /// Haptic requests not yet consumed by the device runtime.
    haptics: Vec<HapticRequest>,

    /// Keys currently held down (desktop emulation).
    keys_held: HashSet<KeyCode>,
    /// Mouse buttons currently held (desktop emulation).
    mouse_held: HashSet<MouseButton>,
}

impl Default for InputState {
    fn default() -> Self {
        Self::new()
    }
}

impl InputState {
    pub fn new() -> Self {
        Self::with_press_threshold(DEFAULT_PRESS_THRESHOLD)
    }

    /// Create input state with a custom press threshold (clamped to a usable range).
    pub fn with_press_threshold(threshold: f32) -> Self {
        Self {
            left: Controller::default(),
            right: Controller::default(),
            press_threshold: threshold.clamp(0.05, 1.0),
            haptics: Vec::new(),
            keys_held: HashSet::new(),
            mouse_held: HashSet::new(),
        }
    }

    /// Clear per-frame state. Call at the start of each frame, before sampling devices.
    pub fn begin_frame(&mut self) {
        for c in [&mut self.left, &mut self.right] {
            c.trigger.clear_edges();
            c.grip.clear_edges();
        }
    }

    fn controller(&self, hand: Hand) -> &Controller {
        match hand {
            Hand::Left => &self.left,
            Hand::Right => &self.right,
        }
    }

    fn controller_mut(&mut self, hand: Hand) -> &mut Controller {
        match hand {
            Hand::Left => &mut self.left,
            Hand::Right => &mut self.right,
        }
    }

    // Device feed

    /// Write the analog trigger value for a hand (clamped to 0..=1).
    pub fn set_trigger(&mut self, hand: Hand, value: f32) {
        let threshold = self.press_threshold;
        self.controller_mut(hand).trigger.set(value, threshold);
    }

    /// Write the analog grip value for a hand (clamped to 0..=1).
    pub fn set_grip(&mut self, hand: Hand, value: f32) {
        let threshold = self.press_threshold;
        self.controller_mut(hand).grip.set(value, threshold);
    }

    /// Process a keyboard event (desktop emulation). Space holds the right grip.
    pub fn process_keyboard(&mut self, key: KeyCode, state: ElementState) {
        match state {
            ElementState::Pressed => {
                self.keys_held.insert(key);
            }
            ElementState::Released => {
                self.keys_held.remove(&key);
            }
        }
        if key == KeyCode::Space {
            let value = if self.keys_held.contains(&KeyCode::Space) { 1.0 } else { 0.0 };
            self.set_grip(Hand::Right, value);
        }
    }

    /// Process a mouse button event (desktop emulation). Left button drives the
    /// right trigger, right button the left trigger.
    pub fn process_mouse_button(&mut self, button: MouseButton, state: ElementState) {
        match state {
            ElementState::Pressed => {
                self.mouse_held.insert(button);
            }
            ElementState::Released => {
                self.mouse_held.remove(&button);
            }
        }
        let hand = match button {
            MouseButton::Left => Hand::Right,
            MouseButton::Right => Hand::Left,
            _ => return,
        };
        let value = if self.mouse_held.contains(&button) { 1.0 } else { 0.0 };
        self.set_trigger(hand, value);
    }

    // Query methods

    /// Analog trigger value (0..=1).
    pub fn trigger(&self, hand: Hand) -> f32 {
        self.controller(hand).trigger.value
    }

    /// Analog grip value (0..=1).
    pub fn grip(&self, hand: Hand) -> f32 {
        self.controller(hand).grip.value
    }

    /// Check if the trigger went down this frame.
    pub fn is_trigger_pressed(&self, hand: Hand) -> bool {
        self.controller(hand).trigger.pressed
    }

    /// Check if the trigger came up this frame.
    pub fn is_trigger_released(&self, hand: Hand) -> bool {
        self.controller(hand).trigger.released
    }

    // Haptics

    /// Queue a vibration on one controller.
    pub fn vibrate(&mut self, hand: Hand, pulse: HapticPulse) {
        log::debug!("haptic {:?}: {:?}", hand, pulse);
        self.haptics.push(HapticRequest { hand, pulse });
    }

    /// Pending haptic requests, oldest first.
    pub fn pending_haptics(&self) -> &[HapticRequest] {
        &self.haptics
    }

    /// Drain pending haptic requests for playback.
    pub fn take_haptics(&mut self) -> Vec<HapticRequest> {
        std::mem::take(&mut self.haptics)
    }
}

// Re-export for convenience
pub use winit::event::{ElementState, MouseButton};
pub use winit::keyboard::KeyCode;
