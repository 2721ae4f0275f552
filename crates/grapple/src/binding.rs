//! Binds [`InputState`] controllers to the grapple's signals: fire, aim and
//! reel on the gun hand, release on the other hand's trigger.

use crate::backend::GrappleInput;
use input::{Hand, HapticPulse, InputState};

pub struct HandBinding<'a> {
    input: &'a mut InputState,
    gun_hand: Hand,
}

impl<'a> HandBinding<'a> {
    pub fn new(input: &'a mut InputState, gun_hand: Hand) -> Self {
        Self { input, gun_hand }
    }
}

impl GrappleInput for HandBinding<'_> {
    fn fire_edge(&self) -> bool {
        self.input.is_trigger_pressed(self.gun_hand)
    }

    fn release_edge(&self) -> bool {
        self.input.is_trigger_pressed(self.gun_hand.opposite())
    }

    fn fire_analog(&self) -> f32 {
        self.input.trigger(self.gun_hand)
    }

    fn grip_analog(&self) -> f32 {
        self.input.grip(self.gun_hand)
    }

    fn gun_hand(&self) -> Hand {
        self.gun_hand
    }

    fn vibrate(&mut self, hand: Hand, pulse: HapticPulse) {
        self.input.vibrate(hand, pulse);
    }
}
