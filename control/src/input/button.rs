//! Manage button's state.

/// Use this to hold a button's state over time.
///
/// Fed with debounced samples once per loop pass, it reports the press
/// edge exactly once and stays silent while the button remains held.
#[derive(Debug, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Button {
    pub pressed: bool,
    pub clicked: bool,
}

impl Button {
    pub fn update(&mut self, down: bool) {
        let was_pressed = self.pressed;
        self.pressed = down;
        self.clicked = !was_pressed && self.pressed;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn when_was_up_and_now_is_down_it_is_marked_as_clicked() {
        let mut button = Button::default();
        assert!(!button.clicked);
        button.update(true);
        assert!(button.clicked);
        button.update(true);
        assert!(!button.clicked);
        button.update(false);
        assert!(!button.clicked);
    }

    #[test]
    fn when_held_it_does_not_report_further_clicks_until_released() {
        let mut button = Button::default();
        button.update(true);
        assert!(button.clicked);
        for _ in 0..100 {
            button.update(true);
            assert!(!button.clicked);
        }
        button.update(false);
        button.update(true);
        assert!(button.clicked);
    }
}
