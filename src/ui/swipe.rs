use iced::mouse::{self, Cursor};
use iced::touch;
use iced::widget::canvas::{self, Program};
use iced::{Rectangle, Renderer, Theme};

use crate::state::lightbox::LightboxInput;
use crate::Message;

/// Transparent surface laid over the lightbox image.
///
/// Forwards the start and end x of mouse drags and touches; the lightbox
/// decides whether the displacement was a swipe. Presses over the image
/// are captured so they never reach the backdrop.
pub struct SwipeSurface;

impl Program<Message> for SwipeSurface {
    type State = PointerState;

    fn draw(
        &self,
        _state: &Self::State,
        _renderer: &Renderer,
        _theme: &Theme,
        _bounds: Rectangle,
        _cursor: Cursor,
    ) -> Vec<canvas::Geometry> {
        vec![]
    }

    fn update(
        &self,
        state: &mut Self::State,
        event: canvas::Event,
        bounds: Rectangle,
        cursor: Cursor,
    ) -> (canvas::event::Status, Option<Message>) {
        match event {
            canvas::Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => {
                if let Some(pos) = cursor.position_in(bounds) {
                    state.mouse_down = true;
                    return (
                        canvas::event::Status::Captured,
                        Some(Message::Lightbox(LightboxInput::SwipeStart(bounds.x + pos.x))),
                    );
                }
            }

            // Released anywhere, even outside the image
            canvas::Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)) => {
                if state.mouse_down {
                    state.mouse_down = false;
                    if let Some(pos) = cursor.position() {
                        return (
                            canvas::event::Status::Captured,
                            Some(Message::Lightbox(LightboxInput::SwipeEnd(pos.x))),
                        );
                    }
                }
            }

            canvas::Event::Touch(touch::Event::FingerPressed { id, position }) => {
                if state.finger.is_none() && bounds.contains(position) {
                    state.finger = Some(id);
                    return (
                        canvas::event::Status::Captured,
                        Some(Message::Lightbox(LightboxInput::SwipeStart(position.x))),
                    );
                }
            }

            canvas::Event::Touch(touch::Event::FingerLifted { id, position }) => {
                if state.finger == Some(id) {
                    state.finger = None;
                    return (
                        canvas::event::Status::Captured,
                        Some(Message::Lightbox(LightboxInput::SwipeEnd(position.x))),
                    );
                }
            }

            canvas::Event::Touch(touch::Event::FingerLost { id, .. }) => {
                if state.finger == Some(id) {
                    state.finger = None;
                }
            }

            _ => {}
        }

        (canvas::event::Status::Ignored, None)
    }

    fn mouse_interaction(
        &self,
        state: &Self::State,
        bounds: Rectangle,
        cursor: Cursor,
    ) -> mouse::Interaction {
        if state.mouse_down {
            mouse::Interaction::Grabbing
        } else if cursor.is_over(bounds) {
            mouse::Interaction::Grab
        } else {
            mouse::Interaction::default()
        }
    }
}

/// Which pointer started the current drag
#[derive(Debug, Clone, Default)]
pub struct PointerState {
    pub mouse_down: bool,
    pub finger: Option<touch::Finger>,
}
