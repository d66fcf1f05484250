use std::rc::Rc;

use yew::prelude::*;

use crate::behavior::{Period, Rotation};

use super::use_interval;

pub enum RotationAction {
    Advance,
    Retreat,
    GoTo(usize),
}

impl Reducible for Rotation {
    type Action = RotationAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = match action {
            RotationAction::Advance => self.advance(),
            RotationAction::Retreat => self.retreat(),
            RotationAction::GoTo(i) => self.go_to(i),
        };
        Rc::new(next)
    }
}

/// Carousel index over `len` items, auto-advanced every `period`.
#[hook]
pub fn use_rotation(len: usize, period: Period) -> UseReducerHandle<Rotation> {
    let rotation = use_reducer_eq(move || Rotation::new(len));
    let dispatcher = rotation.dispatcher();
    use_interval(move || dispatcher.dispatch(RotationAction::Advance), period);
    rotation
}
