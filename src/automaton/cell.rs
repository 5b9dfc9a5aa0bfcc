/// A single square of the field.
///
/// `position` is the pixel coordinate of the top left corner and never
/// changes. `next_is_alive` holds the state computed for the upcoming
/// generation until [`Automaton::commit`](super::Automaton::commit) copies it
/// into `is_alive`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cell {
    position: (u32, u32),
    pub(super) is_alive: bool,
    pub(super) next_is_alive: bool,
}

impl Cell {
    pub fn new(position: (u32, u32), is_alive: bool) -> Self {
        Self {
            position,
            is_alive,
            next_is_alive: is_alive,
        }
    }

    pub fn position(&self) -> (u32, u32) {
        self.position
    }

    pub fn is_alive(&self) -> bool {
        self.is_alive
    }

    pub fn next_is_alive(&self) -> bool {
        self.next_is_alive
    }

    pub(super) fn commit(&mut self) {
        self.is_alive = self.next_is_alive;
    }
}
