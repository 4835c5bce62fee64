pub const TARGET: &str = "PROFILE";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Tile {
    pub id: usize,
    pub letter: char,
    /// Whether the tile currently sits in its target slot.
    pub correct: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PuzzleEvent {
    Selected(usize),
    Deselected,
    Swapped,
    Solved,
    Ignored,
}

/// The tile-swap gate in front of the profile picture.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PuzzleGate {
    tiles: Vec<Tile>,
    selected: Option<usize>,
    solved: bool,
}

impl PuzzleGate {
    /// Tiles in the order given by `letters`; `id` is the tile's slot in the
    /// target word.
    pub fn from_letters(letters: &str) -> Self {
        let mut unclaimed: Vec<Option<char>> = TARGET.chars().map(Some).collect();
        let tiles = letters
            .chars()
            .enumerate()
            .map(|(position, letter)| {
                let id = unclaimed
                    .iter()
                    .position(|slot| *slot == Some(letter))
                    .unwrap_or(position);
                if let Some(slot) = unclaimed.get_mut(id) {
                    *slot = None;
                }
                Tile {
                    id,
                    letter,
                    correct: false,
                }
            })
            .collect();

        let mut gate = Self {
            tiles,
            selected: None,
            solved: false,
        };
        gate.refresh_correctness();
        gate.solved = gate.word() == TARGET;
        gate
    }

    /// Fisher–Yates shuffle of the target letters. `pick(n)` must return an
    /// index in `0..n`. A shuffle that lands on the answer is redone.
    pub fn shuffled(mut pick: impl FnMut(usize) -> usize) -> Self {
        loop {
            let mut letters: Vec<char> = TARGET.chars().collect();
            for upper in (1..letters.len()).rev() {
                let other = pick(upper + 1).min(upper);
                letters.swap(upper, other);
            }

            let candidate: String = letters.into_iter().collect();
            if candidate != TARGET {
                return Self::from_letters(&candidate);
            }
        }
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn is_solved(&self) -> bool {
        self.solved
    }

    pub fn word(&self) -> String {
        self.tiles.iter().map(|tile| tile.letter).collect()
    }

    /// Handles a click on the tile at `index`.
    pub fn select(&mut self, index: usize) -> PuzzleEvent {
        if self.solved || index >= self.tiles.len() {
            return PuzzleEvent::Ignored;
        }

        match self.selected {
            None => {
                self.selected = Some(index);
                PuzzleEvent::Selected(index)
            }
            Some(current) if current == index => {
                self.selected = None;
                PuzzleEvent::Deselected
            }
            Some(current) => {
                self.tiles.swap(current, index);
                self.selected = None;
                self.refresh_correctness();

                if self.word() == TARGET {
                    self.solved = true;
                    PuzzleEvent::Solved
                } else {
                    PuzzleEvent::Swapped
                }
            }
        }
    }

    fn refresh_correctness(&mut self) {
        let target: Vec<char> = TARGET.chars().collect();
        for (slot, tile) in self.tiles.iter_mut().enumerate() {
            tile.correct = target.get(slot) == Some(&tile.letter);
        }
    }
}
