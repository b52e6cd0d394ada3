//! The three selectors a kernel family is generated from, and how they compose a pipeline.
//!
//! Composition happens in two steps. The [`Decimation`] selector fixes the order of the reorder,
//! split and direction stages; the [`Domain`] selector then asks the [`Direction`] selector where
//! a separator stage goes, if the domain needs one at all.
use crate::stages::StageKind;

/// Forward runs the transform with kernel `exp(-2πi·kn/N)`,
/// Backward runs it with `exp(+2πi·kn/N)` and normalizes by the transform length.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub enum Direction {
    #[default]
    Forward = 0,
    Backward = 1,
}

/// Where a separator stage is inserted into an existing pipeline shape.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Placement {
    Front,
    Back,
}

/// Indexed by `Direction as usize`.
const SEPARATOR_PLACEMENT: [Placement; 2] = [Placement::Back, Placement::Front];

impl Direction {
    /// `+1` for forward, `-1` for backward.
    pub const fn sign(self) -> i32 {
        match self {
            Direction::Forward => 1,
            Direction::Backward => -1,
        }
    }

    pub const fn separator_placement(self) -> Placement {
        SEPARATOR_PLACEMENT[self as usize]
    }

    /// Returns `shape` with `separator` inserted where this direction wants it.
    ///
    /// Going forward the complex stages produce a half-length spectrum that the separator then
    /// unpacks, so it runs last. Going backward it has to repack the spectrum first.
    pub fn insert_separator(self, mut shape: Vec<StageKind>, separator: StageKind) -> Vec<StageKind> {
        match self.separator_placement() {
            Placement::Front => shape.insert(0, separator),
            Placement::Back => shape.push(separator),
        }
        shape
    }
}

/// Whether the input is split before recursing (in time) or the output after (in frequency).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub enum Decimation {
    /// Bit-reversed reorder first, then butterflies from small to large.
    InTime = 0,
    /// Butterflies from large to small first, then the bit-reversed reorder.
    #[default]
    InFreq = 1,
}

impl Decimation {
    pub const fn stage_order(self) -> [StageKind; 3] {
        match self {
            Decimation::InTime => [StageKind::Reorder, StageKind::Split, StageKind::Direction],
            Decimation::InFreq => [StageKind::Split, StageKind::Reorder, StageKind::Direction],
        }
    }
}

/// What the caller's buffer holds.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub enum Domain {
    /// `N` complex values as interleaved `re, im` pairs.
    #[default]
    Complex = 0,
    /// `N` real values, transformed through an `N/2`-point complex pipeline.
    Real = 1,
}

impl Domain {
    pub fn compose(self, direction: Direction, shape: Vec<StageKind>) -> Vec<StageKind> {
        match self {
            Domain::Complex => shape,
            Domain::Real => direction.insert_separator(shape, StageKind::Separate),
        }
    }

    /// Number of complex points the split, reorder and direction stages run on for a
    /// transform of length `n`.
    pub const fn complex_len(self, n: usize) -> usize {
        match self {
            Domain::Complex => n,
            Domain::Real => n >> 1,
        }
    }
}

/// The selector tuple a kernel family is generated from.
///
/// The default is a forward, complex, decimation-in-frequency transform.
#[non_exhaustive]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub struct Options {
    pub domain: Domain,
    pub decimation: Decimation,
    pub direction: Direction,
}

impl Options {
    pub const fn new(domain: Domain, decimation: Decimation, direction: Direction) -> Self {
        Self {
            domain,
            decimation,
            direction,
        }
    }

    pub const fn with_domain(mut self, domain: Domain) -> Self {
        self.domain = domain;
        self
    }

    pub const fn with_decimation(mut self, decimation: Decimation) -> Self {
        self.decimation = decimation;
        self
    }

    pub const fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    /// The same selectors, running the other way.
    pub const fn inverse(self) -> Self {
        let direction = match self.direction {
            Direction::Forward => Direction::Backward,
            Direction::Backward => Direction::Forward,
        };
        self.with_direction(direction)
    }

    /// Decimation order first, then the domain's separator.
    pub fn pipeline_shape(&self) -> Vec<StageKind> {
        let shape = self.decimation.stage_order().to_vec();
        self.domain.compose(self.direction, shape)
    }

    /// Every combination of the three selectors.
    pub fn all() -> impl Iterator<Item = Options> {
        [Domain::Complex, Domain::Real].into_iter().flat_map(|domain| {
            [Decimation::InTime, Decimation::InFreq]
                .into_iter()
                .flat_map(move |decimation| {
                    [Direction::Forward, Direction::Backward]
                        .into_iter()
                        .map(move |direction| Options::new(domain, decimation, direction))
                })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stages::StageKind::{Reorder, Separate, Split};

    #[test]
    fn complex_shapes_follow_decimation() {
        let opts = Options::default().with_decimation(Decimation::InTime);
        assert_eq!(opts.pipeline_shape(), vec![Reorder, Split, StageKind::Direction]);

        let opts = Options::default().with_decimation(Decimation::InFreq);
        assert_eq!(opts.pipeline_shape(), vec![Split, Reorder, StageKind::Direction]);
    }

    #[test]
    fn separator_goes_last_forward_and_first_backward() {
        let opts = Options::default().with_domain(Domain::Real);
        assert_eq!(opts.pipeline_shape(), vec![Split, Reorder, StageKind::Direction, Separate]);

        let opts = opts.with_direction(Direction::Backward);
        assert_eq!(opts.pipeline_shape(), vec![Separate, Split, Reorder, StageKind::Direction]);

        let opts = opts.with_decimation(Decimation::InTime);
        assert_eq!(opts.pipeline_shape(), vec![Separate, Reorder, Split, StageKind::Direction]);
    }

    #[test]
    fn placement_table() {
        assert_eq!(
            Direction::Forward.separator_placement(),
            Placement::Back
        );
        assert_eq!(
            Direction::Backward.separator_placement(),
            Placement::Front
        );
        assert_eq!(Direction::Forward.sign(), 1);
        assert_eq!(Direction::Backward.sign(), -1);
    }

    #[test]
    fn all_combinations_are_distinct() {
        let all: Vec<_> = Options::all().collect();
        assert_eq!(all.len(), 8);
        for (i, a) in all.iter().enumerate() {
            for b in &all[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn inverse_flips_direction_only() {
        let opts = Options::new(Domain::Real, Decimation::InTime, Direction::Forward);
        let inv = opts.inverse();
        assert_eq!(inv.direction, Direction::Backward);
        assert_eq!(inv.domain, Domain::Real);
        assert_eq!(inv.decimation, Decimation::InTime);
        assert_eq!(inv.inverse(), opts);
    }
}
