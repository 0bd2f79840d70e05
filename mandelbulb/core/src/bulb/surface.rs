use mandelbulb_core_maths::MathsCore;

use crate::vector::Vector;

use super::{Mandelbulb, Orbit};

/// Iterator over the surface points of one x-plane of the sampling grid.
///
/// Every column `(i, j)` is walked along z. A point is on the surface when its
/// orbit is bounded and the previous point of the same column was not, i.e.
/// where the column enters the set.
pub struct Slice<'a, M: MathsCore> {
    bulb: &'a Mandelbulb<M>,
    x: f32,
    column: u32,
    depth: u32,
    inside: bool,
}

impl<'a, M: MathsCore> Slice<'a, M> {
    pub(super) fn new(bulb: &'a Mandelbulb<M>, i: u32) -> Self {
        Self {
            bulb,
            x: bulb.coordinate(i),
            column: 0,
            depth: 0,
            inside: false,
        }
    }
}

impl<'a, M: MathsCore> Iterator for Slice<'a, M> {
    type Item = Vector;

    fn next(&mut self) -> Option<Self::Item> {
        let resolution = self.bulb.parameters().resolution.get();

        while self.column < resolution {
            if self.depth >= resolution {
                self.column += 1;
                self.depth = 0;
                self.inside = false;

                continue;
            }

            let point = Vector::new(
                self.x,
                self.bulb.coordinate(self.column),
                self.bulb.coordinate(self.depth),
            );
            self.depth += 1;

            match self.bulb.escape(point) {
                Orbit::Escaped { .. } => self.inside = false,
                Orbit::Bounded if !self.inside => {
                    self.inside = true;

                    return Some(point);
                },
                Orbit::Bounded => (),
            }
        }

        None
    }
}
