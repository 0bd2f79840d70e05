use core::marker::PhantomData;

use mandelbulb_core_maths::MathsCore;

use crate::vector::{Polar, Vector};

mod parameters;
mod surface;

pub use parameters::MandelbulbParameters;
pub use surface::Slice;

/// Fate of the orbit of a point under `z ← z^n + c`.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Orbit {
    /// The orbit left the bailout radius after `iterations` steps.
    Escaped { iterations: u32 },
    /// The orbit stayed within the bailout radius for all iterations.
    Bounded,
}

#[derive(Clone, Debug)]
pub struct Mandelbulb<M: MathsCore> {
    parameters: MandelbulbParameters,
    marker: PhantomData<M>,
}

impl<M: MathsCore> Mandelbulb<M> {
    #[must_use]
    pub fn new(parameters: MandelbulbParameters) -> Self {
        Self {
            parameters,
            marker: PhantomData::<M>,
        }
    }

    #[must_use]
    pub fn parameters(&self) -> &MandelbulbParameters {
        &self.parameters
    }

    /// Position of the grid `index` along any axis.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn coordinate(&self, index: u32) -> f32 {
        self.parameters.bounds.remap_from::<M>(
            index as f32,
            0.0,
            self.parameters.resolution.get() as f32,
        )
    }

    /// Iterates the orbit of `c` starting from the origin.
    ///
    /// The radius of the current point is checked before each update, so the
    /// origin itself never escapes.
    #[must_use]
    pub fn escape(&self, c: Vector) -> Orbit {
        let mut zeta = Vector::default();
        let mut iterations = 0;

        loop {
            let polar = Polar::from_cartesian::<M>(zeta);

            zeta = polar.power::<M>(self.parameters.exponent) + c;
            iterations += 1;

            if polar.r > self.parameters.bailout.get() {
                return Orbit::Escaped { iterations };
            }

            if iterations > self.parameters.iterations {
                return Orbit::Bounded;
            }
        }
    }

    /// Surface points of the x-plane at grid index `i`.
    #[must_use]
    #[debug_requires(i < self.parameters.resolution.get(), "slice index is in range")]
    pub fn slice(&self, i: u32) -> Slice<'_, M> {
        Slice::new(self, i)
    }

    /// Surface points of all x-planes, in grid order.
    pub fn surface(&self) -> impl Iterator<Item = Vector> + '_ {
        (0..self.parameters.resolution.get()).flat_map(move |i| self.slice(i))
    }
}

#[cfg(test)]
mod tests {
    use core::num::NonZeroU32;

    use mandelbulb_core_maths::MathsCore;
    use mandelbulb_impls_no_std::cogs::maths::soft::SoftMathsCore;
    use mandelbulb_impls_std::cogs::maths::standard::StdMathsCore;

    use crate::vector::Vector;

    use super::{Mandelbulb, MandelbulbParameters, Orbit};

    fn bulb<M: MathsCore>(resolution: u32) -> Mandelbulb<M> {
        Mandelbulb::new(MandelbulbParameters {
            resolution: NonZeroU32::new(resolution).unwrap(),
            ..MandelbulbParameters::default()
        })
    }

    fn check_escape<M: MathsCore>() {
        let bulb = bulb::<M>(16);

        assert_eq!(bulb.escape(Vector::default()), Orbit::Bounded);
        assert_eq!(bulb.escape(Vector::new(0.0, 0.0, 0.5)), Orbit::Bounded);
        assert_eq!(
            bulb.escape(Vector::new(1.5, 1.5, 1.5)),
            Orbit::Escaped { iterations: 2 }
        );
        assert!(matches!(
            bulb.escape(Vector::new(0.0, 0.0, 0.875)),
            Orbit::Escaped { .. }
        ));
    }

    #[test]
    fn test_escape_std() {
        check_escape::<StdMathsCore>();
    }

    #[test]
    fn test_escape_soft() {
        check_escape::<SoftMathsCore>();
    }

    #[test]
    fn test_coordinates_span_half_open_bounds() {
        let bulb = bulb::<StdMathsCore>(16);

        assert_eq!(bulb.coordinate(0), -1.0);
        assert_eq!(bulb.coordinate(8), 0.0);
        assert_eq!(bulb.coordinate(15), 0.875);
    }

    #[test]
    fn test_zero_iterations_only_checks_origin() {
        let bulb = Mandelbulb::<StdMathsCore>::new(MandelbulbParameters {
            iterations: 0,
            ..MandelbulbParameters::default()
        });

        assert_eq!(bulb.escape(Vector::new(10.0, 10.0, 10.0)), Orbit::Bounded);
    }

    #[test]
    fn test_surface_chains_slices() {
        let bulb = bulb::<StdMathsCore>(8);

        let from_slices: usize = (0..8).map(|i| bulb.slice(i).count()).sum();

        assert!(from_slices > 0);
        assert_eq!(bulb.surface().count(), from_slices);
    }
}
