use crate::atoms::{self, Atom};

/// Default distance, in Bohr, between the molecule's bounding box and the
/// edge of an auto-derived grid.
pub const DEFAULT_MARGIN: f64 = 10.;
/// Default spacing, in Bohr, between sample points of an auto-derived grid.
pub const DEFAULT_RESOLUTION: f64 = 0.5;

/// The sample positions along a single cartesian axis.
///
/// > origin: f64 - position of the first sample
/// > count: usize - number of samples, always at least 1
/// > spacing: f64 - distance between neighbouring samples, always positive
/// > samples: Vec<f64> - the materialized positions, len == count
pub struct Axis {
    pub origin: f64,
    pub count: usize,
    pub spacing: f64,
    pub samples: Vec<f64>,
}

impl Axis {
    /// Steps from min - margin up to, but excluding, max + margin. The count
    /// is however many steps fit, not a rounded target. A degenerate range
    /// still produces the origin as a single sample.
    pub fn spanning(min: f64, max: f64, margin: f64, spacing: f64) -> Self {
        let origin = min - margin;
        let limit = max + margin;
        let mut samples = Vec::new();
        let mut position = origin;
        while position < limit {
            samples.push(position);
            position += spacing;
        }
        if samples.is_empty() {
            samples.push(origin);
        }
        Self {
            origin,
            count: samples.len(),
            spacing,
            samples,
        }
    }

    /// Steps a fixed number of samples from a known origin, used when the
    /// grid comes from a supplied cube header.
    pub fn counted(origin: f64, count: usize, spacing: f64) -> Self {
        let count = count.max(1);
        let mut samples = Vec::with_capacity(count);
        let mut position = origin;
        for _ in 0..count {
            samples.push(position);
            position += spacing;
        }
        Self {
            origin,
            count,
            spacing,
            samples,
        }
    }
}

/// Where the grid comes from: derived from the molecule's bounding box or
/// taken verbatim from the header of an existing cube file.
pub enum GridSpec {
    /// Bounding box of the atoms plus margin, stepped at resolution.
    Auto { margin: f64, resolution: f64 },
    /// Origin, counts and diagonal spacings of a supplied header. Trusted
    /// as-is, never checked against the atoms.
    Supplied {
        origin: [f64; 3],
        counts: [usize; 3],
        spacings: [f64; 3],
    },
}

/// The full sampling box, the cartesian product of the three axes visited
/// with x outermost and z innermost. The ordering is part of the cube format,
/// not a free choice.
pub struct Grid {
    pub x: Axis,
    pub y: Axis,
    pub z: Axis,
}

impl Grid {
    /// Builds the three axes from a [`GridSpec`].
    pub fn new(spec: GridSpec, atoms: &[Atom]) -> Self {
        match spec {
            GridSpec::Auto { margin, resolution } => {
                let (min, max) = atoms::extents(atoms);
                Self {
                    x: Axis::spanning(min[0], max[0], margin, resolution),
                    y: Axis::spanning(min[1], max[1], margin, resolution),
                    z: Axis::spanning(min[2], max[2], margin, resolution),
                }
            }
            GridSpec::Supplied {
                origin,
                counts,
                spacings,
            } => Self {
                x: Axis::counted(origin[0], counts[0], spacings[0]),
                y: Axis::counted(origin[1], counts[1], spacings[1]),
                z: Axis::counted(origin[2], counts[2], spacings[2]),
            },
        }
    }

    /// Total number of grid points.
    pub fn len(&self) -> usize {
        self.x.count * self.y.count * self.z.count
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Materializes every grid point in enumeration order.
    pub fn points(&self) -> Vec<[f64; 3]> {
        let mut points = Vec::with_capacity(self.len());
        for x in &self.x.samples {
            for y in &self.y.samples {
                for z in &self.z.samples {
                    points.push([*x, *y, *z]);
                }
            }
        }
        points
    }
}
