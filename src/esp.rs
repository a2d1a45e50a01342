use crate::atoms::Atom;
use crate::progress::Bar;
use crate::utils;
use rayon::prelude::*;

/// The potential at a single point, the sum of charge over distance across
/// all atoms in file order. A point sat exactly on an atom has no defined
/// potential and the singular contribution poisons the sum to NaN rather
/// than aborting the run.
pub fn at_point(point: [f64; 3], atoms: &[Atom]) -> f64 {
    atoms
        .iter()
        .map(|atom| {
            let distance = utils::distance(point, atom.position);
            if distance == 0. {
                f64::NAN
            } else {
                atom.charge / distance
            }
        })
        .sum()
}

/// Evaluates the potential at every grid point. Points are independent so the
/// work is spread over the rayon pool, each point owning its own slot in the
/// output. The per-point sum keeps a fixed atom order so the field does not
/// depend on the thread count.
pub fn field(atoms: &[Atom], points: &[[f64; 3]], bar: &Bar) -> Vec<f64> {
    points
        .par_iter()
        .map(|point| {
            bar.tick();
            at_point(*point, atoms)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::atoms::Atom;
    use crate::elements::symbol_table;
    use crate::grid::{Grid, GridSpec};
    use crate::progress::Bar;

    fn water() -> Vec<Atom> {
        let table = symbol_table();
        vec![
            Atom::from_record(&table, "O1", [0., 0., 0.2217], -0.834).unwrap(),
            Atom::from_record(&table, "H2", [0., 1.4309, -0.8867], 0.417)
                .unwrap(),
            Atom::from_record(&table, "H3", [0., -1.4309, -0.8867], 0.417)
                .unwrap(),
        ]
    }

    fn test_grid() -> Grid {
        Grid::new(
            GridSpec::Supplied {
                origin: [-2.1, -2.3, -1.9],
                counts: [4, 4, 4],
                spacings: [1.; 3],
            },
            &[],
        )
    }

    #[test]
    fn esp_at_point_single_charge() {
        let table = symbol_table();
        let atoms =
            vec![Atom::from_record(&table, "H1", [0.; 3], 0.417).unwrap()];
        assert_eq!(at_point([0., 0., 2.], &atoms), 0.417 / 2.);
        assert_eq!(at_point([3., 0., 4.], &atoms), 0.417 / 5.);
    }

    #[test]
    fn esp_at_point_coincident_is_nan() {
        let table = symbol_table();
        let atoms = vec![
            Atom::from_record(&table, "H1", [0.; 3], 0.417).unwrap(),
            Atom::from_record(&table, "H2", [0., 0., 2.], 0.417).unwrap(),
        ];
        assert!(at_point([0.; 3], &atoms).is_nan());
        assert!(!at_point([0., 0., 1.], &atoms).is_nan());
    }

    #[test]
    fn esp_field_matches_points() {
        let atoms = water();
        let points = test_grid().points();
        let bar = Bar::new(points.len() as u64, 100, String::new());
        let values = field(&atoms, &points, &bar);
        assert_eq!(values.len(), points.len());
        for (point, value) in points.iter().zip(&values) {
            assert_eq!(*value, at_point(*point, &atoms));
        }
    }

    #[test]
    fn esp_field_single_atom_at_origin() {
        let table = symbol_table();
        let atoms =
            vec![Atom::from_record(&table, "H1", [0.; 3], 0.417).unwrap()];
        let grid = Grid::new(
            GridSpec::Auto {
                margin: 10.,
                resolution: 0.5,
            },
            &atoms,
        );
        let points = grid.points();
        let bar = Bar::new(points.len() as u64, 100, String::new());
        let values = field(&atoms, &points, &bar);
        // the atom sits exactly on sample 20 of each axis
        let centre = 20 * 40 * 40 + 20 * 40 + 20;
        assert!(values[centre].is_nan());
        assert_eq!(values.iter().filter(|v| v.is_nan()).count(), 1);
        // half a Bohr along z from the singularity
        assert_eq!(values[centre + 1], 0.417 / 0.5);
    }

    #[test]
    fn esp_field_sign_symmetry() {
        let atoms = water();
        let flipped = atoms
            .iter()
            .map(|a| Atom {
                name: a.name.clone(),
                atomic_number: a.atomic_number,
                position: a.position,
                charge: -a.charge,
            })
            .collect::<Vec<Atom>>();
        let points = test_grid().points();
        let bar = Bar::new(points.len() as u64, 100, String::new());
        let plus = field(&atoms, &points, &bar);
        let minus = field(&flipped, &points, &bar);
        for (a, b) in plus.iter().zip(&minus) {
            assert_eq!(*a, -*b);
        }
    }

    #[test]
    fn esp_field_superposition() {
        let atoms = water();
        let points = test_grid().points();
        let bar = Bar::new(points.len() as u64, 100, String::new());
        let full = field(&atoms, &points, &bar);
        let oxygen = field(&atoms[..1], &points, &bar);
        let hydrogens = field(&atoms[1..], &points, &bar);
        for i in 0..points.len() {
            let summed = oxygen[i] + hydrogens[i];
            assert!((full[i] - summed).abs() <= 1e-12 * full[i].abs().max(1.));
        }
    }
}
