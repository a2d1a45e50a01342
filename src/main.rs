use mol2cube::arguments::{Args, ClapApp};
use mol2cube::esp;
use mol2cube::grid::{Grid, GridSpec};
use mol2cube::io::{cube, mol2};
use mol2cube::progress::Bar;

fn main() {
    let app = ClapApp::App;
    let args = Args::new(app.get().get_matches());

    rayon::ThreadPoolBuilder::new()
        .num_threads(args.threads)
        .build_global()
        .unwrap();

    let atoms = match mol2::read(&args.mol2_file) {
        Ok(a) => a,
        Err(e) => panic!("{}", e),
    };
    let spec = match &args.head_file {
        Some(head_file) => match cube::read_header(head_file) {
            Ok(s) => s,
            Err(e) => panic!("{}", e),
        },
        None => GridSpec::Auto {
            margin: args.margin,
            resolution: args.resolution,
        },
    };
    let grid = Grid::new(spec, &atoms);
    let points = grid.points();

    let prefix = String::from("ESP Calculation: ");
    let bar = if args.silent {
        Bar::new(points.len() as u64, 100, prefix)
    } else {
        Bar::visible(points.len() as u64, 100, prefix)
    };
    let field = esp::field(&atoms, &points, &bar);
    drop(bar);

    match cube::write(&args.cube_file, &atoms, &grid, &field) {
        Ok(_) => {}
        Err(e) => panic!("{}", e),
    }
}
