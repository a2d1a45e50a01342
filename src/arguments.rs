use crate::grid::{DEFAULT_MARGIN, DEFAULT_RESOLUTION};
use clap::{App, Arg, ArgMatches};

/// Create a container for dealing with clap and being able to test arg parsing
pub enum ClapApp {
    App,
}

impl ClapApp {
    /// Create and return the clap::App
    pub fn get(&self) -> App {
        App::new("mol2 to ESP cube converter")
            .version("0.1.0")
            .arg(Arg::new("mol2 file")
                .required(true)
                .index(1)
                .about("The mol2 structure file to read."))
            .arg(Arg::new("cube file")
                .required(true)
                .index(2)
                .about("The cube file to write."))
            .arg(Arg::new("head file")
                .index(3)
                .about("Cube header describing an existing grid.")
                .long_about(
"The first six lines of a cube file: two comments, the atom count and box
origin, then a count and spacing line per axis. When supplied the grid is
taken from here verbatim and the margin and resolution options are ignored."))
            .arg(Arg::new("margin")
                .short('m')
                .long("margin")
                .takes_value(true)
                .about("Distance in Bohr between the molecule and the box edge.")
                .long_about(
"How far, in Bohr, the auto-derived box extends past the molecule's bounding
box along each axis. Only used when no head file is supplied."))
            .arg(Arg::new("resolution")
                .short('r')
                .long("resolution")
                .takes_value(true)
                .about("Spacing in Bohr between neighbouring grid points.")
                .long_about(
"The sample spacing, in Bohr, of the auto-derived grid, identical on all
three axes. Only used when no head file is supplied."))
            .arg(Arg::new("threads")
                .short('J')
                .long("threads")
                .takes_value(true)
                .default_value("0")
                .about("Number of threads to distribute the calculation over.")
                .long_about(
"The number of threads to be used by the program. A default value of 0 is used
to allow the program to best decide how to use the available hardware."))
            .arg(Arg::new("silent")
                .short('s')
                .long("silent")
                .takes_value(false)
                .about("Suppress the progress bar."))
    }
}

/// Holds the arguments passed to the program from the command-line
pub struct Args {
    pub mol2_file: String,
    pub cube_file: String,
    pub head_file: Option<String>,
    pub margin: f64,
    pub resolution: f64,
    pub threads: usize,
    pub silent: bool,
}

impl Args {
    /// Initialises the structure from the command-line arguments.
    pub fn new(arguments: ArgMatches) -> Self {
        let mol2_file = match arguments.value_of("mol2 file") {
            Some(f) => String::from(f),
            None => String::new(),
        };
        let cube_file = match arguments.value_of("cube file") {
            Some(f) => String::from(f),
            None => String::new(),
        };
        let head_file = arguments.value_of("head file").map(String::from);
        let margin = match arguments.value_of("margin") {
            Some(s) => match s.parse::<f64>() {
                Ok(x) => x,
                Err(e) => panic!("Couldn't parse margin into float:\n{}", e),
            },
            None => DEFAULT_MARGIN,
        };
        let resolution = match arguments.value_of("resolution") {
            Some(s) => match s.parse::<f64>() {
                Ok(x) => x,
                Err(e) => {
                    panic!("Couldn't parse resolution into float:\n{}", e)
                }
            },
            None => DEFAULT_RESOLUTION,
        };
        // safe to unwrap as threads has a default value of 0
        let threads =
            match arguments.value_of("threads").unwrap().parse::<usize>() {
                Ok(x) => x,
                Err(e) => panic!("Couldn't parse threads into integer:\n{}", e),
            };
        // more threads than cores just adds contention
        let threads = threads.min(num_cpus::get());
        let silent = arguments.is_present("silent");
        Self {
            mol2_file,
            cube_file,
            head_file,
            margin,
            resolution,
            threads,
            silent,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clapapp_get() {
        let app = ClapApp::App.get();
        assert_eq!(app.get_name(), "mol2 to ESP cube converter")
    }

    #[test]
    fn argument_files() {
        let app = ClapApp::App.get();
        let matches =
            app.get_matches_from(vec!["m2c", "water.mol2", "water.cube"]);
        let args = Args::new(matches);
        assert_eq!(args.mol2_file, String::from("water.mol2"));
        assert_eq!(args.cube_file, String::from("water.cube"));
        assert_eq!(args.head_file, None);
    }

    #[test]
    #[should_panic]
    fn argument_no_cube_file() {
        let app = ClapApp::App.get();
        let _ = app
            .try_get_matches_from(vec!["m2c", "water.mol2"])
            .unwrap_or_else(|e| panic!("An error occurs: {}", e));
    }

    #[test]
    fn argument_head_file() {
        let app = ClapApp::App.get();
        let matches = app.get_matches_from(vec!["m2c", "water.mol2",
                                                "water.cube", "head"]);
        let args = Args::new(matches);
        assert_eq!(args.head_file, Some(String::from("head")));
    }

    #[test]
    fn argument_margin_default() {
        let app = ClapApp::App.get();
        let matches =
            app.get_matches_from(vec!["m2c", "water.mol2", "water.cube"]);
        let args = Args::new(matches);
        assert_eq!(args.margin, DEFAULT_MARGIN);
        assert_eq!(args.resolution, DEFAULT_RESOLUTION);
    }

    #[test]
    fn argument_margin() {
        let app = ClapApp::App.get();
        let matches = app.get_matches_from(vec!["m2c", "water.mol2",
                                                "water.cube", "-m", "5"]);
        let args = Args::new(matches);
        assert_eq!(args.margin, 5.);
    }

    #[test]
    #[should_panic]
    fn argument_margin_not_float() {
        let app = ClapApp::App.get();
        let matches = app.get_matches_from(vec!["m2c", "water.mol2",
                                                "water.cube", "-m", "wide"]);
        let _ = Args::new(matches);
    }

    #[test]
    fn argument_resolution() {
        let app = ClapApp::App.get();
        let matches = app.get_matches_from(vec!["m2c", "water.mol2",
                                                "water.cube", "--resolution",
                                                "0.25"]);
        let args = Args::new(matches);
        assert_eq!(args.resolution, 0.25);
    }

    #[test]
    fn argument_threads() {
        let app = ClapApp::App.get();
        let matches = app.get_matches_from(vec!["m2c", "water.mol2",
                                                "water.cube", "-J", "1"]);
        let args = Args::new(matches);
        assert_eq!(args.threads, 1);
    }

    #[test]
    fn argument_threads_default() {
        let app = ClapApp::App.get();
        let matches =
            app.get_matches_from(vec!["m2c", "water.mol2", "water.cube"]);
        let args = Args::new(matches);
        assert_eq!(args.threads, 0);
    }

    #[test]
    fn argument_silent() {
        let app = ClapApp::App.get();
        let matches = app.get_matches_from(vec!["m2c", "water.mol2",
                                                "water.cube", "-s"]);
        let args = Args::new(matches);
        assert!(args.silent);
    }
}
