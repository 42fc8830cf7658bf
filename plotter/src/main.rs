#[macro_use]
extern crate anyhow;
#[macro_use]
extern crate log;

mod form;

use std::path::PathBuf;

use anyhow::Result;
use structopt::StructOpt;
use widgetry::{Settings, SharedAppState};

use model::{Dataset, Paths, PlotError, RunID};

#[derive(StructOpt)]
struct Args {
    /// The path to the trajectory CSV file
    #[structopt(long, parse(from_os_str), default_value = "TGSIM_Stationary.csv")]
    trajectories: PathBuf,
    /// The directory with one centerline geometry CSV per run
    #[structopt(long, parse(from_os_str), default_value = "Centerline")]
    centerlines: PathBuf,
    /// Where to write the plot. Overwritten every time.
    #[structopt(long, parse(from_os_str), default_value = "Stationary_Simplified_plot.html")]
    output: PathBuf,
    /// Plot this run without opening a window. Requires --vehicles.
    #[structopt(long)]
    run: Option<i64>,
    /// Comma-separated vehicle IDs to plot without opening a window. Requires --run.
    #[structopt(long)]
    vehicles: Option<String>,
    /// Just write the plot, don't open it in a browser
    #[structopt(long)]
    no_browser: bool,
}

impl Args {
    fn load(self) -> Result<(App, Option<(RunID, String)>)> {
        let request = match (self.run, self.vehicles) {
            (Some(run), Some(vehicles)) => Some((RunID(run), vehicles)),
            (None, None) => None,
            _ => bail!("--run and --vehicles must be specified together"),
        };

        let paths = Paths {
            trajectories: self.trajectories,
            centerlines: self.centerlines,
            output: self.output,
        };
        let dataset = Dataset::load(&paths.trajectories)?;
        if dataset.is_empty() {
            bail!("{} has no trajectory records", paths.trajectories.display());
        }

        let app = App {
            dataset,
            paths,
            open_browser: !self.no_browser,
        };
        Ok((app, request))
    }
}

fn main() {
    abstutil::logger::setup();

    let args = Args::from_iter(abstutil::cli_args());
    let (app, request) = match args.load() {
        Ok(pair) => pair,
        Err(err) => {
            error!("{err:#}");
            std::process::exit(1);
        }
    };

    if let Some((run, vehicles)) = request {
        match app.plot(run, &vehicles) {
            Ok(path) => println!("{}", path.display()),
            Err(err) => {
                eprintln!("{err}");
                std::process::exit(1);
            }
        }
        return;
    }

    widgetry::run(Settings::new("Simplified Vehicle Plotter"), move |ctx| {
        let states = vec![form::PlotForm::new_state(ctx, &app)];
        (app, states)
    });
}

/// Everything a plot request needs, built once at startup
pub struct App {
    dataset: Dataset,
    paths: Paths,
    open_browser: bool,
}

impl SharedAppState for App {}

pub type Transition = widgetry::Transition<App>;

impl App {
    /// Writes the plot, then shows it. Failing to launch a browser isn't an error; the file is
    /// still there.
    pub fn plot(&self, run: RunID, vehicles: &str) -> Result<PathBuf, PlotError> {
        let path = model::plot_vehicles(&self.dataset, &self.paths, run, vehicles)?;
        if self.open_browser {
            let target = fs_err::canonicalize(&path).unwrap_or_else(|_| path.clone());
            if let Err(err) = webbrowser::open(&target.to_string_lossy()) {
                warn!("Couldn't open {} in a browser: {err}", target.display());
            }
        }
        Ok(path)
    }
}
