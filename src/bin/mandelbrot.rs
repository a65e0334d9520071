extern crate clap;
extern crate env_logger;
#[macro_use]
extern crate log;
extern crate mandelbrot;
extern crate num_cpus;

use clap::{App, AppSettings, Arg, ArgMatches};
use mandelbrot::output::DEFAULT_OUTPUT;
use mandelbrot::{write_ppm, Frame, Preset, RenderError, Renderer};
use std::str::FromStr;
use std::time::Instant;

fn validate_number<T: FromStr>(s: &str, err: &str) -> Result<(), String> {
    match T::from_str(s) {
        Ok(_) => Ok(()),
        Err(_) => Err(err.to_string()),
    }
}

fn validate_range<T: FromStr + Ord>(
    s: &str,
    low: T,
    high: T,
    isnotanumber_err: &str,
    isnotinrange_err: &str,
) -> Result<(), String> {
    match T::from_str(s) {
        Ok(i) => {
            if i >= low && i <= high {
                Ok(())
            } else {
                Err(isnotinrange_err.to_string())
            }
        }
        Err(_) => Err(isnotanumber_err.to_string()),
    }
}

const REAL_MIN: &str = "real_min";
const REAL_MAX: &str = "real_max";
const IMAG_MIN: &str = "imag_min";
const IMAG_MAX: &str = "imag_max";
const WIDTH: &str = "width";
const PRESET: &str = "preset";
const PRESET_WIDTH: &str = "preset-width";
const OUTPUT: &str = "output";
const THREADS: &str = "threads";

const BOUNDS: [&str; 4] = [REAL_MIN, REAL_MAX, IMAG_MIN, IMAG_MAX];

fn examples() -> String {
    let mut text = String::from("EXAMPLES (image width 11500):\n");
    for preset in Preset::all() {
        text.push_str(&format!(
            "    {:<22}mandelbrot {} 11500\n",
            format!("{}:", preset.title),
            preset.command_line()
        ));
    }
    text
}

fn bound<'a, 'b>(name: &'static str, index: u64, help: &'b str) -> Arg<'a, 'b> {
    Arg::with_name(name)
        .index(index)
        .required_unless(PRESET)
        .conflicts_with(PRESET)
        .validator(move |s| validate_number::<f64>(&s, &format!("Could not parse {}", name)))
        .help(help)
}

fn args<'a>() -> ArgMatches<'a> {
    let max_threads = num_cpus::get();
    let examples = examples();

    App::new("mandelbrot")
        .version("0.1.0")
        .about("Renders the Mandelbrot set to a PPM image")
        .setting(AppSettings::AllowNegativeNumbers)
        .after_help(examples.as_str())
        .arg(bound(REAL_MIN, 1, "Left edge on the real axis"))
        .arg(bound(REAL_MAX, 2, "Right edge on the real axis"))
        .arg(bound(IMAG_MIN, 3, "Top edge on the imaginary axis"))
        .arg(bound(IMAG_MAX, 4, "Bottom edge on the imaginary axis"))
        .arg(
            Arg::with_name(WIDTH)
                .index(5)
                .required_unless(PRESET)
                .conflicts_with(PRESET)
                .validator(|s| {
                    validate_range(
                        &s,
                        1,
                        usize::max_value(),
                        "Could not parse image width",
                        "Image width must be at least 1",
                    )
                })
                .help("Image width in pixels; the height follows the frame"),
        )
        .arg(
            Arg::with_name(PRESET)
                .long(PRESET)
                .short("p")
                .takes_value(true)
                .possible_values(&Preset::names())
                .help("Render a named view instead of explicit bounds"),
        )
        .arg(
            Arg::with_name(PRESET_WIDTH)
                .long("width")
                .short("w")
                .takes_value(true)
                .requires(PRESET)
                .validator(|s| {
                    validate_range(
                        &s,
                        1,
                        usize::max_value(),
                        "Could not parse image width",
                        "Image width must be at least 1",
                    )
                })
                .help("Image width in pixels when using a preset [default: 800]"),
        )
        .arg(
            Arg::with_name(OUTPUT)
                .long(OUTPUT)
                .short("o")
                .takes_value(true)
                .default_value(DEFAULT_OUTPUT)
                .help("Output file"),
        )
        .arg(
            Arg::with_name(THREADS)
                .long(THREADS)
                .short("t")
                .takes_value(true)
                .validator(move |s| {
                    validate_range(
                        &s,
                        1,
                        max_threads,
                        "Could not parse thread count",
                        &format!("Thread count must be between 1 and {}", max_threads),
                    )
                })
                .help("Number of threads to use in the renderer [default: one per CPU]"),
        )
        .get_matches()
}

/// Works out the frame and width from either a preset or the five
/// positional arguments.  Everything has already been validated by clap,
/// so only the frame's shape can still be wrong.
fn frame_and_width(matches: &ArgMatches) -> Result<(Frame, usize), RenderError> {
    if let Some(name) = matches.value_of(PRESET) {
        let width = matches
            .value_of(PRESET_WIDTH)
            .and_then(|w| usize::from_str(w).ok())
            .unwrap_or(800);
        // possible_values keeps unknown names out
        let preset = Preset::by_name(name).unwrap_or(Preset::all()[0]);
        return Ok((preset.frame()?, width));
    }

    let bounds: Vec<f64> = BOUNDS
        .iter()
        .map(|b| {
            matches
                .value_of(b)
                .and_then(|v| f64::from_str(v).ok())
                .unwrap_or(0.0)
        })
        .collect();
    let width = matches
        .value_of(WIDTH)
        .and_then(|w| usize::from_str(w).ok())
        .unwrap_or(0);
    Ok((Frame::new(bounds[0], bounds[1], bounds[2], bounds[3])?, width))
}

fn main() {
    env_logger::init();
    let matches = args();

    let threads = matches
        .value_of(THREADS)
        .and_then(|t| usize::from_str(t).ok())
        .unwrap_or_else(num_cpus::get);
    let outfile = matches.value_of(OUTPUT).unwrap_or(DEFAULT_OUTPUT);

    let renderer = match frame_and_width(&matches).and_then(|(f, w)| Renderer::for_width(f, w)) {
        Ok(renderer) => renderer,
        Err(e) => {
            eprintln!("Invalid input: {}", e);
            std::process::exit(1);
        }
    };

    let size = renderer.plane().size;
    info!(
        "rendering {}x{} over {:?} on {} threads",
        size.width,
        size.height,
        renderer.plane().frame,
        threads
    );
    let started = Instant::now();
    let buffer = match renderer.render(threads) {
        Ok(buffer) => buffer,
        Err(e) => {
            eprintln!("Render failure: {}", e);
            std::process::exit(1);
        }
    };
    info!("rendered in {:?}", started.elapsed());

    // A failed write is reported, but the render itself succeeded.
    if let Err(e) = write_ppm(outfile, &buffer) {
        error!("could not write {}: {}", outfile, e);
        eprintln!("Write failure: {}", e);
    }
}
