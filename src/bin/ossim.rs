use std::fmt::Display;
use std::thread;
use std::time::Duration;

use clap::ArgMatches;
use log::info;
use ossim::config::Config;
use ossim::disk::summary::Summary as DiskSummary;
use ossim::disk::DiskAlgorithm;
use ossim::error::Result;
use ossim::format::aging_table;
use ossim::paging::compute_aging_history;
use ossim::paging::summary::Summary as PageSummary;
use ossim::paging::ReplacementPolicy;
use ossim::playback::Playback;
use ossim::validate;
use ossim::value_err;

fn main() -> Result<()> {
    let args = clap::command!()
        .name("ossim")
        .about("Disk scheduling and page replacement simulator")
        .arg(
            clap::Arg::new("config")
                .short('c')
                .long("config")
                .help("Configuration file path")
                .default_value(""),
        )
        .subcommand_required(true)
        .subcommand(
            clap::Command::new("disk")
                .about("Schedule a request queue with C-SCAN or C-LOOK")
                .arg(
                    clap::Arg::new("requests")
                        .short('r')
                        .long("requests")
                        .required(true)
                        .help("Request queue, e.g. \"98 183 37\""),
                )
                .arg(clap::Arg::new("head").long("head").required(true).help("Current head position"))
                .arg(clap::Arg::new("disk-size").short('s').long("disk-size").help("Total cylinders"))
                .arg(clap::Arg::new("algorithm").short('a').long("algorithm").help("C-SCAN or C-LOOK"))
                .arg(compare_arg())
                .arg(play_arg()),
        )
        .subcommand(
            clap::Command::new("page")
                .about("Simulate page replacement with Optimal or Second Chance")
                .arg(
                    clap::Arg::new("references")
                        .short('r')
                        .long("references")
                        .required(true)
                        .help("Reference string, e.g. \"7 0 1 2 0\""),
                )
                .arg(clap::Arg::new("frames").short('f').long("frames").help("Number of frames"))
                .arg(
                    clap::Arg::new("policy")
                        .short('p')
                        .long("policy")
                        .help("Optimal or \"Second Chance\""),
                )
                .arg(
                    clap::Arg::new("aging")
                        .long("aging")
                        .help("Print the 8-bit aging history, Second Chance only")
                        .action(clap::ArgAction::SetTrue),
                )
                .arg(compare_arg())
                .arg(play_arg()),
        )
        .get_matches();

    let cfg = Config::new(arg(&args, "config"))?;
    let loglevel = cfg.log_level.parse::<simplelog::LevelFilter>()?;
    let mut logconfig = simplelog::ConfigBuilder::new();
    simplelog::SimpleLogger::init(loglevel, logconfig.build())?;

    match args.subcommand() {
        Some(("disk", sub)) => run_disk(&cfg, sub),
        Some(("page", sub)) => run_page(&cfg, sub),
        _ => Err(value_err!("Unknown command.")),
    }
}

fn compare_arg() -> clap::Arg {
    clap::Arg::new("compare")
        .long("compare")
        .help("Run every algorithm and print a summary")
        .action(clap::ArgAction::SetTrue)
}

fn play_arg() -> clap::Arg {
    clap::Arg::new("play")
        .long("play")
        .help("Reveal the trace one step at a time")
        .action(clap::ArgAction::SetTrue)
}

/// The raw text of an argument, empty when absent so the validator rejects it.
fn arg<'a>(args: &'a ArgMatches, name: &str) -> &'a str {
    args.get_one::<String>(name).map(String::as_str).unwrap_or_default()
}

fn run_disk(cfg: &Config, args: &ArgMatches) -> Result<()> {
    let disk_size = match args.get_one::<String>("disk-size") {
        Some(s) => s.clone(),
        None => cfg.disk_size.to_string(),
    };
    let req = validate::parse_disk_request(&disk_size, arg(args, "head"), arg(args, "requests"))?;

    let algorithms = if args.get_flag("compare") {
        DiskAlgorithm::ALL.to_vec()
    } else {
        let algorithm = match args.get_one::<String>("algorithm") {
            Some(s) => s.parse::<DiskAlgorithm>()?,
            None => cfg.disk_algorithm,
        };
        vec![algorithm]
    };

    let mut summary = DiskSummary::new();
    for algorithm in algorithms {
        let result = algorithm.schedule(&req.requests, req.head, req.disk_size);
        info!("{} completed, {} head movements", algorithm, result.hops());
        if args.get_flag("play") {
            play(&result.order, cfg.step_delay_ms);
        }
        println!("{}\n{}\n", algorithm, result);
        summary.record(algorithm, &result, req.requests.len());
    }

    if args.get_flag("compare") {
        println!("{}", summary);
        if let Some(best) = summary.best() {
            println!("\nLeast head movement: {} ({})", best.algorithm, best.seek_distance);
        }
    }
    Ok(())
}

fn run_page(cfg: &Config, args: &ArgMatches) -> Result<()> {
    let references = validate::parse_references(arg(args, "references"))?;
    let frame_count = match args.get_one::<String>("frames") {
        Some(s) => validate::parse_frame_count(s)?,
        None => validate::parse_frame_count(&cfg.frame_count.to_string())?,
    };
    let policies = if args.get_flag("compare") {
        ReplacementPolicy::ALL.to_vec()
    } else {
        let policy = match args.get_one::<String>("policy") {
            Some(s) => s.parse::<ReplacementPolicy>()?,
            None => cfg.page_policy,
        };
        vec![policy]
    };
    // a comparison only ages the traces that carry reference bits.
    let aging = args.get_flag("aging");
    if aging && !policies.iter().any(|p| p.has_ref_bits()) {
        return Err(value_err!("Aging history requires the {} policy.", ReplacementPolicy::SecondChance));
    }

    let mut summary = PageSummary::new();
    for policy in policies {
        let aging = aging && policy.has_ref_bits();
        let mut trace = policy.simulate(&references, frame_count);
        if aging {
            trace = compute_aging_history(trace);
        }
        info!("{} completed, {} page faults", policy, trace.page_faults());

        if args.get_flag("play") {
            play(trace.steps(), cfg.step_delay_ms);
        }
        println!("{}\n{}\n", policy, trace);
        if aging {
            println!("Aging Bit History (8-bit)\n{}\n", aging_table(&trace));
        }
        summary.record(policy, &trace);
    }

    if args.get_flag("compare") {
        println!("{}", summary);
        if let Some(best) = summary.best() {
            println!("\nFewest page faults: {} ({})", best.policy, best.page_faults);
        }
    }
    Ok(())
}

fn play<T: Display>(items: &[T], delay_ms: u64) {
    let mut playback = Playback::new(items);
    while let Some(item) = playback.next() {
        println!("[{}/{}] {}", playback.position(), playback.len(), item);
        if !playback.is_finished() {
            thread::sleep(Duration::from_millis(delay_ms));
        }
    }
    println!();
}
