use clap::{value_parser, Arg, ArgAction, Command};
use std::fs::File;
use std::net::SocketAddr;
use std::time::Duration;
use velodyne_data::{DriverConfig, DEFAULT_DATA_PORT};
use velodyne_driver::Velodyne;

fn get_config() -> (DriverConfig, u64, Option<String>) {
    let matches = Command::new("VLP-16 scene reader.")
        .about("Receives VLP-16 packets and prints a summary of the scene.")
        .disable_version_flag(true)
        .arg(
            Arg::new("bind")
                .long("bind")
                .help("Local address to receive packets on")
                .value_parser(value_parser!(SocketAddr))
                .default_value("0.0.0.0:2368"),
        )
        .arg(
            Arg::new("any-port")
                .long("any-port")
                .help("Accept datagrams from any source port")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("seconds")
                .long("seconds")
                .help("How long to receive before printing")
                .value_parser(value_parser!(u64))
                .default_value("1"),
        )
        .arg(
            Arg::new("xyz")
                .long("xyz")
                .help("Write the point cloud as JSON to this file"),
        )
        .get_matches();

    let bind_addr = *matches.get_one::<SocketAddr>("bind").unwrap();
    let source_port = if matches.get_flag("any-port") {
        None
    } else {
        Some(DEFAULT_DATA_PORT)
    };
    let config = DriverConfig {
        bind_addr,
        source_port,
        ..Default::default()
    };
    let seconds = *matches.get_one::<u64>("seconds").unwrap();
    let xyz_path = matches.get_one::<String>("xyz").cloned();
    (config, seconds, xyz_path)
}

fn main() {
    env_logger::init();
    let (config, seconds, xyz_path) = get_config();

    let mut velodyne = Velodyne::new(config).unwrap();
    velodyne.begin().unwrap();
    std::thread::sleep(Duration::from_secs(seconds));

    let scene = velodyne.scene();
    let returns = scene.iter().filter(|r| **r > 0.).count();
    let nearest = scene
        .iter()
        .copied()
        .filter(|r| *r > 0.)
        .fold(f64::INFINITY, f64::min);
    println!("{:?}", velodyne.stats());
    println!("{} of {} cells hold a return, nearest {:.3} m", returns, scene.len(), nearest);

    if let Some(path) = xyz_path {
        let file = File::create(&path).unwrap();
        serde_json::to_writer(file, &velodyne.xyz()).unwrap();
        println!("Wrote point cloud to {}", path);
    }

    velodyne.close().unwrap();
}
