//! 方位を回転し、結果の単位変位と逆方位を表示する。

use structopt::clap::AppSettings;
use structopt::StructOpt;

use lattice_point as lattice;

#[derive(Debug, StructOpt)]
#[structopt(setting = AppSettings::AllowNegativeNumbers)]
struct Opt {
    /// 表示名 (North, NorthEast, ...)
    direction: lattice::Direction,

    /// 時計回りの回転段数
    #[structopt(default_value = "0")]
    delta: i32,
}

fn main() -> eyre::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let opt = Opt::from_args();

    let dir = opt.direction.rotate(opt.delta);
    tracing::debug!(from = %opt.direction, delta = opt.delta, to = %dir, "rotate");

    println!("{} {}", dir, lattice::Point2::from(dir));
    println!("opposite: {}", dir.opposite());

    Ok(())
}
