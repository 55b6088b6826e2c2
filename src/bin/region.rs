//! 点が矩形の北・東・南・西どの三角形に属するかを表示する。

use structopt::StructOpt;

use lattice_point as lattice;

#[derive(Debug, StructOpt)]
struct Opt {
    /// 点 (例: [1,2])
    point: lattice::Point2,

    /// 矩形のサイズ (例: [10,10])
    size: lattice::Point2,
}

fn main() -> eyre::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let opt = Opt::from_args();

    if !opt.point.in_size(opt.size) {
        tracing::warn!("point {} lies outside rect {}", opt.point, opt.size);
    }

    let region = opt.point.region_in_rect(opt.size);
    tracing::debug!(point = %opt.point, size = %opt.size, %region, "classified");

    println!("{}", region);

    Ok(())
}
