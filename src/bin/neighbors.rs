//! 点の8近傍を列挙する。`--size` を与えると矩形内のものだけ表示する。

use std::io::Write;

use structopt::StructOpt;

use lattice_point as lattice;

#[derive(Debug, StructOpt)]
struct Opt {
    /// 中心点 (例: [0,0])
    point: lattice::Point2,

    /// 原点を左下隅とする矩形のサイズ
    #[structopt(long)]
    size: Option<lattice::Point2>,
}

fn main() -> eyre::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let opt = Opt::from_args();

    let wtr = std::io::stdout();
    let mut wtr = std::io::BufWriter::new(wtr.lock());

    for (dir, p) in opt.point.neighbors() {
        if let Some(size) = opt.size {
            if !p.in_size(size) {
                tracing::debug!(%dir, point = %p, "skip out of rect");
                continue;
            }
        }
        writeln!(wtr, "{:<9} {}", dir, p)?;
    }

    Ok(())
}
