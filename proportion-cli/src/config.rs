use std::{fs::File, io::BufReader, path::Path};

use anyhow::Context as _;
use proportion::{BalancerConfig, DimensionConfig};

pub fn load_balancer_config(path: &Path) -> anyhow::Result<BalancerConfig> {
    let f = File::open(path).with_context(|| format!("open balancer config '{}'", path.display()))?;
    BalancerConfig::from_reader(BufReader::new(f))
        .with_context(|| format!("load balancer config '{}'", path.display()))
}

pub fn load_dimension_config(path: &Path) -> anyhow::Result<DimensionConfig> {
    let f = File::open(path).with_context(|| format!("open scale config '{}'", path.display()))?;
    DimensionConfig::from_reader(BufReader::new(f))
        .with_context(|| format!("load scale config '{}'", path.display()))
}
