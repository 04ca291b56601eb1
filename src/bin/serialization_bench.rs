use archive_bench::config::DEFAULT_LOG_FILTER;
use archive_bench::{BenchConfig, BincodeStrategy, CompactStrategy, Comparison, DataGen, Strategy};
use serde::{de::DeserializeOwned, Serialize};
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .try_init();
}

fn run<B, C, T>(
    comparison: &Comparison<B, C>,
    config: &BenchConfig,
    name: String,
    data: &T,
) -> anyhow::Result<()>
where
    B: Strategy,
    C: Strategy,
    T: Serialize + DeserializeOwned + PartialEq,
{
    let report = comparison.run(&config.scenario(name), data)?;
    print!("{report}");
    Ok(())
}

fn main() -> anyhow::Result<()> {
    init_tracing();

    let config = BenchConfig::default();
    let comparison = Comparison::new(BincodeStrategy, CompactStrategy);
    let mut gen: DataGen = config.data_gen();
    let randomize = config.randomize;

    for size in [1usize, 16, 1024, 1024 * 1024] {
        let data: Vec<f64> = gen.vector(size, randomize);
        run(&comparison, &config, format!("Vector(double) size {size}"), &data)?;
    }

    // 64 MiB
    let size = 64 * 1024 * 1024;
    let data: Vec<u8> = gen.vector(size, randomize);
    run(&comparison, &config, format!("Vector(uint8_t) size {size}"), &data)?;
    drop(data);

    for size in [1usize, 64, 1024, 1024 * 1024, 8 * 1024 * 1024] {
        let data = gen.pod_structs(size, randomize);
        run(&comparison, &config, format!("Vector(PoDStruct) size {size}"), &data)?;
    }

    let size = 64 * 1024;
    let data = gen.pod_children(size, randomize);
    run(&comparison, &config, format!("Vector(PoDChild) size {size}"), &data)?;

    // strings are always random; an empty string would only measure the length prefix
    let size = 1024;
    let data: Vec<String> = gen.vector(size, true);
    run(&comparison, &config, format!("Vector(string) size {size}"), &data)?;

    Ok(())
}
