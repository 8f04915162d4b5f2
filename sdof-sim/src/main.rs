use clap::Parser;
use sdof_sim::{options::SdofSimOptions, sim::util::write_csv, simulate};

fn main() -> anyhow::Result<()> {
    let options = SdofSimOptions::parse();

    let _logger = flexi_logger::Logger::try_with_env_or_str(
        options.verbose.log_level_filter().to_string().to_lowercase(),
    )?
    .start()?;

    let output = simulate(&options)?;

    match &options.output_file {
        Some(path) => write_csv(&output, path)?,
        None => println!(
            "Outputs:\n{}",
            arrow::util::pretty::pretty_format_batches(&[output])?
        ),
    }

    Ok(())
}
