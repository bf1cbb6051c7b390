use clap::ArgMatches;
use zune_core::options::DecoderOptions;

pub mod global_options;

pub fn get_decoder_options(options: &ArgMatches) -> DecoderOptions {
    let max_width = *options.get_one::<usize>("max-width").unwrap();
    let max_height = *options.get_one::<usize>("max-height").unwrap();

    DecoderOptions::default()
        .set_max_width(max_width)
        .set_max_height(max_height)
}
