use clap::Parser;
use vodloop_api::config::DEFAULT_BASE_URL;

/// Define CLI arguments
#[derive(Parser)]
#[command(
    version,
    about = "Sequential VOD queue player",
    long_about = "Fetches a video catalogue from a remote service, orders it newest-first\n\
                  and plays it as a queue with next/previous and play/pause controls.\n\
                  \n\
                  Transport is driven interactively on stdin:\n\
                  n = next, p = previous, t (or empty line) = play/pause,\n\
                  c = toggle controls, r = refresh the catalogue, q = quit."
)]
pub struct CliArgs {
    /// Base URL of the video catalogue service
    #[arg(
        long,
        env = "VODLOOP_BASE_URL",
        default_value = DEFAULT_BASE_URL,
        help = "Base URL of the catalogue service; /videos is joined onto it"
    )]
    pub base_url: String,

    /// HTTP request timeout in seconds
    #[arg(long, default_value_t = 30, help = "Overall HTTP request timeout in seconds")]
    pub timeout: u64,

    /// Enable verbose logging
    #[arg(short, long, help = "Enable detailed debug logging")]
    pub verbose: bool,
}
