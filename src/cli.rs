use clap::Parser;
use std::path::PathBuf;

// Build version with target info
const VERSION_INFO: &str = const_format::concatcp!(
    env!("CARGO_PKG_VERSION"), "\n",
    "UI:     eframe/egui 0.33\n",
    "Target: ", std::env::consts::ARCH, "-", std::env::consts::OS
);

/// Mind-map editor
#[derive(Parser, Debug)]
#[command(author, version = VERSION_INFO, about, long_about = None)]
pub struct Args {
    /// Start with N nodes already on the canvas
    #[arg(short = 'n', long = "nodes", value_name = "N", default_value_t = 0)]
    pub nodes: usize,

    /// Enable debug logging to file (default: mindmap.log)
    #[arg(short = 'l', long = "log", value_name = "LOG_FILE")]
    pub log_file: Option<Option<PathBuf>>,

    /// Increase logging verbosity (default: warn, -v: info, -vv: debug, -vvv+: trace)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbosity: u8,

    /// Custom configuration directory (overrides default platform paths)
    #[arg(short = 'c', long = "config-dir", value_name = "DIR")]
    pub config_dir: Option<PathBuf>,
}

impl Args {
    /// Log level for the given `-v` count
    pub fn log_level(&self) -> log::LevelFilter {
        match self.verbosity {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            2 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["mindmap"]).unwrap();
        assert_eq!(args.nodes, 0);
        assert!(args.log_file.is_none());
        assert_eq!(args.log_level(), log::LevelFilter::Warn);
    }

    #[test]
    fn test_verbosity_and_nodes() {
        let args = Args::try_parse_from(["mindmap", "-vv", "--nodes", "5"]).unwrap();
        assert_eq!(args.nodes, 5);
        assert_eq!(args.log_level(), log::LevelFilter::Debug);

        let args = Args::try_parse_from(["mindmap", "-vvvv"]).unwrap();
        assert_eq!(args.log_level(), log::LevelFilter::Trace);
    }

    #[test]
    fn test_log_flag_optional_path() {
        let args = Args::try_parse_from(["mindmap", "--log"]).unwrap();
        assert_eq!(args.log_file, Some(None));

        let args = Args::try_parse_from(["mindmap", "--log", "/tmp/m.log"]).unwrap();
        assert_eq!(args.log_file, Some(Some(PathBuf::from("/tmp/m.log"))));
    }

    #[test]
    fn test_config_dir() {
        let args = Args::try_parse_from(["mindmap", "-c", "/etc/mm"]).unwrap();
        assert_eq!(args.config_dir, Some(PathBuf::from("/etc/mm")));
    }
}
