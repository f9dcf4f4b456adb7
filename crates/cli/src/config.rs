// crates/cli/src/config.rs
use crate::args::Args;
use crate::options::{self, OutputFormat};
pub use lexstat_engine::config::{
    AnalysisOptions, AnalysisOptionsBuilder, Config, ConfigBuilder, InputSource,
};
use lexstat_engine::options as engine_options;
use std::io::Read;
use std::path::{Path, PathBuf};

pub const STDIN_NAME: &str = "<stdin>";

/// Settings that only concern rendering; the engine never sees them.
#[derive(Debug, Clone, Default)]
pub struct OutputSettings {
    pub format: OutputFormat,
    pub path: Option<PathBuf>,
}

/// Everything `main` needs: engine configuration plus output settings.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub engine: Config,
    pub output: OutputSettings,
}

impl AppConfig {
    /// Build from parsed arguments, reading stdin if `-` was given.
    ///
    /// This is the entry point for the binary. Stdin bytes are kept raw so
    /// the engine applies the same NUL and UTF-8 checks as for files.
    ///
    /// # Errors
    /// Fails when stdin cannot be read.
    pub fn from_args(args: Args) -> std::io::Result<Self> {
        Self::from_args_with_stdin(args, std::io::stdin().lock())
    }

    /// Same as [`Self::from_args`] with an explicit stdin reader.
    ///
    /// # Errors
    /// Fails when `stdin` cannot be read.
    pub fn from_args_with_stdin(args: Args, mut stdin: impl Read) -> std::io::Result<Self> {
        let mut inputs = Vec::with_capacity(args.paths.len());
        let mut stdin_bytes: Option<Vec<u8>> = None;
        for path in &args.paths {
            if is_stdin(path) {
                if stdin_bytes.is_none() {
                    let mut buf = Vec::new();
                    stdin.read_to_end(&mut buf)?;
                    stdin_bytes = Some(buf);
                }
                inputs.push(InputSource::Bytes {
                    name: STDIN_NAME.to_string(),
                    content: stdin_bytes.clone().unwrap_or_default(),
                });
            } else {
                inputs.push(InputSource::File(path.clone()));
            }
        }

        let output = OutputSettings {
            format: args.output.format,
            path: args.output.output.clone(),
        };
        let mut engine = Config::from(args);
        engine.inputs = inputs;

        Ok(Self { engine, output })
    }
}

fn is_stdin(path: &Path) -> bool {
    path.as_os_str() == "-"
}

/// Maps every path to [`InputSource::File`], `-` included.
///
/// Stdin is resolved by [`AppConfig::from_args`], which replaces each `-`
/// with the bytes read from stdin; use that unless the inputs are reset.
impl From<Args> for Config {
    fn from(args: Args) -> Self {
        let analysis = AnalysisOptionsBuilder::default()
            .top_k(args.output.top)
            .bottom_k(args.output.bottom)
            .ranking(args.output.ranking)
            .key(engine_options::CountKey::from(args.analysis.key))
            .pos(args.analysis.pos)
            .min_len(args.analysis.min_len)
            .require_nonempty(args.behavior.require_nonempty)
            .build()
            .expect("Failed to build analysis options");

        let inputs: Vec<_> = args
            .paths
            .into_iter()
            .map(InputSource::File)
            .collect();

        ConfigBuilder::default()
            .inputs(inputs)
            .tokenizer(engine_options::TokenizerKind::from(args.analysis.tokenizer))
            .analysis(analysis)
            .merge(args.analysis.merge)
            .strict(args.behavior.strict)
            .build()
            .expect("Failed to build config")
    }
}

macro_rules! map_enum {
    ($from:ty, $to:ty, $($variant:ident),+ $(,)?) => {
        impl From<$from> for $to {
            fn from(f: $from) -> Self {
                match f {
                    $( <$from>::$variant => <$to>::$variant, )+
                }
            }
        }
    };
}

map_enum!(
    options::TokenizerKind,
    engine_options::TokenizerKind,
    Regex,
    Unicode,
    Tagged
);
map_enum!(options::CountKey, engine_options::CountKey, Text, Lemma);
