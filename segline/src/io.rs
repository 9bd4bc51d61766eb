use anyhow::Context as _;
use clap::Args;
use serde::{Serialize, de::DeserializeOwned};
use std::{
    fmt,
    fs::File,
    io::{BufReader, BufWriter, Read, Write, stdin, stdout},
    path::PathBuf,
    str::FromStr,
};

/// Where a subcommand reads its JSON document from and writes its JSON result to
#[derive(Args, Debug)]
pub struct IOArgs {
    /// The input JSON file ("-" implies stdin)
    #[arg(value_parser = clap::value_parser!(PathOrStd))]
    input: PathOrStd,

    /// The output file ("-" implies stdout)
    #[arg(short, long, default_value = "-", value_parser = clap::value_parser!(PathOrStd))]
    output: PathOrStd,
}

impl IOArgs {
    /// Parses the input as a single JSON document of type `T`
    ///
    /// Validation performed by `T`'s deserializer (such as the canonical-form
    /// check of an intensity line) surfaces here, tagged with the input name.
    pub fn read_json<T: DeserializeOwned>(&self) -> anyhow::Result<T> {
        let reader: Box<dyn Read> = match &self.input {
            PathOrStd::Path(path) => Box::new(BufReader::new(
                File::open(path).with_context(|| format!("cannot open {}", self.input))?,
            )),
            PathOrStd::Std => Box::new(stdin().lock()),
        };
        serde_json::from_reader(reader).with_context(|| format!("invalid input in {}", self.input))
    }

    /// Writes `value` as JSON followed by a newline, pretty-printed unless `compact`
    pub fn write_json<T: Serialize>(&self, value: &T, compact: bool) -> anyhow::Result<()> {
        let mut writer: Box<dyn Write> = match &self.output {
            PathOrStd::Path(path) => Box::new(BufWriter::new(
                File::create(path).with_context(|| format!("cannot create {}", self.output))?,
            )),
            PathOrStd::Std => Box::new(stdout().lock()),
        };
        write_json(&mut writer, value, compact)
    }
}

pub(crate) fn write_json<T: Serialize>(
    mut writer: impl Write,
    value: &T,
    compact: bool,
) -> anyhow::Result<()> {
    if compact {
        serde_json::to_writer(&mut writer, value)?;
    } else {
        serde_json::to_writer_pretty(&mut writer, value)?;
    }
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}

#[derive(Clone, Debug, PartialEq)]
enum PathOrStd {
    Path(PathBuf),
    Std,
}

impl FromStr for PathOrStd {
    type Err = <PathBuf as FromStr>::Err;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "-" {
            Ok(Self::Std)
        } else {
            Ok(Self::Path(s.parse()?))
        }
    }
}

impl fmt::Display for PathOrStd {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Path(path) => write!(f, "{}", path.display()),
            Self::Std => f.write_str("<stdio>"),
        }
    }
}
