use std::fmt;
use std::path::PathBuf;

/// Directory the stylesheet is written to when none is given
pub const DEFAULT_FILEPATH: &str = "./css";
/// Name of the generated stylesheet when none is given
pub const DEFAULT_FILENAME: &str = "fonts.css";

/// Configuration for one generator run
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory containing the output stylesheet
    pub filepath: PathBuf,
    /// File name of the output stylesheet
    pub filename: String,
    /// What to do with a stylesheet left over from an earlier run
    pub init_policy: InitPolicy,
    /// Whether appends are awaited before the next item is accepted
    pub write_mode: WriteMode,
    /// How the font-family name is derived from a stem
    pub naming: FamilyNaming,
}

/// Handling of a pre-existing output stylesheet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InitPolicy {
    /// Refuse to run and leave the existing file alone
    #[default]
    Strict,
    /// Remove the existing file and start from an empty one
    Overwrite,
}

/// Scheduling of stylesheet appends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WriteMode {
    /// Append and wait; blocks land in input order
    #[default]
    Sync,
    /// Submit the append and move on; blocks may land in any order
    Background,
}

/// Family-name derivation strategies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FamilyNaming {
    /// "Roboto-BoldItalic" -> "Roboto"
    #[default]
    Basic,
    /// "OpenSans-v18-latin-700normal" -> "Open Sans"
    Enhanced,
}

impl fmt::Display for InitPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InitPolicy::Strict => write!(f, "strict"),
            InitPolicy::Overwrite => write!(f, "overwrite"),
        }
    }
}

impl fmt::Display for WriteMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WriteMode::Sync => write!(f, "sync"),
            WriteMode::Background => write!(f, "background"),
        }
    }
}

impl fmt::Display for FamilyNaming {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FamilyNaming::Basic => write!(f, "%Family%-%Variant%"),
            FamilyNaming::Enhanced => write!(f, "%Family Words% (keywords removed)"),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            filepath: PathBuf::from(DEFAULT_FILEPATH),
            filename: DEFAULT_FILENAME.to_string(),
            init_policy: InitPolicy::default(),
            write_mode: WriteMode::default(),
            naming: FamilyNaming::default(),
        }
    }
}

impl Config {
    /// Create a configuration writing `filename` inside `filepath`
    pub fn new(filepath: impl Into<PathBuf>, filename: impl Into<String>) -> Self {
        Self {
            filepath: filepath.into(),
            filename: filename.into(),
            ..Self::default()
        }
    }

    pub fn with_init_policy(mut self, init_policy: InitPolicy) -> Self {
        self.init_policy = init_policy;
        self
    }

    pub fn with_write_mode(mut self, write_mode: WriteMode) -> Self {
        self.write_mode = write_mode;
        self
    }

    pub fn with_naming(mut self, naming: FamilyNaming) -> Self {
        self.naming = naming;
        self
    }

    /// Full path of the generated stylesheet
    pub fn output_path(&self) -> PathBuf {
        self.filepath.join(&self.filename)
    }
}
