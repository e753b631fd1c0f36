use serde::{Deserialize, Serialize};

fn default_delimiter() -> String {
    "\t".to_string()
}

fn default_out_dir() -> String {
    ".".to_string()
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct DeckConfig {
    /// Field separator for the plain word and sentence lists
    #[serde(default = "default_delimiter")]
    pub delimiter: String,
    /// Directory receiving the generated files
    #[serde(default = "default_out_dir")]
    pub out_dir: String,
}

impl Default for DeckConfig {
    fn default() -> Self {
        Self {
            delimiter: default_delimiter(),
            out_dir: default_out_dir(),
        }
    }
}
