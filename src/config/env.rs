//! Environment variable handling and .env file management

use crate::error::Result;
use std::path::Path;

/// Environment variable configuration manager
pub struct EnvManager;

impl EnvManager {
    /// Load .env file from the current directory if it exists
    pub fn load_env_file(debug: bool) -> Result<()> {
        if Path::new(".env").exists() {
            dotenv::from_filename(".env")?;
            if debug {
                eprintln!("Loaded configuration from .env file");
            }
        } else if debug {
            eprintln!("No .env file found, using defaults and CLI arguments");
        }

        Ok(())
    }

    /// Create example .env file content
    pub fn create_example_env_content() -> String {
        r#"# Registry Benchmark Configuration
#
# Values specified here are used as defaults and can be overridden by
# command-line arguments.

# Base URLs of the two regional registry instances
# REGION_A_URL=http://34.63.41.168:8080
# REGION_B_URL=http://35.195.10.38:8080

# Latency probe iterations per region and operation
# ITERATIONS=10

# Consistency probe trial count
# TRIALS=10

# Request timeout in seconds
# TIMEOUT_SECONDS=10

# Enable colored output (true/false)
# ENABLE_COLOR=true
"#
        .to_string()
    }
}
