//! `zowe-explorer` — command-line front end to the API register.
//!
//! Builds a profile from flags or `ZOWE_OPT_*` environment variables, asks
//! the register for the matching implementation, and prints the result.

use std::io::Write;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use miette::{IntoDiagnostic, Result};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use zowe_explorer_api::{ApiRegister, Capability, ExplorerConfig, Profile};

#[derive(Parser, Debug)]
#[command(name = "zowe-explorer")]
#[command(author, version, about = "Browse z/OS data sets, USS files and jobs", long_about = None)]
struct Cli {
    /// Client configuration file (TOML)
    #[arg(long, global = true, value_name = "FILE", env = "ZOWE_EXPLORER_CONFIG")]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(flatten)]
    connection: ConnectionArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args, Debug)]
struct ConnectionArgs {
    /// Profile type used to select the implementation
    #[arg(long = "type", global = true, env = "ZOWE_OPT_TYPE", default_value = "zosmf")]
    profile_type: String,

    #[arg(long, global = true, env = "ZOWE_OPT_HOST")]
    host: Option<String>,

    #[arg(long, global = true, env = "ZOWE_OPT_PORT")]
    port: Option<u16>,

    #[arg(long, global = true, env = "ZOWE_OPT_USER")]
    user: Option<String>,

    #[arg(long, global = true, env = "ZOWE_OPT_PASSWORD", hide_env_values = true)]
    password: Option<String>,

    /// http or https
    #[arg(long, global = true, env = "ZOWE_OPT_PROTOCOL")]
    protocol: Option<String>,

    #[arg(long, global = true, env = "ZOWE_OPT_BASE_PATH")]
    base_path: Option<String>,

    /// Accept self-signed server certificates
    #[arg(long, global = true)]
    insecure: bool,
}

impl ConnectionArgs {
    fn to_profile(&self) -> Profile {
        let mut profile = Profile::new("cli", self.profile_type.clone());
        if let Some(host) = &self.host {
            profile.set("host", host.clone());
        }
        if let Some(port) = self.port {
            profile.set("port", port);
        }
        if let Some(user) = &self.user {
            profile.set("user", user.clone());
        }
        if let Some(password) = &self.password {
            profile.set("password", password.clone());
        }
        if let Some(protocol) = &self.protocol {
            profile.set("protocol", protocol.clone());
        }
        if let Some(base_path) = &self.base_path {
            profile.set("basePath", base_path.clone());
        }
        profile.set("rejectUnauthorized", !self.insecure);
        profile
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum CapabilityArg {
    Uss,
    Mvs,
    Jes,
}

impl From<CapabilityArg> for Capability {
    fn from(arg: CapabilityArg) -> Self {
        match arg {
            CapabilityArg::Uss => Capability::Uss,
            CapabilityArg::Mvs => Capability::Mvs,
            CapabilityArg::Jes => Capability::Jes,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List registered profile types
    Types {
        /// Only list types for one capability
        #[arg(long, value_enum)]
        capability: Option<CapabilityArg>,
    },

    /// List a USS directory
    UssLs {
        #[arg(value_name = "PATH")]
        path: String,
    },

    /// Print a USS file
    UssCat {
        #[arg(value_name = "PATH")]
        path: String,

        #[arg(long)]
        binary: bool,
    },

    /// List data sets matching a pattern
    DsLs {
        #[arg(value_name = "PATTERN")]
        pattern: String,
    },

    /// List the members of a partitioned data set
    Members {
        #[arg(value_name = "DSN")]
        dsn: String,
    },

    /// Print a data set or member
    DsCat {
        #[arg(value_name = "DSN")]
        dsn: String,

        #[arg(long)]
        binary: bool,
    },

    /// List jobs by owner and prefix
    Jobs {
        #[arg(long, default_value = "*")]
        owner: String,

        #[arg(long, default_value = "*")]
        prefix: String,
    },

    /// List or download the spool files of a job
    Spool {
        jobname: String,
        jobid: String,

        /// Write all spool files below this directory
        #[arg(long, value_name = "DIR")]
        download: Option<PathBuf>,
    },

    /// Submit JCL from a local file or a data set
    Submit {
        /// Local JCL file
        #[arg(value_name = "FILE", required_unless_present = "dataset")]
        file: Option<PathBuf>,

        /// Data set or member holding the JCL
        #[arg(long, value_name = "DSN", conflicts_with = "file")]
        dataset: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { "zowe_explorer_api=debug" } else { "zowe_explorer_api=info,warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = ExplorerConfig::load(cli.config.as_deref())?;
    let register = ApiRegister::with_config(&config);
    let profile = cli.connection.to_profile();

    match cli.command {
        Commands::Types { capability } => {
            let types = match capability {
                Some(capability) => register.registered_types(capability.into()),
                None => register.registered_api_types(),
            };
            print_json(&types)
        }
        Commands::UssLs { path } => {
            let uss = register.get_uss_api(&profile)?;
            print_json(&uss.file_list(&path).await?)
        }
        Commands::UssCat { path, binary } => {
            let uss = register.get_uss_api(&profile)?;
            write_stdout(&uss.get_contents(&path, binary).await?)
        }
        Commands::DsLs { pattern } => {
            let mvs = register.get_mvs_api(&profile)?;
            print_json(&mvs.data_set(&pattern).await?)
        }
        Commands::Members { dsn } => {
            let mvs = register.get_mvs_api(&profile)?;
            print_json(&mvs.all_members(&dsn).await?)
        }
        Commands::DsCat { dsn, binary } => {
            let mvs = register.get_mvs_api(&profile)?;
            write_stdout(&mvs.get_contents(&dsn, binary).await?)
        }
        Commands::Jobs { owner, prefix } => {
            let jes = register.get_jes_api(&profile)?;
            print_json(&jes.get_jobs_by_owner_and_prefix(&owner, &prefix).await?)
        }
        Commands::Spool {
            jobname,
            jobid,
            download,
        } => {
            let jes = register.get_jes_api(&profile)?;
            match download {
                Some(dir) => {
                    let written = jes.download_spool_content(&jobname, &jobid, &dir).await?;
                    print_json(&written)
                }
                None => print_json(&jes.get_spool_files(&jobname, &jobid).await?),
            }
        }
        Commands::Submit { file, dataset } => {
            let jes = register.get_jes_api(&profile)?;
            let job = match (file, dataset) {
                (_, Some(dsn)) => jes.submit_job(&dsn).await?,
                (Some(file), None) => {
                    let jcl = std::fs::read_to_string(&file).into_diagnostic()?;
                    jes.submit_jcl(&jcl).await?
                }
                (None, None) => miette::bail!("either a JCL file or --dataset is required"),
            };
            print_json(&job)
        }
    }
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).into_diagnostic()?;
    println!("{json}");
    Ok(())
}

fn write_stdout(content: &[u8]) -> Result<()> {
    let mut stdout = std::io::stdout().lock();
    stdout.write_all(content).into_diagnostic()?;
    stdout.flush().into_diagnostic()
}
