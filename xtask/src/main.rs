use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{exit, Command};

use clap::{Parser, Subcommand, ValueEnum};
use zip::write::FileOptions;
use zip::{CompressionMethod, ZipWriter};

const LAMBDA_PACKAGE: &str = "eb_update_lambda";
const DEFAULT_TARGET: &str = "x86_64-unknown-linux-gnu";

struct LambdaArtifact {
    bin: &'static str,
    zip: &'static str,
}

const ARTIFACTS: [LambdaArtifact; 2] = [
    LambdaArtifact {
        bin: "on_event_lambda",
        zip: "on_event.zip",
    },
    LambdaArtifact {
        bin: "is_complete_lambda",
        zip: "is_complete.zip",
    },
];

#[derive(Parser)]
#[command(
    name = "xtask",
    about = "Build, check and package the Elastic Beanstalk update custom resource"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// fmt, clippy and the workspace tests
    Check,
    /// Build both Lambda binaries and zip each as a `bootstrap` artifact
    Package {
        /// Compilation target triple for Lambda binaries
        #[arg(long, env = "LAMBDA_TARGET", default_value = DEFAULT_TARGET)]
        target: String,
        /// Build profile used for binaries
        #[arg(value_enum, long, default_value_t = Profile::Release)]
        profile: Profile,
        /// Directory receiving the zip files
        #[arg(long, default_value = "dist")]
        out_dir: PathBuf,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Profile {
    Debug,
    Release,
}

impl Profile {
    fn target_subdir(self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Release => "release",
        }
    }
}

fn cargo(args: &[&str]) -> Result<(), String> {
    eprintln!("+ cargo {}", args.join(" "));
    let status = Command::new("cargo")
        .args(args)
        .status()
        .map_err(|error| format!("failed to execute cargo: {error}"))?;
    if status.success() {
        Ok(())
    } else {
        Err(format!("cargo {} exited with {status}", args[0]))
    }
}

fn check() -> Result<(), String> {
    cargo(&["fmt", "--all", "--", "--check"])?;
    cargo(&["clippy", "--workspace", "--all-targets", "--", "-D", "warnings"])?;
    cargo(&["test", "--workspace"])
}

fn package(target: &str, profile: Profile, out_dir: &Path) -> Result<(), String> {
    let mut args = vec!["build", "-p", LAMBDA_PACKAGE, "--target", target];
    for artifact in &ARTIFACTS {
        args.extend(["--bin", artifact.bin]);
    }
    if let Profile::Release = profile {
        args.push("--release");
    }
    cargo(&args)?;

    fs::create_dir_all(out_dir)
        .map_err(|error| format!("failed to create {}: {error}", out_dir.display()))?;
    let build_dir = Path::new("target").join(target).join(profile.target_subdir());
    for artifact in &ARTIFACTS {
        let zip_path = out_dir.join(artifact.zip);
        write_bootstrap_zip(&build_dir.join(artifact.bin), &zip_path)?;
        eprintln!("packaged {}", zip_path.display());
    }
    Ok(())
}

/// Lambda's `provided` runtimes execute the archive entry named `bootstrap`.
fn write_bootstrap_zip(binary_path: &Path, zip_path: &Path) -> Result<(), String> {
    let binary = fs::read(binary_path)
        .map_err(|error| format!("failed to read {}: {error}", binary_path.display()))?;
    let file = fs::File::create(zip_path)
        .map_err(|error| format!("failed to create {}: {error}", zip_path.display()))?;

    let mut zip = ZipWriter::new(file);
    let options = FileOptions::default()
        .compression_method(CompressionMethod::Deflated)
        .unix_permissions(0o755);
    zip.start_file("bootstrap", options)
        .map_err(|error| format!("failed to start bootstrap entry: {error}"))?;
    zip.write_all(&binary)
        .map_err(|error| format!("failed to write bootstrap entry: {error}"))?;
    zip.finish()
        .map_err(|error| format!("failed to finish {}: {error}", zip_path.display()))?;
    Ok(())
}

fn main() {
    let result = match Cli::parse().command {
        Commands::Check => check(),
        Commands::Package {
            target,
            profile,
            out_dir,
        } => package(&target, profile, &out_dir),
    };

    if let Err(message) = result {
        eprintln!("xtask failed: {message}");
        exit(1);
    }
}
