use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "ssacl")]
#[command(version)]
#[command(about = "Manage IBM Spectrum Scale ACLs", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Set the logging level (debug, info, warn, error)
    #[arg(short, long, global = true)]
    pub log_level: Option<String>,

    /// Configuration file layered over the built-in defaults
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Report each vendor-tool invocation
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Log encoded ACL payloads
    #[arg(short, long, global = true)]
    pub debug: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the ACL of a file or directory
    Get {
        /// File or directory to read
        path: String,

        /// Fetch the default ACL instead of the access ACL
        #[arg(long)]
        default: bool,

        /// Emit the record as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the permissions a group holds on a path
    CheckGroup {
        path: String,

        /// Group name to look up
        group: String,
    },

    /// Grant a group the given permissions on a path
    SetGroup {
        path: String,

        /// Group name to grant
        group: String,

        /// 4-character permission string, e.g. rw-c
        perms: String,

        /// Print the mmputacl invocation instead of running it
        #[arg(short = 'n', long)]
        dry_run: bool,
    },

    /// Replace the mask entry on a path
    SetMask {
        path: String,

        /// 4-character mask string, e.g. rwx-
        mask: String,

        /// Print the mmputacl invocation instead of running it
        #[arg(short = 'n', long)]
        dry_run: bool,
    },
}

pub async fn cli_match() -> utils::error::Result<()> {
    let cli = Cli::parse();

    if let Some(config) = &cli.config {
        utils::app_config::AppConfig::merge_config(Some(std::path::Path::new(config)))?;
    }

    if let Some(level) = &cli.log_level {
        utils::app_config::AppConfig::set("log.level", level)?;
    }

    // Execute the subcommand
    match &cli.command {
        Commands::Get {
            path,
            default,
            json,
        } => commands::get_cmd(path.clone(), *default, *json).await?,
        Commands::CheckGroup { path, group } => {
            commands::check_group_cmd(path.clone(), group.clone()).await?
        }
        Commands::SetGroup {
            path,
            group,
            perms,
            dry_run,
        } => {
            commands::set_group_cmd(
                path.clone(),
                group.clone(),
                perms.clone(),
                *dry_run,
                cli.verbose,
                cli.debug,
            )
            .await?
        }
        Commands::SetMask {
            path,
            mask,
            dry_run,
        } => {
            commands::set_mask_cmd(path.clone(), mask.clone(), *dry_run, cli.verbose, cli.debug)
                .await?
        }
    }

    Ok(())
}
