use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use webgallery::auth::{CredentialStore, Session};
use webgallery::config::AppConfig;
use webgallery::generate::{self, GalleryRequest};
use webgallery::probe::LoftyProbe;
use webgallery::types::{parse_actions, parse_fields};
use webgallery::{browser, output, select};

/// Login flags shared by commands that need a session.
#[derive(clap::Args, Clone)]
struct LoginArgs {
    /// Username
    #[arg(long)]
    user: String,

    /// Password
    #[arg(long)]
    password: String,
}

/// Flags for commands that take a media selection.
#[derive(clap::Args, Clone)]
struct SelectArgs {
    /// Media files or folders (mp3, mp4, wav, webm). Defaults to the last folder.
    paths: Vec<PathBuf>,

    /// Descend into subfolders
    #[arg(long)]
    recursive: bool,
}

#[derive(Parser)]
#[command(name = "webgallery")]
#[command(about = "Generate an HTML media player page from local files")]
#[command(long_about = "\
Generate an HTML media player page from local files

Pick audio and video files, choose which details and buttons each item
shows, and get one self-contained page with a small JavaScript player.

  webgallery register --user alice --password secret
  webgallery generate --user alice --password secret \\
      --field duration,path --action Play,Pause,Like ~/Music/set

Fields:  duration, path
Actions: Play, Pause, Download, Like
Unrecognized names are ignored. Items always render fields and buttons in
the order listed above.

Pages are written to <output>/gallery_<unix-seconds>.html and opened in the
default browser.")]
#[command(version)]
struct Cli {
    /// Settings file (remembers the last folder)
    #[arg(long, default_value = "config.json", global = true)]
    config: PathBuf,

    /// Credential file
    #[arg(long, default_value = "users.json", global = true)]
    users: PathBuf,

    /// Output directory for generated pages
    #[arg(long, default_value = "output", global = true)]
    output: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Add a user (or change an existing user's password)
    Register(LoginArgs),
    /// List the media selection and remember its folder
    Select(SelectArgs),
    /// Log in, select media, and write a gallery page
    Generate {
        #[command(flatten)]
        login: LoginArgs,

        #[command(flatten)]
        selection: SelectArgs,

        /// Metadata lines to show per item (duration, path)
        #[arg(long = "field", value_delimiter = ',')]
        fields: Vec<String>,

        /// Buttons to show per item (Play, Pause, Download, Like)
        #[arg(long = "action", value_delimiter = ',')]
        actions: Vec<String>,

        /// Do not open the page after writing it
        #[arg(long)]
        no_open: bool,
    },
    /// Open the output directory
    OpenOutput,
    /// Show the remembered folder
    Status,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Command::Register(login) => {
            let mut store = CredentialStore::load(&cli.users);
            store.register(&login.user, &login.password)?;
            output::print_registered(&login.user);
        }
        Command::Select(selection) => {
            let mut config = AppConfig::load(&cli.config);
            let files = select_media(&selection, &mut config, &cli.config)?;
            output::print_selection(&files);
        }
        Command::Generate {
            login,
            selection,
            fields,
            actions,
            no_open,
        } => {
            let session = login_session(&cli.users, &login)?;
            let mut config = AppConfig::load(&cli.config);
            let files = select_media(&selection, &mut config, &cli.config)?;

            // The page lives in the output directory, so relative sources
            // would resolve against the wrong folder.
            let request = GalleryRequest::new(
                files
                    .iter()
                    .map(|f| std::path::absolute(f).unwrap_or_else(|_| f.clone()))
                    .map(|f| f.to_string_lossy().into_owned())
                    .collect(),
                parse_fields(&fields),
                parse_actions(&actions),
            );
            let saved = generate::build_gallery(
                &session,
                &request,
                &cli.output,
                &LoftyProbe,
                generate::unix_timestamp(),
            )?;
            output::print_generate_output(&session, &request, &saved);

            if !no_open {
                open_or_warn(&saved);
            }
        }
        Command::OpenOutput => {
            std::fs::create_dir_all(&cli.output)?;
            browser::open_path(&cli.output)?;
        }
        Command::Status => {
            let config = AppConfig::load(&cli.config);
            output::print_last_folder(config.last_dir.as_deref());
        }
    }

    Ok(())
}

fn login_session(users: &Path, login: &LoginArgs) -> Result<Session, Box<dyn std::error::Error>> {
    let store = CredentialStore::load(users);
    Ok(store.authenticate(&login.user, &login.password)?)
}

/// Resolve the selection, browsing the last folder when no paths are given.
///
/// A non-empty selection updates `last_dir` and rewrites the config file.
fn select_media(
    selection: &SelectArgs,
    config: &mut AppConfig,
    config_path: &Path,
) -> Result<Vec<PathBuf>, Box<dyn std::error::Error>> {
    let inputs = if selection.paths.is_empty() {
        let dir = config.browse_dir();
        output::print_last_folder(Some(&*dir.to_string_lossy()));
        vec![dir]
    } else {
        selection.paths.clone()
    };

    let files = select::select_files(&inputs, selection.recursive)?;
    if let Some(first) = files.first() {
        config.remember_selection(first);
        config.save(config_path)?;
    }
    Ok(files)
}

/// A page that was written but could not be opened is still a success.
fn open_or_warn(path: &Path) {
    if let Err(e) = browser::open_path(path) {
        eprintln!("Warning: could not open {}: {}", path.display(), e);
    }
}
