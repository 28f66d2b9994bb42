use std::path::PathBuf;

use mangadex::{
    chapters::{LanguageFilter, SortOrder},
    query::MangaOrder,
};

/// Chapter groups per page when neither the command line nor the config says.
pub const DEFAULT_PAGE_SIZE: usize = 20;
pub const MAX_PAGE_SIZE: usize = 100;

#[derive(clap::Parser, Debug)]
#[command(version, about = "Read manga from MangaDex in the terminal")]
pub struct Cli {
    /// Path to the config file.
    #[arg(long, env = "MANGASHELF_TOML", global = true)]
    pub config: Option<PathBuf>,

    /// Don't read or write the reading history.
    #[arg(long, global = true)]
    pub no_history: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(clap::Subcommand, Debug)]
pub enum Command {
    /// List or search manga.
    Browse {
        /// Title to search for.
        query: Option<String>,

        /// popular, latest, new, rating or relevance.
        #[arg(long, default_value = "popular")]
        order: MangaOrder,

        #[arg(long, default_value_t = 1)]
        page: usize,

        /// Only manga with chapters in this language.
        #[arg(long)]
        lang: Option<String>,
    },

    /// Show a manga's details.
    Manga { id: String },

    /// List a manga's chapters, grouped by chapter number.
    Chapters {
        id: String,

        /// A language code, or "all". Defaults to `reader.language`.
        #[arg(long)]
        lang: Option<String>,

        /// Match against chapter number, title or volume.
        #[arg(long)]
        search: Option<String>,

        /// Scanlation group id or name.
        #[arg(long)]
        group: Option<String>,

        #[arg(long, default_value = "desc")]
        order: SortOrder,

        #[arg(long, default_value_t = 1)]
        page: usize,

        /// Defaults to `reader.page_size`.
        #[arg(long)]
        page_size: Option<usize>,
    },

    /// Print a chapter's page image URLs and record it in the history.
    Read {
        chapter_id: String,

        /// Smaller, compressed images.
        #[arg(long)]
        data_saver: bool,
    },

    /// Show the reading history, newest first.
    History {
        /// Remove this manga from the history.
        #[arg(long, conflicts_with = "clear")]
        remove: Option<String>,

        #[arg(long)]
        clear: bool,
    },

    /// Create an account; a one-time password is emailed for `verify`.
    Register {
        username: String,
        email: String,

        #[arg(long, env = "MANGASHELF_PASSWORD")]
        password: String,
    },

    /// Verify an email address with the one-time password.
    Verify { email: String, otp: String },

    /// Email a new one-time password.
    ResendOtp { email: String },

    Login {
        email: String,

        #[arg(long, env = "MANGASHELF_PASSWORD")]
        password: String,
    },

    Logout,

    Profile,

    Follow { manga_id: String },

    Unfollow { manga_id: String },

    /// List followed manga.
    Follows,

    /// Apply to become a translator.
    ApplyTranslator {
        #[arg(long)]
        reason: String,

        /// Languages you translate into, comma separated.
        #[arg(long, value_delimiter = ',', required = true)]
        languages: Vec<String>,

        #[arg(long)]
        experience: Option<String>,

        #[arg(long)]
        portfolio_url: Option<url::Url>,
    },

    /// Print the effective config.
    Config,
}

/// Pages are 1-based.
pub fn clamp_page(page: usize) -> usize {
    page.max(1)
}

pub fn clamp_page_size(size: usize) -> usize {
    size.clamp(1, MAX_PAGE_SIZE)
}

/// MangaDex language codes are lowercase, so `VI` reads as `vi`.
pub fn language(raw: &str) -> LanguageFilter {
    match raw.to_ascii_lowercase().parse() {
        Ok(language) => language,
        Err(never) => match never {},
    }
}
