// ============================================================
// Layer 1 — CLI Commands and Arguments
// ============================================================
// Defines the two subcommands, `answer` and `inspect`, and their
// flags. clap's derive macros generate the help text, the error
// messages for missing arguments, and the type conversions.
//
// Reference: Rust Book §12 (Building a CLI Program)

use clap::{Args, Subcommand};

/// The top-level subcommands available to the user.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Answer every question in a run manifest
    Answer(AnswerArgs),

    /// Print what the loader and classifier made of a corpus
    Inspect(InspectArgs),
}

/// Arguments for the `answer` command.
#[derive(Args, Debug)]
pub struct AnswerArgs {
    /// Run manifest: line 1 is the corpus base directory,
    /// each further line one story basename
    pub input: String,

    /// Optional synonym lexicon (tab-separated: lemma<TAB>syn,syn)
    #[arg(long)]
    pub thesaurus: Option<String>,
}

/// Arguments for the `inspect` command.
#[derive(Args, Debug)]
pub struct InspectArgs {
    /// Run manifest to inspect
    pub input: String,
}
