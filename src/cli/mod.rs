// ============================================================
// Layer 1 — CLI / Presentation Layer
// ============================================================
// Entry point for all user interaction. This layer only routes:
// it wires the infra collaborators into the use cases and formats
// their results for the terminal. No selection logic lives here.
//
// Output format for `answer`, per question in input order:
//
//   QuestionID: <id>
//   Answer: <text>
//   <blank line>
//
// Reference: Rust Book §7 (Modules), §12 (CLI programs)

pub mod commands;

use anyhow::Result;
use clap::Parser;
use std::path::Path;

use commands::{AnswerArgs, Commands, InspectArgs};

/// The main CLI struct — clap reads the fields and generates the
/// argument parsing code via the Parser derive macro.
#[derive(Parser, Debug)]
#[command(
    name = "story-qa",
    version,
    about = "Answer natural-language questions about short narrative stories."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Match on the subcommand and dispatch to the correct use case.
    pub fn run(self) -> Result<()> {
        match self.command {
            Commands::Answer(args)  => run_answer(args),
            Commands::Inspect(args) => run_inspect(args),
        }
    }
}

fn run_answer(args: AnswerArgs) -> Result<()> {
    use crate::application::answer_use_case::AnswerUseCase;
    use crate::infra::annotator::BasicAnnotator;
    use crate::infra::thesaurus::FileThesaurus;

    let thesaurus = match &args.thesaurus {
        Some(path) => FileThesaurus::from_path(Path::new(path))?,
        None       => FileThesaurus::empty(),
    };

    tracing::info!("answering manifest '{}'", args.input);

    let use_case = AnswerUseCase::new(
        Box::new(BasicAnnotator::new()),
        Box::new(thesaurus),
    );
    let responses = use_case.execute(Path::new(&args.input))?;

    for response in responses {
        println!("QuestionID: {}", response.question_id);
        println!("Answer: {}\n", response.answer);
    }
    Ok(())
}

fn run_inspect(args: InspectArgs) -> Result<()> {
    use crate::application::inspect_use_case::InspectUseCase;
    use crate::infra::annotator::BasicAnnotator;

    let use_case = InspectUseCase::new(Box::new(BasicAnnotator::new()));
    let report = use_case.execute(Path::new(&args.input))?;
    print!("{report}");
    Ok(())
}
