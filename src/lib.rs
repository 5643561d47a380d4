// ============================================================
// story-qa — sentence-selection question answering
// ============================================================
// Answers natural-language questions about short narrative texts
// by selecting the single story sentence (or entity span within
// it) that best answers each question.
//
// Layer map:
//   cli          — argument parsing and terminal output
//   application  — batch workflows (answer, inspect)
//   domain       — stories, questions, annotations, trait seams
//   data         — corpus file formats and loading
//   engine       — classification, scoring, ranking, extraction
//   infra        — stand-in annotator, file-backed thesaurus

pub mod application;
pub mod cli;
pub mod data;
pub mod domain;
pub mod engine;
pub mod infra;
